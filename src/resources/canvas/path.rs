//! Vector paths flattened to polylines.
//!
//! A [`Path`] is a list of subpaths, each a polyline in the caller's local
//! coordinate space. Curves are flattened eagerly when they are appended, so
//! filling only ever deals with straight edges.

use glam::Vec2;
use std::f32::consts::TAU;

const QUAD_SEGMENTS: usize = 10;
const CUBIC_SEGMENTS: usize = 16;
const ELLIPSE_SEGMENTS: usize = 28;

/// A flattened 2D path made of one or more subpaths.
#[derive(Debug, Clone, Default)]
pub struct Path {
    subpaths: Vec<Vec<Vec2>>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new subpath at `p`.
    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        self.subpaths.push(vec![p]);
        self
    }

    /// Append a straight segment. Starts a subpath if none is open.
    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        match self.subpaths.last_mut() {
            Some(sub) => sub.push(p),
            None => self.subpaths.push(vec![p]),
        }
        self
    }

    /// Append a quadratic Bézier from the current point through `ctrl` to `to`.
    pub fn quad_to(&mut self, ctrl: Vec2, to: Vec2) -> &mut Self {
        let from = self.current_point().unwrap_or(ctrl);
        for i in 1..=QUAD_SEGMENTS {
            let t = i as f32 / QUAD_SEGMENTS as f32;
            let mt = 1.0 - t;
            let p = from * (mt * mt) + ctrl * (2.0 * mt * t) + to * (t * t);
            self.line_to(p);
        }
        self
    }

    /// Append a cubic Bézier from the current point to `to`.
    pub fn cubic_to(&mut self, c1: Vec2, c2: Vec2, to: Vec2) -> &mut Self {
        let from = self.current_point().unwrap_or(c1);
        for i in 1..=CUBIC_SEGMENTS {
            let t = i as f32 / CUBIC_SEGMENTS as f32;
            let mt = 1.0 - t;
            let p = from * (mt * mt * mt)
                + c1 * (3.0 * mt * mt * t)
                + c2 * (3.0 * mt * t * t)
                + to * (t * t * t);
            self.line_to(p);
        }
        self
    }

    /// Close the current subpath by returning to its first point.
    pub fn close(&mut self) -> &mut Self {
        if let Some(sub) = self.subpaths.last_mut() {
            let first = sub[0];
            if sub.last() != Some(&first) {
                sub.push(first);
            }
        }
        self
    }

    /// Append a closed ellipse centred at `center`, rotated by `rotation` radians.
    pub fn ellipse(&mut self, center: Vec2, radii: Vec2, rotation: f32) -> &mut Self {
        let (sin_r, cos_r) = rotation.sin_cos();
        let point = |a: f32| {
            let local = Vec2::new(a.cos() * radii.x, a.sin() * radii.y);
            center
                + Vec2::new(
                    local.x * cos_r - local.y * sin_r,
                    local.x * sin_r + local.y * cos_r,
                )
        };
        self.move_to(point(0.0));
        for i in 1..ELLIPSE_SEGMENTS {
            self.line_to(point(TAU * i as f32 / ELLIPSE_SEGMENTS as f32));
        }
        self.close()
    }

    /// Convenience: a closed circle.
    pub fn circle(center: Vec2, radius: f32) -> Self {
        let mut path = Self::new();
        path.ellipse(center, Vec2::splat(radius), 0.0);
        path
    }

    /// Convenience: an axis-aligned rectangle.
    pub fn rect(origin: Vec2, size: Vec2) -> Self {
        let mut path = Self::new();
        path.move_to(origin)
            .line_to(origin + Vec2::new(size.x, 0.0))
            .line_to(origin + size)
            .line_to(origin + Vec2::new(0.0, size.y))
            .close();
        path
    }

    pub fn current_point(&self) -> Option<Vec2> {
        self.subpaths.last().and_then(|sub| sub.last().copied())
    }

    pub fn subpaths(&self) -> &[Vec<Vec2>] {
        &self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|sub| sub.len() < 2)
    }
}
