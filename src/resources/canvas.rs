//! Software drawing surface resource.
//!
//! The [`Canvas`] owns an RGBA8 pixel buffer sized to the viewport multiplied
//! by the device pixel ratio. Drawing calls take logical coordinates; the base
//! transform scales them by the pixel ratio, and callers can stack further
//! translations and rotations with [`Canvas::save`] / [`Canvas::restore`],
//! the same way a 2D immediate-mode context works.
//!
//! # Rasterization
//!
//! - Paths are flattened (see [`path`]) and filled with the non-zero winding
//!   rule, sampling each pixel at its centre.
//! - Axis-aligned rectangles use exact area coverage so sub-pixel stars and
//!   sparkles still show up as faint dots.
//! - Blending is source-over with straight alpha.
//!
//! # Related
//!
//! - [`crate::systems::render::render_system`] – draws every population here
//! - [`crate::engine::Engine::canvas`] – read access for front-ends

pub mod color;
pub mod path;

use bevy_ecs::prelude::Resource;
use glam::{Affine2, Vec2};
use smallvec::SmallVec;

pub use color::Color;
pub use path::Path;

#[derive(Debug, Clone, Copy)]
struct DrawState {
    transform: Affine2,
    alpha: f32,
}

#[derive(Debug, Clone, Copy)]
struct Edge {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    winding: i32,
}

/// RGBA8 drawing surface with a logical size and a device pixel ratio.
#[derive(Resource, Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    dpr: f32,
    pixel_width: usize,
    pixel_height: usize,
    pixels: Vec<u8>,
    state: DrawState,
    stack: Vec<DrawState>,
}

fn sanitize_dpr(dpr: f32) -> f32 {
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}

fn physical_size(width: u32, height: u32, dpr: f32) -> (usize, usize) {
    (
        (width as f32 * dpr).round() as usize,
        (height as f32 * dpr).round() as usize,
    )
}

impl Canvas {
    /// Create a transparent canvas.
    ///
    /// Returns `None` when the surface would have no pixels, which callers
    /// treat as "no drawing surface available".
    pub fn new(width: u32, height: u32, dpr: f32) -> Option<Self> {
        let dpr = sanitize_dpr(dpr);
        let (pixel_width, pixel_height) = physical_size(width, height, dpr);
        if pixel_width == 0 || pixel_height == 0 {
            return None;
        }
        Some(Self {
            width,
            height,
            dpr,
            pixel_width,
            pixel_height,
            pixels: vec![0; pixel_width * pixel_height * 4],
            state: DrawState {
                transform: Affine2::from_scale(Vec2::splat(dpr)),
                alpha: 1.0,
            },
            stack: Vec::new(),
        })
    }

    /// Resize and rescale the backing buffer. Contents are discarded.
    ///
    /// Returns `false` (leaving the canvas untouched) if the new size has no pixels.
    pub fn resize(&mut self, width: u32, height: u32, dpr: f32) -> bool {
        match Canvas::new(width, height, dpr) {
            Some(resized) => {
                *self = resized;
                true
            }
            None => false,
        }
    }

    /// Logical width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical height.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dpr(&self) -> f32 {
        self.dpr
    }

    /// Backing buffer size in physical pixels.
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.pixel_width, self.pixel_height)
    }

    /// Raw RGBA8 bytes, row-major, `pixel_width * pixel_height * 4` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Read one physical pixel.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.pixel_width || y >= self.pixel_height {
            return None;
        }
        let i = (y * self.pixel_width + x) * 4;
        Some(Color::new(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ))
    }

    /// True when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixels.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Clear to transparent and reset the transform stack.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
        self.stack.clear();
        self.state = DrawState {
            transform: Affine2::from_scale(Vec2::splat(self.dpr)),
            alpha: 1.0,
        };
    }

    pub fn save(&mut self) {
        self.stack.push(self.state);
    }

    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.state.transform = self.state.transform * Affine2::from_translation(offset);
    }

    pub fn rotate(&mut self, radians: f32) {
        self.state.transform = self.state.transform * Affine2::from_angle(radians);
    }

    /// Set the global alpha applied to every subsequent draw (clamped to 0..1).
    pub fn set_alpha(&mut self, alpha: f32) {
        self.state.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Fill an axis-aligned rectangle in logical coordinates.
    pub fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        let m = self.state.transform.matrix2;
        if m.x_axis.y != 0.0 || m.y_axis.x != 0.0 {
            self.fill_path(&Path::rect(origin, size), color);
            return;
        }
        let alpha = self.effective_alpha(color);
        if alpha <= 0.0 {
            return;
        }
        let a = self.state.transform.transform_point2(origin);
        let b = self.state.transform.transform_point2(origin + size);
        let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
        let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));

        let col_start = x0.floor().max(0.0) as usize;
        let col_end = (x1.ceil().max(0.0) as usize).min(self.pixel_width);
        let row_start = y0.floor().max(0.0) as usize;
        let row_end = (y1.ceil().max(0.0) as usize).min(self.pixel_height);

        for py in row_start..row_end {
            let cover_y = (y1.min(py as f32 + 1.0) - y0.max(py as f32)).max(0.0);
            for px in col_start..col_end {
                let cover_x = (x1.min(px as f32 + 1.0) - x0.max(px as f32)).max(0.0);
                self.blend(px, py, color, alpha * cover_x * cover_y);
            }
        }
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.fill_path(&Path::circle(center, radius), color);
    }

    /// Stroke a polyline with butt caps. Overlapping segments are painted once.
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color) {
        let half = width * 0.5;
        let mut path = Path::new();
        for seg in points.windows(2) {
            let dir = seg[1] - seg[0];
            if dir.length_squared() <= f32::EPSILON {
                continue;
            }
            let n = dir.normalize().perp() * half;
            path.move_to(seg[0] + n)
                .line_to(seg[1] + n)
                .line_to(seg[1] - n)
                .line_to(seg[0] - n)
                .close();
        }
        self.fill_path(&path, color);
    }

    /// Fill a path with the non-zero winding rule.
    pub fn fill_path(&mut self, path: &Path, color: Color) {
        let alpha = self.effective_alpha(color);
        if alpha <= 0.0 || path.is_empty() {
            return;
        }

        let mut edges: Vec<Edge> = Vec::new();
        let mut min_y = f32::MAX;
        let mut max_y = f32::MIN;
        for sub in path.subpaths() {
            if sub.len() < 2 {
                continue;
            }
            let pts: SmallVec<[Vec2; 32]> = sub
                .iter()
                .map(|p| self.state.transform.transform_point2(*p))
                .collect();
            for i in 0..pts.len() {
                let a = pts[i];
                let b = pts[(i + 1) % pts.len()];
                if a.y == b.y || !a.is_finite() || !b.is_finite() {
                    continue;
                }
                min_y = min_y.min(a.y.min(b.y));
                max_y = max_y.max(a.y.max(b.y));
                edges.push(if a.y < b.y {
                    Edge { x0: a.x, y0: a.y, x1: b.x, y1: b.y, winding: 1 }
                } else {
                    Edge { x0: b.x, y0: b.y, x1: a.x, y1: a.y, winding: -1 }
                });
            }
        }
        if edges.is_empty() {
            return;
        }

        let row_start = min_y.floor().max(0.0) as usize;
        let row_end = (max_y.ceil().max(0.0) as usize).min(self.pixel_height);
        let mut crossings: SmallVec<[(f32, i32); 8]> = SmallVec::new();

        for py in row_start..row_end {
            let yc = py as f32 + 0.5;
            crossings.clear();
            for e in &edges {
                if yc >= e.y0 && yc < e.y1 {
                    let x = e.x0 + (yc - e.y0) * (e.x1 - e.x0) / (e.y1 - e.y0);
                    crossings.push((x, e.winding));
                }
            }
            if crossings.len() < 2 {
                continue;
            }
            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            for i in 0..crossings.len() - 1 {
                winding += crossings[i].1;
                if winding == 0 {
                    continue;
                }
                let start = (crossings[i].0 - 0.5).ceil().max(0.0) as usize;
                let end = ((crossings[i + 1].0 - 0.5).ceil().max(0.0) as usize).min(self.pixel_width);
                for px in start..end {
                    self.blend(px, py, color, alpha);
                }
            }
        }
    }

    fn effective_alpha(&self, color: Color) -> f32 {
        color.a as f32 / 255.0 * self.state.alpha
    }

    fn blend(&mut self, x: usize, y: usize, color: Color, alpha: f32) {
        let sa = alpha.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let i = (y * self.pixel_width + x) * 4;
        let px = &mut self.pixels[i..i + 4];
        let da = px[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let src = [color.r, color.g, color.b];
        for c in 0..3 {
            let mixed = (src[c] as f32 * sa + px[c] as f32 * da * (1.0 - sa)) / out_a;
            px[c] = mixed.round().clamp(0.0, 255.0) as u8;
        }
        px[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: u32, h: u32) -> Canvas {
        Canvas::new(w, h, 1.0).expect("non-empty canvas")
    }

    #[test]
    fn test_zero_area_is_none() {
        assert!(Canvas::new(0, 100, 1.0).is_none());
        assert!(Canvas::new(100, 0, 2.0).is_none());
    }

    #[test]
    fn test_dpr_scales_backing_buffer() {
        let c = Canvas::new(100, 50, 2.0).unwrap();
        assert_eq!(c.pixel_size(), (200, 100));
        assert_eq!(c.as_bytes().len(), 200 * 100 * 4);
        assert_eq!(c.width(), 100);
    }

    #[test]
    fn test_invalid_dpr_falls_back_to_one() {
        let c = Canvas::new(10, 10, f32::NAN).unwrap();
        assert_eq!(c.dpr(), 1.0);
        let c = Canvas::new(10, 10, -3.0).unwrap();
        assert_eq!(c.pixel_size(), (10, 10));
    }

    #[test]
    fn test_new_canvas_is_blank() {
        assert!(canvas(8, 8).is_blank());
    }

    #[test]
    fn test_fill_rect_full_pixel() {
        let mut c = canvas(8, 8);
        c.fill_rect(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0), Color::WHITE);
        assert_eq!(c.pixel(2, 2), Some(Color::WHITE));
        assert_eq!(c.pixel(3, 3), Some(Color::WHITE));
        assert_eq!(c.pixel(4, 4), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_fill_rect_partial_coverage() {
        let mut c = canvas(4, 4);
        c.fill_rect(Vec2::new(1.0, 1.0), Vec2::new(0.5, 1.0), Color::WHITE);
        let px = c.pixel(1, 1).unwrap();
        assert_eq!(px.a, 128);
    }

    #[test]
    fn test_fill_rect_respects_dpr() {
        let mut c = Canvas::new(4, 4, 2.0).unwrap();
        c.fill_rect(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), Color::WHITE);
        assert_eq!(c.pixel(2, 2), Some(Color::WHITE));
        assert_eq!(c.pixel(3, 3), Some(Color::WHITE));
        assert_eq!(c.pixel(4, 4), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_fill_circle_covers_center_not_corner() {
        let mut c = canvas(20, 20);
        c.fill_circle(Vec2::new(10.0, 10.0), 5.0, Color::rgb(255, 0, 0));
        assert_eq!(c.pixel(10, 10), Some(Color::rgb(255, 0, 0)));
        assert_eq!(c.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(c.pixel(10, 17), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_global_alpha_blends() {
        let mut c = canvas(4, 4);
        c.set_alpha(0.5);
        c.fill_rect(Vec2::ZERO, Vec2::new(4.0, 4.0), Color::WHITE);
        assert_eq!(c.pixel(0, 0).unwrap().a, 128);
    }

    #[test]
    fn test_source_over_on_opaque_background() {
        let mut c = canvas(2, 2);
        c.fill_rect(Vec2::ZERO, Vec2::new(2.0, 2.0), Color::BLACK);
        c.set_alpha(0.5);
        c.fill_rect(Vec2::ZERO, Vec2::new(2.0, 2.0), Color::WHITE);
        let px = c.pixel(0, 0).unwrap();
        assert_eq!(px.a, 255);
        assert!((127..=128).contains(&px.r));
    }

    #[test]
    fn test_save_restore_transform() {
        let mut c = canvas(20, 20);
        c.save();
        c.translate(Vec2::new(10.0, 10.0));
        c.set_alpha(0.2);
        c.restore();
        c.fill_rect(Vec2::ZERO, Vec2::ONE, Color::WHITE);
        assert_eq!(c.pixel(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn test_rotated_rect_goes_through_path_fill() {
        let mut c = canvas(20, 20);
        c.translate(Vec2::new(10.0, 10.0));
        c.rotate(std::f32::consts::FRAC_PI_4);
        c.fill_rect(Vec2::new(-3.0, -3.0), Vec2::new(6.0, 6.0), Color::WHITE);
        assert_eq!(c.pixel(10, 10), Some(Color::WHITE));
        // the diamond's tip reaches about 4.2px above centre
        assert_eq!(c.pixel(10, 6), Some(Color::WHITE));
        assert_eq!(c.pixel(6, 6), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_stroke_polyline_overlap_painted_once() {
        let mut c = canvas(20, 20);
        c.set_alpha(0.5);
        c.stroke_polyline(
            &[Vec2::new(2.0, 10.0), Vec2::new(10.0, 10.0), Vec2::new(18.0, 10.0)],
            4.0,
            Color::WHITE,
        );
        assert_eq!(c.pixel(10, 10).unwrap().a, 128);
        assert_eq!(c.pixel(5, 10).unwrap().a, 128);
        assert_eq!(c.pixel(5, 14), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_clear_resets_pixels_and_state() {
        let mut c = canvas(4, 4);
        c.translate(Vec2::new(100.0, 0.0));
        c.clear();
        c.fill_rect(Vec2::ZERO, Vec2::ONE, Color::WHITE);
        assert_eq!(c.pixel(0, 0), Some(Color::WHITE));
        c.clear();
        assert!(c.is_blank());
    }

    #[test]
    fn test_resize() {
        let mut c = canvas(4, 4);
        assert!(c.resize(8, 2, 1.5));
        assert_eq!(c.pixel_size(), (12, 3));
        assert!(!c.resize(0, 2, 1.0));
        assert_eq!(c.width(), 8);
    }

    #[test]
    fn test_drawing_off_surface_is_clipped() {
        let mut c = canvas(4, 4);
        c.fill_rect(Vec2::new(-10.0, -10.0), Vec2::new(5.0, 5.0), Color::WHITE);
        c.fill_circle(Vec2::new(50.0, 50.0), 3.0, Color::WHITE);
        assert!(c.is_blank());
    }
}
