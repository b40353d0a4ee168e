//! Render system.
//!
//! Clears the [`Canvas`] and draws every population in a fixed back-to-front
//! order: stars, rockets, burst fragments, petals, butterflies, birds,
//! fireflies, sparkles. Shapes are built in a local frame centred on the
//! entity and placed with `translate`/`rotate`, mirroring how a 2D canvas
//! context is driven.

use bevy_ecs::prelude::*;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI};

use crate::components::bird::Bird;
use crate::components::butterfly::Butterfly;
use crate::components::firefly::Firefly;
use crate::components::fragment::{Fragment, FragmentShape};
use crate::components::lifetime::Lifetime;
use crate::components::mapposition::MapPosition;
use crate::components::oscillator::Oscillator;
use crate::components::petal::Petal;
use crate::components::rigidbody::RigidBody;
use crate::components::rocket::Rocket;
use crate::components::rotation::Rotation;
use crate::components::sparkle::Sparkle;
use crate::components::star::Star;
use crate::components::tint::Tint;
use crate::resources::canvas::{Canvas, Color, Path};
use crate::resources::palette::BUTTERFLY_BODY;
use crate::resources::worldtime::WorldTime;

const ROCKET_TRAIL_FRAMES: f32 = 10.0;
const ROCKET_TRAIL_WIDTH: f32 = 2.0;
const ROCKET_HEAD_RADIUS: f32 = 2.2;
const FIREFLY_RADIUS: f32 = 2.0;
const STAR_POINTS: usize = 5;

/// Heart outline of nominal size `s`, tip pointing down, notch at `(0, s/2)`.
pub fn heart_path(s: f32) -> Path {
    let top = s * 0.5;
    let mut path = Path::new();
    path.move_to(Vec2::new(0.0, top))
        .cubic_to(
            Vec2::new(s, -s * 0.2),
            Vec2::new(s * 1.2, s),
            Vec2::new(0.0, s * 1.6),
        )
        .cubic_to(
            Vec2::new(-s * 1.2, s),
            Vec2::new(-s, -s * 0.2),
            Vec2::new(0.0, top),
        )
        .close();
    path
}

/// Five-pointed star with the first tip straight up; inner radius is half the outer.
pub fn star_path(outer: f32) -> Path {
    let inner = outer * 0.5;
    let step = PI / STAR_POINTS as f32;
    let mut path = Path::new();
    path.move_to(Vec2::new(0.0, -outer));
    for i in 0..STAR_POINTS * 2 {
        let r = if i % 2 == 0 { outer } else { inner };
        let a = -FRAC_PI_2 + i as f32 * step;
        path.line_to(Vec2::new(a.cos() * r, a.sin() * r));
    }
    path.close();
    path
}

/// Leaf shape pointing up from the origin.
pub fn petal_path(size: f32) -> Path {
    let mut path = Path::new();
    path.move_to(Vec2::ZERO)
        .quad_to(Vec2::new(size * 0.8, -size * 0.4), Vec2::new(0.0, -size))
        .quad_to(Vec2::new(-size * 0.8, -size * 0.4), Vec2::ZERO)
        .close();
    path
}

fn draw_fragment(canvas: &mut Canvas, fragment: &Fragment, color: Color) {
    match fragment.shape {
        FragmentShape::Heart => canvas.fill_path(&heart_path(fragment.size * 0.6), color),
        FragmentShape::Star => canvas.fill_path(&star_path(fragment.size * 0.7), color),
        FragmentShape::Circle => canvas.fill_circle(Vec2::ZERO, fragment.size * 0.5, color),
    }
}

#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn render_system(
    canvas: Option<ResMut<Canvas>>,
    time: Res<WorldTime>,
    stars: Query<(&Star, &MapPosition, &Oscillator)>,
    rockets: Query<(&MapPosition, &RigidBody, &Tint), With<Rocket>>,
    fragments: Query<(&Fragment, &MapPosition, &Rotation, &Lifetime, &Tint)>,
    petals: Query<(&Petal, &MapPosition, &Rotation)>,
    butterflies: Query<(&MapPosition, &Oscillator, &Tint), With<Butterfly>>,
    birds: Query<(&MapPosition, &Oscillator, &Tint), With<Bird>>,
    fireflies: Query<(&MapPosition, &Oscillator, &Tint), With<Firefly>>,
    sparkles: Query<(&Sparkle, &MapPosition, &Lifetime)>,
) {
    let Some(mut canvas) = canvas else {
        return;
    };
    let canvas = &mut *canvas;
    let now = time.elapsed;
    canvas.clear();

    for (star, position, osc) in stars.iter() {
        canvas.save();
        canvas.set_alpha(star.brightness(osc.phase));
        canvas.fill_rect(position.pos, Vec2::splat(star.size), Color::WHITE);
        canvas.restore();
    }

    for (position, body, tint) in rockets.iter() {
        let tail = position.pos - body.velocity * ROCKET_TRAIL_FRAMES;
        canvas.stroke_polyline(&[tail, position.pos], ROCKET_TRAIL_WIDTH, tint.color);
        canvas.fill_circle(position.pos, ROCKET_HEAD_RADIUS, Color::WHITE);
    }

    for (fragment, position, rotation, lifetime, tint) in fragments.iter() {
        canvas.save();
        canvas.set_alpha(Fragment::alpha(lifetime.remaining_fraction(now)));
        canvas.translate(position.pos);
        canvas.rotate(rotation.radians);
        draw_fragment(canvas, fragment, tint.color);
        canvas.restore();
    }

    for (petal, position, rotation) in petals.iter() {
        canvas.save();
        canvas.translate(position.pos);
        canvas.rotate(rotation.radians);
        canvas.fill_path(&petal_path(petal.size), petal.color());
        canvas.restore();
    }

    for (position, osc, tint) in butterflies.iter() {
        let wing = Butterfly::wing(osc.phase);
        let radii = Vec2::new(wing, wing * 0.6);
        canvas.save();
        canvas.translate(position.pos);
        let mut left = Path::new();
        left.ellipse(Vec2::new(-5.0, 0.0), radii, FRAC_PI_6);
        canvas.fill_path(&left, tint.color);
        let mut right = Path::new();
        right.ellipse(Vec2::new(5.0, 0.0), radii, -FRAC_PI_6);
        canvas.fill_path(&right, tint.color);
        canvas.stroke_polyline(
            &[Vec2::new(-2.0, 0.0), Vec2::new(2.0, 0.0)],
            1.5,
            BUTTERFLY_BODY,
        );
        canvas.restore();
    }

    for (position, osc, tint) in birds.iter() {
        let span = Bird::span(osc.phase);
        let p = position.pos;
        canvas.stroke_polyline(
            &[
                Vec2::new(p.x - span, p.y),
                Vec2::new(p.x, p.y - 2.0),
                Vec2::new(p.x + span, p.y),
            ],
            1.2,
            tint.color,
        );
    }

    for (position, osc, tint) in fireflies.iter() {
        canvas.save();
        canvas.set_alpha(Firefly::brightness(osc.phase));
        canvas.fill_circle(position.pos, FIREFLY_RADIUS, tint.color);
        canvas.restore();
    }

    for (sparkle, position, lifetime) in sparkles.iter() {
        canvas.save();
        canvas.set_alpha(Sparkle::alpha(lifetime.remaining_fraction(now)));
        canvas.fill_rect(position.pos, Vec2::splat(sparkle.size), Color::WHITE);
        canvas.restore();
    }
}
