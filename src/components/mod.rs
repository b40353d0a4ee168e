//! ECS components for entities.
//!
//! This module groups all component types attached to population entities.
//! Generic components carry shared kinematic state; population components
//! tag an entity as a rocket, petal, star and so on and hold the few values
//! only that population needs.
//!
//! Submodules overview:
//! - [`bird`] – V-shaped bird silhouette
//! - [`butterfly`] – butterfly path amplitude and wing size
//! - [`cull`] – rule for removing entities that left the surface
//! - [`firefly`] – hovering glow
//! - [`fragment`] – burst fragment shape and size
//! - [`lifetime`] – birth time and life duration for fading entities
//! - [`mapposition`] – position in logical pixels
//! - [`oscillator`] – per-frame phase accumulator
//! - [`persistent`] – marker for entities that survive the engine being stopped
//! - [`petal`] – falling petal size and hue
//! - [`rigidbody`] – per-frame velocity and gravity
//! - [`rocket`] – rising rocket and its explosion height
//! - [`rotation`] – angle and spin
//! - [`spawntimer`] – periodic spawn trigger
//! - [`sparkle`] – short-lived twinkle
//! - [`star`] – background star
//! - [`tint`] – fill color

pub mod bird;
pub mod butterfly;
pub mod cull;
pub mod firefly;
pub mod fragment;
pub mod lifetime;
pub mod mapposition;
pub mod oscillator;
pub mod persistent;
pub mod petal;
pub mod rigidbody;
pub mod rocket;
pub mod rotation;
pub mod sparkle;
pub mod spawntimer;
pub mod star;
pub mod tint;
