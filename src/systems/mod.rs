//! Engine systems.
//!
//! This module groups all ECS systems that advance and draw the sky, plus
//! the spawn helpers they share.
//!
//! Submodules overview
//! - [`cull`] – remove drifting entities that left the surface
//! - [`enginestate`] – run condition gating the frame schedule
//! - [`lifetime`] – despawn fragments and sparkles past their life
//! - [`motion`] – phases, gravity, integration, population paths, spin
//! - [`render`] – draw every population into the canvas
//! - [`rockets`] – detonate rockets into bursts
//! - [`spawn`] – spawn helpers for every population
//! - [`spawntimer`] – fire spawn timers and spawn on their events
//! - [`time`] – update simulation time and delta

pub mod cull;
pub mod enginestate;
pub mod lifetime;
pub mod motion;
pub mod render;
pub mod rockets;
pub mod spawn;
pub mod spawntimer;
pub mod time;
