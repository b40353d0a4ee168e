//! Skyburst library.
//!
//! An animated greeting sky: an ECS animation engine drawing fireworks,
//! petals, butterflies, birds, fireflies, stars and sparkles into a software
//! canvas, plus the greeting card model and the front-ends that present
//! them. Exposed as a library for the binary and for integration tests.

pub mod components;
pub mod engine;
pub mod error;
pub mod events;
pub mod greeting;
pub mod headless;
pub mod resources;
pub mod systems;
#[cfg(feature = "window")]
pub mod window;
