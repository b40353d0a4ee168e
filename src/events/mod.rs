//! Event types and observers used by the engine.
//!
//! Events provide a decoupled way for front-ends and systems to ask the
//! engine for work without holding references into the world.
//!
//! Submodules:
//! - [`bigburst`] – on-demand large burst at the surface center
//! - [`spawntimer`] – periodic spawn timer expirations
pub mod bigburst;
pub mod spawntimer;
