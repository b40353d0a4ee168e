//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the engine world and
//! accessed by systems during execution.
//!
//! Overview
//! - `canvas` – RGBA drawing surface, paths and colors
//! - `engineconfig` – INI-backed timer, probability and greeting settings
//! - `enginestate` – whether the frame step is enabled
//! - `palette` – accent and vibrant color palettes
//! - `randomsource` – shared seeded random generator
//! - `screensize` – logical surface size and device pixel ratio
//! - `worldtime` – simulation time and delta
pub mod canvas;
pub mod engineconfig;
pub mod enginestate;
pub mod palette;
pub mod randomsource;
pub mod screensize;
pub mod worldtime;
