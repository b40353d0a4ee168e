//! Headless front-end.
//!
//! Steps an [`Engine`] a fixed number of frames at a fixed `1/fps` delta,
//! optionally fires a big burst on a given frame, collects population
//! statistics, and can write the final canvas as a PNG.

use log::info;
use serde::Serialize;
use std::path::PathBuf;

use crate::engine::{Engine, PopulationCounts};
use crate::error::SnapshotError;
use crate::greeting::Card;
use crate::resources::canvas::Canvas;

#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub frames: u32,
    pub fps: u32,
    /// 1-based frame on which to trigger a big burst.
    pub burst_at: Option<u32>,
    pub snapshot: Option<PathBuf>,
    /// Record statistics every N frames (and on the last frame).
    pub stats_every: Option<u32>,
}

/// One statistics sample, emitted as a JSON line by the binary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameStats {
    pub frame: u32,
    pub elapsed: f32,
    #[serde(flatten)]
    pub counts: PopulationCounts,
    pub message: String,
}

/// Run the engine (and card) for `options.frames` frames.
///
/// The engine is started if it is not already running. Returns the collected
/// statistics samples.
pub fn run(
    engine: &mut Engine,
    card: &mut Card,
    options: &HeadlessOptions,
) -> Result<Vec<FrameStats>, SnapshotError> {
    let dt = 1.0 / options.fps.max(1) as f32;
    let mut stats = Vec::new();
    engine.start();

    for frame in 1..=options.frames {
        if options.burst_at == Some(frame) {
            info!("Big burst on frame {}", frame);
            engine.big_burst();
        }
        engine.frame(dt);
        card.update(dt);

        if let Some(every) = options.stats_every.filter(|n| *n > 0) {
            if frame % every == 0 || frame == options.frames {
                stats.push(FrameStats {
                    frame,
                    elapsed: engine.time().elapsed,
                    counts: engine.counts(),
                    message: card.message().to_string(),
                });
            }
        }
    }

    if let Some(path) = &options.snapshot {
        let canvas = engine.canvas().ok_or(SnapshotError::NoCanvas)?;
        write_snapshot(canvas, path)?;
        info!("Snapshot written to {}", path.display());
    }

    Ok(stats)
}

/// Encode the canvas backing buffer as an RGBA PNG.
pub fn write_snapshot(canvas: &Canvas, path: &std::path::Path) -> Result<(), SnapshotError> {
    let (w, h) = canvas.pixel_size();
    image::save_buffer(
        path,
        canvas.as_bytes(),
        w as u32,
        h as u32,
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(())
}
