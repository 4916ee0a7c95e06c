//! tooltip-rs: hover tooltip engine for multi-series time charts.
//!
//! On every pointer move (or pin) the engine converts the cursor into
//! chart-logical coordinates, searches all series for points within a dynamic
//! tolerance window, resolves stacked/bar geometry where needed, and computes
//! a placement transform that keeps the floating panel inside the viewport.
//! Rendering and dashboard state belong to the host; each pass is a pure
//! function of its inputs.

pub mod core;
pub mod engine;
pub mod error;
pub mod telemetry;

pub use engine::{TooltipEngine, TooltipEngineConfig, TooltipPass};
pub use error::{TooltipError, TooltipResult};
