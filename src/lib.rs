//! barchart-rs: a static bar chart core with pointer-driven tooltip discovery.
//!
//! The crate keeps geometry deterministic and backend-agnostic: the engine
//! materializes a [`render::RenderFrame`] of primitives and any
//! [`render::Renderer`] implementation executes it. Tooltip output flows
//! through an injected [`interaction::tooltip::TooltipSink`], so the core
//! never touches a concrete overlay element.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::BarChartEngine;
pub use error::{ChartError, ChartResult};
