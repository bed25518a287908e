pub mod config;
pub mod model;
pub mod rules;
pub mod runtime;
pub mod state;
pub mod telemetry;
pub mod terminal;
pub mod ui;

pub use config::{ConfigError, OverlayConfig};
pub use state::{Overlay, OverlayKind, OverlayState, Transition};
