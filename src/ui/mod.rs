pub mod draw_order;
pub mod snapshot;
pub mod text;

pub use draw_order::draw_order;
pub use snapshot::{OverlaySnapshot, snapshot_to_json};
pub use text::TextRenderer;
