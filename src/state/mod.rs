pub mod gate;
pub mod kind;
pub mod layer;
pub mod overlay;
pub mod panel;
pub mod scroll;

pub use kind::OverlayKind;
pub use layer::LAYER_PRECEDENCE;
pub use overlay::{OverlayState, Transition};
pub use panel::{
    ConstructionPanel, ConstructionRef, Overlay, PausePanel, SetlClickPanel, StandardPanel,
    WarningPanel,
};
pub use scroll::{Direction, ScrollWindow, WindowedList};
