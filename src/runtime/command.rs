use crate::state::Direction;

/// An input after key resolution, before it touches the overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Navigate(Direction),
    Confirm,
    Back,
    TogglePause,
    ToggleStandard,
    ToggleBlessing,
    ToggleConstruction,
    NextSettlement,
    NextUnit,
    EndTurn,
    Attack,
    ClickSettlement,
    Investigate,
    DumpSnapshot,
}
