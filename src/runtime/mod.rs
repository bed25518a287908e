pub mod command;
pub mod demo;
pub mod dispatch;
pub mod key_bindings;

pub use command::Command;
pub use demo::{DemoRules, DemoWorld};
pub use dispatch::Session;
pub use key_bindings::{KeyBinding, KeyBindings};
