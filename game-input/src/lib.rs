mod bindings;
pub mod gamepad;
mod toggle;

pub use bindings::{KeyBinding, Modifiers};
pub use gamepad::{GamepadBinding, GamepadConfig, gamepad_connection_system};
pub use toggle::{InputSource, ToggleBinding};
