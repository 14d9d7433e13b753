mod settings;

pub use settings::{ControlSettings, ControllerBindings, DebugSettings, KeyboardBindings};
