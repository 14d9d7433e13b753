use serde::{Deserialize, Serialize};

/// Keyboard bindings, stored as DOM key codes (`"F3"`, `"KeyL"`, `"Ctrl+KeyD"`).
/// An empty string leaves the control unbound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardBindings {
    pub toggle_debug: String,
}

impl Default for KeyboardBindings {
    fn default() -> Self {
        Self {
            toggle_debug: "F3".to_string(),
        }
    }
}

/// Gamepad bindings, stored as `Gamepad:<Button>` codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerBindings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_debug: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    pub keyboard: KeyboardBindings,
    pub controller: ControllerBindings,
}

impl ControlSettings {
    /// The keyboard toggle code, or `None` when it was left blank.
    pub fn keyboard_toggle_debug(&self) -> Option<&str> {
        non_empty(&self.keyboard.toggle_debug)
    }

    pub fn controller_toggle_debug(&self) -> Option<&str> {
        self.controller.toggle_debug.as_deref().and_then(non_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugSettings {
    pub enabled_on_start: bool,
}

fn non_empty(code: &str) -> Option<&str> {
    let code = code.trim();
    (!code.is_empty()).then_some(code)
}
