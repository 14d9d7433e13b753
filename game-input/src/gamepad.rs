use bevy::input::gamepad::GamepadButton;
use bevy::prelude::*;

/// A single gamepad button bound to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GamepadBinding(pub GamepadButton);

const BUTTONS: &[(GamepadButton, &str, &str)] = &[
    (GamepadButton::South, "South", "A/Cross"),
    (GamepadButton::East, "East", "B/Circle"),
    (GamepadButton::North, "North", "X/Square"),
    (GamepadButton::West, "West", "Y/Triangle"),
    (GamepadButton::LeftTrigger, "LeftTrigger", "L1/LB"),
    (GamepadButton::RightTrigger, "RightTrigger", "R1/RB"),
    (GamepadButton::LeftTrigger2, "LeftTrigger2", "L2/LT"),
    (GamepadButton::RightTrigger2, "RightTrigger2", "R2/RT"),
    (GamepadButton::Select, "Select", "Select/Back"),
    (GamepadButton::Start, "Start", "Start/Menu"),
    (GamepadButton::Mode, "Mode", "Home"),
    (GamepadButton::LeftThumb, "LeftThumb", "Left Stick"),
    (GamepadButton::RightThumb, "RightThumb", "Right Stick"),
    (GamepadButton::DPadUp, "DPadUp", "D-Pad Up"),
    (GamepadButton::DPadDown, "DPadDown", "D-Pad Down"),
    (GamepadButton::DPadLeft, "DPadLeft", "D-Pad Left"),
    (GamepadButton::DPadRight, "DPadRight", "D-Pad Right"),
];

impl GamepadBinding {
    pub fn is_just_pressed(&self, gamepad: &Gamepad) -> bool {
        gamepad.just_pressed(self.0)
    }

    pub fn label(&self) -> &'static str {
        BUTTONS
            .iter()
            .find(|(button, _, _)| *button == self.0)
            .map(|(_, _, label)| *label)
            .unwrap_or("Unknown")
    }

    /// Parses `"Gamepad:RightThumb"`.
    pub fn from_string(s: &str) -> Option<Self> {
        let s = s.trim().strip_prefix("Gamepad:")?;
        BUTTONS
            .iter()
            .find(|(_, code, _)| *code == s)
            .map(|(button, _, _)| GamepadBinding(*button))
    }

    pub fn to_code(&self) -> String {
        let code = BUTTONS
            .iter()
            .find(|(button, _, _)| *button == self.0)
            .map(|(_, code, _)| *code)
            .unwrap_or("Unknown");
        format!("Gamepad:{code}")
    }
}

#[derive(Resource, Default)]
pub struct GamepadConfig {
    pub primary_gamepad: Option<Entity>,
}

pub fn gamepad_connection_system(
    mut config: ResMut<GamepadConfig>,
    gamepads: Query<(Entity, Option<&Name>), With<Gamepad>>,
) {
    if config.primary_gamepad.is_none() {
        if let Some((entity, name)) = gamepads.iter().next() {
            config.primary_gamepad = Some(entity);
            tracing::info!(
                "Connected gamepad: {}",
                name.map(Name::as_str).unwrap_or("unnamed")
            );
        }
    } else if let Some(primary) = config.primary_gamepad {
        if gamepads.get(primary).is_err() {
            config.primary_gamepad = None;
            tracing::info!("Gamepad disconnected");
        }
    }
}
