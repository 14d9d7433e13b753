use super::{GamepadBinding, KeyBinding};
use bevy::input::ButtonInput;
use bevy::input::keyboard::KeyCode;
use bevy::prelude::Gamepad;
use game_types::ControlSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Keyboard(KeyBinding),
    Gamepad(GamepadBinding),
}

impl InputSource {
    pub fn label(&self) -> String {
        match self {
            InputSource::Keyboard(kb) => kb.display_name(),
            InputSource::Gamepad(gp) => gp.label().to_string(),
        }
    }

    pub fn from_string(s: &str) -> Option<Self> {
        GamepadBinding::from_string(s)
            .map(InputSource::Gamepad)
            .or_else(|| KeyBinding::from_dom_code(s).map(InputSource::Keyboard))
    }
}

/// An on/off control with at most one keyboard and one gamepad binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleBinding {
    pub keyboard: Option<KeyBinding>,
    pub controller: Option<GamepadBinding>,
}

impl ToggleBinding {
    pub fn from_codes(keyboard: Option<&str>, controller: Option<&str>) -> Self {
        let keyboard = keyboard.and_then(|code| {
            let parsed = KeyBinding::from_dom_code(code);
            if parsed.is_none() {
                tracing::warn!("Ignoring unknown keyboard binding {:?}", code);
            }
            parsed
        });
        let controller = controller.and_then(|code| {
            let parsed = GamepadBinding::from_string(code);
            if parsed.is_none() {
                tracing::warn!("Ignoring unknown gamepad binding {:?}", code);
            }
            parsed
        });
        Self {
            keyboard,
            controller,
        }
    }

    pub fn toggle_debug(controls: &ControlSettings) -> Self {
        Self::from_codes(
            controls.keyboard_toggle_debug(),
            controls.controller_toggle_debug(),
        )
    }

    /// Display labels of the bound inputs, keyboard first.
    pub fn labels(&self) -> Vec<String> {
        self.sources().map(|source| source.label()).collect()
    }

    pub fn sources(&self) -> impl Iterator<Item = InputSource> + '_ {
        self.keyboard
            .iter()
            .cloned()
            .map(InputSource::Keyboard)
            .chain(self.controller.iter().copied().map(InputSource::Gamepad))
    }

    pub fn is_just_pressed(
        &self,
        keyboard: &ButtonInput<KeyCode>,
        gamepad: Option<&Gamepad>,
    ) -> bool {
        let key_hit = self
            .keyboard
            .as_ref()
            .is_some_and(|kb| kb.is_just_pressed(keyboard));
        let pad_hit = match (&self.controller, gamepad) {
            (Some(binding), Some(gamepad)) => binding.is_just_pressed(gamepad),
            _ => false,
        };
        key_hit || pad_hit
    }
}
