use bevy::input::ButtonInput;
use bevy::input::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn matches(&self, input: &ButtonInput<KeyCode>) -> bool {
        let ctrl_pressed = input.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]);
        let shift_pressed = input.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        let alt_pressed = input.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]);

        ctrl_pressed == self.ctrl && shift_pressed == self.shift && alt_pressed == self.alt
    }

    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.shift && !self.alt
    }

    fn labels(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.ctrl, "Ctrl"),
            (self.shift, "Shift"),
            (self.alt, "Alt"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
    }
}

/// A key plus the exact modifier state it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            key,
            modifiers: Modifiers::none(),
        }
    }

    pub fn with_modifiers(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn is_just_pressed(&self, input: &ButtonInput<KeyCode>) -> bool {
        input.just_pressed(self.key) && self.modifiers.matches(input)
    }

    /// Parses `"F3"` or `"Ctrl+Shift+KeyD"`. Unknown modifiers are ignored.
    pub fn from_dom_code(code: &str) -> Option<Self> {
        let code = code.trim();
        let (prefix, key_part) = code.rsplit_once('+').unwrap_or(("", code));

        let mut modifiers = Modifiers::none();
        for modifier in prefix.split('+') {
            match modifier {
                "Ctrl" => modifiers.ctrl = true,
                "Shift" => modifiers.shift = true,
                "Alt" => modifiers.alt = true,
                _ => {}
            }
        }

        dom_code_to_keycode(key_part).map(|key| KeyBinding { key, modifiers })
    }

    pub fn to_dom_code(&self) -> String {
        self.join_with_modifiers(keycode_to_dom_code(self.key))
    }

    /// Human-readable name: `KeyL` shows as `L`, `Digit1` as `1`.
    pub fn display_name(&self) -> String {
        let code = keycode_to_dom_code(self.key);
        let short = code
            .strip_prefix("Key")
            .or_else(|| code.strip_prefix("Digit"))
            .unwrap_or(code);
        self.join_with_modifiers(short)
    }

    fn join_with_modifiers(&self, key: &str) -> String {
        if self.modifiers.is_empty() {
            return key.to_string();
        }
        let mut parts: Vec<&str> = self.modifiers.labels().collect();
        parts.push(key);
        parts.join("+")
    }
}

const KEY_CODES: &[(&str, KeyCode)] = &[
    ("ArrowUp", KeyCode::ArrowUp),
    ("ArrowDown", KeyCode::ArrowDown),
    ("ArrowLeft", KeyCode::ArrowLeft),
    ("ArrowRight", KeyCode::ArrowRight),
    ("KeyA", KeyCode::KeyA),
    ("KeyB", KeyCode::KeyB),
    ("KeyC", KeyCode::KeyC),
    ("KeyD", KeyCode::KeyD),
    ("KeyE", KeyCode::KeyE),
    ("KeyF", KeyCode::KeyF),
    ("KeyG", KeyCode::KeyG),
    ("KeyH", KeyCode::KeyH),
    ("KeyI", KeyCode::KeyI),
    ("KeyJ", KeyCode::KeyJ),
    ("KeyK", KeyCode::KeyK),
    ("KeyL", KeyCode::KeyL),
    ("KeyM", KeyCode::KeyM),
    ("KeyN", KeyCode::KeyN),
    ("KeyO", KeyCode::KeyO),
    ("KeyP", KeyCode::KeyP),
    ("KeyQ", KeyCode::KeyQ),
    ("KeyR", KeyCode::KeyR),
    ("KeyS", KeyCode::KeyS),
    ("KeyT", KeyCode::KeyT),
    ("KeyU", KeyCode::KeyU),
    ("KeyV", KeyCode::KeyV),
    ("KeyW", KeyCode::KeyW),
    ("KeyX", KeyCode::KeyX),
    ("KeyY", KeyCode::KeyY),
    ("KeyZ", KeyCode::KeyZ),
    ("Digit0", KeyCode::Digit0),
    ("Digit1", KeyCode::Digit1),
    ("Digit2", KeyCode::Digit2),
    ("Digit3", KeyCode::Digit3),
    ("Digit4", KeyCode::Digit4),
    ("Digit5", KeyCode::Digit5),
    ("Digit6", KeyCode::Digit6),
    ("Digit7", KeyCode::Digit7),
    ("Digit8", KeyCode::Digit8),
    ("Digit9", KeyCode::Digit9),
    ("Escape", KeyCode::Escape),
    ("Space", KeyCode::Space),
    ("Enter", KeyCode::Enter),
    ("Tab", KeyCode::Tab),
    ("Backquote", KeyCode::Backquote),
    ("Insert", KeyCode::Insert),
    ("Delete", KeyCode::Delete),
    ("Home", KeyCode::Home),
    ("End", KeyCode::End),
    ("PageUp", KeyCode::PageUp),
    ("PageDown", KeyCode::PageDown),
    ("F1", KeyCode::F1),
    ("F2", KeyCode::F2),
    ("F3", KeyCode::F3),
    ("F4", KeyCode::F4),
    ("F5", KeyCode::F5),
    ("F6", KeyCode::F6),
    ("F7", KeyCode::F7),
    ("F8", KeyCode::F8),
    ("F9", KeyCode::F9),
    ("F10", KeyCode::F10),
    ("F11", KeyCode::F11),
    ("F12", KeyCode::F12),
];

fn dom_code_to_keycode(code: &str) -> Option<KeyCode> {
    KEY_CODES
        .iter()
        .find(|(name, _)| *name == code)
        .map(|(_, key)| *key)
}

fn keycode_to_dom_code(code: KeyCode) -> &'static str {
    KEY_CODES
        .iter()
        .find(|(_, key)| *key == code)
        .map(|(name, _)| *name)
        .unwrap_or("Unknown")
}
