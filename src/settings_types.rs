use bevy::prelude::Resource;

pub use game_types::{ControlSettings, ControllerBindings, DebugSettings, KeyboardBindings};

#[derive(Resource, serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub controls: ControlSettings,
    pub debug: DebugSettings,
}
