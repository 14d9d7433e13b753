pub mod debug_overlay;
pub mod draw;
pub mod geometry;
pub mod plugins;
pub mod settings;
pub mod settings_types;
pub mod targets;

pub use debug_overlay::{DebugOverlay, FrameContext};
pub use draw::DrawSurface;
pub use targets::{LocationId, Subject, Target, TargetKind, TargetLocator};

pub fn storage_dir() -> std::path::PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    path.push("Lookup");
    let _ = std::fs::create_dir_all(&path);
    path
}
