pub mod compositor;
pub mod constants;
pub mod harmonics;
pub mod scheduler;
pub mod settings;
pub mod surface;
pub mod wobble;

pub use scheduler::{FrameOutcome, Scheduler};
pub use settings::{AppSettings, CurveGroupSettings, GroupSide, Layout, SettingsError};
pub use surface::{DrawSurface, Rgba};
