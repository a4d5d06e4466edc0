pub mod carousel;
pub mod config;
pub mod error;
pub mod layout;
pub mod scroll;
pub mod script;
pub mod sequencer;
pub mod signal;
pub mod tween;

pub use config::{AppConfig, EasingType};
pub use error::{Error, Result};
pub use layout::{ItemOffset, LayoutSource, PageLayout};
pub use scroll::{Direction, FrameSnapshot, ScrollOrchestrator, WheelDelta};
