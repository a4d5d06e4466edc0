//! Smooth page scrolling
//!
//! The page scroll is eased toward a wheel-driven target every frame and
//! drives the carousel and the sticky sequencer.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Power ease-out curves for slide transitions
//! - `timing` - Interpolation, clamping and progress helpers
//!
//! ## L3 Molecular Layer
//! - `orchestrator` - Per-frame scroll loop coordinating carousel and sequencer
//!
//! # Usage
//!
//! ```ignore
//! use scrollstage_core::scroll::{ScrollOrchestrator, WheelDelta};
//! use scrollstage_core::tween::Tweener;
//!
//! let mut tweens = Tweener::new();
//! let mut page = ScrollOrchestrator::new(&config, slide_count);
//! page.resize(&layout, &mut tweens);
//!
//! page.wheel(WheelDelta::vertical(100.0), &mut tweens);
//!
//! // once per animation frame
//! for id in tweens.advance(frame_time) {
//!     page.complete(id);
//! }
//! page.frame(&mut tweens);
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod orchestrator;

use serde::Serialize;

pub use easing::EasingType;
pub use orchestrator::{FrameSnapshot, ScrollOrchestrator};

/// Vertical movement direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    #[default]
    Down,
}

/// Wheel movement in device-independent pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WheelDelta {
    pub x: f64,
    pub y: f64,
}

impl WheelDelta {
    pub fn vertical(y: f64) -> Self {
        Self { x: 0.0, y }
    }
}
