//! Tween model: animatable layers, timelines and the scheduler seam.
//!
//! The sequencer describes a coordinated transition as a [`Timeline`] and hands
//! it to a [`TweenScheduler`]. Completion comes back as a [`TimelineId`] that the
//! host routes to the sequencer, so no closures capture sequencer state.

mod tweener;

use std::time::Duration;

use serde::Serialize;

use crate::config::EasingType;

pub use tweener::Tweener;

/// Animatable visual element of the sticky section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "layer", content = "index", rename_all = "snake_case")]
pub enum LayerId {
    Slide(usize),
    Image(usize),
    Circle(usize),
}

/// Animatable property of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Horizontal translation in pixels
    X,
    Opacity,
    /// Horizontal translation in percent of the layer's own width
    XPercent,
    /// Vertical translation in percent of the layer's own height
    YPercent,
    /// Rotation in degrees
    Rotate,
    Scale,
}

impl Property {
    /// Value a layer has before anything sets this property
    pub fn initial(self) -> f64 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            Property::X | Property::XPercent | Property::YPercent | Property::Rotate => 0.0,
        }
    }
}

/// Target of a tweened property
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TweenValue {
    /// Animate to this value
    To(f64),
    /// Animate by this amount relative to the value at tween start
    By(f64),
}

impl TweenValue {
    /// Resolve into an absolute end value given the start value
    pub fn resolve(self, start: f64) -> f64 {
        match self {
            TweenValue::To(v) => v,
            TweenValue::By(delta) => start + delta,
        }
    }
}

/// One layer animated over a time window
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub layer: LayerId,
    pub props: Vec<(Property, TweenValue)>,
    pub duration: Duration,
    /// Start time relative to the timeline start
    pub offset: Duration,
}

impl Tween {
    pub fn new(layer: LayerId, duration: Duration) -> Self {
        Self {
            layer,
            props: Vec::new(),
            duration,
            offset: Duration::ZERO,
        }
    }

    pub fn to(mut self, property: Property, value: f64) -> Self {
        self.props.push((property, TweenValue::To(value)));
        self
    }

    pub fn by(mut self, property: Property, delta: f64) -> Self {
        self.props.push((property, TweenValue::By(delta)));
        self
    }

    pub fn at(mut self, offset: Duration) -> Self {
        self.offset = offset;
        self
    }

    /// Time from timeline start until this tween settles
    pub fn end(&self) -> Duration {
        self.offset + self.duration
    }
}

/// A coordinated group of tweens sharing one completion
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub tweens: Vec<Tween>,
    pub easing: EasingType,
}

impl Timeline {
    pub fn new(easing: EasingType) -> Self {
        Self {
            tweens: Vec::new(),
            easing,
        }
    }

    pub fn push(&mut self, tween: Tween) {
        self.tweens.push(tween);
    }

    /// Total length: the latest tween end
    pub fn duration(&self) -> Duration {
        self.tweens
            .iter()
            .map(Tween::end)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Find the tween animating a given layer
    pub fn tween_for(&self, layer: LayerId) -> Option<&Tween> {
        self.tweens.iter().find(|t| t.layer == layer)
    }
}

/// Handle identifying a played timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimelineId(pub u64);

/// Schedules property transitions on layers
pub trait TweenScheduler {
    /// Set properties immediately, without animation
    fn set(&mut self, layer: LayerId, props: &[(Property, f64)]);

    /// Start a timeline. Its id is reported as completed exactly once,
    /// after every tween in it has reached its target.
    fn play(&mut self, timeline: Timeline) -> TimelineId;

    /// Current value of a property
    fn value(&self, layer: LayerId, property: Property) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_duration_is_latest_end() {
        let mut timeline = Timeline::new(EasingType::Linear);
        timeline.push(Tween::new(LayerId::Slide(0), Duration::from_millis(1000)));
        timeline.push(
            Tween::new(LayerId::Slide(1), Duration::from_millis(500))
                .at(Duration::from_millis(800)),
        );
        assert_eq!(timeline.duration(), Duration::from_millis(1300));
    }

    #[test]
    fn test_empty_timeline_has_zero_duration() {
        assert_eq!(Timeline::new(EasingType::CubicOut).duration(), Duration::ZERO);
    }

    #[test]
    fn test_relative_value_resolves_against_start() {
        assert_eq!(TweenValue::By(-4.0).resolve(10.0), 6.0);
        assert_eq!(TweenValue::To(3.0).resolve(10.0), 3.0);
    }
}
