//! Layer poses and transition timelines for the sticky slides.
//!
//! Slide `k` sits relative to the current index `i`: off-screen left when
//! `k < i`, on-screen when `k == i`, `rest * (k - i)` to the right otherwise.
//! Image `k` belongs to the step from slide `k` to `k + 1`: it is thrown away
//! once that step is taken and otherwise stacked, nudged up once per step.
//! Circle `k` is grown once slide `k` has been reached.

use std::time::Duration;

use crate::config::SequencerConfig;
use crate::tween::{LayerId, Property, Timeline, Tween, TweenScheduler};

/// Inset of a slide at the design width, in design pixels
const SLIDE_INSET_DESIGN_PX: f64 = 10.0 * 26.3;

/// Pose of an image layer once its step has been taken
const THROWN_Y_PERCENT: f64 = -200.0;
const THROWN_X_PERCENT: f64 = -20.0;
const THROWN_ROTATE_DEG: f64 = 20.0;

/// Viewport-derived slide spacing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub viewport_width: f64,
    /// Slide inset scaled to the viewport
    pub left: f64,
    /// Resting offset of the slide right after the current one
    pub rest: f64,
}

impl Geometry {
    pub fn new(viewport_width: f64, design_width: f64) -> Self {
        let left = if design_width > 0.0 {
            viewport_width / design_width * SLIDE_INSET_DESIGN_PX
        } else {
            0.0
        };
        Self {
            viewport_width,
            left,
            rest: viewport_width - left * 1.5,
        }
    }
}

pub(crate) struct Choreography<'a> {
    pub config: &'a SequencerConfig,
    pub geometry: Geometry,
    pub slide_count: usize,
}

impl Choreography<'_> {
    fn image_count(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    fn duration(&self) -> Duration {
        Duration::from_millis(self.config.transition_ms)
    }

    fn slide(&self, k: usize) -> Option<LayerId> {
        (k < self.slide_count).then_some(LayerId::Slide(k))
    }

    fn image(&self, k: usize) -> Option<LayerId> {
        (k < self.image_count()).then_some(LayerId::Image(k))
    }

    fn circle(&self, k: usize) -> Option<LayerId> {
        (k < self.slide_count).then_some(LayerId::Circle(k))
    }

    /// Stacked vertical offset of images still waiting at `index`
    fn stacked_y(&self, index: usize) -> f64 {
        -self.config.stack_nudge_percent * index as f64
    }

    /// Place every layer in its resting pose for `index` without animation
    pub fn stage(&self, index: usize, tweens: &mut impl TweenScheduler) {
        let g = self.geometry;

        for k in 0..self.slide_count {
            let x = if k < index {
                -g.viewport_width
            } else {
                g.rest * (k - index) as f64
            };
            let opacity = if k <= index { 1.0 } else { self.config.idle_opacity };
            tweens.set(LayerId::Slide(k), &[(Property::X, x), (Property::Opacity, opacity)]);
        }

        for k in 0..self.image_count() {
            let pose = if k < index {
                [THROWN_Y_PERCENT, THROWN_X_PERCENT, THROWN_ROTATE_DEG]
            } else {
                [self.stacked_y(index), 0.0, 0.0]
            };
            tweens.set(
                LayerId::Image(k),
                &[
                    (Property::YPercent, pose[0]),
                    (Property::XPercent, pose[1]),
                    (Property::Rotate, pose[2]),
                ],
            );
        }

        for k in 0..self.slide_count {
            let scale = if k <= index { self.config.circle_scale } else { 0.0 };
            tweens.set(LayerId::Circle(k), &[(Property::Scale, scale)]);
        }
    }

    /// Timeline for arriving at `index` from `index - 1`
    pub fn forward(&self, index: usize) -> Timeline {
        let g = self.geometry;
        let d = self.duration();
        let mut timeline = Timeline::new(self.config.easing);

        if let Some(previous) = index.checked_sub(1).and_then(|k| self.slide(k)) {
            timeline.push(Tween::new(previous, d).to(Property::X, -g.viewport_width));
        }
        if let Some(current) = self.slide(index) {
            timeline.push(
                Tween::new(current, d)
                    .to(Property::X, 0.0)
                    .to(Property::Opacity, 1.0),
            );
        }
        if let Some(next) = self.slide(index + 1) {
            timeline.push(Tween::new(next, d).to(Property::X, g.rest));
        }
        if let Some(image) = index.checked_sub(1).and_then(|k| self.image(k)) {
            timeline.push(
                Tween::new(image, d)
                    .to(Property::YPercent, THROWN_Y_PERCENT)
                    .to(Property::XPercent, THROWN_X_PERCENT)
                    .to(Property::Rotate, THROWN_ROTATE_DEG),
            );
        }
        for k in index..self.image_count() {
            timeline.push(
                Tween::new(LayerId::Image(k), d)
                    .by(Property::YPercent, -self.config.stack_nudge_percent),
            );
        }
        if let Some(circle) = self.circle(index) {
            timeline.push(Tween::new(circle, d).to(Property::Scale, self.config.circle_scale));
        }

        timeline
    }

    /// Timeline for arriving at `index` from `index + 1`
    pub fn backward(&self, index: usize) -> Timeline {
        let g = self.geometry;
        let d = self.duration();
        let mut timeline = Timeline::new(self.config.easing);

        if let Some(leaving) = self.slide(index + 1) {
            timeline.push(
                Tween::new(leaving, d)
                    .to(Property::X, g.rest)
                    .to(Property::Opacity, self.config.idle_opacity),
            );
        }
        if let Some(current) = self.slide(index) {
            timeline.push(
                Tween::new(current, d)
                    .to(Property::X, 0.0)
                    .to(Property::Opacity, 1.0),
            );
        }
        if let Some(successor) = self.slide(index + 2) {
            timeline.push(Tween::new(successor, d).to(Property::X, g.rest * 2.0));
        }
        if let Some(image) = self.image(index) {
            timeline.push(
                Tween::new(image, d)
                    .to(Property::YPercent, self.stacked_y(index))
                    .to(Property::XPercent, 0.0)
                    .to(Property::Rotate, 0.0),
            );
        }
        for k in index + 1..self.image_count() {
            timeline.push(
                Tween::new(LayerId::Image(k), d)
                    .by(Property::YPercent, self.config.stack_nudge_percent),
            );
        }
        if let Some(circle) = self.circle(index + 1) {
            timeline.push(Tween::new(circle, d).to(Property::Scale, 0.0));
        }

        timeline
    }
}
