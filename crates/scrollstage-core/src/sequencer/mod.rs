//! Sticky slide sequencer
//!
//! Once the page scrolls onto the sticky section, the sequencer pins the page
//! (via [`ScrollSignal::DisableScroll`]) and turns every wheel event into one
//! slide step. Reaching either end hands scrolling back to the page.

mod choreography;

use serde::Serialize;

use crate::config::SequencerConfig;
use crate::layout::LayoutSource;
use crate::scroll::Direction;
use crate::signal::{ScrollSignal, SignalSender};
use crate::tween::{TimelineId, TweenScheduler};

pub use choreography::Geometry;
use choreography::Choreography;

/// Where the sequencer is in the page flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequencerState {
    /// At the first slide, page scroll free
    #[default]
    IdleBefore,
    /// Wheel input captured, page scroll pinned
    Engaged,
    /// At the last slide, page scroll free
    IdleAfter,
}

/// Direction of a slide step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy)]
struct Running {
    id: TimelineId,
    step: Step,
}

#[derive(Debug)]
pub struct Sequencer {
    config: SequencerConfig,
    slide_count: usize,
    index: usize,
    state: SequencerState,
    running: Option<Running>,
    /// Scroll position at which the section engages
    bottom: f64,
    /// Scroll position at which the section comes into view
    reveal: f64,
    /// Latched once the section has been in view; the image stack shows from then on
    revealed: bool,
    geometry: Geometry,
    last_position: Option<f64>,
    signals: SignalSender,
}

impl Sequencer {
    pub fn new(config: SequencerConfig, slide_count: usize, signals: SignalSender) -> Self {
        Self {
            config,
            slide_count,
            index: 0,
            state: SequencerState::IdleBefore,
            running: None,
            bottom: 0.0,
            reveal: 0.0,
            revealed: false,
            geometry: Geometry::default(),
            last_position: None,
            signals,
        }
    }

    fn choreography(&self) -> Choreography<'_> {
        Choreography {
            config: &self.config,
            geometry: self.geometry,
            slide_count: self.slide_count,
        }
    }

    /// Re-measure the trigger offset and slide spacing.
    ///
    /// Layers are re-posed for the current slide unless a transition is
    /// running; that transition keeps its own targets.
    pub fn resize(&mut self, layout: &impl LayoutSource, tweens: &mut impl TweenScheduler) {
        let (viewport_width, _) = layout.viewport();
        self.geometry = Geometry::new(viewport_width, self.config.design_width);
        self.bottom = layout.sequencer_trigger();
        self.reveal = layout.sequencer_reveal();

        if self.running.is_none() {
            self.choreography().stage(self.index, tweens);
        }
    }

    /// Boundary checks, run once per frame after the page scroll settled
    pub fn refresh(&mut self, position: f64, direction: Direction, tweens: &mut impl TweenScheduler) {
        let last = self.last_position.replace(position);

        if !self.revealed && position >= self.reveal {
            tracing::debug!("Sticky section revealed at {}", position);
            self.revealed = true;
        }

        if self.is_engaged() || self.slide_count < 2 {
            return;
        }
        let Some(last) = last else {
            return;
        };

        let bottom = self.bottom;
        let last_index = self.slide_count - 1;

        if self.index == 0 && last < bottom && position >= bottom {
            self.engage(Step::Forward, tweens);
        } else if self.index == last_index && last > bottom && position <= bottom {
            self.engage(Step::Backward, tweens);
        } else if self.index == last_index && position == bottom && direction == Direction::Up {
            self.engage(Step::Backward, tweens);
        }
    }

    /// Wheel input while engaged; a positive delta steps forward
    pub fn wheel(&mut self, delta_y: f64, tweens: &mut impl TweenScheduler) {
        if !self.is_engaged() {
            return;
        }

        if delta_y > 0.0 {
            self.forward(tweens);
        } else if delta_y < 0.0 {
            self.backward(tweens);
        }
    }

    /// Step to the next slide. Dropped while a transition runs or at the last slide.
    fn forward(&mut self, tweens: &mut impl TweenScheduler) -> bool {
        if self.running.is_some() || self.index + 1 >= self.slide_count {
            return false;
        }

        self.index += 1;
        let timeline = self.choreography().forward(self.index);
        self.start(Step::Forward, tweens.play(timeline));
        true
    }

    /// Step to the previous slide. Dropped while a transition runs or at the first slide.
    fn backward(&mut self, tweens: &mut impl TweenScheduler) -> bool {
        if self.running.is_some() || self.index == 0 {
            return false;
        }

        self.index -= 1;
        let timeline = self.choreography().backward(self.index);
        self.start(Step::Backward, tweens.play(timeline));
        true
    }

    /// Completion of a played timeline; ids other than the running one are ignored
    pub fn complete(&mut self, id: TimelineId) {
        let Some(running) = self.running else {
            return;
        };
        if running.id != id {
            return;
        }
        self.running = None;

        let released = match running.step {
            Step::Forward if self.index + 1 == self.slide_count => Some(SequencerState::IdleAfter),
            Step::Backward if self.index == 0 => Some(SequencerState::IdleBefore),
            _ => None,
        };

        if let Some(state) = released {
            let was_engaged = self.is_engaged();
            self.state = state;
            if was_engaged {
                tracing::debug!("Sticky sequencer released at slide {} ({:?})", self.index, state);
                self.signals.emit(ScrollSignal::EnableScroll);
            }
        }
    }

    fn engage(&mut self, step: Step, tweens: &mut impl TweenScheduler) {
        tracing::debug!("Sticky sequencer engaged at {} going {:?}", self.bottom, step);
        self.signals.emit(ScrollSignal::DisableScroll { bottom: self.bottom });
        self.state = SequencerState::Engaged;

        match step {
            Step::Forward => self.forward(tweens),
            Step::Backward => self.backward(tweens),
        };
    }

    fn start(&mut self, step: Step, id: TimelineId) {
        tracing::debug!("Slide transition {:?} to {} started", step, self.index);
        self.running = Some(Running { id, step });
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    #[inline]
    pub fn is_engaged(&self) -> bool {
        self.state == SequencerState::Engaged
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// Whether the section has come into view at least once
    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Scroll position at which the section engages
    pub fn trigger(&self) -> f64 {
        self.bottom
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }
}
