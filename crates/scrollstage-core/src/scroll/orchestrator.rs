//! L3 Molecular Layer: page scroll loop
//!
//! Owns the authoritative scroll position and runs the per-frame update:
//! scroll easing, then the carousel, then the sticky section's boundary checks.

use serde::Serialize;

use crate::carousel::Carousel;
use crate::config::{AppConfig, ScrollConfig};
use crate::layout::LayoutSource;
use crate::sequencer::{Sequencer, SequencerState};
use crate::signal::{self, ScrollSignal, SignalReceiver};
use crate::tween::{TimelineId, TweenScheduler};

use super::timing::{clamp, lerp};
use super::{Direction, WheelDelta};

#[derive(Debug, Clone, Copy, Default)]
struct ScrollState {
    current: f64,
    target: f64,
    last: f64,
    direction: Direction,
    limit: f64,
}

/// State of one frame, for hosts and headless simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub position: f64,
    pub target: f64,
    pub limit: f64,
    pub direction: Direction,
    pub blocked: bool,
    pub surface_offset: f64,
    pub carousel_offset: f64,
    pub carousel_translations: Vec<f64>,
    pub sequencer_state: SequencerState,
    pub slide_index: usize,
    pub animating: bool,
    pub revealed: bool,
}

/// Page scroll orchestrator
///
/// Call `frame()` once per animation frame. Wheel and pointer input can
/// arrive at any time between frames.
#[derive(Debug)]
pub struct ScrollOrchestrator {
    config: ScrollConfig,
    scroll: ScrollState,
    /// Set while the sticky sequencer owns wheel input
    blocked: bool,
    /// Vertical translation applied to the page surface
    surface_offset: f64,
    carousel: Carousel,
    sequencer: Sequencer,
    signals: SignalReceiver,
}

impl ScrollOrchestrator {
    pub fn new(config: &AppConfig, slide_count: usize) -> Self {
        let (tx, rx) = signal::channel();
        Self {
            config: config.scroll.clone(),
            scroll: ScrollState::default(),
            blocked: false,
            surface_offset: 0.0,
            carousel: Carousel::new(config.carousel.clone()),
            sequencer: Sequencer::new(config.sequencer.clone(), slide_count, tx),
            signals: rx,
        }
    }

    /// Recompute the scroll limit and re-measure children
    pub fn resize(&mut self, layout: &impl LayoutSource, tweens: &mut impl TweenScheduler) {
        let (_, viewport_height) = layout.viewport();
        self.scroll.limit = (layout.content_height() - viewport_height).max(0.0);
        tracing::debug!("Scroll limit is now {}", self.scroll.limit);

        self.carousel.resize(layout);
        self.sequencer.resize(layout, tweens);

        // Stay pinned to the section's new trigger offset
        if self.blocked {
            let bottom = self.sequencer.trigger();
            self.scroll.current = bottom;
            self.scroll.target = bottom;
            self.scroll.last = bottom;
        }
    }

    /// Wheel input, already normalized to pixels
    pub fn wheel(&mut self, delta: WheelDelta, tweens: &mut impl TweenScheduler) {
        self.sequencer.wheel(delta.y, tweens);
        self.apply_signals();

        if self.blocked {
            return;
        }

        self.scroll.target = clamp(0.0, self.scroll.limit, self.scroll.target + delta.y);
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.carousel.pointer_down(x);
    }

    pub fn pointer_move(&mut self, x: f64) {
        self.carousel.pointer_move(x);
    }

    pub fn pointer_up(&mut self) {
        self.carousel.pointer_up();
    }

    /// Route a finished timeline back to the sequencer
    pub fn complete(&mut self, id: TimelineId) {
        self.sequencer.complete(id);
        self.apply_signals();
    }

    /// Per-frame update
    pub fn frame(&mut self, tweens: &mut impl TweenScheduler) {
        if !self.blocked {
            self.ease();
        }

        let s = self.scroll;
        self.surface_offset = (-s.current).floor();
        self.carousel.frame(s.current, s.direction, s.current != s.last);
        self.scroll.last = s.current;

        self.sequencer.refresh(s.current, s.direction, tweens);
        self.apply_signals();
    }

    fn ease(&mut self) {
        let s = &mut self.scroll;
        s.target = clamp(0.0, s.limit, s.target);
        s.current = lerp(s.current, s.target, self.config.ease);

        // Whole pixels only, so the surface does not shimmer
        s.current = if s.target == 0.0 {
            s.current.floor()
        } else {
            (s.current - 1.0).ceil()
        };

        if s.current < s.last {
            s.direction = Direction::Up;
        } else if s.current > s.last {
            s.direction = Direction::Down;
        }

        if s.current < self.config.snap_epsilon {
            s.current = 0.0;
        }
    }

    fn apply_signals(&mut self) {
        while let Some(signal) = self.signals.poll() {
            tracing::trace!("Applying {:?}", signal);
            match signal {
                ScrollSignal::DisableScroll { bottom } => {
                    self.scroll.current = bottom;
                    self.scroll.target = bottom;
                    self.blocked = true;
                }
                ScrollSignal::EnableScroll => {
                    self.blocked = false;
                }
            }
        }
    }

    /// Current scroll position
    #[inline]
    pub fn position(&self) -> f64 {
        self.scroll.current
    }

    pub fn target(&self) -> f64 {
        self.scroll.target
    }

    pub fn limit(&self) -> f64 {
        self.scroll.limit
    }

    pub fn direction(&self) -> Direction {
        self.scroll.direction
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Vertical translation of the page surface (whole pixels)
    pub fn surface_offset(&self) -> f64 {
        self.surface_offset
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            position: self.scroll.current,
            target: self.scroll.target,
            limit: self.scroll.limit,
            direction: self.scroll.direction,
            blocked: self.blocked,
            surface_offset: self.surface_offset,
            carousel_offset: self.carousel.drag_offset(),
            carousel_translations: self.carousel.translations().to_vec(),
            sequencer_state: self.sequencer.state(),
            slide_index: self.sequencer.index(),
            animating: self.sequencer.is_animating(),
            revealed: self.sequencer.is_revealed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ItemOffset, PageLayout};
    use crate::tween::Tweener;
    use std::time::Duration;

    const FRAME: Duration = Duration::from_millis(16);

    fn layout() -> PageLayout {
        PageLayout {
            content_height: 5000.0,
            viewport_width: 1200.0,
            viewport_height: 800.0,
            carousel_width: 1200.0,
            carousel_items: (0..4).map(|i| ItemOffset::new(i as f64 * 300.0, 300.0)).collect(),
            sequencer_trigger: 2000.0,
            sequencer_reveal: 1200.0,
        }
    }

    fn page() -> (ScrollOrchestrator, Tweener) {
        let mut tweens = Tweener::new();
        let mut page = ScrollOrchestrator::new(&AppConfig::default(), 3);
        page.resize(&layout(), &mut tweens);
        (page, tweens)
    }

    fn tick(page: &mut ScrollOrchestrator, tweens: &mut Tweener) {
        for id in tweens.advance(FRAME) {
            page.complete(id);
        }
        page.frame(tweens);
    }

    #[test]
    fn test_limit_from_layout() {
        let (page, _) = page();
        assert_eq!(page.limit(), 4200.0);
    }

    #[test]
    fn test_limit_never_negative() {
        let mut tweens = Tweener::new();
        let mut page = ScrollOrchestrator::new(&AppConfig::default(), 0);
        let short = PageLayout {
            content_height: 300.0,
            viewport_height: 800.0,
            ..Default::default()
        };
        page.resize(&short, &mut tweens);
        assert_eq!(page.limit(), 0.0);
    }

    #[test]
    fn test_wheel_target_is_clamped() {
        let (mut page, mut tweens) = page();
        page.wheel(WheelDelta::vertical(-300.0), &mut tweens);
        assert_eq!(page.target(), 0.0);
        page.wheel(WheelDelta::vertical(10_000.0), &mut tweens);
        assert_eq!(page.target(), 4200.0);
    }

    #[test]
    fn test_position_stays_in_range() {
        let (mut page, mut tweens) = page();
        let deltas = [500.0, -900.0, 3000.0, 8000.0, -12000.0, 250.0];
        for delta in deltas {
            page.wheel(WheelDelta::vertical(delta), &mut tweens);
            for _ in 0..20 {
                tick(&mut page, &mut tweens);
                assert!(page.position() >= 0.0);
                assert!(page.position() <= page.limit());
            }
        }
    }

    #[test]
    fn test_eases_toward_target_in_whole_pixels() {
        let (mut page, mut tweens) = page();
        page.wheel(WheelDelta::vertical(1000.0), &mut tweens);

        page.frame(&mut tweens);
        // lerp to 100, then ceil(100 - 1)
        assert_eq!(page.position(), 99.0);
        assert_eq!(page.direction(), Direction::Down);
        assert_eq!(page.surface_offset(), -99.0);

        page.frame(&mut tweens);
        assert_eq!(page.position(), (99.0 + (1000.0 - 99.0) * 0.1 - 1.0_f64).ceil());
    }

    #[test]
    fn test_converges_to_exact_zero() {
        let (mut page, mut tweens) = page();
        page.wheel(WheelDelta::vertical(400.0), &mut tweens);
        for _ in 0..30 {
            page.frame(&mut tweens);
        }
        page.wheel(WheelDelta::vertical(-400.0), &mut tweens);
        assert_eq!(page.target(), 0.0);

        for _ in 0..120 {
            page.frame(&mut tweens);
        }
        assert_eq!(page.position(), 0.0);
        assert_eq!(page.direction(), Direction::Up);
    }

    #[test]
    fn test_sticky_capture_pins_and_releases() {
        let (mut page, mut tweens) = page();
        page.wheel(WheelDelta::vertical(2500.0), &mut tweens);

        let mut frames = 0;
        while !page.is_blocked() {
            tick(&mut page, &mut tweens);
            frames += 1;
            assert!(frames < 500, "sticky section never engaged");
        }
        assert_eq!(page.position(), 2000.0);
        assert_eq!(page.target(), 2000.0);
        assert!(page.sequencer().is_engaged());

        // wheel while captured never moves the page
        page.wheel(WheelDelta::vertical(100.0), &mut tweens);
        assert_eq!(page.target(), 2000.0);

        for _ in 0..100 {
            tick(&mut page, &mut tweens);
        }
        assert_eq!(page.sequencer().index(), 1);
        assert!(page.is_blocked());
        assert_eq!(page.position(), 2000.0);

        page.wheel(WheelDelta::vertical(100.0), &mut tweens);
        for _ in 0..100 {
            tick(&mut page, &mut tweens);
        }
        assert_eq!(page.sequencer().index(), 2);
        assert!(!page.is_blocked());
        assert!(!page.sequencer().is_engaged());

        page.wheel(WheelDelta::vertical(300.0), &mut tweens);
        assert!(page.target() > 2000.0);
    }

    #[test]
    fn test_blocked_iff_engaged() {
        let (mut page, mut tweens) = page();
        page.wheel(WheelDelta::vertical(3000.0), &mut tweens);
        for i in 0..600 {
            if i % 40 == 0 {
                page.wheel(WheelDelta::vertical(120.0), &mut tweens);
            }
            tick(&mut page, &mut tweens);
            assert_eq!(page.is_blocked(), page.sequencer().is_engaged());
        }
    }

    #[test]
    fn test_resize_while_pinned_moves_the_pin() {
        let (mut page, mut tweens) = page();
        page.wheel(WheelDelta::vertical(2500.0), &mut tweens);
        while !page.is_blocked() {
            tick(&mut page, &mut tweens);
        }
        assert_eq!(page.position(), 2000.0);

        let taller = PageLayout {
            content_height: 6000.0,
            sequencer_trigger: 2600.0,
            ..layout()
        };
        page.resize(&taller, &mut tweens);
        assert_eq!(page.position(), 2600.0);
        assert_eq!(page.target(), 2600.0);

        tick(&mut page, &mut tweens);
        assert_eq!(page.position(), 2600.0);
        assert!(page.is_blocked());
    }

    #[test]
    fn test_resize_when_free_keeps_position() {
        let (mut page, mut tweens) = page();
        page.wheel(WheelDelta::vertical(500.0), &mut tweens);
        for _ in 0..5 {
            tick(&mut page, &mut tweens);
        }
        let position = page.position();

        let taller = PageLayout {
            content_height: 6000.0,
            sequencer_trigger: 2600.0,
            ..layout()
        };
        page.resize(&taller, &mut tweens);
        assert_eq!(page.position(), position);
    }

    #[test]
    fn test_snapshot_reports_reveal() {
        let (mut page, mut tweens) = page();
        tick(&mut page, &mut tweens);
        assert!(!page.snapshot().revealed);

        page.wheel(WheelDelta::vertical(1800.0), &mut tweens);
        for _ in 0..100 {
            tick(&mut page, &mut tweens);
        }
        assert!(page.snapshot().revealed);
    }

    #[test]
    fn test_carousel_follows_scroll() {
        let (mut page, mut tweens) = page();
        page.wheel(WheelDelta::vertical(600.0), &mut tweens);
        page.frame(&mut tweens);

        let snapshot = page.snapshot();
        assert_eq!(snapshot.carousel_translations[1], -snapshot.position);
    }

    #[test]
    fn test_pointer_drag_reaches_carousel() {
        let (mut page, mut tweens) = page();
        page.pointer_down(500.0);
        page.pointer_move(300.0);
        page.frame(&mut tweens);
        assert_eq!(page.carousel().drag_offset(), 20.0);
        page.pointer_up();
        assert!(!page.carousel().is_dragging());
    }
}
