//! Infinite horizontal carousel coupled to the page scroll.
//!
//! Items move left as the page scrolls down and follow pointer drags. An item
//! that has travelled three quarters of the way out of the container is
//! relocated one container width to the other end, so the strip loops
//! without visible popping.

use serde::Serialize;

use crate::config::CarouselConfig;
use crate::layout::{ItemOffset, LayoutSource};
use crate::scroll::timing::lerp;
use crate::scroll::Direction;

/// Which side of the container an item has mostly left through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WrapFlags {
    pub is_before: bool,
    pub is_after: bool,
}

/// Pointer drag state
#[derive(Debug, Clone, Copy, Default)]
struct Drag {
    active: bool,
    /// Pointer x at drag start
    start: f64,
    /// Eased offset captured at drag start
    baseline: f64,
    target: f64,
    current: f64,
    last: f64,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    container_width: f64,
    offsets: Vec<ItemOffset>,
    /// Cumulative wrap offset per item, index-aligned with `offsets`
    extras: Vec<f64>,
    flags: Vec<WrapFlags>,
    /// Last applied horizontal translation per item
    translations: Vec<f64>,
    drag: Drag,
    direction: Direction,
}

impl Carousel {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            container_width: 0.0,
            offsets: Vec::new(),
            extras: Vec::new(),
            flags: Vec::new(),
            translations: Vec::new(),
            drag: Drag::default(),
            direction: Direction::Down,
        }
    }

    /// Re-measure the container and items; wrap offsets start over
    pub fn resize(&mut self, layout: &impl LayoutSource) {
        self.container_width = layout.carousel_width();
        self.offsets = layout.carousel_items();

        let count = self.offsets.len();
        self.extras = vec![0.0; count];
        self.flags = vec![WrapFlags::default(); count];
        self.translations = vec![0.0; count];
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.drag.active = true;
        self.drag.baseline = self.drag.current;
        self.drag.start = x;
    }

    pub fn pointer_move(&mut self, x: f64) {
        if !self.drag.active {
            return;
        }

        let distance = (self.drag.start - x) * self.config.drag_multiplier;
        self.drag.target = self.drag.baseline + distance;
    }

    /// Release the drag; the eased offset keeps settling toward the last target
    pub fn pointer_up(&mut self) {
        self.drag.active = false;
    }

    /// Per-frame update
    ///
    /// # Arguments
    /// * `scroll` - Current page scroll position
    /// * `direction` - Current page scroll direction
    /// * `is_scrolling` - Whether the page position changed this frame
    pub fn frame(&mut self, scroll: f64, direction: Direction, is_scrolling: bool) {
        self.drag.current = lerp(self.drag.current, self.drag.target, self.config.ease).floor();

        if is_scrolling {
            self.direction = direction;
        } else if self.drag.current > self.drag.last {
            self.direction = Direction::Down;
        } else if self.drag.current < self.drag.last {
            self.direction = Direction::Up;
        }

        let threshold = self.config.wrap_threshold;
        for (index, offset) in self.offsets.iter().enumerate() {
            let position = -scroll - self.drag.current - self.extras[index];
            let edge = position + offset.left + offset.width;

            let flags = &mut self.flags[index];
            flags.is_before = edge * threshold < 0.0;
            flags.is_after = edge > self.container_width * threshold;

            if self.direction == Direction::Down && flags.is_before {
                self.extras[index] -= self.container_width;
                *flags = WrapFlags::default();
                tracing::trace!("Carousel item {} wrapped to the end", index);
            }
            if self.direction == Direction::Up && flags.is_after {
                self.extras[index] += self.container_width;
                *flags = WrapFlags::default();
                tracing::trace!("Carousel item {} wrapped to the start", index);
            }

            self.translations[index] = position.floor();
        }

        self.drag.last = self.drag.current;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Eased drag offset
    pub fn drag_offset(&self) -> f64 {
        self.drag.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn items(&self) -> &[ItemOffset] {
        &self.offsets
    }

    pub fn extras(&self) -> &[f64] {
        &self.extras
    }

    pub fn flags(&self) -> &[WrapFlags] {
        &self.flags
    }

    /// Horizontal translation applied to each item on the last frame
    pub fn translations(&self) -> &[f64] {
        &self.translations
    }
}
