//! Layout seam between the interaction core and whatever renders the page.
//!
//! All values are in virtual pixels. Hosts measure their surface (a browser
//! document, a terminal grid) and hand the result over through [`LayoutSource`].

use serde::Serialize;

/// Horizontal extent of a carousel item relative to its container
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ItemOffset {
    pub left: f64,
    pub width: f64,
}

impl ItemOffset {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

/// Provides element dimensions on demand (at startup and on every resize)
pub trait LayoutSource {
    /// Full height of the scrolling content
    fn content_height(&self) -> f64;

    /// Visible viewport size as (width, height)
    fn viewport(&self) -> (f64, f64);

    /// Width of the carousel container
    fn carousel_width(&self) -> f64;

    /// Offsets of every carousel item, in item order
    fn carousel_items(&self) -> Vec<ItemOffset>;

    /// Scroll distance at which the sticky sequencer engages
    /// (its bottom edge minus the viewport height)
    fn sequencer_trigger(&self) -> f64;

    /// Scroll distance at which the sticky section's top edge enters the
    /// viewport (its top edge minus the viewport height)
    fn sequencer_reveal(&self) -> f64;
}

/// Plain measured layout, useful for tests and headless simulation
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageLayout {
    pub content_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub carousel_width: f64,
    pub carousel_items: Vec<ItemOffset>,
    pub sequencer_trigger: f64,
    pub sequencer_reveal: f64,
}

impl LayoutSource for PageLayout {
    fn content_height(&self) -> f64 {
        self.content_height
    }

    fn viewport(&self) -> (f64, f64) {
        (self.viewport_width, self.viewport_height)
    }

    fn carousel_width(&self) -> f64 {
        self.carousel_width
    }

    fn carousel_items(&self) -> Vec<ItemOffset> {
        self.carousel_items.clone()
    }

    fn sequencer_trigger(&self) -> f64 {
        self.sequencer_trigger
    }

    fn sequencer_reveal(&self) -> f64 {
        self.sequencer_reveal
    }
}
