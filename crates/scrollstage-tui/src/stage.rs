//! Virtual page laid out on the terminal grid.
//!
//! The interaction core works in pixels. Each terminal cell stands for
//! `cell_width_px` x `cell_height_px` virtual pixels, so easing and wrap
//! thresholds behave as they would on a real page.

use scrollstage_core::config::PageConfig;
use scrollstage_core::{ItemOffset, LayoutSource};

/// Height of the carousel section in viewport heights
const CAROUSEL_SECTION_SCREENS: f64 = 0.75;

/// Gap between carousel items, in cells
const CAROUSEL_GAP_CELLS: f64 = 2.0;

/// Smallest footer, in cells; keeps the sticky trigger above where the eased
/// scroll settles at the limit
const MIN_FOOTER_ROWS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Carousel,
    Sticky,
    Footer,
}

/// Vertical band of the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone)]
pub struct Stage {
    page: PageConfig,
    cols: u16,
    rows: u16,
    sections: Vec<Section>,
}

impl Stage {
    pub fn new(page: PageConfig, cols: u16, rows: u16) -> Self {
        let mut stage = Self {
            page,
            cols,
            rows,
            sections: Vec::new(),
        };
        stage.layout_sections();
        stage
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.layout_sections();
    }

    fn layout_sections(&mut self) {
        let vh = self.viewport_height();
        let bands = [
            (SectionKind::Hero, self.page.hero_screens * vh),
            (SectionKind::Carousel, CAROUSEL_SECTION_SCREENS * vh),
            (SectionKind::Sticky, vh),
            (
                SectionKind::Footer,
                (self.page.footer_screens * vh).max(MIN_FOOTER_ROWS * self.page.cell_height_px),
            ),
        ];

        let mut top = 0.0;
        self.sections = bands
            .into_iter()
            .map(|(kind, height)| {
                let section = Section { kind, top, height };
                top += height;
                section
            })
            .collect();
    }

    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    pub fn viewport_width(&self) -> f64 {
        self.cols as f64 * self.page.cell_width_px
    }

    pub fn viewport_height(&self) -> f64 {
        self.rows as f64 * self.page.cell_height_px
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<Section> {
        self.sections.iter().copied().find(|s| s.kind == kind)
    }

    pub fn carousel_item_width(&self) -> f64 {
        (self.viewport_width() * self.page.carousel_item_ratio).floor()
    }

    fn carousel_pitch(&self) -> f64 {
        self.carousel_item_width() + CAROUSEL_GAP_CELLS * self.page.cell_width_px
    }

    /// Convert a horizontal pixel value to whole columns
    pub fn to_cols(&self, px: f64) -> i32 {
        (px / self.page.cell_width_px).floor() as i32
    }

    /// Convert a vertical pixel value to whole rows
    pub fn to_rows(&self, px: f64) -> i32 {
        (px / self.page.cell_height_px).floor() as i32
    }

    /// Pixel x of a terminal column
    pub fn column_px(&self, column: u16) -> f64 {
        column as f64 * self.page.cell_width_px
    }
}

impl LayoutSource for Stage {
    fn content_height(&self) -> f64 {
        self.sections.last().map(Section::bottom).unwrap_or(0.0)
    }

    fn viewport(&self) -> (f64, f64) {
        (self.viewport_width(), self.viewport_height())
    }

    fn carousel_width(&self) -> f64 {
        self.carousel_pitch() * self.page.carousel_items.len() as f64
    }

    fn carousel_items(&self) -> Vec<ItemOffset> {
        let pitch = self.carousel_pitch();
        let width = self.carousel_item_width();
        (0..self.page.carousel_items.len())
            .map(|k| ItemOffset::new(k as f64 * pitch, width))
            .collect()
    }

    fn sequencer_trigger(&self) -> f64 {
        self.section(SectionKind::Sticky)
            .map(|s| s.bottom() - self.viewport_height())
            .unwrap_or(0.0)
    }

    fn sequencer_reveal(&self) -> f64 {
        self.section(SectionKind::Sticky)
            .map(|s| s.top - self.viewport_height())
            .unwrap_or(0.0)
    }
}
