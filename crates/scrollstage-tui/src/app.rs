use std::time::Duration;

use scrollstage_core::scroll::WheelDelta;
use scrollstage_core::tween::Tweener;
use scrollstage_core::{AppConfig, ScrollOrchestrator};

use crate::input::Action;
use crate::stage::Stage;

/// Terminal page state: the interaction core plus its terminal layout
pub struct App {
    pub config: AppConfig,
    pub stage: Stage,
    pub page: ScrollOrchestrator,
    pub tweens: Tweener,
    pub should_quit: bool,
    /// Frames rendered since start or reset
    pub frames: u64,
}

impl App {
    pub fn new(config: AppConfig, cols: u16, rows: u16) -> Self {
        let stage = Stage::new(config.page.clone(), cols, rows);
        let mut tweens = Tweener::new();
        let mut page = ScrollOrchestrator::new(&config, config.page.slides.len());
        page.resize(&stage, &mut tweens);

        Self {
            config,
            stage,
            page,
            tweens,
            should_quit: false,
            frames: 0,
        }
    }

    /// Terminal was resized
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.stage.resize(cols, rows);
        self.page.resize(&self.stage, &mut self.tweens);
    }

    /// Rebuild the page at scroll position zero
    pub fn reset(&mut self) {
        tracing::info!("Resetting page");
        self.tweens.reset();
        self.page = ScrollOrchestrator::new(&self.config, self.config.page.slides.len());
        self.page.resize(&self.stage, &mut self.tweens);
        self.frames = 0;
    }

    /// Wheel step for a single notch or key press
    pub fn line_px(&self) -> f64 {
        self.config.scroll.wheel_line_px
    }

    /// Wheel step for a page jump
    pub fn page_px(&self) -> f64 {
        self.stage.viewport_height()
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Reset => self.reset(),
            Action::Wheel(dy) => self.page.wheel(WheelDelta::vertical(dy), &mut self.tweens),
            Action::PointerDown(x) => self.page.pointer_down(x),
            Action::PointerMove(x) => self.page.pointer_move(x),
            Action::PointerUp => self.page.pointer_up(),
            Action::None => {}
        }
    }

    /// Run one animation frame: settle tweens, then the scroll loop
    pub fn tick(&mut self, dt: Duration) {
        for id in self.tweens.advance(dt) {
            self.page.complete(id);
        }
        self.page.frame(&mut self.tweens);
        self.frames += 1;
    }
}
