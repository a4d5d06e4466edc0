pub mod app;
pub mod event;
pub mod input;
pub mod stage;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Draw the whole screen: the page with a one-line status bar below it
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    widgets::PageWidget::render(frame, chunks[0], app, theme);
    widgets::StatusBarWidget::render(frame, chunks[1], app, theme);
}

/// Rows available to the page for a terminal of `rows` rows
pub fn page_rows(rows: u16) -> u16 {
    rows.saturating_sub(1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use scrollstage_core::AppConfig;
    use std::time::Duration;

    #[test]
    fn test_draw_renders_every_phase() {
        let mut terminal = Terminal::new(TestBackend::new(100, 41)).unwrap();
        let mut app = App::new(AppConfig::default(), 100, page_rows(41));
        let theme = Theme::default();

        app.apply(input::Action::Wheel(app.page.limit()));
        for _ in 0..400 {
            app.tick(Duration::from_millis(16));
            if app.frames % 50 == 0 {
                app.apply(input::Action::Wheel(100.0));
            }
            terminal.draw(|f| draw(f, &app, &theme)).unwrap();
        }
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_images_hidden_until_section_revealed() {
        let mut config = AppConfig::default();
        config.page.hero_screens = 0.0;
        let mut terminal = Terminal::new(TestBackend::new(100, 41)).unwrap();
        let mut app = App::new(config, 100, page_rows(41));
        let theme = Theme::default();

        // sticky section already on screen, but no frame has run yet
        terminal.draw(|f| draw(f, &app, &theme)).unwrap();
        assert!(!screen_text(&terminal).contains("shot 1"));

        app.tick(Duration::from_millis(16));
        terminal.draw(|f| draw(f, &app, &theme)).unwrap();
        assert!(screen_text(&terminal).contains("shot 1"));
    }

    #[test]
    fn test_hero_text_on_first_frame() {
        let mut terminal = Terminal::new(TestBackend::new(100, 41)).unwrap();
        let mut app = App::new(AppConfig::default(), 100, page_rows(41));
        app.tick(Duration::from_millis(16));
        terminal.draw(|f| draw(f, &app, &Theme::default())).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("S C R O L L S T A G E"));
    }
}
