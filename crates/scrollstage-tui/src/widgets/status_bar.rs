use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use scrollstage_core::sequencer::SequencerState;
use scrollstage_core::Direction;

use crate::app::App;
use crate::theme::Theme;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        let page = &app.page;
        let sequencer = page.sequencer();

        let arrow = match page.direction() {
            Direction::Up => "↑",
            Direction::Down => "↓",
        };
        let sticky = match sequencer.state() {
            SequencerState::IdleBefore => "before",
            SequencerState::Engaged => "ENGAGED",
            SequencerState::IdleAfter => "after",
        };
        let busy = if sequencer.is_animating() { " ~" } else { "" };

        let status_text = format!(
            " {}{:>6.0}/{:.0} | gallery {:+.0}{} | sticky {} {}/{}{} ",
            arrow,
            page.position(),
            page.limit(),
            page.carousel().drag_offset(),
            if page.carousel().is_dragging() { " drag" } else { "" },
            sticky,
            sequencer.index() + 1,
            sequencer.slide_count(),
            busy,
        );

        let help_hint = " q:quit r:reset j/k:scroll ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let status_style = if page.is_blocked() {
            Style::default().fg(theme.bg0).bg(theme.accent)
        } else {
            Style::default().fg(theme.fg0).bg(theme.bg2)
        };

        let line = Line::from(vec![
            Span::styled(status_text, status_style),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
