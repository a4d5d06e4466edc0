use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::clip;
use crate::app::App;
use crate::theme::Theme;

pub struct CarouselWidget;

impl CarouselWidget {
    /// Render the strip with its top edge at row `top` (relative to `area`)
    pub fn render(frame: &mut Frame, area: Rect, top: i32, height: i32, app: &App, theme: &Theme) {
        if height <= 0 {
            return;
        }

        let carousel = app.page.carousel();
        let titles = &app.stage.page().carousel_items;

        for (k, (offset, translation)) in carousel
            .items()
            .iter()
            .zip(carousel.translations())
            .enumerate()
        {
            let x = app.stage.to_cols(offset.left + translation);
            let width = app.stage.to_cols(offset.width);
            let Some(clipped) = clip(area, x, top, width, height) else {
                continue;
            };

            let color = theme.palette(k);
            let title = titles.get(k).map(String::as_str).unwrap_or("");
            let border_style = if carousel.is_dragging() {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };

            let block = Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(theme.bg1));

            let label = format!("{:02}", k + 1);
            let inner_width = (width - 2).max(0) as usize;
            let pad = inner_width.saturating_sub(label.width()) / 2;
            let mut lines = vec![Line::from(""); (height as usize / 2).saturating_sub(1)];
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(pad)),
                Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ]));

            let paragraph = Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Left)
                .scroll((clipped.skip_rows, 0));
            frame.render_widget(paragraph, clipped.rect);
        }
    }
}
