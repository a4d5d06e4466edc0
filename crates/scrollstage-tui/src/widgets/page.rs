use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{clip, CarouselWidget, StickyWidget};
use crate::app::App;
use crate::stage::{Section, SectionKind};
use crate::theme::Theme;

pub struct PageWidget;

impl PageWidget {
    /// Render every section visible at the current scroll offset
    pub fn render(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let offset = app.page.surface_offset();
        for section in app.stage.sections() {
            let top = app.stage.to_rows(section.top + offset);
            let bottom = app.stage.to_rows(section.bottom() + offset);

            match section.kind {
                SectionKind::Hero => Self::render_hero(frame, area, top, bottom, theme),
                SectionKind::Carousel => {
                    Self::render_carousel_section(frame, area, top, bottom, app, theme)
                }
                SectionKind::Sticky => StickyWidget::render(frame, area, top, bottom, app, theme),
                SectionKind::Footer => Self::render_footer(frame, area, top, bottom, section, theme),
            }
        }
    }

    fn render_hero(frame: &mut Frame, area: Rect, top: i32, bottom: i32, theme: &Theme) {
        let Some(clipped) = clip(area, 0, top, area.width as i32, bottom - top) else {
            return;
        };

        let lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "S C R O L L S T A G E",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "A smooth-scrolling page, a looping gallery and a sticky story",
                Style::default().fg(theme.fg1),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "wheel / j k / PgUp PgDn to scroll",
                Style::default().fg(theme.grey2),
            )),
            Line::from(Span::styled(
                "drag the gallery with the left mouse button",
                Style::default().fg(theme.grey2),
            )),
            Line::from(Span::styled(
                "r to reset, q to quit",
                Style::default().fg(theme.grey2),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .scroll((clipped.skip_rows, 0));
        frame.render_widget(paragraph, clipped.rect);
    }

    fn render_carousel_section(
        frame: &mut Frame,
        area: Rect,
        top: i32,
        bottom: i32,
        app: &App,
        theme: &Theme,
    ) {
        let height = bottom - top;
        if let Some(clipped) = clip(area, 0, top, area.width as i32, 1) {
            let title = Paragraph::new(Line::from(Span::styled(
                " Gallery ",
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )));
            frame.render_widget(title, clipped.rect);
        }

        // Strip occupies the band between the title and a one-row margin
        CarouselWidget::render(frame, area, top + 2, height - 3, app, theme);
    }

    fn render_footer(
        frame: &mut Frame,
        area: Rect,
        top: i32,
        bottom: i32,
        section: &Section,
        theme: &Theme,
    ) {
        let Some(clipped) = clip(area, 0, top, area.width as i32, bottom - top) else {
            return;
        };

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.grey1));
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("That's the whole page.", Style::default().fg(theme.fg0))),
            Line::from(Span::styled(
                format!("{:.0}px of content above this line", section.top),
                Style::default().fg(theme.grey2),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .scroll((clipped.skip_rows, 0));
        frame.render_widget(paragraph, clipped.rect);
    }
}
