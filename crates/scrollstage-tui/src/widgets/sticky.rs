use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use scrollstage_core::tween::{LayerId, Property, TweenScheduler};

use super::{clip, Clipped};
use crate::app::App;
use crate::theme::Theme;

/// Image stack placement as fractions of the viewport
const IMAGE_X: f64 = 0.58;
const IMAGE_Y: f64 = 0.2;
const IMAGE_W: f64 = 0.32;
const IMAGE_H: f64 = 0.55;

/// Slide panel placement as fractions of the viewport
const SLIDE_Y: f64 = 0.3;
const SLIDE_W: f64 = 0.45;
const SLIDE_H: f64 = 0.4;

pub struct StickyWidget;

impl StickyWidget {
    /// Render the sticky section spanning rows `top..bottom` (relative to `area`)
    pub fn render(frame: &mut Frame, area: Rect, top: i32, bottom: i32, app: &App, theme: &Theme) {
        let Some(section) = clip(area, 0, top, area.width as i32, bottom - top) else {
            return;
        };

        Self::render_circles(frame, area, section.rect, top, app, theme);
        Self::render_images(frame, area, section.rect, top, app, theme);
        Self::render_slides(frame, area, section.rect, top, app, theme);
    }

    /// Clip a layer box to the area, then to the visible part of the section
    fn clip_to_band(area: Rect, band: Rect, x: i32, y: i32, width: i32, height: i32) -> Option<Clipped> {
        let clipped = clip(area, x, y, width, height)?;
        let rect = clipped.rect.intersection(band);
        if rect.is_empty() {
            return None;
        }
        Some(Clipped {
            rect,
            skip_rows: clipped.skip_rows + (rect.y - clipped.rect.y),
        })
    }

    /// Circle masks: filled discs, later slides drawn over earlier ones
    fn render_circles(frame: &mut Frame, area: Rect, visible: Rect, top: i32, app: &App, theme: &Theme) {
        let stage = &app.stage;
        let circle_scale = app.config.sequencer.circle_scale;
        let (vw, vh) = (stage.viewport_width(), stage.viewport_height());
        let cell_w = stage.page().cell_width_px;
        let cell_h = stage.page().cell_height_px;
        let max_radius = (vw * vw + vh * vh).sqrt() / 2.0;

        let buf = frame.buffer_mut();
        for k in 0..app.page.sequencer().slide_count() {
            let scale = app.tweens.value(LayerId::Circle(k), Property::Scale);
            if scale <= 0.0 || circle_scale <= 0.0 {
                continue;
            }
            let radius = (scale / circle_scale).min(1.0) * max_radius;
            let color = theme.palette(k);

            for row in visible.top()..visible.bottom() {
                // Section-relative pixel row of the cell center
                let section_row = row as i32 - area.y as i32 - top;
                let py = (section_row as f64 + 0.5) * cell_h;
                for col in visible.left()..visible.right() {
                    let px = ((col - area.x) as f64 + 0.5) * cell_w;
                    let (dx, dy) = (px - vw / 2.0, py - vh / 2.0);
                    if dx * dx + dy * dy <= radius * radius {
                        if let Some(cell) = buf.cell_mut((col, row)) {
                            cell.set_bg(color);
                        }
                    }
                }
            }
        }
    }

    /// Image stack, hidden until the section has first come into view
    fn render_images(frame: &mut Frame, area: Rect, band: Rect, top: i32, app: &App, theme: &Theme) {
        if !app.page.sequencer().is_revealed() {
            return;
        }

        let stage = &app.stage;
        let (vw, vh) = (stage.viewport_width(), stage.viewport_height());
        let (w, h) = (vw * IMAGE_W, vh * IMAGE_H);
        let image_count = app.page.sequencer().slide_count().saturating_sub(1);

        // Image 0 is on top of the stack
        for k in (0..image_count).rev() {
            let layer = LayerId::Image(k);
            let x = vw * IMAGE_X + app.tweens.value(layer, Property::XPercent) / 100.0 * w;
            let y = vh * IMAGE_Y + app.tweens.value(layer, Property::YPercent) / 100.0 * h;
            let rotate = app.tweens.value(layer, Property::Rotate);

            let Some(clipped) = Self::clip_to_band(
                area,
                band,
                stage.to_cols(x),
                top + stage.to_rows(y),
                stage.to_cols(w),
                stage.to_rows(h),
            ) else {
                continue;
            };

            let color = theme.palette(k + 1);
            let block = Block::default()
                .title(format!(" shot {} ", k + 1))
                .title_bottom(Line::from(format!(" {:+.0}° ", rotate)).right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(theme.bg2));

            frame.render_widget(Clear, clipped.rect);
            frame.render_widget(block, clipped.rect);
        }
    }

    fn render_slides(frame: &mut Frame, area: Rect, band: Rect, top: i32, app: &App, theme: &Theme) {
        let stage = &app.stage;
        let sequencer = app.page.sequencer();
        let geometry = sequencer.geometry();
        let (vw, vh) = (stage.viewport_width(), stage.viewport_height());
        let titles = &stage.page().slides;
        let count = sequencer.slide_count();

        for k in 0..count {
            let layer = LayerId::Slide(k);
            let x = app.tweens.value(layer, Property::X) + geometry.left * 0.5;
            let opacity = app.tweens.value(layer, Property::Opacity);

            let Some(clipped) = Self::clip_to_band(
                area,
                band,
                stage.to_cols(x),
                top + stage.to_rows(vh * SLIDE_Y),
                stage.to_cols(vw * SLIDE_W),
                stage.to_rows(vh * SLIDE_H),
            ) else {
                continue;
            };

            let (fg, modifier) = if opacity >= 0.5 {
                (theme.fg0, Modifier::BOLD)
            } else {
                (theme.grey1, Modifier::DIM)
            };
            let title = titles.get(k).map(String::as_str).unwrap_or("");

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(fg))
                .style(Style::default().bg(theme.bg0));
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    title.to_uppercase(),
                    Style::default().fg(fg).add_modifier(modifier),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("{} / {}", k + 1, count),
                    Style::default().fg(theme.grey2),
                )),
            ];

            frame.render_widget(Clear, clipped.rect);
            frame.render_widget(
                Paragraph::new(lines)
                    .block(block)
                    .alignment(Alignment::Center)
                    .scroll((clipped.skip_rows, 0)),
                clipped.rect,
            );
        }
    }
}
