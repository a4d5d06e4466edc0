mod carousel;
mod page;
mod status_bar;
mod sticky;

pub use carousel::CarouselWidget;
pub use page::PageWidget;
pub use status_bar::StatusBarWidget;
pub use sticky::StickyWidget;

use ratatui::layout::Rect;

/// Part of a positioned box that falls inside the drawing area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Clipped {
    pub rect: Rect,
    /// Rows cut off above the visible part
    pub skip_rows: u16,
}

/// Clip a box given in cells relative to `area`'s origin.
///
/// Returns `None` when nothing of the box is visible.
pub(crate) fn clip(area: Rect, x: i32, y: i32, width: i32, height: i32) -> Option<Clipped> {
    let left = x.max(0);
    let top = y.max(0);
    let right = (x + width).min(area.width as i32);
    let bottom = (y + height).min(area.height as i32);

    if right <= left || bottom <= top {
        return None;
    }

    Some(Clipped {
        rect: Rect::new(
            area.x + left as u16,
            area.y + top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ),
        skip_rows: (top - y) as u16,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_inside() {
        let area = Rect::new(0, 1, 80, 20);
        let c = clip(area, 10, 5, 20, 4).unwrap();
        assert_eq!(c.rect, Rect::new(10, 6, 20, 4));
        assert_eq!(c.skip_rows, 0);
    }

    #[test]
    fn test_clip_partially_above_and_left() {
        let area = Rect::new(0, 0, 80, 20);
        let c = clip(area, -5, -3, 10, 10).unwrap();
        assert_eq!(c.rect, Rect::new(0, 0, 5, 7));
        assert_eq!(c.skip_rows, 3);
    }

    #[test]
    fn test_clip_outside() {
        let area = Rect::new(0, 0, 80, 20);
        assert!(clip(area, 90, 0, 10, 10).is_none());
        assert!(clip(area, 0, -10, 10, 10).is_none());
        assert!(clip(area, 0, 0, 0, 10).is_none());
    }
}
