use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
///
/// Doubles as the frame scheduler: when no input arrives before the next
/// frame is due, a `Tick` carrying the real frame time is emitted.
pub struct EventHandler {
    tick_rate: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    /// Create a handler ticking at the given frames per second
    pub fn with_animation_fps(fps: u32) -> Self {
        Self::new(frame_duration(fps))
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Poll for the next event, waiting at most until the next frame is due
    pub fn next(&mut self) -> Result<Option<AppEvent>> {
        let timeout = self.tick_rate.saturating_sub(self.last_tick.elapsed());

        if !timeout.is_zero() && event::poll(timeout)? {
            return Ok(match event::read()? {
                // Only handle key press events, ignore release events
                // (crossterm 0.27+ sends release events on some systems)
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
                Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
                _ => None,
            });
        }

        let elapsed = self.last_tick.elapsed();
        self.last_tick = Instant::now();
        Ok(Some(AppEvent::Tick(elapsed)))
    }
}

/// Time between frames at `fps`, with a ~60fps fallback for zero.
/// Never shorter than 1ms.
pub fn frame_duration(fps: u32) -> Duration {
    if fps == 0 {
        Duration::from_millis(16)
    } else {
        Duration::from_millis((1000 / fps as u64).max(1))
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse button or wheel activity
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// A frame is due; carries the time since the previous frame
    Tick(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(0), Duration::from_millis(16));
        assert_eq!(frame_duration(50), Duration::from_millis(20));
    }

    #[test]
    fn test_frame_duration_never_zero() {
        assert_eq!(frame_duration(1000), Duration::from_millis(1));
        assert_eq!(frame_duration(1001), Duration::from_millis(1));
        assert_eq!(frame_duration(u32::MAX), Duration::from_millis(1));
        assert!(!EventHandler::with_animation_fps(2000).tick_rate().is_zero());
    }
}
