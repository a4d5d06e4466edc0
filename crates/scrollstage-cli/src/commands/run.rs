use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use scrollstage_core::AppConfig;
use scrollstage_tui::{
    app::App,
    draw,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    page_rows, Theme,
};

pub async fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Scrollstage"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: AppConfig) -> Result<()> {
    let size = terminal.size()?;
    let theme = Theme::default();
    let mut events = EventHandler::with_animation_fps(config.scroll.animation_fps);
    let mut app = App::new(config, size.width, page_rows(size.height));

    tracing::info!(
        cols = size.width,
        rows = size.height,
        tick_ms = events.tick_rate().as_millis() as u64,
        "Starting page"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app, &theme))?;

        match events.next()? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app.line_px(), app.page_px());
                app.apply(action);
            }
            Some(AppEvent::Mouse(mouse)) => {
                let action = handle_mouse_event(mouse, &app.stage, app.line_px());
                app.apply(action);
            }
            Some(AppEvent::Resize(cols, rows)) => app.resize(cols, page_rows(rows)),
            Some(AppEvent::Tick(dt)) => app.tick(dt),
            None => {}
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(frames = app.frames, "Page closed");
    Ok(())
}
