use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use scrollstage_core::script::{self, Command};
use scrollstage_core::AppConfig;
use scrollstage_tui::{app::App, event::frame_duration, input::Action};

pub fn run(config: AppConfig, script_path: &Path, frames: u32, width: u16, height: u16) -> Result<()> {
    let source = std::fs::read_to_string(script_path)
        .with_context(|| format!("failed to read script {}", script_path.display()))?;
    let commands = script::parse(&source)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let rendered = replay(config, &commands, frames, width, height, &mut out)?;
    out.flush()?;

    tracing::info!(frames = rendered, commands = commands.len(), "Simulation finished");
    Ok(())
}

/// Replay `commands` against a headless page, writing one JSON line per frame
fn replay(
    config: AppConfig,
    commands: &[Command],
    extra_frames: u32,
    width: u16,
    height: u16,
    out: &mut impl Write,
) -> Result<u64> {
    let dt = frame_duration(config.scroll.animation_fps);
    let mut app = App::new(config, width, height);

    let step = |app: &mut App, out: &mut dyn Write| -> Result<()> {
        app.tick(dt);
        serde_json::to_writer(&mut *out, &app.page.snapshot())?;
        writeln!(out)?;
        Ok(())
    };

    for command in commands {
        match *command {
            Command::Wheel(dy) => app.apply(Action::Wheel(dy)),
            Command::PointerDown(x) => app.apply(Action::PointerDown(x)),
            Command::PointerMove(x) => app.apply(Action::PointerMove(x)),
            Command::PointerUp => app.apply(Action::PointerUp),
            Command::Resize { width, height } => app.resize(width, height),
            Command::Frames(n) => {
                for _ in 0..n {
                    step(&mut app, &mut *out)?;
                }
            }
        }
    }

    for _ in 0..extra_frames {
        step(&mut app, &mut *out)?;
    }

    Ok(app.frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(source: &str, extra: u32) -> Vec<serde_json::Value> {
        let commands = script::parse(source).unwrap();
        let mut out = Vec::new();
        replay(AppConfig::default(), &commands, extra, 120, 40, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_one_snapshot_per_frame() {
        let snapshots = lines("wheel 300\nframes 5\n", 3);
        assert_eq!(snapshots.len(), 8);
        assert_eq!(snapshots[0]["target"], 300.0);
        assert_eq!(snapshots[0]["direction"], "down");
    }

    #[test]
    fn test_scroll_settles_on_target() {
        let snapshots = lines("wheel 200\nframes 400\n", 0);
        let last = snapshots.last().unwrap();
        let position = last["position"].as_f64().unwrap();
        // whole-pixel easing settles within 1/ease pixels below the target
        assert!(position <= 200.0 && position >= 190.0);
        assert_eq!(snapshots[snapshots.len() - 2]["position"], last["position"]);
        assert_eq!(last["blocked"], false);
    }

    #[test]
    fn test_no_frames_no_output() {
        assert!(lines("wheel 100\n", 0).is_empty());
    }
}
