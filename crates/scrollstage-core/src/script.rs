//! Input scripts for headless replay.
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! wheel 120      # wheel delta in pixels, positive scrolls down
//! down 400       # pointer down at x
//! move 250       # pointer move to x
//! up             # pointer up
//! frames 30      # run 30 animation frames
//! resize 120 40  # resize the viewport (columns, rows)
//! ```

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Wheel(f64),
    PointerDown(f64),
    PointerMove(f64),
    PointerUp,
    Frames(u32),
    Resize { width: u16, height: u16 },
}

/// Parse a whole script
pub fn parse(source: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();

    for (idx, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        commands.push(parse_line(line).map_err(|message| Error::Script {
            line: idx + 1,
            message,
        })?);
    }

    Ok(commands)
}

fn parse_line(line: &str) -> std::result::Result<Command, String> {
    let mut parts = line.split_whitespace();
    let word = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    let arity = |n: usize| {
        if args.len() == n {
            Ok(())
        } else {
            Err(format!("'{}' takes {} argument(s), got {}", word, n, args.len()))
        }
    };

    match word {
        "wheel" => {
            arity(1)?;
            Ok(Command::Wheel(number(args[0])?))
        }
        "down" => {
            arity(1)?;
            Ok(Command::PointerDown(number(args[0])?))
        }
        "move" => {
            arity(1)?;
            Ok(Command::PointerMove(number(args[0])?))
        }
        "up" => {
            arity(0)?;
            Ok(Command::PointerUp)
        }
        "frames" => {
            arity(1)?;
            args[0]
                .parse()
                .map(Command::Frames)
                .map_err(|_| format!("invalid frame count '{}'", args[0]))
        }
        "resize" => {
            arity(2)?;
            let size = |s: &str| s.parse::<u16>().map_err(|_| format!("invalid size '{}'", s));
            Ok(Command::Resize {
                width: size(args[0])?,
                height: size(args[1])?,
            })
        }
        other => Err(format!("unknown command '{}'", other)),
    }
}

fn number(s: &str) -> std::result::Result<f64, String> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("invalid number '{}'", s))
}
