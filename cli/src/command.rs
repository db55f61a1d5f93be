use anyhow::{Context, bail};
use core::str::FromStr;
use swipedots_core::{Direction, Stroke, Translation};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Raw drag translation `<dx> <dy>`.
    Drag(Translation),
    /// Direction name with an optional cell count.
    Walk(Stroke),
    Reset,
    Show,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            bail!("Empty command");
        };

        let command = match first {
            "reset" => Self::Reset,
            "show" => Self::Show,
            "quit" | "q" | "exit" => Self::Quit,
            word => {
                if let Ok(direction) = word.parse::<Direction>() {
                    let steps = match words.next() {
                        Some(steps) => steps
                            .parse()
                            .with_context(|| format!("Invalid step count {steps:?}"))?,
                        None => 1,
                    };
                    Self::Walk(Stroke::new(direction, steps))
                } else {
                    let dx: f32 = word
                        .parse()
                        .with_context(|| format!("Unknown command {word:?}"))?;
                    let dy: f32 = words
                        .next()
                        .context("Drag needs both dx and dy")?
                        .parse()
                        .context("Invalid dy")?;
                    Self::Drag(Translation::new(dx, dy))
                }
            }
        };

        if let Some(extra) = words.next() {
            bail!("Unexpected trailing input {extra:?}");
        }
        Ok(command)
    }
}
