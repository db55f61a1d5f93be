use core::fmt;
use swipedots_core::{GridSnapshot, PathWalk, StopReason};

const OBSTACLE: char = '#';
const ANCHOR: char = '@';
const COLORED: char = 'o';
const UNCOLORED: char = '.';

/// Text rendering of a grid snapshot, one row per line.
pub struct Board<'a>(pub &'a GridSnapshot);

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.dots.rows() {
            let mut sep = "";
            for dot in row {
                let symbol = if dot.is_obstacle {
                    OBSTACLE
                } else if dot.is_anchor {
                    ANCHOR
                } else if dot.is_colored {
                    COLORED
                } else {
                    UNCOLORED
                };
                write!(f, "{sep}{symbol}")?;
                sep = " ";
            }
            writeln!(f)?;
        }
        write!(f, "dots to win: {}", self.0.dots_to_win)
    }
}

/// One-line summary of what a gesture did.
pub struct Summary<'a>(pub &'a PathWalk);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let walk = self.0;
        write!(
            f,
            "{:?} x{}: moved {}, colored {}",
            walk.stroke.direction,
            walk.stroke.steps,
            walk.path.len(),
            walk.colored
        )?;
        match walk.stop {
            StopReason::Completed => Ok(()),
            StopReason::HitEdge => write!(f, " (stopped at the edge)"),
            StopReason::HitObstacle => write!(f, " (blocked by an obstacle)"),
        }
    }
}
