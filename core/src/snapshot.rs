use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// What the presentation layer needs to draw one dot.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct DotView {
    pub coordinates: Coord2,
    pub is_obstacle: bool,
    pub is_colored: bool,
    /// Current dot of a level that is still in play.
    pub is_anchor: bool,
    pub token: &'static str,
}

impl DotView {
    pub const ANCHOR_SCALE: f32 = 1.2;

    /// Scale the dot is drawn at: enlarged for the anchor, hidden until colored.
    pub const fn scale(&self) -> f32 {
        if self.is_anchor {
            Self::ANCHOR_SCALE
        } else if self.is_colored {
            1.0
        } else {
            0.0
        }
    }
}

/// Read-only copy of a [`Grid`] for rendering.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridSnapshot {
    pub size: Coord2,
    pub current_dot: Coord2,
    pub dots_to_win: DotCount,
    pub dots: Array2<DotView>,
}

impl GridSnapshot {
    pub fn from_grid(grid: &Grid) -> Self {
        let current_dot = grid.current_dot();
        let in_play = !grid.is_won();
        let dots = Array2::from_shape_fn(grid.size().to_nd_index(), |(row, col)| {
            let dot = &grid[(row as Coord, col as Coord)];
            DotView {
                coordinates: dot.coordinates(),
                is_obstacle: dot.is_obstacle(),
                is_colored: dot.is_colored(),
                is_anchor: in_play && dot.coordinates() == current_dot,
                token: dot.token(),
            }
        });

        Self {
            size: grid.size(),
            current_dot,
            dots_to_win: grid.dots_to_win(),
            dots,
        }
    }

    pub fn dot(&self, coords: Coord2) -> &DotView {
        &self.dots[coords.to_nd_index()]
    }

    pub fn to_json(&self) -> String {
        // only plain data, cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}
