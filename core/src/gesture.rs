use serde::{Deserialize, Serialize};

use crate::*;

/// Translation of a completed drag, in presentation units. `+dx` points
/// right and `+dy` points down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub dx: f32,
    pub dy: f32,
}

impl Translation {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub fn is_finite(self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

impl From<(f32, f32)> for Translation {
    fn from((dx, dy): (f32, f32)) -> Self {
        Self::new(dx, dy)
    }
}

/// Presentation distance covered by one grid cell: a dot's diameter plus the
/// padding on both of its sides.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellPitch(f32);

impl CellPitch {
    pub const DEFAULT_DIAMETER: f32 = 64.0;
    pub const DEFAULT_PADDING: f32 = 6.0;

    /// Horizontal space the layout reserves around each dot when fitting a row to a width.
    const FIT_MARGIN: f32 = 17.0;

    pub fn new(pitch: f32) -> Result<Self> {
        if pitch.is_finite() && pitch > 0.0 {
            Ok(Self(pitch))
        } else {
            Err(GridError::InvalidCellPitch)
        }
    }

    pub fn from_dot_metrics(diameter: f32, padding: f32) -> Result<Self> {
        Self::new(diameter + 2.0 * padding)
    }

    /// Pitch of a row of `cols` dots laid out across `width`.
    pub fn fit_width(width: f32, cols: Coord) -> Result<Self> {
        if cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let diameter = width / f32::from(cols) - Self::FIT_MARGIN;
        Self::from_dot_metrics(diameter, Self::DEFAULT_PADDING)
    }

    pub const fn get(self) -> f32 {
        self.0
    }
}

impl Default for CellPitch {
    fn default() -> Self {
        Self(Self::DEFAULT_DIAMETER + 2.0 * Self::DEFAULT_PADDING)
    }
}

/// A drag reduced to a single direction and a whole number of cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    pub direction: Direction,
    pub steps: u32,
}

impl Stroke {
    pub const fn new(direction: Direction, steps: u32) -> Self {
        Self { direction, steps }
    }

    /// The dominant axis wins, ties going to the horizontal one, and the
    /// distance along it is truncated to whole cells.
    pub fn resolve(translation: Translation, pitch: CellPitch) -> Self {
        if !translation.is_finite() {
            log::warn!("Ignoring non-finite drag translation {translation:?}");
            return Self::new(Direction::Right, 0);
        }

        let Translation { dx, dy } = translation;
        let (direction, magnitude) = if dx.abs() >= dy.abs() {
            let direction = if dx < 0.0 {
                Direction::Left
            } else {
                Direction::Right
            };
            (direction, dx.abs())
        } else {
            let direction = if dy < 0.0 {
                Direction::Up
            } else {
                Direction::Down
            };
            (direction, dy.abs())
        };

        // float to int casts saturate
        let steps = (magnitude / pitch.get()).trunc() as u32;
        Self::new(direction, steps)
    }

    pub const fn is_empty(self) -> bool {
        self.steps == 0
    }
}
