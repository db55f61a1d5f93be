use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid rows, columns, and positions.
pub type Coord = u8;

/// Count type used for dot totals and the win counter.
pub type DotCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> DotCount {
    let a = a as DotCount;
    let b = b as DotCount;
    a.saturating_mul(b)
}

/// Whether `coords` lies inside a grid of `bounds` `(rows, cols)`.
pub const fn in_bounds(coords: Coord2, bounds: Coord2) -> bool {
    coords.0 < bounds.0 && coords.1 < bounds.1
}

/// One of the four axis-aligned directions a path can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit `(row, col)` displacement.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Applies one unit step to `coords`, returning a value only when it remains in bounds.
    pub fn step(self, coords: Coord2, bounds: Coord2) -> Option<Coord2> {
        let (row, col) = coords;
        let (d_row, d_col) = self.delta();

        let next = (
            row.checked_add_signed(d_row)?,
            col.checked_add_signed(d_col)?,
        );
        in_bounds(next, bounds).then_some(next)
    }

    /// Number of cells along this direction's axis for a grid of `bounds`.
    pub const fn extent(self, bounds: Coord2) -> Coord {
        if self.is_horizontal() {
            bounds.1
        } else {
            bounds.0
        }
    }
}

impl core::str::FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "up" | "u" => Ok(Self::Up),
            "down" | "d" => Ok(Self::Down),
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            _ => Err(()),
        }
    }
}
