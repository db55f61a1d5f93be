//! Game engine for a swipe puzzle: drag a path across a grid of dots until
//! every dot that is not an obstacle has been colored.

use serde::{Deserialize, Serialize};

pub use dot::*;
pub use error::*;
pub use gesture::*;
pub use grid::*;
pub use level::*;
pub use snapshot::*;
pub use types::*;

mod dot;
mod error;
mod gesture;
mod grid;
mod level;
mod snapshot;
mod types;

/// Outcome of a single drag gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragOutcome {
    NoChange,
    /// The anchor moved over dots that were already colored.
    Moved,
    Colored,
    Won,
}

impl DragOutcome {
    /// Whether this outcome could have caused an update to the grid
    pub const fn has_update(self) -> bool {
        use DragOutcome::*;
        match self {
            NoChange => false,
            Moved => true,
            Colored => true,
            Won => true,
        }
    }

    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}
