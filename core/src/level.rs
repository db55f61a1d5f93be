use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::*;

/// Layout of a single puzzle: dimensions, obstacle placement and the start anchor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub rows: Coord,
    pub cols: Coord,
    #[serde(default)]
    pub obstacles: BTreeSet<Coord2>,
    pub start: Coord2,
}

impl Level {
    pub fn new(
        (rows, cols): Coord2,
        obstacles: impl IntoIterator<Item = Coord2>,
        start: Coord2,
    ) -> Result<Self> {
        let level = Self {
            rows,
            cols,
            obstacles: obstacles.into_iter().collect(),
            start,
        };
        level.validate()?;
        Ok(level)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let level: Self = serde_json::from_str(json).map_err(|err| {
            log::warn!("Could not parse level descriptor: {err}");
            GridError::InvalidLevel
        })?;
        level.validate()?;
        Ok(level)
    }

    pub fn validate(&self) -> Result<()> {
        let size = self.size();
        if size.0 == 0 || size.1 == 0 {
            return Err(GridError::EmptyGrid);
        }
        if !self.obstacles.iter().all(|&coords| in_bounds(coords, size)) {
            return Err(GridError::ObstacleOutOfBounds);
        }
        if !in_bounds(self.start, size) {
            return Err(GridError::StartOutOfBounds);
        }
        if self.is_obstacle(self.start) {
            return Err(GridError::StartOnObstacle);
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_dots(&self) -> DotCount {
        mult(self.rows, self.cols)
    }

    pub fn is_obstacle(&self, coords: Coord2) -> bool {
        self.obstacles.contains(&coords)
    }

    /// Dots the player has to color, the start anchor included.
    pub fn non_obstacle_count(&self) -> DotCount {
        let obstacles: DotCount = self.obstacles.len().try_into().unwrap_or(DotCount::MAX);
        self.total_dots().saturating_sub(obstacles)
    }
}

impl Default for Level {
    /// A 5x5 board with a short wall, starting in the top-left corner.
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            obstacles: BTreeSet::from([(1, 1), (1, 2), (3, 3)]),
            start: (0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_OBSTACLES: [Coord2; 0] = [];

    #[test]
    fn default_level_is_valid() {
        let level = Level::default();

        assert_eq!(level.validate(), Ok(()));
        assert_eq!(level.non_obstacle_count(), 22);
    }

    #[test]
    fn validate_rejects_bad_layouts() {
        assert_eq!(Level::new((0, 3), NO_OBSTACLES, (0, 0)), Err(GridError::EmptyGrid));
        assert_eq!(
            Level::new((2, 2), [(2, 0)], (0, 0)),
            Err(GridError::ObstacleOutOfBounds)
        );
        assert_eq!(
            Level::new((2, 2), NO_OBSTACLES, (0, 2)),
            Err(GridError::StartOutOfBounds)
        );
        assert_eq!(
            Level::new((2, 2), [(1, 1)], (1, 1)),
            Err(GridError::StartOnObstacle)
        );
    }

    #[test]
    fn from_json_reads_descriptor() {
        let level = Level::from_json(
            r#"{ "rows": 2, "cols": 3, "obstacles": [[0, 2]], "start": [1, 0] }"#,
        )
        .unwrap();

        assert_eq!(level.size(), (2, 3));
        assert!(level.is_obstacle((0, 2)));
        assert_eq!(level.start, (1, 0));
        assert_eq!(level.non_obstacle_count(), 5);
    }

    #[test]
    fn from_json_defaults_obstacles_and_validates() {
        let level = Level::from_json(r#"{ "rows": 1, "cols": 3, "start": [0, 0] }"#).unwrap();
        assert!(level.obstacles.is_empty());

        assert_eq!(
            Level::from_json(r#"{ "rows": 1, "cols": 3, "start": [0, 5] }"#),
            Err(GridError::StartOutOfBounds)
        );
        assert_eq!(Level::from_json("not json"), Err(GridError::InvalidLevel));
    }
}
