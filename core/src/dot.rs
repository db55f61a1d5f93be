use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cosmetic tint of an ordinary dot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DotTint {
    Orange1,
    Orange2,
    Orange3,
}

impl DotTint {
    pub const ALL: [DotTint; 3] = [Self::Orange1, Self::Orange2, Self::Orange3];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Color token name as understood by the presentation layer.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Orange1 => "Orange1",
            Self::Orange2 => "Orange2",
            Self::Orange3 => "Orange3",
        }
    }
}

/// Cosmetic tint of an obstacle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleTint {
    Obstacle1,
    Obstacle2,
}

impl ObstacleTint {
    pub const ALL: [ObstacleTint; 2] = [Self::Obstacle1, Self::Obstacle2];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Obstacle1 => "Obstacle1",
            Self::Obstacle2 => "Obstacle2",
        }
    }
}

/// A single grid cell. Position and obstacle flag never change; only the
/// owning [`Grid`] flips `is_colored`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    coordinates: Coord2,
    is_obstacle: bool,
    is_colored: bool,
    tint: DotTint,
    obstacle_tint: ObstacleTint,
}

impl Dot {
    pub fn new(coordinates: Coord2, is_obstacle: bool, rng: &mut impl Rng) -> Self {
        Self {
            coordinates,
            is_obstacle,
            is_colored: is_obstacle,
            tint: DotTint::random(rng),
            obstacle_tint: ObstacleTint::random(rng),
        }
    }

    pub const fn coordinates(&self) -> Coord2 {
        self.coordinates
    }

    pub const fn is_obstacle(&self) -> bool {
        self.is_obstacle
    }

    pub const fn is_colored(&self) -> bool {
        self.is_colored
    }

    pub const fn tint(&self) -> DotTint {
        self.tint
    }

    pub const fn obstacle_tint(&self) -> ObstacleTint {
        self.obstacle_tint
    }

    /// The token that applies to this dot: the obstacle tint for obstacles,
    /// the normal tint otherwise.
    pub const fn token(&self) -> &'static str {
        if self.is_obstacle {
            self.obstacle_tint.token()
        } else {
            self.tint.token()
        }
    }

    /// Marks the dot colored, returning whether it was uncolored before.
    pub(crate) fn color(&mut self) -> bool {
        !core::mem::replace(&mut self.is_colored, true)
    }
}
