use core::ops::Index;
use ndarray::{Array2, ArrayView1};
use rand::{SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridState {
    #[default]
    Idle,
    Won,
}

impl GridState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Why a path walk ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    Completed,
    HitEdge,
    HitObstacle,
}

/// Everything a single gesture did to the grid, in the order it happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathWalk {
    pub stroke: Stroke,
    /// Coordinates the anchor moved through, ending at the new current dot.
    pub path: Vec<Coord2>,
    /// Dots that went from uncolored to colored.
    pub colored: DotCount,
    pub stop: StopReason,
    pub outcome: DragOutcome,
}

impl PathWalk {
    fn unchanged(stroke: Stroke, outcome: DragOutcome) -> Self {
        Self {
            stroke,
            path: Vec::new(),
            colored: 0,
            stop: StopReason::Completed,
            outcome,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GridOptions {
    pub pitch: CellPitch,
    /// Seed for the cosmetic dot tints, OS entropy when absent.
    pub seed: Option<u64>,
}

/// Game state for one level: the dots, the path anchor and the win counter.
#[derive(Clone, Debug)]
pub struct Grid {
    level: Level,
    pitch: CellPitch,
    dots: Array2<Dot>,
    current_dot: Coord2,
    dots_to_win: DotCount,
    rng: SmallRng,
}

impl Grid {
    pub fn new(level: Level) -> Result<Self> {
        Self::with_options(level, GridOptions::default())
    }

    pub fn with_options(level: Level, options: GridOptions) -> Result<Self> {
        level.validate()?;

        let mut rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let dots = build_dots(&level, &mut rng);
        let start = level.start;
        let mut grid = Self {
            level,
            pitch: options.pitch,
            dots,
            current_dot: start,
            dots_to_win: 0,
            rng,
        };
        grid.anchor_start();

        log::debug!(
            "Grid {:?} created, start {:?}, {} dots to win",
            grid.size(),
            start,
            grid.dots_to_win
        );
        Ok(grid)
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn rows(&self) -> Coord {
        self.level.rows
    }

    pub fn cols(&self) -> Coord {
        self.level.cols
    }

    pub fn size(&self) -> Coord2 {
        self.level.size()
    }

    pub fn pitch(&self) -> CellPitch {
        self.pitch
    }

    /// Layout changes only affect how future drags are measured.
    pub fn set_pitch(&mut self, pitch: CellPitch) {
        self.pitch = pitch;
    }

    pub fn current_dot(&self) -> Coord2 {
        self.current_dot
    }

    pub fn dots_to_win(&self) -> DotCount {
        self.dots_to_win
    }

    pub fn state(&self) -> GridState {
        if self.dots_to_win == 0 {
            GridState::Won
        } else {
            GridState::Idle
        }
    }

    pub fn is_won(&self) -> bool {
        self.state().is_won()
    }

    pub fn dot(&self, coords: Coord2) -> Option<&Dot> {
        in_bounds(coords, self.size()).then(|| &self.dots[coords.to_nd_index()])
    }

    /// Rows of dots, top to bottom.
    pub fn dots(&self) -> impl Iterator<Item = ArrayView1<'_, Dot>> {
        self.dots.rows().into_iter()
    }

    /// All dots in row-major order.
    pub fn iter_dots(&self) -> impl Iterator<Item = &Dot> {
        self.dots.iter()
    }

    /// Resolves a drag and walks it. Returns whether the level is now won;
    /// the caller decides when to [`reset_grid`](Self::reset_grid).
    pub fn drag_gesture(&mut self, translation: Translation) -> bool {
        self.drag(translation).outcome.is_won()
    }

    pub fn drag(&mut self, translation: Translation) -> PathWalk {
        let stroke = Stroke::resolve(translation, self.pitch);
        self.walk(stroke)
    }

    /// Walks `stroke` from the current dot, coloring every dot it enters.
    ///
    /// The walk stops early at the grid edge or in front of an obstacle;
    /// neither is an error. A won grid is left untouched but keeps
    /// reporting [`DragOutcome::Won`] until it is reset.
    pub fn walk(&mut self, stroke: Stroke) -> PathWalk {
        if stroke.is_empty() {
            return PathWalk::unchanged(stroke, DragOutcome::NoChange);
        }
        if self.is_won() {
            log::debug!("Not walking {stroke:?}, level already won");
            return PathWalk::unchanged(stroke, DragOutcome::Won);
        }

        let bounds = self.size();
        let steps = stroke.steps.min(stroke.direction.extent(bounds).into());
        let mut path = Vec::new();
        let mut colored: DotCount = 0;
        let mut stop = StopReason::Completed;

        for _ in 0..steps {
            let Some(next) = stroke.direction.step(self.current_dot, bounds) else {
                stop = StopReason::HitEdge;
                break;
            };
            let dot = &mut self.dots[next.to_nd_index()];
            if dot.is_obstacle() {
                stop = StopReason::HitObstacle;
                break;
            }
            if dot.color() {
                self.dots_to_win -= 1;
                colored += 1;
            }
            log::trace!("Path entered {next:?}");
            self.current_dot = next;
            path.push(next);
        }

        if stop != StopReason::Completed {
            log::debug!(
                "{stroke:?} stopped at {:?} after {} steps: {stop:?}",
                self.current_dot,
                path.len()
            );
        }

        let outcome = if self.dots_to_win == 0 {
            log::info!("Level won at {:?}", self.current_dot);
            DragOutcome::Won
        } else if colored > 0 {
            DragOutcome::Colored
        } else if !path.is_empty() {
            DragOutcome::Moved
        } else {
            DragOutcome::NoChange
        };

        PathWalk {
            stroke,
            path,
            colored,
            stop,
            outcome,
        }
    }

    /// Rebuilds the board for the same level, as if freshly constructed.
    /// Cosmetic tints are rolled again.
    pub fn reset_grid(&mut self) {
        self.dots = build_dots(&self.level, &mut self.rng);
        self.anchor_start();
        log::info!("Grid reset, {} dots to win", self.dots_to_win);
    }

    fn anchor_start(&mut self) {
        let start = self.level.start;
        self.dots[start.to_nd_index()].color();
        self.current_dot = start;
        self.dots_to_win = self.level.non_obstacle_count().saturating_sub(1);
    }
}

impl Index<Coord2> for Grid {
    type Output = Dot;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.dots[coords.to_nd_index()]
    }
}

fn build_dots(level: &Level, rng: &mut SmallRng) -> Array2<Dot> {
    Array2::from_shape_fn(level.size().to_nd_index(), |(row, col)| {
        let coords = (row as Coord, col as Coord);
        Dot::new(coords, level.is_obstacle(coords), &mut *rng)
    })
}
