//! Headless robot scene: a grid, a robot, a goal and an autopilot.
//!
//! The scene owns the obstacle grid and re-runs the search engine whenever
//! it is asked to plan. A plan is dropped as soon as the grid, the goal or
//! the robot changes, so a stale path is never followed.

use std::collections::VecDeque;
use std::fmt;

use gridpath_core::{Coord, GridError, Move, ObstacleGrid, Passable, moves_from_path};
use gridpath_search::{SearchConfig, SearchError, find_path};
use log::{debug, info, warn};

/// Errors raised by [`Scene`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The robot or goal would sit outside the grid or on an obstacle.
    InvalidPlacement { what: &'static str, coord: Coord },
    /// Robot and goal were given the same cell.
    SameCell(Coord),
    Grid(GridError),
    Search(SearchError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPlacement { what, coord } => {
                write!(f, "{what} cannot be placed at {coord}")
            }
            Self::SameCell(c) => write!(f, "robot and goal both at {c}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Search(e) => write!(f, "search: {e}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SceneError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for SceneError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// A robot that walks to a goal over an editable obstacle grid.
#[derive(Debug, Clone)]
pub struct Scene {
    grid: ObstacleGrid,
    robot: Coord,
    goal: Coord,
    config: SearchConfig,
    path: Vec<Coord>,
    instructions: VecDeque<Move>,
    autopilot: bool,
}

impl Scene {
    /// Create a scene. Robot and goal must be distinct free cells.
    pub fn new(grid: ObstacleGrid, robot: Coord, goal: Coord) -> Result<Self, SceneError> {
        if !grid.is_free(robot) {
            return Err(SceneError::InvalidPlacement {
                what: "robot",
                coord: robot,
            });
        }
        if !grid.is_free(goal) {
            return Err(SceneError::InvalidPlacement {
                what: "goal",
                coord: goal,
            });
        }
        if robot == goal {
            return Err(SceneError::SameCell(robot));
        }
        Ok(Self {
            grid,
            robot,
            goal,
            config: SearchConfig::default(),
            path: Vec::new(),
            instructions: VecDeque::new(),
            autopilot: false,
        })
    }

    /// Use `config` for subsequent plans.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn grid(&self) -> &ObstacleGrid {
        &self.grid
    }

    pub fn robot(&self) -> Coord {
        self.robot
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The last planned path, empty if none is current.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Moves still queued for the autopilot, next first.
    pub fn pending_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.instructions.iter().copied()
    }

    pub fn is_autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn reached_goal(&self) -> bool {
        self.robot == self.goal
    }

    /// Manually move the robot one cell.
    ///
    /// Ignored while the autopilot is driving. Returns whether the robot
    /// moved; moves into obstacles or off the grid are refused.
    pub fn move_robot(&mut self, m: Move) -> bool {
        if self.autopilot {
            return false;
        }
        let moved = self.try_move(m);
        if moved {
            self.clear_plan();
        }
        moved
    }

    /// Remove an obstacle, or add one unless the cell holds the robot or
    /// the goal. Returns whether the grid changed.
    pub fn toggle_obstacle(&mut self, cell: Coord) -> Result<bool, SceneError> {
        let changed = if self.grid.is_obstacle(cell) {
            self.grid.remove_obstacle(cell)
        } else if cell != self.robot && cell != self.goal {
            self.grid.add_obstacle(cell)?
        } else {
            false
        };
        if changed {
            debug!("obstacle toggled at {cell}");
            self.cancel();
        }
        Ok(changed)
    }

    /// Move the goal onto a free cell other than the robot's. Returns
    /// whether the goal is now at `cell`.
    pub fn set_goal(&mut self, cell: Coord) -> bool {
        if !self.grid.is_free(cell) || cell == self.robot {
            return false;
        }
        if cell != self.goal {
            self.goal = cell;
            self.cancel();
        }
        true
    }

    /// Plan a route from the robot to the goal and queue its moves.
    ///
    /// The autopilot engages when there is at least one move to make. An
    /// unreachable goal leaves an empty plan and the autopilot off.
    pub fn plan(&mut self) -> Result<&[Coord], SceneError> {
        let path = find_path(&self.grid, self.robot, self.goal, &self.config)?;
        let moves = moves_from_path(&path)?;
        if path.is_empty() {
            info!("no route from {} to {}", self.robot, self.goal);
        } else {
            info!(
                "planned {} moves from {} to {}",
                moves.len(),
                self.robot,
                self.goal
            );
        }
        self.path = path;
        self.instructions = moves.into();
        self.autopilot = !self.instructions.is_empty();
        Ok(&self.path)
    }

    /// Take the next queued move.
    ///
    /// Returns the move taken, or `None` when nothing is queued. If the
    /// move has become impossible the plan is abandoned and `None` is
    /// returned.
    pub fn step(&mut self) -> Option<Move> {
        let m = self.instructions.pop_front()?;
        if !self.try_move(m) {
            warn!("autopilot move {m} from {} is blocked, abandoning plan", self.robot);
            self.cancel();
            return None;
        }
        if self.instructions.is_empty() {
            self.autopilot = false;
        }
        Some(m)
    }

    /// Plan and drive until the queue drains. Returns the moves taken.
    pub fn run_autopilot(&mut self) -> Result<Vec<Move>, SceneError> {
        self.plan()?;
        let mut taken = Vec::new();
        while let Some(m) = self.step() {
            taken.push(m);
        }
        Ok(taken)
    }

    /// Drop the current plan and disengage the autopilot.
    pub fn cancel(&mut self) {
        self.clear_plan();
        self.autopilot = false;
    }

    fn clear_plan(&mut self) {
        self.path.clear();
        self.instructions.clear();
    }

    fn try_move(&mut self, m: Move) -> bool {
        let next = m.apply(self.robot);
        if !self.grid.is_free(next) {
            return false;
        }
        self.robot = next;
        true
    }
}
