//! The rules-engine interface the search consumes.
//!
//! Game state, move generation and scoring all live outside of this crate. A game only has to
//! implement the small traits in this module; the tree searches need [SearchableGame] and the
//! grid heuristics additionally need [GridGame]. Both are implemented automatically for any
//! type that implements their parts.

use std::fmt::Debug;

use itertools::Itertools;

/// Identifies an agent by its place in the turn order
pub type AgentIndex = usize;

/// The agent whose move the search chooses. Every other index is a minimizing (or chance) agent
pub const MAXIMIZER: AgentIndex = 0;

/// The cells a minimizing agent threatens, relative to where it stands
const THREAT_OFFSETS: [(i32, i32); 5] = [(0, 0), (1, 0), (0, 1), (-1, 0), (0, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A cell on the board
pub struct Position {
    #[allow(missing_docs)]
    pub x: i32,
    #[allow(missing_docs)]
    pub y: i32,
}

impl Position {
    /// Construct a new `Position`
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The Manhattan distance between the two cells
    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// This cell and its four orthogonal neighbours
    pub fn threat_zone(&self) -> impl Iterator<Item = Position> + '_ {
        THREAT_OFFSETS
            .iter()
            .map(move |(dx, dy)| Position::new(self.x + dx, self.y + dy))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// What the search can see of a minimizing agent
pub struct MinimizerState {
    /// Where the agent currently stands
    pub position: Position,
    /// How many more moves the agent stays scared for. Zero means it is dangerous
    pub scared_timer: u32,
}

impl MinimizerState {
    /// Whether the agent is currently harmless
    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// The remaining collectibles as a boolean grid addressed by `(x, y)`
pub struct FoodGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl FoodGrid {
    /// An empty grid of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// A grid with food on exactly the given cells. Cells outside the grid are ignored
    pub fn from_positions(
        width: usize,
        height: usize,
        positions: impl IntoIterator<Item = Position>,
    ) -> Self {
        let mut grid = Self::new(width, height);
        for p in positions {
            if let (Ok(x), Ok(y)) = (usize::try_from(p.x), usize::try_from(p.y)) {
                grid.set(x, y, true);
            }
        }
        grid
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether there is food at `(x, y)`. Anything off the grid has no food
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.index(x, y).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Place or remove food at `(x, y)`. Off-grid writes are dropped
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = value;
        }
    }

    /// How many cells still hold food
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// Every cell that still holds food, column by column
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.width)
            .cartesian_product(0..self.height)
            .filter(|(x, y)| self.get(*x, *y))
            .map(|(x, y)| Position::new(x as i32, y as i32))
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}

/// Reports how many agents take turns
pub trait AgentCountableGame {
    /// Total number of agents, the maximizer included
    fn num_agents(&self) -> usize;
}

/// Enumerates legal moves
pub trait MoveGeneratingGame {
    /// A single legal action
    type Move: Clone + Debug;

    /// All legal moves for the given agent, in the engine's order
    fn legal_moves(&self, agent: AgentIndex) -> Vec<Self::Move>;
}

/// Produces successor positions. The receiver is never modified
pub trait SuccessorGame: MoveGeneratingGame + Sized {
    /// The position after `agent` plays `mv`
    fn successor(&self, agent: AgentIndex, mv: &Self::Move) -> Self;
}

/// Reports whether the game has been decided
pub trait TerminalDeterminableGame {
    #[allow(missing_docs)]
    fn is_win(&self) -> bool;

    #[allow(missing_docs)]
    fn is_lose(&self) -> bool;

    /// A won or lost position ends the search
    fn is_over(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// Reports the running game score
pub trait ScoreGettableGame {
    #[allow(missing_docs)]
    fn get_score(&self) -> f64;
}

/// Reports where the maximizing agent stands
pub trait MaximizerPositionGettableGame {
    #[allow(missing_docs)]
    fn maximizer_position(&self) -> Position;
}

/// Reports the minimizing agents, in turn order
pub trait MinimizerStateGettableGame {
    #[allow(missing_docs)]
    fn minimizer_states(&self) -> Vec<MinimizerState>;
}

/// Exposes the remaining collectibles
pub trait FoodGettableGame {
    #[allow(missing_docs)]
    fn food(&self) -> &FoodGrid;
}

/// Everything the tree searches need from a game
pub trait SearchableGame:
    AgentCountableGame + SuccessorGame + TerminalDeterminableGame + ScoreGettableGame
{
}

impl<T> SearchableGame for T where
    T: AgentCountableGame + SuccessorGame + TerminalDeterminableGame + ScoreGettableGame
{
}

/// A [SearchableGame] that also exposes the board, as needed by the grid heuristics
pub trait GridGame:
    SearchableGame + MaximizerPositionGettableGame + MinimizerStateGettableGame + FoodGettableGame
{
}

impl<T> GridGame for T where
    T: SearchableGame
        + MaximizerPositionGettableGame
        + MinimizerStateGettableGame
        + FoodGettableGame
{
}
