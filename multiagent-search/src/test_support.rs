//! Small games for the unit tests: hand built trees and a tiny grid world.

use std::rc::Rc;

use rand::Rng;

use crate::game::{
    AgentCountableGame, AgentIndex, FoodGettableGame, FoodGrid, MaximizerPositionGettableGame,
    MinimizerState, MinimizerStateGettableGame, MoveGeneratingGame, Position, ScoreGettableGame,
    SuccessorGame, TerminalDeterminableGame, MAXIMIZER,
};

#[derive(Debug, Clone)]
pub struct TreeNode {
    score: f64,
    lost: bool,
    children: Vec<Rc<TreeNode>>,
}

impl TreeNode {
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn lost(mut self) -> Self {
        self.lost = true;
        self
    }
}

pub fn leaf(score: f64) -> TreeNode {
    TreeNode {
        score,
        lost: false,
        children: vec![],
    }
}

pub fn node(children: Vec<TreeNode>) -> TreeNode {
    TreeNode {
        score: 0.0,
        lost: false,
        children: children.into_iter().map(Rc::new).collect(),
    }
}

/// A game where every agent picks a child by index, whoever's turn it is
#[derive(Debug, Clone)]
pub struct TreeGame {
    num_agents: usize,
    node: Rc<TreeNode>,
}

impl TreeGame {
    pub fn new(num_agents: usize, root: TreeNode) -> Self {
        Self {
            num_agents,
            node: Rc::new(root),
        }
    }
}

/// A full tree with `depth` rounds of `num_agents` plies and random integer leaves
pub fn random_tree<R: Rng>(
    rng: &mut R,
    num_agents: usize,
    depth: u32,
    max_branching: usize,
) -> TreeGame {
    let height = num_agents * depth as usize;
    TreeGame::new(num_agents, random_node(rng, height, max_branching))
}

fn random_node<R: Rng>(rng: &mut R, height: usize, max_branching: usize) -> TreeNode {
    if height == 0 {
        return leaf(f64::from(rng.gen_range(-10..=10i32)));
    }

    let branching = rng.gen_range(1..=max_branching);
    node(
        (0..branching)
            .map(|_| random_node(rng, height - 1, max_branching))
            .collect(),
    )
}

impl AgentCountableGame for TreeGame {
    fn num_agents(&self) -> usize {
        self.num_agents
    }
}

impl MoveGeneratingGame for TreeGame {
    type Move = usize;

    fn legal_moves(&self, _agent: AgentIndex) -> Vec<usize> {
        (0..self.node.children.len()).collect()
    }
}

impl SuccessorGame for TreeGame {
    fn successor(&self, _agent: AgentIndex, mv: &usize) -> Self {
        Self {
            num_agents: self.num_agents,
            node: self.node.children[*mv].clone(),
        }
    }
}

impl TerminalDeterminableGame for TreeGame {
    fn is_win(&self) -> bool {
        false
    }

    fn is_lose(&self) -> bool {
        self.node.lost
    }
}

impl ScoreGettableGame for TreeGame {
    fn get_score(&self) -> f64 {
        self.node.score
    }
}

const TIME_PENALTY: f64 = 1.0;
const FOOD_SCORE: f64 = 10.0;
const WIN_SCORE: f64 = 500.0;
const LOSE_PENALTY: f64 = 500.0;
const EAT_MINIMIZER_SCORE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    const MOVING: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    fn apply(self, p: Position) -> Position {
        match self {
            Direction::North => Position::new(p.x, p.y + 1),
            Direction::South => Position::new(p.x, p.y - 1),
            Direction::East => Position::new(p.x + 1, p.y),
            Direction::West => Position::new(p.x - 1, p.y),
            Direction::Stop => p,
        }
    }
}

/// An open board without walls
///
/// The maximizer pays a point per move, scores for food and for catching scared minimizers, and
/// wins once the food is gone. Walking into (or being walked into by) a dangerous minimizer
/// loses. Minimizers can't stop and their scared timers tick down as they move.
#[derive(Debug, Clone)]
pub struct GridWorld {
    width: usize,
    height: usize,
    maximizer: Position,
    minimizers: Vec<MinimizerState>,
    minimizer_starts: Vec<Position>,
    food: FoodGrid,
    score: f64,
    win: bool,
    lose: bool,
    allow_stop: bool,
}

impl GridWorld {
    pub fn new(width: usize, height: usize, maximizer: Position) -> Self {
        Self {
            width,
            height,
            maximizer,
            minimizers: vec![],
            minimizer_starts: vec![],
            food: FoodGrid::new(width, height),
            score: 0.0,
            win: false,
            lose: false,
            allow_stop: true,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn with_food(mut self, food: Vec<Position>) -> Self {
        self.food = FoodGrid::from_positions(self.width, self.height, food);
        self
    }

    pub fn with_minimizer(mut self, minimizer: MinimizerState) -> Self {
        self.minimizers.push(minimizer);
        self.minimizer_starts.push(minimizer.position);
        self
    }

    pub fn with_minimizer_at(self, position: Position) -> Self {
        self.with_minimizer(MinimizerState {
            position,
            scared_timer: 0,
        })
    }

    pub fn without_stop(mut self) -> Self {
        self.allow_stop = false;
        self
    }

    fn on_board(&self, p: Position) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn resolve_collisions(&mut self) {
        for (i, m) in self.minimizers.iter_mut().enumerate() {
            if m.position != self.maximizer {
                continue;
            }

            if m.is_scared() {
                self.score += EAT_MINIMIZER_SCORE;
                m.position = self.minimizer_starts[i];
                m.scared_timer = 0;
            } else if !self.lose {
                self.score -= LOSE_PENALTY;
                self.lose = true;
            }
        }
    }
}

impl AgentCountableGame for GridWorld {
    fn num_agents(&self) -> usize {
        1 + self.minimizers.len()
    }
}

impl MoveGeneratingGame for GridWorld {
    type Move = Direction;

    fn legal_moves(&self, agent: AgentIndex) -> Vec<Direction> {
        let from = if agent == MAXIMIZER {
            self.maximizer
        } else {
            match self.minimizers.get(agent - 1) {
                Some(m) => m.position,
                None => return vec![],
            }
        };

        let mut moves: Vec<_> = Direction::MOVING
            .into_iter()
            .filter(|d| self.on_board(d.apply(from)))
            .collect();
        if agent == MAXIMIZER && self.allow_stop {
            moves.push(Direction::Stop);
        }
        moves
    }
}

impl SuccessorGame for GridWorld {
    fn successor(&self, agent: AgentIndex, mv: &Direction) -> Self {
        let mut next = self.clone();

        if agent == MAXIMIZER {
            next.maximizer = mv.apply(self.maximizer);
            next.score -= TIME_PENALTY;

            let (x, y) = (next.maximizer.x as usize, next.maximizer.y as usize);
            if next.food.get(x, y) {
                next.food.set(x, y, false);
                next.score += FOOD_SCORE;

                if next.food.count() == 0 {
                    next.score += WIN_SCORE;
                    next.win = true;
                }
            }
        } else {
            let m = &mut next.minimizers[agent - 1];
            m.position = mv.apply(m.position);
            m.scared_timer = m.scared_timer.saturating_sub(1);
        }

        next.resolve_collisions();
        next
    }
}

impl TerminalDeterminableGame for GridWorld {
    fn is_win(&self) -> bool {
        self.win
    }

    fn is_lose(&self) -> bool {
        self.lose
    }
}

impl ScoreGettableGame for GridWorld {
    fn get_score(&self) -> f64 {
        self.score
    }
}

impl MaximizerPositionGettableGame for GridWorld {
    fn maximizer_position(&self) -> Position {
        self.maximizer
    }
}

impl MinimizerStateGettableGame for GridWorld {
    fn minimizer_states(&self) -> Vec<MinimizerState> {
        self.minimizers.clone()
    }
}

impl FoodGettableGame for GridWorld {
    fn food(&self) -> &FoodGrid {
        &self.food
    }
}
