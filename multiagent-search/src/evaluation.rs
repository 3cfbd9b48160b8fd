//! Position evaluators: the functions that score the leaves of a search.
//!
//! Higher is better for the maximizer. None of these touch the position they are given, the
//! reflex evaluator only asks the engine for a fresh successor.

use crate::game::{FoodGrid, GridGame, MinimizerState, Position, ScoreGettableGame, MAXIMIZER};

/// Weight of the nearest-food bonus in [better_evaluation]
pub const FOOD_WEIGHT: f64 = 10.0;

/// Weight of the bonus for chasing a scared minimizer in [better_evaluation]
pub const SCARED_MINIMIZER_WEIGHT: f64 = 10.0;

/// Weight of the penalty for being near a dangerous minimizer in [better_evaluation]
pub const HOSTILE_MINIMIZER_WEIGHT: f64 = 100.0;

/// This trait is used to control something that can return a score from a game position
///
/// The tree searches only ever talk to their leaf evaluator through this trait, so any closure
/// over a game works as well as the registry evaluators.
pub trait Scorable<GameType> {
    /// Convert the given position into a score
    fn score(&self, game: &GameType) -> f64;
}

impl<GameType, FnLike: Fn(&GameType) -> f64> Scorable<GameType> for FnLike {
    fn score(&self, game: &GameType) -> f64 {
        (self)(game)
    }
}

/// The Manhattan distance from `from` to the closest food, or `None` when there is no food left
pub fn nearest_food_distance(from: Position, food: &FoodGrid) -> Option<u32> {
    food.positions()
        .map(|f| from.manhattan_distance(&f))
        .min()
}

/// The raw game score, unmodified
pub fn score_evaluation<G: ScoreGettableGame>(game: &G) -> f64 {
    game.get_score()
}

/// The minimizer part of [better_evaluation]
///
/// Each scared agent adds `10 / distance`, each dangerous one subtracts `100 / distance`. An agent
/// standing on the maximizer (distance 0) adds nothing at all, scared or not.
pub fn minimizer_term(from: Position, minimizers: &[MinimizerState]) -> f64 {
    minimizers
        .iter()
        .map(|m| {
            let distance = from.manhattan_distance(&m.position);
            if distance == 0 {
                0.0
            } else if m.is_scared() {
                SCARED_MINIMIZER_WEIGHT / f64::from(distance)
            } else {
                -HOSTILE_MINIMIZER_WEIGHT / f64::from(distance)
            }
        })
        .sum()
}

/// The composite heuristic: `score + 10 / nearest food + minimizer term`
///
/// With no food left the food term is 0. Food under the maximizer counts as distance 1.
pub fn better_evaluation<G: GridGame>(game: &G) -> f64 {
    let position = game.maximizer_position();

    let food_term = match nearest_food_distance(position, game.food()) {
        Some(distance) => FOOD_WEIGHT / f64::from(distance.max(1)),
        None => 0.0,
    };

    game.get_score() + food_term + minimizer_term(position, &game.minimizer_states())
}

/// The one-ply reflex evaluator
///
/// Scores the maximizer's successor as `successor score - distance to the nearest food`, where
/// food is read from the *current* position. Ending up on or next to a minimizer that isn't
/// scared is `-inf` regardless of anything else, and so is a position with no food left.
pub fn reflex_evaluation<G: GridGame>(game: &G, mv: &G::Move) -> f64 {
    let successor = game.successor(MAXIMIZER, mv);
    let new_position = successor.maximizer_position();

    let threatened = successor
        .minimizer_states()
        .iter()
        .filter(|m| !m.is_scared())
        .any(|m| m.position.threat_zone().any(|p| p == new_position));
    if threatened {
        return f64::NEG_INFINITY;
    }

    // An empty food map is infinitely far away. Returned directly so a `+inf` score can't
    // turn it into NaN
    let food_distance = match nearest_food_distance(new_position, game.food()) {
        Some(distance) => f64::from(distance),
        None => return f64::NEG_INFINITY,
    };

    successor.get_score() - food_distance
}
