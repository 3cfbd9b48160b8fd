#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Adversarial search for a single maximizing agent playing against one or more minimizing
//! agents on a grid: depth-limited Minimax, Minimax with Alpha-Beta pruning and Expectimax, plus
//! a one-ply reflex agent and the evaluation functions they score positions with.
//!
//! The game itself lives outside this crate. Anything that implements the traits in [game] can
//! be searched, and [AgentArgs] turns the usual `evalFn=...,depth=...` argument string into a
//! ready to use [SearchConfig].
//!
//! ```rust
//! use multiagent_search::{LeafEvaluator, SearchConfig};
//!
//! let config = SearchConfig::new(LeafEvaluator::Better, 3);
//! assert_eq!(config.depth(), 3);
//! assert_eq!(config.evaluator().to_string(), "betterEvaluationFunction");
//! ```

pub mod adversarial;
pub mod evaluation;
pub mod game;
pub mod registry;

mod config;
mod error;
mod reflex;

#[cfg(test)]
mod test_support;

pub use adversarial::{AlphaBetaAgent, ExpectimaxAgent, MinimaxAgent, SearchAgent, Turn};
pub use config::{AgentArgs, SearchConfig, DEFAULT_DEPTH};
pub use error::{Error, Result};
pub use evaluation::Scorable;
pub use game::{
    AgentIndex, FoodGrid, GridGame, MinimizerState, Position, SearchableGame, MAXIMIZER,
};
pub use reflex::ReflexAgent;
pub use registry::{Evaluator, LeafEvaluator};
