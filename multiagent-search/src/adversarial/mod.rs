//! Depth-limited tree searches for one maximizing agent against any number of other agents.
//!
//! Three strategies share the same skeleton:
//!
//! - [MinimaxAgent] assumes every other agent works to minimize the maximizer's score
//! - [AlphaBetaAgent] does the same, but skips subtrees that can't change the outcome
//! - [ExpectimaxAgent] assumes every other agent picks a legal move uniformly at random
//!
//! Turn order and depth are threaded through the recursion as a [Turn] value, so a search never
//! keeps state between calls and any number of searches can run at once.
//!
//! ```rust
//! use multiagent_search::{AgentArgs, MinimaxAgent};
//!
//! // Same format the command line takes, see [AgentArgs]
//! let args: AgentArgs = "evalFn=better,depth=3".parse().unwrap();
//! let minimax = MinimaxAgent::new(args.search_config().unwrap());
//!
//! assert_eq!(minimax.config().depth(), 3);
//! ```

mod alpha_beta;
pub use alpha_beta::AlphaBetaAgent;

mod expectimax;
pub use expectimax::ExpectimaxAgent;

mod minimax;
pub use minimax::MinimaxAgent;

use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    game::{AgentIndex, SearchableGame, MAXIMIZER},
};

/// Anything that can pick the maximizer's next move
pub trait SearchAgent<GameType: SearchableGame> {
    /// Pick the maximizer's move from the given position
    ///
    /// Fails with [Error::NoLegalMoves] when the maximizer can't move at all.
    fn choose_action(&self, game: &GameType) -> Result<GameType::Move>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Whose turn it is, and how many full rounds have been played
pub struct Turn {
    /// The agent about to move
    pub agent: AgentIndex,
    /// Completed full rounds
    pub depth: u32,
}

impl Turn {
    /// The maximizer's move at the root of the search
    pub fn root() -> Self {
        Self {
            agent: MAXIMIZER,
            depth: 0,
        }
    }

    /// The next agent in the same round. Use [Turn::wrapped] to roll over into the next round
    pub fn next_agent(self) -> Self {
        Self {
            agent: self.agent + 1,
            ..self
        }
    }

    /// Once every agent has moved, the turn goes back to the maximizer one round deeper
    pub fn wrapped(self, num_agents: usize) -> Self {
        if self.agent >= num_agents {
            Self {
                agent: MAXIMIZER,
                depth: self.depth + 1,
            }
        } else {
            self
        }
    }

    /// Whether the maximizer is the one moving
    pub fn is_maximizing(&self) -> bool {
        self.agent == MAXIMIZER
    }
}

/// Won, lost, or as deep as we are allowed to go
pub(crate) fn is_leaf<G: SearchableGame>(game: &G, turn: Turn, max_depth: u32) -> bool {
    game.is_over() || turn.depth >= max_depth
}

/// Scores every legal root move with `value_of` and keeps the first one with the strictly
/// highest value
pub(crate) fn best_root_move<G, F>(game: &G, mut value_of: F) -> Result<(G::Move, f64)>
where
    G: SearchableGame,
    F: FnMut(&G) -> f64,
{
    let mut best: Option<(G::Move, f64)> = None;

    for m in game.legal_moves(MAXIMIZER) {
        let value = value_of(&game.successor(MAXIMIZER, &m));
        debug!(action = ?m, value, "Scored root move");

        if best.as_ref().map_or(true, |(_, b)| value > *b) {
            best = Some((m, value));
        }
    }

    best.ok_or_else(|| {
        warn!("The maximizer has no legal moves");
        Error::NoLegalMoves { agent: MAXIMIZER }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_wraps_to_maximizer_and_deepens() {
        let turn = Turn::root().next_agent().next_agent();
        assert_eq!(turn, Turn { agent: 2, depth: 0 });
        assert_eq!(turn.wrapped(3), turn);

        let turn = turn.next_agent().wrapped(3);
        assert_eq!(turn, Turn { agent: 0, depth: 1 });
        assert!(turn.is_maximizing());
    }

    #[test]
    fn test_single_agent_game_deepens_every_move() {
        let mut turn = Turn::root();
        for expected_depth in 1..=3 {
            turn = turn.next_agent().wrapped(1);
            assert_eq!(
                turn,
                Turn {
                    agent: MAXIMIZER,
                    depth: expected_depth
                }
            );
        }
    }
}
