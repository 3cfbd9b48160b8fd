use rand::{seq::SliceRandom, thread_rng, Rng};
use tracing::{debug, info_span, warn};

use crate::{
    adversarial::SearchAgent,
    error::{Error, Result},
    game::{GridGame, MAXIMIZER},
    registry::Evaluator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Looks a single move ahead
///
/// Every legal move is scored with the evaluator and one of the best is picked at random, so
/// unlike the tree searches this agent isn't deterministic when moves tie.
pub struct ReflexAgent {
    evaluator: Evaluator,
}

impl Default for ReflexAgent {
    fn default() -> Self {
        Self::new(Evaluator::Reflex)
    }
}

impl ReflexAgent {
    /// Construct a new `ReflexAgent`
    pub fn new(evaluator: Evaluator) -> Self {
        Self { evaluator }
    }

    #[allow(missing_docs)]
    pub fn evaluator(&self) -> Evaluator {
        self.evaluator
    }

    /// Every legal maximizer move with its score, in the engine's order
    pub fn scored_moves<G: GridGame>(&self, game: &G) -> Vec<(G::Move, f64)> {
        game.legal_moves(MAXIMIZER)
            .into_iter()
            .map(|m| {
                let score = self.evaluator.score_action(game, &m);
                (m, score)
            })
            .collect()
    }

    /// Pick uniformly among the best scoring moves, using the given source of randomness
    pub fn choose_action_with_rng<G: GridGame, R: Rng + ?Sized>(
        &self,
        game: &G,
        rng: &mut R,
    ) -> Result<G::Move> {
        info_span!(
            "reflex",
            evaluator = %self.evaluator,
            chosen_move = tracing::field::Empty,
            chosen_score = tracing::field::Empty,
        )
        .in_scope(|| {
            let scored = self.scored_moves(game);
            let best_score = scored
                .iter()
                .map(|(_, s)| *s)
                .fold(f64::NEG_INFINITY, f64::max);

            let best_moves: Vec<G::Move> = scored
                .into_iter()
                .filter(|(_, s)| *s == best_score)
                .map(|(m, _)| m)
                .collect();
            debug!(best_score, ties = best_moves.len(), "Scored moves");

            let chosen = best_moves.choose(rng).cloned().ok_or_else(|| {
                warn!("The maximizer has no legal moves");
                Error::NoLegalMoves { agent: MAXIMIZER }
            })?;

            let current_span = tracing::Span::current();
            current_span.record("chosen_move", format!("{:?}", chosen).as_str());
            current_span.record("chosen_score", &best_score);

            Ok(chosen)
        })
    }
}

impl<G: GridGame> SearchAgent<G> for ReflexAgent {
    fn choose_action(&self, game: &G) -> Result<G::Move> {
        self.choose_action_with_rng(game, &mut thread_rng())
    }
}
