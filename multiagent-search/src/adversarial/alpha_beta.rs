use derivative::Derivative;
use tracing::{debug, info_span, warn};

use crate::{
    config::SearchConfig,
    error::{Error, Result},
    evaluation::Scorable,
    game::{SearchableGame, MAXIMIZER},
};

use super::{is_leaf, SearchAgent, Turn};

#[derive(Derivative, Clone)]
#[derivative(Debug(bound = ""))]
/// Minimax with Alpha-Beta pruning
///
/// `alpha` is the best value the maximizer can already guarantee somewhere on the path to the
/// current node and `beta` the best the minimizers can. As soon as a node's running value is
/// strictly outside of that window its remaining children are skipped. Pruning only ever
/// changes how many nodes get visited, never which move gets chosen.
pub struct AlphaBetaAgent<E> {
    config: SearchConfig<E>,
}

impl<E> AlphaBetaAgent<E> {
    /// Construct a new `AlphaBetaAgent`
    pub fn new(config: SearchConfig<E>) -> Self {
        Self { config }
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &SearchConfig<E> {
        &self.config
    }

    /// The pruned minimax value of `game` with `turn.agent` to move
    ///
    /// When a cutoff happens the returned value is only a bound, which is still enough for the
    /// parent to rule this node out.
    pub fn value<G>(&self, game: &G, turn: Turn, alpha: f64, beta: f64) -> f64
    where
        G: SearchableGame,
        E: Scorable<G>,
    {
        let mut alpha = alpha;
        let mut beta = beta;

        let turn = turn.wrapped(game.num_agents());

        if is_leaf(game, turn, self.config.depth()) {
            return self.config.evaluator().score(game);
        }

        let moves = game.legal_moves(turn.agent);
        if moves.is_empty() {
            return self.config.evaluator().score(game);
        }

        if turn.is_maximizing() {
            let mut best = f64::NEG_INFINITY;
            for m in moves.iter() {
                let value = self.value(
                    &game.successor(turn.agent, m),
                    turn.next_agent(),
                    alpha,
                    beta,
                );
                best = best.max(value);

                if best > beta {
                    return best;
                }
                alpha = alpha.max(best);
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for m in moves.iter() {
                let value = self.value(
                    &game.successor(turn.agent, m),
                    turn.next_agent(),
                    alpha,
                    beta,
                );
                best = best.min(value);

                if best < alpha {
                    return best;
                }
                beta = beta.min(best);
            }
            best
        }
    }
}

impl<G, E> SearchAgent<G> for AlphaBetaAgent<E>
where
    G: SearchableGame,
    E: Scorable<G>,
{
    fn choose_action(&self, game: &G) -> Result<G::Move> {
        info_span!(
            "alpha_beta",
            depth = self.config.depth(),
            num_agents = game.num_agents(),
            chosen_move = tracing::field::Empty,
            chosen_score = tracing::field::Empty,
        )
        .in_scope(|| {
            let mut alpha = f64::NEG_INFINITY;
            let beta = f64::INFINITY;

            let mut best: Option<(G::Move, f64)> = None;

            for m in game.legal_moves(MAXIMIZER) {
                let value = self.value(
                    &game.successor(MAXIMIZER, &m),
                    Turn::root().next_agent(),
                    alpha,
                    beta,
                );
                debug!(action = ?m, value, alpha, "Scored root move");

                if best.as_ref().map_or(true, |(_, b)| value > *b) {
                    best = Some((m, value));
                }

                let best_value = best.as_ref().map_or(f64::NEG_INFINITY, |(_, b)| *b);

                // The root shares the inner nodes' cutoff test. Beta never moves off of +inf
                // here, so this never fires
                if best_value > beta {
                    break;
                }
                alpha = alpha.max(best_value);
            }

            let (chosen, score) = best.ok_or_else(|| {
                warn!("The maximizer has no legal moves");
                Error::NoLegalMoves { agent: MAXIMIZER }
            })?;

            let current_span = tracing::Span::current();
            current_span.record("chosen_move", format!("{:?}", chosen).as_str());
            current_span.record("chosen_score", &score);

            Ok(chosen)
        })
    }
}
