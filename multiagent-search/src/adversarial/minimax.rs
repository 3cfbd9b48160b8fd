use derivative::Derivative;
use tracing::info_span;

use crate::{
    config::SearchConfig,
    error::Result,
    evaluation::Scorable,
    game::SearchableGame,
};

use super::{best_root_move, is_leaf, SearchAgent, Turn};

#[derive(Derivative, Clone)]
#[derivative(Debug(bound = ""))]
/// Exhaustive depth-limited minimax
///
/// The maximizer takes the highest child value, every other agent the lowest.
pub struct MinimaxAgent<E> {
    config: SearchConfig<E>,
}

impl<E> MinimaxAgent<E> {
    /// Construct a new `MinimaxAgent`
    pub fn new(config: SearchConfig<E>) -> Self {
        Self { config }
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &SearchConfig<E> {
        &self.config
    }

    /// The minimax value of `game` with `turn.agent` to move
    ///
    /// An agent index past the last agent rolls over to the maximizer one round deeper. Won and
    /// lost positions, positions at the depth limit, and positions where the agent to move has
    /// no legal moves are scored by the leaf evaluator.
    pub fn value<G>(&self, game: &G, turn: Turn) -> f64
    where
        G: SearchableGame,
        E: Scorable<G>,
    {
        let turn = turn.wrapped(game.num_agents());

        if is_leaf(game, turn, self.config.depth()) {
            return self.config.evaluator().score(game);
        }

        let moves = game.legal_moves(turn.agent);
        if moves.is_empty() {
            return self.config.evaluator().score(game);
        }

        let values = moves
            .iter()
            .map(|m| self.value(&game.successor(turn.agent, m), turn.next_agent()));

        if turn.is_maximizing() {
            values.fold(f64::NEG_INFINITY, f64::max)
        } else {
            values.fold(f64::INFINITY, f64::min)
        }
    }
}

impl<G, E> SearchAgent<G> for MinimaxAgent<E>
where
    G: SearchableGame,
    E: Scorable<G>,
{
    fn choose_action(&self, game: &G) -> Result<G::Move> {
        info_span!(
            "minimax",
            depth = self.config.depth(),
            num_agents = game.num_agents(),
            chosen_move = tracing::field::Empty,
            chosen_score = tracing::field::Empty,
        )
        .in_scope(|| {
            let (chosen, score) =
                best_root_move(game, |successor| self.value(successor, Turn::root().next_agent()))?;

            let current_span = tracing::Span::current();
            current_span.record("chosen_move", format!("{:?}", chosen).as_str());
            current_span.record("chosen_score", &score);

            Ok(chosen)
        })
    }
}
