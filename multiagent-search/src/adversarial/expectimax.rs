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
/// Expectimax: the maximizer maximizes, every other agent is a chance node
///
/// Minimizing agents are modeled as picking each of their legal moves with equal probability,
/// so their value is the plain mean of their children.
pub struct ExpectimaxAgent<E> {
    config: SearchConfig<E>,
}

impl<E> ExpectimaxAgent<E> {
    /// Construct a new `ExpectimaxAgent`
    pub fn new(config: SearchConfig<E>) -> Self {
        Self { config }
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &SearchConfig<E> {
        &self.config
    }

    /// The expectimax value of `game` with `turn.agent` to move
    pub fn value<G>(&self, game: &G, turn: Turn) -> f64
    where
        G: SearchableGame,
        E: Scorable<G>,
    {
        let turn = turn.wrapped(game.num_agents());

        if is_leaf(game, turn, self.config.depth()) {
            return self.config.evaluator().score(game);
        }

        // A chance node needs at least one outcome to average over
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
            values.sum::<f64>() / moves.len() as f64
        }
    }
}

impl<G, E> SearchAgent<G> for ExpectimaxAgent<E>
where
    G: SearchableGame,
    E: Scorable<G>,
{
    fn choose_action(&self, game: &G) -> Result<G::Move> {
        info_span!(
            "expectimax",
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
