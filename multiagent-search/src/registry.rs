//! The fixed set of evaluators that can be picked by name.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    evaluation::{better_evaluation, reflex_evaluation, score_evaluation, Scorable},
    game::{GridGame, MAXIMIZER},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Every evaluator known to the registry
pub enum Evaluator {
    /// [reflex_evaluation], which scores a move rather than a position
    Reflex,
    /// [score_evaluation]
    Score,
    /// [better_evaluation]
    Better,
}

impl Evaluator {
    /// All registered evaluators
    pub const ALL: [Evaluator; 3] = [Evaluator::Reflex, Evaluator::Score, Evaluator::Better];

    /// The canonical registry name
    pub fn name(&self) -> &'static str {
        self.names()[0]
    }

    fn names(&self) -> &'static [&'static str] {
        match self {
            Evaluator::Reflex => &["evaluationFunction", "reflex"],
            Evaluator::Score => &["scoreEvaluationFunction", "score"],
            Evaluator::Better => &["betterEvaluationFunction", "better"],
        }
    }

    /// Score the maximizer playing `mv` from `game`
    ///
    /// The reflex evaluator works on the move directly. The position evaluators score the
    /// maximizer's successor.
    pub fn score_action<G: GridGame>(&self, game: &G, mv: &G::Move) -> f64 {
        match LeafEvaluator::try_from(*self) {
            Ok(leaf) => leaf.score(&game.successor(MAXIMIZER, mv)),
            Err(_) => reflex_evaluation(game, mv),
        }
    }
}

impl FromStr for Evaluator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Evaluator::ALL
            .into_iter()
            .find(|e| e.names().contains(&s))
            .ok_or_else(|| Error::UnknownEvaluator(s.to_owned()))
    }
}

impl TryFrom<String> for Evaluator {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Evaluator> for String {
    fn from(e: Evaluator) -> Self {
        e.name().to_owned()
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// The registry evaluators that score a bare position, and so can end a tree search
pub enum LeafEvaluator {
    /// [score_evaluation]
    #[default]
    Score,
    /// [better_evaluation]
    Better,
}

impl TryFrom<Evaluator> for LeafEvaluator {
    type Error = Error;

    fn try_from(e: Evaluator) -> Result<Self> {
        match e {
            Evaluator::Score => Ok(LeafEvaluator::Score),
            Evaluator::Better => Ok(LeafEvaluator::Better),
            Evaluator::Reflex => Err(Error::NotALeafEvaluator(e.name())),
        }
    }
}

impl From<LeafEvaluator> for Evaluator {
    fn from(e: LeafEvaluator) -> Self {
        match e {
            LeafEvaluator::Score => Evaluator::Score,
            LeafEvaluator::Better => Evaluator::Better,
        }
    }
}

impl FromStr for LeafEvaluator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<Evaluator>()?.try_into()
    }
}

impl fmt::Display for LeafEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Evaluator::from(*self), f)
    }
}

impl<G: GridGame> Scorable<G> for LeafEvaluator {
    fn score(&self, game: &G) -> f64 {
        match self {
            LeafEvaluator::Score => score_evaluation(game),
            LeafEvaluator::Better => better_evaluation(game),
        }
    }
}
