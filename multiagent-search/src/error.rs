use thiserror::Error;

use crate::game::AgentIndex;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Everything that can go wrong while configuring or running a search
pub enum Error {
    /// The evaluator name is not in the registry
    #[error("unknown evaluator `{0}`")]
    UnknownEvaluator(String),

    /// The evaluator scores moves rather than positions, so it can't sit at the leaves of a tree
    #[error("evaluator `{0}` scores moves, not positions, and can't terminate a tree search")]
    NotALeafEvaluator(&'static str),

    /// The depth isn't a non-negative integer
    #[error("invalid search depth `{0}`")]
    InvalidDepth(String),

    /// An agent argument without a `=`
    #[error("malformed agent argument `{0}`, expected key=value")]
    MalformedAgentArgument(String),

    /// An agent argument with a key we don't know about
    #[error("unknown agent argument `{0}`")]
    UnknownAgentArgument(String),

    /// The search was asked for a move where the agent has none
    #[error("agent {agent} has no legal moves")]
    NoLegalMoves {
        #[allow(missing_docs)]
        agent: AgentIndex,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
