use std::str::FromStr;

use derivative::Derivative;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    registry::{Evaluator, LeafEvaluator},
};

/// How many full rounds the tree searches look ahead unless told otherwise
pub const DEFAULT_DEPTH: u32 = 2;

const DEFAULT_EVAL_FN: &str = "scoreEvaluationFunction";

#[derive(Derivative, Clone)]
#[derivative(Debug(bound = ""))]
/// The evaluator and depth limit shared by every node of a search
///
/// A depth of `D` means `D` full rounds, each agent moving once per round.
///
/// ```
/// use multiagent_search::{LeafEvaluator, SearchConfig};
///
/// let defaults: SearchConfig<LeafEvaluator> = Default::default();
///
/// assert_eq!(defaults.depth(), 2);
/// assert_eq!(*defaults.evaluator(), LeafEvaluator::Score);
/// ```
pub struct SearchConfig<E> {
    #[derivative(Debug = "ignore")]
    evaluator: E,
    depth: u32,
}

impl<E> SearchConfig<E> {
    /// Construct a new `SearchConfig`
    pub fn new(evaluator: E, depth: u32) -> Self {
        Self { evaluator, depth }
    }

    /// The leaf evaluator
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// The depth limit, in full rounds
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for SearchConfig<LeafEvaluator> {
    fn default() -> Self {
        Self::new(LeafEvaluator::default(), DEFAULT_DEPTH)
    }
}

impl TryFrom<&AgentArgs> for SearchConfig<LeafEvaluator> {
    type Error = Error;

    fn try_from(args: &AgentArgs) -> Result<Self> {
        Ok(Self::new(args.eval_fn.parse()?, args.depth))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// The textual agent configuration, e.g. `evalFn=better,depth=3`
///
/// Both keys are optional. `evalFn` defaults to `scoreEvaluationFunction` and `depth` to
/// [DEFAULT_DEPTH]. The evaluator name is only checked against the registry when the arguments
/// are resolved, see [AgentArgs::search_config] and [AgentArgs::evaluator].
pub struct AgentArgs {
    /// Registry name of the evaluator
    #[serde(default = "default_eval_fn")]
    pub eval_fn: String,
    /// Depth limit, in full rounds
    #[serde(default = "default_depth")]
    pub depth: u32,
}

fn default_eval_fn() -> String {
    DEFAULT_EVAL_FN.to_owned()
}

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

impl Default for AgentArgs {
    fn default() -> Self {
        Self {
            eval_fn: default_eval_fn(),
            depth: default_depth(),
        }
    }
}

impl AgentArgs {
    /// Resolve into the configuration for a tree search. Fails on an unknown evaluator, or on
    /// one that can't score a bare position
    pub fn search_config(&self) -> Result<SearchConfig<LeafEvaluator>> {
        self.try_into()
    }

    /// Resolve the evaluator name against the full registry
    pub fn evaluator(&self) -> Result<Evaluator> {
        self.eval_fn.parse()
    }
}

impl FromStr for AgentArgs {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut args = AgentArgs::default();

        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| Error::MalformedAgentArgument(pair.to_owned()))?;

            match key.trim() {
                "evalFn" => args.eval_fn = value.trim().to_owned(),
                "depth" => {
                    args.depth = value
                        .trim()
                        .parse()
                        .map_err(|_| Error::InvalidDepth(value.to_owned()))?
                }
                other => return Err(Error::UnknownAgentArgument(other.to_owned())),
            }
        }

        Ok(args)
    }
}
