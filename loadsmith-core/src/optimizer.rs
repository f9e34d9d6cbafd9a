use thiserror::Error;

use crate::{LoadPlan, OptimizeRequest};

/// Counters describing the work done for a single optimization.
///
/// The values depend only on the request, so repeated runs over the same
/// input report identical diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Number of compatibility groups formed from the request.
    pub groups_considered: usize,
    /// Orders that survived the individual capacity check.
    pub orders_considered: usize,
    /// Candidate subsets whose totals were computed.
    pub subsets_evaluated: u64,
}

/// Response from a successful optimization.
///
/// Serialises as the flat plan object with an additional `diagnostics` field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizeResponse {
    /// The selected load.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub plan: LoadPlan,
    /// Work counters for the call.
    #[cfg_attr(feature = "serde", serde(default))]
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Optimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// Request parameters were invalid, e.g. a zero-capacity vehicle.
    #[error("invalid request")]
    InvalidRequest,
    /// A compatibility group holds more orders than a subset mask can index.
    #[error("compatibility group of {size} orders exceeds the enumerable limit of {limit}")]
    GroupTooLarge {
        /// Orders in the offending group after feasibility filtering.
        size: usize,
        /// Largest group the optimizer can enumerate.
        limit: usize,
    },
}

/// Select the most valuable load a vehicle can carry.
///
/// Implementations may assume the request passed
/// [`OptimizeRequest::validate`]. An empty plan is a successful outcome, not
/// an error. Optimizers must be `Send + Sync` to operate safely across
/// threads.
pub trait Optimizer: Send + Sync {
    /// Optimize a request, producing a load plan or an error.
    ///
    /// # Errors
    ///
    /// Returns an [`OptimizeError`] when the request cannot be processed.
    fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, OptimizeError>;
}
