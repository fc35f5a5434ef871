/*!

Every fallible operation in the engine reports one of a small, closed set of error kinds. Precondition failures
(`InvalidRule`, `InvalidEqualityLhs`) are translator bugs and are meant to be surfaced immediately, not recovered
from. `BudgetExceeded` is the one kind that leaves a well-formed, merely non-confluent, partial system behind it.

*/

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub enum EngineError {
  /// A rule whose source is not strictly greater than its target under the term order.
  InvalidRule,
  /// An `Equality` constraint whose lhs is not an abstract parameter (generic type or associated-type selection).
  InvalidEqualityLhs,
  /// Completion did not converge within the configured rule-count/step-count bounds. The partial system returned
  /// alongside this error remains well-formed but is not guaranteed confluent.
  BudgetExceeded,
  /// An overlap's packed `(rule_id, rule_id, position)` key does not fit the 16-bit-per-field encoding.
  OverlapIdOverflow,
}

impl Display for EngineError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      EngineError::InvalidRule => {
        write!(f, "rule source is not strictly greater than its target under the term order")
      }
      EngineError::InvalidEqualityLhs => {
        write!(f, "equality constraint's left-hand side is not an abstract parameter")
      }
      EngineError::BudgetExceeded => {
        write!(f, "completion did not converge within the configured rule-count/step-count budget")
      }
      EngineError::OverlapIdOverflow => {
        write!(f, "overlap identifier does not fit the 16-bit-per-field packed encoding")
      }
    }
  }
}

impl Debug for EngineError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for EngineError {}
