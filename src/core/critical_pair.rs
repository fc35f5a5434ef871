/*!

A critical pair is the result of two one-step rewrites of the same term, produced by an overlap between two
rules' source terms. `OverlapId` packs the `(lhs_id, rhs_id, position)` triple identifying one such overlap into a
single integer so the completion driver can track which overlaps it has already enumerated without re-deriving
them.

*/

use crate::api::term::Term;
use crate::core::error::EngineError;
use crate::core::rule::RuleId;

#[derive(Clone, Debug)]
pub struct CriticalPair {
  pub first: Term,
  pub second: Term,
}

impl CriticalPair {
  pub fn is_trivial(&self) -> bool {
    self.first == self.second
  }
}

/// A `(lhs_id, rhs_id, position)` triple packed into a `u64`, 16 bits per field. Sixteen bits per field suffices
/// for realistic generic signatures; an input whose rule ids or overlap positions overflow that range is reported
/// as [`EngineError::OverlapIdOverflow`] rather than silently truncated.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct OverlapId(u64);

const FIELD_MASK: usize = 0xFFFF;

impl OverlapId {
  pub fn new(lhs_id: RuleId, rhs_id: RuleId, position: usize) -> Result<OverlapId, EngineError> {
    if lhs_id > FIELD_MASK || rhs_id > FIELD_MASK || position > FIELD_MASK {
      return Err(EngineError::OverlapIdOverflow);
    }
    Ok(OverlapId((lhs_id as u64) << 32 | (rhs_id as u64) << 16 | position as u64))
  }
}
