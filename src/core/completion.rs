/*!

The completion driver saturates a [`RewritingSystem`] by resolving critical pairs until none remain pending: a
LIFO worklist of critical pairs, and a set of already-visited overlap identifiers so the same overlap is never
enumerated twice across rounds. When the worklist drains, the system is confluent with respect to its order —
`reduce` then yields a unique normal form for every term.

*/

use std::collections::HashSet;

use crate::core::critical_pair::OverlapId;
use crate::core::error::EngineError;
use crate::core::rewriting_system::RewritingSystem;
use crate::core::rule::RuleId;
use crate::info;

/// Bounds on completion, checked between worklist pops and between overlap-enumeration rounds. Exceeding either
/// bound yields [`EngineError::BudgetExceeded`]; the system is left in its current, well-formed but not
/// necessarily confluent, state.
#[derive(Clone, Copy, Debug)]
pub struct Budget {
  pub max_rules: usize,
  pub max_steps: usize,
}

impl Default for Budget {
  fn default() -> Self {
    Budget { max_rules: 10_000, max_steps: 100_000 }
  }
}

/// Runs Knuth-Bendix completion on `system` to saturation, or until `budget` (if given) is exceeded.
pub fn complete(system: &mut RewritingSystem, budget: Option<Budget>) -> Result<(), EngineError> {
  let mut visited: HashSet<OverlapId> = HashSet::new();
  let mut pairs = Vec::new();
  let mut steps: usize = 0;

  let initial: Vec<RuleId> = system.active_rule_ids();
  for i in initial {
    collect_new_overlaps(system, i, &mut visited, &mut pairs)?;
  }

  while let Some(pair) = pairs.pop() {
    if let Some(budget) = budget {
      steps += 1;
      if steps > budget.max_steps || system.rule_count() > budget.max_rules {
        return Err(EngineError::BudgetExceeded);
      }
    }

    if let Some(_new_id) = system.resolve_critical_pair(pair)? {
      let active: Vec<RuleId> = system.active_rule_ids();
      for i in active {
        collect_new_overlaps(system, i, &mut visited, &mut pairs)?;
      }
    }
  }

  info!(2, "completion converged with {} active rules", system.active_rules().len());
  Ok(())
}

fn collect_new_overlaps(
  system: &RewritingSystem,
  i: RuleId,
  visited: &mut HashSet<OverlapId>,
  pairs: &mut Vec<crate::core::critical_pair::CriticalPair>,
) -> Result<(), EngineError> {
  let mut fresh = Vec::new();
  system.for_each_overlap(i, |j, position| fresh.push((j, position)));
  for (j, position) in fresh {
    let id = OverlapId::new(i, j, position)?;
    if visited.insert(id) {
      pairs.push(system.form_critical_pair(i, j, position));
    }
  }
  Ok(())
}
