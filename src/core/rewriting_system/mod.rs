/*!

The `RewritingSystem` owns a [`RuleStore`] and a [`Trie`] index into it, and is the component everything else is
built around: rule insertion with automatic right-simplification, reduction to normal form, overlap enumeration,
and critical-pair formation and resolution. The completion driver (`crate::core::completion`) iterates over this
component's rule ids and overlaps; this component never iterates the driver's worklist itself.

*/

use crate::api::term::Term;
use crate::core::critical_pair::CriticalPair;
use crate::core::error::EngineError;
use crate::core::order::{Comparison, TermOrder};
use crate::core::rule::{Rule, RuleId, RuleStore};
use crate::core::trie::Trie;
use crate::{debug, trace};

#[cfg(test)]
mod tests;

pub struct RewritingSystem<'a> {
  rules: RuleStore,
  trie: Trie,
  order: TermOrder<'a>,
}

impl<'a> RewritingSystem<'a> {
  pub fn new(order: TermOrder<'a>) -> Self {
    RewritingSystem { rules: RuleStore::new(), trie: Trie::new(), order }
  }

  pub fn order(&self) -> &TermOrder<'a> {
    &self.order
  }

  pub fn rule_count(&self) -> usize {
    self.rules.len()
  }

  pub fn active_rule_ids(&self) -> Vec<RuleId> {
    self.rules.active_indices().collect()
  }

  pub fn active_rules(&self) -> Vec<(Term, Term)> {
    self.rules.active_indices().map(|id| {
      let rule = self.rules.get(id);
      (rule.source.clone(), rule.target.clone())
    }).collect()
  }

  /// Inserts `rule`, right-simplifying whatever rule previously owned its source term.
  ///
  /// Precondition: `rule.source > rule.target` under the term order; violating it is
  /// [`EngineError::InvalidRule`], a fatal translator bug rather than something to recover from.
  pub fn insert(&mut self, rule: Rule) -> Result<(bool, RuleId), EngineError> {
    if self.order.compare_terms(&rule.source, &rule.target) != Comparison::Descending {
      return Err(EngineError::InvalidRule);
    }

    match self.trie.get(rule.source.as_slice()) {
      None => {
        let id = self.rules.push(rule.clone());
        self.trie.set(rule.source.as_slice(), id);
        trace!(1, "inserted rule {} => {}", rule.source, rule.target);
        Ok((true, id))
      }
      Some(old_id) => {
        let old_target = self.rules.get(old_id).target.clone();
        match self.order.compare_terms(&rule.target, &old_target) {
          Comparison::Equal => Ok((false, old_id)),

          // rule.target > old_target: rule is derivable from the existing (more reductive) rule plus a rule
          // recovering the old, larger target.
          Comparison::Descending => {
            self.insert(Rule::new(rule.target.clone(), old_target))?;
            Ok((false, old_id))
          }

          // rule.target < old_target: the new rule is strictly more reductive. Retire the old rule, recover its
          // rewriting with a rule from its (now too large) target down to the new, smaller one, then take over
          // the trie slot.
          Comparison::Ascending => {
            self.rules.mark_right_simplified(old_id);
            self.insert(Rule::new(old_target, rule.target.clone()))?;
            let new_id = self.rules.push(rule.clone());
            self.trie.set(rule.source.as_slice(), new_id);
            debug!(1, "right-simplified rule {} in favor of {} => {}", old_id, rule.source, rule.target);
            Ok((true, new_id))
          }
        }
      }
    }
  }

  /// Reduces `term` to its normal form: repeatedly applies the rule at the leftmost reducible position until
  /// none remains.
  pub fn reduce(&self, term: &Term) -> Term {
    let mut current = term.clone();
    loop {
      let mut rewritten = None;
      for position in 0..current.len() {
        let suffix = current.slice(position, current.len());
        let (node, consumed) = self.trie.longest_prefix(suffix.as_slice());
        if consumed == 0 {
          continue;
        }
        if let Some(rule_id) = self.trie.payload(node) {
          let rule = self.rules.get(rule_id);
          let prefix = current.slice(0, position);
          let remainder = current.slice(position + consumed, current.len());
          rewritten = Some(prefix.concat(&rule.target).concat(&remainder));
          break;
        }
      }
      match rewritten {
        Some(next) => current = next,
        None => return current,
      }
    }
  }

  /// Invokes `action(j, p)` for every rule `j` overlapping rule `i` at some position `p` of `i`'s source, except
  /// the trivial self-overlap `(i, 0)`.
  pub fn for_each_overlap(&self, i: RuleId, mut action: impl FnMut(RuleId, usize)) {
    let source = self.rules.get(i).source.clone();
    for position in 0..source.len() {
      let suffix = source.slice(position, source.len());
      let mut node = self.trie.root();
      let mut consumed = 0;
      for symbol in suffix.iter() {
        let next = match self.trie.child(node, symbol) {
          Some(next) => next,
          None => break,
        };
        node = next;
        consumed += 1;
        if let Some(j) = self.trie.payload(node) {
          if !(i == j && position == 0) {
            action(j, position);
          }
        }
      }
      if consumed == suffix.len() {
        for (path_suffix, j) in self.trie.elements_of(node) {
          if path_suffix.is_empty() {
            // Already reported above, as the final step of the per-symbol walk.
            continue;
          }
          if !(i == j && position == 0) {
            action(j, position);
          }
        }
      }
    }
  }

  /// Forms the critical pair of rules `lhs` and `rhs` overlapping at `position` of `lhs`'s source.
  pub fn form_critical_pair(&self, lhs: RuleId, rhs: RuleId, position: usize) -> CriticalPair {
    let lhs_rule = self.rules.get(lhs);
    let rhs_rule = self.rules.get(rhs);
    let u1 = &lhs_rule.source;
    let v1 = &lhs_rule.target;
    let u2 = &rhs_rule.source;
    let v2 = &rhs_rule.target;

    if position + u2.len() <= u1.len() {
      // Inner overlap: u1 = x . u2 . z
      let x = u1.slice(0, position);
      let z = u1.slice(position + u2.len(), u1.len());
      let second = x.concat(v2).concat(&z);
      CriticalPair { first: v1.clone(), second }
    } else {
      // Short overlap: u1 = x . y, u2 = y . z, y = u1[position..]
      let x = u1.slice(0, position);
      let z = u2.slice(u1.len() - position, u2.len());
      let first = v1.concat(&z);
      let second = x.concat(v2);
      CriticalPair { first, second }
    }
  }

  /// Resolves a critical pair: joinable pairs (including trivial ones) yield no new rule; otherwise a rule
  /// oriented from the larger of the two reduced forms to the smaller is inserted.
  pub fn resolve_critical_pair(&mut self, pair: CriticalPair) -> Result<Option<RuleId>, EngineError> {
    if pair.is_trivial() {
      return Ok(None);
    }
    let reduced_first = self.reduce(&pair.first);
    let reduced_second = self.reduce(&pair.second);
    let (inserted, id) = match self.order.compare_terms(&reduced_first, &reduced_second) {
      Comparison::Equal => return Ok(None),
      Comparison::Ascending => self.insert(Rule::new(reduced_second, reduced_first))?,
      Comparison::Descending => self.insert(Rule::new(reduced_first, reduced_second))?,
    };
    Ok(inserted.then_some(id))
  }
}
