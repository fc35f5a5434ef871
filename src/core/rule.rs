/*!

A `Rule` is an oriented equation `source ⇒ target` with `source > target` under the term order, plus a flag word.
Rules are owned by the [`RuleStore`](RuleStore), an append-only container: rule identifiers are dense indices,
stable once issued, and a rule once created is never removed — only marked right-simplified when a newer rule with
the same source makes it redundant.

*/

use enumflags2::{bitflags, BitFlags};

use crate::api::term::Term;

pub type RuleId = usize;

#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RuleFlag {
  /// Set when a newer rule with the same source term makes this rule's rewriting redundant. Simplified rules
  /// remain in storage (their id may still be referenced by earlier critical pairs) but are excluded from
  /// `active_indices`.
  RightSimplified,
}

pub type RuleFlags = BitFlags<RuleFlag>;

#[derive(Clone, Debug)]
pub struct Rule {
  pub source: Term,
  pub target: Term,
  flags: RuleFlags,
}

impl Rule {
  pub fn new(source: Term, target: Term) -> Rule {
    Rule { source, target, flags: RuleFlags::empty() }
  }

  pub fn is_right_simplified(&self) -> bool {
    self.flags.contains(RuleFlag::RightSimplified)
  }
}

/// Append-only, indexable store of rules. `RuleId`s are positions in the backing `Vec` and are never reused.
#[derive(Default)]
pub struct RuleStore {
  rules: Vec<Rule>,
}

impl RuleStore {
  pub fn new() -> Self {
    RuleStore { rules: Vec::new() }
  }

  pub fn len(&self) -> usize {
    self.rules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rules.is_empty()
  }

  pub fn push(&mut self, rule: Rule) -> RuleId {
    self.rules.push(rule);
    self.rules.len() - 1
  }

  pub fn get(&self, id: RuleId) -> &Rule {
    &self.rules[id]
  }

  pub fn mark_right_simplified(&mut self, id: RuleId) {
    self.rules[id].flags.insert(RuleFlag::RightSimplified);
  }

  /// The ids of every rule whose `RightSimplified` flag is clear, in insertion order.
  pub fn active_indices(&self) -> impl Iterator<Item = RuleId> + '_ {
    self.rules.iter().enumerate().filter(|(_, r)| !r.is_right_simplified()).map(|(i, _)| i)
  }
}
