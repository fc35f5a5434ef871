/*!

A confluent rewriting engine for generic-signature constraints: compiles a set of trait bounds and associated-type
equalities into a Knuth-Bendix-complete term rewriting system, then uses it to reduce any type term to a unique
normal form.

The three entry points below cover the common path — translate constraints, complete, reduce:

```ignore
use sigrewrite::{api::Constraint, complete, reduce, core::rewriting_system::RewritingSystem, core::order::TermOrder};

let mut system = RewritingSystem::new(TermOrder::new(&properties));
complete(&mut system, &constraints)?;
let normal_form = reduce(&system, &term);
```

For finer-grained control (inserting individually-built rules, inspecting the rule store mid-completion), use
[`core::rewriting_system::RewritingSystem`]'s inherent methods directly.

*/

pub mod abstractions;
pub mod api;
pub mod core;

pub use abstractions::{log, IString};

use crate::api::constraint::rule_of;
use crate::api::{Constraint, Term};
use crate::core::completion::{self, Budget};
use crate::core::error::EngineError;
use crate::core::rewriting_system::RewritingSystem;

/// Translates `constraints` into initial rules and completes `system` to saturation (or until `budget`, if given,
/// is exceeded).
pub fn complete(
  system: &mut RewritingSystem,
  constraints: &[Constraint],
  budget: Option<Budget>,
) -> Result<(), EngineError> {
  for constraint in constraints {
    let rule = rule_of(constraint, system.order())?;
    system.insert(rule)?;
  }
  completion::complete(system, budget)
}

/// Reduces `term` to its normal form with respect to `system`'s active rules.
pub fn reduce(system: &RewritingSystem, term: &Term) -> Term {
  system.reduce(term)
}

/// Every active rule in `system`, as `(source, target)` pairs.
pub fn active_rules(system: &RewritingSystem) -> Vec<(Term, Term)> {
  system.active_rules()
}
