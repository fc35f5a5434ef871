/*!

`Constraint` is the external input shape a generics-system driver produces from parsed signatures: either a bound
(`T: Trait`) or an equality between two type expressions. `rule_of` is the trivial shaping step that turns one
into an initial [`Rule`](crate::core::rule::Rule) for the rewriting system — trivial in the sense that no search or
choice is involved, but still sensitive enough (the `Equality` case needs to know which side is larger) that it
is worth stating precisely here rather than leaving it to callers.

*/

use crate::api::ty::{term_of, Type};
use crate::core::error::EngineError;
use crate::core::order::{Comparison, TermOrder};
use crate::core::rule::Rule;

#[derive(Clone, Debug)]
pub enum Constraint {
  /// `lhs: rhs`, e.g. `Self: Collection`.
  Bound { lhs: Type, rhs: Type },
  /// `lhs == rhs`, where `lhs` must be an abstract parameter.
  Equality { lhs: Type, rhs: Type },
}

/// Translates `constraint` into the initial rule the rewriting system should insert for it.
///
/// `Equality`'s lhs must be an abstract parameter (a generic type parameter, or an associated-type selection
/// thereof); violating that precondition is reported as [`EngineError::InvalidEqualityLhs`] rather than silently
/// reinterpreted.
pub fn rule_of(constraint: &Constraint, order: &TermOrder) -> Result<Rule, EngineError> {
  match constraint {
    Constraint::Bound { lhs, rhs } => {
      let lhs_term = term_of(lhs);
      let rhs_term = term_of(rhs);
      let source = lhs_term.concat(&rhs_term);
      Ok(Rule::new(source, lhs_term))
    }

    Constraint::Equality { lhs, rhs } => {
      if !lhs.is_abstract() {
        return Err(EngineError::InvalidEqualityLhs);
      }
      let v = term_of(lhs);
      let u = if rhs.is_abstract() { term_of(rhs) } else { v.concat(&term_of(rhs)) };
      let (u, v) = match order.compare_terms(&u, &v) {
        Comparison::Ascending => (v, u),
        _ => (u, v),
      };
      Ok(Rule::new(u, v))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::abstractions::IString;
  use crate::api::properties::NoBases;

  fn generic(name: &str) -> Type {
    Type::GenericType(IString::from(name))
  }

  #[test]
  fn bound_constraint_translates_to_conjunction_rule() {
    let no_bases = NoBases;
    let order = TermOrder::new(&no_bases);
    let constraint = Constraint::Bound { lhs: generic("Self"), rhs: Type::Trait(IString::from("Collection")) };
    let rule = rule_of(&constraint, &order).unwrap();
    assert_eq!(order.compare_terms(&rule.source, &rule.target), Comparison::Descending);
    assert_eq!(rule.target, term_of(&generic("Self")));
  }

  #[test]
  fn equality_constraint_rejects_non_abstract_lhs() {
    let no_bases = NoBases;
    let order = TermOrder::new(&no_bases);
    let constraint = Constraint::Equality { lhs: Type::Concrete(IString::from("Int")), rhs: generic("Self") };
    assert!(matches!(rule_of(&constraint, &order), Err(EngineError::InvalidEqualityLhs)));
  }

  #[test]
  fn equality_constraint_orients_larger_side_as_source() {
    let no_bases = NoBases;
    let order = TermOrder::new(&no_bases);
    let constraint = Constraint::Equality {
      lhs: generic("Self"),
      rhs: Type::associated_type(
        Type::associated_type(generic("Self"), "Collection", "Slice"),
        "Collection",
        "Slice",
      ),
    };
    let rule = rule_of(&constraint, &order).unwrap();
    assert_eq!(order.compare_terms(&rule.source, &rule.target), Comparison::Descending);
  }
}
