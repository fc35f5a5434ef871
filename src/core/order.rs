/*!

A total strict order over terms, derived from a total strict order over symbols. The term order is a length-lex
(shortlex) extension of the symbol order: longer terms are always greater, and equal-length terms compare
symbol-by-symbol left to right.

Shortlex guarantees that a rule `u ⇒ v` with `u > v` never grows a term under reduction, which is what makes
[`reduce`](crate::core::rewriting_system::RewritingSystem::reduce) terminate. Within symbols of the same case, trait
refinement drives the tie-break (fewer transitive bases sorts a trait *after* a more-refined one), so that a
broader, less-refined selector reduces toward a narrower one when the problem allows it.

*/

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;

use crate::abstractions::IString;
use crate::api::properties::TypeProperties;
use crate::api::symbol::Symbol;
use crate::api::term::Term;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Comparison {
  Ascending,
  Equal,
  Descending,
}

impl Comparison {
  pub fn reverse(self) -> Comparison {
    match self {
      Comparison::Ascending  => Comparison::Descending,
      Comparison::Equal      => Comparison::Equal,
      Comparison::Descending => Comparison::Ascending,
    }
  }

  fn of_ordering(ord: std::cmp::Ordering) -> Comparison {
    match ord {
      std::cmp::Ordering::Less    => Comparison::Ascending,
      std::cmp::Ordering::Equal   => Comparison::Equal,
      std::cmp::Ordering::Greater => Comparison::Descending,
    }
  }
}

/// The total term order. Holds a memoized cache of each trait's transitive-base closure, since the same trait is
/// typically compared many times over one completion run.
pub struct TermOrder<'a> {
  properties: &'a dyn TypeProperties,
  base_cache: RefCell<HashMap<IString, usize>>,
}

impl<'a> TermOrder<'a> {
  pub fn new(properties: &'a dyn TypeProperties) -> Self {
    TermOrder { properties, base_cache: RefCell::new(HashMap::new()) }
  }

  /// The size of the transitive closure of `trait_name`'s immediate-bases relation. Cyclic refinement
  /// declarations are tolerated: a trait already on the current path is simply not revisited, so the closure
  /// returned is the finite set reachable before the cycle closes.
  fn transitive_base_count(&self, trait_name: &IString) -> usize {
    if let Some(count) = self.base_cache.borrow().get(trait_name) {
      return *count;
    }
    let mut visited = HashSet::new();
    let mut frontier = vec![trait_name.clone()];
    visited.insert(trait_name.clone());
    let mut bases: HashSet<IString> = HashSet::new();
    while let Some(current) = frontier.pop() {
      for base in self.properties.immediate_bases(&current) {
        if visited.insert(base.clone()) {
          bases.insert(base.clone());
          frontier.push(base);
        }
      }
    }
    let count = bases.len();
    self.base_cache.borrow_mut().insert(trait_name.clone(), count);
    count
  }

  fn compare_traits(&self, a: &IString, b: &IString) -> Comparison {
    let sizes = (self.transitive_base_count(a), self.transitive_base_count(b));
    match sizes.0.cmp(&sizes.1) {
      // Fewer bases orders after (descending); more bases orders before (ascending).
      std::cmp::Ordering::Less    => Comparison::Descending,
      std::cmp::Ordering::Greater => Comparison::Ascending,
      std::cmp::Ordering::Equal   => Comparison::of_ordering(a.cmp(b)),
    }
  }

  pub fn compare_symbols(&self, a: &Symbol, b: &Symbol) -> Comparison {
    match (a, b) {
      (Symbol::Concrete(x), Symbol::Concrete(y)) => Comparison::of_ordering(x.cmp(y)),

      (Symbol::Trait(x), Symbol::Trait(y)) => self.compare_traits(x, y),

      (Symbol::AssociatedType(t1, n1), Symbol::AssociatedType(t2, n2)) => {
        if n1 == n2 {
          self.compare_traits(t1, t2)
        } else {
          Comparison::of_ordering(n1.cmp(n2))
        }
      }

      (Symbol::GenericType(x), Symbol::GenericType(y)) => Comparison::of_ordering(x.cmp(y)),

      (x, y) => Comparison::of_ordering(x.kind().cmp(&y.kind())),
    }
  }

  pub fn compare_terms(&self, u: &Term, v: &Term) -> Comparison {
    match u.len().cmp(&v.len()) {
      std::cmp::Ordering::Greater => return Comparison::Descending,
      std::cmp::Ordering::Less    => return Comparison::Ascending,
      std::cmp::Ordering::Equal   => {}
    }
    for (su, sv) in u.iter().zip(v.iter()) {
      match self.compare_symbols(su, sv) {
        Comparison::Equal => continue,
        other => return other,
      }
    }
    Comparison::Equal
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::properties::{MapProperties, NoBases};

  fn trait_sym(name: &str) -> Symbol {
    Symbol::Trait(IString::from(name))
  }

  #[test]
  fn shortlex_prefers_shorter_terms() {
    let no_bases = NoBases;
    let order = TermOrder::new(&no_bases);
    let short = Term::single(Symbol::GenericType(IString::from("Self")));
    let long = short.concat(&Term::single(Symbol::AssociatedType(IString::from("C"), IString::from("X"))));
    assert_eq!(order.compare_terms(&long, &short), Comparison::Descending);
    assert_eq!(order.compare_terms(&short, &long), Comparison::Ascending);
  }

  #[test]
  fn refined_trait_sorts_before_less_refined_trait() {
    let mut props = MapProperties::new();
    props.insert("B", vec![IString::from("A")]);
    let order = TermOrder::new(&props);
    // B has more transitive bases than A, so B < A (ascending).
    assert_eq!(order.compare_symbols(&trait_sym("B"), &trait_sym("A")), Comparison::Ascending);
    assert_eq!(order.compare_symbols(&trait_sym("A"), &trait_sym("B")), Comparison::Descending);
  }

  #[test]
  fn cyclic_trait_graph_still_yields_a_total_comparison() {
    let mut props = MapProperties::new();
    props.insert("A", vec![IString::from("B")]);
    props.insert("B", vec![IString::from("A")]);
    let order = TermOrder::new(&props);
    // Must not hang or panic, and must return a definite answer either way.
    let result = order.compare_symbols(&trait_sym("A"), &trait_sym("B"));
    assert_ne!(result, Comparison::Equal);
  }

  #[test]
  fn different_cases_compare_by_kind() {
    let no_bases = NoBases;
    let order = TermOrder::new(&no_bases);
    let concrete = Symbol::Concrete(IString::from("Int"));
    let generic = Symbol::GenericType(IString::from("Self"));
    assert_eq!(order.compare_symbols(&concrete, &generic), Comparison::Ascending);
  }
}
