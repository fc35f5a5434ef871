/*!

`Type` is the surface-level input type a driver builds from parsed generic-signature syntax. It mirrors
[`Symbol`](crate::api::symbol::Symbol)'s four cases, except that an associated type carries its qualifier as a
nested `Type` rather than a pre-built `Term` — `term_of` performs that flattening.

*/

use crate::abstractions::IString;
use crate::api::symbol::Symbol;
use crate::api::term::Term;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
  Concrete(IString),
  Trait(IString),
  GenericType(IString),
  /// `qualifier.trait.name`, e.g. `Self.Collection.Element`.
  AssociatedType(Box<Type>, IString, IString),
}

impl Type {
  pub fn associated_type(qualifier: Type, trait_name: impl Into<IString>, name: impl Into<IString>) -> Type {
    Type::AssociatedType(Box::new(qualifier), trait_name.into(), name.into())
  }

  /// An abstract parameter is a generic type parameter or an associated-type selection thereof — the only legal
  /// lhs of an `Equality` constraint.
  pub fn is_abstract(&self) -> bool {
    matches!(self, Type::GenericType(_) | Type::AssociatedType(..))
  }
}

/// Translates a `Type` into the `Term` the rewriting engine operates on.
pub fn term_of(ty: &Type) -> Term {
  match ty {
    Type::Concrete(n)    => Term::single(Symbol::Concrete(n.clone())),
    Type::Trait(n)       => Term::single(Symbol::Trait(n.clone())),
    Type::GenericType(n) => Term::single(Symbol::GenericType(n.clone())),
    Type::AssociatedType(qualifier, trait_name, name) => {
      term_of(qualifier).concat(&Term::single(Symbol::AssociatedType(trait_name.clone(), name.clone())))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn abstract_parameter_classification() {
    assert!(Type::GenericType(IString::from("Self")).is_abstract());
    assert!(Type::associated_type(Type::GenericType(IString::from("Self")), "Collection", "Element").is_abstract());
    assert!(!Type::Concrete(IString::from("Int")).is_abstract());
    assert!(!Type::Trait(IString::from("Collection")).is_abstract());
  }

  #[test]
  fn term_of_flattens_associated_type_chain() {
    let ty = Type::associated_type(
      Type::associated_type(Type::GenericType(IString::from("Self")), "Collection", "Slice"),
      "Collection",
      "Element",
    );
    let term = term_of(&ty);
    assert_eq!(term.len(), 3);
    assert_eq!(term.get(0), Some(&Symbol::GenericType(IString::from("Self"))));
    assert_eq!(term.get(1), Some(&Symbol::AssociatedType(IString::from("Collection"), IString::from("Slice"))));
    assert_eq!(term.get(2), Some(&Symbol::AssociatedType(IString::from("Collection"), IString::from("Element"))));
  }
}
