/*!

`TypeProperties` is the one piece of context the term order needs from the surrounding generics system: the
trait-refinement graph. Everything else the order compares (names, cases, lengths) is intrinsic to the terms
themselves.

*/

use crate::abstractions::IString;

/// Supplies the immediate-bases map used by the term order's trait tie-break. Implementors need only answer
/// "what does this trait directly refine?"; the order computes the transitive closure itself.
pub trait TypeProperties {
  /// The traits immediately refined by `trait_name`, i.e. its direct bases. Returns an empty slice for a trait
  /// with no bases (or an unknown trait name).
  fn immediate_bases(&self, trait_name: &IString) -> Vec<IString>;
}

/// A `TypeProperties` with no bases for any trait. Useful for constraints that never compare two distinct traits.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoBases;

impl TypeProperties for NoBases {
  fn immediate_bases(&self, _trait_name: &IString) -> Vec<IString> {
    Vec::new()
  }
}

/// A `TypeProperties` backed by an explicit `trait -> [immediate bases]` map, the shape spec.md's scenarios are
/// stated in terms of.
#[derive(Clone, Debug, Default)]
pub struct MapProperties {
  bases: std::collections::HashMap<IString, Vec<IString>>,
}

impl MapProperties {
  pub fn new() -> Self {
    MapProperties { bases: std::collections::HashMap::new() }
  }

  pub fn insert(&mut self, trait_name: impl Into<IString>, bases: Vec<IString>) {
    self.bases.insert(trait_name.into(), bases);
  }
}

impl TypeProperties for MapProperties {
  fn immediate_bases(&self, trait_name: &IString) -> Vec<IString> {
    self.bases.get(trait_name).cloned().unwrap_or_default()
  }
}
