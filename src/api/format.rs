/*!

There are different text representations possible for symbols, terms, and rules depending on whether we're printing
for a human reading a debug trace or reconstructing something closer to surface syntax. This module provides a
unified API for formatting objects across the crate, mirroring the textual dump grammar fixed by the external
interface: `[concrete: n]`, `[n]` for traits, `[::t.n]` for associated types, and bare `n` for generic parameters.

*/

use std::fmt::Display;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum FormatStyle {
  #[default]
  Default, // The bracketed dump syntax fixed by the external interface.
  Debug,   // Format with extra debugging information (kind tags, ids).
}

pub trait Formattable {
  /// Writes a text representation of `self` according to the given `FormatStyle`.
  /// Use `format!` and friends to create a string.
  fn repr(&self, style: FormatStyle) -> String;
}

impl Display for dyn Formattable {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", Formattable::repr(self, FormatStyle::Default))
  }
}
