/*!

The external-facing shapes a caller builds and reads: [`Type`](ty::Type) and [`Constraint`](constraint::Constraint)
for describing generic-signature constraints, [`Symbol`](symbol::Symbol) and [`Term`](term::Term) for the engine's
internal term representation, [`TypeProperties`](properties::TypeProperties) for supplying the trait-refinement
graph, and [`Formattable`](format::Formattable) for the shared textual-dump convention.

*/

pub mod constraint;
pub mod format;
pub mod properties;
pub mod symbol;
pub mod term;
pub mod ty;

pub use constraint::Constraint;
pub use properties::TypeProperties;
pub use symbol::Symbol;
pub use term::Term;
pub use ty::Type;
