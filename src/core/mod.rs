/*!

The rewriting engine: the term order, the trie index, the rule store, the rewriting system built on top of them,
and the completion driver that saturates a rewriting system from a set of initial rules.

This module is the ~500-1000 line core the rest of the crate exists to feed and expose: [`api`](crate::api) builds
`Rule`s from `Constraint`s and hands them to [`RewritingSystem::insert`](rewriting_system::RewritingSystem::insert);
[`completion::complete`] drives saturation; [`RewritingSystem::reduce`](rewriting_system::RewritingSystem::reduce)
answers queries against the result.

*/

pub mod completion;
pub mod critical_pair;
pub mod error;
pub mod order;
pub mod rewriting_system;
pub mod rule;
pub mod trie;
