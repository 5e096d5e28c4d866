/*!
Procedures over formulas and CNFs.

- [negation] and [pullup] together convert an arbitrary formula to conjunctive normal form.
- [solve] decides the satisfiability of a CNF.
*/
pub mod negation;
pub mod pullup;
pub mod solve;

pub use negation::push_negations;
pub use pullup::{convert_to_cnf, flatten_clauses, pull_conjunctions};
