/*!
Ways to build a formula or a CNF from text.

- [parse] reads a propositional formula, e.g. `(A OR B) AND NOT C`.
- [dimacs] reads a CNF in the DIMACS format.
*/
pub mod dimacs;
pub mod parse;
