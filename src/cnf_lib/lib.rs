/*!
A library for converting propositional formulas to conjunctive normal form, and determining the satisfiability of the result.

# Orientation

A [Formula](structures::formula::Formula) is built directly, or [parsed](builder::parse) from text.
Conversion to CNF is in two steps, both found in [procedures]:
- [Negation pushdown](procedures::negation), which drives every negation down onto a variable.
- [Conjunction pullup](procedures::pullup), which distributes disjunction over conjunction until no conjunction is below a disjunction.

The result is held in a [CNF store](db::cnf::Cnf), which keeps one record per variable and a list of clauses whose literals refer to those records.
Assigning a value to a variable removes each clause made true.

The store is [solved](procedures::solve) by a DPLL search, returning a [Report](reports::Report).

# Example

```rust
# use cnf_lib::db::cnf::Cnf;
# use cnf_lib::reports::Report;
let mut the_cnf = Cnf::parse("(A OR B) AND (NOT A OR C)").unwrap();
assert_eq!(the_cnf.to_string(), "{{A, B}, {¬A, C}}");

the_cnf.assign("A", true).unwrap();
assert_eq!(the_cnf.to_string(), "{{¬A, C}}");

match the_cnf.solve() {
    Report::Satisfiable(assignment) => assert_eq!(assignment.value_of("C"), Some(true)),
    _ => panic!("A model exists"),
}
```

# Logs

Calls to [log] are made throughout, with targets listed in the private `misc::log::targets` module.
No logger is installed by the library.
*/

#![allow(clippy::single_match)]

pub mod builder;
pub mod config;
pub mod db;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

mod misc;
