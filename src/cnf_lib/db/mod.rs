/*!
Databases of clauses and variables.

The only database is the [CNF store](cnf), which owns a variable table and the clauses which are not yet known to be true.
*/
pub mod cnf;
