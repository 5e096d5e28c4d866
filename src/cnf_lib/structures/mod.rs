pub mod clause;
pub mod formula;
pub mod literal;
pub mod variable;
