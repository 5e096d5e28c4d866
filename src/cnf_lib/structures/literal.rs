use crate::structures::variable::{VariableKey, VariableTable};

/// A variable, or its negation.
///
/// The variable is held by key, so the value of a literal is always read from the table of the CNF it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    variable: VariableKey,
    negated: bool,
}

impl Literal {
    pub fn new(variable: VariableKey, negated: bool) -> Self {
        Literal { variable, negated }
    }

    pub fn variable(&self) -> VariableKey {
        self.variable
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The value the variable must take for the literal to be true.
    pub fn polarity(&self) -> bool {
        !self.negated
    }

    /// The value of the literal, if the variable has a value.
    pub fn value_on(&self, variables: &VariableTable) -> Option<bool> {
        variables
            .get(self.variable)
            .and_then(|variable| variable.value())
            .map(|value| value == self.polarity())
    }
}
