use crate::structures::{
    literal::Literal,
    variable::{VariableKey, VariableTable},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    Satisfied,    // Some literal is true
    Falsified,    // Every literal is false, i.e. a conflict
    Undetermined, // Neither of the above
}

/// A disjunction of literals.
///
/// A clause with no literals is false.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Self {
        Clause { literals }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn status(&self, variables: &VariableTable) -> ClauseStatus {
        let mut undetermined = false;
        for literal in &self.literals {
            match literal.value_on(variables) {
                Some(true) => return ClauseStatus::Satisfied,
                Some(false) => {}
                None => undetermined = true,
            }
        }
        match undetermined {
            true => ClauseStatus::Undetermined,
            false => ClauseStatus::Falsified,
        }
    }

    pub fn is_true(&self, variables: &VariableTable) -> bool {
        self.status(variables) == ClauseStatus::Satisfied
    }

    /// Returns the literal forced by the clause on the given table.
    ///
    /// That is, the only literal whose variable has no value, when every other literal is false.
    pub fn unit_literal(&self, variables: &VariableTable) -> Option<Literal> {
        let mut the_literal = None;
        for literal in &self.literals {
            match literal.value_on(variables) {
                Some(true) => return None,
                Some(false) => continue,
                None if the_literal.is_none() => the_literal = Some(*literal),
                None => return None,
            }
        }
        the_literal
    }

    /// The variable of the first literal with no value, if any.
    pub fn first_unassigned(&self, variables: &VariableTable) -> Option<VariableKey> {
        self.literals
            .iter()
            .find(|literal| literal.value_on(variables).is_none())
            .map(|literal| literal.variable())
    }
}
