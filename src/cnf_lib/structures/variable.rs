use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// The key of a variable in the variable table of a [Cnf](crate::db::cnf::Cnf).
    pub struct VariableKey;
}

/// Variables are never removed from a table, so iteration over a table follows insertion order.
pub type VariableTable = SlotMap<VariableKey, Variable>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    name: String,
    value: Option<bool>,
}

impl Variable {
    pub fn new(name: &str) -> Self {
        Variable {
            name: name.to_string(),
            value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: bool) {
        self.value = Some(value)
    }
}
