/*!
A formula in conjunctive normal form, with a table of variables and an active list of clauses.

# Overview

Each distinct variable name has exactly one record in the table, and every literal holds the key of that record.
So, an assignment to a variable is seen by every clause the variable appears in.

Clauses are removed from the active list as soon as an assignment makes them true, and never return.
Literals are never removed from a clause, so a clause which remains may contain false literals.

Backtracking is by [Clone]: a clone shares nothing with the original, and the original is untouched by assignments to the clone.

# Example

```rust
# use cnf_lib::db::cnf::Cnf;
let mut the_cnf = Cnf::from_clauses([vec![("p", false), ("q", false)], vec![("p", true)]]);
assert_eq!(the_cnf.clause_count(), 2);

the_cnf.assign("q", true).expect("q is unassigned");
assert_eq!(the_cnf.clause_count(), 1);
assert_eq!(the_cnf.to_string(), "{{¬p}}");
```
*/

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::{
    builder::parse::parse_formula,
    misc::log::targets::{self},
    procedures::{convert_to_cnf, flatten_clauses},
    reports::Assignment,
    structures::{
        clause::{Clause, ClauseStatus},
        formula::Formula,
        literal::Literal,
        variable::{Variable, VariableKey, VariableTable},
    },
    types::err::{self},
};

#[derive(Clone, Debug)]
pub struct Cnf {
    variables: VariableTable,
    names: HashMap<String, VariableKey>,
    clauses: Vec<Clause>,
}

impl Default for Cnf {
    fn default() -> Self {
        Cnf {
            variables: VariableTable::with_key(),
            names: HashMap::new(),
            clauses: Vec::new(),
        }
    }
}

// Construction
impl Cnf {
    pub fn new() -> Self {
        Self::default()
    }

    /// A CNF from a list of clauses, each given as a list of (name, negated) pairs.
    ///
    /// Every name is added to the variable table on first occurrence, and the clauses are stored as given.
    pub fn from_clauses<C, L, S>(clauses: C) -> Self
    where
        C: IntoIterator<Item = L>,
        L: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        let mut the_cnf = Cnf::default();
        for clause in clauses {
            let the_literals = clause
                .into_iter()
                .map(|(name, negated)| Literal::new(the_cnf.variable_ensure(name.as_ref()), negated))
                .collect();
            the_cnf.clauses.push(Clause::new(the_literals));
        }

        log::debug!(target: targets::CNF, "CNF with {} variables and {} clauses", the_cnf.variable_count(), the_cnf.clause_count());
        the_cnf
    }

    /// A CNF equivalent to the given formula.
    pub fn from_formula(formula: Formula) -> Self {
        match flatten_clauses(convert_to_cnf(formula)) {
            Ok(clauses) => Self::from_clauses(clauses),
            Err(_) => unreachable!("Conversion always gives a formula in conjunctive normal form"),
        }
    }

    /// A CNF equivalent to the formula written in `text`.
    ///
    /// See [parse_formula] for the grammar.
    pub fn parse(text: &str) -> Result<Self, err::Parse> {
        Ok(Self::from_formula(parse_formula(text)?))
    }

    fn variable_ensure(&mut self, name: &str) -> VariableKey {
        match self.names.get(name) {
            Some(key) => *key,
            None => {
                let key = self.variables.insert(Variable::new(name));
                self.names.insert(name.to_string(), key);
                key
            }
        }
    }
}

// Variables
impl Cnf {
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn key_of(&self, name: &str) -> Option<VariableKey> {
        self.names.get(name).copied()
    }

    fn key_or_err(&self, name: &str) -> Result<VariableKey, err::Cnf> {
        self.key_of(name)
            .ok_or_else(|| err::Cnf::UnknownVariable(name.to_string()))
    }

    pub fn variable(&self, key: VariableKey) -> Option<&Variable> {
        self.variables.get(key)
    }

    /// The variables of the table, in order of insertion.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    pub fn variable_names(&self) -> Vec<&str> {
        self.variables().map(|variable| variable.name()).collect()
    }

    pub fn value_of(&self, name: &str) -> Result<Option<bool>, err::Cnf> {
        let key = self.key_or_err(name)?;
        Ok(self.variables.get(key).and_then(|variable| variable.value()))
    }

    /// The assigned variables, e.g. "p -q r".
    pub fn valuation_string(&self) -> String {
        self.variables()
            .filter_map(|variable| match variable.value() {
                Some(true) => Some(variable.name().to_string()),
                Some(false) => Some(format!("-{}", variable.name())),
                None => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The current assignment, with `default` given to each variable without a value.
    pub fn complete_assignment(&self, default: bool) -> Assignment {
        self.variables()
            .map(|variable| {
                (
                    variable.name().to_string(),
                    variable.value().unwrap_or(default),
                )
            })
            .collect()
    }
}

// Clauses
impl Cnf {
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// The literals of a clause, as (name, negated) pairs.
    pub fn clause_literals(&self, clause: &Clause) -> Vec<(&str, bool)> {
        clause
            .literals()
            .iter()
            .map(|literal| {
                let name = self
                    .variables
                    .get(literal.variable())
                    .map_or("?", |variable| variable.name());
                (name, literal.is_negated())
            })
            .collect()
    }

    /// Adds a clause, given as a list of (name, negated) pairs.
    ///
    /// Every name must already be in the variable table.
    /// A clause which is true on the current assignment is skipped.
    pub fn add_clause<S: AsRef<str>>(
        &mut self,
        literals: impl IntoIterator<Item = (S, bool)>,
    ) -> Result<&mut Self, err::Cnf> {
        let mut the_literals = Vec::new();
        for (name, negated) in literals {
            the_literals.push(Literal::new(self.key_or_err(name.as_ref())?, negated));
        }
        let the_clause = Clause::new(the_literals);

        match the_clause.is_true(&self.variables) {
            true => {
                log::trace!(target: targets::CNF, "Skipped a satisfied clause");
            }
            false => self.clauses.push(the_clause),
        }
        Ok(self)
    }

    /// Whether some clause has every literal false.
    pub fn has_conflict(&self) -> bool {
        self.clauses
            .iter()
            .any(|clause| clause.status(&self.variables) == ClauseStatus::Falsified)
    }

    /// Some literal forced by a clause, in order of clauses.
    pub fn find_unit(&self) -> Option<Literal> {
        self.clauses
            .iter()
            .find_map(|clause| clause.unit_literal(&self.variables))
    }

    /// The first variable without a value, in order of clauses and then literals.
    pub fn first_unassigned(&self) -> Option<VariableKey> {
        self.clauses
            .iter()
            .find_map(|clause| clause.first_unassigned(&self.variables))
    }

    /// Whether every clause is true on the given assignment.
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.clauses.iter().all(|clause| {
            self.clause_literals(clause)
                .into_iter()
                .any(|(name, negated)| assignment.value_of(name) == Some(!negated))
        })
    }

    fn remove_true_clauses(&mut self) {
        let before = self.clauses.len();
        let variables = &self.variables;
        self.clauses.retain(|clause| !clause.is_true(variables));
        log::debug!(target: targets::CNF, "Removed {} true clauses, {} remain", before - self.clauses.len(), self.clauses.len());
    }
}

// Assignment
impl Cnf {
    /// Assigns `value` to the variable `name`, and removes every clause made true.
    pub fn assign(&mut self, name: &str, value: bool) -> Result<&mut Self, err::Cnf> {
        let key = self.key_or_err(name)?;
        if self.variables.get(key).and_then(|v| v.value()).is_some() {
            return Err(err::Cnf::AlreadyAssigned(name.to_string()));
        }

        self.apply(key, value);
        Ok(self)
    }

    /// Assigns each value to each variable, as a single step.
    ///
    /// Each name must be known, unassigned, and appear at most once in the batch.
    /// If any of these fail, nothing is assigned.
    pub fn assign_batch<S: AsRef<str>>(
        &mut self,
        pairs: impl IntoIterator<Item = (S, bool)>,
    ) -> Result<&mut Self, err::Cnf> {
        let mut the_batch = Vec::new();
        let mut seen = HashSet::new();

        for (name, value) in pairs {
            let name = name.as_ref();
            let key = self.key_or_err(name)?;
            if !seen.insert(key) {
                return Err(err::Cnf::DuplicateInBatch(name.to_string()));
            }
            if self.variables.get(key).and_then(|v| v.value()).is_some() {
                return Err(err::Cnf::AlreadyAssigned(name.to_string()));
            }
            the_batch.push((key, value));
        }

        for (key, value) in the_batch {
            self.set_value(key, value);
        }
        self.remove_true_clauses();
        Ok(self)
    }

    /// Assigns `value` to the variable of `key`, and removes every clause made true.
    ///
    /// The variable is expected to have no value.
    pub(crate) fn apply(&mut self, key: VariableKey, value: bool) {
        self.set_value(key, value);
        self.remove_true_clauses();
    }

    fn set_value(&mut self, key: VariableKey, value: bool) {
        if let Some(variable) = self.variables.get_mut(key) {
            debug_assert!(variable.value().is_none(), "Reassignment of {}", variable.name());
            log::trace!(target: targets::VALUATION, "{} = {value}", variable.name());
            variable.set_value(value);
        }
    }
}

impl fmt::Display for Cnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, clause) in self.clauses.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            let the_literals = self
                .clause_literals(clause)
                .into_iter()
                .map(|(name, negated)| match negated {
                    true => format!("¬{name}"),
                    false => name.to_string(),
                })
                .collect::<Vec<_>>();
            write!(f, "{{{}}}", the_literals.join(", "))?;
        }
        write!(f, "}}")
    }
}
