/*!
Propositional formulas, as trees of variables, negations, conjunctions, and disjunctions.

Each node exclusively owns its children, so a formula is finite and acyclic by construction.
*/

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    Variable(String),
    Negation(Box<Formula>),
    Conjunction(Box<Formula>, Box<Formula>),
    Disjunction(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn variable(name: impl Into<String>) -> Self {
        Formula::Variable(name.into())
    }

    pub fn negation(formula: Formula) -> Self {
        Formula::Negation(Box::new(formula))
    }

    pub fn conjunction(left: Formula, right: Formula) -> Self {
        Formula::Conjunction(Box::new(left), Box::new(right))
    }

    pub fn disjunction(left: Formula, right: Formula) -> Self {
        Formula::Disjunction(Box::new(left), Box::new(right))
    }

    /// A variable, or the negation of a variable.
    pub fn is_literal(&self) -> bool {
        match self {
            Formula::Variable(_) => true,
            Formula::Negation(inner) => matches!(inner.as_ref(), Formula::Variable(_)),
            _ => false,
        }
    }

    /// Whether every negation in the formula applies directly to a variable.
    pub fn is_nnf(&self) -> bool {
        match self {
            Formula::Variable(_) => true,
            Formula::Negation(inner) => matches!(inner.as_ref(), Formula::Variable(_)),
            Formula::Conjunction(left, right) | Formula::Disjunction(left, right) => {
                left.is_nnf() && right.is_nnf()
            }
        }
    }

    /// Whether the formula is a disjunction of literals, or a single literal.
    pub fn is_clause(&self) -> bool {
        match self {
            Formula::Disjunction(left, right) => left.is_clause() && right.is_clause(),
            other => other.is_literal(),
        }
    }

    /// Whether the formula is a conjunction of clauses, or a single clause.
    pub fn is_cnf(&self) -> bool {
        match self {
            Formula::Conjunction(left, right) => left.is_cnf() && right.is_cnf(),
            other => other.is_clause(),
        }
    }

    /// The value of the formula, given the value of each variable.
    pub fn evaluate<F: Fn(&str) -> bool>(&self, value_of: &F) -> bool {
        match self {
            Formula::Variable(name) => value_of(name),
            Formula::Negation(inner) => !inner.evaluate(value_of),
            Formula::Conjunction(left, right) => left.evaluate(value_of) && right.evaluate(value_of),
            Formula::Disjunction(left, right) => left.evaluate(value_of) || right.evaluate(value_of),
        }
    }

    /// The distinct variable names of the formula, in order of first occurrence.
    pub fn variables(&self) -> Vec<&str> {
        let mut the_names = Vec::new();
        self.collect_variables(&mut the_names);
        the_names
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Formula::Variable(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            Formula::Negation(inner) => inner.collect_variables(names),
            Formula::Conjunction(left, right) | Formula::Disjunction(left, right) => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }

    /// The count of nodes in the formula.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(formula) = pending.pop() {
            count += 1;
            match formula {
                Formula::Variable(_) => {}
                Formula::Negation(inner) => pending.push(inner.as_ref()),
                Formula::Conjunction(left, right) | Formula::Disjunction(left, right) => {
                    pending.push(left.as_ref());
                    pending.push(right.as_ref());
                }
            }
        }
        count
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Variable(name) => write!(f, "{name}"),
            Formula::Negation(inner) => write!(f, "NOT {inner}"),
            Formula::Conjunction(left, right) => write!(f, "({left} AND {right})"),
            Formula::Disjunction(left, right) => write!(f, "({left} OR {right})"),
        }
    }
}
