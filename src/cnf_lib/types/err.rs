/*
Names of the error enums overlap with the structures they relate to.

So, intended use is to namespace errors via the module.

For example:
- use crate::types::err::{self}
- …
- err::Cnf::UnknownVariable(…)
*/

use std::fmt;

/// Errors from interacting with the clauses or variables of a CNF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cnf {
    UnknownVariable(String),  // The name is not in the variable table
    AlreadyAssigned(String),  // The variable already holds a value
    DuplicateInBatch(String), // The variable is named more than once in a single batch
    NotCnf,                   // A formula given as clauses is not in conjunctive normal form
}

/// Errors from parsing formula text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parse {
    Empty, // There was nothing to parse
    UnexpectedCharacter { position: usize, character: char },
    UnexpectedToken { position: usize, found: String },
    UnexpectedEnd, // The text ended part way through a formula
}

/// Errors from building a CNF from some source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Build {
    Parse(Parse),                              // Formula text failed to parse
    ProblemSpecification,                      // A malformed 'p cnf' preface
    MisplacedProblem(usize),                   // A preface after clauses, or a second preface
    Line(usize),                               // A line could not be read
    Literal { line: usize, token: String },   // A token which is not an integer literal
    NoFile,                                    // The source could not be opened
    NoFormula,                                 // No source was given
}

impl From<Parse> for Build {
    fn from(value: Parse) -> Self {
        Build::Parse(value)
    }
}

impl fmt::Display for Cnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVariable(name) => write!(f, "unknown variable '{name}'"),
            Self::AlreadyAssigned(name) => write!(f, "variable '{name}' already has a value"),
            Self::DuplicateInBatch(name) => write!(f, "variable '{name}' assigned twice"),
            Self::NotCnf => write!(f, "formula is not in conjunctive normal form"),
        }
    }
}

impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty formula"),
            Self::UnexpectedCharacter {
                position,
                character,
            } => write!(f, "unexpected character '{character}' at {position}"),
            Self::UnexpectedToken { position, found } => {
                write!(f, "unexpected '{found}' at {position}")
            }
            Self::UnexpectedEnd => write!(f, "unexpected end of formula"),
        }
    }
}

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::ProblemSpecification => write!(f, "malformed problem specification"),
            Self::MisplacedProblem(line) => write!(f, "misplaced problem specification on line {line}"),
            Self::Line(line) => write!(f, "unable to read line {line}"),
            Self::Literal { line, token } => write!(f, "'{token}' on line {line} is not a literal"),
            Self::NoFile => write!(f, "unable to open file"),
            Self::NoFormula => write!(f, "no formula given"),
        }
    }
}
