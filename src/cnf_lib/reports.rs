/*!
Reports on a solve.
*/

use std::fmt;
use std::time::Duration;

use serde::{ser::SerializeMap, Serialize, Serializer};

/// A value for each variable of a CNF, in the order the variables were added to the CNF.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<(String, bool)>,
}

impl Assignment {
    pub fn value_of(&self, name: &str) -> Option<bool> {
        self.values
            .iter()
            .find(|(variable, _)| variable == name)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Assignment {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let the_string = self
            .iter()
            .map(|(name, value)| match value {
                true => name.to_string(),
                false => format!("-{name}"),
            })
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{the_string}")
    }
}

// Serialized as a map from names to values, preserving order.
impl Serialize for Assignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "assignment", rename_all = "snake_case")]
pub enum Report {
    Satisfiable(Assignment),
    Unsatisfiable,
    /// The solve stopped before a verdict, e.g. due to a time limit.
    Unknown,
}

impl Report {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Report::Satisfiable(_))
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Report::Satisfiable(assignment) => Some(assignment),
            _ => None,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Satisfiable(_) => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Counts of events during a solve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub decisions: usize,
    pub propagations: usize,
    pub conflicts: usize,
    pub max_depth: usize,
    pub time: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_json() {
        let assignment: Assignment = vec![("q".to_string(), true), ("p".to_string(), false)]
            .into_iter()
            .collect();
        let report = Report::Satisfiable(assignment);
        assert_eq!(
            serde_json::to_string(&report).expect("serializable"),
            r#"{"result":"satisfiable","assignment":{"q":true,"p":false}}"#
        );
        assert_eq!(
            serde_json::to_string(&Report::Unsatisfiable).expect("serializable"),
            r#"{"result":"unsatisfiable"}"#
        );
    }

    #[test]
    fn assignment_display() {
        let assignment: Assignment = vec![("a".to_string(), true), ("b".to_string(), false)]
            .into_iter()
            .collect();
        assert_eq!(assignment.to_string(), "a -b");
        assert_eq!(assignment.value_of("b"), Some(false));
        assert_eq!(assignment.value_of("c"), None);
    }
}
