/*!
Configuration of a solve.

All values default to the constants in [defaults].
*/
pub mod defaults;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// The value given to any variable left unassigned once every clause is satisfied.
    pub unconstrained_value: bool,

    /// The value tried first when a decision is made on a variable.
    pub decision_polarity: bool,

    /// Time limit for a solve, checked on entry to each branch of the search.
    pub time_limit: Option<std::time::Duration>,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            unconstrained_value: UNCONSTRAINED_VALUE,
            decision_polarity: DECISION_POLARITY,
            time_limit: TIME_LIMIT,
        }
    }
}
