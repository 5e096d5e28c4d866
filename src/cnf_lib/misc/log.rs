/*!
Miscellaneous items related to [logging](log).

Calls to the log macros are made throughout the library.
No log implementation is provided.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [negation pushdown](crate::procedures::negation) and [conjunction pullup](crate::procedures::pullup)
    pub const NORMALIZATION: &str = "normalization";

    /// Logs related to the [CNF store](crate::db::cnf)
    pub const CNF: &str = "cnf";

    /// Logs related to assignments
    pub const VALUATION: &str = "valuation";

    /// Logs related to unit propagation
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to decisions
    pub const DECISION: &str = "decision";

    /// Logs related to a [solve](crate::procedures::solve)
    pub const SOLVE: &str = "solve";

    /// Logs related to [formula parsing](crate::builder::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to building from [DIMACS](crate::builder::dimacs)
    pub const BUILD: &str = "build";
}
