use std::{path::PathBuf, time::Duration};

use clap::Parser;

use cnf_lib::config::{defaults, Config};

/// Converts a propositional formula to CNF and determines whether it is satisfiable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The formula, e.g. "(A OR B) AND NOT (A AND C)"
    #[arg(conflicts_with = "file")]
    pub formula: Option<String>,

    /// A file containing the formula
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Read the file as a DIMACS form CNF
    #[arg(long, default_value_t = false, requires = "file")]
    pub dimacs: bool,

    /// Assign a value to a variable before solving, e.g. --assign A=true
    #[arg(short, long = "assign", value_parser = parse_assignment)]
    pub assignments: Vec<(String, bool)>,

    /// Display the CNF before solving
    #[arg(long, default_value_t = false)]
    pub show_cnf: bool,

    /// Display a satisfying valuation, if possible
    #[arg(short, long, default_value_t = false)]
    pub valuation: bool,

    /// Display stats on completion
    #[arg(short, long, default_value_t = false)]
    pub stats: bool,

    /// Display the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Time limit for the solve, in seconds
    #[arg(short, long, value_parser = |seconds: &str| seconds.parse().map(Duration::from_secs))]
    pub time_limit: Option<Duration>,

    /// The value given to variables which are unconstrained once every clause is satisfied
    #[arg(long, default_value_t = defaults::UNCONSTRAINED_VALUE, action = clap::ArgAction::Set)]
    pub unconstrained_value: bool,

    /// The value tried first on a decision
    #[arg(long, default_value_t = defaults::DECISION_POLARITY, action = clap::ArgAction::Set)]
    pub decision_polarity: bool,

    /// Print help as markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

fn parse_assignment(text: &str) -> Result<(String, bool), String> {
    let Some((name, value)) = text.split_once('=') else {
        return Err(format!("expected NAME=BOOL, found '{text}'"));
    };
    let value = match value.trim() {
        "true" | "1" => true,
        "false" | "0" => false,
        other => return Err(format!("'{other}' is not a boolean")),
    };
    Ok((name.trim().to_string(), value))
}

pub fn config_from_args(args: &Args) -> Config {
    let mut the_config = Config::default();

    the_config.unconstrained_value = args.unconstrained_value;
    the_config.decision_polarity = args.decision_polarity;
    the_config.time_limit = args.time_limit;

    the_config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments() {
        assert_eq!(parse_assignment("A=true"), Ok(("A".to_string(), true)));
        assert_eq!(parse_assignment("x1 = 0"), Ok(("x1".to_string(), false)));
        assert!(parse_assignment("A").is_err());
        assert!(parse_assignment("A=yes").is_err());
    }

    #[test]
    fn config() {
        let args = Args::parse_from([
            "cnf_sat",
            "A OR B",
            "-t",
            "5",
            "--decision-polarity",
            "false",
            "--assign",
            "A=false",
        ]);
        let the_config = config_from_args(&args);
        assert_eq!(the_config.time_limit, Some(Duration::from_secs(5)));
        assert!(!the_config.decision_polarity);
        assert_eq!(the_config.unconstrained_value, defaults::UNCONSTRAINED_VALUE);
        assert_eq!(args.assignments, vec![("A".to_string(), false)]);
    }

    #[test]
    fn dimacs_requires_file() {
        assert!(Args::try_parse_from(["cnf_sat", "--dimacs"]).is_err());
        assert!(Args::try_parse_from(["cnf_sat", "A", "--file", "f.cnf"]).is_err());
    }
}
