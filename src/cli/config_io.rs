use super::args::Args;

/// Options for what is displayed, kept apart from the solve [Config](cnf_lib::config::Config).
#[derive(Clone, Debug)]
pub struct ConfigIO {
    pub show_cnf: bool,
    pub show_stats: bool,
    pub show_valuation: bool,
    pub json: bool,
}

impl ConfigIO {
    pub fn from_args(args: &Args) -> Self {
        ConfigIO {
            show_cnf: args.show_cnf,
            show_stats: args.stats,
            show_valuation: args.valuation,
            json: args.json,
        }
    }
}
