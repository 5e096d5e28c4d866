#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;
use serde::Serialize;

use cnf_lib::{
    procedures::solve::Solver,
    reports::{Counters, Report},
};

mod cli;

use cli::{
    args::{config_from_args, Args},
    config_io::ConfigIO,
    read::load_cnf,
};

#[derive(Serialize)]
struct JsonReport<'r> {
    report: &'r Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<&'r Counters>,
}

fn main() {
    #[cfg(feature = "log")]
    if let Err(e) = log4rs::init_file("config/log4rs.yaml", Default::default()) {
        eprintln!("c Unable to initialise logging: {e}");
    }

    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        std::process::exit(0);
    }

    let config = config_from_args(&args);
    let config_io = ConfigIO::from_args(&args);

    let mut the_cnf = match load_cnf(&args) {
        Ok(cnf) => cnf,
        Err(e) => {
            println!("c Error loading formula: {e}");
            std::process::exit(1);
        }
    };

    if !args.assignments.is_empty() {
        if let Err(e) = the_cnf.assign_batch(args.assignments.iter().map(|(n, v)| (n, *v))) {
            println!("c Error assigning values: {e}");
            std::process::exit(1);
        }
    }

    if config_io.show_cnf {
        println!("c {the_cnf}");
    }

    let mut the_solver = Solver::from_config(config);
    let report = the_solver.solve(&the_cnf);

    if config_io.json {
        let json_report = JsonReport {
            report: &report,
            stats: config_io.show_stats.then(|| the_solver.counters()),
        };
        match serde_json::to_string(&json_report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                println!("c Error writing JSON: {e}");
                std::process::exit(1);
            }
        }
    } else {
        if config_io.show_stats {
            let counters = the_solver.counters();
            println!("c Variables:    {}", the_cnf.variable_count());
            println!("c Clauses:      {}", the_cnf.clause_count());
            println!("c Decisions:    {}", counters.decisions);
            println!("c Propagations: {}", counters.propagations);
            println!("c Conflicts:    {}", counters.conflicts);
            println!("c Max depth:    {}", counters.max_depth);
            println!("c Time:         {:.2?}", counters.time);
        }
        if config_io.show_valuation {
            if let Some(assignment) = report.assignment() {
                println!("v {assignment}");
            }
        }
        println!("s {report}");
    }

    match report {
        Report::Satisfiable(_) => std::process::exit(10),
        Report::Unsatisfiable => std::process::exit(20),
        Report::Unknown => std::process::exit(30),
    }
}
