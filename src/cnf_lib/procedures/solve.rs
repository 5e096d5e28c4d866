/*!
A procedure to determine the satisfiability of a CNF.

# Overview

Search is depth-first, with unit propagation, over clones of the CNF:

1. If some clause is false, the branch fails.
2. If no clause remains, the branch succeeds, and any unassigned variable takes the [unconstrained value](Config::unconstrained_value).
3. If some clause forces a literal, the literal is assigned and the loop returns to 1.
4. Otherwise, the first unassigned variable of the first clause is chosen.
   A clone of the CNF is made with the variable taking the [decision polarity](Config::decision_polarity), and searched.
   If that branch fails, the CNF itself is searched with the opposite value.

Each branch assigns at least one more variable than its parent, so the depth of the search is bounded by the count of variables.
Variable choice and branch order are fixed, so the result of a solve is reproducible.

If a [time limit](Config::time_limit) is set it is checked at each step, and a solve which runs out of time reports [Unknown](Report::Unknown).
*/

use std::time::Instant;

use crate::{
    config::Config,
    db::cnf::Cnf,
    misc::log::targets::{self},
    reports::{Assignment, Counters, Report},
};

/// The outcome of searching some branch.
enum Branch {
    Model(Assignment),
    Refuted,
    Interrupted,
}

pub struct Solver {
    config: Config,
    counters: Counters,
}

impl Solver {
    pub fn from_config(config: Config) -> Self {
        Solver {
            config,
            counters: Counters::default(),
        }
    }

    /// Counters from the most recent solve.
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Determines whether the CNF is satisfiable, respecting any values already assigned.
    ///
    /// The CNF is not modified.
    pub fn solve(&mut self, cnf: &Cnf) -> Report {
        self.counters = Counters::default();
        let start = Instant::now();

        let branch = self.search(cnf.clone(), 0, start);
        self.counters.time = start.elapsed();

        let the_report = match branch {
            Branch::Model(assignment) => Report::Satisfiable(assignment),
            Branch::Refuted => Report::Unsatisfiable,
            Branch::Interrupted => Report::Unknown,
        };

        log::debug!(target: targets::SOLVE,
            "{the_report} with {} decisions, {} propagations, and {} conflicts in {:.2?}",
            self.counters.decisions,
            self.counters.propagations,
            self.counters.conflicts,
            self.counters.time
        );
        the_report
    }

    fn search(&mut self, mut cnf: Cnf, depth: usize, start: Instant) -> Branch {
        self.counters.max_depth = self.counters.max_depth.max(depth);

        'propagation: loop {
            if self
                .config
                .time_limit
                .is_some_and(|limit| start.elapsed() >= limit)
            {
                log::debug!(target: targets::SOLVE, "Time limit reached at depth {depth}");
                return Branch::Interrupted;
            }

            if cnf.has_conflict() {
                self.counters.conflicts += 1;
                log::trace!(target: targets::SOLVE, "Conflict at depth {depth}");
                return Branch::Refuted;
            }

            if cnf.clause_count() == 0 {
                return Branch::Model(cnf.complete_assignment(self.config.unconstrained_value));
            }

            match cnf.find_unit() {
                Some(literal) => {
                    self.counters.propagations += 1;
                    if let Some(variable) = cnf.variable(literal.variable()) {
                        log::trace!(target: targets::PROPAGATION, "{} = {} forced at depth {depth}", variable.name(), literal.polarity());
                    }
                    cnf.apply(literal.variable(), literal.polarity());
                    continue 'propagation;
                }
                None => break 'propagation,
            }
        }

        // Each remaining clause is undetermined, and so has some unassigned variable.
        let Some(choice) = cnf.first_unassigned() else {
            unreachable!("An undetermined clause without an unassigned variable");
        };

        self.counters.decisions += 1;
        let polarity = self.config.decision_polarity;
        if let Some(variable) = cnf.variable(choice) {
            log::trace!(target: targets::DECISION, "{} = {polarity} chosen at depth {depth}", variable.name());
        }

        let mut the_branch = cnf.clone();
        the_branch.apply(choice, polarity);
        match self.search(the_branch, depth + 1, start) {
            Branch::Refuted => {}
            other => return other,
        }

        cnf.apply(choice, !polarity);
        self.search(cnf, depth + 1, start)
    }
}

impl Cnf {
    /// Determines whether the CNF is satisfiable, with the default [Config].
    pub fn solve(&self) -> Report {
        Solver::from_config(Config::default()).solve(self)
    }

    pub fn solve_with(&self, config: &Config) -> Report {
        Solver::from_config(config.clone()).solve(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_on_a_unit_chain() {
        let the_cnf = Cnf::from_clauses([
            vec![("p", false)],
            vec![("p", true), ("q", false)],
            vec![("q", true), ("r", false)],
        ]);
        let mut solver = Solver::from_config(Config::default());
        assert!(solver.solve(&the_cnf).is_satisfiable());
        assert_eq!(solver.counters().propagations, 3);
        assert_eq!(solver.counters().decisions, 0);
        assert_eq!(solver.counters().conflicts, 0);
    }

    #[test]
    fn decision_then_backtrack() {
        // p is chosen true first, which forces both q and ¬q.
        let the_cnf = Cnf::from_clauses([
            vec![("p", true), ("q", false)],
            vec![("p", true), ("q", true)],
            vec![("p", false), ("r", false)],
        ]);
        let mut solver = Solver::from_config(Config::default());
        let the_report = solver.solve(&the_cnf);

        let Report::Satisfiable(assignment) = the_report else {
            panic!("Expected a model");
        };
        assert_eq!(assignment.value_of("p"), Some(false));
        assert_eq!(assignment.value_of("r"), Some(true));
        assert_eq!(solver.counters().decisions, 1);
        assert_eq!(solver.counters().conflicts, 1);
        assert_eq!(solver.counters().max_depth, 1);
    }
}
