#![allow(dead_code)]

use std::collections::HashMap;

use cnf_lib::structures::formula::Formula;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn variable_names(count: usize) -> Vec<String> {
    (0..count).map(|index| format!("x{index}")).collect()
}

/// A formula over the given names, with every connective below `depth` chosen at random.
pub fn random_formula(rng: &mut StdRng, names: &[String], depth: usize) -> Formula {
    if depth == 0 || rng.gen_bool(0.2) {
        return Formula::variable(names[rng.gen_range(0..names.len())].clone());
    }
    match rng.gen_range(0..4) {
        0 => Formula::negation(random_formula(rng, names, depth - 1)),
        1 => Formula::conjunction(
            random_formula(rng, names, depth - 1),
            random_formula(rng, names, depth - 1),
        ),
        _ => Formula::disjunction(
            random_formula(rng, names, depth - 1),
            random_formula(rng, names, depth - 1),
        ),
    }
}

/// Clauses of `width` literals over the given names, as (name, negated) pairs.
pub fn random_clauses(
    rng: &mut StdRng,
    names: &[String],
    count: usize,
    width: usize,
) -> Vec<Vec<(String, bool)>> {
    (0..count)
        .map(|_| {
            (0..width)
                .map(|_| (names[rng.gen_range(0..names.len())].clone(), rng.gen_bool(0.5)))
                .collect()
        })
        .collect()
}

/// Every valuation of the given names.
pub fn valuations(names: &[String]) -> impl Iterator<Item = HashMap<String, bool>> + '_ {
    (0..1_usize << names.len()).map(move |bits| {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), bits & (1 << index) != 0))
            .collect()
    })
}

pub fn clauses_hold(clauses: &[Vec<(String, bool)>], valuation: &HashMap<String, bool>) -> bool {
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|(name, negated)| valuation[name.as_str()] != *negated)
    })
}

/// Satisfiability by truth table.
pub fn clauses_satisfiable(names: &[String], clauses: &[Vec<(String, bool)>]) -> bool {
    valuations(names).any(|valuation| clauses_hold(clauses, &valuation))
}

pub fn formula_satisfiable(formula: &Formula) -> bool {
    let names = formula
        .variables()
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    let satisfiable =
        valuations(&names).any(|valuation| formula.evaluate(&|name: &str| valuation[name]));
    satisfiable
}
