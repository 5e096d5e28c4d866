/*!
Conjunction pullup, by distribution of disjunction over conjunction.

Given a formula in negation normal form, conjunctions below disjunctions are pulled to the top of the tree.

The number of clauses may be exponential in the size of the formula.
For example, `(a1 ∧ b1) ∨ (a2 ∧ b2) ∨ … ∨ (ak ∧ bk)` distributes to 2^k clauses.
No auxiliary variables are introduced to avoid this.
*/

use crate::{
    misc::log::targets::NORMALIZATION,
    structures::formula::Formula,
    types::err::{self},
};

use super::negation::push_negations;

enum Step {
    Visit(Formula),
    Conjoin,
    Disjoin,
}

/// Returns an equivalent formula in conjunctive normal form, together with whether the formula is a conjunction.
///
/// The formula is assumed to be in negation normal form.
/// Subformulas are pulled up bottom-up from an explicit stack, so depth is bounded only by memory.
pub fn pull_conjunctions(formula: Formula) -> (Formula, bool) {
    let mut steps = vec![Step::Visit(formula)];
    let mut done: Vec<(Formula, bool)> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Formula::Conjunction(left, right)) => {
                steps.push(Step::Conjoin);
                steps.push(Step::Visit(*right));
                steps.push(Step::Visit(*left));
            }

            Step::Visit(Formula::Disjunction(left, right)) => {
                steps.push(Step::Disjoin);
                steps.push(Step::Visit(*right));
                steps.push(Step::Visit(*left));
            }

            Step::Visit(literal) => done.push((literal, false)),

            Step::Conjoin | Step::Disjoin => {
                let (Some((right, right_conjunction)), Some((left, left_conjunction))) =
                    (done.pop(), done.pop())
                else {
                    unreachable!("A connective without two pulled operands");
                };

                match step {
                    Step::Conjoin => done.push((Formula::conjunction(left, right), true)),

                    _ if !(left_conjunction || right_conjunction) => {
                        done.push((Formula::disjunction(left, right), false))
                    }

                    _ => {
                        let left = operands(left, left_conjunction);
                        let right = operands(right, right_conjunction);
                        done.push((distribute(left, right), true));
                    }
                }
            }
        }
    }

    match done.pop() {
        Some(the_result) if done.is_empty() => the_result,
        _ => unreachable!("Conjunction pullup ends with exactly one formula"),
    }
}

/// The conjuncts of a conjunction, or the formula itself.
fn operands(formula: Formula, is_conjunction: bool) -> Vec<Formula> {
    match is_conjunction {
        true => spine(formula, Spine::Conjunction),
        false => vec![formula],
    }
}

#[derive(Clone, Copy)]
enum Spine {
    Conjunction,
    Disjunction,
}

/// The maximal subformulas below an unbroken run of the given connective, left to right.
fn spine(formula: Formula, connective: Spine) -> Vec<Formula> {
    let mut the_spine = Vec::new();
    let mut pending = vec![formula];

    while let Some(formula) = pending.pop() {
        match (formula, connective) {
            (Formula::Conjunction(left, right), Spine::Conjunction)
            | (Formula::Disjunction(left, right), Spine::Disjunction) => {
                pending.push(*right);
                pending.push(*left);
            }
            (other, _) => the_spine.push(other),
        }
    }

    the_spine
}

/// The left-associated conjunction of the disjunction of each pair from the product of `left` and `right`.
///
/// Pairs are taken with `left` as the outer loop.
fn distribute(left: Vec<Formula>, right: Vec<Formula>) -> Formula {
    log::trace!(target: NORMALIZATION, "Distributing {} × {} operands", left.len(), right.len());

    let mut products = Vec::with_capacity(left.len() * right.len());
    for l in &left {
        for r in &right {
            products.push(Formula::disjunction(l.clone(), r.clone()));
        }
    }

    let mut products = products.into_iter();
    match (products.next(), products.next()) {
        (Some(first), Some(second)) => {
            products.fold(Formula::conjunction(first, second), Formula::conjunction)
        }
        _ => unreachable!("A distribution over a conjunction has at least two products"),
    }
}

/// Returns an equivalent of the formula in conjunctive normal form.
pub fn convert_to_cnf(formula: Formula) -> Formula {
    let size = formula.size();
    let (the_cnf, _) = pull_conjunctions(push_negations(formula, false));
    log::debug!(target: NORMALIZATION, "Normalized a formula of {size} nodes to {} nodes", the_cnf.size());
    the_cnf
}

/// The clauses of a formula in conjunctive normal form, each as a list of (name, negated) pairs.
///
/// Any formula returned by [convert_to_cnf] is in conjunctive normal form.
/// Otherwise, a conjunction below a disjunction, or a negation of a compound formula, is an error.
pub fn flatten_clauses(formula: Formula) -> Result<Vec<Vec<(String, bool)>>, err::Cnf> {
    spine(formula, Spine::Conjunction)
        .into_iter()
        .map(|clause| {
            spine(clause, Spine::Disjunction)
                .into_iter()
                .map(literal_pair)
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

fn literal_pair(formula: Formula) -> Result<(String, bool), err::Cnf> {
    match formula {
        Formula::Variable(name) => Ok((name, false)),
        Formula::Negation(inner) => match *inner {
            Formula::Variable(name) => Ok((name, true)),
            _ => Err(err::Cnf::NotCnf),
        },
        Formula::Conjunction(..) | Formula::Disjunction(..) => Err(err::Cnf::NotCnf),
    }
}
