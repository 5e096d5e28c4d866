/*!
Negation pushdown.

Negations are carried down the tree as a flag, swapping connectives under an odd count of pending negations, until they rest on variables.
The result is in negation normal form, and has size linear in the size of the input.
*/

use crate::structures::formula::Formula;

enum Step {
    Visit(Formula, bool),
    Conjoin,
    Disjoin,
}

/// Returns an equivalent of the formula (or of its negation, if `negated`) in which every negation applies directly to a variable.
///
/// The tree is walked with an explicit stack, so depth is bounded only by memory.
pub fn push_negations(formula: Formula, negated: bool) -> Formula {
    let mut steps = vec![Step::Visit(formula, negated)];
    let mut done: Vec<Formula> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Formula::Conjunction(left, right), negated) => {
                steps.push(match negated {
                    true => Step::Disjoin,
                    false => Step::Conjoin,
                });
                steps.push(Step::Visit(*right, negated));
                steps.push(Step::Visit(*left, negated));
            }

            Step::Visit(Formula::Disjunction(left, right), negated) => {
                steps.push(match negated {
                    true => Step::Conjoin,
                    false => Step::Disjoin,
                });
                steps.push(Step::Visit(*right, negated));
                steps.push(Step::Visit(*left, negated));
            }

            Step::Visit(Formula::Negation(inner), negated) => steps.push(Step::Visit(*inner, !negated)),

            Step::Visit(Formula::Variable(name), negated) => done.push(match negated {
                true => Formula::negation(Formula::Variable(name)),
                false => Formula::Variable(name),
            }),

            Step::Conjoin | Step::Disjoin => {
                let (Some(right), Some(left)) = (done.pop(), done.pop()) else {
                    unreachable!("A connective without two pushed operands");
                };
                done.push(match step {
                    Step::Conjoin => Formula::conjunction(left, right),
                    _ => Formula::disjunction(left, right),
                });
            }
        }
    }

    match done.pop() {
        Some(the_formula) if done.is_empty() => the_formula,
        _ => unreachable!("Negation pushdown ends with exactly one formula"),
    }
}
