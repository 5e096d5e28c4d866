use cnf_lib::{
    db::cnf::Cnf,
    procedures::{convert_to_cnf, flatten_clauses, push_negations},
    structures::formula::Formula,
};

mod common;
use common::*;

mod negation {
    use super::*;

    #[test]
    fn result_is_nnf() {
        let mut rng = rng(11);
        let names = variable_names(4);
        for _ in 0..200 {
            let formula = random_formula(&mut rng, &names, 5);
            assert!(push_negations(formula.clone(), false).is_nnf());
            assert!(push_negations(formula, true).is_nnf());
        }
    }

    #[test]
    fn double_negation() {
        let p = Formula::variable("p");
        let twice = Formula::negation(Formula::negation(p.clone()));
        assert_eq!(push_negations(twice.clone(), false), p);
        assert_eq!(push_negations(Formula::negation(twice), false), Formula::negation(p));
    }

    #[test]
    fn negated_push_is_the_complement() {
        let mut rng = rng(12);
        let names = variable_names(4);
        for _ in 0..100 {
            let formula = random_formula(&mut rng, &names, 4);
            let complement = push_negations(formula.clone(), true);
            for valuation in valuations(&names) {
                let value_of = |name: &str| valuation[name];
                assert_eq!(complement.evaluate(&value_of), !formula.evaluate(&value_of));
            }
        }
    }
}

mod conversion {
    use super::*;

    #[test]
    fn result_is_cnf() {
        let mut rng = rng(21);
        let names = variable_names(5);
        for _ in 0..200 {
            let formula = random_formula(&mut rng, &names, 4);
            assert!(convert_to_cnf(formula).is_cnf());
        }
    }

    #[test]
    fn equivalence() {
        let mut rng = rng(22);
        let names = variable_names(6);
        for _ in 0..150 {
            let formula = random_formula(&mut rng, &names, 4);
            let the_cnf = convert_to_cnf(formula.clone());
            for valuation in valuations(&names) {
                let value_of = |name: &str| valuation[name];
                assert_eq!(
                    the_cnf.evaluate(&value_of),
                    formula.evaluate(&value_of),
                    "{formula} and {the_cnf} differ"
                );
            }
        }
    }

    #[test]
    fn flattened_clauses_agree() {
        let mut rng = rng(23);
        let names = variable_names(4);
        for _ in 0..100 {
            let formula = random_formula(&mut rng, &names, 4);
            let clauses = flatten_clauses(convert_to_cnf(formula.clone())).expect("cnf");
            for valuation in valuations(&names) {
                let value_of = |name: &str| valuation[name];
                assert_eq!(clauses_hold(&clauses, &valuation), formula.evaluate(&value_of));
            }
        }
    }

    #[test]
    fn clause_order() {
        let formula = cnf_lib::builder::parse::parse_formula("(a AND b) OR (c AND d)").expect("parse");
        let clauses = flatten_clauses(convert_to_cnf(formula))
            .expect("cnf")
            .into_iter()
            .map(|clause| clause.into_iter().map(|(name, _)| name).collect::<Vec<_>>().join(""))
            .collect::<Vec<_>>();
        assert_eq!(clauses, ["ac", "ad", "bc", "bd"]);
    }

    /// `(a1 AND b1) OR … OR (ak AND bk)`
    fn pairs(k: usize) -> Formula {
        (1..=k)
            .map(|i| Formula::conjunction(Formula::variable(format!("a{i}")), Formula::variable(format!("b{i}"))))
            .reduce(Formula::disjunction)
            .expect("k > 0")
    }

    #[test]
    fn exponential_distribution() {
        for k in 1..=6 {
            let clauses = flatten_clauses(convert_to_cnf(pairs(k))).expect("cnf");
            assert_eq!(clauses.len(), 1 << k);
            assert!(clauses.iter().all(|clause| clause.len() == k));

            let mut distinct = clauses.clone();
            distinct.sort();
            distinct.dedup();
            assert_eq!(distinct.len(), clauses.len());
        }
    }
}

mod long_formulas {
    use super::*;

    const LENGTH: usize = 20_000;

    fn chain(connective: &str) -> String {
        (0..LENGTH)
            .map(|i| format!("x{i}"))
            .collect::<Vec<_>>()
            .join(connective)
    }

    #[test]
    fn long_conjunction() {
        let the_cnf = Cnf::parse(&chain(" AND ")).expect("parse");
        assert_eq!(the_cnf.clause_count(), LENGTH);
        assert_eq!(the_cnf.variable_count(), LENGTH);
        assert!(the_cnf.clauses().iter().all(|clause| clause.len() == 1));
    }

    #[test]
    fn long_disjunction() {
        let the_cnf = Cnf::parse(&chain(" OR ")).expect("parse");
        assert_eq!(the_cnf.clause_count(), 1);
        assert_eq!(the_cnf.clauses()[0].len(), LENGTH);
    }

    #[test]
    fn long_negated_conjunction() {
        let text = format!("NOT ({})", chain(" AND "));
        let clauses = flatten_clauses(convert_to_cnf(
            cnf_lib::builder::parse::parse_formula(&text).expect("parse"),
        ))
        .expect("cnf");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].len(), LENGTH);
        assert!(clauses[0].iter().all(|(_, negated)| *negated));
    }

    #[test]
    fn long_negation_run() {
        let text = format!("{}p", "NOT ".repeat(LENGTH + 1));
        let formula = cnf_lib::builder::parse::parse_formula(&text).expect("parse");
        assert_eq!(formula.size(), LENGTH + 2);
        assert_eq!(push_negations(formula, false), Formula::negation(Formula::variable("p")));
    }
}
