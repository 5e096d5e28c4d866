use cnf_lib::{db::cnf::Cnf, reports::Report, types::err};

mod dimacs {
    use super::*;

    fn read(text: &str) -> Result<Cnf, err::Build> {
        Cnf::from_dimacs(text.as_bytes())
    }

    #[test]
    fn satisfiable() {
        let the_cnf = read(
            "c A small example
p cnf 3 4
1 2 0
-1 3 0
-2 -3 0
2 3 0
",
        )
        .expect("read");
        assert_eq!(the_cnf.variable_count(), 3);
        assert_eq!(the_cnf.clause_count(), 4);

        let Report::Satisfiable(assignment) = the_cnf.solve() else {
            panic!("A model exists");
        };
        assert!(the_cnf.is_satisfied_by(&assignment));
    }

    #[test]
    fn unsatisfiable() {
        let the_cnf = read(
            "p cnf 2 4
1 2 0
1 -2 0
-1 2 0
-1 -2 0
",
        )
        .expect("read");
        assert_eq!(the_cnf.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn no_preface() {
        let the_cnf = read("1 -2 0 2 0").expect("read");
        assert_eq!(the_cnf.to_string(), "{{1, ¬2}, {2}}");
        assert_eq!(the_cnf.solve().assignment().map(|a| a.to_string()), Some("1 2".to_string()));
    }

    #[test]
    fn empty_clause() {
        let the_cnf = read("p cnf 1 2\n1 0\n0\n").expect("read");
        assert_eq!(the_cnf.to_string(), "{{1}, {}}");
        assert_eq!(the_cnf.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn errors() {
        assert_eq!(read("p cnf one 1\n").err(), Some(err::Build::ProblemSpecification));
        assert_eq!(
            read("c\n1 0\np cnf 1 1\n").err(),
            Some(err::Build::MisplacedProblem(3))
        );
        assert_eq!(
            read("1 2.5 0\n").err(),
            Some(err::Build::Literal {
                line: 1,
                token: "2.5".to_string()
            })
        );
    }
}
