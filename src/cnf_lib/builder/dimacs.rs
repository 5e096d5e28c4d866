/*!
Reads a CNF from the DIMACS format.

```text
c A comment
p cnf 3 2
1 -3 0
2 3 -1 0
```

- Lines beginning with `c` are comments.
- The `p cnf <variables> <clauses>` preface is optional, though if present it must come before any clause.
- A line beginning with `%` ends the formula.
- A literal is a non-zero integer, and the variable of a literal is named by its absolute value.
- `0` ends a clause. Clauses may span lines, and literals after the last `0` form a final clause.

The preface is only used as a hint, and a mismatch with what was read is noted in the log.
*/

use std::io::BufRead;

use crate::{
    db::cnf::Cnf,
    misc::log::targets::{self},
    types::err::{self},
};

type DimacsClause = Vec<(String, bool)>;

fn problem_details(line: &str) -> Result<(usize, usize), err::Build> {
    let mut details = line.split_whitespace();
    if details.next() != Some("p") || details.next() != Some("cnf") {
        return Err(err::Build::ProblemSpecification);
    }

    let mut count = || -> Result<usize, err::Build> {
        match details.next().map(str::parse) {
            Some(Ok(count)) => Ok(count),
            _ => Err(err::Build::ProblemSpecification),
        }
    };
    let variable_count = count()?;
    let clause_count = count()?;

    match details.next() {
        None => Ok((variable_count, clause_count)),
        Some(_) => Err(err::Build::ProblemSpecification),
    }
}

impl Cnf {
    /// Reads a CNF in the DIMACS format.
    ///
    /// ```rust
    /// # use cnf_lib::db::cnf::Cnf;
    /// let dimacs = "p cnf 2 2\n1 2 0\n-1 0\n";
    /// let the_cnf = Cnf::from_dimacs(dimacs.as_bytes()).unwrap();
    /// assert_eq!(the_cnf.to_string(), "{{1, 2}, {¬1}}");
    /// assert_eq!(the_cnf.solve().assignment().unwrap().value_of("2"), Some(true));
    /// ```
    pub fn from_dimacs(mut reader: impl BufRead) -> Result<Cnf, err::Build> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        let mut preface = None;
        let mut clauses: Vec<DimacsClause> = Vec::new();
        let mut clause_buffer: DimacsClause = Vec::new();
        let mut started = false;

        'line_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::Build::Line(line_counter + 1)),
            }

            let line = buffer.trim();
            match line.chars().next() {
                None | Some('c') => continue,
                Some('%') => break 'line_loop,
                Some('p') => match started || preface.is_some() {
                    true => return Err(err::Build::MisplacedProblem(line_counter)),
                    false => preface = Some(problem_details(line)?),
                },
                _ => {
                    started = true;
                    for token in line.split_whitespace() {
                        let literal: isize = match token.parse() {
                            Ok(literal) => literal,
                            Err(_) => {
                                return Err(err::Build::Literal {
                                    line: line_counter,
                                    token: token.to_string(),
                                })
                            }
                        };
                        match literal {
                            0 => clauses.push(std::mem::take(&mut clause_buffer)),
                            _ => clause_buffer.push((literal.unsigned_abs().to_string(), literal < 0)),
                        }
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            clauses.push(clause_buffer);
        }

        if let Some((variable_count, clause_count)) = preface {
            log::debug!(target: targets::BUILD, "Preface expected {variable_count} variables and {clause_count} clauses");
        }
        log::debug!(target: targets::BUILD, "Read {} clauses from {line_counter} lines", clauses.len());

        Ok(Cnf::from_clauses(clauses))
    }
}
