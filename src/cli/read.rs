use std::{fs::File, io::BufReader};

use cnf_lib::{
    db::cnf::Cnf,
    types::err::{self},
};

use super::args::Args;

/// The CNF given by the formula argument, or read from the file argument.
pub fn load_cnf(args: &Args) -> Result<Cnf, err::Build> {
    match (&args.formula, &args.file) {
        (Some(text), _) => Ok(Cnf::parse(text)?),

        (None, Some(path)) => {
            let Ok(file) = File::open(path) else {
                return Err(err::Build::NoFile);
            };
            match args.dimacs {
                true => Cnf::from_dimacs(BufReader::new(file)),
                false => {
                    let Ok(text) = std::io::read_to_string(file) else {
                        return Err(err::Build::Line(0));
                    };
                    Ok(Cnf::parse(&text)?)
                }
            }
        }

        (None, None) => Err(err::Build::NoFormula),
    }
}
