use std::path::Path;

use horn_sat::{
    context::Context,
    reports::ParseInfo,
    types::err::{ErrorKind, ParseError},
};

pub(super) struct ReadError(ErrorKind);

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            ErrorKind::Parse(ParseError::NoFile) => write!(f, "Failed to open clause file."),

            ErrorKind::Parse(e) => write!(f, "Parse error: {e}."),

            ErrorKind::Malformed(errors) => {
                write!(f, "Parse errors:")?;
                for e in errors {
                    write!(f, "\nc   {e}")?;
                }
                Ok(())
            }

            e => write!(f, "Parse error: '{e:?}'."),
        }
    }
}

/// Reads the clause file at `path` to `context` and writes a report.
pub(super) fn read_clauses(path: &Path, context: &mut Context) -> Result<ParseInfo, ReadError> {
    println!("c Reading clauses from {path:?}");

    match context.read_horn_path(path) {
        Ok(info) => {
            println!("c Facts:            {}", info.facts);
            println!("c Clauses:          {}", info.clauses);
            println!("c Constraints:      {}", info.constraints);
            println!("c Atoms:            {}", info.atoms);
            Ok(info)
        }

        Err(e) => Err(ReadError(e)),
    }
}
