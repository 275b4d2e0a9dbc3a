/*!
Reading theories written one clause to a line.

Each line is written `ANTECEDENTS , CONSEQUENT`, where:
- `ANTECEDENTS` is a whitespace separated sequence of names, possibly empty.
- `CONSEQUENT` is at most one name.

For example:

```text
1 2, 3
1 2,
, 5
```

Is the clause from `1` and `2` to `3`, the integrity constraint that `1` and `2` do not both hold, and the fact `5`.

A name is any non-empty string without whitespace or the separator.
Lines which are empty or contain only whitespace are skipped.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    config::ParsePolicy,
    context::{Context, ContextState},
    misc::log::targets::{self},
    reports::ParseInfo,
    types::err::{self, ErrorKind},
};

/// The character between antecedents and consequent.
pub const SEPARATOR: char = ',';

/// A line of input, with names borrowed from the line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HornLine<'l> {
    /// A line without content.
    Blank,

    /// A line without antecedents.
    Fact(&'l str),

    /// Any other line.
    Clause {
        antecedents: Vec<&'l str>,
        consequent: Option<&'l str>,
    },
}

/// Parses a single line of input.
///
/// ```rust
/// # use horn_sat::builder::{parse_line, HornLine};
/// # use horn_sat::types::err::LineError;
/// assert_eq!(parse_line(", 5"), Ok(HornLine::Fact("5")));
/// assert_eq!(
///     parse_line("1 2,"),
///     Ok(HornLine::Clause { antecedents: vec!["1", "2"], consequent: None })
/// );
/// assert_eq!(parse_line("1 2 3"), Err(LineError::MissingSeparator));
/// ```
pub fn parse_line(line: &str) -> Result<HornLine<'_>, err::LineError> {
    if line.trim().is_empty() {
        return Ok(HornLine::Blank);
    }

    let Some((antecedents, consequent)) = line.split_once(SEPARATOR) else {
        return Err(err::LineError::MissingSeparator);
    };

    if consequent.contains(SEPARATOR) {
        return Err(err::LineError::ExtraSeparator);
    }

    let mut consequents = consequent.split_whitespace();
    let consequent = consequents.next();
    if consequents.next().is_some() {
        return Err(err::LineError::ExcessConsequent);
    }

    let antecedents = antecedents.split_whitespace().collect::<Vec<_>>();

    match (antecedents.is_empty(), consequent) {
        (true, Some(fact)) => Ok(HornLine::Fact(fact)),

        _ => Ok(HornLine::Clause {
            antecedents,
            consequent,
        }),
    }
}

impl Context {
    /// Reads a theory into the context, one clause to a line.
    ///
    /// On a malformed line the read fails, following the [parse policy](crate::config::Config::parse_policy) of the context.
    /// Either the first malformed line is returned as an [ErrorKind::Parse], or every malformed line is returned as an [ErrorKind::Malformed].
    ///
    /// A failed read leaves the context [Invalid](ContextState::Invalid), as any line read before the failure has been added.
    ///
    /// ```rust,ignore
    /// context.read_horn(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use horn_sat::context::Context;
    /// # use horn_sat::reports::Report;
    /// let mut the_context = Context::default();
    ///
    /// let theory = b"
    /// , 1
    /// , 2
    /// 1 2,
    /// ";
    ///
    /// let info = the_context.read_horn(theory.as_slice()).unwrap();
    /// assert_eq!(info.facts, 2);
    /// assert_eq!(info.constraints, 1);
    /// assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    /// ```
    pub fn read_horn(&mut self, reader: impl BufRead) -> Result<ParseInfo, ErrorKind> {
        self.open_input()?;

        match self.read_horn_lines(reader) {
            Ok(info) => Ok(info),
            Err(e) => {
                log::warn!(target: targets::PARSE, "Input invalidated");
                self.state = ContextState::Invalid;
                Err(e)
            }
        }
    }

    /// Reads the theory in the file at `path`, as with [read_horn](Context::read_horn).
    ///
    /// A file which cannot be opened is a [ParseError::NoFile](err::ParseError::NoFile), and leaves the context as it was.
    pub fn read_horn_path(&mut self, path: &Path) -> Result<ParseInfo, ErrorKind> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => {
                log::error!(target: targets::PARSE, "Failed to open {path:?}");
                return Err(ErrorKind::from(err::ParseError::NoFile));
            }
        };

        self.read_horn(BufReader::new(file))
    }

    fn read_horn_lines(&mut self, mut reader: impl BufRead) -> Result<ParseInfo, ErrorKind> {
        let policy = self.config.parse_policy.value;

        let mut info = ParseInfo::default();
        let mut malformed = Vec::default();
        let mut buffer = String::with_capacity(1024);

        loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => info.lines += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Read(info.lines))),
            }

            let line = match parse_line(&buffer) {
                Ok(line) => line,
                Err(e) => {
                    let e = err::ParseError::Line(info.lines, e);
                    log::warn!(target: targets::PARSE, "Malformed {e}");

                    match policy {
                        ParsePolicy::FailFast => return Err(ErrorKind::from(e)),
                        ParsePolicy::CollectAll => {
                            malformed.push(e);
                            continue;
                        }
                    }
                }
            };

            match line {
                HornLine::Blank => info.blank += 1,

                HornLine::Fact(name) => {
                    self.add_fact(name)?;
                    info.facts += 1;
                }

                HornLine::Clause {
                    antecedents,
                    consequent,
                } => {
                    self.add_clause(antecedents.as_slice(), consequent)?;
                    info.clauses += 1;
                    if consequent.is_none() {
                        info.constraints += 1;
                    }
                }
            }
        }

        if !malformed.is_empty() {
            return Err(ErrorKind::Malformed(malformed));
        }

        info.atoms = self.atom_db.count();

        log::info!(target: targets::PARSE, "Read {} lines: {} facts, {} clauses ({} constraints), {} atoms",
            info.lines, info.facts, info.clauses, info.constraints, info.atoms);

        Ok(info)
    }
}
