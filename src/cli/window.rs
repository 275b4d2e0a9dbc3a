use std::io::{stdout, Write};

use crossterm::{cursor, terminal, tty::IsTty, QueueableCommand};

/// A single line of progress, rewritten in place while benchmarking.
///
/// Nothing is written unless standard output is a terminal.
pub struct BenchWindow {
    active: bool,
    iterations: usize,
}

impl BenchWindow {
    pub fn new(iterations: usize) -> Self {
        BenchWindow {
            active: stdout().is_tty(),
            iterations,
        }
    }

    pub fn update(&self, size: usize, iteration: usize) -> std::io::Result<()> {
        if !self.active {
            return Ok(());
        }

        let mut stdout = stdout();
        stdout.queue(cursor::MoveToColumn(0))?;
        stdout.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        write!(
            stdout,
            "c {size:>6} clauses, theory {}/{}",
            iteration + 1,
            self.iterations
        )?;
        stdout.flush()
    }

    pub fn clear(&self) -> std::io::Result<()> {
        if !self.active {
            return Ok(());
        }

        let mut stdout = stdout();
        stdout.queue(cursor::MoveToColumn(0))?;
        stdout.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        stdout.flush()
    }
}
