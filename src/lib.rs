use std::io::{self, StdinLock, Stdout, Write};

pub mod commands;
pub mod error;
pub mod reader;
pub mod registry;
pub mod tokenizer;

use error::ShellError;
use reader::LineReader;
use registry::Flow;
use tokenizer::tokenize;

const PROMPT: &str = "$ ";

/// The read → tokenize → lookup → invoke loop.
pub struct Shell<R, W> {
    reader: LineReader<R>,
    out: W,
}

impl Shell<StdinLock<'static>, Stdout> {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for Shell<StdinLock<'static>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: io::Read, W: Write> Shell<R, W> {
    pub fn with_io(input: R, out: W) -> Self {
        Self {
            reader: LineReader::new(input),
            out,
        }
    }

    /// Runs until end-of-input or the exit command. Only read and write
    /// failures escalate out of the loop; every other error is reported
    /// inline and the next line is read.
    pub fn run(mut self) -> Result<(), ShellError> {
        loop {
            write!(self.out, "{PROMPT}").map_err(ShellError::WriteOutput)?;
            self.out.flush().map_err(ShellError::WriteOutput)?;

            let Some(line) = self.reader.read_line()? else {
                return Ok(());
            };

            let args = tokenize(&line);
            match self.dispatch(&args).map_err(ShellError::WriteOutput)? {
                Flow::Continue => {}
                Flow::Exit => return Ok(()),
            }
        }
    }

    /// Resolves `args[0]` against the registry and invokes the handler
    /// with the full argument vector. A blank line is a no-op.
    fn dispatch(&mut self, args: &[String]) -> io::Result<Flow> {
        let Some(name) = args.first() else {
            return Ok(Flow::Continue);
        };
        match registry::lookup(name) {
            Some(cmd) => (cmd.run)(args, &mut self.out),
            None => {
                writeln!(self.out, "{name}: command not found")?;
                Ok(Flow::Continue)
            }
        }
    }
}
