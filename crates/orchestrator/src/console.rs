//! Line-oriented console: blocking prompts in, rendered text out.
//!
//! Generic over reader and writer so the flows run the same against a
//! terminal and against in-memory buffers.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use catalog::Movie;

use crate::render;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` without a newline and read one trimmed line.
    /// End of input reads as an empty answer.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Writing prompt")?;
        self.output.flush().context("Flushing prompt")?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Reading from standard input")?;
        Ok(line.trim().to_string())
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line).context("Writing output")
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output).context("Writing output")
    }

    pub fn show_movie(&mut self, movie: &Movie) -> Result<()> {
        render::write_movie(&mut self.output, movie).context("Writing movie")
    }

    pub fn show_movies<'a>(&mut self, movies: impl IntoIterator<Item = &'a Movie>) -> Result<()> {
        for movie in movies {
            self.show_movie(movie)?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
