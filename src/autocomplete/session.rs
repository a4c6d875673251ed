//! Line-oriented query loop and answer output.
//!
//! The command-line front end drives these over stdin/stdout; tests drive
//! them over in-memory buffers.

use std::io::{BufRead, Write};

use super::{Autocompleter, Completion};
use crate::error::AppResult;

/// Prompt written before each line is read.
pub const PROMPT: &str = "> ";

/// Write one answer, either as rendered lines or as a pretty-printed JSON object.
///
/// A rendered answer that is empty (the empty prefix) writes nothing.
pub fn write_answer<W: Write>(output: &mut W, answer: &Completion, json: bool) -> AppResult<()> {
    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(answer)?)?;
    } else {
        let rendered = answer.render();
        if !rendered.is_empty() {
            writeln!(output, "{rendered}")?;
        }
    }
    Ok(())
}

/// Answer prefixes read line by line from `input` until end of input.
///
/// Each line is trimmed before lookup. A prompt precedes every read and a
/// newline closes the session.
pub fn run_session<R, W>(
    autocompleter: &Autocompleter,
    input: R,
    mut output: W,
    full_words: bool,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{PROMPT}")?;
    output.flush()?;
    for line in input.lines() {
        let line = line?;
        let answer = autocompleter.query(line.trim(), full_words);
        write_answer(&mut output, &answer, false)?;
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }
    writeln!(output)?;
    output.flush()?;

    Ok(())
}
