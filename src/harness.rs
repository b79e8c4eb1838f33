//! Interactive front end: read SQL, print tokens, acceptance and the AST.
use crate::*;
use itertools::Itertools as _;
use std::io::{BufRead, Write};

const BANNER: &str = "SQL Parser Test Program";

/// Read statements line by line until end of input or a blank line.
///
/// A line that fails to lex reports the error and does not stop the loop.
pub fn run(config: &Config, input: impl BufRead, mut output: impl Write) -> Result {
    writeln!(output, "{BANNER}")?;
    write!(output, "{}", config.prompt)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        writeln!(output)?;
        run_once(config, &line, &mut output)?;
        write!(output, "{}", config.prompt)?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}

/// Lex, parse and report a single statement.
pub fn run_once(config: &Config, sql: &str, mut output: impl Write) -> Result {
    info!("Processing {sql:?}");
    let tokens = match lex(sql) {
        Ok(tokens) => tokens,
        Err(err) => {
            warn!("{err}");
            writeln!(output, "Error: {err}")?;
            return Ok(());
        }
    };

    if config.show_tokens && !tokens.is_empty() {
        writeln!(output, "{}", tokens.iter().join("\n"))?;
    }
    let (ast, accepted) = parse(tokens);
    writeln!(output, "Does parse? {accepted}")?;
    if config.show_ast {
        writeln!(output, "AST: {ast}")?;
    }
    Ok(())
}
