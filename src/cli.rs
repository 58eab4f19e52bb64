use std::io::Write;

use crate::error::RunError;
use crate::resolver::PathResolver;

pub fn run<W: Write>(
    resolver: &PathResolver,
    argv0: &str,
    tokens: &[String],
    out: &mut W,
) -> Result<(), RunError> {
    // Argument zero is echoed verbatim, never resolved.
    writeln!(out, "{}", argv0)?;

    for token in tokens {
        let resolved = resolver.resolve(token)?;
        writeln!(out, "{}", resolved.display())?;
    }

    out.flush()?;
    Ok(())
}
