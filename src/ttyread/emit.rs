use std::io::{self, Write};

/// Writes `line` and a newline to `out`, then flushes.
///
/// This is the only thing ever written to standard output.
pub fn emit_line<W: Write + ?Sized>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()
}
