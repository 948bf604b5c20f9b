use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::models::ScrapeOutcome;

/// Pretty JSON with a four-space indent, newline terminated.
pub fn write_outcome<W: Write>(outcome: &ScrapeOutcome, mut out: W) -> Result<()> {
    let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    outcome.serialize(&mut ser)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
