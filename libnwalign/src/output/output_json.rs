use crate::align::structs::Alignment;

use anyhow::{Context, Result};
use std::io::Write;

pub fn write_json_output(alignments: &[Alignment], out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, alignments)
        .context("failed to serialize alignments to JSON")?;
    writeln!(out)?;
    Ok(())
}
