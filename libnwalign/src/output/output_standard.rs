use crate::align::structs::Alignment;

use anyhow::Result;
use std::io::Write;

const SEQ_1_LABEL: &str = "Sequence 1: ";
const SEQ_2_LABEL: &str = "Sequence 2: ";

/// The line naming the two sequences, if either has a name.
pub fn header_string(alignment: &Alignment) -> Option<String> {
    if alignment.seq_1_name.is_empty() && alignment.seq_2_name.is_empty() {
        None
    } else {
        Some(format!(
            "== {} vs {}",
            alignment.seq_1_name, alignment.seq_2_name
        ))
    }
}

pub fn standard_string(alignment: &Alignment) -> String {
    format!(
        "{SEQ_1_LABEL}{}\n{:width$}{}\n{SEQ_2_LABEL}{}\nAlignment Score: {}",
        alignment.aligned_seq_1,
        "",
        alignment.middle,
        alignment.aligned_seq_2,
        alignment.score,
        width = SEQ_1_LABEL.len()
    )
}

pub fn write_standard_output(alignments: &[Alignment], out: &mut impl Write) -> Result<()> {
    for (idx, alignment) in alignments.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }

        if let Some(header) = header_string(alignment) {
            writeln!(out, "{header}")?;
        }

        writeln!(out, "{}", standard_string(alignment))?
    }
    Ok(())
}
