mod align;
pub use align::align;

mod fasta;
pub use fasta::fasta;

use std::io::Write;

use libnwalign::align::structs::Alignment;
use libnwalign::output::output_standard::{header_string, standard_string};
use libnwalign::output::{write_json_output, write_standard_output, write_tabular_output};

use crate::args::{OutputArgs, OutputFormat};
use crate::util::output_writer;
use crate::viz::colorize_alignment;

/// Write alignments to the destination and in the format chosen by the output arguments.
pub fn write_alignments(alignments: &[Alignment], output_args: &OutputArgs) -> anyhow::Result<()> {
    let mut out = output_writer(output_args.output_path.as_ref(), output_args.allow_overwrite)?;

    match output_args.format {
        OutputFormat::Standard => {
            if output_args.output_path.is_none() && !output_args.no_color {
                write_colored_output(alignments, &mut out)?
            } else {
                write_standard_output(alignments, &mut out)?
            }
        }
        OutputFormat::Tabular => write_tabular_output(alignments, &mut out)?,
        OutputFormat::Json => write_json_output(alignments, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn write_colored_output(alignments: &[Alignment], out: &mut impl Write) -> anyhow::Result<()> {
    for (idx, alignment) in alignments.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }

        if let Some(header) = header_string(alignment) {
            writeln!(out, "{header}")?;
        }

        let (top, bottom) = colorize_alignment(alignment);
        let colored = Alignment {
            aligned_seq_1: top,
            aligned_seq_2: bottom,
            ..alignment.clone()
        };
        writeln!(out, "{}", standard_string(&colored))?;
    }
    Ok(())
}
