use std::io::Write;

use libnwalign::align::{align_strings, fill_score_matrix};

use crate::args::AlignArgs;
use crate::util::check_sequences_present;

use super::write_alignments;

pub fn align(args: &AlignArgs) -> anyhow::Result<()> {
    let (seq_1, seq_2) = check_sequences_present(args.seq_1.as_deref(), args.seq_2.as_deref())?;

    let seq_1 = seq_1.to_uppercase();
    let seq_2 = seq_2.to_uppercase();

    let scoring = args.scoring_args.scoring_scheme()?;

    log::info!(
        "aligning {} x {}",
        seq_1.chars().count(),
        seq_2.chars().count()
    );

    if args.show_matrix {
        let residues_1: Vec<char> = seq_1.chars().collect();
        let residues_2: Vec<char> = seq_2.chars().collect();
        let matrix = fill_score_matrix(&residues_1, &residues_2, &scoring);
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "Score matrix:\n{matrix}")?;
    }

    let alignment = align_strings(&seq_1, &seq_2, &scoring);
    write_alignments(&[alignment], &args.output_args)
}
