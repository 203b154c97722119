use anyhow::Context;
use libnwalign::align::needleman_wunsch;
use libnwalign::align::structs::Alignment;
use libnwalign::structs::Sequence;
use rayon::prelude::*;
use thiserror::Error;

use crate::args::FastaArgs;

use super::write_alignments;

#[derive(Error, Debug)]
#[error("no sequences found in: {path}")]
pub struct NoSequencesError {
    path: String,
}

/// Read a fasta file, normalize the case of every record,
/// and drop the records that have no residues.
fn read_sequences(path: &std::path::Path) -> anyhow::Result<Vec<Sequence>> {
    let seqs: Vec<Sequence> = Sequence::from_fasta(path)
        .context(format!(
            "failed to read sequences from: {}",
            path.to_string_lossy()
        ))?
        .iter()
        .filter_map(|seq| {
            if seq.is_empty() {
                log::warn!("skipping empty sequence: {}", seq.name);
                None
            } else {
                Some(seq.to_uppercase())
            }
        })
        .collect();

    if seqs.is_empty() {
        return Err(NoSequencesError {
            path: path.to_string_lossy().to_string(),
        }
        .into());
    }

    Ok(seqs)
}

pub fn fasta(args: &FastaArgs) -> anyhow::Result<()> {
    let scoring = args.scoring_args.scoring_scheme()?;
    let queries = read_sequences(&args.query_path)?;
    let targets = read_sequences(&args.target_path)?;

    log::info!(
        "aligning {} queries against {} targets",
        queries.len(),
        targets.len()
    );

    let pairs: Vec<(&Sequence, &Sequence)> = queries
        .iter()
        .flat_map(|query| targets.iter().map(move |target| (query, target)))
        .collect();

    let alignments: Vec<Alignment> = pairs
        .par_iter()
        .map(|(query, target)| needleman_wunsch(query, target, &scoring))
        .collect();

    log::info!("finished {} alignments", alignments.len());

    write_alignments(&alignments, &args.output_args)
}
