use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use libnwalign::align::ScoringScheme;

#[derive(Subcommand)]
pub enum SubCommands {
    #[command(about = "Globally align two sequences given on the command line")]
    Align(AlignArgs),
    #[command(about = "Globally align every query sequence against every target sequence")]
    Fasta(FastaArgs),
}

#[derive(Parser)]
#[command(name = "nwalign")]
#[command(about = "Needleman-Wunsch global alignment of DNA sequences")]
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,

    /// Specify multiple times to increase verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// The number of threads that nwalign will use
    #[arg(
        short = 't',
        long = "threads",
        default_value_t = 8usize,
        value_name = "n"
    )]
    pub num_threads: usize,
}

#[derive(Debug, Args)]
pub struct AlignArgs {
    /// The first sequence
    #[arg(value_name = "SEQ_1")]
    pub seq_1: Option<String>,

    /// The second sequence
    #[arg(value_name = "SEQ_2")]
    pub seq_2: Option<String>,

    /// Print the filled score matrix before the alignment
    #[arg(long, action)]
    pub show_matrix: bool,

    /// Arguments that control the scoring scheme
    #[command(flatten)]
    pub scoring_args: ScoringArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,
}

#[derive(Debug, Args)]
pub struct FastaArgs {
    /// Query file
    #[arg(value_name = "QUERY.fasta")]
    pub query_path: PathBuf,

    /// Target file
    #[arg(value_name = "TARGET.fasta")]
    pub target_path: PathBuf,

    /// Arguments that control the scoring scheme
    #[command(flatten)]
    pub scoring_args: ScoringArgs,

    /// Arguments that control output options
    #[command(flatten)]
    pub output_args: OutputArgs,

    /// Arguments that are common across all nwalign subcommands
    #[command(flatten)]
    pub common_args: CommonArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScoringArgs {
    /// A JSON file holding any of: match_award, mismatch_penalty, gap_penalty
    #[arg(long = "scoring", value_name = "path")]
    pub scoring_path: Option<PathBuf>,

    /// The score added for a column of two identical symbols [default: 1]
    #[arg(long = "match", value_name = "N", allow_negative_numbers = true)]
    pub match_award: Option<isize>,

    /// The score added for a column of two different symbols [default: -1]
    #[arg(long = "mismatch", value_name = "N", allow_negative_numbers = true)]
    pub mismatch_penalty: Option<isize>,

    /// The score added for a column of a symbol against a gap [default: -2]
    #[arg(long = "gap", value_name = "N", allow_negative_numbers = true)]
    pub gap_penalty: Option<isize>,
}

impl ScoringArgs {
    /// Build the scoring scheme: flags override the
    /// scoring file, which overrides the defaults.
    pub fn scoring_scheme(&self) -> anyhow::Result<ScoringScheme> {
        let mut scoring = match self.scoring_path {
            Some(ref path) => {
                ScoringScheme::from_json_path(path).context("failed to load scoring scheme")?
            }
            None => ScoringScheme::default(),
        };

        if let Some(match_award) = self.match_award {
            scoring.match_award = match_award;
        }
        if let Some(mismatch_penalty) = self.mismatch_penalty {
            scoring.mismatch_penalty = mismatch_penalty;
        }
        if let Some(gap_penalty) = self.gap_penalty {
            scoring.gap_penalty = gap_penalty;
        }

        scoring
            .validate()
            .context("scoring scheme out of range")?;

        log::debug!("scoring scheme: {scoring:?}");
        Ok(scoring)
    }
}

#[derive(
    ValueEnum,
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// The aligned sequences and the score as plain text
    #[default]
    Standard,
    /// One row of summary fields per alignment
    Tabular,
    /// A JSON array of alignments
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// The output format
    #[arg(short = 'f', long = "format", default_value_t = OutputFormat::Standard)]
    pub format: OutputFormat,

    /// Where to place output, instead of stdout
    #[arg(short = 'o', long = "output", value_name = "path")]
    pub output_path: Option<PathBuf>,

    /// Allow nwalign to overwrite files
    #[arg(long = "allow-overwrite", default_value_t = false)]
    pub allow_overwrite: bool,

    /// Don't color the columns of alignments written to a terminal
    #[arg(long = "no-color", default_value_t = false)]
    pub no_color: bool,
}
