pub mod structs;

mod scoring;
pub use scoring::{
    ScoreOutOfRangeError, ScoringScheme, GAP_PENALTY, MATCH_AWARD, MAX_SCORE_MAGNITUDE,
    MISMATCH_PENALTY,
};

mod needleman_wunsch;
pub use needleman_wunsch::{
    align, align_strings, align_with_scoring, fill_score_matrix, needleman_wunsch, traceback,
};
