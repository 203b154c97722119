use serde::Serialize;

use crate::align::ScoringScheme;
use crate::alphabet::{GAP_CHAR, UTF8_PIPE, UTF8_SPACE};

use super::trace::{SimpleTrace, SimpleTraceStep};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Alignment {
    /// The name of the first sequence
    pub seq_1_name: String,
    /// The name of the second sequence
    pub seq_2_name: String,
    /// The first sequence, with gap characters inserted
    pub aligned_seq_1: String,
    /// The second sequence, with gap characters inserted
    pub aligned_seq_2: String,
    /// The display in between the two aligned sequences
    pub middle: String,
    /// The number of columns in the alignment
    pub length: usize,
    /// The global alignment score
    pub score: isize,
    /// The number of columns with two identical symbols
    pub matches: usize,
    /// The number of columns with two different symbols
    pub mismatches: usize,
    /// The number of columns with a symbol against a gap
    pub gaps: usize,
}

impl Alignment {
    /// Lay out the two sequences along a trace.
    ///
    /// The trace must consume every symbol of both sequences.
    pub fn from_trace<T>(trace: &SimpleTrace, seq_1: &[T], seq_2: &[T], score: isize) -> Self
    where
        T: Copy + PartialEq + Into<char>,
    {
        let mut alignment = Alignment {
            length: trace.len(),
            score,
            aligned_seq_1: String::with_capacity(trace.len()),
            aligned_seq_2: String::with_capacity(trace.len()),
            middle: String::with_capacity(trace.len()),
            ..Default::default()
        };

        let mut seq_1_iter = seq_1.iter();
        let mut seq_2_iter = seq_2.iter();

        for step in trace {
            let (top, bottom) = match step {
                SimpleTraceStep::Diagonal => (seq_1_iter.next(), seq_2_iter.next()),
                SimpleTraceStep::Up => (seq_1_iter.next(), None),
                SimpleTraceStep::Left => (None, seq_2_iter.next()),
            };

            let middle_byte = match (top, bottom) {
                (Some(a), Some(b)) if a == b => {
                    alignment.matches += 1;
                    UTF8_PIPE
                }
                (Some(_), Some(_)) => {
                    alignment.mismatches += 1;
                    UTF8_SPACE
                }
                _ => {
                    alignment.gaps += 1;
                    UTF8_SPACE
                }
            };

            alignment
                .aligned_seq_1
                .push(top.map_or(GAP_CHAR, |&c| c.into()));
            alignment
                .aligned_seq_2
                .push(bottom.map_or(GAP_CHAR, |&c| c.into()));
            alignment.middle.push(char::from(middle_byte));
        }

        debug_assert!(seq_1_iter.next().is_none());
        debug_assert!(seq_2_iter.next().is_none());

        alignment
    }

    pub fn with_names(mut self, seq_1_name: &str, seq_2_name: &str) -> Self {
        self.seq_1_name = seq_1_name.to_string();
        self.seq_2_name = seq_2_name.to_string();
        self
    }

    /// The fraction of alignment columns that are identical symbols.
    pub fn identity(&self) -> f64 {
        if self.length == 0 {
            0.0
        } else {
            self.matches as f64 / self.length as f64
        }
    }

    /// The sum of the column scores under a scoring scheme.
    ///
    /// Under the scheme that produced the alignment, this is equal to `score`.
    pub fn column_score(&self, scoring: &ScoringScheme) -> isize {
        self.matches as isize * scoring.match_award
            + self.mismatches as isize * scoring.mismatch_penalty
            + self.gaps as isize * scoring.gap_penalty
    }

    /// The three line display: seq 1, the middle line, and seq 2.
    pub fn ali_string(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.aligned_seq_1, self.middle, self.aligned_seq_2
        )
    }
}
