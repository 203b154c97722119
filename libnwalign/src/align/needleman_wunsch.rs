use crate::structs::Sequence;

use super::scoring::ScoringScheme;
use super::structs::{Alignment, ScoreMatrix, SimpleTrace, SimpleTraceStep};

/// Fill the global alignment score matrix for two sequences.
///
/// Row 0 and column 0 hold the cost of aligning a prefix against
/// nothing but gaps. Every other cell is the best of the three moves
/// that can reach it, so rows are filled top to bottom.
pub fn fill_score_matrix<T: PartialEq>(
    seq_1: &[T],
    seq_2: &[T],
    scoring: &ScoringScheme,
) -> ScoreMatrix {
    let mut matrix = ScoreMatrix::new(seq_1.len(), seq_2.len());

    for seq_2_idx in 0..=seq_2.len() {
        matrix.set(0, seq_2_idx, (seq_2_idx as isize) * scoring.gap_penalty);
    }

    for seq_1_idx in 1..=seq_1.len() {
        let seq_1_residue = &seq_1[seq_1_idx - 1];
        matrix.set(seq_1_idx, 0, (seq_1_idx as isize) * scoring.gap_penalty);

        for seq_2_idx in 1..=seq_2.len() {
            let seq_2_residue = &seq_2[seq_2_idx - 1];

            let diag_score = matrix.get(seq_1_idx - 1, seq_2_idx - 1)
                + scoring.substitution(seq_1_residue, seq_2_residue);
            let up_score = matrix.get(seq_1_idx - 1, seq_2_idx) + scoring.gap_penalty;
            let left_score = matrix.get(seq_1_idx, seq_2_idx - 1) + scoring.gap_penalty;

            matrix.set(
                seq_1_idx,
                seq_2_idx,
                diag_score.max(up_score.max(left_score)),
            );
        }
    }

    matrix
}

/// Walk back from cell (M, N) to (0, 0), recovering one optimal alignment.
///
/// When more than one move explains a cell, the diagonal is taken
/// over the up move, and the up move over the left move.
pub fn traceback<T: PartialEq>(
    matrix: &ScoreMatrix,
    seq_1: &[T],
    seq_2: &[T],
    scoring: &ScoringScheme,
) -> SimpleTrace {
    debug_assert_eq!(matrix.seq_1_length, seq_1.len());
    debug_assert_eq!(matrix.seq_2_length, seq_2.len());

    let mut trace: SimpleTrace = Vec::with_capacity(seq_1.len() + seq_2.len());
    let mut seq_1_idx = seq_1.len();
    let mut seq_2_idx = seq_2.len();

    while seq_1_idx > 0 && seq_2_idx > 0 {
        let current_score = matrix.get(seq_1_idx, seq_2_idx);

        let diag_target = current_score
            - scoring.substitution(&seq_1[seq_1_idx - 1], &seq_2[seq_2_idx - 1]);
        let up_target = current_score - scoring.gap_penalty;

        if diag_target == matrix.get(seq_1_idx - 1, seq_2_idx - 1) {
            seq_1_idx -= 1;
            seq_2_idx -= 1;
            trace.push(SimpleTraceStep::Diagonal);
        } else if up_target == matrix.get(seq_1_idx - 1, seq_2_idx) {
            seq_1_idx -= 1;
            trace.push(SimpleTraceStep::Up);
        } else {
            debug_assert_eq!(
                current_score - scoring.gap_penalty,
                matrix.get(seq_1_idx, seq_2_idx - 1)
            );
            seq_2_idx -= 1;
            trace.push(SimpleTraceStep::Left);
        }
    }

    while seq_1_idx > 0 {
        seq_1_idx -= 1;
        trace.push(SimpleTraceStep::Up);
    }

    while seq_2_idx > 0 {
        seq_2_idx -= 1;
        trace.push(SimpleTraceStep::Left);
    }

    trace.reverse();

    trace
}

fn align_slices<T>(seq_1: &[T], seq_2: &[T], scoring: &ScoringScheme) -> Alignment
where
    T: Copy + PartialEq + Into<char>,
{
    let matrix = fill_score_matrix(seq_1, seq_2, scoring);
    log::debug!(
        "filled {}x{} score matrix, score: {}",
        matrix.seq_1_length + 1,
        matrix.seq_2_length + 1,
        matrix.score()
    );
    log::trace!("score matrix:\n{matrix}");

    let trace = traceback(&matrix, seq_1, seq_2, scoring);
    Alignment::from_trace(&trace, seq_1, seq_2, matrix.score())
}

/// Globally align two named sequences.
pub fn needleman_wunsch(seq_1: &Sequence, seq_2: &Sequence, scoring: &ScoringScheme) -> Alignment {
    align_slices(seq_1.residues(), seq_2.residues(), scoring).with_names(&seq_1.name, &seq_2.name)
}

/// Globally align two strings under the default scoring scheme.
///
/// Returns the two aligned strings, with '-' marking gaps, and the alignment score.
pub fn align(seq_1: &str, seq_2: &str) -> (String, String, isize) {
    align_with_scoring(seq_1, seq_2, &ScoringScheme::default())
}

pub fn align_with_scoring(
    seq_1: &str,
    seq_2: &str,
    scoring: &ScoringScheme,
) -> (String, String, isize) {
    let alignment = align_strings(seq_1, seq_2, scoring);
    (alignment.aligned_seq_1, alignment.aligned_seq_2, alignment.score)
}

/// Globally align two strings, one `char` per symbol.
pub fn align_strings(seq_1: &str, seq_2: &str, scoring: &ScoringScheme) -> Alignment {
    let seq_1: Vec<char> = seq_1.chars().collect();
    let seq_2: Vec<char> = seq_2.chars().collect();
    align_slices(&seq_1, &seq_2, scoring)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::{assert, check};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    use super::*;
    use crate::align::structs::trace_string;
    use crate::alphabet::DNA_ALPHABET;
    use crate::util::ungapped;

    /// An independent, top-down evaluation of the global alignment
    /// score, used to check the values of the filled matrix.
    fn reference_score(
        seq_1: &[u8],
        seq_2: &[u8],
        scoring: &ScoringScheme,
        memo: &mut HashMap<(usize, usize), isize>,
    ) -> isize {
        let key = (seq_1.len(), seq_2.len());
        if let Some(&score) = memo.get(&key) {
            return score;
        }

        let score = match (seq_1.split_last(), seq_2.split_last()) {
            (None, _) => seq_2.len() as isize * scoring.gap_penalty,
            (_, None) => seq_1.len() as isize * scoring.gap_penalty,
            (Some((a, rest_1)), Some((b, rest_2))) => {
                let sub = if a == b {
                    scoring.match_award
                } else {
                    scoring.mismatch_penalty
                };
                let diag = reference_score(rest_1, rest_2, scoring, memo) + sub;
                let up = reference_score(rest_1, seq_2, scoring, memo) + scoring.gap_penalty;
                let left = reference_score(seq_1, rest_2, scoring, memo) + scoring.gap_penalty;
                *[diag, up, left].iter().max().unwrap()
            }
        };

        memo.insert(key, score);
        score
    }

    /// Sum the column scores of two aligned strings.
    fn column_sum(aligned_1: &str, aligned_2: &str, scoring: &ScoringScheme) -> isize {
        aligned_1
            .chars()
            .zip(aligned_2.chars())
            .map(|(a, b)| match (a, b) {
                ('-', _) | (_, '-') => scoring.gap_penalty,
                (a, b) if a == b => scoring.match_award,
                _ => scoring.mismatch_penalty,
            })
            .sum()
    }

    fn random_dna(rng: &mut Pcg64, max_length: usize) -> String {
        let length = rng.gen_range(0..=max_length);
        (0..length)
            .map(|_| DNA_ALPHABET[rng.gen_range(0..DNA_ALPHABET.len())])
            .collect()
    }

    #[test]
    fn test_agctg_agct() {
        let (aligned_1, aligned_2, score) = align("AGCTG", "AGCT");
        check!(aligned_1 == "AGCTG");
        check!(aligned_2 == "AGCT-");
        // four matches and one trailing gap
        check!(score == 2);
    }

    #[test]
    fn test_fill_score_matrix() {
        let scoring = ScoringScheme::default();
        let matrix = fill_score_matrix(b"AGCTG", b"AGCT", &scoring);

        let expected: [[isize; 5]; 6] = [
            [0, -2, -4, -6, -8],
            [-2, 1, -1, -3, -5],
            [-4, -1, 2, 0, -2],
            [-6, -3, 0, 3, 1],
            [-8, -5, -2, 1, 4],
            [-10, -7, -4, -1, 2],
        ];

        (0..=5).for_each(|row| {
            (0..=4).for_each(|col| {
                assert_eq!(matrix.get(row, col), expected[row][col]);
            });
        });
        assert_eq!(matrix.score(), 2);
    }

    #[test]
    fn test_boundary_conditions() {
        let scoring = ScoringScheme::new(3, -5, -7);
        let matrix = fill_score_matrix(b"ACGTA", b"TTG", &scoring);

        (0..=5).for_each(|row| assert_eq!(matrix.get(row, 0), row as isize * -7));
        (0..=3).for_each(|col| assert_eq!(matrix.get(0, col), col as isize * -7));
    }

    #[test]
    fn test_empty_seq_1() {
        let (aligned_1, aligned_2, score) = align("", "AGCT");
        assert!(aligned_1 == "----");
        assert!(aligned_2 == "AGCT");
        assert!(score == -8);
    }

    #[test]
    fn test_empty_seq_2() {
        let (aligned_1, aligned_2, score) = align("AGC", "");
        assert!(aligned_1 == "AGC");
        assert!(aligned_2 == "---");
        assert!(score == -6);
    }

    #[test]
    fn test_both_empty() {
        let (aligned_1, aligned_2, score) = align("", "");
        assert!(aligned_1.is_empty());
        assert!(aligned_2.is_empty());
        assert!(score == 0);
    }

    #[test]
    fn test_self_alignment() {
        for seq in ["A", "AGCT", "GGGGGG", "ACGTTGCAAC"] {
            let (aligned_1, aligned_2, score) = align(seq, seq);
            check!(aligned_1 == seq);
            check!(aligned_2 == seq);
            check!(score == seq.len() as isize);
        }
    }

    #[test]
    fn test_diagonal_preferred_over_up() {
        // at cell (2, 1) both the diagonal (A/A) and the
        // up move (A/-) explain a score of -1
        let scoring = ScoringScheme::default();
        let matrix = fill_score_matrix(b"AA", b"A", &scoring);
        assert!(matrix.get(2, 1) == matrix.get(1, 0) + scoring.match_award);
        assert!(matrix.get(2, 1) == matrix.get(1, 1) + scoring.gap_penalty);

        let trace = traceback(&matrix, b"AA", b"A", &scoring);
        assert!(trace_string(&trace) == "UD");

        let (aligned_1, aligned_2, score) = align("AA", "A");
        assert!(aligned_1 == "AA");
        assert!(aligned_2 == "-A");
        assert!(score == -1);
    }

    #[test]
    fn test_up_preferred_over_left() {
        // with free gaps every move out of cell (1, 1) ties,
        // and a mismatch penalty pushes the trace off the diagonal
        let scoring = ScoringScheme::new(1, -5, 0);
        let matrix = fill_score_matrix(b"A", b"C", &scoring);
        assert!(matrix.score() == 0);

        let trace = traceback(&matrix, b"A", b"C", &scoring);
        assert!(trace_string(&trace) == "LU");

        let (aligned_1, aligned_2, _) = align_with_scoring("A", "C", &scoring);
        assert!(aligned_1 == "-A");
        assert!(aligned_2 == "C-");
    }

    #[test]
    fn test_mismatch_preferred_to_gaps() {
        let (aligned_1, aligned_2, score) = align("AGCT", "AGGT");
        assert!(aligned_1 == "AGCT");
        assert!(aligned_2 == "AGGT");
        assert!(score == 2);
    }

    #[test]
    fn test_internal_gap() {
        let (aligned_1, aligned_2, score) = align("ACGGTA", "ACTA");
        // four matches against two gaps in seq 2
        assert!(ungapped(&aligned_2) == "ACTA");
        assert!(aligned_1 == "ACGGTA");
        assert!(aligned_2.len() == 6);
        assert!(score == 0);
    }

    #[test]
    fn test_case_sensitive() {
        let (_, _, score) = align("agct", "AGCT");
        assert!(score == -4);
    }

    #[test]
    fn test_align_strings_any_chars() {
        let alignment = align_strings("ÅGÇT", "ÅGT", &ScoringScheme::default());
        assert!(alignment.aligned_seq_1 == "ÅGÇT");
        assert!(alignment.aligned_seq_2 == "ÅG-T");
        assert!(alignment.middle == "|| |");
        assert!(alignment.score == 1);
    }

    #[test]
    fn test_needleman_wunsch_sequences() -> anyhow::Result<()> {
        let seq_1 = Sequence::from_utf8(b"AGCTG")?.with_name("first");
        let seq_2 = Sequence::from_utf8(b"AGCT")?.with_name("second");
        let alignment = needleman_wunsch(&seq_1, &seq_2, &ScoringScheme::default());

        assert!(alignment.seq_1_name == "first");
        assert!(alignment.seq_2_name == "second");
        assert!(alignment.aligned_seq_1 == "AGCTG");
        assert!(alignment.aligned_seq_2 == "AGCT-");
        assert!(alignment.middle == "|||| ");
        assert!(alignment.matches == 4);
        assert!(alignment.gaps == 1);
        assert!(alignment.score == 2);
        Ok(())
    }

    #[test]
    fn test_random_pairs() {
        let mut rng = Pcg64::seed_from_u64(0);
        let schemes = [
            ScoringScheme::default(),
            ScoringScheme::new(2, -3, -1),
            ScoringScheme::new(5, -4, -10),
        ];

        for _ in 0..200 {
            let seq_1 = random_dna(&mut rng, 24);
            let seq_2 = random_dna(&mut rng, 24);

            for scoring in schemes.iter() {
                let (aligned_1, aligned_2, score) = align_with_scoring(&seq_1, &seq_2, scoring);

                // the columns line up and nothing is lost
                check!(aligned_1.len() == aligned_2.len());
                check!(ungapped(&aligned_1) == seq_1);
                check!(ungapped(&aligned_2) == seq_2);

                // no column pairs a gap against a gap
                check!(aligned_1
                    .chars()
                    .zip(aligned_2.chars())
                    .all(|(a, b)| a != '-' || b != '-'));

                // the score is the optimum and the alignment achieves it
                let mut memo = HashMap::new();
                let expected =
                    reference_score(seq_1.as_bytes(), seq_2.as_bytes(), scoring, &mut memo);
                check!(score == expected);
                check!(column_sum(&aligned_1, &aligned_2, scoring) == score);

                // swapping the inputs doesn't change the score
                let (_, _, swapped_score) = align_with_scoring(&seq_2, &seq_1, scoring);
                check!(swapped_score == score);
            }
        }
    }

    #[test]
    fn test_matrix_matches_reference() {
        let mut rng = Pcg64::seed_from_u64(42);
        let scoring = ScoringScheme::default();

        for _ in 0..50 {
            let seq_1 = random_dna(&mut rng, 12);
            let seq_2 = random_dna(&mut rng, 12);
            let matrix = fill_score_matrix(seq_1.as_bytes(), seq_2.as_bytes(), &scoring);

            let mut memo = HashMap::new();
            (0..=seq_1.len()).for_each(|row| {
                (0..=seq_2.len()).for_each(|col| {
                    let expected = reference_score(
                        &seq_1.as_bytes()[..row],
                        &seq_2.as_bytes()[..col],
                        &scoring,
                        &mut memo,
                    );
                    assert_eq!(matrix.get(row, col), expected);
                });
            });
        }
    }
}
