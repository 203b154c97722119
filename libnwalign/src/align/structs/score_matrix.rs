use std::fmt::{Display, Formatter};

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ScoreMatrix {
    /// The length of the first sequence (the rows)
    pub seq_1_length: usize,
    /// The length of the second sequence (the columns)
    pub seq_2_length: usize,
    /// The score cells as a flat vector.
    ///
    /// It's stored in the following pattern:
    ///
    /// ```text
    /// [
    ///     s_(0, 0), s_(0, 1), ..., s_(0, N),
    ///     s_(1, 0), s_(1, 1), ..., s_(1, N),
    ///     ...
    ///     s_(M, 0), s_(M, 1), ..., s_(M, N)
    /// ]
    /// ```
    ///
    /// where:
    ///
    /// ```text
    /// M:        <seq_1_length>
    /// N:        <seq_2_length>
    /// s_(i, j): the best score of aligning the first
    ///           i symbols of seq 1 to the first j of seq 2
    /// ```
    pub data: Vec<isize>,
}

impl ScoreMatrix {
    pub fn new(seq_1_length: usize, seq_2_length: usize) -> Self {
        ScoreMatrix {
            seq_1_length,
            seq_2_length,
            data: vec![0; (seq_1_length + 1) * (seq_2_length + 1)],
        }
    }

    #[inline]
    pub fn get(&self, seq_1_idx: usize, seq_2_idx: usize) -> isize {
        debug_assert!(seq_1_idx <= self.seq_1_length);
        debug_assert!(seq_2_idx <= self.seq_2_length);
        self.data[seq_1_idx * (self.seq_2_length + 1) + seq_2_idx]
    }

    #[inline]
    pub fn set(&mut self, seq_1_idx: usize, seq_2_idx: usize, value: isize) {
        debug_assert!(seq_1_idx <= self.seq_1_length);
        debug_assert!(seq_2_idx <= self.seq_2_length);
        self.data[seq_1_idx * (self.seq_2_length + 1) + seq_2_idx] = value;
    }

    /// The score of the full global alignment: cell (M, N).
    pub fn score(&self) -> isize {
        self.get(self.seq_1_length, self.seq_2_length)
    }
}

impl Display for ScoreMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = self
            .data
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);

        for row in self.data.chunks(self.seq_2_length + 1) {
            let line = row
                .iter()
                .map(|v| format!("{v:>width$}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
