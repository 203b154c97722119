#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleTraceStep {
    /// A symbol from each sequence, a match or a mismatch
    Diagonal,
    /// A symbol from seq 1 against a gap
    Up,
    /// A symbol from seq 2 against a gap
    Left,
}

impl SimpleTraceStep {
    pub fn as_char(&self) -> char {
        match self {
            SimpleTraceStep::Diagonal => 'D',
            SimpleTraceStep::Up => 'U',
            SimpleTraceStep::Left => 'L',
        }
    }
}

/// The steps of an alignment, in left-to-right order.
pub type SimpleTrace = Vec<SimpleTraceStep>;

pub fn trace_string(trace: &SimpleTrace) -> String {
    trace.iter().map(SimpleTraceStep::as_char).collect()
}
