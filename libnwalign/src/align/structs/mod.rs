mod alignment;
pub use alignment::Alignment;

mod score_matrix;
pub use score_matrix::ScoreMatrix;

mod trace;
pub use trace::{trace_string, SimpleTrace, SimpleTraceStep};
