use colored::Colorize;
use libnwalign::align::structs::Alignment;
use libnwalign::alphabet::GAP_CHAR;

/// The two aligned sequences with each column colored by its kind:
/// green for matches, red for mismatches, and yellow for gaps.
pub fn colorize_alignment(alignment: &Alignment) -> (String, String) {
    let mut top = String::new();
    let mut bottom = String::new();

    for (a, b) in alignment
        .aligned_seq_1
        .chars()
        .zip(alignment.aligned_seq_2.chars())
    {
        let (a, b) = (a.to_string(), b.to_string());
        let (a, b) = if a == b {
            (a.green(), b.green())
        } else if a.starts_with(GAP_CHAR) || b.starts_with(GAP_CHAR) {
            (a.yellow(), b.yellow())
        } else {
            (a.red(), b.red())
        };
        top.push_str(&a.to_string());
        bottom.push_str(&b.to_string());
    }

    (top, bottom)
}
