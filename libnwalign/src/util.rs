use crate::alphabet::GAP_CHAR;

#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}

/// Remove the gap characters from an aligned sequence string.
pub fn ungapped(aligned: &str) -> String {
    aligned.chars().filter(|&c| c != GAP_CHAR).collect()
}
