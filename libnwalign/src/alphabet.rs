pub const UTF8_SPACE: u8 = 32;
pub const UTF8_DASH: u8 = 45;
pub const UTF8_PIPE: u8 = 124;

/// The symbol placed in an aligned sequence where the other sequence has a residue.
pub const GAP_CHAR: char = UTF8_DASH as char;

/// The byte used to pad position 0 of a sequence, so that
/// position 1 of the sequence is found at index 1
pub const PADDING_BYTE: u8 = 255;

pub const DNA_ALPHABET: [&str; 4] = ["A", "C", "G", "T"];
