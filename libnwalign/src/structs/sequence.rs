use seq_io::fasta::{Reader, Record};
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use crate::alphabet::{PADDING_BYTE, UTF8_SPACE};
use anyhow::{Context, Result};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("non-ASCII sequence byte: {byte}")]
pub struct NonAsciiSequenceByteError {
    byte: u8,
}

/// This holds the string data of a biological sequence.
#[derive(Clone)]
pub struct Sequence {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The length of the sequence
    pub length: usize,
    /// The UTF8 bytes that make up the sequence. These are
    /// buffered with a padding byte so that position 1 is
    /// found at index 1
    pub utf8_bytes: Vec<u8>,
}

impl Sequence {
    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let path = path.as_ref();
        let mut seqs: Vec<Self> = vec![];

        let mut reader = Reader::from_path(path)
            .with_context(|| format!("failed to open fasta file: {}", path.to_string_lossy()))?;

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "failed to read fasta record")?;
            let mut header_bytes = record.head().to_vec();
            let first_space_idx = header_bytes.iter().position(|&b| b == UTF8_SPACE);

            let error_context: fn() -> &'static str =
                || "failed to create String from fasta header bytes";

            let (name, details) = match first_space_idx {
                Some(idx) => {
                    let details_bytes = header_bytes.split_off(idx + 1);
                    header_bytes.pop();
                    (
                        String::from_utf8(header_bytes).with_context(error_context)?,
                        Some(String::from_utf8(details_bytes).with_context(error_context)?),
                    )
                }
                None => (
                    String::from_utf8(header_bytes).with_context(error_context)?,
                    None,
                ),
            };

            let mut utf8_bytes: Vec<u8> = vec![PADDING_BYTE];

            for line in record.seq_lines() {
                for &utf8_byte in line {
                    if !utf8_byte.is_ascii() {
                        return Err(NonAsciiSequenceByteError { byte: utf8_byte })
                            .with_context(|| format!("bad residue in fasta record: {name}"));
                    }
                    utf8_bytes.push(utf8_byte);
                }
            }

            log::debug!("read fasta record: {} ({})", name, utf8_bytes.len() - 1);

            seqs.push(Sequence {
                name,
                details,
                length: utf8_bytes.len() - 1,
                utf8_bytes,
            });
        }
        Ok(seqs)
    }

    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        if let Some(&byte) = bytes.iter().find(|b| !b.is_ascii()) {
            return Err(NonAsciiSequenceByteError { byte }.into());
        }

        let mut utf8_bytes: Vec<u8> = vec![PADDING_BYTE; bytes.len() + 1];
        utf8_bytes[1..].copy_from_slice(bytes);

        Ok(Sequence {
            name: "".to_string(),
            details: None,
            length: bytes.len(),
            utf8_bytes,
        })
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Returns a copy of the sequence with every residue mapped to upper case.
    pub fn to_uppercase(&self) -> Self {
        let mut utf8_bytes = self.utf8_bytes.clone();
        utf8_bytes[1..].make_ascii_uppercase();

        Sequence {
            name: self.name.clone(),
            details: self.details.clone(),
            length: self.length,
            utf8_bytes,
        }
    }

    /// The residues of the sequence, without the leading padding byte.
    pub fn residues(&self) -> &[u8] {
        &self.utf8_bytes[1..]
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The residues of the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        // residues are checked to be ASCII on construction
        std::str::from_utf8(self.residues()).unwrap_or_default()
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, ">{}", self.name)?;

        if let Some(ref details) = self.details {
            write!(f, " {details}")?
        };

        writeln!(f)?;

        let mut iter = self.residues().chunks(80).peekable();

        while let Some(byte_chunk) = iter.next() {
            match std::str::from_utf8(byte_chunk) {
                Ok(seq_line) => {
                    write!(f, "{}", seq_line)?;
                    if iter.peek().is_some() {
                        // if we're not on the last
                        // line, add a linebreak
                        writeln!(f)?;
                    }
                }
                Err(_) => return Err(std::fmt::Error),
            }
        }
        Ok(())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
