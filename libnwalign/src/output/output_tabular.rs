use crate::align::structs::Alignment;

use anyhow::Context;
use std::io::Write;

#[derive(Debug, Clone, Copy)]
pub enum Field {
    SeqOne,
    SeqTwo,
    Score,
    Length,
    Matches,
    Mismatches,
    Gaps,
    Identity,
}

impl Field {
    pub const DEFAULT_FIELDS: [Field; 8] = [
        Field::SeqOne,
        Field::SeqTwo,
        Field::Score,
        Field::Length,
        Field::Matches,
        Field::Mismatches,
        Field::Gaps,
        Field::Identity,
    ];

    pub fn extract_from(&self, alignment: &Alignment) -> String {
        match self {
            Field::SeqOne => name_or_dash(&alignment.seq_1_name),
            Field::SeqTwo => name_or_dash(&alignment.seq_2_name),
            Field::Score => alignment.score.to_string(),
            Field::Length => alignment.length.to_string(),
            Field::Matches => alignment.matches.to_string(),
            Field::Mismatches => alignment.mismatches.to_string(),
            Field::Gaps => alignment.gaps.to_string(),
            Field::Identity => format!("{:.3}", alignment.identity()),
        }
    }
}

fn name_or_dash(name: &str) -> String {
    if name.is_empty() {
        "-".to_string()
    } else {
        name.to_string()
    }
}

#[derive(Clone)]
pub struct TableFormat {
    pub fields: Vec<Field>,
    pub labels: Vec<Vec<String>>,
    pub min_widths: Vec<usize>,
    pub widths: Vec<usize>,
}

impl TableFormat {
    pub fn new(fields: &[Field]) -> anyhow::Result<Self> {
        anyhow::ensure!(!fields.is_empty(), "table format requires at least one field");

        let mut labels = vec![];
        let mut min_widths = vec![];
        let mut widths = vec![];

        // this regex matches CamelCaseWords
        let label_regex =
            regex::Regex::new(r"[A-Z][a-z]*").context("failed to build field label regex")?;

        // this closure extracts the words & minimum column width for a field
        let label_fn = |field: &Field| -> anyhow::Result<(Vec<String>, usize)> {
            // the Debug string for an enum produces the variant name
            let field_name = format!("{:?}", field);

            let (label_words, lengths): (Vec<_>, Vec<_>) = label_regex
                .find_iter(&field_name)
                .map(|m| (m.as_str().to_lowercase(), m.len()))
                .unzip();

            // the length of the longest word
            // is the min width of the column
            let min_width = *lengths
                .iter()
                .max()
                .context("failed to produce max field label width")?;
            Ok((label_words, min_width))
        };

        // the first column needs at least +2 to its
        // width to accommodate the "# " prefix
        let (label_words, min_width) = label_fn(&fields[0])?;
        labels.push(label_words);
        widths.push(min_width + 2);
        min_widths.push(min_width + 2);

        for field in fields.iter().skip(1) {
            let (label_words, min_width) = label_fn(field)?;
            labels.push(label_words);
            widths.push(min_width);
            min_widths.push(min_width);
        }

        Ok(Self {
            fields: fields.to_vec(),
            labels,
            min_widths,
            widths,
        })
    }

    pub fn update_widths(&mut self, alignment: &Alignment) {
        self.fields.iter().enumerate().for_each(|(idx, field)| {
            let width = field.extract_from(alignment).len();
            self.widths[idx] = self.widths[idx].max(width);
        });
    }

    pub fn reset_widths(&mut self) {
        self.widths
            .iter_mut()
            .zip(self.min_widths.iter())
            .for_each(|(width, min_width)| *width = *min_width);
    }

    pub fn header(&self) -> anyhow::Result<String> {
        // the number of rows in the header is
        // the max number of words in a field
        let num_rows = self
            .labels
            .iter()
            .map(|l| l.len())
            .max()
            .context("field headers are empty")?;

        let mut header_row_strings: Vec<String> = vec!["# ".to_string(); num_rows + 1];

        // this function appends the field labels to the header
        let header_append_fn =
            |words: &Vec<String>, width: usize, header_row_strings: &mut Vec<String>| {
                // labels with fewer words are bottom-aligned
                let offset = num_rows - words.len();

                (0..num_rows).for_each(|row| {
                    let token = if row < offset {
                        ""
                    } else {
                        words[row - offset].as_str()
                    };
                    header_row_strings[row].push_str(&format!("{token:width$} "));
                });
                header_row_strings[num_rows].push_str(&format!("{} ", "-".repeat(width)));
            };

        // the first column gets -2 to its width to account for the "# "
        header_append_fn(&self.labels[0], self.widths[0] - 2, &mut header_row_strings);

        self.labels
            .iter()
            .skip(1)
            .zip(self.widths.iter().skip(1))
            .for_each(|(words, &width)| {
                header_append_fn(words, width, &mut header_row_strings);
            });

        header_row_strings
            .iter_mut()
            .for_each(|row| row.truncate(row.trim_end().len()));

        Ok(header_row_strings.join("\n"))
    }

    pub fn row(&self, alignment: &Alignment) -> String {
        let mut row_string = String::new();

        self.fields
            .iter()
            .zip(self.widths.iter())
            .for_each(|(field, width)| {
                let val = field.extract_from(alignment);
                row_string.push_str(&format!("{val:width$} "));
            });

        // remove the last space
        row_string.pop();

        row_string
    }
}

pub fn write_tabular_output(alignments: &[Alignment], out: &mut impl Write) -> anyhow::Result<()> {
    let mut format = TableFormat::new(&Field::DEFAULT_FIELDS)?;
    alignments
        .iter()
        .for_each(|alignment| format.update_widths(alignment));

    writeln!(out, "{}", format.header()?)?;
    for alignment in alignments {
        writeln!(out, "{}", format.row(alignment))?;
    }
    Ok(())
}
