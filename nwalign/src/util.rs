use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("please enter both sequences")]
pub struct EmptySequenceError;

/// Make sure both sequences were supplied and neither is empty.
pub fn check_sequences_present<'a>(
    seq_1: Option<&'a str>,
    seq_2: Option<&'a str>,
) -> anyhow::Result<(&'a str, &'a str)> {
    match (seq_1, seq_2) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => Ok((a, b)),
        _ => Err(EmptySequenceError.into()),
    }
}

pub trait PathBufExt {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>>;
}

impl PathBufExt for PathBuf {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>> {
        let mut file_options = File::options();

        if allow_overwrite {
            file_options.write(true).truncate(true).create(true);
        } else {
            file_options.write(true).create_new(true);
        };

        let file = file_options
            .open(self)
            .context(format!("failed to create file: {}", self.to_string_lossy()))?;

        Ok(BufWriter::new(file))
    }
}

/// Open the output destination: a file if a path is given, otherwise stdout.
pub fn output_writer(
    path: Option<&PathBuf>,
    allow_overwrite: bool,
) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(path.open(allow_overwrite)?)),
        None => Ok(Box::new(BufWriter::new(std::io::stdout().lock()))),
    }
}

pub fn set_threads(num_threads: usize) -> anyhow::Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .context("failed to build rayon global threadpool")
}

pub fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_verbose(verbosity: u8) {
    let filter_level = verbosity_level(verbosity);

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}
