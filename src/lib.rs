use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt,
    num::{ParseFloatError, ParseIntError},
    ops::Range,
    path::{Path, PathBuf},
};

use logos::Logos;
use miette::Diagnostic;
use thiserror::Error;

mod summary;

pub use summary::{EmptyDatasetError, Extreme, Summary};

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Token {
    // Unicode whitespace plus the ASCII separators \x1C-\x1F
    #[regex(r"[\s\x1C-\x1F]+")]
    Whitespace,
    // Marks an estimated or flagged reading, e.g. `97*`
    #[token("*")]
    Flag,
    #[regex(r"[^\s\x1C-\x1F*]+")]
    Text,
}

/// One whitespace-delimited field of a line.
#[derive(Debug, Clone, PartialEq)]
struct Column<'a> {
    raw: &'a str,
    cleaned: Cow<'a, str>,
}

impl<'a> Column<'a> {
    fn new(line: &'a str, span: Range<usize>, pieces: Vec<Range<usize>>) -> Self {
        let cleaned = match pieces.as_slice() {
            [only] if *only == span => Cow::Borrowed(&line[only.clone()]),
            pieces => Cow::Owned(pieces.iter().map(|piece| &line[piece.clone()]).collect()),
        };
        Self {
            raw: &line[span],
            cleaned,
        }
    }
}

fn columns(line: &str) -> Vec<Column<'_>> {
    let mut lexer = Token::lexer(line);
    let mut columns = Vec::new();
    let mut current: Option<(Range<usize>, Vec<Range<usize>>)> = None;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(Token::Whitespace) => {
                if let Some((span, pieces)) = current.take() {
                    columns.push(Column::new(line, span, pieces));
                }
            }
            // Unlexable input stays in the column and fails numeric parsing
            token => {
                let (column, pieces) = current.get_or_insert_with(|| (span.clone(), Vec::new()));
                column.end = span.end;
                if token != Ok(Token::Flag) {
                    pieces.push(span);
                }
            }
        }
    }
    if let Some((span, pieces)) = current {
        columns.push(Column::new(line, span, pieces));
    }

    columns
}

/// Splits text into records the way universal newlines do: `\n`, `\r\n`
/// and a lone `\r` all end a record.
fn records(s: &str) -> impl Iterator<Item = &str> {
    s.split_inclusive('\n').flat_map(|chunk| {
        let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
        chunk.strip_suffix('\r').unwrap_or(chunk).split('\r')
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherRow {
    pub day: i64,
    pub max_temp: f64,
    pub min_temp: f64,
}

impl WeatherRow {
    pub fn spread(&self) -> f64 {
        self.max_temp - self.min_temp
    }

    pub fn average(&self) -> f64 {
        (self.max_temp + self.min_temp) / 2.0
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RowError {
    #[error("Expected at least 3 columns, found {0}")]
    TooFewColumns(usize),
    #[error("Bad day `{token}`: {source}")]
    BadDay {
        token: String,
        source: ParseIntError,
    },
    #[error("Bad temperature `{token}`: {source}")]
    BadTemperature {
        token: String,
        source: ParseFloatError,
    },
    #[error("Max temperature {max} is below min temperature {min}")]
    Inverted { max: f64, min: f64 },
}

/// Parses one line as `<day> <max temp> <min temp> [extra columns...]`.
pub fn try_parse_row(line: &str) -> Result<WeatherRow, RowError> {
    let columns = columns(line);
    let [day, max_temp, min_temp, ..] = columns.as_slice() else {
        return Err(RowError::TooFewColumns(columns.len()));
    };

    let day = day.raw.parse().map_err(|source| RowError::BadDay {
        token: day.raw.to_string(),
        source,
    })?;
    let temperature = |column: &Column| {
        column
            .cleaned
            .parse::<f64>()
            .map_err(|source| RowError::BadTemperature {
                token: column.raw.to_string(),
                source,
            })
    };
    let max_temp = temperature(max_temp)?;
    let min_temp = temperature(min_temp)?;

    // NaN readings are unordered and get dropped here too
    if matches!(max_temp.partial_cmp(&min_temp), Some(Ordering::Less) | None) {
        return Err(RowError::Inverted {
            max: max_temp,
            min: min_temp,
        });
    }

    Ok(WeatherRow {
        day,
        max_temp,
        min_temp,
    })
}

/// How many lines were kept and why the others were dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipStats {
    pub lines: usize,
    pub kept: usize,
    pub too_few_columns: usize,
    pub bad_day: usize,
    pub bad_temperature: usize,
    pub inverted: usize,
}

impl SkipStats {
    pub fn skipped(&self) -> usize {
        self.lines - self.kept
    }

    fn record(&mut self, error: &RowError) {
        match error {
            RowError::TooFewColumns(_) => self.too_few_columns += 1,
            RowError::BadDay { .. } => self.bad_day += 1,
            RowError::BadTemperature { .. } => self.bad_temperature += 1,
            RowError::Inverted { .. } => self.inverted += 1,
        }
    }
}

impl fmt::Display for SkipStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kept {} of {} lines ({} too short, {} bad day, {} bad temperature, {} max below min)",
            self.kept,
            self.lines,
            self.too_few_columns,
            self.bad_day,
            self.bad_temperature,
            self.inverted
        )
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("Could not read weather file `{}`", .path.display())]
    #[diagnostic(
        code(weather_stats::file_access),
        help("check that the file exists, is readable and is valid UTF-8")
    )]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct WeatherData {
    // Kept in file order
    pub rows: Vec<WeatherRow>,
    pub stats: SkipStats,
}

impl WeatherData {
    /// Reads and cleans a weather file. Malformed lines are skipped, only an
    /// unreadable file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", content.len(), path.display());
        Ok(Self::parse(&content))
    }

    pub fn parse(s: &str) -> Self {
        let mut data = Self::default();

        for (number, line) in records(s).enumerate() {
            data.stats.lines += 1;
            match try_parse_row(line) {
                Ok(row) => {
                    data.stats.kept += 1;
                    data.rows.push(row);
                }
                Err(e) => {
                    log::debug!("skipping line {}: {e}", number + 1);
                    data.stats.record(&e);
                }
            }
        }

        log::info!("{}", data.stats);
        if data.rows.is_empty() && data.stats.lines > 0 {
            log::warn!("every line of the input was dropped");
        }

        data
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> Result<Summary, EmptyDatasetError> {
        Summary::compute(&self.rows).ok_or(EmptyDatasetError)
    }
}
