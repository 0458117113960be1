use std::io::BufRead;

use crate::error::{Error, Result};
use crate::types::ScoredRecord;

/// Parser for delimited (name, score, label) text, the one input format the
/// engine understands. Column indices are 0-based; the defaults read
/// `name<delim>score<delim>label` rows.
///
/// Labels accept `1`/`0`, `true`/`false` and `active`/`inactive`, case
/// insensitively. Scores go through a dedicated float parser since large
/// screening runs are dominated by float parsing.
#[derive(Debug, Clone)]
pub struct TabularParser {
    delimiter: char,
    has_header: bool,
    name_column: usize,
    score_column: usize,
    label_column: usize,
}

impl Default for TabularParser {
    fn default() -> Self {
        TabularParser::new('\t', false)
    }
}

impl TabularParser {
    pub fn new(delimiter: char, has_header: bool) -> TabularParser {
        TabularParser {
            delimiter,
            has_header,
            name_column: 0,
            score_column: 1,
            label_column: 2,
        }
    }

    /// Remap which columns hold the name, score and label.
    pub fn with_columns(mut self, name: usize, score: usize, label: usize) -> TabularParser {
        self.name_column = name;
        self.score_column = score;
        self.label_column = label;
        self
    }

    pub fn parse_line(&self, line: &str) -> Result<ScoredRecord> {
        let fields: Vec<&str> = line.split(self.delimiter).collect();
        let name = self.field(&fields, self.name_column)?;
        let score_text = self.field(&fields, self.score_column)?;
        let label_text = self.field(&fields, self.label_column)?;

        let score: f64 = fast_float::parse(score_text)
            .map_err(|_| Error::ParserError(format!("bad score value: {score_text}")))?;
        let label = parse_label(label_text)?;
        Ok(ScoredRecord::new(name, score, label))
    }

    /// Read a whole delimited stream, skipping the header row if configured
    /// and blank lines anywhere. Errors name the offending line.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<ScoredRecord>> {
        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if index == 0 && self.has_header {
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }
            let record = self
                .parse_line(&line)
                .map_err(|e| Error::ParserError(format!("line {}: {e}", index + 1)))?;
            records.push(record);
        }
        Ok(records)
    }

    fn field<'a>(&self, fields: &[&'a str], column: usize) -> Result<&'a str> {
        fields.get(column).copied().ok_or_else(|| {
            Error::ParserError(format!(
                "expected at least {} columns, found {}",
                column + 1,
                fields.len()
            ))
        })
    }
}

fn parse_label(text: &str) -> Result<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "active" => Ok(true),
        "0" | "false" | "inactive" => Ok(false),
        other => Err(Error::ParserError(format!("bad label value: {other}"))),
    }
}
