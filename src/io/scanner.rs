//! Forward-only line scanner over mesh file text.
//!
//! The scanner tracks 1-based line numbers so every parse error can point
//! back at the offending line. It never moves backwards: a marker that lies
//! before the current position is not found.

use crate::mesh_error::MeshError;
use std::str::Lines;

/// Sequential reader that finds section markers and hands out records.
#[derive(Debug, Clone)]
pub struct SectionScanner<'a> {
    lines: Lines<'a>,
    /// Number of the last line consumed; 0 before the first read.
    line: usize,
}

impl<'a> SectionScanner<'a> {
    /// Starts a scan at the first line of `contents`.
    pub fn new(contents: &'a str) -> Self {
        Self {
            lines: contents.lines(),
            line: 0,
        }
    }

    /// Number of the last line consumed (1-based; 0 if none yet).
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.line += 1;
        Some(line)
    }

    /// Advances past the first line equal to `keyword` and returns its line number.
    ///
    /// Leading/trailing whitespace (including a `\r` from CRLF files) is
    /// ignored when comparing.
    ///
    /// # Errors
    /// `SectionNotFound` if the input runs out first. The scanner is then
    /// exhausted.
    pub fn locate(&mut self, keyword: &str) -> Result<usize, MeshError> {
        while let Some(line) = self.next_line() {
            if line.trim() == keyword {
                return Ok(self.line);
            }
        }
        Err(MeshError::SectionNotFound {
            keyword: keyword.to_string(),
        })
    }

    /// Next non-blank line together with its line number.
    pub fn next_record(&mut self) -> Option<(usize, &'a str)> {
        while let Some(line) = self.next_line() {
            if !line.trim().is_empty() {
                return Some((self.line, line));
            }
        }
        None
    }

    /// Reads a section's record count from the next non-blank line.
    ///
    /// # Errors
    /// `ParseError` if the line is missing, is not a single non-negative
    /// integer, or carries extra fields.
    pub fn read_count(&mut self, section: &str) -> Result<usize, MeshError> {
        let (line_no, line) = self.next_record().ok_or_else(|| {
            MeshError::parse(
                self.line + 1,
                "",
                format!("unexpected end of file: missing {section} count"),
            )
        })?;
        let mut fields = line.split_whitespace();
        let count = fields
            .next()
            .and_then(|raw| raw.parse::<usize>().ok())
            .ok_or_else(|| MeshError::parse(line_no, line, format!("invalid {section} count")))?;
        if fields.next().is_some() {
            return Err(MeshError::parse(
                line_no,
                line,
                format!("unexpected fields after {section} count"),
            ));
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "$MeshFormat\r\n2.2 0 8\r\n$EndMeshFormat\r\n$Nodes\r\n\r\n  2  \r\n1 0 0 0\r\n";

    #[test]
    fn locate_positions_after_marker() {
        let mut scanner = SectionScanner::new(TEXT);
        assert_eq!(scanner.locate("$Nodes").unwrap(), 4);
        assert_eq!(scanner.read_count("vertex").unwrap(), 2);
        assert_eq!(scanner.line_number(), 6);
        let (no, line) = scanner.next_record().unwrap();
        assert_eq!(no, 7);
        assert_eq!(line.trim(), "1 0 0 0");
        assert!(scanner.next_record().is_none());
    }

    #[test]
    fn locate_requires_exact_match() {
        let mut scanner = SectionScanner::new("$NodesX\n$Node\n");
        let err = scanner.locate("$Nodes").unwrap_err();
        assert!(
            matches!(&err, MeshError::SectionNotFound { keyword } if keyword == "$Nodes"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn locate_never_searches_backwards() {
        let mut scanner = SectionScanner::new(TEXT);
        scanner.locate("$EndMeshFormat").unwrap();
        assert!(scanner.locate("$MeshFormat").is_err());
    }

    #[test]
    fn bad_counts() {
        for (text, line) in [("-1\n", 1), ("3 4\n", 1), ("\n\nabc\n", 3), ("", 1)] {
            let mut scanner = SectionScanner::new(text);
            let err = scanner.read_count("vertex").unwrap_err();
            assert!(
                matches!(err, MeshError::ParseError { line: l, .. } if l == line),
                "unexpected error for {text:?}: {err:?}"
            );
        }
    }
}
