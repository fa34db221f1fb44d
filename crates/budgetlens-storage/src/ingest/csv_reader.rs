//! Minimal reader for the semicolon-separated export.
//!
//! Handles a UTF-8 BOM, CRLF line endings, and double-quoted fields with
//! `""` escapes and embedded separators or newlines.

use budgetlens_core::errors::IngestError;

pub const SEPARATOR: char = ';';

/// One physical record of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// 1-based line where the row starts.
    pub line: usize,
    pub fields: Vec<String>,
}

impl CsvRow {
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.trim().is_empty())
    }
}

pub fn parse(content: &str) -> Result<Vec<CsvRow>, IngestError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_start = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => in_quotes = true,
            SEPARATOR => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                rows.push(CsvRow {
                    line: row_start,
                    fields: std::mem::take(&mut fields),
                });
                line += 1;
                row_start = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(IngestError::Malformed {
            line: row_start,
            message: "unterminated quoted field".to_string(),
        });
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        rows.push(CsvRow {
            line: row_start,
            fields,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_semicolons_and_strips_bom() {
        let rows = parse("\u{feff}a;b;c\r\n1;2;3\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields, vec!["a", "b", "c"]);
        assert_eq!(rows[1].fields, vec!["1", "2", "3"]);
        assert_eq!(rows[1].line, 2);
    }

    #[test]
    fn test_quoted_fields_keep_separators_and_newlines() {
        let rows = parse("t;n\n\"Jardin; partagé\";\"ligne\nsuite\"\nx;\"dit \"\"oui\"\"\"\n").unwrap();
        assert_eq!(rows[1].fields, vec!["Jardin; partagé", "ligne\nsuite"]);
        assert_eq!(rows[2].line, 4);
        assert_eq!(rows[2].fields, vec!["x", "dit \"oui\""]);
    }

    #[test]
    fn test_last_row_without_newline() {
        let rows = parse("a;b\n1;").unwrap();
        assert_eq!(rows[1].fields, vec!["1", ""]);
    }

    #[test]
    fn test_unterminated_quote_is_malformed() {
        let err = parse("a;b\n\"ouvert;2\n").unwrap_err();
        assert!(matches!(err, IngestError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_blank_rows_detected() {
        let rows = parse("a;b\n;\n").unwrap();
        assert!(rows[1].is_blank());
    }
}
