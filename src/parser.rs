//! Delimited-text record parser
//!
//! The input file is almost-but-not-quite CSV: a field may contain the comma
//! delimiter when the whole field is wrapped in double quotes (college names
//! like `"Purdue University, West Lafayette"`). The parser makes a single
//! linear pass over the text, tracking one quoted-span flag and a field-start
//! cursor, and never backtracks.

/// One parsed field, already coerced and sanitized.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Number(f64),
    Text(String),
}

/// Parse raw dataset text into rows of coerced fields.
///
/// Commas and newlines inside a quoted span are literal content. Trailing
/// content after the last newline still forms a final row.
pub fn parse(text: &str) -> Vec<Vec<Field>> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field_start = 0;
    let mut in_quotes = false;

    for (pos, ch) in text.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(coerce(&text[field_start..pos]));
                field_start = pos + 1;
            }
            '\n' if !in_quotes => {
                fields.push(coerce(&text[field_start..pos]));
                field_start = pos + 1;
                rows.push(std::mem::take(&mut fields));
            }
            _ => {}
        }
    }

    // File without a trailing newline: close out the last row.
    if field_start < text.len() {
        fields.push(coerce(&text[field_start..]));
    }
    if !fields.is_empty() {
        rows.push(fields);
    }

    rows
}

/// Coerce one raw field to a number or sanitized text.
///
/// A trimmed, non-empty field that parses as a finite number becomes
/// `Number`. The check is an explicit parse, not a truthiness shortcut, so a
/// literal `0` is numeric and the empty string never silently becomes zero.
fn coerce(raw: &str) -> Field {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return Field::Number(n);
            }
        }
    }
    Field::Text(sanitize(raw))
}

/// Strip quote characters and replace anything outside printable ASCII
/// (0x20-0x7E) with a single space. Some source rows carry mojibake where a
/// space should be.
fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|&c| c != '"')
        .map(|c| if ('\x20'..='\x7e').contains(&c) { c } else { ' ' })
        .collect()
}
