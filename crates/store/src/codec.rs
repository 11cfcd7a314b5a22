//! Record encoding for the annotation file.
//!
//! Fields are joined with `;` and each record ends with `\r\n`. A field that
//! contains the delimiter, a double quote, or a line break is wrapped in
//! double quotes with inner quotes doubled; all other fields are written
//! as-is.

/// Column delimiter.
pub const DELIMITER: char = ';';

/// Record terminator.
pub const TERMINATOR: &str = "\r\n";

const QUOTE: char = '"';

/// Append one encoded record to `out`.
pub fn encode_record<'a, I>(out: &mut String, fields: I)
where
    I: IntoIterator<Item = &'a str>,
{
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        encode_field(out, field);
    }
    out.push_str(TERMINATOR);
}

fn encode_field(out: &mut String, field: &str) {
    if !needs_quoting(field) {
        out.push_str(field);
        return;
    }
    out.push(QUOTE);
    for ch in field.chars() {
        if ch == QUOTE {
            out.push(QUOTE);
        }
        out.push(ch);
    }
    out.push(QUOTE);
}

fn needs_quoting(field: &str) -> bool {
    field
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == '\r' || c == '\n')
}
