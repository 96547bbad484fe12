//! CSV export of the roster.
//!
//! # Responsibility
//! - Serialize the member list as a CSV document.
//! - Expose the delivery constants embedding layers need to hand the
//!   bytes to a user as a download.
//!
//! # Invariants
//! - Output starts with the `ID,Name,Skill` header and has exactly one
//!   row per member, in roster order.
//! - IDs are written as plain numbers; no spreadsheet-specific quoting.

use crate::model::member::Member;
use std::io::{self, Write};

/// Suggested filename for the exported document.
pub const EXPORT_FILE_NAME: &str = "team_members.csv";

/// MIME type for download delivery.
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8";

const HEADER: &str = "ID,Name,Skill";

/// Writes the roster as CSV to `writer`.
pub fn write_csv<W: Write>(members: &[Member], writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for member in members {
        writeln!(
            writer,
            "{},{},{}",
            member.id,
            escape_field(&member.name),
            escape_field(&member.skill)
        )?;
    }
    Ok(())
}

/// Renders the roster as CSV bytes.
pub fn export_csv(members: &[Member]) -> Vec<u8> {
    let mut buffer = Vec::new();
    // Writing to Vec<u8> cannot fail.
    let _ = write_csv(members, &mut buffer);
    buffer
}

/// Quotes a field when it contains a delimiter, quote or line break,
/// doubling embedded quotes per RFC 4180.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{escape_field, export_csv};
    use crate::model::member::Member;

    #[test]
    fn single_member_document_is_exact() {
        let members = vec![Member::new(1, "A", "B")];
        assert_eq!(export_csv(&members), b"ID,Name,Skill\n1,A,B\n");
    }

    #[test]
    fn empty_roster_is_header_only() {
        assert_eq!(export_csv(&[]), b"ID,Name,Skill\n");
    }

    #[test]
    fn fields_with_delimiters_are_quoted() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }
}
