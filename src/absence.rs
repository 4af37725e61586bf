//! Absence-list parsing.
//!
//! An absence list is line-oriented text with two whitespace-separated
//! fields per line: a fully qualified name and a record-type token.
//! Parsing is purely syntactic and never touches the network; every
//! violation is an independent [`LineError`] and parsing continues with
//! the next line.

use std::fmt;
use std::str::FromStr;

use hickory_proto::rr::{Name, RecordType};

use crate::error_handling::LineError;

/// One name/type pair to check, the identity key of every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryKey {
    /// Fully qualified query name.
    pub name: Name,
    /// Query record type.
    pub rtype: RecordType,
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.rtype)
    }
}

/// Result of parsing one absence list: the valid keys plus every
/// per-line violation found along the way.
#[derive(Debug, Default)]
pub struct AbsenceList {
    /// Keys parsed from valid lines, in file order.
    pub keys: Vec<QueryKey>,
    /// Violations, in file order.
    pub errors: Vec<LineError>,
}

/// Parses an absence list.
///
/// Lines are trimmed first; blank lines and lines starting with `#` are
/// skipped silently. Each remaining line must hold exactly two fields: a
/// syntactically valid, fully qualified domain name and a recognized
/// record-type token. Line numbers in errors are 1-based.
pub fn parse_absence_list(text: &str) -> AbsenceList {
    let mut list = AbsenceList::default();

    for (idx, raw) in text.lines().enumerate() {
        let number = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[qname, qtype] = fields.as_slice() else {
            list.errors.push(LineError::FieldCount {
                line: number,
                text: line.to_string(),
            });
            continue;
        };

        let name = match Name::from_utf8(qname) {
            Ok(name) => name,
            Err(_) => {
                list.errors.push(LineError::InvalidName {
                    line: number,
                    text: line.to_string(),
                });
                continue;
            }
        };

        if !name.is_fqdn() {
            list.errors.push(LineError::NotAbsolute {
                line: number,
                text: line.to_string(),
            });
            continue;
        }

        let rtype = match RecordType::from_str(qtype) {
            Ok(rtype) => rtype,
            Err(_) => {
                list.errors.push(LineError::UnknownType {
                    line: number,
                    text: line.to_string(),
                });
                continue;
            }
        };

        list.keys.push(QueryKey { name, rtype });
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_blank_lines_are_skipped_silently() {
        let list = parse_absence_list("# a comment\n\n   \n  # indented comment\n");
        assert!(list.keys.is_empty());
        assert!(list.errors.is_empty());
    }

    #[test]
    fn test_valid_line_yields_query_key() {
        let list = parse_absence_list("www.example.com. A\n");
        assert!(list.errors.is_empty());
        assert_eq!(list.keys.len(), 1);
        assert_eq!(list.keys[0].rtype, RecordType::A);
        assert!(list.keys[0].name.is_fqdn());
        assert_eq!(list.keys[0].to_string(), "www.example.com./A");
    }

    #[test]
    fn test_three_fields_is_one_field_count_error() {
        let list = parse_absence_list("www.example.com. A extra\n");
        assert!(list.keys.is_empty());
        assert_eq!(
            list.errors,
            vec![LineError::FieldCount {
                line: 1,
                text: "www.example.com. A extra".to_string(),
            }]
        );
    }

    #[test]
    fn test_single_field_is_field_count_error() {
        let list = parse_absence_list("www.example.com.\n");
        assert_eq!(list.errors.len(), 1);
        assert!(matches!(list.errors[0], LineError::FieldCount { line: 1, .. }));
    }

    #[test]
    fn test_empty_label_is_invalid_name() {
        let list = parse_absence_list("www..example.com. A\n");
        assert!(list.keys.is_empty());
        assert!(matches!(list.errors[0], LineError::InvalidName { line: 1, .. }));
    }

    #[test]
    fn test_relative_name_is_not_absolute() {
        let list = parse_absence_list("www A\n");
        assert!(list.keys.is_empty());
        assert!(matches!(list.errors[0], LineError::NotAbsolute { line: 1, .. }));
    }

    #[test]
    fn test_unknown_type_token_is_unknown_type() {
        let list = parse_absence_list("www.example.com. BOGUSTYPE\n");
        assert!(list.keys.is_empty());
        assert!(matches!(list.errors[0], LineError::UnknownType { line: 1, .. }));
    }

    #[test]
    fn test_bad_lines_do_not_stop_later_lines() {
        let input = "\
# absence list
www.example.com. A extra
mail.example.com. MX

www BOGUS
txt.example.com. TXT
";
        let list = parse_absence_list(input);
        assert_eq!(list.keys.len(), 2);
        assert_eq!(list.keys[0].to_string(), "mail.example.com./MX");
        assert_eq!(list.keys[1].to_string(), "txt.example.com./TXT");
        // line numbers are 1-based and count skipped lines too
        assert_eq!(list.errors.len(), 2);
        assert_eq!(list.errors[0].line(), 2);
        assert_eq!(list.errors[1].line(), 5);
    }
}
