//! String conversions for the value kinds an options field can hold.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use url::Url;

use crate::enums::{
    Case, CustomerApprovalStep, CustomerApprovalTool, Fidelity, Flags, JobDifficulty, JobStatus,
    Language, LineEnding, Priority, SpeakerId, Tag, WireEnum,
};
use crate::errors::{Cielo24Error, Result};

/// Which decode branch a field goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Boolean,
    DateTime,
    Url,
    Enum,
    List,
    Chars,
}

/// A raw option value after kind-specific decoding, before it is narrowed to
/// the field's concrete type.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Text(String),
    Integer(i64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Url(Url),
    Enum(String),
    List(Vec<String>),
    Chars(Vec<char>),
}

/// A type that can live in an options field.
pub trait OptionValue: Sized {
    const KIND: FieldKind;

    /// The query representation of the value.
    fn to_query_value(&self) -> String;

    fn from_decoded(value: Decoded) -> Result<Self>;
}

/// Read a raw string as the body of a JSON string literal, so escapes such
/// as `\n` or `\u00e9` are honored and a bare `"` is rejected.
pub(crate) fn unquote(raw: &str) -> Result<String> {
    serde_json::from_str::<String>(&format!("\"{raw}\"")).map_err(|_| Cielo24Error::format(raw, "string"))
}

/// Decode a raw `key=value` value according to `kind`.
pub fn decode(kind: FieldKind, raw: &str) -> Result<Decoded> {
    match kind {
        FieldKind::Text => unquote(raw).map(Decoded::Text),
        FieldKind::Integer => {
            let text = unquote(raw)?;
            text.parse()
                .map(Decoded::Integer)
                .map_err(|_| Cielo24Error::format(text, "integer"))
        }
        FieldKind::Boolean => {
            let text = unquote(raw)?;
            if text.eq_ignore_ascii_case("true") {
                Ok(Decoded::Boolean(true))
            } else if text.eq_ignore_ascii_case("false") {
                Ok(Decoded::Boolean(false))
            } else {
                Err(Cielo24Error::format(text, "boolean"))
            }
        }
        FieldKind::DateTime => parse_date(&unquote(raw)?).map(Decoded::DateTime),
        FieldKind::Url => {
            let text = unquote(raw)?;
            Url::parse(&text)
                .map(Decoded::Url)
                .map_err(|_| Cielo24Error::format(text, "URL"))
        }
        FieldKind::Enum => unquote(raw).map(Decoded::Enum),
        FieldKind::List => decode_list(raw).map(Decoded::List),
        FieldKind::Chars => decode_chars(&unquote(raw)?).map(Decoded::Chars),
    }
}

/// Lists are accepted either in their query form (`["a", "b"]`) or as a
/// plain comma separated value (`a,b`).
fn decode_list(raw: &str) -> Result<Vec<String>> {
    if raw.trim_start().starts_with('[') {
        return serde_json::from_str(raw).map_err(|_| Cielo24Error::format(raw, "list"));
    }
    Ok(unquote(raw)?
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect())
}

/// Accepts `(a, b)`, `a,b` or `ab`.
fn decode_chars(text: &str) -> Result<Vec<char>> {
    let inner = text.trim();
    let inner = inner
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(inner);
    if !inner.contains(',') {
        return Ok(inner.chars().filter(|c| !c.is_whitespace()).collect());
    }
    inner
        .split(',')
        .map(str::trim)
        .map(|item| {
            let mut chars = item.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(Cielo24Error::format(text, "character list")),
            }
        })
        .collect()
}

/// Decode a raw value for a nullable field.
///
/// An empty value clears every field kind except text, which keeps the empty
/// string, and enums that register an empty description.
pub(crate) fn decode_field<V: OptionValue>(raw: &str) -> Result<Option<V>> {
    if raw.is_empty() {
        return Ok(match V::KIND {
            FieldKind::Text => Some(V::from_decoded(Decoded::Text(String::new()))?),
            FieldKind::Enum => V::from_decoded(Decoded::Enum(String::new())).ok(),
            _ => None,
        });
    }
    V::from_decoded(decode(V::KIND, raw)?).map(Some)
}

/// ISO 8601 with seven fractional digits and an explicit offset, e.g.
/// `2015-06-25T00:00:00.0000000+00:00`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    let ticks = (date.timestamp_subsec_nanos() / 100).min(9_999_999);
    format!(
        "{}.{ticks:07}{}",
        date.format("%Y-%m-%dT%H:%M:%S"),
        date.format("%:z")
    )
}

/// Parse a timestamp as the API and its users write them.
///
/// Timestamps without an offset (the server's own format, e.g.
/// `2014-05-06T10:49:38.341715`) and bare dates are taken as UTC.
pub fn parse_date(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Ok(date.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, pattern) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Cielo24Error::format(text, "date-time"))
}

/// `["a", "b"]`
pub(crate) fn join_quoted<I, S>(items: I, delimiter: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let quoted: Vec<String> = items
        .into_iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect();
    format!("[{}]", quoted.join(delimiter))
}

fn mismatch(value: Decoded, type_name: &'static str) -> Cielo24Error {
    Cielo24Error::format(format!("{value:?}"), type_name)
}

impl OptionValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn to_query_value(&self) -> String {
        self.clone()
    }

    fn from_decoded(value: Decoded) -> Result<Self> {
        match value {
            Decoded::Text(text) => Ok(text),
            other => Err(mismatch(other, "string")),
        }
    }
}

impl OptionValue for i32 {
    const KIND: FieldKind = FieldKind::Integer;

    fn to_query_value(&self) -> String {
        self.to_string()
    }

    fn from_decoded(value: Decoded) -> Result<Self> {
        match value {
            Decoded::Integer(n) => {
                i32::try_from(n).map_err(|_| Cielo24Error::format(n.to_string(), "integer"))
            }
            other => Err(mismatch(other, "integer")),
        }
    }
}

impl OptionValue for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn to_query_value(&self) -> String {
        self.to_string()
    }

    fn from_decoded(value: Decoded) -> Result<Self> {
        match value {
            Decoded::Boolean(b) => Ok(b),
            other => Err(mismatch(other, "boolean")),
        }
    }
}

impl OptionValue for DateTime<Utc> {
    const KIND: FieldKind = FieldKind::DateTime;

    fn to_query_value(&self) -> String {
        format_date(self)
    }

    fn from_decoded(value: Decoded) -> Result<Self> {
        match value {
            Decoded::DateTime(date) => Ok(date),
            other => Err(mismatch(other, "date-time")),
        }
    }
}

impl OptionValue for Url {
    const KIND: FieldKind = FieldKind::Url;

    fn to_query_value(&self) -> String {
        self.to_string()
    }

    fn from_decoded(value: Decoded) -> Result<Self> {
        match value {
            Decoded::Url(url) => Ok(url),
            other => Err(mismatch(other, "URL")),
        }
    }
}

impl OptionValue for Vec<String> {
    const KIND: FieldKind = FieldKind::List;

    fn to_query_value(&self) -> String {
        join_quoted(self, ", ")
    }

    fn from_decoded(value: Decoded) -> Result<Self> {
        match value {
            Decoded::List(items) => Ok(items),
            other => Err(mismatch(other, "list")),
        }
    }
}

impl OptionValue for Vec<char> {
    const KIND: FieldKind = FieldKind::Chars;

    fn to_query_value(&self) -> String {
        let chars: Vec<String> = self.iter().map(char::to_string).collect();
        format!("({})", chars.join(", "))
    }

    fn from_decoded(value: Decoded) -> Result<Self> {
        match value {
            Decoded::Chars(chars) => Ok(chars),
            other => Err(mismatch(other, "character list")),
        }
    }
}

impl<E: WireEnum> OptionValue for Flags<E> {
    const KIND: FieldKind = FieldKind::List;

    fn to_query_value(&self) -> String {
        join_quoted(self.iter().map(WireEnum::describe), ", ")
    }

    fn from_decoded(value: Decoded) -> Result<Self> {
        match value {
            Decoded::List(items) => items.iter().map(|item| E::parse_wire(item)).collect(),
            other => Err(mismatch(other, E::TYPE_NAME)),
        }
    }
}

/// Single values and lists of an enumerator.
macro_rules! enum_option_values {
    ($($ty:ty),+ $(,)?) => {$(
        impl OptionValue for $ty {
            const KIND: FieldKind = FieldKind::Enum;

            fn to_query_value(&self) -> String {
                self.describe().to_string()
            }

            fn from_decoded(value: Decoded) -> Result<Self> {
                match value {
                    Decoded::Enum(token) => <$ty>::parse_wire(&token),
                    other => Err(mismatch(other, <$ty>::TYPE_NAME)),
                }
            }
        }

        impl OptionValue for Vec<$ty> {
            const KIND: FieldKind = FieldKind::List;

            fn to_query_value(&self) -> String {
                join_quoted(self.iter().map(|v| v.describe()), ", ")
            }

            fn from_decoded(value: Decoded) -> Result<Self> {
                match value {
                    Decoded::List(items) => items.iter().map(|item| <$ty>::parse_wire(item)).collect(),
                    other => Err(mismatch(other, <$ty>::TYPE_NAME)),
                }
            }
        }
    )+};
}

enum_option_values!(
    Case,
    CustomerApprovalStep,
    CustomerApprovalTool,
    Fidelity,
    JobDifficulty,
    JobStatus,
    Language,
    LineEnding,
    Priority,
    SpeakerId,
    Tag,
);

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn date_has_seven_fraction_digits_and_offset() {
        let date = Utc.with_ymd_and_hms(2015, 6, 25, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date), "2015-06-25T00:00:00.0000000+00:00");

        let precise = parse_date("2014-05-06T10:49:38.341715").unwrap();
        assert_eq!(format_date(&precise), "2014-05-06T10:49:38.3417150+00:00");
    }

    #[test]
    fn parse_date_accepts_offsets_and_bare_dates() {
        let shifted = parse_date("2015-06-25T02:00:00+02:00").unwrap();
        assert_eq!(shifted, Utc.with_ymd_and_hms(2015, 6, 25, 0, 0, 0).unwrap());
        let day = parse_date("2015-06-25").unwrap();
        assert_eq!(day, shifted);
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn unquote_honors_json_escapes() {
        assert_eq!(unquote(r"line\nbreak").unwrap(), "line\nbreak");
        assert_eq!(unquote("plain text").unwrap(), "plain text");
        assert!(unquote("say \"hi\"").is_err());
    }

    #[test]
    fn decode_branches_by_kind() {
        assert_eq!(decode(FieldKind::Integer, "42").unwrap(), Decoded::Integer(42));
        assert_eq!(decode(FieldKind::Boolean, "True").unwrap(), Decoded::Boolean(true));
        assert!(decode(FieldKind::Boolean, "yes").is_err());
        assert!(decode(FieldKind::Integer, "4.5").is_err());
        assert_eq!(
            decode(FieldKind::List, r#"["a", "b c"]"#).unwrap(),
            Decoded::List(vec!["a".into(), "b c".into()])
        );
        assert_eq!(
            decode(FieldKind::List, "a, b").unwrap(),
            Decoded::List(vec!["a".into(), "b".into()])
        );
        assert_eq!(
            decode(FieldKind::Chars, "(<, >)").unwrap(),
            Decoded::Chars(vec!['<', '>'])
        );
        assert_eq!(decode(FieldKind::Chars, "[]").unwrap(), Decoded::Chars(vec!['[', ']']));
    }

    #[test]
    fn list_values_keep_quotes_around_each_element() {
        let list = vec!["a".to_string(), "b c".to_string()];
        assert_eq!(list.to_query_value(), r#"["a", "b c"]"#);
        assert_eq!(vec!['[', ']'].to_query_value(), "([, ])");
        assert_eq!(
            vec![Tag::Music, Tag::BlankAudio].to_query_value(),
            r#"["MUSIC", "BLANK_AUDIO"]"#
        );
    }

    #[test]
    fn empty_value_clears_non_text_fields() {
        assert_eq!(decode_field::<String>("").unwrap(), Some(String::new()));
        assert_eq!(decode_field::<bool>("").unwrap(), None);
        assert_eq!(decode_field::<Case>("").unwrap(), Some(Case::Unchanged));
        assert_eq!(decode_field::<Fidelity>("").unwrap(), None);
    }

    #[test]
    fn integer_out_of_range_is_a_format_error() {
        assert!(decode_field::<i32>("9999999999").is_err());
    }
}
