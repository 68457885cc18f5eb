//! Input validation helpers
//!
//! Constraints live on the request types as `validator` derives. This
//! module turns a failed validation into the per-field messages returned to
//! clients, and provides the lenient date format used by experience entries.

use chrono::{DateTime, NaiveDate, Utc};
use validator::{Validate, ValidationErrors};

/// Minimum length for a new password on change-password
pub const MIN_PASSWORD_LEN: usize = 6;

/// Run a payload's declared constraints, collecting every violation.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), Vec<String>> {
    payload.validate().map_err(|errors| field_messages(&errors))
}

/// Flatten validation errors into `"field: message"` strings.
///
/// Field names are reported in their camelCase wire form and the output is
/// sorted so responses are stable.
pub fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = to_camel_case(&field.to_string());
            errs.iter()
                .map(|err| match &err.message {
                    Some(message) => format!("{}: {}", field, message),
                    None => format!("{}: invalid value ({})", field, err.code),
                })
                .collect::<Vec<_>>()
        })
        .collect();

    messages.sort();
    messages
}

/// Convert a snake_case field name to its camelCase wire name
pub fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Parse either an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
///
/// Plain dates resolve to midnight UTC.
pub fn parse_flexible_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serde adapter for optional dates in the lenient format
pub mod optional_flexible_date {
    use super::parse_flexible_date;
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_flexible_date(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid date '{}'", raw))),
            None => Ok(None),
        }
    }
}
