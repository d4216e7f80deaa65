//! The talent record and its lenient decoding.
//!
//! Record sources are loosely typed: skills come as bare strings or as
//! `{ "name": ... }` objects, rates sometimes arrive as decimal strings, and
//! any field may be `null`. Decoding absorbs all of that so a single odd
//! field never fails the whole collection.

use std::borrow::Cow;
use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::value::finite_rate;

/// Stable record identifier, numeric or textual.
///
/// A record served without a usable id decodes with the empty text id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<i32> for RecordId {
    fn from(n: i32) -> Self {
        RecordId::Number(n as i64)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// A skill, either a bare name or an object carrying one.
///
/// Use [`Skill::name`] everywhere instead of matching on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skill {
    Name(String),
    Object {
        #[serde(default, deserialize_with = "lenient")]
        name: Option<String>,
    },
}

impl Skill {
    /// The skill's display name; empty when an object carries no name.
    pub fn name(&self) -> &str {
        match self {
            Skill::Name(name) => name,
            Skill::Object { name } => name.as_deref().unwrap_or(""),
        }
    }
}

impl From<&str> for Skill {
    fn from(name: &str) -> Self {
        Skill::Name(name.to_string())
    }
}

/// A searchable talent profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default, deserialize_with = "lenient")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient_skills")]
    pub skills: Vec<Skill>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub hourly_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub availability: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    /// Kept as served; epoch-millisecond numbers are rewritten as RFC 3339.
    #[serde(default, deserialize_with = "lenient_created_at")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_featured: bool,
}

impl Record {
    /// Creates a record with only an id; every other field is absent.
    pub fn new(id: impl Into<RecordId>) -> Self {
        Record {
            id: id.into(),
            first_name: None,
            last_name: None,
            title: None,
            bio: None,
            skills: Vec::new(),
            location: None,
            hourly_rate: None,
            availability: None,
            rating: None,
            created_at: None,
            is_featured: false,
        }
    }

    /// Sets first and last name.
    pub fn with_name(mut self, first: &str, last: &str) -> Self {
        self.first_name = Some(first.to_string());
        self.last_name = Some(last.to_string());
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_bio(mut self, bio: &str) -> Self {
        self.bio = Some(bio.to_string());
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Skill>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = Some(rate);
        self
    }

    pub fn with_availability(mut self, availability: &str) -> Self {
        self.availability = Some(availability.to_string());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_created_at(mut self, created_at: &str) -> Self {
        self.created_at = Some(created_at.to_string());
        self
    }

    pub fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// First and last name joined by a space, skipping blank parts.
    pub fn display_name(&self) -> Cow<'_, str> {
        let first = non_blank(self.first_name.as_deref());
        let last = non_blank(self.last_name.as_deref());
        match (first, last) {
            (Some(first), Some(last)) => Cow::Owned(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Cow::Borrowed(name),
            (None, None) => Cow::Borrowed(""),
        }
    }

    /// Both first and last name are present and non-blank.
    pub fn has_full_name(&self) -> bool {
        non_blank(self.first_name.as_deref()).is_some()
            && non_blank(self.last_name.as_deref()).is_some()
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// A field value of the expected shape, or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> Loose<T> {
    fn into_value(self) -> Option<T> {
        match self {
            Loose::Value(value) => Some(value),
            Loose::Other(_) => None,
        }
    }
}

/// `null` and values of the wrong shape decode as the default.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<Loose<T>>::deserialize(deserializer)?
        .and_then(Loose::into_value)
        .unwrap_or_default())
}

/// Keeps the well-formed skills and drops the rest.
fn lenient_skills<'de, D>(deserializer: D) -> std::result::Result<Vec<Skill>, D::Error>
where
    D: Deserializer<'de>,
{
    let skills = Option::<Loose<Vec<Loose<Skill>>>>::deserialize(deserializer)?
        .and_then(Loose::into_value)
        .unwrap_or_default();
    Ok(skills.into_iter().filter_map(Loose::into_value).collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientTimestamp {
    Text(String),
    Millis(f64),
    Other(IgnoredAny),
}

fn lenient_created_at<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LenientTimestamp>::deserialize(deserializer)? {
        Some(LenientTimestamp::Text(text)) => Some(text),
        Some(LenientTimestamp::Millis(millis)) => millis_to_rfc3339(millis),
        Some(LenientTimestamp::Other(_)) | None => None,
    })
}

fn millis_to_rfc3339(millis: f64) -> Option<String> {
    if !millis.is_finite() {
        return None;
    }
    let nanos = (millis as i128).checked_mul(1_000_000)?;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()?
        .format(&Rfc3339)
        .ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Accepts numbers and numeric strings; anything else decodes as absent.
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LenientNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(LenientNumber::Number(n)) => finite_rate(n),
        Some(LenientNumber::Text(s)) => crate::value::parse_rate(&s),
        Some(LenientNumber::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_name_normalizes_both_shapes() {
        assert_eq!(Skill::from("Rust").name(), "Rust");
        let object = Skill::Object {
            name: Some("Go".to_string()),
        };
        assert_eq!(object.name(), "Go");
        assert_eq!(Skill::Object { name: None }.name(), "");
    }

    #[test]
    fn display_name_joins_parts() {
        let full = Record::new(1).with_name("Ann", "Lee");
        assert_eq!(full.display_name(), "Ann Lee");
        assert!(full.has_full_name());

        let mut first_only = Record::new(2);
        first_only.first_name = Some("Bob".to_string());
        first_only.last_name = Some("  ".to_string());
        assert_eq!(first_only.display_name(), "Bob");
        assert!(!first_only.has_full_name());

        assert_eq!(Record::new(3).display_name(), "");
    }

    #[test]
    fn decode_mixed_skills_and_nulls() {
        let json = r#"{
            "id": 7,
            "firstName": "Cy",
            "lastName": null,
            "skills": ["Rust", {"name": "Go", "level": 3}, {"level": 1}],
            "hourlyRate": "45.50",
            "rating": null,
            "isFeatured": null
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, RecordId::Number(7));
        let names: Vec<&str> = record.skills.iter().map(Skill::name).collect();
        assert_eq!(names, vec!["Rust", "Go", ""]);
        assert_eq!(record.hourly_rate, Some(45.5));
        assert_eq!(record.rating, None);
        assert!(!record.is_featured);
        assert_eq!(record.location, None);
    }

    #[test]
    fn decode_rejects_nothing_for_odd_rates() {
        let json = r#"{"id": "abc", "hourlyRate": "call me", "rating": {"avg": 4}, "skills": null}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, RecordId::Text("abc".to_string()));
        assert_eq!(record.hourly_rate, None);
        assert_eq!(record.rating, None);
        assert!(record.skills.is_empty());
    }

    #[test]
    fn decode_wrong_shapes_as_absent() {
        let json = r#"{
            "firstName": 5,
            "skills": ["Rust", 5, null, {"name": 7}, {"name": "Go"}],
            "createdAt": 1706000000000,
            "isFeatured": "yes",
            "availability": ["full-time"]
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, RecordId::default());
        assert_eq!(record.first_name, None);
        let names: Vec<&str> = record.skills.iter().map(Skill::name).collect();
        assert_eq!(names, vec!["Rust", "", "Go"]);
        assert_eq!(record.created_at.as_deref(), Some("2024-01-23T08:53:20Z"));
        assert!(!record.is_featured);
        assert_eq!(record.availability, None);
    }

    #[test]
    fn record_id_display() {
        assert_eq!(RecordId::from(12).to_string(), "12");
        assert_eq!(RecordId::from("u-1").to_string(), "u-1");
    }
}
