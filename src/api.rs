use serde::{Deserialize, Deserializer};
use serde_aux::prelude::*;

/// One page of the `/search` endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub page: u32,
    pub page_size: u32,
    pub total_count: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

/// A single course catalog entry.
///
/// Subjects embedded in another subject's metadata are usually partial, so
/// every field falls back to its empty value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Subject {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub code: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub description: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub metadata: Metadata,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub movie_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    #[serde(deserialize_with = "deserialize_string_from_number_or_null")]
    pub enrollment_grade: String,
    #[serde(deserialize_with = "deserialize_string_from_number_or_null")]
    pub credit: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub quarters: Vec<String>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub subject_requirement: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub teaching_method: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub evaluation_system: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub prerequisite_recommended_subjects: Vec<Subject>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub prerequisite_subjects: Vec<Subject>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub next_recommended_subjects: Vec<Subject>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub objective: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub text_books: Vec<TextBook>,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub learning_outside_class: String,
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub special_notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextBook {
    #[serde(deserialize_with = "deserialize_default_from_null")]
    pub title: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Like serde-aux's `deserialize_string_from_number`, but `null` reads as "".
fn deserialize_string_from_number_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Integer(n)) => n.to_string(),
        Some(Scalar::Float(n)) => n.to_string(),
    })
}
