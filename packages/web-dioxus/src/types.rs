//! Type definitions for the listings REST API
//!
//! Wire names follow the backend's JSON (`posisi`, `mulaiMagang`, ...). Fields
//! that the backend may send in several shapes are normalized here, at the
//! decode boundary, so rendering code never re-checks them.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend identifier of a listing.
pub type ListingId = i64;

// ============================================================================
// List-valued fields
// ============================================================================

/// A list-valued display field (duties, requirements, benefits).
///
/// The backend sends these as absent, `null`, a single string or a list of
/// strings. All shapes decode into an ordered list:
///
/// - absent / `null` → empty
/// - string → one entry, or empty when the string is blank
/// - list → as given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ListField(Vec<String>);

impl ListField {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

impl From<Vec<String>> for ListField {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

impl From<&str> for ListField {
    fn from(item: &str) -> Self {
        if item.trim().is_empty() {
            Self::default()
        } else {
            Self(vec![item.to_string()])
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawListField {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for ListField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawListField>::deserialize(deserializer)? {
            None => Self::default(),
            Some(RawListField::One(item)) => Self::from(item.as_str()),
            Some(RawListField::Many(items)) => Self(items),
        })
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Quota
// ============================================================================

/// Opening count exactly as the backend sent it.
///
/// Kept as a JSON number (`3`, `2.0`, `-1`) or a string (`"3"`) so one odd
/// record never fails the whole listing fetch. Absent / `null` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quota {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Quota {
    fn default() -> Self {
        Quota::Text(String::new())
    }
}

impl fmt::Display for Quota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quota::Number(n) => write!(f, "{n}"),
            Quota::Text(s) => f.write_str(s),
        }
    }
}

fn quota_or_empty<'de, D>(deserializer: D) -> Result<Quota, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Quota>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Listing Types
// ============================================================================

/// A draft job listing ("lowongan") owned by the current company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lowongan {
    pub id: ListingId,

    #[serde(rename = "posisi", default, deserialize_with = "string_or_empty")]
    pub position: String,

    #[serde(rename = "deskripsi", default, deserialize_with = "string_or_empty")]
    pub description: String,

    #[serde(rename = "kuota", default, deserialize_with = "quota_or_empty")]
    pub quota: Quota,

    #[serde(rename = "deadline_lamaran", default, deserialize_with = "string_or_empty")]
    pub application_deadline: String,

    #[serde(rename = "mulaiMagang", default, deserialize_with = "string_or_empty")]
    pub internship_start: String,

    #[serde(rename = "selesaiMagang", default, deserialize_with = "string_or_empty")]
    pub internship_end: String,

    #[serde(rename = "lokasi_penempatan", default, deserialize_with = "string_or_empty")]
    pub placement_location: String,

    #[serde(rename = "tugas", default)]
    pub duties: ListField,

    #[serde(rename = "persyaratan", default)]
    pub requirements: ListField,

    #[serde(rename = "keuntungan", default)]
    pub benefits: ListField,
}

// ============================================================================
// Response Wrappers
// ============================================================================

/// Body of the draft listings endpoint: either a bare array or `{ "data": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListingsPayload {
    Bare(Vec<Lowongan>),
    Wrapped { data: Vec<Lowongan> },
}

impl ListingsPayload {
    pub fn into_listings(self) -> Vec<Lowongan> {
        match self {
            ListingsPayload::Bare(listings) => listings,
            ListingsPayload::Wrapped { data } => data,
        }
    }
}
