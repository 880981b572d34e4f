//! Wire models for the Open Library JSON API.
//!
//! These types mirror the remote payloads and are kept separate from the domain
//! [`Book`](crate::domain::Book) so the wire format can change without touching
//! the presentation layer. Every field the API may omit is optional.

use serde::{Deserialize, Serialize};

/// Response of `GET /search.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponseDto {
    /// Matching works, in relevance order.
    #[serde(rename = "docs", default)]
    pub results: Vec<SearchedBookDto>,
}

/// One entry of a search response.
///
/// Field names follow the `fields=` projection requested by
/// [`HttpRemoteBookDataSource`](crate::data::network::HttpRemoteBookDataSource).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchedBookDto {
    /// Work key, e.g. `/works/OL45804W`.
    #[serde(rename = "key")]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(rename = "language")]
    pub languages: Option<Vec<String>>,

    /// Numeric cover id, used when no edition key is available.
    #[serde(rename = "cover_i")]
    pub cover_alternative_key: Option<i64>,

    #[serde(rename = "author_key")]
    pub author_keys: Option<Vec<String>>,

    #[serde(rename = "author_name")]
    pub author_names: Option<Vec<String>>,

    /// Edition OLID whose cover is preferred.
    #[serde(rename = "cover_edition_key")]
    pub cover_key: Option<String>,

    pub first_publish_year: Option<i32>,

    pub ratings_average: Option<f64>,

    pub ratings_count: Option<u32>,

    #[serde(rename = "number_of_pages_median")]
    pub num_pages_median: Option<u32>,

    #[serde(rename = "edition_count")]
    pub num_editions: Option<u32>,
}

/// Response of `GET /works/{id}.json`, reduced to the fields the app reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookWorkDto {
    #[serde(default, deserialize_with = "deserialize_description")]
    pub description: Option<String>,
}

/// The two shapes the catalog uses for descriptions.
#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptionDto {
    Plain(String),
    Typed { value: String },
}

fn deserialize_description<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<DescriptionDto>::deserialize(deserializer)?;
    Ok(raw.map(|description| match description {
        DescriptionDto::Plain(text) | DescriptionDto::Typed { value: text } => text,
    }))
}
