use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::config::{
    DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_JOURNAL, DEFAULT_TITLE, DEFAULT_URL, DEFAULT_YEAR,
};

// ============================================================================
// Response wire format
// ============================================================================

/// Top-level body returned by the search backend.
///
/// Only the parts the client reads are modelled. Everything else in the body
/// (`took`, `_shards`, `hits.total`, ...) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    pub hits: HitsEnvelope,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitsEnvelope {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// One raw search hit, prior to normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Hit {
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source", default)]
    pub source: HitSource,
}

/// Stored document fields of a hit. Any of them may be absent, null or of
/// an unexpected shape; such values read as `None` and get the fallback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitSource {
    #[serde(default, deserialize_with = "lenient")]
    pub publication_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(rename = "abstract", default, deserialize_with = "lenient")]
    pub abstract_text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub journal: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub publication_year: Option<Year>,
    #[serde(default, deserialize_with = "lenient_authors")]
    pub authors: Option<Authors>,
}

/// Read any JSON value, keeping it only if it has the shape of `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Like [`lenient`], but a list keeps its string entries and drops the rest.
fn lenient_authors<'de, D>(deserializer: D) -> Result<Option<Authors>, D::Error>
where
    D: Deserializer<'de>,
{
    let authors = match Value::deserialize(deserializer)? {
        Value::String(name) => Some(Authors::Single(name)),
        Value::Array(entries) => Some(Authors::List(
            entries
                .into_iter()
                .filter_map(|entry| match entry {
                    Value::String(name) => Some(name),
                    _ => None,
                })
                .collect(),
        )),
        _ => None,
    };
    Ok(authors)
}

impl SearchResponse {
    /// Normalize every hit, keeping backend order.
    pub fn into_items(self) -> Vec<SearchResultItem> {
        self.hits
            .hits
            .into_iter()
            .map(SearchResultItem::from)
            .collect()
    }
}

// ============================================================================
// Loosely typed fields
// ============================================================================

/// Publication year as the index stores it: sometimes numeric, sometimes text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(f64),
    Text(String),
}

impl Year {
    fn is_blank(&self) -> bool {
        match self {
            Year::Number(n) => *n == 0.0 || n.is_nan(),
            Year::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Author field: either a single preformatted string or a list of names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Authors {
    List(Vec<String>),
    Single(String),
}

impl Authors {
    fn is_blank(&self) -> bool {
        match self {
            Authors::List(names) => names.iter().all(|n| n.trim().is_empty()),
            Authors::Single(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for Authors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Authors::List(names) => write!(f, "{}", names.join(", ")),
            Authors::Single(s) => write!(f, "{}", s),
        }
    }
}

// ============================================================================
// Normalized record
// ============================================================================

/// A search hit normalized for display.
///
/// Missing or blank source fields are replaced by the fallbacks in
/// [`crate::config`], so the views never have to deal with absent values.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultItem {
    pub url: String,
    pub title: String,
    pub description: String,
    pub score: f64,
    pub journal: String,
    pub year: Year,
    pub authors: Authors,
}

impl SearchResultItem {
    /// Relevance score with two decimals, e.g. `"12.35"`.
    pub fn score_label(&self) -> String {
        format!("{:.2}", self.score)
    }
}

impl From<Hit> for SearchResultItem {
    fn from(hit: Hit) -> Self {
        let source = hit.source;
        Self {
            url: text_or(source.publication_url, DEFAULT_URL),
            title: text_or(source.title, DEFAULT_TITLE),
            description: text_or(source.abstract_text, DEFAULT_DESCRIPTION),
            score: hit.score.unwrap_or(0.0),
            journal: text_or(source.journal, DEFAULT_JOURNAL),
            year: source
                .publication_year
                .filter(|y| !y.is_blank())
                .unwrap_or_else(|| Year::Text(DEFAULT_YEAR.to_string())),
            authors: source
                .authors
                .filter(|a| !a.is_blank())
                .unwrap_or_else(|| Authors::List(vec![DEFAULT_AUTHOR.to_string()])),
        }
    }
}

fn text_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
