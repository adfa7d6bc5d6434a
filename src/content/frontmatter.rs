//! Front-matter parsing
//!
//! A content file looks like this:
//!
//! ```text
//! -----
//! { "title": "hello world", "date": "2024-03-01", "tags": ["rust"],
//!   "readTime": "4 min", "featured": true, "summary": "..." }
//! -----
//! Markdown body...
//! ```
//!
//! The file is split on the delimiter; the second segment is the JSON
//! metadata and the third is the body.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Separates the metadata block from the body
pub const DELIMITER: &str = "-----";

/// Keys every metadata block must carry
#[derive(Deserialize)]
struct Required {
    title: String,
    date: String,
    tags: Vec<String>,
}

/// Metadata block of a content file.
///
/// The block is kept exactly as the author wrote it (key order, `null`s and
/// unknown keys included) and is serialized back from that map. `title`,
/// `date` and `tags` are required; every other key is read leniently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct FrontMatter {
    title: String,
    date: String,
    tags: Vec<String>,
    raw: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for FrontMatter {
    type Error = serde_json::Error;

    fn try_from(raw: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let required: Required = serde_json::from_value(Value::Object(raw.clone()))?;
        Ok(Self {
            title: required.title,
            date: required.date,
            tags: required.tags,
            raw,
        })
    }
}

impl From<FrontMatter> for Map<String, Value> {
    fn from(meta: FrontMatter) -> Self {
        meta.raw
    }
}

impl FrontMatter {
    /// Parse front-matter from a content file.
    /// Returns (front_matter, body)
    ///
    /// `file` only labels errors.
    pub fn parse<'a>(content: &'a str, file: &str) -> Result<(Self, &'a str)> {
        let (meta, body) = split(content, file)?;
        let fm = serde_json::from_str(meta).map_err(|source| Error::FrontMatter {
            file: file.to_string(),
            source,
        })?;
        Ok((fm, body))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Any key of the block, as written
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// The whole block, in the author's key order
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Only a literal `true` marks a post as featured
    pub fn is_featured(&self) -> bool {
        self.get("featured").and_then(Value::as_bool) == Some(true)
    }

    /// Summary for cards; empty when absent
    pub fn summary(&self) -> String {
        self.label("summary")
    }

    /// Reading time rendered for templates; empty when absent
    pub fn read_time_label(&self) -> String {
        self.label("readTime")
    }

    /// Parse the date string into a NaiveDateTime
    pub fn parse_date(&self) -> Option<NaiveDateTime> {
        parse_date_string(&self.date)
    }

    fn label(&self, key: &str) -> String {
        match self.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Split raw file contents into (metadata, body).
///
/// Exactly two delimiters must be present. Anything else is an authoring
/// error and aborts the build.
pub fn split<'a>(content: &'a str, file: &str) -> Result<(&'a str, &'a str)> {
    let segments: Vec<&str> = content.split(DELIMITER).collect();
    match segments.as_slice() {
        [_, meta, body] => Ok((*meta, *body)),
        _ => Err(Error::Delimiter {
            file: file.to_string(),
            found: segments.len() - 1,
        }),
    }
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y%m%d",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
        // Try parsing date only
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc())
}
