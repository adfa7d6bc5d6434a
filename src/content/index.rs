//! Content index - the aggregated metadata of every content file
//!
//! The index is rebuilt from scratch on every run, written to `posts.json`
//! and read back by the page builders.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{ContentRecord, FrontMatter};
use crate::config::SortBy;
use crate::error::{fs, Error, Result};

/// File name of the persisted index inside the data directory
pub const INDEX_FILE: &str = "posts.json";

/// Ordered mapping from file name to metadata, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentIndex {
    entries: IndexMap<String, FrontMatter>,
}

impl ContentIndex {
    /// Assemble the index from parsed records.
    ///
    /// A repeated file name replaces the earlier entry.
    pub fn build(records: &[ContentRecord], sort_by: SortBy) -> Result<Self> {
        let mut entries: IndexMap<String, FrontMatter> = IndexMap::new();
        for record in records {
            entries.insert(record.filename.clone(), record.meta.clone());
        }

        match sort_by {
            SortBy::Filename => entries.sort_by(|a, _, b, _| b.cmp(a)),
            SortBy::Date => {
                let mut dated = Vec::with_capacity(entries.len());
                for (name, meta) in entries {
                    let date = meta.parse_date().ok_or_else(|| Error::InvalidDate {
                        file: name.clone(),
                        date: meta.date().to_string(),
                    })?;
                    dated.push((date, name, meta));
                }
                dated.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
                entries = dated
                    .into_iter()
                    .map(|(_, name, meta)| (name, meta))
                    .collect();
            }
        }

        Ok(Self { entries })
    }

    /// Write the index as compact JSON, replacing any existing file.
    ///
    /// Each entry is the metadata block exactly as its author wrote it.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string(self)?;
        fs::write(path, json)?;
        tracing::debug!("Wrote content index: {:?}", path);
        Ok(())
    }

    /// Read a persisted index, keeping its order
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, filename: &str) -> Option<&FrontMatter> {
        self.entries.get(filename)
    }

    /// Entries in index order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrontMatter)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(filename: &str, date: &str) -> ContentRecord {
        let content = format!(
            "-----\n{{\"title\":\"{}\",\"date\":\"{}\",\"tags\":[]}}\n-----\nbody",
            filename, date
        );
        ContentRecord::parse(filename, &content).unwrap()
    }

    #[test]
    fn test_sorted_by_filename_descending() {
        let records = vec![
            record("20240101-a.md", "2024-01-01"),
            record("20240301-b.md", "2024-03-01"),
            record("20231115-c.md", "2023-11-15"),
        ];
        let index = ContentIndex::build(&records, SortBy::Filename).unwrap();
        let names: Vec<_> = index.filenames().collect();
        assert_eq!(names, vec!["20240301-b.md", "20240101-a.md", "20231115-c.md"]);
    }

    #[test]
    fn test_sorted_by_date() {
        // File names disagree with the dates on purpose
        let records = vec![
            record("a.md", "2024-01-01"),
            record("b.md", "2022-06-30"),
            record("c.md", "2024-01-01"),
        ];
        let index = ContentIndex::build(&records, SortBy::Date).unwrap();
        let names: Vec<_> = index.filenames().collect();
        assert_eq!(names, vec!["c.md", "a.md", "b.md"]);
    }

    #[test]
    fn test_bad_date_fails_date_sort() {
        let records = vec![record("a.md", "soon")];
        assert!(matches!(
            ContentIndex::build(&records, SortBy::Date),
            Err(Error::InvalidDate { .. })
        ));
        assert!(ContentIndex::build(&records, SortBy::Filename).is_ok());
    }

    #[test]
    fn test_duplicate_filename_last_write_wins() {
        let second = ContentRecord::parse(
            "20240101-a.md",
            "-----\n{\"title\":\"replacement\",\"date\":\"2024-01-01\",\"tags\":[]}\n-----\nbody",
        )
        .unwrap();
        let records = vec![record("20240101-a.md", "2024-01-01"), second];
        let index = ContentIndex::build(&records, SortBy::Filename).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("20240101-a.md").unwrap().title(), "replacement");
    }

    #[test]
    fn test_save_and_load_keep_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(INDEX_FILE);
        let records = vec![
            record("20220101-x.md", "2022-01-01"),
            record("20240101-y.md", "2024-01-01"),
        ];
        let index = ContentIndex::build(&records, SortBy::Filename).unwrap();
        index.save(&path).unwrap();

        let loaded = ContentIndex::load(&path).unwrap();
        assert_eq!(loaded, index);
        let names: Vec<_> = loaded.filenames().collect();
        assert_eq!(names, vec!["20240101-y.md", "20220101-x.md"]);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.find("20240101-y.md").unwrap() < raw.find("20220101-x.md").unwrap());
    }

    #[test]
    fn test_saved_entries_match_author_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(INDEX_FILE);
        let block = r#"{"date":"2024-01-01","title":"t","tags":["a"],"featured":null,"readTime":"2 min"}"#;
        let records = vec![ContentRecord::parse(
            "20240101-t.md",
            &format!("-----\n{}\n-----\nbody", block),
        )
        .unwrap()];
        ContentIndex::build(&records, SortBy::Filename)
            .unwrap()
            .save(&path)
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            format!(r#"{{"20240101-t.md":{}}}"#, block)
        );
        let loaded = ContentIndex::load(&path).unwrap();
        let keys: Vec<_> = loaded
            .get("20240101-t.md")
            .unwrap()
            .as_map()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["date", "title", "tags", "featured", "readTime"]);
    }
}
