//! Build-wide translation table and its `.properties` rendering.
//!
//! The table outlives compilation units: every unit with descriptors is
//! merged into it, and the catalog file is re-rendered from the whole table.
//! Extraction within one table is therefore cumulative. Callers own the
//! table and decide its lifetime, normally one per build invocation.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::data::MessageDescriptor;
use crate::utils::{collapse_whitespace, in_namespace};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationEntry {
    pub value: String,
    pub comment: String,
}

#[derive(Debug, Default)]
pub struct TranslationTable {
    entries: BTreeMap<String, TranslationEntry>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert in-namespace descriptors, collapsing whitespace runs in the
    /// message and description. Returns the number of entries written.
    pub fn merge(&mut self, descriptors: &[MessageDescriptor], namespace: Option<&str>) -> usize {
        let mut merged = 0;
        for descriptor in descriptors {
            if !in_namespace(&descriptor.id, namespace) {
                continue;
            }
            let comment = descriptor
                .description
                .as_deref()
                .map(|d| collapse_whitespace(d.trim()))
                .unwrap_or_default();
            self.entries.insert(
                descriptor.id.clone(),
                TranslationEntry {
                    value: collapse_whitespace(&descriptor.default_message),
                    comment,
                },
            );
            merged += 1;
        }
        merged
    }

    /// Render every entry, sorted by key, as `# comment` / `key = value`
    /// blocks separated by a blank line.
    ///
    /// Keys sort by UTF-16 code units, the order JavaScript's default sort
    /// gives. It differs from byte order only for characters above U+FFFF.
    pub fn render(&self) -> String {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));

        entries
            .into_iter()
            .map(|(key, entry)| {
                let comment = if entry.comment.is_empty() {
                    "#".to_string()
                } else {
                    format!("# {}", entry.comment)
                };
                format!("{}\n{} = {}\n", comment, key, entry.value)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Create `dir` if needed and rewrite `dir/file_name` from the table.
    pub fn write_to(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create messages directory: {:?}", dir))?;

        let path = dir.join(file_name);
        let mut file =
            File::create(&path).with_context(|| format!("Failed to write catalog: {:?}", path))?;
        file.write_all(self.render().as_bytes())
            .with_context(|| format!("Failed to write catalog: {:?}", path))?;
        Ok(path)
    }

    pub fn get(&self, id: &str) -> Option<&TranslationEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
