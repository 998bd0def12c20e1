//! Document collections
//!
//! Sources of labeled or unlabeled documents the filter trains on and
//! evaluates against. A directory of plain files is the usual source;
//! [`MemoryCollection`] holds documents built in code.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{BayesError, Result};

/// A document: ordered lines of raw text
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// File name or caller-chosen identifier
    pub name: String,
    pub lines: Vec<String>,
}

impl Document {
    /// Create a document from its lines
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Create a document by splitting text into lines
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, text.lines().map(str::to_string).collect())
    }

    /// Read a document from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| BayesError::Collection {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        // Non-UTF-8 bytes can only decode to non-letters, which the
        // tokenizer treats as separators anyway.
        Ok(Self::from_text(name, &String::from_utf8_lossy(&bytes)))
    }
}

/// A source of documents
pub trait DocumentCollection {
    /// Human readable name used in logs and reports
    fn name(&self) -> String;

    /// Load every document of the collection
    fn documents(&self) -> Result<Vec<Document>>;
}

/// Every regular file in a directory is one document
#[derive(Debug, Clone)]
pub struct DirectoryCollection {
    path: PathBuf,
}

impl DirectoryCollection {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> BayesError {
        BayesError::Collection {
            path: self.path.clone(),
            source,
        }
    }
}

impl DocumentCollection for DirectoryCollection {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn documents(&self) -> Result<Vec<Document>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.path).map_err(|e| self.io_error(e))? {
            let path = entry.map_err(|e| self.io_error(e))?.path();

            // Follows symlinks, so a link to a directory is skipped too
            if path.is_dir() {
                debug!("Skipping subdirectory {}", path.display());
                continue;
            }
            files.push(path);
        }

        // Directory order is platform dependent
        files.sort();

        let documents = files
            .iter()
            .map(|path| Document::from_file(path))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Loaded {} documents from {}",
            documents.len(),
            self.path.display()
        );

        Ok(documents)
    }
}

/// Documents held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCollection {
    name: String,
    documents: Vec<Document>,
}

impl MemoryCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documents: Vec::new(),
        }
    }

    /// Add a document built from text
    pub fn with_text(mut self, text: &str) -> Self {
        let name = format!("{}-{}", self.name, self.documents.len() + 1);
        self.documents.push(Document::from_text(name, text));
        self
    }

    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentCollection for MemoryCollection {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn documents(&self) -> Result<Vec<Document>> {
        Ok(self.documents.clone())
    }
}
