//! Collection importer - main conversion logic
//!
//! Drives the four conversion stages: flatten the folder tree, classify
//! each leaf, normalize bodies and parameters, and assemble the target
//! collection envelope. Conversion is pure and synchronous; either a
//! complete collection is produced or the import fails with an error,
//! never a partial result.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tern_domain::{Collection, CollectionItem};

use crate::error::{ImportError, ImportResult};
use crate::flatten::flatten_items;
use crate::source::{SourceCollection, SourceItem};
use crate::warning::ImportWarning;

/// Import configuration options.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Maximum document size in bytes (default: 10MB)
    pub max_file_size: usize,
    /// Maximum number of tree nodes, folders included (default: 1000)
    pub max_items: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_items: 1000,
        }
    }
}

/// Result of validating a document before import.
#[derive(Debug)]
pub struct ValidationResult {
    /// Whether the document can be imported
    pub is_valid: bool,
    /// List of validation issues found
    pub issues: Vec<String>,
}

/// Preview of what an import would produce, without committing to a
/// conversion (no timestamps are assigned).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportPreview {
    /// Collection name from the info block
    pub collection_name: String,
    /// Number of HTTP request items that would be produced
    pub request_count: usize,
    /// Number of WebSocket items that would be produced
    pub websocket_count: usize,
    /// Number of leaves skipped for unsupported methods
    pub skipped_count: usize,
    /// Warnings generated during preview
    pub warnings: Vec<ImportWarning>,
}

/// A converted collection together with non-fatal findings.
#[derive(Debug)]
pub struct ImportOutcome {
    /// The assembled collection
    pub collection: Collection,
    /// Skipped-item and fallback diagnostics
    pub warnings: Vec<ImportWarning>,
}

/// Converts source collection export documents into the canonical model.
pub struct CollectionImporter {
    config: ImportConfig,
}

impl CollectionImporter {
    /// Create a new importer with default config.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ImportConfig::default(),
        }
    }

    /// Create a new importer with custom config.
    #[must_use]
    pub const fn with_config(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Validate a document before importing.
    #[must_use]
    pub fn validate(&self, content: &str) -> ValidationResult {
        let mut issues = Vec::new();

        if content.len() > self.config.max_file_size {
            issues.push(format!(
                "document size ({} bytes) exceeds maximum ({} bytes)",
                content.len(),
                self.config.max_file_size
            ));
            return ValidationResult {
                is_valid: false,
                issues,
            };
        }

        let json: serde_json::Value = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(e) => {
                issues.push(format!("invalid JSON: {e}"));
                return ValidationResult {
                    is_valid: false,
                    issues,
                };
            }
        };

        match serde_json::from_value::<SourceCollection>(json) {
            Ok(source) => {
                let count = count_items(&source.item);
                if count > self.config.max_items {
                    issues.push(format!(
                        "too many items: {} exceeds maximum of {}",
                        count, self.config.max_items
                    ));
                }
            }
            Err(e) => issues.push(format!("invalid collection format: {e}")),
        }

        ValidationResult {
            is_valid: issues.is_empty(),
            issues,
        }
    }

    /// Preview what an import of `content` would produce.
    ///
    /// # Errors
    ///
    /// Fails with the same errors as [`Self::import_str`]; a preview of a
    /// document that cannot be imported is not meaningful.
    pub fn preview(&self, content: &str) -> ImportResult<ImportPreview> {
        let outcome = self.import_str(content)?;
        let (request_count, websocket_count) = count_variants(&outcome.collection.items);

        Ok(ImportPreview {
            collection_name: outcome.collection.name,
            request_count,
            websocket_count,
            skipped_count: outcome.warnings.len(),
            warnings: outcome.warnings,
        })
    }

    /// Parse and import a collection export document.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::FileTooLarge`] or [`ImportError::InvalidJson`]
    /// / [`ImportError::InvalidFormat`] for documents that cannot be read,
    /// plus every error [`Self::import`] can produce.
    pub fn import_str(&self, content: &str) -> ImportResult<ImportOutcome> {
        if content.len() > self.config.max_file_size {
            return Err(ImportError::FileTooLarge {
                size: content.len(),
                max: self.config.max_file_size,
            });
        }

        let json: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ImportError::InvalidJson(e.to_string()))?;
        let source: SourceCollection =
            serde_json::from_value(json).map_err(|e| ImportError::InvalidFormat(e.to_string()))?;

        self.import(&source)
    }

    /// Import an already-parsed source collection.
    ///
    /// Pure and synchronous: no I/O, no shared state, each call is a
    /// function of its input plus the conversion wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::TooManyItems`] when the tree exceeds the
    /// configured limit, [`ImportError::StructuralValidation`] for leaves
    /// without a request object, and [`ImportError::MalformedBody`] for
    /// `raw` bodies that are not valid JSON. No partial collection is
    /// emitted on any of these.
    pub fn import(&self, source: &SourceCollection) -> ImportResult<ImportOutcome> {
        let count = count_items(&source.item);
        if count > self.config.max_items {
            return Err(ImportError::TooManyItems {
                count,
                max: self.config.max_items,
            });
        }

        let now = Utc::now();
        let mut items = Vec::new();
        let mut warnings = Vec::new();

        for leaf in flatten_items(&source.item, "") {
            if let Some(item) = crate::classify::classify_leaf(&leaf, now, &mut warnings)? {
                items.push(item);
            }
        }

        tracing::debug!(
            collection = %source.info.name,
            items = items.len(),
            skipped = warnings.len(),
            "collection import converted"
        );

        Ok(ImportOutcome {
            collection: Collection {
                name: source.info.name.clone(),
                description: source.info.description.clone(),
                total_requests: items.len(),
                items,
                created_at: now,
                updated_at: now,
            },
            warnings,
        })
    }
}

impl Default for CollectionImporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts tree nodes recursively, folders included.
fn count_items(items: &[SourceItem]) -> usize {
    let mut count = items.len();
    for item in items {
        if let Some(children) = item.item.as_ref() {
            count += count_items(children);
        }
    }
    count
}

fn count_variants(items: &[CollectionItem]) -> (usize, usize) {
    let mut requests = 0;
    let mut websockets = 0;
    for item in items {
        match item {
            CollectionItem::Request(_) => requests += 1,
            CollectionItem::WebSocket(_) => websockets += 1,
        }
    }
    (requests, websockets)
}
