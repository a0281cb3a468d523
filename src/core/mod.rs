//! Extraction and catalog engine.
//!
//! ## Pipeline
//!
//! 1. **Scan**: `file_scanner` lists the source files to process.
//! 2. **Parse**: `parsers::jsx` turns each file into an swc module (parallel).
//! 3. **Extract**: `extract` walks one module, resolving descriptor values
//!    through `swc` (the `host` port), validating messages with `icu`,
//!    building descriptors with `builder` and committing them to a `store`.
//! 4. **Catalog**: `context::Extractor` merges each unit into the build's
//!    `catalog::TranslationTable` and rewrites the catalog file.
//!
//! Units are extracted one at a time, in sorted path order.

pub mod builder;
pub mod catalog;
pub mod context;
pub mod data;
pub mod error;
pub mod evaluate;
pub mod extract;
pub mod file_scanner;
pub mod host;
pub mod icu;
pub mod parsers;
pub mod store;
pub mod swc;

pub use catalog::{TranslationEntry, TranslationTable};
pub use context::{CatalogMode, Extractor, UnitOutput};
pub use data::{MessageDescriptor, PartialDescriptor, SourceContext, SourceLocation};
pub use error::{ExtractError, ExtractErrorKind};
pub use extract::{ExtractOptions, PluralComponentWarning, Rewrite};
pub use store::CatalogStore;
