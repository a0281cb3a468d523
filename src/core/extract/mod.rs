//! Extraction of message descriptors from one compilation unit.
//!
//! ## Module Structure
//!
//! - `visitor`: AST visitor recognising `<FormattedMessage>`-style elements
//!   and `defineMessages({...})`-style calls
//! - `rewrite`: Source edits requested by extraction and their applier

pub mod rewrite;
pub mod visitor;


use serde::Serialize;
use swc_ecma_visit::VisitWith;

use crate::config::Config;
use crate::core::data::{MessageDescriptor, SourceLocation};
use crate::core::error::ExtractError;
use crate::core::icu::MessageFormat;
use crate::core::parsers::jsx::ParsedSource;
use crate::core::swc::{ImportTable, ModuleConsts};

pub use rewrite::{Rewrite, apply_rewrites};
pub use visitor::DescriptorVisitor;

/// Names the visitors look for, and the commit policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub module_source_name: String,
    pub component_names: Vec<String>,
    pub plural_component_names: Vec<String>,
    pub function_names: Vec<String>,
    pub enforce_descriptions: bool,
}

impl ExtractOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            module_source_name: config.module_source_name.clone(),
            component_names: config.component_names.clone(),
            plural_component_names: config.plural_component_names.clone(),
            function_names: config.function_names.clone(),
            enforce_descriptions: config.enforce_descriptions,
        }
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Use of a plural component, which is not extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluralComponentWarning {
    pub component: String,
    pub location: SourceLocation,
}

impl PluralComponentWarning {
    pub fn message(&self) -> String {
        format!(
            "Default messages are not extracted from <{}>, use <FormattedMessage> instead.",
            self.component
        )
    }
}

/// Everything extracted from one compilation unit.
#[derive(Debug, Default)]
pub struct UnitExtraction {
    /// Committed descriptors in first-seen order.
    pub messages: Vec<MessageDescriptor>,
    pub warnings: Vec<PluralComponentWarning>,
    pub rewrites: Vec<Rewrite>,
}

/// Extract descriptors from a parsed module.
///
/// Stops at the first fatal error.
pub fn extract_module(
    parsed: &ParsedSource,
    file_path: &str,
    options: &ExtractOptions,
    format: &dyn MessageFormat,
) -> Result<UnitExtraction, ExtractError> {
    let imports = ImportTable::from_module(&parsed.module);
    let consts = ModuleConsts::from_module(&parsed.module);

    let mut visitor = DescriptorVisitor::new(
        file_path,
        &parsed.source_map,
        options,
        format,
        &imports,
        &consts,
    );
    parsed.module.visit_with(&mut visitor);
    visitor.finish()
}
