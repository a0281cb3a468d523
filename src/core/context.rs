//! Build-level extraction state.
//!
//! An [`Extractor`] lives for one build invocation. It owns the translation
//! table that every compilation unit merges into, so ids seen by earlier units
//! stay in the catalog for later ones. A new `Extractor` starts empty.
//!
//! [`ProjectContext`] drives an `Extractor` over a whole source tree: files
//! are read and parsed in parallel, then extracted one at a time in sorted
//! order until the first fatal error.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;
use swc_common::SourceMap;
use tracing::debug;

use crate::config::{Config, ConfigOverrides, load_config};
use crate::core::catalog::TranslationTable;
use crate::core::data::MessageDescriptor;
use crate::core::error::ExtractError;
use crate::core::extract::{
    ExtractOptions, PluralComponentWarning, Rewrite, apply_rewrites, extract_module,
};
use crate::core::file_scanner::scan_files;
use crate::core::icu::{IcuMessageFormat, MessageFormat};
use crate::core::parsers::jsx::{ParsedSource, parse_jsx_source};
use crate::issues::{ExtractFailureIssue, Issue, ParseErrorIssue, PluralComponentIssue};

/// What happens to the catalog after each unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogMode {
    /// Merge into the table and rewrite the catalog file, when a
    /// `messagesDir` is configured.
    Write,
    /// Merge into the table only. Nothing touches the filesystem.
    DryRun,
}

/// Result of extracting one compilation unit.
#[derive(Debug)]
pub struct UnitOutput {
    pub file_path: String,
    /// Descriptors in first-seen order, the unit's metadata.
    pub messages: Vec<MessageDescriptor>,
    pub warnings: Vec<PluralComponentWarning>,
    pub rewrites: Vec<Rewrite>,
    source: String,
}

impl UnitOutput {
    /// The unit's source with descriptions stripped and descriptor objects
    /// replaced.
    pub fn rewritten_source(&self) -> String {
        apply_rewrites(&self.source, &self.rewrites)
    }
}

pub struct Extractor {
    options: ExtractOptions,
    namespace: Option<String>,
    catalog_dir: Option<PathBuf>,
    catalog_file_name: String,
    mode: CatalogMode,
    format: Box<dyn MessageFormat + Send + Sync>,
    table: TranslationTable,
    source_map: Arc<SourceMap>,
}

impl Extractor {
    /// Create an extractor for the project at `root`.
    pub fn new(config: &Config, root: &Path, mode: CatalogMode) -> Self {
        Self {
            options: ExtractOptions::from_config(config),
            namespace: config.effective_namespace().map(String::from),
            catalog_dir: config.resolve_messages_dir(root),
            catalog_file_name: config.catalog_file_name(),
            mode,
            format: Box::new(IcuMessageFormat),
            table: TranslationTable::new(),
            source_map: Arc::default(),
        }
    }

    /// Replace the message-format validator.
    pub fn with_format(mut self, format: Box<dyn MessageFormat + Send + Sync>) -> Self {
        self.format = format;
        self
    }

    /// Source map shared by every unit parsed for this extractor.
    pub fn source_map(&self) -> Arc<SourceMap> {
        Arc::clone(&self.source_map)
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Where the catalog is written, if a `messagesDir` is configured.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_dir
            .as_ref()
            .map(|dir| dir.join(&self.catalog_file_name))
    }

    /// Forget every id merged so far.
    pub fn reset(&mut self) {
        self.table.reset();
    }

    pub fn into_table(self) -> TranslationTable {
        self.table
    }

    /// Parse and extract one unit.
    pub fn extract_source(&mut self, file_path: &str, code: String) -> Result<UnitOutput> {
        let parsed = parse_jsx_source(code, file_path, self.source_map())?;
        self.extract_parsed(file_path, &parsed)
    }

    /// Extract one already-parsed unit and fold its descriptors into the
    /// catalog.
    ///
    /// A fatal extraction error comes back as an [`ExtractError`] inside the
    /// `anyhow::Error`; nothing from the failing unit is merged.
    ///
    /// [`ExtractError`]: crate::core::error::ExtractError
    pub fn extract_parsed(&mut self, file_path: &str, parsed: &ParsedSource) -> Result<UnitOutput> {
        let unit = extract_module(parsed, file_path, &self.options, self.format.as_ref())?;
        debug!(
            file = file_path,
            messages = unit.messages.len(),
            warnings = unit.warnings.len(),
            "extracted unit"
        );

        self.finish_unit(&unit.messages)?;

        Ok(UnitOutput {
            file_path: file_path.to_string(),
            messages: unit.messages,
            warnings: unit.warnings,
            rewrites: unit.rewrites,
            source: parsed.code.clone(),
        })
    }

    fn finish_unit(&mut self, messages: &[MessageDescriptor]) -> Result<()> {
        if messages.is_empty() {
            return Ok(());
        }

        match self.mode {
            CatalogMode::DryRun => {
                self.table.merge(messages, self.namespace.as_deref());
            }
            CatalogMode::Write => {
                let Some(dir) = &self.catalog_dir else {
                    return Ok(());
                };
                let merged = self.table.merge(messages, self.namespace.as_deref());
                let path = self.table.write_to(dir, &self.catalog_file_name)?;
                debug!(
                    path = %path.display(),
                    merged,
                    total = self.table.len(),
                    "wrote catalog"
                );
            }
        }
        Ok(())
    }
}

/// Everything one run over the source tree produced.
pub struct ExtractionRun {
    /// Units extracted successfully, in processing order.
    pub units: Vec<UnitOutput>,
    /// Non-fatal issues: plural component warnings and unparseable files.
    pub issues: Vec<Issue>,
    /// The error that stopped the run, if any.
    pub failure: Option<ExtractFailureIssue>,
    pub table: TranslationTable,
    pub catalog_path: Option<PathBuf>,
}

impl ExtractionRun {
    pub fn message_count(&self) -> usize {
        self.units.iter().map(|u| u.messages.len()).sum()
    }

    /// All issues, the failure included, sorted for reporting.
    pub fn all_issues(&self) -> Vec<Issue> {
        let mut issues = self.issues.clone();
        if let Some(failure) = &self.failure {
            issues.push(Issue::ExtractFailure(failure.clone()));
        }
        issues.sort();
        issues
    }
}

/// A project: its merged configuration and the source files to process.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--messages-dir i18n`)
/// 2. `.intlxrc.json` config file
/// 3. Built-in defaults
pub struct ProjectContext {
    pub config: Config,
    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,
    /// True if the config came from a file.
    pub config_from_file: bool,
    /// Source files in processing order.
    pub files: BTreeSet<String>,
    pub verbose: bool,
}

impl ProjectContext {
    /// Load the config found from `root_dir`, apply `overrides` and scan
    /// for source files.
    pub fn new(root_dir: &Path, overrides: &ConfigOverrides, verbose: bool) -> Result<Self> {
        let config_result = load_config(root_dir)?;

        if verbose && !config_result.from_file {
            eprintln!("Note: No .intlxrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        overrides.apply(&mut config);
        config
            .validate()
            .with_context(|| anyhow!("Invalid configuration for {}", root_dir.display()))?;

        let scan_result = scan_files(
            root_dir,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }
        debug!(
            root = %root_dir.display(),
            files = scan_result.files.len(),
            "scanned sources"
        );

        Ok(Self {
            config,
            root_dir: root_dir.to_path_buf(),
            config_from_file: config_result.from_file,
            files: scan_result.files,
            verbose,
        })
    }

    /// Read and parse every source file in parallel.
    ///
    /// Each file gets its own `SourceMap`, so workers share nothing. Results
    /// come back in processing order; unreadable or unparseable files become
    /// [`ParseErrorIssue`]s.
    pub fn parse_files(&self) -> (Vec<(String, ParsedSource)>, Vec<ParseErrorIssue>) {
        let files: Vec<&String> = self.files.iter().collect();
        let results: Vec<_> = files
            .par_iter()
            .map(|file_path| {
                let parsed = std::fs::read_to_string(file_path.as_str())
                    .map_err(|e| anyhow!("Failed to read file: {}", e))
                    .and_then(|code| {
                        parse_jsx_source(code, file_path, Arc::new(SourceMap::default()))
                    });
                (file_path.to_string(), parsed)
            })
            .collect();

        let mut parsed = Vec::new();
        let mut errors = Vec::new();
        for (file_path, result) in results {
            match result {
                Ok(p) => parsed.push((file_path, p)),
                Err(e) => {
                    debug!(file = %file_path, error = %e, "skipping unparseable file");
                    errors.push(ParseErrorIssue {
                        file_path,
                        error: e.to_string(),
                    });
                }
            }
        }
        (parsed, errors)
    }

    pub fn extractor(&self, mode: CatalogMode) -> Extractor {
        Extractor::new(&self.config, &self.root_dir, mode)
    }

    /// Extract every parsed unit in order, stopping at the first fatal
    /// extraction error.
    ///
    /// Only I/O failures (e.g. the catalog cannot be written) come back as
    /// `Err`; extraction errors end up in [`ExtractionRun::failure`].
    pub fn extract_all(&self, mode: CatalogMode) -> Result<ExtractionRun> {
        let (parsed, parse_errors) = self.parse_files();
        let mut issues: Vec<Issue> = parse_errors.into_iter().map(Issue::from).collect();

        let mut extractor = self.extractor(mode);
        let mut units = Vec::new();
        let mut failure = None;

        for (file_path, source) in &parsed {
            match extractor.extract_parsed(file_path, source) {
                Ok(unit) => {
                    issues.extend(unit.warnings.iter().map(|w| {
                        Issue::from(PluralComponentIssue::from_warning(w, &source.code))
                    }));
                    units.push(unit);
                }
                Err(e) => match e.downcast_ref::<ExtractError>() {
                    Some(err) => {
                        debug!(file = %file_path, error = %err, "extraction stopped");
                        failure = Some(ExtractFailureIssue::from_error(err, &source.code));
                        break;
                    }
                    None => return Err(e),
                },
            }
        }

        let catalog_path = extractor.catalog_path();
        Ok(ExtractionRun {
            units,
            issues,
            failure,
            table: extractor.into_table(),
            catalog_path,
        })
    }
}
