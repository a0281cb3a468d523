//! intlx - react-intl message extraction
//!
//! intlx statically extracts message descriptors (`<FormattedMessage>`
//! elements and `defineMessages({...})` calls) from JSX/TSX sources,
//! validates their ICU message syntax and writes a sorted `.properties`
//! catalog, without executing the program.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction and catalog engine
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod utils;
