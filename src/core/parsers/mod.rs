//! Source file parsing.
//!
//! - `jsx`: JSX/TSX/JS/TS source parser (uses swc for AST generation)

pub mod jsx;
