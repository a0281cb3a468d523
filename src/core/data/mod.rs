//! Core data types shared by the extraction pipeline.
//!
//! ## Module Structure
//!
//! - `descriptor`: Message descriptor types (partial and committed)
//! - `source`: Source code location types (SourceContext, SourceLocation)

pub mod descriptor;
pub mod source;

pub use descriptor::{DescriptorProp, MessageDescriptor, PartialDescriptor};
pub use source::{SourceContext, SourceLocation};
