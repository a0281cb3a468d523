//! swc front-end for the extraction core.
//!
//! ## Module Structure
//!
//! - `eval`: Constant folding over expressions and module-level `const`s
//! - `imports`: Import table and import-reference resolution
//! - `node`: `DescriptorNode` adapter over swc keys and values
//! - `scope`: Local scopes that shadow module-level bindings

pub mod eval;
pub mod imports;
pub mod node;
pub mod scope;

pub use eval::{Evaluator, ModuleConsts};
pub use imports::{ImportTable, Resolver};
pub use node::{NodeContext, NodeKind, SwcNode, unwrap_expr};
pub use scope::ScopeStack;
