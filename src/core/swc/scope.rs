//! Local binding scopes.
//!
//! Module-level names (imports, module constants) live in their own tables.
//! This stack only records names declared inside functions and blocks, which
//! shadow those module-level names while the scope is open. Local `const`
//! bindings keep their initializer so they can still be folded.

use std::collections::HashMap;

use swc_ecma_ast::{Expr, ObjectPatProp, Pat};

/// Stack of local scopes, innermost last.
///
/// ```ignore
/// import { FormattedMessage } from "react-intl";  // module table
/// function render(FormattedMessage) {             // push scope 1: FormattedMessage
///     <FormattedMessage ... />                    // shadowed, not the import
/// }                                               // pop scope 1
/// ```
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<HashMap<String, Option<Box<Expr>>>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new scope (function body, block, catch clause).
    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    pub fn exit_scope(&mut self) {
        self.scopes.pop();
    }

    /// Declare a name in the innermost scope. Does nothing at module level.
    pub fn declare(&mut self, name: String) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, None);
        }
    }

    /// Declare `const name = init` in the innermost scope.
    pub fn declare_const(&mut self, name: String, init: &Expr) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, Some(Box::new(init.clone())));
        }
    }

    /// Declare every name bound by a pattern.
    pub fn declare_pat(&mut self, pat: &Pat) {
        for name in extract_binding_names(pat) {
            self.declare(name);
        }
    }

    /// True if a local declaration hides the module-level `name`.
    pub fn is_shadowed(&self, name: &str) -> bool {
        self.scopes.iter().any(|scope| scope.contains_key(name))
    }

    /// Initializer of the innermost local binding of `name`, if that binding
    /// is a `const` with one.
    pub fn const_init(&self, name: &str) -> Option<&Expr> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .and_then(|init| init.as_deref())
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

/// Names bound by a (possibly destructuring) pattern.
pub fn extract_binding_names(pat: &Pat) -> Vec<String> {
    match pat {
        Pat::Ident(ident) => vec![ident.id.sym.to_string()],
        Pat::Object(obj) => obj
            .props
            .iter()
            .flat_map(|prop| match prop {
                ObjectPatProp::KeyValue(kv) => extract_binding_names(&kv.value),
                ObjectPatProp::Assign(assign) => vec![assign.key.sym.to_string()],
                ObjectPatProp::Rest(rest) => extract_binding_names(&rest.arg),
            })
            .collect(),
        Pat::Array(arr) => arr
            .elems
            .iter()
            .flatten()
            .flat_map(extract_binding_names)
            .collect(),
        Pat::Assign(assign) => extract_binding_names(&assign.left),
        Pat::Rest(rest) => extract_binding_names(&rest.arg),
        _ => vec![],
    }
}
