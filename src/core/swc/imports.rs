use std::collections::HashMap;

use swc_ecma_ast::{
    Expr, ImportSpecifier, JSXElementName, JSXObject, Lit, MemberProp, Module, ModuleDecl,
    ModuleExportName, ModuleItem,
};

use crate::core::host::ImportResolver;
use crate::core::swc::scope::ScopeStack;

const DEFAULT_EXPORT: &str = "default";
const NAMESPACE: &str = "*";

/// Where a local import binding comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    pub module: String,
    /// Exported name, `"default"` for default imports, `"*"` for namespaces.
    pub imported: String,
}

/// Module-level `import` declarations, keyed by local name.
#[derive(Debug, Default)]
pub struct ImportTable {
    bindings: HashMap<String, ImportBinding>,
}

impl ImportTable {
    pub fn from_module(module: &Module) -> Self {
        let mut bindings = HashMap::new();

        for item in &module.body {
            let ModuleItem::ModuleDecl(ModuleDecl::Import(import)) = item else {
                continue;
            };
            if import.type_only {
                continue;
            }
            let module_path = import.src.value.to_string_lossy().to_string();

            for specifier in &import.specifiers {
                let (local, imported) = match specifier {
                    ImportSpecifier::Named(named) => {
                        if named.is_type_only {
                            continue;
                        }
                        let local = named.local.sym.to_string();
                        let imported = named
                            .imported
                            .as_ref()
                            .map(|i| match i {
                                ModuleExportName::Ident(ident) => ident.sym.to_string(),
                                ModuleExportName::Str(s) => s.value.to_string_lossy().to_string(),
                            })
                            .unwrap_or_else(|| local.clone());
                        (local, imported)
                    }
                    ImportSpecifier::Default(default) => {
                        (default.local.sym.to_string(), DEFAULT_EXPORT.to_string())
                    }
                    ImportSpecifier::Namespace(ns) => {
                        (ns.local.sym.to_string(), NAMESPACE.to_string())
                    }
                };
                bindings.insert(
                    local,
                    ImportBinding {
                        module: module_path.clone(),
                        imported,
                    },
                );
            }
        }

        Self { bindings }
    }

    pub fn get(&self, local: &str) -> Option<&ImportBinding> {
        self.bindings.get(local)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Import resolution at the current point of a traversal.
pub struct Resolver<'a> {
    imports: &'a ImportTable,
    scopes: &'a ScopeStack,
}

impl<'a> Resolver<'a> {
    pub fn new(imports: &'a ImportTable, scopes: &'a ScopeStack) -> Self {
        Self { imports, scopes }
    }

    fn binding(&self, local: &str) -> Option<&'a ImportBinding> {
        if self.scopes.is_shadowed(local) {
            return None;
        }
        self.imports.get(local)
    }

    /// `local` is `name` imported from `module`.
    fn is_named_import(&self, local: &str, module: &str, name: &str) -> bool {
        self.binding(local)
            .is_some_and(|b| b.module == module && b.imported == name)
    }

    /// `object.member` where `object` is `import * as object from module`.
    fn is_namespace_member(&self, object: &str, member: &str, module: &str, name: &str) -> bool {
        member == name
            && self
                .binding(object)
                .is_some_and(|b| b.module == module && b.imported == NAMESPACE)
    }
}

impl ImportResolver<JSXElementName> for Resolver<'_> {
    fn references_import(&self, node: &JSXElementName, module: &str, name: &str) -> bool {
        match node {
            JSXElementName::Ident(ident) => self.is_named_import(&ident.sym, module, name),
            JSXElementName::JSXMemberExpr(member) => match &member.obj {
                JSXObject::Ident(object) => {
                    self.is_namespace_member(&object.sym, &member.prop.sym, module, name)
                }
                JSXObject::JSXMemberExpr(_) => false,
            },
            JSXElementName::JSXNamespacedName(_) => false,
        }
    }
}

impl ImportResolver<Expr> for Resolver<'_> {
    fn references_import(&self, node: &Expr, module: &str, name: &str) -> bool {
        match node {
            Expr::Ident(ident) => self.is_named_import(&ident.sym, module, name),
            Expr::Member(member) => {
                let Expr::Ident(object) = &*member.obj else {
                    return false;
                };
                let member_name = match &member.prop {
                    MemberProp::Ident(prop) => prop.sym.to_string(),
                    MemberProp::Computed(computed) => match &*computed.expr {
                        Expr::Lit(Lit::Str(s)) => s.value.to_string_lossy().to_string(),
                        _ => return false,
                    },
                    MemberProp::PrivateName(_) => return false,
                };
                self.is_namespace_member(&object.sym, &member_name, module, name)
            }
            Expr::Paren(paren) => self.references_import(&*paren.expr, module, name),
            _ => false,
        }
    }
}
