//! AST visitor that finds message descriptors.
//!
//! Two forms are recognised, both only when the name resolves to an import
//! from the configured module:
//!
//! ```ignore
//! <FormattedMessage id="a" defaultMessage="A" description="d" />
//! defineMessages({ a: { id: "a", defaultMessage: "A", description: "d" } })
//! ```

use std::ops::Range;

use swc_common::{SourceMap, Span, Spanned};
use swc_ecma_ast::{
    ArrowExpr, BlockStmt, CallExpr, Callee, CatchClause, ClassDecl, Expr, FnDecl, Function,
    JSXAttrName, JSXAttrOrSpread, JSXOpeningElement, MemberProp, ObjectLit, Pat, Prop,
    PropOrSpread, VarDecl, VarDeclKind,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::builder::{BuildOptions, build_descriptor};
use crate::core::data::DescriptorProp;
use crate::core::error::{ExtractError, ExtractErrorKind};
use crate::core::extract::{ExtractOptions, PluralComponentWarning, Rewrite, UnitExtraction};
use crate::core::host::{DescriptorNode, ImportResolver};
use crate::core::icu::MessageFormat;
use crate::core::store::CatalogStore;
use crate::core::swc::{
    Evaluator, ImportTable, ModuleConsts, NodeContext, NodeKind, Resolver, ScopeStack, SwcNode,
    unwrap_expr,
};

pub struct DescriptorVisitor<'a, 'm> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    options: &'a ExtractOptions,
    format: &'a dyn MessageFormat,
    imports: &'a ImportTable,
    consts: &'a ModuleConsts<'m>,
    scopes: ScopeStack,

    // Results
    pub store: CatalogStore,
    pub warnings: Vec<PluralComponentWarning>,
    pub rewrites: Vec<Rewrite>,
    /// First fatal error. Once set, the rest of the module is skipped.
    pub error: Option<ExtractError>,
}

impl<'a, 'm> DescriptorVisitor<'a, 'm> {
    pub fn new(
        file_path: &'a str,
        source_map: &'a SourceMap,
        options: &'a ExtractOptions,
        format: &'a dyn MessageFormat,
        imports: &'a ImportTable,
        consts: &'a ModuleConsts<'m>,
    ) -> Self {
        Self {
            file_path,
            source_map,
            options,
            format,
            imports,
            consts,
            scopes: ScopeStack::new(),
            store: CatalogStore::new(options.enforce_descriptions),
            warnings: Vec::new(),
            rewrites: Vec::new(),
            error: None,
        }
    }

    pub fn finish(self) -> Result<UnitExtraction, ExtractError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(UnitExtraction {
            messages: self.store.into_descriptors(),
            warnings: self.warnings,
            rewrites: self.rewrites,
        })
    }

    fn failed(&self) -> bool {
        self.error.is_some()
    }

    fn record(&mut self, result: Result<(), ExtractError>) {
        if let Err(err) = result {
            self.error = Some(err);
        }
    }

    fn node_context(&self) -> NodeContext<'_, 'm> {
        NodeContext {
            file_path: self.file_path,
            source_map: self.source_map,
            evaluator: Evaluator::new(self.consts, &self.scopes),
        }
    }

    /// Byte range of `span` within this unit's source text.
    fn byte_range(&self, span: Span) -> Range<usize> {
        let start = self.source_map.lookup_byte_offset(span.lo).pos.0 as usize;
        let end = self.source_map.lookup_byte_offset(span.hi).pos.0 as usize;
        start..end
    }

    fn extract_element(&mut self, node: &JSXOpeningElement) -> Result<(), ExtractError> {
        let options = self.options;
        let module = options.module_source_name.as_str();

        let resolver = Resolver::new(self.imports, &self.scopes);
        if let Some(component) =
            resolver.referenced_import(&node.name, module, &options.plural_component_names)
        {
            let location = self.node_context().location(node.span);
            self.warnings.push(PluralComponentWarning {
                component: component.to_string(),
                location,
            });
            return Ok(());
        }
        if resolver
            .referenced_import(&node.name, module, &options.component_names)
            .is_none()
        {
            return Ok(());
        }

        let (descriptor, location) = {
            let ctx = self.node_context();
            let mut keys = Vec::new();
            let mut values = Vec::new();
            for attr in &node.attrs {
                // Spread descriptors are left to the call form.
                let JSXAttrOrSpread::JSXAttr(attr) = attr else {
                    continue;
                };
                let value_span = attr.value.as_ref().map_or(attr.span, |v| v.span());
                keys.push(SwcNode::new(
                    NodeKind::JsxAttrName(&attr.name),
                    attr.name.span(),
                    &ctx,
                ));
                values.push(SwcNode::new(
                    NodeKind::JsxAttrValue(attr.value.as_ref()),
                    value_span,
                    &ctx,
                ));
            }

            let descriptor = build_descriptor(
                keys.iter()
                    .zip(values.iter())
                    .map(|(k, v)| (k as &dyn DescriptorNode, v as &dyn DescriptorNode)),
                BuildOptions {
                    is_jsx_source: true,
                },
                self.format,
            )?;
            (descriptor, ctx.location(node.span))
        };
        if !descriptor.has_default_message() {
            return Ok(());
        }

        self.store.commit(descriptor, &location)?;

        for attr in &node.attrs {
            if let JSXAttrOrSpread::JSXAttr(attr) = attr
                && let JSXAttrName::Ident(name) = &attr.name
                && DescriptorProp::from_key(&name.sym) == Some(DescriptorProp::Description)
            {
                let range = self.byte_range(attr.span);
                self.rewrites.push(Rewrite::RemoveAttribute { range });
            }
        }
        Ok(())
    }

    fn invalid_shape(&self, callee: &Expr, name: &str, span: Span) -> ExtractError {
        ExtractError::new(
            ExtractErrorKind::InvalidDescriptorShape {
                callee: callee_display(callee).unwrap_or_else(|| name.to_string()),
            },
            self.node_context().location(span),
        )
    }

    fn extract_call(
        &mut self,
        node: &CallExpr,
        callee: &Expr,
        name: &str,
    ) -> Result<(), ExtractError> {
        let messages = match node.args.first() {
            Some(arg) if arg.spread.is_none() => match unwrap_expr(&arg.expr) {
                Expr::Object(obj) => obj,
                other => return Err(self.invalid_shape(callee, name, other.span())),
            },
            _ => return Err(self.invalid_shape(callee, name, node.span)),
        };

        for prop in &messages.props {
            let inner = match prop {
                PropOrSpread::Prop(prop) => match &**prop {
                    Prop::KeyValue(kv) => match unwrap_expr(&kv.value) {
                        Expr::Object(inner) => inner,
                        other => return Err(self.invalid_shape(callee, name, other.span())),
                    },
                    other => return Err(self.invalid_shape(callee, name, other.span())),
                },
                PropOrSpread::Spread(spread) => {
                    return Err(self.invalid_shape(callee, name, spread.span()));
                }
            };
            self.extract_descriptor_object(inner)?;
        }
        Ok(())
    }

    fn extract_descriptor_object(&mut self, obj: &ObjectLit) -> Result<(), ExtractError> {
        let (descriptor, location) = {
            let ctx = self.node_context();
            let mut pairs: Vec<(SwcNode, SwcNode)> = Vec::new();
            for prop in &obj.props {
                let pair = match prop {
                    PropOrSpread::Prop(prop) => match &**prop {
                        Prop::KeyValue(kv) => (
                            SwcNode::new(NodeKind::PropKey(&kv.key), kv.key.span(), &ctx),
                            SwcNode::new(NodeKind::Expr(&kv.value), kv.value.span(), &ctx),
                        ),
                        Prop::Shorthand(ident) => (
                            SwcNode::new(NodeKind::ShorthandKey(ident), ident.span, &ctx),
                            SwcNode::new(NodeKind::ShorthandKey(ident), ident.span, &ctx),
                        ),
                        Prop::Assign(assign) => (
                            SwcNode::new(NodeKind::ShorthandKey(&assign.key), assign.key.span, &ctx),
                            SwcNode::new(NodeKind::Expr(&assign.value), assign.value.span(), &ctx),
                        ),
                        Prop::Method(method) => (
                            SwcNode::new(NodeKind::PropKey(&method.key), method.key.span(), &ctx),
                            SwcNode::new(NodeKind::Missing, method.function.span, &ctx),
                        ),
                        Prop::Getter(getter) => (
                            SwcNode::new(NodeKind::PropKey(&getter.key), getter.key.span(), &ctx),
                            SwcNode::new(NodeKind::Missing, getter.span, &ctx),
                        ),
                        Prop::Setter(setter) => (
                            SwcNode::new(NodeKind::PropKey(&setter.key), setter.key.span(), &ctx),
                            SwcNode::new(NodeKind::Missing, setter.span, &ctx),
                        ),
                    },
                    PropOrSpread::Spread(spread) => (
                        SwcNode::new(NodeKind::Missing, spread.span(), &ctx),
                        SwcNode::new(NodeKind::Missing, spread.span(), &ctx),
                    ),
                };
                pairs.push(pair);
            }

            let descriptor = build_descriptor(
                pairs
                    .iter()
                    .map(|(k, v)| (k as &dyn DescriptorNode, v as &dyn DescriptorNode)),
                BuildOptions::default(),
                self.format,
            )?;
            (descriptor, ctx.location(obj.span))
        };

        let canonical = (descriptor.id.clone(), descriptor.default_message.clone());
        self.store.commit(descriptor, &location)?;

        if let (Some(id), Some(default_message)) = canonical {
            let range = self.byte_range(obj.span);
            self.rewrites.push(Rewrite::ReplaceDescriptor {
                range,
                id,
                default_message,
            });
        }
        Ok(())
    }
}

/// How a callee is written in source: `defineMessages` or `Intl.defineMessages`.
fn callee_display(callee: &Expr) -> Option<String> {
    match unwrap_expr(callee) {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Member(member) => match (&*member.obj, &member.prop) {
            (Expr::Ident(obj), MemberProp::Ident(prop)) => Some(format!("{}.{}", obj.sym, prop.sym)),
            _ => None,
        },
        _ => None,
    }
}

impl Visit for DescriptorVisitor<'_, '_> {
    fn visit_jsx_opening_element(&mut self, node: &JSXOpeningElement) {
        if self.failed() {
            return;
        }
        let result = self.extract_element(node);
        self.record(result);
        if !self.failed() {
            node.visit_children_with(self);
        }
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if self.failed() {
            return;
        }

        if let Callee::Expr(callee) = &node.callee {
            let options = self.options;
            let resolver = Resolver::new(self.imports, &self.scopes);
            let matched = resolver.referenced_import(
                &**callee,
                &options.module_source_name,
                &options.function_names,
            );
            if let Some(name) = matched {
                let result = self.extract_call(node, callee, name);
                self.record(result);
                if self.failed() {
                    return;
                }
                // The descriptor argument has been handled; anything after it
                // is ordinary code.
                callee.visit_with(self);
                for arg in node.args.iter().skip(1) {
                    arg.visit_with(self);
                }
                return;
            }
        }

        node.visit_children_with(self);
    }

    fn visit_function(&mut self, node: &Function) {
        if self.failed() {
            return;
        }
        self.scopes.enter_scope();
        for param in &node.params {
            self.scopes.declare_pat(&param.pat);
        }
        node.visit_children_with(self);
        self.scopes.exit_scope();
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        if self.failed() {
            return;
        }
        self.scopes.enter_scope();
        for param in &node.params {
            self.scopes.declare_pat(param);
        }
        node.visit_children_with(self);
        self.scopes.exit_scope();
    }

    fn visit_block_stmt(&mut self, node: &BlockStmt) {
        if self.failed() {
            return;
        }
        self.scopes.enter_scope();
        node.visit_children_with(self);
        self.scopes.exit_scope();
    }

    fn visit_catch_clause(&mut self, node: &CatchClause) {
        if self.failed() {
            return;
        }
        self.scopes.enter_scope();
        if let Some(param) = &node.param {
            self.scopes.declare_pat(param);
        }
        node.visit_children_with(self);
        self.scopes.exit_scope();
    }

    fn visit_var_decl(&mut self, node: &VarDecl) {
        if self.failed() {
            return;
        }
        for decl in &node.decls {
            match (&decl.name, &decl.init) {
                (Pat::Ident(ident), Some(init)) if node.kind == VarDeclKind::Const => {
                    self.scopes.declare_const(ident.id.sym.to_string(), init);
                }
                _ => self.scopes.declare_pat(&decl.name),
            }
        }
        node.visit_children_with(self);
    }

    fn visit_fn_decl(&mut self, node: &FnDecl) {
        if self.failed() {
            return;
        }
        self.scopes.declare(node.ident.sym.to_string());
        node.visit_children_with(self);
    }

    fn visit_class_decl(&mut self, node: &ClassDecl) {
        if self.failed() {
            return;
        }
        self.scopes.declare(node.ident.sym.to_string());
        node.visit_children_with(self);
    }
}
