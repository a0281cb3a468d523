use swc_common::{SourceMap, Span};
use swc_ecma_ast::{Expr, Ident, JSXAttrName, JSXAttrValue, JSXExpr, PropName};

use crate::core::data::SourceLocation;
use crate::core::host::{ConstValue, DescriptorNode};
use crate::core::swc::eval::Evaluator;

/// What the extraction visitor needs to turn spans and expressions into
/// locations and constants.
pub struct NodeContext<'a, 'm> {
    pub file_path: &'a str,
    pub source_map: &'a SourceMap,
    pub evaluator: Evaluator<'a, 'm>,
}

impl NodeContext<'_, '_> {
    pub fn location(&self, span: Span) -> SourceLocation {
        let loc = self.source_map.lookup_char_pos(span.lo);
        SourceLocation::new(self.file_path, loc.line, loc.col_display + 1)
    }
}

#[derive(Clone, Copy)]
pub enum NodeKind<'n> {
    /// Object property key.
    PropKey(&'n PropName),
    /// Shorthand property key, `{ id }`.
    ShorthandKey(&'n Ident),
    JsxAttrName(&'n JSXAttrName),
    Expr(&'n Expr),
    /// JSX attribute value; `None` for a bare boolean attribute.
    JsxAttrValue(Option<&'n JSXAttrValue>),
    /// No syntax to evaluate: method bodies, spread elements.
    Missing,
}

/// swc adapter for [`DescriptorNode`].
pub struct SwcNode<'n, 'c, 'a, 'm> {
    pub kind: NodeKind<'n>,
    pub span: Span,
    pub ctx: &'c NodeContext<'a, 'm>,
}

impl<'n, 'c, 'a, 'm> SwcNode<'n, 'c, 'a, 'm> {
    pub fn new(kind: NodeKind<'n>, span: Span, ctx: &'c NodeContext<'a, 'm>) -> Self {
        Self { kind, span, ctx }
    }

    fn eval_expr(&self, expr: &Expr) -> Option<ConstValue> {
        self.ctx.evaluator.eval(expr)
    }
}

impl DescriptorNode for SwcNode<'_, '_, '_, '_> {
    fn identifier_name(&self) -> Option<String> {
        match self.kind {
            NodeKind::PropKey(PropName::Ident(ident)) => Some(ident.sym.to_string()),
            NodeKind::ShorthandKey(ident) => Some(ident.sym.to_string()),
            NodeKind::JsxAttrName(JSXAttrName::Ident(ident)) => Some(ident.sym.to_string()),
            NodeKind::JsxAttrName(JSXAttrName::JSXNamespacedName(name)) => {
                Some(format!("{}:{}", name.ns.sym, name.name.sym))
            }
            _ => None,
        }
    }

    fn evaluate(&self) -> Option<ConstValue> {
        match self.kind {
            NodeKind::PropKey(key) => match key {
                PropName::Ident(ident) => Some(ConstValue::Str(ident.sym.to_string())),
                PropName::Str(s) => Some(ConstValue::Str(s.value.to_string_lossy().to_string())),
                PropName::Num(n) => Some(ConstValue::Num(n.value)),
                PropName::Computed(computed) => self.eval_expr(&computed.expr),
                PropName::BigInt(_) => None,
            },
            NodeKind::ShorthandKey(ident) => self.eval_expr(&Expr::Ident(ident.clone())),
            NodeKind::JsxAttrName(_) => None,
            NodeKind::Expr(expr) => self.eval_expr(expr),
            NodeKind::JsxAttrValue(value) => match value? {
                JSXAttrValue::Str(s) => Some(ConstValue::Str(s.value.to_string_lossy().to_string())),
                JSXAttrValue::JSXExprContainer(container) => match &container.expr {
                    JSXExpr::Expr(expr) => self.eval_expr(expr),
                    JSXExpr::JSXEmptyExpr(_) => None,
                },
                _ => None,
            },
            NodeKind::Missing => None,
        }
    }

    fn is_unbraced_string_literal(&self) -> bool {
        matches!(self.kind, NodeKind::JsxAttrValue(Some(JSXAttrValue::Str(_))))
    }

    fn location(&self) -> SourceLocation {
        self.ctx.location(self.span)
    }
}

/// Unwrap parentheses and TypeScript-only wrappers around an expression.
pub fn unwrap_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(e) => unwrap_expr(&e.expr),
        Expr::TsAs(e) => unwrap_expr(&e.expr),
        Expr::TsSatisfies(e) => unwrap_expr(&e.expr),
        Expr::TsConstAssertion(e) => unwrap_expr(&e.expr),
        Expr::TsNonNull(e) => unwrap_expr(&e.expr),
        Expr::TsTypeAssertion(e) => unwrap_expr(&e.expr),
        _ => expr,
    }
}
