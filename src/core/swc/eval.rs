//! Constant folding over swc expressions.

use std::collections::HashMap;

use swc_ecma_ast::{
    BinaryOp, Decl, Expr, Lit, Module, ModuleDecl, ModuleItem, Pat, Stmt, Tpl, UnaryOp, VarDecl,
    VarDeclKind,
};

use crate::core::host::ConstValue;
use crate::core::swc::scope::ScopeStack;

/// Guards against `const a = b; const b = a;`.
const MAX_DEPTH: usize = 32;

/// Module-level `const name = <init>` bindings.
#[derive(Debug, Default)]
pub struct ModuleConsts<'m> {
    inits: HashMap<String, &'m Expr>,
}

impl<'m> ModuleConsts<'m> {
    pub fn from_module(module: &'m Module) -> Self {
        let mut inits = HashMap::new();
        for item in &module.body {
            let var = match item {
                ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) => var,
                ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => match &export.decl {
                    Decl::Var(var) => var,
                    _ => continue,
                },
                _ => continue,
            };
            collect_consts(var, &mut inits);
        }
        Self { inits }
    }

    pub fn get(&self, name: &str) -> Option<&'m Expr> {
        self.inits.get(name).copied()
    }
}

fn collect_consts<'m>(var: &'m VarDecl, inits: &mut HashMap<String, &'m Expr>) {
    if var.kind != VarDeclKind::Const {
        return;
    }
    for decl in &var.decls {
        if let (Pat::Ident(ident), Some(init)) = (&decl.name, &decl.init) {
            inits.insert(ident.id.sym.to_string(), &**init);
        }
    }
}

/// Evaluates expressions against module constants and local `const`
/// bindings, honouring local shadowing.
///
/// A local initializer is folded against the scopes open at the point of
/// use, not at its declaration.
pub struct Evaluator<'a, 'm> {
    consts: &'a ModuleConsts<'m>,
    scopes: &'a ScopeStack,
}

impl<'a, 'm> Evaluator<'a, 'm> {
    pub fn new(consts: &'a ModuleConsts<'m>, scopes: &'a ScopeStack) -> Self {
        Self { consts, scopes }
    }

    pub fn eval(&self, expr: &Expr) -> Option<ConstValue> {
        self.eval_at(expr, 0)
    }

    fn eval_at(&self, expr: &Expr, depth: usize) -> Option<ConstValue> {
        if depth > MAX_DEPTH {
            return None;
        }
        let next = depth + 1;

        match expr {
            Expr::Lit(lit) => eval_lit(lit),
            Expr::Ident(ident) => self.eval_ident(&ident.sym, next),
            Expr::Tpl(tpl) => self.eval_tpl(tpl, next),
            Expr::Paren(paren) => self.eval_at(&paren.expr, next),
            Expr::TsAs(e) => self.eval_at(&e.expr, next),
            Expr::TsSatisfies(e) => self.eval_at(&e.expr, next),
            Expr::TsNonNull(e) => self.eval_at(&e.expr, next),
            Expr::TsTypeAssertion(e) => self.eval_at(&e.expr, next),
            Expr::TsConstAssertion(e) => self.eval_at(&e.expr, next),
            Expr::Unary(unary) => {
                let arg = self.eval_at(&unary.arg, next)?;
                match unary.op {
                    UnaryOp::Minus => Some(ConstValue::Num(-arg.to_number())),
                    UnaryOp::Plus => Some(ConstValue::Num(arg.to_number())),
                    UnaryOp::Bang => Some(ConstValue::Bool(!arg.is_truthy())),
                    UnaryOp::TypeOf => Some(ConstValue::Str(arg.type_of().to_string())),
                    UnaryOp::Void => Some(ConstValue::Undefined),
                    _ => None,
                }
            }
            Expr::Bin(bin) => {
                let left = self.eval_at(&bin.left, next)?;
                match bin.op {
                    BinaryOp::LogicalAnd => {
                        if left.is_truthy() {
                            self.eval_at(&bin.right, next)
                        } else {
                            Some(left)
                        }
                    }
                    BinaryOp::LogicalOr => {
                        if left.is_truthy() {
                            Some(left)
                        } else {
                            self.eval_at(&bin.right, next)
                        }
                    }
                    BinaryOp::NullishCoalescing => {
                        if left.is_nullish() {
                            self.eval_at(&bin.right, next)
                        } else {
                            Some(left)
                        }
                    }
                    op => {
                        let right = self.eval_at(&bin.right, next)?;
                        eval_binary(op, left, right)
                    }
                }
            }
            Expr::Cond(cond) => {
                if self.eval_at(&cond.test, next)?.is_truthy() {
                    self.eval_at(&cond.cons, next)
                } else {
                    self.eval_at(&cond.alt, next)
                }
            }
            _ => None,
        }
    }

    fn eval_ident(&self, name: &str, depth: usize) -> Option<ConstValue> {
        if self.scopes.is_shadowed(name) {
            return self
                .scopes
                .const_init(name)
                .and_then(|init| self.eval_at(init, depth));
        }
        match name {
            "undefined" => Some(ConstValue::Undefined),
            "NaN" => Some(ConstValue::Num(f64::NAN)),
            "Infinity" => Some(ConstValue::Num(f64::INFINITY)),
            _ => self
                .consts
                .get(name)
                .and_then(|init| self.eval_at(init, depth)),
        }
    }

    fn eval_tpl(&self, tpl: &Tpl, depth: usize) -> Option<ConstValue> {
        let mut out = String::new();
        for (i, quasi) in tpl.quasis.iter().enumerate() {
            out.push_str(&quasi.cooked.as_ref()?.to_string_lossy());
            if let Some(expr) = tpl.exprs.get(i) {
                out.push_str(&self.eval_at(expr, depth)?.to_string());
            }
        }
        Some(ConstValue::Str(out))
    }
}

fn eval_lit(lit: &Lit) -> Option<ConstValue> {
    match lit {
        Lit::Str(s) => Some(ConstValue::Str(s.value.to_string_lossy().to_string())),
        Lit::Num(n) => Some(ConstValue::Num(n.value)),
        Lit::Bool(b) => Some(ConstValue::Bool(b.value)),
        Lit::Null(_) => Some(ConstValue::Null),
        _ => None,
    }
}

fn eval_binary(op: BinaryOp, left: ConstValue, right: ConstValue) -> Option<ConstValue> {
    let value = match op {
        BinaryOp::Add => match (&left, &right) {
            (ConstValue::Str(_), _) | (_, ConstValue::Str(_)) => {
                ConstValue::Str(format!("{}{}", left, right))
            }
            _ => ConstValue::Num(left.to_number() + right.to_number()),
        },
        BinaryOp::Sub => ConstValue::Num(left.to_number() - right.to_number()),
        BinaryOp::Mul => ConstValue::Num(left.to_number() * right.to_number()),
        BinaryOp::Div => ConstValue::Num(left.to_number() / right.to_number()),
        BinaryOp::Mod => ConstValue::Num(left.to_number() % right.to_number()),
        BinaryOp::EqEqEq => ConstValue::Bool(left == right),
        BinaryOp::NotEqEq => ConstValue::Bool(left != right),
        _ => return None,
    };
    Some(value)
}
