//! Free-name inference over a function subtree.
//!
//! This walks the whole subtree depth-first and aggregates referenced names,
//! subtracting the names each frame binds locally. It is deliberately not a
//! lexical scope resolver: nested functions and classes are walked through,
//! so their free names propagate into the enclosing function's set. The
//! module-level narrowing in `analysis::extract` absorbs the resulting
//! over-approximation.

use rustpython_parser::ast::{
    Arg, Arguments, Comprehension, ExceptHandler, Expr, Keyword, Stmt, WithItem,
};
use std::collections::HashSet;

/// Compute the set of names referenced but not locally bound under `stmt`.
///
/// Argument names of the statement itself (when it is a function definition)
/// are excluded where they appear as direct children; signature extraction
/// additionally subtracts the argument list and the function's own name
/// afterwards.
pub fn find_dependencies(stmt: &Stmt) -> HashSet<String> {
    collect(NodeRef::Stmt(stmt))
}

/// Borrowed reference to any AST node kind the walker visits
#[derive(Clone, Copy)]
enum NodeRef<'a> {
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    Params(&'a Arguments),
    Param(&'a Arg),
    WithItem(&'a WithItem),
    Comprehension(&'a Comprehension),
    Handler(&'a ExceptHandler),
    Keyword(&'a Keyword),
}

/// One recursion frame of the aggregate-then-subtract algorithm
fn collect(node: NodeRef<'_>) -> HashSet<String> {
    let mut dependencies = HashSet::new();
    let mut local_vars: HashSet<String> = HashSet::new();
    let own_args = declared_arg_names(node);

    for child in node.children() {
        match child {
            // A bare name reference counts as a dependency, except where the
            // current node is a function definition and the name is one of
            // its own declared arguments.
            NodeRef::Expr(Expr::Name(name)) => {
                let is_own_arg = own_args
                    .as_ref()
                    .map_or(false, |args| args.contains(name.id.as_str()));
                if !is_own_arg {
                    dependencies.insert(name.id.to_string());
                }
            }
            // Simple assignment targets are bindings introduced by the body;
            // they are subtracted once the whole frame has been walked.
            NodeRef::Stmt(Stmt::Assign(assign)) => {
                for target in &assign.targets {
                    if let Expr::Name(name) = target {
                        local_vars.insert(name.id.to_string());
                    }
                }
            }
            // Inside a with-statement frame, a context expression that is a
            // bare name is treated as locally consumed rather than as an
            // external dependency.
            _ => {
                for item in scoped_items(node) {
                    if let Expr::Name(name) = &item.context_expr {
                        dependencies.remove(name.id.as_str());
                    }
                }
            }
        }
        dependencies.extend(collect(child));
    }

    for name in &local_vars {
        dependencies.remove(name);
    }
    dependencies
}

/// Declared positional argument names when `node` is a function definition
fn declared_arg_names<'a>(node: NodeRef<'a>) -> Option<HashSet<&'a str>> {
    let params = match node {
        NodeRef::Stmt(Stmt::FunctionDef(fundef)) => &fundef.args,
        NodeRef::Stmt(Stmt::AsyncFunctionDef(fundef)) => &fundef.args,
        _ => return None,
    };
    Some(params.args.iter().map(|arg| arg.def.arg.as_str()).collect())
}

/// Context-manager items when `node` is a with/async-with statement
fn scoped_items<'a>(node: NodeRef<'a>) -> &'a [WithItem] {
    match node {
        NodeRef::Stmt(Stmt::With(with_stmt)) => &with_stmt.items,
        NodeRef::Stmt(Stmt::AsyncWith(with_stmt)) => &with_stmt.items,
        _ => &[],
    }
}

impl<'a> NodeRef<'a> {
    /// Direct children of this node, in source field order
    fn children(self) -> Vec<NodeRef<'a>> {
        let mut out = Vec::new();
        match self {
            NodeRef::Stmt(stmt) => stmt_children(stmt, &mut out),
            NodeRef::Expr(expr) => expr_children(expr, &mut out),
            NodeRef::Params(params) => {
                for arg in params
                    .posonlyargs
                    .iter()
                    .chain(&params.args)
                    .chain(&params.kwonlyargs)
                {
                    out.push(NodeRef::Param(&arg.def));
                    push_opt(&mut out, arg.default.as_deref());
                }
                if let Some(vararg) = &params.vararg {
                    out.push(NodeRef::Param(&**vararg));
                }
                if let Some(kwarg) = &params.kwarg {
                    out.push(NodeRef::Param(&**kwarg));
                }
            }
            NodeRef::Param(arg) => push_opt(&mut out, arg.annotation.as_deref()),
            NodeRef::WithItem(item) => {
                push_expr(&mut out, &item.context_expr);
                push_opt(&mut out, item.optional_vars.as_deref());
            }
            NodeRef::Comprehension(comp) => {
                push_expr(&mut out, &comp.target);
                push_expr(&mut out, &comp.iter);
                push_exprs(&mut out, &comp.ifs);
            }
            NodeRef::Handler(ExceptHandler::ExceptHandler(handler)) => {
                push_opt(&mut out, handler.type_.as_deref());
                push_stmts(&mut out, &handler.body);
            }
            NodeRef::Keyword(keyword) => push_expr(&mut out, &keyword.value),
        }
        out
    }
}

fn stmt_children<'a>(stmt: &'a Stmt, out: &mut Vec<NodeRef<'a>>) {
    match stmt {
        Stmt::FunctionDef(fundef) => {
            out.push(NodeRef::Params(&*fundef.args));
            push_stmts(out, &fundef.body);
            push_exprs(out, &fundef.decorator_list);
            push_opt(out, fundef.returns.as_deref());
        }
        Stmt::AsyncFunctionDef(fundef) => {
            out.push(NodeRef::Params(&*fundef.args));
            push_stmts(out, &fundef.body);
            push_exprs(out, &fundef.decorator_list);
            push_opt(out, fundef.returns.as_deref());
        }
        Stmt::ClassDef(classdef) => {
            push_exprs(out, &classdef.bases);
            for keyword in &classdef.keywords {
                out.push(NodeRef::Keyword(keyword));
            }
            push_stmts(out, &classdef.body);
            push_exprs(out, &classdef.decorator_list);
        }
        Stmt::Return(ret) => push_opt(out, ret.value.as_deref()),
        Stmt::Delete(delete) => push_exprs(out, &delete.targets),
        Stmt::Assign(assign) => {
            push_exprs(out, &assign.targets);
            push_expr(out, &assign.value);
        }
        Stmt::AugAssign(aug) => {
            push_expr(out, &aug.target);
            push_expr(out, &aug.value);
        }
        Stmt::AnnAssign(ann) => {
            push_expr(out, &ann.target);
            push_expr(out, &ann.annotation);
            push_opt(out, ann.value.as_deref());
        }
        Stmt::For(for_stmt) => {
            push_expr(out, &for_stmt.target);
            push_expr(out, &for_stmt.iter);
            push_stmts(out, &for_stmt.body);
            push_stmts(out, &for_stmt.orelse);
        }
        Stmt::AsyncFor(for_stmt) => {
            push_expr(out, &for_stmt.target);
            push_expr(out, &for_stmt.iter);
            push_stmts(out, &for_stmt.body);
            push_stmts(out, &for_stmt.orelse);
        }
        Stmt::While(while_stmt) => {
            push_expr(out, &while_stmt.test);
            push_stmts(out, &while_stmt.body);
            push_stmts(out, &while_stmt.orelse);
        }
        Stmt::If(if_stmt) => {
            push_expr(out, &if_stmt.test);
            push_stmts(out, &if_stmt.body);
            push_stmts(out, &if_stmt.orelse);
        }
        Stmt::With(with_stmt) => {
            for item in &with_stmt.items {
                out.push(NodeRef::WithItem(item));
            }
            push_stmts(out, &with_stmt.body);
        }
        Stmt::AsyncWith(with_stmt) => {
            for item in &with_stmt.items {
                out.push(NodeRef::WithItem(item));
            }
            push_stmts(out, &with_stmt.body);
        }
        Stmt::Match(match_stmt) => {
            push_expr(out, &match_stmt.subject);
            for case in &match_stmt.cases {
                push_opt(out, case.guard.as_deref());
                push_stmts(out, &case.body);
            }
        }
        Stmt::Raise(raise) => {
            push_opt(out, raise.exc.as_deref());
            push_opt(out, raise.cause.as_deref());
        }
        Stmt::Try(try_stmt) => {
            push_stmts(out, &try_stmt.body);
            for handler in &try_stmt.handlers {
                out.push(NodeRef::Handler(handler));
            }
            push_stmts(out, &try_stmt.orelse);
            push_stmts(out, &try_stmt.finalbody);
        }
        Stmt::Assert(assert) => {
            push_expr(out, &assert.test);
            push_opt(out, assert.msg.as_deref());
        }
        Stmt::Expr(expr_stmt) => push_expr(out, &expr_stmt.value),
        // Import/ImportFrom carry alias records, Global/Nonlocal carry bare
        // identifiers; none of them contain name-reference children.
        _ => {}
    }
}

fn expr_children<'a>(expr: &'a Expr, out: &mut Vec<NodeRef<'a>>) {
    match expr {
        Expr::BoolOp(bool_op) => push_exprs(out, &bool_op.values),
        Expr::NamedExpr(named) => {
            push_expr(out, &named.target);
            push_expr(out, &named.value);
        }
        Expr::BinOp(bin_op) => {
            push_expr(out, &bin_op.left);
            push_expr(out, &bin_op.right);
        }
        Expr::UnaryOp(unary) => push_expr(out, &unary.operand),
        Expr::Lambda(lambda) => {
            out.push(NodeRef::Params(&*lambda.args));
            push_expr(out, &lambda.body);
        }
        Expr::IfExp(if_exp) => {
            push_expr(out, &if_exp.test);
            push_expr(out, &if_exp.body);
            push_expr(out, &if_exp.orelse);
        }
        Expr::Dict(dict) => {
            for key in dict.keys.iter().flatten() {
                push_expr(out, key);
            }
            push_exprs(out, &dict.values);
        }
        Expr::Set(set) => push_exprs(out, &set.elts),
        Expr::ListComp(comp) => {
            push_expr(out, &comp.elt);
            for generator in &comp.generators {
                out.push(NodeRef::Comprehension(generator));
            }
        }
        Expr::SetComp(comp) => {
            push_expr(out, &comp.elt);
            for generator in &comp.generators {
                out.push(NodeRef::Comprehension(generator));
            }
        }
        Expr::DictComp(comp) => {
            push_expr(out, &comp.key);
            push_expr(out, &comp.value);
            for generator in &comp.generators {
                out.push(NodeRef::Comprehension(generator));
            }
        }
        Expr::GeneratorExp(comp) => {
            push_expr(out, &comp.elt);
            for generator in &comp.generators {
                out.push(NodeRef::Comprehension(generator));
            }
        }
        Expr::Await(await_expr) => push_expr(out, &await_expr.value),
        Expr::Yield(yield_expr) => push_opt(out, yield_expr.value.as_deref()),
        Expr::YieldFrom(yield_from) => push_expr(out, &yield_from.value),
        Expr::Compare(compare) => {
            push_expr(out, &compare.left);
            push_exprs(out, &compare.comparators);
        }
        Expr::Call(call) => {
            push_expr(out, &call.func);
            push_exprs(out, &call.args);
            for keyword in &call.keywords {
                out.push(NodeRef::Keyword(keyword));
            }
        }
        Expr::FormattedValue(formatted) => {
            push_expr(out, &formatted.value);
            push_opt(out, formatted.format_spec.as_deref());
        }
        Expr::JoinedStr(joined) => push_exprs(out, &joined.values),
        Expr::Attribute(attribute) => push_expr(out, &attribute.value),
        Expr::Subscript(subscript) => {
            push_expr(out, &subscript.value);
            push_expr(out, &subscript.slice);
        }
        Expr::Starred(starred) => push_expr(out, &starred.value),
        Expr::List(list) => push_exprs(out, &list.elts),
        Expr::Tuple(tuple) => push_exprs(out, &tuple.elts),
        Expr::Slice(slice) => {
            push_opt(out, slice.lower.as_deref());
            push_opt(out, slice.upper.as_deref());
            push_opt(out, slice.step.as_deref());
        }
        // Name and Constant are leaves
        _ => {}
    }
}

fn push_expr<'a>(out: &mut Vec<NodeRef<'a>>, expr: &'a Expr) {
    out.push(NodeRef::Expr(expr));
}

fn push_exprs<'a>(out: &mut Vec<NodeRef<'a>>, exprs: &'a [Expr]) {
    for expr in exprs {
        out.push(NodeRef::Expr(expr));
    }
}

fn push_opt<'a>(out: &mut Vec<NodeRef<'a>>, expr: Option<&'a Expr>) {
    if let Some(expr) = expr {
        out.push(NodeRef::Expr(expr));
    }
}

fn push_stmts<'a>(out: &mut Vec<NodeRef<'a>>, stmts: &'a [Stmt]) {
    for stmt in stmts {
        out.push(NodeRef::Stmt(stmt));
    }
}
