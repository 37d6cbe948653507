//! The AST-traversal engine (§4.7): turns a [`Function`] body into a
//! [`Relation`] by threading statement-by-statement composition
//! through a [`Context`], then hands the result to the choice
//! simplifier and bound extractor to produce an [`AnalysisResult`].

use std::collections::{BTreeMap, BTreeSet};
use std::time::{Instant, SystemTime};

use crate::algebra::{Delta, Polynomial, Scalar};
use crate::ast::{BinOp, Expr, Function, Program, Stmt, UnOp};
use crate::config::{AnalyzerConfig, UnsupportedPolicy};
use crate::matrix::{Matrix, Relation, RelationList};
use crate::result::{AnalysisOutcome, AnalysisResult, FunctionStatus, ProgramResult, Timing, Warning};

use super::bound;
use super::context::Context;
use super::simplifier;

/// Runs every function in `program` independently (§7: a failure
/// analyzing one function never affects its siblings).
pub fn analyze_program(program: &Program, config: &AnalyzerConfig) -> ProgramResult {
    let functions = program
        .functions
        .iter()
        .map(|f| AnalysisOutcome::Completed(analyze_function(f, config)))
        .collect();
    ProgramResult { functions }
}

/// Analyzes a single function body and produces its full result
/// record, including timing, warnings, the bound string (when one
/// exists) and the problematic-flow map (when it does not).
pub fn analyze_function(function: &Function, config: &AnalyzerConfig) -> AnalysisResult {
    let started_at = SystemTime::now();
    let clock = Instant::now();
    tracing::info!(function = %function.name, "analysis started");

    let vars = collect_variables(function);
    let mut ctx = Context::new(vars.clone(), config.clone());
    ctx.mark_building();

    let desugared = desugar_stmt(&function.body);
    let initial = Relation::identity(vars.clone());
    let final_relation = analyze_stmt(&mut ctx, initial, &desugared);

    let timing = Timing { started_at, elapsed: clock.elapsed() };

    if let Some(err) = ctx.take_fatal() {
        tracing::warn!(function = %function.name, error = %err, "analysis aborted on an internal-invariant violation");
        return AnalysisResult {
            function_name: function.name.clone(),
            variables: vars,
            matrix: None,
            choice_vectors: Vec::new(),
            infinite: false,
            problematic_flows: BTreeMap::new(),
            bound: None,
            warnings: ctx.into_warnings(),
            index: 0,
            status: FunctionStatus::Aborted(err),
            timing,
        };
    }

    if ctx.is_aborted() {
        tracing::warn!(function = %function.name, "analysis aborted: unsupported construct under strict policy");
        let index = ctx.choice_count();
        return AnalysisResult {
            function_name: function.name.clone(),
            variables: vars,
            matrix: None,
            choice_vectors: Vec::new(),
            infinite: false,
            problematic_flows: BTreeMap::new(),
            bound: None,
            warnings: ctx.into_warnings(),
            index,
            status: FunctionStatus::Unsupported,
            timing,
        };
    }

    ctx.mark_final();
    let index = ctx.choice_count();
    let outputs = ctx.outputs();
    let warnings = ctx.warnings().to_vec();

    let matrix = final_relation.matrix();
    let mut failure_sequences = Vec::new();
    for row in 0..matrix.dim() {
        for col in 0..matrix.dim() {
            failure_sequences.extend(matrix.get(row, col).infinite_sequences());
        }
    }

    let mut choice_vectors = simplifier::simplify(index, failure_sequences);
    if !ctx.config().run_to_completion {
        choice_vectors.truncate(1);
    }

    if choice_vectors.is_empty() && has_infinite_cell(matrix) {
        let problematic_flows = collect_problematic_flows(&vars, matrix);
        tracing::warn!(function = %function.name, "no choice avoids an infinite coefficient");
        return AnalysisResult {
            function_name: function.name.clone(),
            variables: vars,
            matrix: Some(matrix.clone()),
            choice_vectors: Vec::new(),
            infinite: true,
            problematic_flows,
            bound: None,
            warnings,
            index,
            status: FunctionStatus::Analyzed,
            timing,
        };
    }

    let witness = choice_vectors.first().map(|v| bound::canonical_witness(v)).unwrap_or_default();
    let bounds = bound::extract_for_relation(&final_relation, &witness);
    let rendered = bound::render_function_bound(&bounds, &outputs);

    tracing::debug!(function = %function.name, bound = %rendered, "analysis completed");

    AnalysisResult {
        function_name: function.name.clone(),
        variables: vars,
        matrix: Some(matrix.clone()),
        choice_vectors,
        infinite: false,
        problematic_flows: BTreeMap::new(),
        bound: Some(rendered),
        warnings,
        index,
        status: FunctionStatus::Analyzed,
        timing,
    }
}

fn has_infinite_cell(matrix: &Matrix) -> bool {
    (0..matrix.dim())
        .any(|r| (0..matrix.dim()).any(|c| matrix.get(r, c).monomials().iter().any(|m| m.coefficient() == Scalar::Infinite)))
}

/// `source -> {targets}` for every cell still holding an infinity
/// coefficient once every choice has been exhausted (§7 result shape).
fn collect_problematic_flows(vars: &[String], matrix: &Matrix) -> BTreeMap<String, BTreeSet<String>> {
    let mut flows: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (row, source) in vars.iter().enumerate() {
        for (col, target) in vars.iter().enumerate() {
            let cell = matrix.get(row, col);
            if cell.monomials().iter().any(|m| m.coefficient() == Scalar::Infinite) {
                flows.entry(source.clone()).or_default().insert(target.clone());
            }
        }
    }
    flows
}

/// Pre-pass (§4.7 step 1): every parameter, then every `Decl`
/// variable in appearance order, deduplicated.
fn collect_variables(function: &Function) -> Vec<String> {
    let mut vars = Vec::new();
    for p in &function.params {
        if !vars.contains(p) {
            vars.push(p.clone());
        }
    }
    collect_decls(&function.body, &mut vars);
    vars
}

fn collect_decls(stmt: &Stmt, vars: &mut Vec<String>) {
    match stmt {
        Stmt::Block(stmts) => stmts.iter().for_each(|s| collect_decls(s, vars)),
        Stmt::Decl { var, .. } => {
            if !vars.contains(var) {
                vars.push(var.clone());
            }
        }
        Stmt::If { then_branch, else_branch, .. } => {
            collect_decls(then_branch, vars);
            if let Some(b) = else_branch {
                collect_decls(b, vars);
            }
        }
        Stmt::While { body, .. } => collect_decls(body, vars),
        Stmt::For { init, body, step, .. } => {
            collect_decls(init, vars);
            collect_decls(body, vars);
            collect_decls(step, vars);
        }
        Stmt::Assign { .. } | Stmt::Break | Stmt::Continue | Stmt::Return(_) | Stmt::Call { .. } => {}
    }
}

/// Desugars `x++`, `x--` and unary `-x` into their `BinOp` expansions
/// before the ordinary assignment rule runs (§9). `!x` and `sizeof x`
/// are left alone — they remain unsupported at the point they are
/// evaluated.
fn desugar_stmt(stmt: &Stmt) -> Stmt {
    match stmt {
        Stmt::Block(stmts) => Stmt::Block(stmts.iter().map(desugar_stmt).collect()),
        Stmt::Decl { var, init } => Stmt::Decl { var: var.clone(), init: init.as_ref().map(desugar_expr) },
        Stmt::Assign { target, value } => Stmt::Assign { target: target.clone(), value: desugar_expr(value) },
        Stmt::If { cond, then_branch, else_branch } => Stmt::If {
            cond: cond.clone(),
            then_branch: Box::new(desugar_stmt(then_branch)),
            else_branch: else_branch.as_ref().map(|b| Box::new(desugar_stmt(b))),
        },
        Stmt::While { cond, body } => Stmt::While { cond: cond.clone(), body: Box::new(desugar_stmt(body)) },
        Stmt::For { init, cond, step, body } => Stmt::For {
            init: Box::new(desugar_stmt(init)),
            cond: cond.clone(),
            step: Box::new(desugar_stmt(step)),
            body: Box::new(desugar_stmt(body)),
        },
        Stmt::Break | Stmt::Continue | Stmt::Return(_) | Stmt::Call { .. } => stmt.clone(),
    }
}

fn desugar_expr(expr: &Expr) -> Expr {
    match expr {
        Expr::UnOp { op: UnOp::Inc, arg } => Expr::add((**arg).clone(), Expr::constant(1)),
        Expr::UnOp { op: UnOp::Dec, arg } => Expr::sub((**arg).clone(), Expr::constant(1)),
        Expr::UnOp { op: UnOp::Neg, arg } => Expr::sub(Expr::constant(0), (**arg).clone()),
        other => other.clone(),
    }
}

fn is_flat(expr: &Expr) -> bool {
    matches!(expr, Expr::Var(_) | Expr::Const(_))
}

/// Dispatches one statement, threading the accumulated relation
/// through. Once the context is aborted every further call is a
/// no-op — the caller still walks the rest of the tree (for warning
/// collection in skip mode) but composes nothing further.
fn analyze_stmt(ctx: &mut Context, current: Relation, stmt: &Stmt) -> Relation {
    if ctx.is_aborted() {
        return current;
    }
    match stmt {
        Stmt::Block(stmts) => {
            let mut acc = current;
            for s in stmts {
                if ctx.is_aborted() {
                    break;
                }
                acc = analyze_stmt(ctx, acc, s);
            }
            acc
        }
        Stmt::Decl { var, init } => match init {
            Some(expr) => analyze_assign(ctx, current, var, expr),
            None => current,
        },
        Stmt::Assign { target, value } => analyze_assign(ctx, current, target, value),
        Stmt::If { then_branch, else_branch, .. } => {
            let then_rel = analyze_stmt(ctx, current.clone(), then_branch);
            if ctx.is_aborted() {
                return current;
            }
            let else_rel = match else_branch {
                Some(b) => analyze_stmt(ctx, current.clone(), b),
                None => current.clone(),
            };
            if ctx.is_aborted() {
                return current;
            }
            RelationList::new(vec![then_rel, else_rel]).sum()
        }
        Stmt::While { body, .. } => analyze_while(ctx, current, body),
        Stmt::For { init, cond, step, body } => analyze_for(ctx, current, init, cond, step, body),
        Stmt::Break | Stmt::Continue => current,
        Stmt::Return(expr) => {
            if let Some(Expr::Var(name)) = expr {
                ctx.record_output(name);
            }
            current
        }
        Stmt::Call { name, .. } => unsupported(ctx, current, format!("call to `{name}` is not analyzed")),
    }
}

fn unsupported(ctx: &mut Context, current: Relation, detail: String) -> Relation {
    match ctx.config().unsupported_policy {
        UnsupportedPolicy::Strict => {
            ctx.warn(Warning::unsupported(detail));
            ctx.mark_aborted();
            current
        }
        UnsupportedPolicy::Skip => {
            ctx.warn(Warning::unsupported(detail));
            current
        }
    }
}

fn analyze_assign(ctx: &mut Context, current: Relation, target: &str, value: &Expr) -> Relation {
    match value {
        Expr::Const(_) => current,
        Expr::Var(name) => analyze_copy(current, target, name),
        Expr::BinOp { op, lhs, rhs } => {
            if !is_flat(lhs) || !is_flat(rhs) {
                return unsupported(ctx, current, format!("nested expression assigned to `{target}` is not supported"));
            }
            analyze_binop(ctx, current, target, op, lhs, rhs)
        }
        Expr::UnOp { op: UnOp::Not, .. } => unsupported(ctx, current, format!("logical negation assigned to `{target}`")),
        Expr::UnOp { op: UnOp::SizeOf, .. } => unsupported(ctx, current, format!("sizeof assigned to `{target}`")),
        Expr::UnOp { .. } => unsupported(ctx, current, format!("unary operator assigned to `{target}` was not desugared")),
        Expr::Call { name, .. } => unsupported(ctx, current, format!("call to `{name}` assigned to `{target}`")),
        Expr::Index { .. } => unsupported(ctx, current, format!("array subscript assigned to `{target}`")),
        Expr::Deref(_) => unsupported(ctx, current, format!("pointer dereference assigned to `{target}`")),
        Expr::AddrOf(_) => unsupported(ctx, current, format!("address-of assigned to `{target}`")),
        Expr::Cmp { .. } => unsupported(ctx, current, format!("comparison assigned to `{target}`")),
    }
}

/// `x := y` (§4.7): the identity update, plus one new `m` edge from
/// `y` into `x`'s column. `x`'s own diagonal entry is left untouched.
fn analyze_copy(current: Relation, target: &str, source: &str) -> Relation {
    let n = current.vars().len();
    let mut update = Matrix::identity(n);
    if let (Some(src), Some(tgt)) = (current.index_of(source), current.index_of(target)) {
        let existing = update.get(src, tgt).clone();
        update.set(src, tgt, existing.add(&Polynomial::constant(Scalar::M)));
    }
    current.compose(&Relation::new(current.vars().to_vec(), update))
}

/// Choice `j`'s coefficient pair for the two operands of `op` (§4.7):
/// choice 0 is `(p,p)` for `*` and `(m,p)` otherwise, choice 1 is
/// always `(p,m)`, choice 2 is always `(w,w)`.
fn operand_coefficients(op: &BinOp, choice: u8) -> (Scalar, Scalar) {
    match (op, choice) {
        (BinOp::Mul, 0) => (Scalar::P, Scalar::P),
        (_, 0) => (Scalar::M, Scalar::P),
        (_, 1) => (Scalar::P, Scalar::M),
        (_, 2) => (Scalar::W, Scalar::W),
        _ => unreachable!("only three choice values exist"),
    }
}

/// `x := e1 op e2` (§4.7) where both operands are flat (`Var` or
/// `Const`): allocates one fresh choice index, builds the three-way
/// branching update over `x`'s column, and composes it in.
fn analyze_binop(ctx: &mut Context, current: Relation, target: &str, op: &BinOp, lhs: &Expr, rhs: &Expr) -> Relation {
    let j = ctx.next_choice();
    let n = current.vars().len();
    let mut update = Matrix::identity(n);

    let Some(tgt) = current.index_of(target) else {
        return current;
    };
    update.set(tgt, tgt, Polynomial::zero());

    for choice in 0..3u8 {
        let (lhs_scalar, rhs_scalar) = operand_coefficients(op, choice);
        if let Some(src) = lhs.as_var().and_then(|name| current.index_of(name)) {
            add_monomial(&mut update, src, tgt, lhs_scalar, choice, j);
        }
        if let Some(src) = rhs.as_var().and_then(|name| current.index_of(name)) {
            add_monomial(&mut update, src, tgt, rhs_scalar, choice, j);
        }
    }

    current.compose(&Relation::new(current.vars().to_vec(), update))
}

fn add_monomial(matrix: &mut Matrix, row: usize, col: usize, coefficient: Scalar, choice_value: u8, choice_index: usize) {
    let existing = matrix.get(row, col).clone();
    let contribution = Polynomial::from_monomial(crate::algebra::Monomial::new(coefficient, vec![Delta::new(choice_value, choice_index)]));
    matrix.set(row, col, existing.add(&contribution));
}

fn analyze_while(ctx: &mut Context, current: Relation, body: &Stmt) -> Relation {
    if ctx.is_aborted() {
        return current;
    }
    let body_start = Relation::identity(current.vars().to_vec());
    let body_rel = analyze_stmt(ctx, body_start, body);
    if ctx.is_aborted() {
        return current;
    }
    match body_rel.matrix().fixpoint(ctx.config().fixpoint_iteration_cap) {
        Ok(star) => {
            // Unlike a bounded `for`, nothing here composes a
            // `p`-class bound on the iteration count afterward, so an
            // accumulator pattern in the body (a variable that folds
            // in an external `>= w` contribution while retaining part
            // of its own prior value) must be caught now.
            let star = star.escalate_unbounded_accumulation(body_rel.matrix());
            let loop_relation = Relation::new(current.vars().to_vec(), star);
            current.compose(&loop_relation)
        }
        Err(err) => {
            ctx.mark_fatal(err);
            current
        }
    }
}

/// `for (init; cond; step) { body }` (§4.6). `init` establishes the
/// iteration variable;
/// if it is reassigned inside `body` the construct is treated as
/// unsupported (the guard-variable check). The condition's other
/// operand, when it names a variable, is recorded as a maximal (`p`)
/// dependency of every variable `body` writes — the loop runs at
/// most that many times, so anything accumulated in the body cannot
/// outgrow it.
fn analyze_for(ctx: &mut Context, current: Relation, init: &Stmt, cond: &Expr, step: &Stmt, body: &Stmt) -> Relation {
    if ctx.is_aborted() {
        return current;
    }
    let acc = analyze_stmt(ctx, current, init);
    if ctx.is_aborted() {
        return acc;
    }

    let iter_var = match init {
        Stmt::Assign { target, .. } => Some(target.clone()),
        Stmt::Decl { var, .. } => Some(var.clone()),
        _ => None,
    };
    let Some(iter_var) = iter_var else {
        return unsupported(ctx, acc, "for-loop init must assign the iteration variable".to_string());
    };

    if assigns_to(body, &iter_var) {
        return unsupported(ctx, acc, format!("for-loop guard variable `{iter_var}` is reassigned in its own body"));
    }

    let bound_var = guard_bound_var(cond, &iter_var);

    let body_start = Relation::identity(acc.vars().to_vec());
    let body_rel = analyze_stmt(ctx, body_start, body);
    if ctx.is_aborted() {
        return acc;
    }
    let stepped = analyze_stmt(ctx, body_rel, step);
    if ctx.is_aborted() {
        return acc;
    }

    let star = match stepped.matrix().fixpoint(ctx.config().fixpoint_iteration_cap) {
        Ok(m) => m,
        Err(err) => {
            ctx.mark_fatal(err);
            return acc;
        }
    };
    let mut loop_relation = Relation::new(acc.vars().to_vec(), star);

    if let Some(bound_name) = bound_var {
        if let Some(bound_idx) = loop_relation.index_of(&bound_name) {
            let mut written = Vec::new();
            collect_writes(body, &mut written);
            collect_writes(step, &mut written);
            let mut m = loop_relation.matrix().clone();
            for w in &written {
                if w == &iter_var {
                    continue;
                }
                if let Some(widx) = loop_relation.index_of(w) {
                    let existing = m.get(bound_idx, widx).clone();
                    m.set(bound_idx, widx, existing.add(&Polynomial::constant(Scalar::P)));
                }
            }
            loop_relation = Relation::new(loop_relation.vars().to_vec(), m);
        }
    }

    acc.compose(&loop_relation)
}

/// The variable on `cond`'s non-`iter_var` side, when `cond` is a
/// comparison naming one directly (§4.6 "N does not occur in body").
fn guard_bound_var(cond: &Expr, iter_var: &str) -> Option<String> {
    match cond {
        Expr::Cmp { lhs, rhs, .. } => [lhs.as_ref(), rhs.as_ref()].into_iter().find_map(|side| match side {
            Expr::Var(name) if name != iter_var => Some(name.clone()),
            _ => None,
        }),
        _ => None,
    }
}

fn assigns_to(stmt: &Stmt, var: &str) -> bool {
    match stmt {
        Stmt::Block(stmts) => stmts.iter().any(|s| assigns_to(s, var)),
        Stmt::Assign { target, .. } => target == var,
        Stmt::Decl { .. } => false,
        Stmt::If { then_branch, else_branch, .. } => {
            assigns_to(then_branch, var) || else_branch.as_ref().is_some_and(|b| assigns_to(b, var))
        }
        Stmt::While { body, .. } => assigns_to(body, var),
        Stmt::For { init, step, body, .. } => assigns_to(init, var) || assigns_to(step, var) || assigns_to(body, var),
        Stmt::Break | Stmt::Continue | Stmt::Return(_) | Stmt::Call { .. } => false,
    }
}

fn collect_writes(stmt: &Stmt, out: &mut Vec<String>) {
    match stmt {
        Stmt::Block(stmts) => stmts.iter().for_each(|s| collect_writes(s, out)),
        Stmt::Assign { target, .. } => {
            if !out.contains(target) {
                out.push(target.clone());
            }
        }
        Stmt::Decl { var, init: Some(_) } => {
            if !out.contains(var) {
                out.push(var.clone());
            }
        }
        Stmt::Decl { .. } => {}
        Stmt::If { then_branch, else_branch, .. } => {
            collect_writes(then_branch, out);
            if let Some(b) = else_branch {
                collect_writes(b, out);
            }
        }
        Stmt::While { body, .. } => collect_writes(body, out),
        Stmt::For { init, step, body, .. } => {
            collect_writes(init, out);
            collect_writes(body, out);
            collect_writes(step, out);
        }
        Stmt::Break | Stmt::Continue | Stmt::Return(_) | Stmt::Call { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CmpOp;

    fn func(name: &str, params: &[&str], body: Stmt) -> Function {
        Function { name: name.to_string(), params: params.iter().map(|s| s.to_string()).collect(), body }
    }

    #[test]
    fn straight_line_copy_chain_is_bounded_with_expected_shape() {
        // y1 := x1; y2 := y1 + y1
        let body = Stmt::block(vec![
            Stmt::assign("y1", Expr::var("x1")),
            Stmt::assign("y2", Expr::add(Expr::var("y1"), Expr::var("y1"))),
        ]);
        let f = func("scenario1", &["x1", "y1", "y2"], body);
        let result = analyze_function(&f, &AnalyzerConfig::default());
        assert_eq!(result.status, FunctionStatus::Analyzed);
        assert!(!result.infinite);
        assert_eq!(result.bound.as_deref(), Some("y2\u{2032} \u{2264} y1"));
    }

    #[test]
    fn self_squaring_inside_unbounded_loop_is_infinite() {
        // x := p; while (n > 0) { p := p * p; r := x; }
        let body = Stmt::block(vec![
            Stmt::assign("p", Expr::var("x")),
            Stmt::while_loop(
                Expr::cmp(CmpOp::Gt, Expr::var("n"), Expr::constant(0)),
                Stmt::block(vec![
                    Stmt::assign("p", Expr::mul(Expr::var("p"), Expr::var("p"))),
                    Stmt::assign("r", Expr::var("x")),
                ]),
            ),
        ]);
        let f = func("scenario2", &["x", "n", "p", "r"], body);
        let result = analyze_function(&f, &AnalyzerConfig::default());
        assert_eq!(result.status, FunctionStatus::Analyzed);
        assert!(result.infinite);
        assert!(result.problematic_flows.get("p").is_some_and(|ts| ts.contains("p")));
    }

    #[test]
    fn self_referencing_addition_inside_unbounded_loop_is_infinite() {
        // if (x1 == 1) { x1 := x2 + x1; x2 := x3 + x2; } while (x1 < 10) { x1 := x2 + x1; }
        let branch = Stmt::block(vec![
            Stmt::assign("x1", Expr::add(Expr::var("x2"), Expr::var("x1"))),
            Stmt::assign("x2", Expr::add(Expr::var("x3"), Expr::var("x2"))),
        ]);
        let body = Stmt::block(vec![
            Stmt::if_then_else(Expr::cmp(CmpOp::Eq, Expr::var("x1"), Expr::constant(1)), branch, None),
            Stmt::while_loop(
                Expr::cmp(CmpOp::Lt, Expr::var("x1"), Expr::constant(10)),
                Stmt::assign("x1", Expr::add(Expr::var("x2"), Expr::var("x1"))),
            ),
        ]);
        let f = func("scenario5", &["x1", "x2", "x3"], body);
        let result = analyze_function(&f, &AnalyzerConfig::default());
        assert_eq!(result.status, FunctionStatus::Analyzed);
        assert!(result.infinite);
    }

    #[test]
    fn bounded_for_loop_records_the_guard_variable_as_a_maximal_dependency() {
        // for (i := 0; i < n; i++) { s := s + x; }
        let f = func(
            "scenario6",
            &["n", "x", "s"],
            Stmt::block(vec![Stmt::for_loop(
                Stmt::assign("i", Expr::constant(0)),
                Expr::lt(Expr::var("i"), Expr::var("n")),
                Stmt::assign("i", Expr::add(Expr::var("i"), Expr::constant(1))),
                Stmt::assign("s", Expr::add(Expr::var("s"), Expr::var("x"))),
            )]),
        );
        let result = analyze_function(&f, &AnalyzerConfig::default());
        assert_eq!(result.status, FunctionStatus::Analyzed);
        assert!(!result.infinite);
        let bound = result.bound.unwrap();
        assert!(bound.contains('n'), "expected the loop bound `n` to appear in {bound}");
    }

    #[test]
    fn strict_mode_aborts_on_a_nested_expression() {
        let f = func(
            "bad",
            &["x", "y", "z"],
            Stmt::assign("x", Expr::add(Expr::add(Expr::var("y"), Expr::var("z")), Expr::constant(1))),
        );
        let result = analyze_function(&f, &AnalyzerConfig::strict());
        assert_eq!(result.status, FunctionStatus::Unsupported);
    }

    #[test]
    fn skip_mode_treats_a_nested_expression_as_identity_and_keeps_going() {
        let f = func(
            "ok",
            &["x", "y", "z"],
            Stmt::block(vec![
                Stmt::assign("x", Expr::add(Expr::add(Expr::var("y"), Expr::var("z")), Expr::constant(1))),
                Stmt::assign("y", Expr::var("z")),
            ]),
        );
        let result = analyze_function(&f, &AnalyzerConfig::default());
        assert_eq!(result.status, FunctionStatus::Analyzed);
        assert_eq!(result.warnings.len(), 1);
    }
}
