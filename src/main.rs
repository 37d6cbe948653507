//! A thin demonstration binary. Parsing source text into the
//! [`mwp_analyzer::ast`] this crate consumes, and everything else the
//! CLI surface in the design (`--strict`, `--fin`, result
//! serialization) covers, is explicitly out of scope (spec §1, §6):
//! this binary only shows the library analyzing a couple of
//! hand-built ASTs end to end.

use mwp_analyzer::ast::{CmpOp, Expr, Function, Program, Stmt};
use mwp_analyzer::result::AnalysisOutcome;
use mwp_analyzer::{analyze_program, AnalyzerConfig};

fn scenario_1() -> Function {
    // void foo(int y1, int y2) { y2 = y1 + y1; }
    Function {
        name: "foo".to_string(),
        params: vec!["y1".to_string(), "y2".to_string()],
        body: Stmt::block(vec![Stmt::assign("y2", Expr::add(Expr::var("y1"), Expr::var("y1")))]),
    }
}

fn scenario_2() -> Function {
    // void main(int x, int n, int p, int r) {
    //   p = x;
    //   while (n > 0) { p = p * p; r = p * r; }
    // }
    Function {
        name: "main".to_string(),
        params: vec!["x".to_string(), "n".to_string(), "p".to_string(), "r".to_string()],
        body: Stmt::block(vec![
            Stmt::assign("p", Expr::var("x")),
            Stmt::while_loop(
                Expr::cmp(CmpOp::Gt, Expr::var("n"), Expr::constant(0)),
                Stmt::block(vec![
                    Stmt::assign("p", Expr::mul(Expr::var("p"), Expr::var("p"))),
                    Stmt::assign("r", Expr::mul(Expr::var("p"), Expr::var("r"))),
                ]),
            ),
        ]),
    }
}

fn main() {
    let program = Program { functions: vec![scenario_1(), scenario_2()] };
    let result = analyze_program(&program, &AnalyzerConfig::default());

    for outcome in result.functions {
        match outcome {
            AnalysisOutcome::Completed(r) if r.infinite => {
                println!("{}: infinite", r.function_name);
                for (source, targets) in &r.problematic_flows {
                    for target in targets {
                        println!("  {source} -> {target}");
                    }
                }
            }
            AnalysisOutcome::Completed(r) => {
                println!("{}: {}", r.function_name, r.bound.unwrap_or_else(|| "0".to_string()));
            }
            AnalysisOutcome::ParseFailure(msg) => {
                println!("parse failure: {msg}");
            }
        }
    }
}
