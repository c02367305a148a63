//! End-to-end tests for evaluation, closures and error propagation

use lispy::{Interpreter, Value};

fn eval_all(source: &str) -> Vec<Value> {
    Interpreter::new()
        .eval_source(source)
        .expect("source should parse")
}

fn eval_last(source: &str) -> Value {
    eval_all(source).pop().unwrap_or_else(Value::empty)
}

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn nums(values: &[f64]) -> Value {
    Value::LiteralList(values.iter().copied().map(Value::Number).collect())
}

// =============================================================================
// EVALUATION
// =============================================================================

#[test]
fn test_simple_addition() {
    assert_eq!(eval_last("(+ 1 2)"), num(3.0));
}

#[test]
fn test_nested_arithmetic() {
    assert_eq!(eval_last("(* (+ 1 2) (- 10 4))"), num(18.0));
    assert_eq!(eval_last("(- (- 5))"), num(5.0));
}

#[test]
fn test_empty_form_is_self_evaluating() {
    assert_eq!(eval_last("()"), Value::EvalList(vec![]));
}

#[test]
fn test_single_element_form() {
    assert_eq!(eval_last("(5)"), num(5.0));
    assert_eq!(eval_last("((((7))))"), num(7.0));
    assert_eq!(eval_last("({1 2})"), nums(&[1.0, 2.0]));
    assert_eq!(eval_last("(+)").to_string(), "builtin");
}

#[test]
fn test_atoms_evaluate_to_themselves() {
    let results = eval_all("42 \"text\" {a b c}");
    assert_eq!(results[0], num(42.0));
    assert_eq!(results[1], Value::String("text".to_string()));
    assert_eq!(results[2].to_string(), "{a b c}");
}

#[test]
fn test_head_of_non_function() {
    assert_eq!(
        eval_last("(1 2 3)"),
        Value::Error("First Element is not a function".to_string())
    );
}

#[test]
fn test_unbound_symbol() {
    assert_eq!(
        eval_last("(+ 1 missing)"),
        Value::Error("Unbound Symbol".to_string())
    );
}

#[test]
fn test_first_error_wins() {
    assert_eq!(
        eval_last("(list (head {}) missing (/ 1 0))"),
        Value::Error("Function 'head' passed {}".to_string())
    );
    assert_eq!(
        eval_last("(list 1 (/ 1 0) (head {}))"),
        Value::Error("Cannot divide by 0".to_string())
    );
}

#[test]
fn test_errors_propagate_through_nesting() {
    assert_eq!(
        eval_last("(+ 1 (* 2 (/ 3 0)))"),
        Value::Error("Cannot divide by 0".to_string())
    );
}

#[test]
fn test_arguments_evaluated_left_to_right() {
    let results = eval_all("(list (def {x} 1) (def {x} 2)) x");
    assert_eq!(results[1], num(2.0));
}

// =============================================================================
// CLOSURES
// =============================================================================

#[test]
fn test_closure_call() {
    assert_eq!(eval_last("((fn {x y} {+ x y}) 3 4)"), num(7.0));
}

#[test]
fn test_zero_formal_closure_call() {
    assert_eq!(eval_last("(def {answer} (fn {} {42})) (answer)"), num(42.0));
}

#[test]
fn test_lone_closure_result_is_applied() {
    // The body `{x}` is a one-element form, so a zero-formal closure bound to
    // `x` runs instead of being returned
    let source = r#"
        (def {id} (fn {x} {x}))
        (id (fn {} {5}))
    "#;
    assert_eq!(eval_last(source), num(5.0));

    // A closure still waiting for arguments comes back unchanged
    let source = r#"
        (def {id} (fn {x} {x}))
        (id (fn {y} {y}))
    "#;
    assert_eq!(eval_last(source).to_string(), "(\\ {y} {y})");
}

#[test]
fn test_backslash_in_string_is_literal() {
    let results = eval_all(r#""C:\dir\x.lspy" (load "C:\dir\x.lspy")"#);
    assert_eq!(results[0], Value::String("C:\\dir\\x.lspy".to_string()));
    assert_eq!(results[0].to_string(), r#""C:\dir\x.lspy""#);
    match &results[1] {
        Value::Error(message) => assert!(message.starts_with("Could not load C:\\dir\\x.lspy: ")),
        other => panic!("expected load error, got {}", other),
    }
}

#[test]
fn test_currying() {
    let source = r#"
        (def {add2} (fn {a b} {+ a b}))
        (def {add5} (add2 5))
        (add5 3)
    "#;
    assert_eq!(eval_last(source), num(8.0));
}

#[test]
fn test_curried_closure_prints_remaining_formals() {
    assert_eq!(
        eval_last("((fn {a b} {+ a b}) 1)").to_string(),
        "(\\ {b} {+ a b})"
    );
}

#[test]
fn test_each_partial_application_is_independent() {
    let source = r#"
        (def {pair} (fn {a b} {list a b}))
        (def {one} (pair 1))
        (def {two} (pair 2))
        (list (one 10) (two 20))
    "#;
    assert_eq!(eval_last(source).to_string(), "{{1 10} {2 20}}");
}

#[test]
fn test_call_time_parent_binding() {
    let source = r#"
        (def {x} 1)
        (def {f} (fn {} {x}))
        (def {x} 2)
        (f)
    "#;
    assert_eq!(eval_last(source), num(2.0));
}

#[test]
fn test_closure_sees_callers_locals() {
    let source = r#"
        (def {show} (fn {} {y}))
        (def {wrap} (fn {y} {show}))
        (wrap 7)
    "#;
    assert_eq!(eval_last(source), num(7.0));
}

#[test]
fn test_recursion() {
    let source = r#"
        (def {fact} (fn {n} {if (<= n 1) {1} {* n (fact (- n 1))}}))
        (fact 5)
    "#;
    assert_eq!(eval_last(source), num(120.0));
}

#[test]
fn test_too_many_arguments() {
    assert_eq!(
        eval_last("((fn {x} {x}) 1 2)"),
        Value::Error("Function passed too many arguments".to_string())
    );
}

#[test]
fn test_rest_marker() {
    let source = r#"
        (def {rest} (fn {first & others} {others}))
        (list (rest 1 2 3) (rest 1))
    "#;
    assert_eq!(eval_last(source).to_string(), "{{2 3} {}}");
}

#[test]
fn test_rest_marker_only() {
    assert_eq!(eval_last("((fn {& xs} {xs}) 1 2 3)"), nums(&[1.0, 2.0, 3.0]));
}

#[test]
fn test_malformed_rest_marker() {
    assert_eq!(
        eval_last("((fn {x & a b} {x}) 1 2 3)"),
        Value::Error("Symbol & not followed by a single symbol.".to_string())
    );
}

#[test]
fn test_local_put_vs_global_def() {
    let source = r#"
        (def {set-local} (fn {v} {= {hidden} v}))
        (def {set-global} (fn {v} {def {shared} v}))
        (set-local 5)
        (set-global 6)
        hidden
        shared
    "#;
    let results = eval_all(source);
    assert_eq!(results[4], Value::Error("Unbound Symbol".to_string()));
    assert_eq!(results[5], num(6.0));
}

#[test]
fn test_put_at_top_level_is_global() {
    assert_eq!(eval_last("(= {z} 9) z"), num(9.0));
}

// =============================================================================
// EQUALITY AND PRESENTATION
// =============================================================================

#[test]
fn test_builtin_identity() {
    let results = eval_all("(== head head) (== head tail) (def {h} head) (== h head)");
    assert_eq!(results[0], num(1.0));
    assert_eq!(results[1], num(0.0));
    assert_eq!(results[3], num(1.0));
}

#[test]
fn test_closure_structural_equality() {
    let results = eval_all("(== (fn {x} {x}) (fn {x} {x})) (== (fn {x} {x}) (fn {y} {y}))");
    assert_eq!(results[0], num(1.0));
    assert_eq!(results[1], num(0.0));
}

#[test]
fn test_list_equality() {
    let results = eval_all("(== {1 {2}} {1 {2}}) (== {1 2} {1}) (== {} ())");
    assert_eq!(results[0], num(1.0));
    assert_eq!(results[1], num(0.0));
    assert_eq!(results[2], num(0.0));
}

#[test]
fn test_display() {
    let results = eval_all(r#"(fn {a b} {+ a b}) head {1 "s" {x}} 2.5"#);
    assert_eq!(results[0].to_string(), "(\\ {a b} {+ a b})");
    assert_eq!(results[1].to_string(), "builtin");
    assert_eq!(results[2].to_string(), "{1 \"s\" {x}}");
    assert_eq!(results[3].to_string(), "2.5");
}
