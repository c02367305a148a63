//! Property-based tests for the scanner, parser and evaluator
//!
//! These tests use proptest to verify that:
//! 1. The scanner and parser never panic on arbitrary input
//! 2. Evaluation of random well-bracketed programs never panics
//! 3. Numeric `==` agrees with IEEE-754 equality
//! 4. Printing a value and reading it back yields an equal value

use lispy::parser::parse_source;
use lispy::runtime::read_expression;
use lispy::{Interpreter, Value};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Tokens that look like program elements; no token can build a loop
fn program_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("<".to_string()),
        Just("==".to_string()),
        Just("head".to_string()),
        Just("tail".to_string()),
        Just("list".to_string()),
        Just("join".to_string()),
        Just("if".to_string()),
        (-100i64..100i64).prop_map(|n| n.to_string()),
        r#""[a-z ]{0,8}""#.prop_map(|s| s),
        "[xyz]{1,2}".prop_map(|s| s),
    ]
}

fn finite_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        any::<f64>().prop_filter("finite", |f| f.is_finite()),
        (-1000i32..1000i32).prop_map(f64::from),
    ]
}

/// Values whose printed form reads back as the same value
fn printable_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        finite_number().prop_map(Value::Number),
        "[a-z][a-z0-9_]{0,8}".prop_map(Value::Symbol),
        r#"[^"]{0,12}"#.prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::LiteralList),
            prop::collection::vec(inner, 0..6).prop_map(Value::EvalList),
        ]
    })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn scanner_never_panics(source in "\\PC{0,200}") {
        let _ = parse_source(&source);
    }

    #[test]
    fn evaluation_never_panics(tokens in prop::collection::vec(program_token(), 0..40)) {
        let source = tokens.join(" ");
        if let Ok(results) = Interpreter::new().eval_source(&source) {
            for result in results {
                let _ = result.to_string();
            }
        }
    }

    #[test]
    fn numeric_equality_matches_ieee(a in any::<f64>(), b in any::<f64>()) {
        let interp = Interpreter::new();
        let compare = |x: f64, y: f64| {
            interp.eval(Value::EvalList(vec![
                Value::Symbol("==".to_string()),
                Value::Number(x),
                Value::Number(y),
            ]))
        };

        let expected = if a == b { 1.0 } else { 0.0 };
        prop_assert_eq!(compare(a, b), Value::Number(expected));
        prop_assert_eq!(compare(a, a), Value::Number(if a.is_nan() { 0.0 } else { 1.0 }));
    }

    #[test]
    fn numeric_equality_from_source(a in finite_number(), b in finite_number()) {
        let source = format!("(== {} {})", a, b);
        let results = Interpreter::new().eval_source(&source).unwrap();
        let expected = if a == b { 1.0 } else { 0.0 };
        prop_assert_eq!(&results[0], &Value::Number(expected));
    }

    #[test]
    fn print_then_read_round_trips(value in printable_value()) {
        let text = value.to_string();
        let program = parse_source(&text).unwrap();
        prop_assert_eq!(program.expressions.len(), 1);
        prop_assert_eq!(read_expression(&program.expressions[0]), value);
    }
}
