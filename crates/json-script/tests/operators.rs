//! Integration tests for the built-in operator table.

use json_script::{Node, NodeValue, Registry, ScriptError};
use proptest::prelude::*;
use serde_json::{json, Value};

fn eval(token: &str, left: Value, right: Value) -> Result<Node, ScriptError> {
    Registry::new().evaluate(token, &Node::from(left), &Node::from(right))
}

fn check(token: &str, left: Value, right: Value, expected: Value) {
    let result = eval(token, left.clone(), right.clone())
        .unwrap_or_else(|e| panic!("{} {} {} failed: {}", left, token, right, e));
    assert_eq!(result.to_json(), expected, "{} {} {}", left, token, right);
}

fn check_err(token: &str, left: Value, right: Value) -> ScriptError {
    eval(token, left.clone(), right.clone())
        .err()
        .unwrap_or_else(|| panic!("expected error for {} {} {}", left, token, right))
}

// ----------------------------------------------------------------- Precedence

#[test]
fn precedence_levels() {
    let registry = Registry::new();
    let levels = [
        (6, vec!["**"]),
        (5, vec!["*", "/", "%", "<<", ">>", "&", "&^"]),
        (4, vec!["+", "-", "|", "^"]),
        (3, vec!["==", "!=", "<", "<=", ">", ">=", "=~"]),
        (2, vec!["&&"]),
        (1, vec!["||"]),
    ];
    for (level, tokens) in levels {
        for token in tokens {
            assert_eq!(registry.precedence(token), Some(level), "token {}", token);
        }
    }
    assert_eq!(registry.precedence("!"), None);
}

#[test]
fn only_power_is_right_associative() {
    let registry = Registry::new();
    for token in registry.operators_by_length() {
        assert_eq!(registry.is_right_associative(token), token == "**", "token {}", token);
    }
}

#[test]
fn operator_first_bytes() {
    let registry = Registry::new();
    for byte in b"*/%<>&|^+-=!" {
        assert!(registry.starts_operator(*byte), "byte {}", *byte as char);
    }
    for byte in b"@$.(a0 " {
        assert!(!registry.starts_operator(*byte), "byte {}", *byte as char);
    }
}

#[test]
fn longer_tokens_come_before_their_prefixes() {
    let registry = Registry::new();
    let tokens = registry.operators_by_length();
    assert_eq!(tokens.len(), 21);
    for (i, long) in tokens.iter().enumerate() {
        for short in &tokens[i + 1..] {
            assert!(short.len() <= long.len());
        }
        for short in &tokens[..i] {
            assert!(
                !(long.starts_with(short) && long.len() > short.len()),
                "{} listed after its prefix {}",
                long,
                short
            );
        }
    }
}

// ----------------------------------------------------------------- Arithmetic

#[test]
fn test_power() {
    check("**", json!(2), json!(10), json!(1024));
    check("**", json!(4), json!(0.5), json!(2));
}

#[test]
fn test_multiply_subtract() {
    check("*", json!(3), json!(2.5), json!(7.5));
    check("-", json!(1), json!(2), json!(-1));
}

#[test]
fn test_divide() {
    check("/", json!(10), json!(4), json!(2.5));
    assert_eq!(check_err("/", json!(1), json!(0)), ScriptError::DivisionByZero);
    assert_eq!(check_err("/", json!(0), json!(-0.0)), ScriptError::DivisionByZero);
}

#[test]
fn test_remainder() {
    check("%", json!(10), json!(3), json!(1));
    check("%", json!(-7), json!(2), json!(-1));
    assert_eq!(check_err("%", json!(1), json!(0)), ScriptError::DivisionByZero);
    assert!(matches!(
        check_err("%", json!(1.5), json!(1)),
        ScriptError::TypeCoercion { .. }
    ));
}

#[test]
fn test_add_numbers() {
    check("+", json!(1), json!(2), json!(3));
    check("+", json!(0.5), json!(0.25), json!(0.75));
}

#[test]
fn test_add_strings_concatenates() {
    check("+", json!("foo"), json!("bar"), json!("foobar"));
    check("+", json!("1"), json!("2"), json!("12"));
    check("+", json!(""), json!(""), json!(""));
}

#[test]
fn test_add_mixed_types() {
    // the left operand picks the family; the right must follow it
    assert!(matches!(
        check_err("+", json!("a"), json!(1)),
        ScriptError::TypeCoercion { expected: "string", .. }
    ));
    assert!(matches!(
        check_err("+", json!(1), json!("a")),
        ScriptError::TypeCoercion { expected: "numeric", .. }
    ));
}

#[test]
fn test_arithmetic_rejects_non_numeric() {
    for token in ["**", "*", "/", "-"] {
        assert!(matches!(
            check_err(token, json!(true), json!(1)),
            ScriptError::TypeCoercion { .. }
        ));
        assert!(matches!(
            check_err(token, json!(1), json!(null)),
            ScriptError::TypeCoercion { .. }
        ));
    }
}

// -------------------------------------------------------------------- Bitwise

#[test]
fn test_bitwise() {
    check("&", json!(12), json!(10), json!(8));
    check("|", json!(12), json!(10), json!(14));
    check("^", json!(12), json!(10), json!(6));
    check("&^", json!(12), json!(10), json!(4));
}

#[test]
fn test_shifts() {
    check("<<", json!(1), json!(10), json!(1024));
    check(">>", json!(1024), json!(3), json!(128));
    check(">>", json!(-16), json!(2), json!(-4));
    assert!(matches!(
        check_err("<<", json!(1), json!(-1)),
        ScriptError::TypeCoercion { expected: "unsigned integer", .. }
    ));
    assert!(matches!(
        check_err(">>", json!(1.5), json!(1)),
        ScriptError::TypeCoercion { expected: "integer", .. }
    ));
}

// ----------------------------------------------------------------- Comparison

#[test]
fn test_equality() {
    check("==", json!(1), json!(1.0), json!(true));
    check("==", json!("a"), json!("a"), json!(true));
    check("==", json!(null), json!(null), json!(true));
    check("==", json!([1, {"a": 2}]), json!([1, {"a": 2}]), json!(true));
    check("==", json!(1), json!("1"), json!(false));
    check("!=", json!(1), json!("1"), json!(true));
    check("!=", json!(true), json!(true), json!(false));
}

#[test]
fn test_ordering() {
    check("<", json!(1), json!(2), json!(true));
    check("<=", json!(2), json!(2), json!(true));
    check(">", json!("b"), json!("a"), json!(true));
    check(">=", json!("a"), json!("b"), json!(false));
    check("<", json!(1), json!("2"), json!(false));
    check(">", json!(null), json!(0), json!(false));
}

#[test]
fn test_ordering_unorderable_types() {
    assert!(matches!(
        check_err("<", json!(true), json!(false)),
        ScriptError::TypeCoercion { .. }
    ));
    assert!(matches!(
        check_err(">=", json!([1]), json!([2])),
        ScriptError::TypeCoercion { .. }
    ));
}

#[test]
fn test_regex_match() {
    check("=~", json!("hello world"), json!("o w"), json!(true));
    check("=~", json!("hello"), json!("^h.*o$"), json!(true));
    check("=~", json!("hello"), json!("^world"), json!(false));
    assert!(matches!(
        check_err("=~", json!("hello"), json!("(")),
        ScriptError::Regex(_)
    ));
    assert!(matches!(
        check_err("=~", json!(1), json!("1")),
        ScriptError::TypeCoercion { .. }
    ));
}

// -------------------------------------------------------------------- Logical

#[test]
fn test_and_or() {
    check("&&", json!(true), json!(1), json!(true));
    check("&&", json!(true), json!(""), json!(false));
    check("&&", json!([]), json!(true), json!(false));
    check("||", json!(0), json!("x"), json!(true));
    check("||", json!(null), json!({}), json!(false));
    check("||", json!({"a": 1}), json!(null), json!(true));
}

#[test]
fn results_are_detached_and_labelled() {
    let result = eval("/", json!(1), json!(4)).unwrap();
    assert_eq!(result.value(), &NodeValue::Numeric(0.25));
    assert_eq!(result.label(), "division");
}

#[test]
fn unknown_operator() {
    assert_eq!(
        check_err("<>", json!(1), json!(2)),
        ScriptError::UnsupportedOperator("<>".to_string())
    );
}

proptest! {
    #[test]
    fn division_matches_ieee(a in -1e12f64..1e12, b in -1e12f64..1e12) {
        prop_assume!(b != 0.0);
        let result = Registry::new()
            .evaluate("/", &Node::numeric("a", a), &Node::numeric("b", b))
            .unwrap();
        prop_assert_eq!(result.get_numeric().unwrap().to_bits(), (a / b).to_bits());
    }

    #[test]
    fn string_addition_concatenates(s in ".*", t in ".*") {
        let result = Registry::new()
            .evaluate("+", &Node::string("s", s.clone()), &Node::string("t", t.clone()))
            .unwrap();
        prop_assert_eq!(result.get_string().unwrap(), format!("{}{}", s, t));
    }
}
