use std::{fs, thread};

use rpncalc::calculate;
use walkdir::WalkDir;

#[test]
fn case_files_evaluate() {
    let mut count = 0;

    for entry in WalkDir::new("tests/data").into_iter()
                                           .filter_map(Result::ok)
                                           .filter(|e| {
                                               e.path().extension().is_some_and(|ext| ext == "txt")
                                           })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_cases(&content) {
            count += 1;
            let expected: f64 = expected.parse()
                                        .unwrap_or_else(|e| panic!("Bad expected value in {path:?}: {e}"));
            match calculate(expression) {
                Ok(value) => assert_same(value, expected, expression),
                Err(e) => panic!("Case {expression:?} in {path:?} failed: {e}"),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/data");
}

fn extract_cases(content: &str) -> Vec<(&str, &str)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
           .filter_map(|line| line.rsplit_once(" => "))
           .map(|(expression, expected)| (expression, expected.trim()))
           .collect()
}

fn assert_same(value: f64, expected: f64, expression: &str) {
    if expected.is_nan() {
        assert!(value.is_nan(), "{expression:?} gave {value}, expected NaN");
    } else {
        assert!(value == expected || (value - expected).abs() < 1e-12,
                "{expression:?} gave {value}, expected {expected}");
    }
}

fn assert_result(src: &str, expected: f64) {
    match calculate(src) {
        Ok(value) => assert_same(value, expected, src),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = calculate(src) {
        panic!("Expression {src:?} evaluated to {value} but was expected to fail")
    }
}

#[test]
fn operator_precedence() {
    assert_result("2+3*4", 14.0);
    assert_result("(2+3)*4", 20.0);
    assert_result("2+3^2", 11.0);
    assert_result("2*3^2", 18.0);
}

#[test]
fn equal_rank_is_left_associative() {
    assert_result("8-3-2", 3.0);
    assert_result("8/4/2", 1.0);
    assert_result("2*6/3", 4.0);
    assert_result("12/3*2", 8.0);
}

// `^` shares the left-to-right rule with every other operator, so a tower of
// powers is not evaluated the conventional right-to-left way.
#[test]
fn power_is_left_associative() {
    assert_result("2^3", 8.0);
    assert_result("2^3^2", 64.0);
    assert_result("(2^3)^2", 64.0);
    assert_result("2^(3^2)", 512.0);
}

#[test]
fn fractional_and_negative_exponents() {
    assert_result("4^0.5", 2.0);
    assert_result("2^-2", 0.25);
    assert!(calculate("(-8)^0.5").unwrap().is_nan());
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(calculate("5/0").unwrap(), f64::INFINITY);
    assert_eq!(calculate("-5/0").unwrap(), f64::NEG_INFINITY);
    assert!(calculate("0/0").unwrap().is_nan());
    assert_eq!(calculate("1/(2-2)").unwrap(), f64::INFINITY);
}

#[test]
fn nested_parentheses() {
    assert_result("((1+2)*(3+4))", 21.0);
    assert_result("(((7)))", 7.0);
    assert_result("2*((3+1)*(2+(1+1)))", 32.0);
}

#[test]
fn delimiters_are_skipped() {
    assert_result("1 + 1", 2.0);
    assert_result("= 1 + 1 =", 2.0);
    assert_result("2*3=", 6.0);
    assert_result("  ( 4 - 1 ) * 2 ", 6.0);
}

#[test]
fn decimal_literals() {
    assert_result("3.5*2", 7.0);
    assert_result("0.1+0.2", 0.1 + 0.2);
    assert_result("1e3+1", 1001.0);
}

#[test]
fn signed_literals() {
    assert_result("-5", -5.0);
    assert_result("-3*-3", 9.0);
    assert_result("(-2)*4", -8.0);
    assert_result("2--3", 5.0);
}

#[test]
fn unbalanced_parentheses_fail() {
    assert_failure("(1+2");
    assert_failure("1+2)");
    assert_failure(")(");
    assert_failure("((1)");
}

#[test]
fn malformed_input_fails() {
    assert_failure("");
    assert_failure("1+");
    assert_failure("*");
    assert_failure("- 5");
    assert_failure("1.2.3");
    assert_failure("2*x");
}

#[test]
fn repeated_calls_agree() {
    let expression = "(1.5+2)*3^2/7-0.25";
    let first = calculate(expression).unwrap();
    for _ in 0..10 {
        assert_eq!(calculate(expression).unwrap().to_bits(), first.to_bits());
    }
}

#[test]
fn concurrent_calls_are_independent() {
    let expressions = ["2+3*4", "(2+3)*4", "8-3-2", "2^3^2", "5/0", "((1+2)*(3+4))"];
    let expected = expressions.map(|e| calculate(e).unwrap());

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (expression, value) in expressions.iter().zip(expected) {
                    assert_eq!(calculate(expression).unwrap(), value);
                }
            });
        }
    });
}
