//! Property-based tests for the calculator and printer sessions.

use clap::Parser;
use proptest::prelude::*;

use basics_lib::app::run_with;
use basics_lib::config::AppConfig;

fn run(args: &[&str], input: &str) -> String {
    let config = AppConfig::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    run_with(&config, input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Quiet calculator output parses back to the native result.
    #[test]
    fn quiet_result_roundtrips(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6, idx in 0usize..3) {
        let (op, expected) = [('+', a + b), ('-', a - b), ('*', a * b)][idx];
        let out = run(&["basics", "calc", "-q"], &format!("{a} {b} {op}"));
        let printed: f64 = out.trim().parse().unwrap();
        prop_assert_eq!(printed.to_bits(), expected.to_bits());
    }

    /// Unknown operators never print a result.
    #[test]
    fn unknown_operator_never_computes(a in -100i32..100, b in -100i32..100, op in "[a-z%^&=]") {
        let out = run(&["basics", "calc"], &format!("{a} {b} {op}"));
        prop_assert!(out.ends_with("Invalid operator!\n"));
        prop_assert!(!out.contains("Result"));
    }

    /// The printer emits one separator per term.
    #[test]
    fn fib_separator_count(n in 0usize..200) {
        let count = n.to_string();
        let out = run(&["basics", "fib", "-q", "-n", &count], "");
        prop_assert_eq!(out.matches(", ").count(), n);
    }

    /// Identical inputs give identical output.
    #[test]
    fn runs_are_repeatable(n in 0usize..50) {
        let count = n.to_string();
        let first = run(&["basics", "fib", "-n", &count], "");
        let second = run(&["basics", "fib", "-n", &count], "");
        prop_assert_eq!(first, second);
    }
}
