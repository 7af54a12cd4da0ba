//! End-to-end integration tests
//!
//! These tests validate the complete authorization pipeline using predefined
//! JSON-lines fixtures. Each fixture test:
//! 1. Reads input.jsonl from a fixture directory
//! 2. Processes every operation through the selected strategy
//! 3. Compares the emitted lines with expected.jsonl
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Account creation and re-creation
//! - Each violation on its own
//! - Several violations on one transaction
//! - Window boundaries, timezone offsets and blank lines
//! - Zero-valued accounts and lines without an operation
//! - Malformed input (processing stops, earlier output is kept)
//!
//! Each fixture is run twice: once with the sync strategy and once with the async strategy.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;
    use std::process::{Command, Stdio};
    use transaction_authorizer::cli::StrategyType;
    use transaction_authorizer::core::AuthorizationRules;
    use transaction_authorizer::io::InputSource;
    use transaction_authorizer::strategy::create_strategy;
    use transaction_authorizer::AuthorizerError;

    fn fixture_path(fixture_name: &str, file: &str) -> PathBuf {
        let path = PathBuf::from(format!("tests/fixtures/{}/{}", fixture_name, file));
        assert!(path.exists(), "Fixture file not found: {}", path.display());
        path
    }

    /// Process a fixture's input.jsonl with the given strategy
    ///
    /// # Returns
    ///
    /// The processing result and everything written to the output.
    fn run_fixture(
        fixture_name: &str,
        strategy_type: StrategyType,
    ) -> (Result<(), AuthorizerError>, String) {
        let input = InputSource::File(fixture_path(fixture_name, "input.jsonl"));
        let strategy = create_strategy(strategy_type, AuthorizationRules::default(), None);

        let mut output = Vec::new();
        let result = strategy.process(&input, &mut output);

        let output = String::from_utf8(output).expect("Output is not valid UTF-8");
        (result, output)
    }

    fn read_expected(fixture_name: &str) -> String {
        let expected_path = fixture_path(fixture_name, "expected.jsonl");
        fs::read_to_string(&expected_path).unwrap_or_else(|e| {
            panic!(
                "Failed to read expected file {}: {}",
                expected_path.display(),
                e
            )
        })
    }

    /// End-to-end test for all fixtures with both processing strategies
    #[rstest]
    #[case("create_account")]
    #[case("account_already_initialized")]
    #[case("account_not_initialized")]
    #[case("card_not_active")]
    #[case("insufficient_limit")]
    #[case("high_frequency")]
    #[case("double_transaction")]
    #[case("multiple_violations")]
    #[case("window_boundary")]
    #[case("timezone_offsets")]
    #[case("blank_lines")]
    #[case("zero_valued_account")]
    #[case("line_without_operation")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let (result, actual_output) = run_fixture(fixture, strategy);
        let expected_output = read_expected(fixture);

        assert!(
            result.is_ok(),
            "Failed to process fixture {}: {:?}",
            fixture,
            result
        );
        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture, strategy, actual_output, expected_output
        );
    }

    #[rstest]
    fn test_malformed_line_stops_processing(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let (result, actual_output) = run_fixture("malformed_line", strategy);

        assert!(
            matches!(
                result,
                Err(AuthorizerError::ParseError { line: Some(3), .. })
            ),
            "Unexpected result: {:?}",
            result
        );
        assert_eq!(actual_output, read_expected("malformed_line"));
    }

    #[rstest]
    fn test_custom_rules(#[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType) {
        let input = InputSource::File(fixture_path("high_frequency", "input.jsonl"));
        // A larger threshold lets the fourth transaction through
        let strategy = create_strategy(strategy, AuthorizationRules::new(120, 4), None);

        let mut output = Vec::new();
        strategy.process(&input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output.lines().nth(4),
            Some("{\"account\":{\"active-card\":true,\"available-limit\":20},\"violations\":[]}")
        );
    }

    /// Run the binary with `args`, feeding `stdin`
    fn run_binary(args: &[&str], stdin: &str) -> std::process::Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_transaction-authorizer"))
            .args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn binary");

        child
            .stdin
            .take()
            .expect("Missing stdin handle")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");

        child.wait_with_output().expect("Failed to wait for binary")
    }

    #[rstest]
    fn test_binary_reads_stdin(#[values("sync", "async")] strategy: &str) {
        let input = fs::read_to_string(fixture_path("multiple_violations", "input.jsonl")).unwrap();

        let output = run_binary(&["--strategy", strategy], &input);

        assert!(output.status.success());
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            read_expected("multiple_violations")
        );
    }

    #[rstest]
    fn test_binary_fails_on_malformed_input(#[values("sync", "async")] strategy: &str) {
        let input = fs::read_to_string(fixture_path("malformed_line", "input.jsonl")).unwrap();

        let output = run_binary(&["--strategy", strategy], &input);

        assert_eq!(output.status.code(), Some(1));
        assert_eq!(
            String::from_utf8(output.stdout).unwrap(),
            read_expected("malformed_line")
        );
        assert!(String::from_utf8(output.stderr)
            .unwrap()
            .contains("Parse error at line 3"));
    }

    #[test]
    fn test_binary_fails_on_missing_file() {
        let output = run_binary(&["tests/fixtures/does_not_exist.jsonl"], "");

        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8(output.stderr)
            .unwrap()
            .contains("Failed to open file"));
    }
}
