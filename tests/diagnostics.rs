use reckon::{
    BinaryOperator, Config, DiagnosticKind, Expr, TrailingInput, evaluate, evaluate_expression,
    evaluate_expression_with, evaluate_with,
    error::{Diagnostic, EvalError, LexError, ParseError},
};

fn diagnostic(src: &str) -> Diagnostic {
    evaluate_expression(src).expect_err("expression was expected to fail")
}

fn strict() -> Config {
    Config::default().with_trailing_input(TrailingInput::Reject)
}

#[test]
fn unexpected_closing_paren() {
    let d = diagnostic("2 + )");
    assert_eq!(d.kind(), DiagnosticKind::Parse);
    assert_eq!(d.position(), Some(4));
    assert_eq!(d.message(), "Unexpected token ')' at position 4");
}

#[test]
fn operator_where_factor_expected() {
    let d = diagnostic("*3");
    assert_eq!(d.kind(), DiagnosticKind::Parse);
    assert_eq!(d.to_string(), "Unexpected token '*' at position 0");

    let d = diagnostic("2 * / 3");
    assert_eq!(d.to_string(), "Unexpected token '/' at position 4");
}

#[test]
fn empty_input_is_a_parse_error() {
    let d = diagnostic("");
    assert_eq!(d.kind(), DiagnosticKind::Parse);
    assert_eq!(d.position(), Some(0));
    assert_eq!(d.message(), "Unexpected end of text at position 0");

    assert_eq!(diagnostic("   ").position(), Some(3));
    assert_eq!(diagnostic("2 *").message(), "Unexpected end of text at position 3");
}

#[test]
fn unclosed_group() {
    let d = diagnostic("(2 + 3");
    assert_eq!(d.kind(), DiagnosticKind::Parse);
    assert_eq!(d.message(), "Expected token ')' at position 6");

    assert_eq!(diagnostic("(2 3)").message(), "Expected token ')' at position 3");
    assert_eq!(diagnostic("((2)").message(), "Expected token ')' at position 4");
}

#[test]
fn unexpected_character_is_a_lex_error() {
    let d = diagnostic("2 $ 3");
    assert_eq!(d.kind(), DiagnosticKind::Lex);
    assert_eq!(d.position(), Some(2));
    assert_eq!(d.message(), "Unexpected token '$' at position 2");

    assert_eq!(diagnostic(".5").message(), "Unexpected token '.' at position 0");
    assert_eq!(diagnostic("1.2.3").message(), "Unexpected token '.' at position 3");
    assert_eq!(diagnostic("2 × 3").message(), "Unexpected token '×' at position 2");
}

#[test]
fn lex_errors_in_trailing_input_still_surface() {
    // The lookahead after `5` is read before the expression is complete.
    let d = diagnostic("5 $");
    assert_eq!(d.kind(), DiagnosticKind::Lex);
    assert_eq!(d.position(), Some(2));
}

#[test]
fn strict_mode_rejects_trailing_input() {
    let d = evaluate_expression_with("5 5", &strict()).unwrap_err();
    assert_eq!(d.kind(), DiagnosticKind::Parse);
    assert_eq!(d.position(), Some(2));
    assert_eq!(d.message(), "Unexpected trailing input '5' at position 2");

    let d = evaluate_expression_with("2 + 3)", &strict()).unwrap_err();
    assert_eq!(d.message(), "Unexpected trailing input ')' at position 5");

    let d = evaluate_expression_with("1 2.50", &strict()).unwrap_err();
    assert_eq!(d.message(), "Unexpected trailing input '2.50' at position 2");

    assert_eq!(evaluate_expression_with(" (2 + 3) * 4 ", &strict()).unwrap(), 20.0);
}

#[test]
fn nesting_limit() {
    let shallow = Config::default().with_max_depth(2);
    assert_eq!(evaluate_expression_with("1", &shallow).unwrap(), 1.0);
    assert_eq!(evaluate_expression_with("-1", &shallow).unwrap(), -1.0);
    assert_eq!(evaluate_expression_with("(1 + 2) * 3", &shallow).unwrap(), 9.0);

    let d = evaluate_expression_with("--1", &shallow).unwrap_err();
    assert_eq!(d.kind(), DiagnosticKind::Parse);
    assert_eq!(d.message(), "Expression nested deeper than 2 levels at position 2");
    assert_eq!(evaluate_expression_with("2 * ((3))", &shallow).unwrap_err().position(),
               Some(6));

    let deep = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
    let d = diagnostic(&deep);
    assert_eq!(d.kind(), DiagnosticKind::Parse);
    assert_eq!(d.message(), "Expression nested deeper than 256 levels at position 256");

    let negations = format!("{}1", "-".repeat(10_000));
    assert_eq!(diagnostic(&negations).kind(), DiagnosticKind::Parse);
}

#[test]
fn operator_chains_do_not_count_as_nesting() {
    let sum = vec!["1"; 10_000].join(" + ");
    assert_eq!(evaluate_expression(&sum).unwrap(), 10_000.0);

    let product = vec!["1"; 10_000].join(" * ");
    assert_eq!(evaluate_expression(&product).unwrap(), 1.0);

    let mixed = vec!["4 / 2 * 3"; 10_000].join(" - ");
    assert_eq!(evaluate_expression(&mixed).unwrap(), -59_988.0);

    let shallow = Config::default().with_max_depth(1);
    let flat = vec!["1"; 600].join(" + ");
    assert_eq!(evaluate_expression_with(&flat, &shallow).unwrap(), 600.0);
}

#[test]
fn deepest_accepted_input_evaluates() {
    for max_depth in [1, 2, 5, 40, 256] {
        let config = Config::default().with_max_depth(max_depth);
        let groups = max_depth - 1;
        let text = format!("{}1 + 1 * 1{}", "1 + 1 * (".repeat(groups), ")".repeat(groups));

        let expr = reckon::parse_with(&text, &config).unwrap();
        assert_eq!(expr.depth(), config.tree_depth_limit());
        let expected = f64::from(u32::try_from(max_depth).unwrap()) + 1.0;
        assert_eq!(evaluate_with(&expr, &config).unwrap(), expected, "max depth {max_depth}");

        let over = format!("1 + 1 * ({text})");
        assert!(reckon::parse_with(&over, &config).is_err(), "max depth {max_depth}");
    }
}

#[test]
fn overly_deep_tree_is_an_eval_error() {
    let mut expr = Expr::number(1.0);
    for _ in 0..9 {
        expr = Expr::negate(expr);
    }
    assert_eq!(expr.depth(), 10);

    // Two factor levels allow trees of 4 * 2 + 1 = 9 levels.
    let config = Config::default().with_max_depth(2);
    let d = evaluate_with(&expr, &config).unwrap_err();
    assert_eq!(d.kind(), DiagnosticKind::Eval);
    assert_eq!(d.position(), None);
    assert_eq!(d.message(), "Incorrect syntax tree!");

    let config = Config::default().with_max_depth(3);
    assert_eq!(evaluate_with(&expr, &config).unwrap(), -1.0);
}

#[test]
fn left_operand_chains_stay_on_one_level() {
    let mut expr = Expr::number(0.0);
    for _ in 0..10_000 {
        expr = Expr::binary(BinaryOperator::Add, expr, Expr::number(1.0));
    }
    assert_eq!(expr.depth(), 10_001);
    assert_eq!(expr.node_count(), 20_001);

    let config = Config::default().with_max_depth(1);
    assert_eq!(evaluate_with(&expr, &config).unwrap(), 10_000.0);

    let mut expr = Expr::number(0.0);
    for _ in 0..10 {
        expr = Expr::binary(BinaryOperator::Add, Expr::number(1.0), expr);
    }
    assert!(evaluate_with(&expr, &config).is_err());
}

#[test]
fn parsed_trees_always_evaluate() {
    for depth in 3..40 {
        let config = Config::default().with_max_depth(depth);
        let text = "((1 + 2) * -(3 - 4)) / (5 - -6)";
        if let Ok(expr) = reckon::parse_with(text, &config) {
            assert!(evaluate_with(&expr, &config).is_ok(), "depth {depth}");
        }
    }
}

#[test]
fn evaluate_accepts_hand_built_trees() {
    let expr = Expr::binary(BinaryOperator::Sub, Expr::number(1.5), Expr::number(0.5));
    assert_eq!(evaluate(&expr).unwrap(), 1.0);
}

#[test]
fn stage_errors_convert_to_diagnostics() {
    let d = Diagnostic::from(LexError::NumberExpected { position: 7 });
    assert_eq!(d.kind(), DiagnosticKind::Lex);
    assert_eq!(d.position(), Some(7));
    assert_eq!(d.message(), "Number expected but not found!");

    let wrapped = ParseError::from(LexError::UnexpectedCharacter { character: '#',
                                                                   position:  1, });
    assert_eq!(wrapped.position(), 1);
    assert_eq!(Diagnostic::from(wrapped).kind(), DiagnosticKind::Lex);

    let d = Diagnostic::from(EvalError::IncorrectSyntaxTree { depth: 3 });
    assert_eq!(d.kind(), DiagnosticKind::Eval);
    assert_eq!(d.kind().to_string(), "evaluation error");
}

#[test]
fn every_call_starts_clean() {
    assert!(evaluate_expression("2 + )").is_err());
    assert_eq!(evaluate_expression("2 + 2").unwrap(), 4.0);
}
