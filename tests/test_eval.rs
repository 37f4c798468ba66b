//! Integration tests for the postfix evaluator

use rpncalc::{evaluate, EvalError, LexError, Op};

#[test]
fn evaluates_a_single_literal() {
    assert_eq!(evaluate("42"), Ok(42));
    assert_eq!(evaluate("-123"), Ok(-123));
    assert_eq!(evaluate("0"), Ok(0));
}

#[test]
fn evaluates_the_four_operators() {
    assert_eq!(evaluate("5 3 +"), Ok(8));
    assert_eq!(evaluate("10 3 -"), Ok(7));
    assert_eq!(evaluate("4 5 *"), Ok(20));
    assert_eq!(evaluate("10 2 /"), Ok(5));
}

#[test]
fn operand_order_is_left_to_right() {
    // b OP a with a popped first: 1 - 2, not 2 - 1.
    assert_eq!(evaluate("1 2 -"), Ok(-1));
    assert_eq!(evaluate("2 8 /"), Ok(0));
}

#[test]
fn evaluates_a_compound_expression() {
    // (1 - 2) * (3 + 4)
    assert_eq!(evaluate("1 2 - 3 4 + *"), Ok(-7));
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(evaluate("7 2 /"), Ok(3));
    assert_eq!(evaluate("-7 2 /"), Ok(-3));
    assert_eq!(evaluate("7 -2 /"), Ok(-3));
}

#[test]
fn extra_whitespace_is_ignored() {
    assert_eq!(evaluate("  1   2  +  "), Ok(3));
    assert_eq!(evaluate("1\t2\n+"), Ok(3));
}

#[test]
fn arithmetic_wraps_at_32_bits() {
    assert_eq!(evaluate("2147483647 1 +"), Ok(i32::MIN));
    assert_eq!(evaluate("-2147483648 1 -"), Ok(i32::MAX));
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(evaluate(""), Err(EvalError::EmptyExpression));
    assert_eq!(evaluate("   \t  "), Err(EvalError::EmptyExpression));
}

#[test]
fn division_by_zero_is_rejected() {
    assert_eq!(evaluate("5 0 /"), Err(EvalError::DivisionByZero));
    assert_eq!(evaluate("5 3 3 - /"), Err(EvalError::DivisionByZero));
}

#[test]
fn leading_zero_literal_is_rejected() {
    assert_eq!(
        evaluate("012 +"),
        Err(EvalError::Lex(LexError::LeadingZero("012".to_string())))
    );
    assert_eq!(
        evaluate("1 -07 +"),
        Err(EvalError::Lex(LexError::LeadingZero("-07".to_string())))
    );
}

#[test]
fn invalid_symbol_is_rejected() {
    assert_eq!(
        evaluate("1 2 %"),
        Err(EvalError::Lex(LexError::InvalidSymbol("%".to_string())))
    );
    assert_eq!(
        evaluate("1 two +"),
        Err(EvalError::Lex(LexError::InvalidSymbol("two".to_string())))
    );
}

#[test]
fn lone_operator_reports_too_few_operands() {
    assert_eq!(evaluate("+"), Err(EvalError::TooFewOperands(Op::Add)));
    assert_eq!(evaluate("1 *"), Err(EvalError::TooFewOperands(Op::Mul)));
}

#[test]
fn tokens_are_classified_in_evaluation_order() {
    // The operator is reached first, so the later junk token is never
    // classified.
    assert_eq!(evaluate("+ junk"), Err(EvalError::TooFewOperands(Op::Add)));
}

#[test]
fn unreduced_expression_reports_too_many_operands() {
    assert_eq!(evaluate("1 2"), Err(EvalError::TooManyOperands(2)));
    assert_eq!(evaluate("1 2 3 +"), Err(EvalError::TooManyOperands(2)));
}

#[test]
fn out_of_range_literal_is_rejected() {
    assert_eq!(
        evaluate("2147483648 1 +"),
        Err(EvalError::Lex(LexError::OutOfRange(
            "2147483648".to_string()
        )))
    );
}

#[test]
fn minus_is_an_operator_only_when_it_stands_alone() {
    assert_eq!(evaluate("5 -3 +"), Ok(2));
    assert_eq!(evaluate("5 3 -"), Ok(2));
}
