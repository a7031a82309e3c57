use pretty_assertions::assert_eq;
use prioricalc::{
    error::{EvalError, ParseError, RuntimeError},
    interpreter::{
        evaluator::{Evaluation, Stage},
        lexer::{Token, tokenize},
        number::Number,
        operator::{Operator, Precedence},
        reducer::reduce,
        resolver::{find_innermost_parentheses, resolve_parentheses},
    },
};

fn num(literal: &str) -> Token {
    Token::Number(Number::Literal(literal.to_string()))
}

#[test]
fn lexer_splits_numbers_operators_and_parentheses() {
    let tokens = tokenize("12.5*(3-.25)/ 4.").unwrap();
    assert_eq!(tokens,
               vec![num("12.5"),
                    Token::Operator(Operator::Mul),
                    Token::LParen,
                    num("3"),
                    Token::Operator(Operator::Sub),
                    num(".25"),
                    Token::RParen,
                    Token::Operator(Operator::Div),
                    num("4.")]);
}

#[test]
fn lexer_keeps_malformed_numbers_as_literals() {
    assert_eq!(tokenize("1.2.3").unwrap(), vec![num("1.2.3")]);
    assert_eq!(tokenize(" . ").unwrap(), vec![num(".")]);
}

#[test]
fn lexer_handles_empty_and_blank_input() {
    assert_eq!(tokenize("").unwrap(), Vec::<Token>::new());
    assert_eq!(tokenize(" \t\r\n").unwrap(), Vec::<Token>::new());
}

#[test]
fn lexer_reports_first_unknown_character() {
    assert_eq!(tokenize("1 + 2 $ 3 @"),
               Err(ParseError::InvalidCharacter { character: '$',
                                                  position:  6, }));
}

#[test]
fn tokens_display_as_written() {
    let rendered: String = tokenize("(1.5+2)*3").unwrap().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, "(1.5+2)*3");
    assert_eq!(Token::from(9.0).to_string(), "9.0");
}

#[test]
fn innermost_pair_is_the_first_closed_group() {
    let tokens = tokenize("(1+(2*3))").unwrap();
    assert_eq!(find_innermost_parentheses(&tokens), Some((3, 7)));

    let tokens = tokenize("(1)+(2)").unwrap();
    assert_eq!(find_innermost_parentheses(&tokens), Some((0, 2)));

    let tokens = tokenize("((1)+(2))").unwrap();
    assert_eq!(find_innermost_parentheses(&tokens), Some((1, 3)));
}

#[test]
fn innermost_pair_skips_leading_closing_parenthesis() {
    let tokens = tokenize(")(1)").unwrap();
    assert_eq!(find_innermost_parentheses(&tokens), Some((1, 3)));
}

#[test]
fn innermost_pair_is_missing_without_matched_parentheses() {
    assert_eq!(find_innermost_parentheses(&tokenize("1+2").unwrap()), None);
    assert_eq!(find_innermost_parentheses(&tokenize("(1+2").unwrap()), None);
    assert_eq!(find_innermost_parentheses(&tokenize(")(").unwrap()), None);
}

#[test]
fn resolving_replaces_groups_with_values() {
    let mut tokens = tokenize("(4+5)*(1+(2*3))").unwrap();
    resolve_parentheses(&mut tokens).unwrap();
    assert_eq!(tokens, vec![Token::from(9.0), Token::Operator(Operator::Mul), Token::from(7.0)]);
}

#[test]
fn resolving_leaves_unmatched_parentheses_in_place() {
    let mut tokens = tokenize("(4+5)+(1").unwrap();
    resolve_parentheses(&mut tokens).unwrap();
    assert_eq!(tokens,
               vec![Token::from(9.0),
                    Token::Operator(Operator::Add),
                    Token::LParen,
                    num("1")]);
}

#[test]
fn resolving_rejects_crossed_parentheses() {
    let mut tokens = tokenize(")1(").unwrap();
    assert_eq!(resolve_parentheses(&mut tokens),
               Err(EvalError::from(ParseError::UnbalancedParentheses)));
}

#[test]
fn reducer_applies_precedence() {
    assert_eq!(reduce(&tokenize("4+5*3").unwrap()), Ok(19.0));
    assert_eq!(reduce(&tokenize("4*5+3").unwrap()), Ok(23.0));
    assert_eq!(reduce(&tokenize("1-2-3").unwrap()), Ok(-4.0));
    assert_eq!(reduce(&tokenize("3").unwrap()), Ok(3.0));
}

#[test]
fn reducer_accepts_computed_values() {
    let tokens = vec![Token::from(0.5), Token::Operator(Operator::Mul), num("4")];
    assert_eq!(reduce(&tokens), Ok(2.0));
}

#[test]
fn reducer_rejects_broken_alternation() {
    assert_eq!(reduce(&[]), Err(EvalError::from(ParseError::EmptyExpression)));
    assert_eq!(reduce(&tokenize("1+(2)").unwrap()),
               Err(EvalError::from(ParseError::ExpectedOperator { index: 3 })));
    assert_eq!(reduce(&tokenize("-5").unwrap()),
               Err(EvalError::from(ParseError::ExpectedOperand { index: 0 })));
    assert_eq!(reduce(&tokenize("1 2 3").unwrap()),
               Err(EvalError::from(ParseError::ExpectedOperator { index: 1 })));
}

#[test]
fn reducer_reports_division_by_zero() {
    assert_eq!(reduce(&tokenize("1+2/0").unwrap()),
               Err(EvalError::from(RuntimeError::DivisionByZero)));
    assert_eq!(reduce(&tokenize("5/0+").unwrap()),
               Err(EvalError::from(RuntimeError::DivisionByZero)));
    let tokens = vec![num("1"), Token::Operator(Operator::Div), Token::from(-0.0)];
    assert_eq!(reduce(&tokens), Err(EvalError::from(RuntimeError::DivisionByZero)));
}

#[test]
fn operators_have_two_precedence_levels() {
    assert_eq!(Operator::Mul.precedence(), Precedence::Multiplicative);
    assert_eq!(Operator::Div.precedence(), Precedence::Multiplicative);
    assert_eq!(Operator::Add.precedence(), Precedence::Additive);
    assert_eq!(Operator::Sub.precedence(), Precedence::Additive);
    assert!(Precedence::Multiplicative < Precedence::Additive);
}

#[test]
fn evaluation_runs_from_start_stage() {
    let mut evaluation = Evaluation::new("(4+5)*3");
    assert_eq!(evaluation.stage(), Stage::Start);
    assert_eq!(evaluation.run(), Ok(27.0));
    assert_eq!(evaluation.stage(), Stage::Reduced);
}

#[test]
fn failed_evaluation_keeps_its_last_stage() {
    let mut evaluation = Evaluation::new("4+@");
    assert!(evaluation.run().is_err());
    assert_eq!(evaluation.stage(), Stage::Start);

    let mut evaluation = Evaluation::new("(4+5");
    assert!(evaluation.run().is_err());
    assert_eq!(evaluation.stage(), Stage::ResolvingParens);

    let mut evaluation = Evaluation::new("4+");
    assert!(evaluation.run().is_err());
    assert_eq!(evaluation.stage(), Stage::Flat);
}
