//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Operator precedence and associativity
//! - Let and return statements
//! - Function literals, if and while expressions
//! - Error reporting and recovery
//! - The token window and the rule observer

use std::{cell::RefCell, rc::Rc};

use pretty_assertions::assert_eq;

use super::{
    parser::{parse, Parser},
    trace::ParseObserver,
};
use crate::{
    errors::errors::ErrorImpl,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

fn test_parse_expect(input: &str, output: &str, expected_statements: usize) {
    let (program, errors) = parse(input.to_string());

    assert!(errors.is_empty(), "unexpected errors for {:?}: {:?}", input, errors);
    assert_eq!(program.statements.len(), expected_statements, "statement count for {:?}", input);
    assert_eq!(program.to_string(), output);
}

fn error_messages(input: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(input.to_string()));
    parser.parse_program();
    parser.error_messages()
}

#[test]
fn test_parse_infix_expressions() {
    test_parse_expect("a + b;", "(a + b)", 1);
    test_parse_expect("a + b + c;", "((a + b) + c)", 1);
    test_parse_expect("a + b * c;", "(a + (b * c))", 1);
    test_parse_expect("(a + b) * c;", "((a + b) * c)", 1);
    test_parse_expect("a - b - c", "((a - b) - c)", 1);
    test_parse_expect("a * b / c", "((a * b) / c)", 1);
}

#[test]
fn test_parse_operator_precedence() {
    test_parse_expect("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)", 1);
    test_parse_expect("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))", 1);
    test_parse_expect("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))", 1);
    test_parse_expect("a == b and c != d", "((a == b) and (c != d))", 1);
    test_parse_expect("a and b or c", "((a and b) or c)", 1);
    test_parse_expect("a or b and c", "((a or b) and c)", 1);
    test_parse_expect("true != false", "(true != false)", 1);
    test_parse_expect("(5 + 5) * 2 * (1 - 3)", "(((5 + 5) * 2) * (1 - 3))", 1);
    test_parse_expect("((a))", "a", 1);
}

#[test]
fn test_parse_prefix_expressions() {
    test_parse_expect("-a * b", "((- a) * b)", 1);
    test_parse_expect("!-a", "(! (- a))", 1);
    test_parse_expect("+5 - -3", "((+ 5) - (- 3))", 1);
    test_parse_expect("not a == b", "((not a) == b)", 1);
    test_parse_expect("!true", "(! true)", 1);
    test_parse_expect("-(a + b)", "(- (a + b))", 1);
}

#[test]
fn test_parse_let_statement() {
    test_parse_expect("let a = 10;", "let a = 10", 1);
    test_parse_expect("let a = 10", "let a = 10", 1);
    test_parse_expect("let x = 5; let y = true; x", "let x = 5;let y = true;x", 3);
    test_parse_expect("let big = 9223372036854775807;", "let big = 9223372036854775807", 1);
}

#[test]
fn test_parse_return_statement() {
    test_parse_expect("return 5;", "return 5", 1);
    test_parse_expect("return a + b", "return (a + b)", 1);
    test_parse_expect("return;", "return", 1);
    test_parse_expect("fn() { return }", "fn(){return;}", 1);
}

#[test]
fn test_parse_function_literal() {
    test_parse_expect("function (){ doStuff; };", "fn(){doStuff;}", 1);
    test_parse_expect("function (a){ return a; };", "fn(a){return a;}", 1);
    test_parse_expect("fn (a, b){ return a + b; };", "fn(a,b){return (a + b);}", 1);
    test_parse_expect(
        "let add = fn(x, y) { x + y; };",
        "let add = fn(x,y){(x + y);}",
        1,
    );
    test_parse_expect("fn(a, b,) { a }", "fn(a,b){a;}", 1);
    test_parse_expect("fn(a, a) {}", "fn(a,a){}", 1);
    test_parse_expect("fn() { fn(x) { x } }", "fn(){fn(x){x;};}", 1);
}

#[test]
fn test_parse_if_expression() {
    test_parse_expect("if (x < y) { x }", "if ((x < y)) {x;}", 1);
    test_parse_expect("if (x < y) { x } else { y }", "if ((x < y)) {x;} else {y;}", 1);
    test_parse_expect(
        "let max = if (a > b) { a; } else { b; };",
        "let max = if ((a > b)) {a;} else {b;}",
        1,
    );
}

#[test]
fn test_parse_while_expression() {
    test_parse_expect(
        "while (i < 10) { let i = i + 1; }",
        "while ((i < 10)) {let i = (i + 1);}",
        1,
    );
    test_parse_expect("while (true) {}", "while (true) {}", 1);
}

#[test]
fn test_parse_block_statement() {
    test_parse_expect("{ let a = 1; a }", "{let a = 1;a;}", 1);
    test_parse_expect("{}", "{}", 1);
    test_parse_expect("{ { a }; };", "{{a;};}", 1);
}

#[test]
fn test_parse_empty_input() {
    test_parse_expect("", "", 0);
    test_parse_expect(";;;", "", 0);
    test_parse_expect("  \n\t ", "", 0);
}

#[test]
fn test_parse_node_tokens() {
    let (program, _) = parse("let x = 1;\n  a * 2".to_string());

    assert_eq!(program.token_literal(), "let");
    let second = &program.statements[1];
    assert_eq!(second.token_literal(), "a");
    assert_eq!((second.token().line, second.token().column), (2, 3));

    match second {
        crate::ast::ast::Stmt::Expression(stmt) => {
            // the infix node carries its operator token
            assert_eq!(stmt.expression.token_literal(), "*");
            assert_eq!(stmt.expression.token().column, 5);
        }
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_missing_prefix_function_is_reported() {
    let errors = error_messages("* 5;");

    assert_eq!(errors, vec!["Ln 1, Col 1: no prefix parse function for Asterisk found"]);
}

#[test]
fn test_missing_prefix_function_position_on_later_line() {
    let errors = error_messages("let a = 1;\nlet b = ;");

    assert_eq!(errors, vec!["Ln 2, Col 9: no prefix parse function for Semicolon found"]);
}

#[test]
fn test_structural_errors() {
    assert_eq!(
        error_messages("let = 5;"),
        vec!["Ln 1, Col 5: expected Identifier, got Assign instead"]
    );
    assert_eq!(
        error_messages("let x 5;"),
        vec!["Ln 1, Col 7: expected Assign, got Integer instead"]
    );
    assert_eq!(
        error_messages("(a + b"),
        vec!["Ln 1, Col 7: expected ClosingParenthesis, got EOF instead"]
    );
    assert_eq!(
        error_messages("if x { y }"),
        vec!["Ln 1, Col 4: expected OpeningParenthesis, got Identifier instead"]
    );
    assert_eq!(
        error_messages("while (x) y"),
        vec!["Ln 1, Col 11: expected OpeningBrace, got Identifier instead"]
    );
    assert_eq!(
        error_messages("fn(1) {}"),
        vec!["Ln 1, Col 4: expected Identifier, got Integer instead"]
    );
    assert_eq!(
        error_messages("if (x) { y"),
        vec!["Ln 1, Col 11: expected ClosingBrace, got EOF instead"]
    );
}

#[test]
fn test_illegal_and_overflowing_literals() {
    assert_eq!(error_messages("let a = @;"), vec!["Ln 1, Col 9: illegal character \"@\""]);

    let (_, errors) = parse("99999999999999999999;".to_string());
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0].get_kind(), ErrorImpl::NumberParseError { .. }));
}

#[test]
fn test_parser_recovers_after_errors() {
    let (program, errors) = parse("let = 1; let b = 2; * 3; b;".to_string());

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_position().column, 5);
    assert_eq!(errors[1].get_position().column, 21);
    assert_eq!(program.to_string(), "let b = 2;b");
}

#[test]
fn test_block_recovers_per_statement() {
    let (program, errors) = parse("let f = fn(x) { * ; x };".to_string());

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "let f = fn(x){x;}");
}

#[test]
fn test_error_on_closing_brace_keeps_the_block() {
    let (program, errors) = parse("let f = fn() { 1 + }; let y = 2;".to_string());
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();

    assert_eq!(messages, vec!["Ln 1, Col 20: no prefix parse function for ClosingBrace found"]);
    assert_eq!(program.to_string(), "let f = fn(){};let y = 2");

    let (program, errors) = parse("{ let x = }\nlet z = 3;".to_string());
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();

    assert_eq!(messages, vec!["Ln 1, Col 11: no prefix parse function for ClosingBrace found"]);
    assert_eq!(program.to_string(), "{};let z = 3");
}

#[test]
fn test_error_on_closing_brace_keeps_earlier_statements() {
    let (program, errors) = parse("fn() { a; return a * }".to_string());

    assert_eq!(errors.len(), 1);
    assert_eq!(program.to_string(), "fn(){a;}");

    let (program, errors) = parse("{ { 1 + } 2 }".to_string());

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_position().column, 9);
    assert_eq!(program.to_string(), "{{};2;}");
}

#[test]
fn test_inner_closing_brace_does_not_end_the_block() {
    // the failed statement stops on a nested `}`, not on the block's own
    let (program, errors) = parse("{ (fn() {} 1) }".to_string());
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();

    assert_eq!(messages, vec!["Ln 1, Col 12: expected ClosingParenthesis, got Integer instead"]);
    assert_eq!(program.to_string(), "{}");
}

#[test]
fn test_missing_infix_handler_is_not_an_error() {
    test_parse_expect("a b", "a;b", 2);
    test_parse_expect("(a + b) c;", "(a + b);c", 2);
}

#[test]
fn test_token_window() {
    let mut parser = Parser::new(Lexer::new("let x".to_string()));

    assert_eq!(parser.current_token_kind(), TokenKind::Let);
    assert_eq!(parser.peek_token_kind(), TokenKind::Identifier);

    parser.next_token();
    assert_eq!(parser.current_token().literal, "x");
    assert!(parser.peek_is(TokenKind::EOF));

    parser.next_token();
    assert!(parser.current_is(TokenKind::EOF));
    assert!(parser.peek_is(TokenKind::EOF));
}

#[test]
fn test_expect_peek_leaves_window_on_mismatch() {
    let mut parser = Parser::new(Lexer::new("let 5".to_string()));

    assert!(parser.expect_peek(TokenKind::Identifier).is_err());
    assert!(parser.current_is(TokenKind::Let));
    assert!(parser.peek_is(TokenKind::Integer));

    let token = parser.expect_peek(TokenKind::Integer).unwrap();
    assert_eq!(token.literal, "5");
    assert!(parser.current_is(TokenKind::Integer));
}

#[derive(Clone, Default)]
struct RecordingObserver {
    events: Rc<RefCell<Vec<(String, String, usize)>>>,
}

impl ParseObserver for RecordingObserver {
    fn enter(&mut self, rule: &str, _current: &Token, _peek: &Token, depth: usize) {
        self.events.borrow_mut().push(("enter".to_string(), rule.to_string(), depth));
    }

    fn exit(&mut self, rule: &str, _current: &Token, _peek: &Token, depth: usize) {
        self.events.borrow_mut().push(("exit".to_string(), rule.to_string(), depth));
    }
}

#[test]
fn test_observer_sees_balanced_rules() {
    let observer = RecordingObserver::default();
    let events = Rc::clone(&observer.events);

    let lexer = Lexer::new("let a = (1 + ;".to_string());
    let mut parser = Parser::with_observer(lexer, Box::new(observer));
    parser.parse_program();
    assert_eq!(parser.errors().len(), 1);

    let events = events.borrow();
    assert_eq!(events.first().unwrap(), &("enter".to_string(), "parse_program".to_string(), 1));
    assert_eq!(events.last().unwrap(), &("exit".to_string(), "parse_program".to_string(), 1));

    // every enter is matched by an exit at the same depth, even on error paths
    let mut stack = vec![];
    for (event, rule, depth) in events.iter() {
        if event == "enter" {
            stack.push((rule.clone(), *depth));
        } else {
            assert_eq!(stack.pop(), Some((rule.clone(), *depth)));
        }
    }
    assert!(stack.is_empty());
    assert!(events.iter().any(|(_, rule, _)| rule == "parse_expr"));
}
