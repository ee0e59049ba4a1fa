use sprig::{
    ast::{Expression, SourceLocation, StepOperator, Variable},
    error::{SyntaxError, SyntaxErrorKind},
    interpreter::{lexer::tokenize, resolver::ExpressionResolver},
};

fn resolve(src: &str) -> Result<Expression, SyntaxError> {
    let tokens = tokenize(src, "test").unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"));
    ExpressionResolver::new().resolve(&tokens, &SourceLocation::new("test", 1))
}

fn assert_rpn(src: &str, expected: &str) {
    match resolve(src) {
        Ok(Expression::Postfix(notation)) => assert_eq!(notation.rpn(), expected, "for {src:?}"),
        other => panic!("Expected a postfix expression for {src:?}, got {other:?}"),
    }
}

fn assert_error(src: &str, expected: &str) {
    match resolve(src) {
        Ok(expression) => panic!("{src:?} resolved to {expression:?} but was expected to fail"),
        Err(e) => assert_eq!(e.kind.to_string(), expected, "for {src:?}"),
    }
}

#[test]
fn precedence_orders_operators() {
    assert_rpn("7 - 2 * 3", "7 2 3 * -");
    assert_rpn("1 + 2 < 4 == true", "1 2 + 4 < true ==");
    assert_rpn("a || b && c", "a b c && ||");
    assert_rpn("1 << 2 + 3", "1 2 3 + <<");
    assert_rpn("x & 1 | y ^ 2", "x 1 & y 2 ^ |");
}

#[test]
fn parentheses_group() {
    assert_rpn("( 1 + 2 ) * 4 + 3", "1 2 + 4 * 3 +");
    assert_rpn("2 * ((3 - 1))", "2 3 1 - *");
}

#[test]
fn associativity() {
    assert_rpn("2 - 3 - 4", "2 3 - 4 -");
    assert_rpn("a = b = 3", "a b 3 = =");
    assert_rpn("a += b -= 1", "a b 1 -= +=");
}

#[test]
fn unary_operators_bind_tightest() {
    assert_rpn("-7 % 3", "7 - 3 %");
    assert_rpn("2 * -3", "2 3 - *");
    assert_rpn("!(1 > 2) && ok", "1 2 > ! ok &&");
    assert_rpn("1 - -1", "1 1 - -");
}

#[test]
fn typeof_is_relational() {
    assert_rpn("x + 1 typeof int", "x 1 + int typeof");
}

#[test]
fn single_operands_stay_simple() {
    assert_eq!(resolve("42").unwrap(), Expression::Constant(42_i64.into()));
    assert_eq!(resolve("null").unwrap(), Expression::Null);
    assert_eq!(resolve("(x)").unwrap(), Expression::Variable(Variable::new("x")));
}

#[test]
fn step_operators_attach_to_variables() {
    assert_eq!(resolve("a ++").unwrap(),
               Expression::UnaryPostfix { operator: StepOperator::Increment,
                                          variable: Variable::new("a"), });
    assert_eq!(resolve("-- a").unwrap(),
               Expression::UnaryPrefix { operator: StepOperator::Decrement,
                                         variable: Variable::new("a"), });
    assert_rpn("a++ + ++b", "a++ ++b +");
    assert_rpn("a++ - 1", "a++ 1 -");
}

#[test]
fn step_operator_without_variable_fails() {
    assert_error("5 ++", "A variable expression is expected for unary operator: '++'");
    assert_error("++ (a)", "A variable expression is expected for unary operator: '++'");
}

#[test]
fn ternaries_become_single_operands() {
    let Expression::Ternary { predicate, on_true, on_false } = resolve("a > 1 ? \"yes\" : \"no\"").unwrap()
    else {
        panic!("expected a ternary")
    };
    assert_eq!(predicate.to_string(), "a > 1");
    assert_eq!(on_true.to_string(), "\"yes\"");
    assert_eq!(on_false.to_string(), "\"no\"");

    assert_rpn("x = a ? 1 : 2", "x (a ? 1 : 2) =");
    assert_rpn("(a ? 1 : 2) + 3", "(a ? 1 : 2) 3 +");
}

#[test]
fn nested_ternaries() {
    let expression = resolve("a ? b ? 1 : 2 : 3").unwrap();
    assert_eq!(expression.to_string(), "(a ? (b ? 1 : 2) : 3)");

    let expression = resolve("a ? 1 : b ? 2 : 3").unwrap();
    assert_eq!(expression.to_string(), "(a ? 1 : (b ? 2 : 3))");
}

#[test]
fn malformed_ternaries() {
    assert_error("? 1 : 2", "Ternary operator '?:' should have predicate expression");
    assert_error("a ? : 2", "Ternary operator '?:' should have true clause expression");
    assert_error("a ? 1 :", "Ternary operator '?:' should have false clause expression");
    assert_error("a ? 1", "Ternary operator '?:' should have ':' separator");
    assert_error("a : 1", "Ternary operator '?:' should have '?' before ':'");
}

#[test]
fn unbalanced_parentheses() {
    assert_error("( 1 + 2", "Missing )");
    assert_error("1 + 2 )", "Missing (");
    assert_error("((1)", "Missing )");
}

#[test]
fn misplaced_operators() {
    assert_error("* 2", "Expression can not start with binary operator: '*'");
    assert_error("1 +", "Expression can not end with operator: '+'");
    assert_error("1 + * 2", "Binary operators can not be adjacent: '+' '*'");
    assert_error("1 2", "Operator is expected between '1' and '2'");
    assert_error("(1) (2)", "Operator is expected between ')' and '('");
    assert_error("()", "Expression is expected");
    assert_error("", "Expression is expected");
}

#[test]
fn assignment_needs_a_variable() {
    assert_error("3 = 4", "Assignment operator '=' requires a variable expression as its left operand");
    assert_error("a + b = 4",
                 "Assignment operator '=' requires a variable expression as its left operand");
}

#[test]
fn reserved_words_are_rejected() {
    assert_error("1 + while", "Reserved word 'while' can not be used in an expression");
}

#[test]
fn function_invocations_collapse() {
    assert_rpn("max(1, 2 * 3) + 1", "max(1, 2 * 3) 1 +");
    assert_eq!(resolve("now()").unwrap(),
               Expression::FunctionInvocation { name:      "now".into(),
                                                arguments: Vec::new(), });
    assert_error("f(1, )", "Function 'f' has an empty argument");
}

#[test]
fn errors_carry_the_token_line() {
    let error = tokenize("1 +\n\n$", "lines").unwrap_err();
    assert_eq!(error.to_string(), "lines:3: Unexpected character '$'");

    let error = resolve("1 + 2 )").unwrap_err();
    assert_eq!(error.location, SourceLocation::new("test", 1));
    assert_eq!(error.kind, SyntaxErrorKind::MissingOpenParenthesis);
}

#[test]
fn smallest_integer_needs_a_minus() {
    assert!(resolve("-9223372036854775808").is_ok());
    assert_error("9223372036854775808", "Invalid number literal '9223372036854775808'");
    assert_error("1 - 9223372036854775808", "Invalid number literal '9223372036854775808'");

    let error = tokenize("9223372036854775809", "big").unwrap_err();
    assert_eq!(error.to_string(), "big:1: Invalid number literal '9223372036854775809'");
}
