use std::sync::atomic::Ordering;

use sprig::{
    ast::{
        BinaryOperator, Lexeme, Operator, PostfixNotation, SourceLocation, UnaryOperator, Variable,
    },
    error::{Error, InternalError, RuntimeErrorKind},
    interpreter::{
        evaluator::{
            binary::core::calculate,
            core::{Interpreter, Settings},
        },
        lexer::tokenize,
        resolver::ExpressionResolver,
        value::core::{Value, ValueType},
    },
};

fn interpreter() -> Interpreter<Vec<u8>> {
    Interpreter::new(Vec::new(), Settings::default())
}

fn evaluate(interpreter: &mut Interpreter<Vec<u8>>, src: &str) -> Result<Value, Error> {
    let tokens = tokenize(src, "eval")?;
    let expression = ExpressionResolver::new().resolve(&tokens, &SourceLocation::new("eval", 1))?;
    interpreter.evaluate(&expression)
}

fn assert_value(src: &str, expected: Value) {
    match evaluate(&mut interpreter(), src) {
        Ok(value) => assert_eq!(value, expected, "for {src:?}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn runtime_kind(result: Result<Value, Error>) -> RuntimeErrorKind {
    match result {
        Err(Error::Runtime(e)) => e.kind,
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

fn declare(interpreter: &mut Interpreter<Vec<u8>>, name: &str, value: Value) {
    interpreter.context_mut()
               .declare_variable(&Variable::new(name), value)
               .unwrap();
}

#[test]
fn arithmetic_follows_precedence() {
    assert_value("7 - 2 * 3", Value::Integer(1));
    assert_value("(1 + 2) * 4 + 3", Value::Integer(15));
    assert_value("7 / 2", Value::Integer(3));
    assert_value("7 / 2.0", Value::Double(3.5));
    assert_value("-7 % 3", Value::Integer(-1));
    assert_value("2 - 3 - 4", Value::Integer(-5));
}

#[test]
fn integer_limits() {
    assert_value("-9223372036854775808", Value::Integer(i64::MIN));
    assert_value("-9223372036854775808 - 1", Value::Integer(i64::MAX));
    assert_value("9223372036854775807 + 1", Value::Integer(i64::MIN));
}

#[test]
fn mixed_operators() {
    assert_value("1 << 4 | 1", Value::Integer(17));
    assert_value("-16 >> 2", Value::Integer(-4));
    assert_value("~5 & 7", Value::Integer(2));
    assert_value("\"a\" + 1 + 2", Value::from("a12"));
    assert_value("1 + 2 + \"a\"", Value::from("3a"));
    assert_value("3 == 3.0 && \"x\" != \"y\"", Value::Boolean(true));
    assert_value("2.5 typeof double", Value::Boolean(true));
    assert_value("null == null", Value::Boolean(true));
}

#[test]
fn division_by_zero() {
    for src in ["1 / 0", "5 % 0", "1.5 / 0"] {
        assert_eq!(runtime_kind(evaluate(&mut interpreter(), src)),
                   RuntimeErrorKind::DivisionByZero,
                   "for {src:?}");
    }
    assert_eq!(calculate(BinaryOperator::Divide, &Value::Integer(4), &Value::Integer(0))
                   .unwrap_err()
                   .to_string(),
               "/ by zero");
}

#[test]
fn unsupported_operand_types() {
    assert_eq!(runtime_kind(evaluate(&mut interpreter(), "true + 1")),
               RuntimeErrorKind::UnsupportedOperands { operator: "+".to_string(),
                                                       left:     ValueType::Boolean,
                                                       right:    ValueType::Integer, });
    assert_eq!(runtime_kind(evaluate(&mut interpreter(), "-\"x\"")).to_string(),
               "Operator '-' is not supported for type 'string'");
}

#[test]
fn assignment_writes_the_variable() {
    let mut interpreter = interpreter();
    declare(&mut interpreter, "x", Value::Integer(1));

    assert_eq!(evaluate(&mut interpreter, "x = 5").unwrap(), Value::Integer(5));
    assert_eq!(evaluate(&mut interpreter, "x += 2").unwrap(), Value::Integer(7));
    assert_eq!(evaluate(&mut interpreter, "x <<= 1").unwrap(), Value::Integer(14));
    assert_eq!(interpreter.context().read("x"), Ok(Value::Integer(14)));
}

#[test]
fn chained_assignment() {
    let mut interpreter = interpreter();
    declare(&mut interpreter, "a", Value::Null);
    declare(&mut interpreter, "b", Value::Null);

    assert_eq!(evaluate(&mut interpreter, "a = b = 3").unwrap(), Value::Integer(3));
    assert_eq!(interpreter.context().read("a"), Ok(Value::Integer(3)));
    assert_eq!(interpreter.context().read("b"), Ok(Value::Integer(3)));
}

#[test]
fn step_operators() {
    let mut interpreter = interpreter();
    declare(&mut interpreter, "i", Value::Integer(1));

    assert_eq!(evaluate(&mut interpreter, "i++").unwrap(), Value::Integer(1));
    assert_eq!(evaluate(&mut interpreter, "++i").unwrap(), Value::Integer(3));
    assert_eq!(evaluate(&mut interpreter, "i-- * 10").unwrap(), Value::Integer(30));
    assert_eq!(interpreter.context().read("i"), Ok(Value::Integer(2)));

    assert_eq!(evaluate(&mut interpreter, "i++ + ++i").unwrap(), Value::Integer(6));
    assert_eq!(interpreter.context().read("i"), Ok(Value::Integer(4)));
}

#[test]
fn logical_operators_short_circuit() {
    assert_value("false && missing", Value::Boolean(false));
    assert_value("true || missing", Value::Boolean(true));
    assert_eq!(runtime_kind(evaluate(&mut interpreter(), "true && missing")),
               RuntimeErrorKind::UndefinedVariable("missing".to_string()));
}

#[test]
fn short_circuit_skips_compound_right_operands() {
    assert_value("false && 1 / 0 == 0", Value::Boolean(false));
    assert_value("true || missing + 1 > 0", Value::Boolean(true));
    assert_value("1 > 2 && -missing < 0 || true", Value::Boolean(true));
    assert_value("(false || 1 < 2) && !(3 == 3)", Value::Boolean(false));

    let mut interpreter = interpreter();
    declare(&mut interpreter, "x", Value::Integer(0));
    assert_eq!(evaluate(&mut interpreter, "true || (x = 5) > 0").unwrap(), Value::Boolean(true));
    assert_eq!(evaluate(&mut interpreter, "false && x++ == 0").unwrap(), Value::Boolean(false));
    assert_eq!(interpreter.context().read("x"), Ok(Value::Integer(0)));

    assert_eq!(evaluate(&mut interpreter, "false || (x = 5) > 0").unwrap(), Value::Boolean(true));
    assert_eq!(interpreter.context().read("x"), Ok(Value::Integer(5)));
    assert_eq!(runtime_kind(evaluate(&mut interpreter, "true && 1 / 0 == 0")),
               RuntimeErrorKind::DivisionByZero);
}

#[test]
fn logical_operators_need_booleans() {
    assert_eq!(runtime_kind(evaluate(&mut interpreter(), "1 && 2 > 1")),
               RuntimeErrorKind::UnsupportedOperands { operator: "&&".to_string(),
                                                       left:     ValueType::Integer,
                                                       right:    ValueType::Boolean, });
}

#[test]
fn ternary_evaluates_one_branch() {
    let mut interpreter = interpreter();
    declare(&mut interpreter, "n", Value::Integer(0));

    assert_eq!(evaluate(&mut interpreter, "n == 0 ? \"zero\" : missing").unwrap(),
               Value::from("zero"));
    assert_eq!(evaluate(&mut interpreter, "n > 0 ? n++ : n--").unwrap(), Value::Integer(0));
    assert_eq!(interpreter.context().read("n"), Ok(Value::Integer(-1)));
}

#[test]
fn ternary_predicate_must_be_boolean() {
    assert_eq!(runtime_kind(evaluate(&mut interpreter(), "1 ? 2 : 3")),
               RuntimeErrorKind::TernaryPredicate(ValueType::Integer));
}

#[test]
fn constants_can_not_be_assigned() {
    let mut interpreter = interpreter();
    interpreter.context_mut()
               .declare_constant(&Variable::new("k"), Value::Integer(1))
               .unwrap();

    assert_eq!(runtime_kind(evaluate(&mut interpreter, "k += 1")),
               RuntimeErrorKind::ConstantReassignment("k".to_string()));
    assert_eq!(interpreter.context().read("k"), Ok(Value::Integer(1)));
}

#[test]
fn malformed_postfix_is_an_internal_error() {
    let one = Lexeme::Constant(Value::Integer(1));
    let add = Lexeme::Operator(Operator::Binary(BinaryOperator::Add));

    let residue = PostfixNotation::new(vec![one.clone(), one.clone()], "1 1".to_string());
    assert_eq!(interpreter().evaluate_postfix(&residue),
               Err(Error::Internal(InternalError::PostfixResidue { expression: "1 1".to_string(),
                                                                   count:      2, })));

    let underflow = PostfixNotation::new(vec![one, add], "1 +".to_string());
    assert_eq!(interpreter().evaluate_postfix(&underflow),
               Err(Error::Internal(InternalError::OperandUnderflow { operator:   "+".to_string(),
                                                                     expression: "1 +".to_string(), })));

    let empty = PostfixNotation::new(Vec::new(), String::new());
    assert!(matches!(interpreter().evaluate_postfix(&empty),
                     Err(Error::Internal(InternalError::PostfixResidue { count: 0, .. }))));

    let step = PostfixNotation::new(vec![Lexeme::Variable(Variable::new("i")),
                                         Lexeme::Operator(Operator::Unary(UnaryOperator::Increment))],
                                    "i ++".to_string());
    assert_eq!(interpreter().evaluate_postfix(&step),
               Err(Error::Internal(InternalError::UnresolvedStep("++".to_string()))));
}

#[test]
fn interrupted_calls_fail() {
    let program = sprig::compile("fun main() {\n while (true) {\n }\n}", "spin").unwrap();
    let mut interpreter = interpreter();
    interpreter.interrupt_handle().store(true, Ordering::Relaxed);

    let error = interpreter.invoke_main(&program).unwrap_err();
    assert_eq!(error.to_string(), "spin:1: Execution was interrupted");
}
