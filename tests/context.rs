use sprig::{
    ast::Variable,
    error::RuntimeErrorKind,
    interpreter::{context::LocalContext, value::core::Value},
};

fn var(name: &str) -> Variable {
    Variable::new(name)
}

#[test]
fn inner_scopes_read_and_write_outer_bindings() {
    let mut context = LocalContext::new();
    context.declare_variable(&var("total"), Value::Integer(1)).unwrap();

    let outer = context.enter(context.current());
    let inner = context.enter(context.current());
    context.write(&var("total"), Value::Integer(5)).unwrap();
    assert_eq!(context.read("total"), Ok(Value::Integer(5)));
    context.leave(inner);
    context.leave(outer);

    assert_eq!(context.read("total"), Ok(Value::Integer(5)));
    assert_eq!(context.depth(), 1);
}

#[test]
fn bindings_disappear_with_their_scope() {
    let mut context = LocalContext::new();

    let previous = context.enter(context.current());
    context.declare_variable(&var("tmp"), Value::from("x")).unwrap();
    assert!(context.is_defined("tmp"));
    context.leave(previous);

    assert!(!context.is_defined("tmp"));
    assert_eq!(context.read("tmp"), Err(RuntimeErrorKind::UndefinedVariable("tmp".to_string())));
    assert_eq!(context.write(&var("tmp"), Value::Null),
               Err(RuntimeErrorKind::UndefinedVariable("tmp".to_string())));
}

#[test]
fn sibling_scopes_may_reuse_names() {
    let mut context = LocalContext::new();

    for i in 0..3 {
        let previous = context.enter(context.current());
        context.declare_variable(&var("i"), Value::Integer(i)).unwrap();
        assert_eq!(context.read("i"), Ok(Value::Integer(i)));
        context.leave(previous);
    }
}

#[test]
fn names_are_never_shadowed() {
    let mut context = LocalContext::new();
    context.declare_variable(&var("a"), Value::Integer(1)).unwrap();
    context.declare_constant(&var("c"), Value::Integer(2)).unwrap();

    let previous = context.enter(context.current());
    assert_eq!(context.declare_variable(&var("a"), Value::Null),
               Err(RuntimeErrorKind::DuplicateVariable("a".to_string())));
    assert_eq!(context.declare_variable(&var("c"), Value::Null),
               Err(RuntimeErrorKind::ConstantReassignment("c".to_string())));
    context.leave(previous);
}

#[test]
fn constants_are_write_once() {
    let mut context = LocalContext::new();
    context.declare_constant(&var("limit"), Value::Integer(10)).unwrap();

    assert_eq!(context.write(&var("limit"), Value::Integer(11)),
               Err(RuntimeErrorKind::ConstantReassignment("limit".to_string())));
    assert_eq!(context.declare_constant(&var("limit"), Value::Integer(12)),
               Err(RuntimeErrorKind::ConstantReassignment("limit".to_string())));
    assert_eq!(context.read("limit"), Ok(Value::Integer(10)));
}

#[test]
fn scopes_rooted_at_global_skip_the_caller() {
    let mut context = LocalContext::new();
    context.declare_variable(&var("shared"), Value::Integer(0)).unwrap();

    let caller = context.enter(context.current());
    context.declare_variable(&var("local"), Value::Integer(1)).unwrap();

    let callee = context.enter(context.global());
    assert!(context.is_defined("shared"));
    assert!(!context.is_defined("local"));
    context.declare_variable(&var("local"), Value::Integer(2)).unwrap();
    context.leave(callee);

    assert_eq!(context.read("local"), Ok(Value::Integer(1)));
    context.leave(caller);
}

#[test]
fn global_frame_is_never_dropped() {
    let mut context = LocalContext::new();
    context.declare_variable(&var("g"), Value::Boolean(true)).unwrap();

    let global = context.global();
    context.leave(global);

    assert_eq!(context.depth(), 1);
    assert_eq!(context.read("g"), Ok(Value::Boolean(true)));
}
