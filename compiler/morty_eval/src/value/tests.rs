use super::*;
use crate::builtins;
use morty_ir::Span;
use pretty_assertions::assert_eq;

fn sample_function(env: &Environment) -> Value {
    let literal = FunctionLiteral {
        name: Some(Ident::new("id", Span::DUMMY)),
        parameters: vec![Ident::new("x", Span::DUMMY)],
        body: Block {
            statements: Vec::new(),
            span: Span::DUMMY,
        },
    };
    Value::function(Rc::new(literal), env.clone())
}

#[test]
fn type_names() {
    let env = Environment::new();
    assert_eq!(Value::Int(1).type_name(), "INTEGER");
    assert_eq!(Value::string("a").type_name(), "STRING");
    assert_eq!(TRUE.type_name(), "BOOLEAN");
    assert_eq!(NULL.type_name(), "NULL");
    assert_eq!(Value::return_value(NULL).type_name(), "RETURN_VALUE");
    assert_eq!(Value::error("boom").type_name(), "ERROR");
    assert_eq!(sample_function(&env).type_name(), "FUNCTION");
    assert_eq!(Value::array(Vec::new()).type_name(), "ARRAY");
    let len = builtins::lookup("len").map(Value::Builtin);
    assert_eq!(len.map(|v| v.type_name()), Some("BUILTIN"));
}

#[test]
fn truthiness() {
    assert!(!NULL.is_truthy());
    assert!(!FALSE.is_truthy());
    assert!(TRUE.is_truthy());
    assert!(Value::Int(0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(Value::array(Vec::new()).is_truthy());
}

#[test]
fn from_bool_returns_singletons() {
    assert!(Value::from_bool(true).is_same_object(&TRUE));
    assert!(Value::from_bool(false).is_same_object(&FALSE));
    assert!(!Value::from_bool(true).is_same_object(&FALSE));
}

#[test]
fn carriers() {
    assert!(Value::return_value(Value::Int(1)).is_carrier());
    assert!(Value::error("x").is_carrier());
    assert!(Value::error("x").is_error());
    assert!(!NULL.is_carrier());
    assert!(!Value::Int(3).is_carrier());
}

#[test]
fn unwrap_return_strips_one_layer() {
    assert_eq!(
        Value::return_value(Value::Int(5)).unwrap_return(),
        Value::Int(5)
    );
    assert_eq!(Value::Int(5).unwrap_return(), Value::Int(5));
    assert_eq!(
        Value::error("e").unwrap_return(),
        Value::error("e"),
        "errors are not unwrapped"
    );
}

#[test]
fn identity_of_heap_values() {
    let env = Environment::new();
    let f = sample_function(&env);
    let g = sample_function(&env);
    assert!(f.is_same_object(&f.clone()));
    assert!(!f.is_same_object(&g));

    let a = Value::array(vec![Value::Int(1)]);
    let b = Value::array(vec![Value::Int(1)]);
    assert!(a.is_same_object(&a.clone()));
    assert!(!a.is_same_object(&b));
    // Structurally equal nonetheless
    assert_eq!(a, b);

    assert!(NULL.is_same_object(&NULL));
    assert!(!NULL.is_same_object(&FALSE));
}

#[test]
fn inspect_rendering() {
    let env = Environment::new();
    assert_eq!(Value::Int(-3).inspect(), "-3");
    assert_eq!(Value::string("hi there").inspect(), "hi there");
    assert_eq!(TRUE.inspect(), "true");
    assert_eq!(NULL.inspect(), "null");
    assert_eq!(Value::error("bad").inspect(), "ERROR: bad");
    assert_eq!(Value::return_value(Value::Int(2)).inspect(), "2");
    assert_eq!(sample_function(&env).inspect(), "fn id(x) { }");
    assert_eq!(
        Value::array(vec![Value::Int(1), Value::string("a"), NULL]).inspect(),
        "[1, a, null]"
    );
    let puts = builtins::lookup("puts").map(|b| Value::Builtin(b).inspect());
    assert_eq!(puts.as_deref(), Some("builtin function"));
}

#[test]
fn debug_does_not_recurse_through_closures() {
    let env = Environment::new();
    let f = sample_function(&env);
    env.set("id", f.clone());
    let rendered = format!("{f:?}");
    assert!(rendered.starts_with("Function"), "{rendered}");
    assert!(rendered.contains("arity: 1"), "{rendered}");
}
