use super::*;
use crate::print_handler::buffer_handler;
use crate::{FALSE, TRUE};
use pretty_assertions::assert_eq;

fn parse_program(source: &str) -> Program {
    let tokens = morty_lexer::lex(source);
    let output = morty_parse::parse(&tokens);
    assert!(
        !output.has_errors(),
        "unexpected parse errors for {source:?}: {:?}",
        output.error_messages()
    );
    output.program
}

fn eval_in(source: &str, env: &Environment) -> Option<Value> {
    Interpreter::new().eval_program(&parse_program(source), env)
}

fn eval(source: &str) -> Option<Value> {
    eval_in(source, &Environment::new())
}

fn eval_value(source: &str) -> Value {
    match eval(source) {
        Some(value) => value,
        None => panic!("{source:?} produced no value"),
    }
}

fn int(n: i64) -> Value {
    Value::Int(n)
}

fn error(message: &str) -> Value {
    Value::error(message)
}

#[test]
fn integer_expressions() {
    let cases = [
        ("5", 5),
        ("-5", -5),
        ("--5", 5),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 + 5 * 2", 15),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_value(source), int(expected), "{source}");
    }
}

#[test]
fn boolean_expressions() {
    let cases = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("true == true", true),
        ("true != false", true),
        ("(1 < 2) == true", true),
        ("(1 > 2) == true", false),
        ("1 == true", false),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_value(source), Value::from_bool(expected), "{source}");
    }
}

#[test]
fn bang_operator() {
    let cases = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!5", true),
        ("!0", false),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_value(source), Value::from_bool(expected), "{source}");
    }
}

#[test]
fn if_else_expressions() {
    assert_eq!(eval_value("if (true) { 10 }"), int(10));
    assert_eq!(eval_value("if (false) { 10 }"), NULL);
    assert_eq!(eval_value("if (0) { 10 }"), int(10));
    assert_eq!(eval_value("if (1 < 2) { 10 }"), int(10));
    assert_eq!(eval_value("if (1 > 2) { 10 } else { 20 }"), int(20));
    assert_eq!(eval_value("if (1 < 2) { 10 } else { 20 }"), int(10));
    assert_eq!(eval_value("if (true) { }"), NULL);
}

#[test]
fn return_statements() {
    assert_eq!(eval_value("return 10;"), int(10));
    assert_eq!(eval_value("return 10; 9;"), int(10));
    assert_eq!(eval_value("return 2 * 5; 9;"), int(10));
    assert_eq!(eval_value("9; return 2 * 5; 9;"), int(10));
    assert_eq!(eval_value("return;"), NULL);
}

#[test]
fn nested_return_escapes_all_blocks() {
    let source = "
        if (10 > 1) {
            if (10 > 1) {
                return 10;
            }
            return 1;
        }
    ";
    assert_eq!(eval_value(source), int(10));

    let source = "
        let f = fn(x) {
            if (x > 1) { if (x > 2) { return x; } }
            return 0;
        };
        f(3) + f(2)
    ";
    assert_eq!(eval_value(source), int(3));
}

#[test]
fn return_inside_function_stops_at_call_boundary() {
    let source = "let f = fn() { return 1; 2 }; f() + 10";
    assert_eq!(eval_value(source), int(11));
}

#[test]
fn error_messages() {
    let cases = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { true + false; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
        ("let x = 5; x()", "not a function: INTEGER"),
        ("10 / (5 - 5)", "division by zero"),
        ("if (nope) { 1 }", "identifier not found: nope"),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_value(source), error(expected), "{source}");
    }
}

#[test]
fn error_stops_later_statements() {
    let handler = buffer_handler();
    let interpreter = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .build();
    let env = Environment::new();
    let program = parse_program(r#"let a = 1; a + true; puts("unreachable"); let b = 2;"#);

    let result = interpreter.eval_program(&program, &env);

    assert_eq!(result, Some(error("type mismatch: INTEGER + BOOLEAN")));
    assert_eq!(handler.get_output(), "");
    assert_eq!(env.get("a"), Some(int(1)));
    assert_eq!(env.get("b"), None);
}

#[test]
fn errors_are_never_bound() {
    let env = Environment::new();
    let result = eval_in("let x = missing;", &env);
    assert_eq!(result, Some(error("identifier not found: missing")));
    assert_eq!(env.get("x"), None);
}

#[test]
fn errors_propagate_through_arguments_and_arrays() {
    assert_eq!(
        eval_value("let f = fn(a, b) { a }; f(1, -true)"),
        error("unknown operator: -BOOLEAN")
    );
    assert_eq!(
        eval_value("[1, nope, 3]"),
        error("identifier not found: nope")
    );
    assert_eq!(eval_value("nope(1)"), error("identifier not found: nope"));
}

#[test]
fn let_statements() {
    assert_eq!(eval_value("let a = 5; a;"), int(5));
    assert_eq!(eval_value("let a = 5 * 5; a;"), int(25));
    assert_eq!(eval_value("let a = 5; let b = a; b;"), int(5));
    assert_eq!(
        eval_value("let a = 5; let b = a; let c = a + b + 5; c;"),
        int(15)
    );
    assert_eq!(eval_value("let x = 1; let x = 2; x"), int(2));
}

#[test]
fn let_produces_no_value() {
    assert_eq!(eval("let a = 5;"), None);
    assert_eq!(eval(""), None);
}

#[test]
fn bindings_persist_across_programs() {
    let env = Environment::new();
    assert_eq!(eval_in("let a = 40;", &env), None);
    assert_eq!(eval_in("let add = fn(x) { x + a };", &env), None);
    assert_eq!(eval_in("add(2)", &env), Some(int(42)));
}

#[test]
fn function_object_renders_literal() {
    let value = eval_value("fn(x) { x + 2; };");
    let Value::Function(function) = &value else {
        panic!("expected a function, got {value:?}");
    };
    assert_eq!(function.parameters().len(), 1);
    assert_eq!(function.parameters()[0].name, "x");
    assert_eq!(function.body().to_string(), "{ (x + 2) }");
    assert_eq!(value.inspect(), "fn(x) { (x + 2) }");
}

#[test]
fn function_application() {
    let cases = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
    ];
    for (source, expected) in cases {
        assert_eq!(eval_value(source), int(expected), "{source}");
    }
}

#[test]
fn empty_function_body_yields_null() {
    assert_eq!(eval_value("let f = fn() { }; f()"), NULL);
    assert_eq!(eval_value("let f = fn() { let x = 1; }; f()"), NULL);
}

#[test]
fn closures_capture_definition_environment() {
    let source = "
        let newAdder = fn(x) { fn(y) { x + y } };
        let addTwo = newAdder(2);
        addTwo(3);
    ";
    assert_eq!(eval_value(source), int(5));

    let source = "
        let x = 1;
        let f = fn() { x };
        let g = fn(x) { f() };
        g(100)
    ";
    assert_eq!(eval_value(source), int(1));
}

#[test]
fn closures_see_later_global_bindings() {
    let source = "
        let f = fn() { later };
        let later = 7;
        f()
    ";
    assert_eq!(eval_value(source), int(7));
}

#[test]
fn parameters_shadow_without_mutating_outer() {
    let env = Environment::new();
    let source = "let x = 10; let f = fn(x) { let y = x; y }; f(3)";
    assert_eq!(eval_in(source, &env), Some(int(3)));
    assert_eq!(env.get("x"), Some(int(10)));
    assert_eq!(env.get("y"), None);
}

#[test]
fn let_inside_if_binds_in_enclosing_frame() {
    let env = Environment::new();
    assert_eq!(eval_in("if (true) { let z = 3; }", &env), Some(NULL));
    assert_eq!(env.get("z"), Some(int(3)));
}

#[test]
fn arity_is_checked() {
    assert_eq!(
        eval_value("let f = fn(a, b) { a }; f(1)"),
        error("wrong number of arguments: expected 2, got 1")
    );
    assert_eq!(
        eval_value("let f = fn() { 1 }; f(1, 2)"),
        error("wrong number of arguments: expected 0, got 2")
    );
}

#[test]
fn named_function_statement_declares() {
    let env = Environment::new();
    assert_eq!(eval_in("fn double(x) { x * 2 }", &env), None);
    assert_eq!(eval_in("double(21)", &env), Some(int(42)));
}

#[test]
fn named_function_expression_binds_and_yields() {
    let env = Environment::new();
    let value = eval_in("let f = fn g(x) { x };", &env);
    assert_eq!(value, None);
    let (Some(f), Some(g)) = (env.get("f"), env.get("g")) else {
        panic!("both f and g should be bound");
    };
    assert!(f.is_same_object(&g));
}

#[test]
fn named_function_recursion() {
    let source = "
        fn fib(n) {
            if (n < 2) { return n; }
            fib(n - 1) + fib(n - 2)
        }
        fib(15)
    ";
    assert_eq!(eval_value(source), int(610));
}

#[test]
fn deep_recursion_grows_the_stack() {
    let source = "
        let count = fn(n) { if (n == 0) { 0 } else { 1 + count(n - 1) } };
        count(5000)
    ";
    assert_eq!(eval_value(source), int(5000));
}

#[test]
fn string_values() {
    assert_eq!(eval_value(r#""Hello World!""#), Value::string("Hello World!"));
    assert_eq!(
        eval_value(r#""Hello" + " " + "World!""#),
        Value::string("Hello World!")
    );
    assert_eq!(eval_value(r#""a" == "a""#), TRUE);
    assert_eq!(eval_value(r#""a" != "a""#), FALSE);
}

#[test]
fn array_literals() {
    assert_eq!(
        eval_value("[1, 2 * 2, 3 + 3]"),
        Value::array(vec![int(1), int(4), int(6)])
    );
    assert_eq!(eval_value("[]"), Value::array(Vec::new()));
    assert_eq!(eval_value("[1, [true]]").inspect(), "[1, [true]]");
}

#[test]
fn equality_uses_identity_for_objects() {
    assert_eq!(eval_value("fn() { } == fn() { }"), FALSE);
    assert_eq!(eval_value("let f = fn() { }; f == f"), TRUE);
    assert_eq!(eval_value("[1] == [1]"), FALSE);
    assert_eq!(eval_value("let a = [1]; a == a"), TRUE);
    assert_eq!(eval_value("len == len"), TRUE);
}

#[test]
fn builtin_len() {
    assert_eq!(eval_value(r#"len("")"#), int(0));
    assert_eq!(eval_value(r#"len("four")"#), int(4));
    assert_eq!(eval_value("len([1, 2, 3])"), int(3));
    assert_eq!(
        eval_value("len(1)"),
        error("argument to `len` not supported, got INTEGER")
    );
    assert_eq!(
        eval_value(r#"len("one", "two")"#),
        error("wrong number of arguments. got=2, want=1")
    );
}

#[test]
fn builtins_can_be_shadowed() {
    assert_eq!(eval_value("let len = fn(x) { 99 }; len([])"), int(99));
    assert_eq!(eval_value("len").inspect(), "builtin function");
}

#[test]
fn puts_writes_to_print_handler() {
    let handler = buffer_handler();
    let interpreter = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .build();
    let env = Environment::new();
    let program = parse_program(r#"puts("hello", 1 + 2, [true]); puts()"#);

    let result = interpreter.eval_program(&program, &env);

    assert_eq!(result, Some(NULL));
    assert_eq!(interpreter.get_print_output(), "hello\n3\n[true]\n");
    interpreter.clear_print_output();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn block_statement_evaluates_in_place() {
    let env = Environment::new();
    assert_eq!(eval_in("{ let a = 1; a + 1 }", &env), Some(int(2)));
    assert_eq!(env.get("a"), Some(int(1)));
}
