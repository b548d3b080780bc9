use super::*;
use crate::print_handler::buffer_handler;
use pretty_assertions::assert_eq;

fn call(name: &str, args: &[Value]) -> Value {
    let handler = buffer_handler();
    match lookup(name) {
        Some(builtin) => builtin.call(args, &handler),
        None => panic!("no builtin named {name}"),
    }
}

#[test]
fn registry_contents() {
    assert_eq!(names(), vec!["len", "puts"]);
    assert!(lookup("first").is_none());
}

#[test]
fn len_of_string_counts_bytes() {
    assert_eq!(call("len", &[Value::string("")]), Value::Int(0));
    assert_eq!(call("len", &[Value::string("four")]), Value::Int(4));
    assert_eq!(call("len", &[Value::string("hello world")]), Value::Int(11));
    assert_eq!(call("len", &[Value::string("é")]), Value::Int(2));
}

#[test]
fn len_of_array() {
    let array = Value::array(vec![Value::Int(1), Value::Int(2), NULL]);
    assert_eq!(call("len", &[array]), Value::Int(3));
}

#[test]
fn len_rejects_other_types() {
    assert_eq!(
        call("len", &[Value::Int(1)]),
        Value::error("argument to `len` not supported, got INTEGER")
    );
}

#[test]
fn len_checks_argument_count() {
    assert_eq!(
        call("len", &[Value::string("one"), Value::string("two")]),
        Value::error("wrong number of arguments. got=2, want=1")
    );
    assert_eq!(
        call("len", &[]),
        Value::error("wrong number of arguments. got=0, want=1")
    );
}

#[test]
fn puts_prints_each_argument() {
    let handler = buffer_handler();
    let puts = lookup("puts").map(|b| {
        b.call(
            &[Value::string("hi"), Value::Int(3), Value::Bool(true)],
            &handler,
        )
    });
    assert_eq!(puts, Some(NULL));
    assert_eq!(handler.get_output(), "hi\n3\ntrue\n");
}
