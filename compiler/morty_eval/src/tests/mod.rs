//! Operator tests, separate from the interpreter's end-to-end tests.

mod unary_operators_tests;
