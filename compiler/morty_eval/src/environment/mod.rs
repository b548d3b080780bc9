//! Lexical environments.
//!
//! An [`Environment`] is a handle to one frame of bindings plus an optional
//! parent frame. Frames are reference counted: the root frame lives for the
//! whole session, a call frame lives as long as the call or any closure
//! created during it, whichever is longer.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Value;

/// A single-threaded wrapper for reference-counted interior mutability.
///
/// All scope allocations go through [`LocalScope::new`]. `Rc`, not `Arc`:
/// evaluation never leaves the thread it started on.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One frame of bindings.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this frame, replacing any previous binding here.
    #[inline]
    pub fn define(&mut self, name: String, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up `name` in this frame only.
    #[inline]
    pub fn lookup_local(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }
}

// Only names: values can be closures that capture this very scope.
impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Scope")
            .field("bindings", &names)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// Handle to a frame in the environment tree. Cloning shares the frame.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// A fresh root frame.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::new()))
    }

    /// A new empty frame whose parent is `outer`.
    pub fn enclosed(outer: &Environment) -> Self {
        Environment(LocalScope::new(Scope::with_parent(outer.0.clone())))
    }

    /// Resolve `name`, walking from this frame out to the root.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut scope = self.0.clone();
        loop {
            let parent = {
                let frame = scope.borrow();
                if let Some(value) = frame.lookup_local(name) {
                    return Some(value);
                }
                frame.parent.clone()?
            };
            scope = parent;
        }
    }

    /// Bind `name` in this frame. Outer bindings of the same name are
    /// shadowed, never modified.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        debug_assert!(
            !value.is_carrier(),
            "control-flow carrier {} bound to a name",
            value.type_name()
        );
        self.0.borrow_mut().define(name.into(), value);
    }

    /// Whether both handles refer to the same frame.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        LocalScope::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Environment").field(&*self.0.borrow()).finish()
    }
}
