use std::collections::HashMap;

use crate::interpreter::value::Value;

/// A table of named values linked to an optional parent.
///
/// Reads search the chain outward; writes only ever touch the local table.
/// A read that misses everywhere creates a zero entry in the scope it was
/// issued on, so assigning inside a function shadows an outer variable
/// instead of updating it.
///
/// The parent is a shared borrow. A call scope therefore cannot outlive the
/// caller's scope, and nothing evaluated inside a call can modify it.
#[derive(Debug, Default)]
pub struct Scope<'p> {
    values: HashMap<String, Value>,
    parent: Option<&'p Scope<'p>>,
}

impl<'p> Scope<'p> {
    /// Creates an empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope whose reads fall back to `parent`.
    #[must_use]
    pub fn with_parent(parent: &'p Scope<'p>) -> Self {
        Self { values: HashMap::new(),
               parent: Some(parent), }
    }

    /// The enclosing scope, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<&'p Scope<'p>> {
        self.parent
    }

    /// Reads `name`, searching this scope and then each ancestor.
    ///
    /// If no scope in the chain defines `name`, it is defined as zero in
    /// this scope and zero is returned. Ancestors are never modified.
    pub fn read(&mut self, name: &str) -> Value {
        if let Some(value) = self.lookup(name) {
            return value.clone();
        }

        self.values.insert(name.to_string(), Value::ZERO);
        Value::ZERO
    }

    /// Binds `name` to `value` in this scope only.
    pub fn write(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        } else {
            self.values.insert(name.to_string(), value);
        }
    }

    /// Searches the chain for `name` without defining anything.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let mut scope = Some(self);

        while let Some(current) = scope {
            if let Some(value) = current.values.get(name) {
                return Some(value);
            }
            scope = current.parent;
        }

        None
    }

    /// Returns the value bound to `name` in this scope, ignoring ancestors.
    #[must_use]
    pub fn get_local(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether `name` is bound in this scope, ignoring ancestors.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of names bound in this scope.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether this scope binds no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
