use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::{error::RuntimeError, value::Value};

/// A named mutable slot. Cells are shared: a snapshot of a scope aliases the
/// cells of the original, so closures observe later writes.
pub type Cell = Rc<RefCell<Value>>;

#[derive(Debug, Default)]
struct ScopeInner {
    variables: HashMap<String, Cell>,
    parent: Option<Scope>,
}

/// Shared handle to one environment in the scope chain. Lookup walks parent
/// links innermost-out; declaration always binds into this scope.
#[derive(Debug, Clone, Default)]
pub struct Scope(Rc<RefCell<ScopeInner>>);

impl Scope {
    /// A fresh, empty scope whose parent is `self`.
    pub fn child(&self) -> Scope {
        Scope(Rc::new(RefCell::new(ScopeInner {
            variables: HashMap::new(),
            parent: Some(self.clone()),
        })))
    }

    /// A shallow copy of this scope: same parent link, same cells under a
    /// fresh name map. Used as the call frame of a function invocation.
    pub fn snapshot(&self) -> Scope {
        let inner = self.0.borrow();

        Scope(Rc::new(RefCell::new(ScopeInner {
            variables: inner.variables.clone(),
            parent: inner.parent.clone(),
        })))
    }

    /// Bind a name in this scope, shadowing any outer binding.
    pub fn declare(&self, name: &str, value: Value) {
        self.0
            .borrow_mut()
            .variables
            .insert(name.to_owned(), Rc::new(RefCell::new(value)));
    }

    /// Find the cell for a name, walking the chain from the inside out.
    pub fn find(&self, name: &str) -> Option<Cell> {
        let inner = self.0.borrow();

        if let Some(cell) = inner.variables.get(name) {
            return Some(cell.clone());
        }

        inner.parent.as_ref().and_then(|parent| parent.find(name))
    }

    /// Write to an existing variable. Assignment never declares.
    pub fn update(&self, name: &str, value: Value) -> Result<(), RuntimeError> {
        let Some(cell) = self.find(name) else {
            return Err(RuntimeError::UndefinedVariable(name.to_owned()));
        };

        *cell.borrow_mut() = value;
        Ok(())
    }
}
