use std::collections::HashMap;

use crate::{
    ast::Variable,
    error::RuntimeErrorKind,
    interpreter::value::core::Value,
};

/// Index of a frame in a [`LocalContext`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScopeId(usize);

/// One scope: mutable variables and write-once constants, disjoint by name.
#[derive(Debug, Default)]
struct Frame {
    variables: HashMap<Variable, Value>,
    constants: HashMap<Variable, Value>,
    parent:    Option<ScopeId>,
}

/// Chained variable and constant scopes.
///
/// Frames live in an arena and point to their parent by index. Frame zero is
/// the global scope and is never removed. Frames are entered and left in
/// stack order: [`enter`](Self::enter) pushes a frame, [`leave`](Self::leave)
/// pops it and restores the scope that was current before.
///
/// Reads walk the parent chain. Writes go to the frame that already binds the
/// name. A declaration fails when the name is bound anywhere in the chain, so
/// names are never shadowed.
///
/// # Example
/// ```
/// use sprig::{
///     ast::Variable,
///     interpreter::{context::LocalContext, value::core::Value},
/// };
///
/// let mut context = LocalContext::new();
/// let x = Variable::new("x");
/// context.declare_variable(&x, Value::Integer(1)).unwrap();
///
/// let previous = context.enter(context.current());
/// context.write(&x, Value::Integer(2)).unwrap();
/// context.declare_variable(&Variable::new("y"), Value::Null).unwrap();
/// context.leave(previous);
///
/// assert_eq!(context.read("x").unwrap(), Value::Integer(2));
/// assert!(!context.is_defined("y"));
/// ```
#[derive(Debug)]
pub struct LocalContext {
    frames:  Vec<Frame>,
    current: ScopeId,
}

impl Default for LocalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalContext {
    /// Creates a context holding only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { frames:  vec![Frame::default()],
               current: ScopeId(0), }
    }

    /// The global scope.
    #[must_use]
    pub const fn global(&self) -> ScopeId {
        ScopeId(0)
    }

    /// The scope new bindings go to.
    #[must_use]
    pub const fn current(&self) -> ScopeId {
        self.current
    }

    /// Number of frames, the global one included.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Pushes a child frame of `parent` and makes it current.
    ///
    /// Function calls pass the global scope, blocks pass the current one.
    ///
    /// # Returns
    /// The previously current scope, to be handed back to
    /// [`leave`](Self::leave).
    pub fn enter(&mut self, parent: ScopeId) -> ScopeId {
        self.frames.push(Frame { parent: Some(parent),
                                 ..Frame::default() });
        std::mem::replace(&mut self.current, ScopeId(self.frames.len() - 1))
    }

    /// Drops the innermost frame and restores `previous` as current.
    ///
    /// The global frame is never dropped.
    pub fn leave(&mut self, previous: ScopeId) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
        self.current = previous;
    }

    /// Whether `name` is bound anywhere in the current chain.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Reads the nearest binding of `name`.
    ///
    /// # Errors
    /// `UndefinedVariable` when the name is bound nowhere in the chain.
    pub fn read(&self, name: &str) -> Result<Value, RuntimeErrorKind> {
        self.lookup(name)
            .and_then(|(frame, _)| {
                let frame = &self.frames[frame];
                frame.variables.get(name).or_else(|| frame.constants.get(name))
            })
            .cloned()
            .ok_or_else(|| RuntimeErrorKind::UndefinedVariable(name.to_string()))
    }

    /// Binds a new mutable variable in the current scope.
    ///
    /// # Errors
    /// - `ConstantReassignment` when a constant of that name is reachable.
    /// - `DuplicateVariable` when a variable of that name is reachable.
    pub fn declare_variable(&mut self,
                            variable: &Variable,
                            value: Value)
                            -> Result<(), RuntimeErrorKind> {
        self.ensure_unbound(variable)?;
        self.frames[self.current.0].variables
                                   .insert(variable.clone(), value);
        Ok(())
    }

    /// Binds a new write-once constant in the current scope.
    ///
    /// # Errors
    /// Same as [`declare_variable`](Self::declare_variable).
    pub fn declare_constant(&mut self,
                            variable: &Variable,
                            value: Value)
                            -> Result<(), RuntimeErrorKind> {
        self.ensure_unbound(variable)?;
        self.frames[self.current.0].constants
                                   .insert(variable.clone(), value);
        Ok(())
    }

    /// Replaces the value of the nearest binding of `variable`.
    ///
    /// # Errors
    /// - `ConstantReassignment` when the nearest binding is a constant.
    /// - `UndefinedVariable` when the name is bound nowhere in the chain.
    pub fn write(&mut self, variable: &Variable, value: Value) -> Result<(), RuntimeErrorKind> {
        match self.lookup(variable.name()) {
            Some((_, Binding::Constant)) => {
                Err(RuntimeErrorKind::ConstantReassignment(variable.to_string()))
            },
            Some((frame, Binding::Variable)) => {
                self.frames[frame].variables
                                  .insert(variable.clone(), value);
                Ok(())
            },
            None => Err(RuntimeErrorKind::UndefinedVariable(variable.to_string())),
        }
    }

    fn ensure_unbound(&self, variable: &Variable) -> Result<(), RuntimeErrorKind> {
        match self.lookup(variable.name()) {
            Some((_, Binding::Constant)) => {
                Err(RuntimeErrorKind::ConstantReassignment(variable.to_string()))
            },
            Some((_, Binding::Variable)) => {
                Err(RuntimeErrorKind::DuplicateVariable(variable.to_string()))
            },
            None => Ok(()),
        }
    }

    /// Finds the frame that binds `name`, walking from the current scope up.
    fn lookup(&self, name: &str) -> Option<(usize, Binding)> {
        let mut scope = Some(self.current);
        while let Some(ScopeId(index)) = scope {
            let frame = &self.frames[index];
            if frame.variables.contains_key(name) {
                return Some((index, Binding::Variable));
            }
            if frame.constants.contains_key(name) {
                return Some((index, Binding::Constant));
            }
            scope = frame.parent;
        }
        None
    }
}

#[derive(Debug, Copy, Clone)]
enum Binding {
    Variable,
    Constant,
}
