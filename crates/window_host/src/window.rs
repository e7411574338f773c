//! Native window-creation host-service contracts and test doubles.

use std::{
    cell::{Cell, RefCell},
    future::Future,
    pin::Pin,
    rc::Rc,
};

/// Object-safe boxed future used by [`WindowHostService`].
pub type WindowHostFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for creating the native secondary window.
pub trait WindowHostService {
    /// Asks the host process to create the iced-rendered secondary window.
    ///
    /// Resolves to `Ok(())` on acknowledgment or to the host's opaque error value.
    fn create_iced_window<'a>(&'a self) -> WindowHostFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op window host for stubbed desktop targets and baseline tests.
pub struct NoopWindowHostService;

impl WindowHostService for NoopWindowHostService {
    fn create_iced_window<'a>(&'a self) -> WindowHostFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone)]
/// In-memory window host recording call counts and resolving a scriptable outcome.
pub struct MemoryWindowHostService {
    calls: Rc<Cell<usize>>,
    outcome: Rc<RefCell<Result<(), String>>>,
}

impl Default for MemoryWindowHostService {
    fn default() -> Self {
        Self {
            calls: Rc::new(Cell::new(0)),
            outcome: Rc::new(RefCell::new(Ok(()))),
        }
    }
}

impl MemoryWindowHostService {
    /// Builds a service whose calls resolve to the given opaque failure value.
    pub fn failing(message: &str) -> Self {
        let service = Self::default();
        service.set_outcome(Err(message.to_string()));
        service
    }

    /// Replaces the outcome resolved by subsequent calls.
    pub fn set_outcome(&self, outcome: Result<(), String>) {
        *self.outcome.borrow_mut() = outcome;
    }

    /// Returns how many window-creation calls were issued.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl WindowHostService for MemoryWindowHostService {
    fn create_iced_window<'a>(&'a self) -> WindowHostFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.calls.set(self.calls.get() + 1);
            self.outcome.borrow().clone()
        })
    }
}
