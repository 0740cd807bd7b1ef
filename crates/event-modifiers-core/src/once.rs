use std::cell::RefCell;
use std::fmt;

enum OnceState<F, R> {
    Pending(F),
    Running,
    Done(R),
}

/// Wraps a handler so it runs at most one time.
///
/// The first [`call`](Once::call) runs the handler, drops it and keeps its
/// result; every later call runs nothing and hands back a clone of that
/// result. A call made while the first one is still on the stack yields
/// `None`.
pub struct Once<F, R> {
    state: RefCell<OnceState<F, R>>,
}

/// Shorthand for [`Once::new`].
pub fn once<F, R>(handler: F) -> Once<F, R> {
    Once::new(handler)
}

impl<F, R> Once<F, R> {
    pub fn new(handler: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(handler)),
        }
    }

    pub fn call<A>(&self, arg: A) -> Option<R>
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        let handler = {
            let mut state = self.state.borrow_mut();
            match std::mem::replace(&mut *state, OnceState::Running) {
                OnceState::Pending(handler) => handler,
                OnceState::Running => return None,
                OnceState::Done(result) => {
                    let memo = result.clone();
                    *state = OnceState::Done(result);
                    return Some(memo);
                }
            }
        };
        let result = handler(arg);
        *self.state.borrow_mut() = OnceState::Done(result.clone());
        Some(result)
    }

    /// Returns true once the handler has been invoked.
    pub fn has_run(&self) -> bool {
        !matches!(*self.state.borrow(), OnceState::Pending(_))
    }
}

impl<F, R> fmt::Debug for Once<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Once")
            .field("has_run", &self.has_run())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/once_tests.rs"]
mod tests;
