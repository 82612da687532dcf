//! Ordered multicast notification.

use std::fmt;

/// Ordered multicast notifier over an argument type `A`.
///
/// The state machine is generic over this trait so hosts can plug in their own
/// event plumbing. Implementations must invoke every subscribed handler exactly
/// once per dispatch, synchronously, in subscription order.
pub trait Dispatcher<A> {
    /// Append a handler to the subscriber list.
    fn subscribe<F>(&mut self, handler: F)
    where
        F: FnMut(A) + 'static;

    /// Invoke every handler with a clone of `arg`.
    ///
    /// A panicking handler unwinds through `dispatch`; handlers after it do not
    /// run.
    fn dispatch(&mut self, arg: A);
}

/// Default [`Dispatcher`] backed by a `Vec` of boxed handlers.
///
/// # Example
///
/// ```rust
/// use autonex::events::{Dispatcher, EventDispatcher};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let mut dispatcher = EventDispatcher::new();
///
/// let log = Rc::clone(&seen);
/// dispatcher.subscribe(move |n: u32| log.borrow_mut().push(("first", n)));
/// let log = Rc::clone(&seen);
/// dispatcher.subscribe(move |n: u32| log.borrow_mut().push(("second", n)));
///
/// dispatcher.dispatch(7);
/// assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
/// ```
pub struct EventDispatcher<A> {
    handlers: Vec<Box<dyn FnMut(A)>>,
}

impl<A> EventDispatcher<A> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Number of subscribed handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<A> Default for EventDispatcher<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Dispatcher<A> for EventDispatcher<A> {
    fn subscribe<F>(&mut self, handler: F)
    where
        F: FnMut(A) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    fn dispatch(&mut self, arg: A) {
        tracing::trace!(handlers = self.handlers.len(), "dispatching event");
        for handler in &mut self.handlers {
            handler(arg.clone());
        }
    }
}

impl<A> fmt::Debug for EventDispatcher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
