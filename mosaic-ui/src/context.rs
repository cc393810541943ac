//! Ambient context values shared with descendants during a build pass.
//!
//! Components read the theme and screen metrics from here instead of having
//! them threaded through every args struct.

use std::{
    any::{Any, TypeId},
    cell::RefCell,
    sync::Arc,
};

use im::HashMap;

type ContextMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

thread_local! {
    static CONTEXT_STACK: RefCell<Vec<ContextMap>> = RefCell::new(vec![ContextMap::new()]);
}

fn push_context_layer(type_id: TypeId, value: Arc<dyn Any + Send + Sync>) {
    CONTEXT_STACK.with(|stack| {
        let mut stack = stack.borrow_mut();
        let mut next = stack.last().cloned().unwrap_or_default();
        next.insert(type_id, value);
        stack.push(next);
    });
}

fn pop_context_layer() {
    CONTEXT_STACK.with(|stack| {
        let mut stack = stack.borrow_mut();
        let popped = stack.pop();
        debug_assert!(popped.is_some(), "context stack underflow");
        if stack.is_empty() {
            stack.push(ContextMap::new());
        }
    });
}

struct ContextScopeGuard;

impl Drop for ContextScopeGuard {
    fn drop(&mut self) {
        pop_context_layer();
    }
}

/// Provides a typed context value for the duration of `f`.
///
/// The layer is popped even if `f` panics.
///
/// # Examples
///
/// ```
/// use mosaic_ui::{Color, provide_context, use_context};
///
/// #[derive(Default)]
/// struct Accent(Color);
///
/// provide_context(Accent(Color::WHITE), || {
///     assert_eq!(use_context::<Accent>().0, Color::WHITE);
/// });
/// assert_eq!(use_context::<Accent>().0, Color::default());
/// ```
pub fn provide_context<T, F, R>(value: T, f: F) -> R
where
    T: Send + Sync + 'static,
    F: FnOnce() -> R,
{
    push_context_layer(TypeId::of::<T>(), Arc::new(value));
    let _guard = ContextScopeGuard;
    f()
}

/// Reads the nearest context value of type `T`, if one was provided.
pub fn try_use_context<T>() -> Option<Arc<T>>
where
    T: Send + Sync + 'static,
{
    CONTEXT_STACK.with(|stack| {
        let stack = stack.borrow();
        let value = stack.last()?.get(&TypeId::of::<T>())?.clone();
        Arc::downcast::<T>(value).ok()
    })
}

/// Reads the nearest context value of type `T`, falling back to
/// `T::default()` when none was provided.
pub fn use_context<T>() -> Arc<T>
where
    T: Default + Send + Sync + 'static,
{
    try_use_context::<T>().unwrap_or_else(|| Arc::new(T::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Depth(u32);

    #[test]
    fn inner_provider_shadows_outer() {
        provide_context(Depth(1), || {
            assert_eq!(*use_context::<Depth>(), Depth(1));
            provide_context(Depth(2), || {
                assert_eq!(*use_context::<Depth>(), Depth(2));
            });
            assert_eq!(*use_context::<Depth>(), Depth(1));
        });
    }

    #[test]
    fn missing_context_falls_back_to_default() {
        assert!(try_use_context::<Depth>().is_none());
        assert_eq!(*use_context::<Depth>(), Depth(0));
    }

    #[test]
    fn unrelated_types_do_not_collide() {
        provide_context(Depth(7), || {
            provide_context(String::from("label"), || {
                assert_eq!(*use_context::<Depth>(), Depth(7));
                assert_eq!(use_context::<String>().as_str(), "label");
            });
        });
    }
}
