//! Per-datum value resolvers
//!
//! Content, offset and direction are each configured either as a constant or
//! as a function of the datum being shown. Both shapes are stored the same
//! way; a constant simply ignores its argument.

use std::fmt;
use std::rc::Rc;

/// A value of type `T` computed from a datum `D`, possibly failing with `E`
pub struct Resolver<D: ?Sized, T, E> {
    func: Rc<dyn Fn(&D) -> Result<T, E>>,
}

impl<D: ?Sized, T, E> Resolver<D, T, E> {
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(&D) -> Result<T, E> + 'static,
    {
        Self { func: Rc::new(func) }
    }

    pub fn resolve(&self, datum: &D) -> Result<T, E> {
        (self.func)(datum)
    }
}

impl<D: ?Sized + 'static, T: Clone + 'static, E: 'static> Resolver<D, T, E> {
    pub fn constant(value: T) -> Self {
        Self::from_fn(move |_: &D| Ok(value.clone()))
    }
}

impl<D: ?Sized, T, E> Clone for Resolver<D, T, E> {
    fn clone(&self) -> Self {
        Self { func: Rc::clone(&self.func) }
    }
}

impl<D: ?Sized, T, E> fmt::Debug for Resolver<D, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Resolver(..)")
    }
}
