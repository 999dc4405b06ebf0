//! The renderer trait and its adapters

use std::borrow::Cow;
use std::sync::Arc;

use crate::combinators::{with_k, Contramap, FilterOrElse, WithK, WithSuffix};

/// Renders a value of type `T` into a display string.
///
/// Implementations are pure: the same input always yields the same output,
/// and rendering never fails for any value of `T`.
pub trait Show<T: ?Sized> {
    fn show(&self, value: &T) -> String;
}

/// A type-erased renderer that can be shared across threads
pub type BoxShow<T> = Box<dyn Show<T> + Send + Sync>;

impl<T: ?Sized, S: Show<T> + ?Sized> Show<T> for &S {
    fn show(&self, value: &T) -> String {
        (**self).show(value)
    }
}

impl<T: ?Sized, S: Show<T> + ?Sized> Show<T> for Box<S> {
    fn show(&self, value: &T) -> String {
        (**self).show(value)
    }
}

impl<T: ?Sized, S: Show<T> + ?Sized> Show<T> for Arc<S> {
    fn show(&self, value: &T) -> String {
        (**self).show(value)
    }
}

/// Renderer backed by a closure, see [`from_fn`]
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Wrap a closure as a renderer
pub fn from_fn<T: ?Sized, F: Fn(&T) -> String>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<T: ?Sized, F: Fn(&T) -> String> Show<T> for FromFn<F> {
    fn show(&self, value: &T) -> String {
        (self.0)(value)
    }
}

/// Method-style combinators.
///
/// Implemented for every sized type; each method only applies where the
/// receiver is a [`Show`] of the type it needs.
pub trait ShowExt: Sized {
    /// Use `self` where `predicate` holds and `fallback` elsewhere
    fn filter_or_else<T, P, F>(self, predicate: P, fallback: F) -> FilterOrElse<P, F, Self>
    where
        T: ?Sized,
        P: Fn(&T) -> bool,
        F: Show<T>,
        Self: Show<T>,
    {
        FilterOrElse::new(predicate, fallback, self)
    }

    /// Append `suffix` to every rendered string
    fn with_suffix(self, suffix: impl Into<Cow<'static, str>>) -> WithSuffix<Self> {
        WithSuffix::new(suffix, self)
    }

    /// Append `k` to every non-zero number
    fn with_k(self) -> WithK<Self>
    where
        Self: Show<f64>,
    {
        with_k(self)
    }

    /// Transform the input before rendering it
    fn contramap<U, T, G>(self, transform: G) -> Contramap<G, Self>
    where
        U: ?Sized,
        G: Fn(&U) -> T,
        Self: Show<T>,
    {
        Contramap::new(transform, self)
    }

    /// Erase the renderer type into a [`BoxShow`]
    fn boxed<T>(self) -> BoxShow<T>
    where
        T: ?Sized,
        Self: Show<T> + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<S> ShowExt for S {}
