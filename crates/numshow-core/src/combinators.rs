//! Combinators that build renderers out of other renderers
//!
//! Each combinator is a small wrapper holding the renderers it composes.
//! The free functions mirror the methods on [`crate::ShowExt`].

use std::borrow::Cow;

use crate::show::Show;

/// Dispatches on a predicate, see [`filter_or_else`]
#[derive(Debug, Clone)]
pub struct FilterOrElse<P, F, S> {
    predicate: P,
    fallback: F,
    show: S,
}

impl<P, F, S> FilterOrElse<P, F, S> {
    pub fn new(predicate: P, fallback: F, show: S) -> Self {
        Self {
            predicate,
            fallback,
            show,
        }
    }
}

impl<T, P, F, S> Show<T> for FilterOrElse<P, F, S>
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    F: Show<T>,
    S: Show<T>,
{
    fn show(&self, value: &T) -> String {
        if (self.predicate)(value) {
            self.show.show(value)
        } else {
            self.fallback.show(value)
        }
    }
}

/// Render with `show` where `predicate` holds, with `fallback` elsewhere
pub fn filter_or_else<T, P, F, S>(predicate: P, fallback: F, show: S) -> FilterOrElse<P, F, S>
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    F: Show<T>,
    S: Show<T>,
{
    FilterOrElse::new(predicate, fallback, show)
}

/// Appends a fixed suffix, see [`with_suffix`]
#[derive(Debug, Clone)]
pub struct WithSuffix<S> {
    suffix: Cow<'static, str>,
    show: S,
}

impl<S> WithSuffix<S> {
    pub fn new(suffix: impl Into<Cow<'static, str>>, show: S) -> Self {
        Self {
            suffix: suffix.into(),
            show,
        }
    }
}

impl<T: ?Sized, S: Show<T>> Show<T> for WithSuffix<S> {
    fn show(&self, value: &T) -> String {
        let mut out = self.show.show(value);
        out.push_str(&self.suffix);
        out
    }
}

pub fn with_suffix<S>(suffix: impl Into<Cow<'static, str>>, show: S) -> WithSuffix<S> {
    WithSuffix::new(suffix, show)
}

/// Appends `k` to every non-zero value, see [`with_k`]
#[derive(Debug, Clone)]
pub struct WithK<S> {
    show: S,
}

impl<S: Show<f64>> Show<f64> for WithK<S> {
    fn show(&self, value: &f64) -> String {
        // A true zero reads "0", not "0k"
        if *value != 0.0 {
            with_suffix("k", &self.show).show(value)
        } else {
            self.show.show(value)
        }
    }
}

pub fn with_k<S: Show<f64>>(show: S) -> WithK<S> {
    WithK { show }
}

/// Transforms the input before rendering, see [`contramap`]
#[derive(Debug, Clone)]
pub struct Contramap<G, S> {
    transform: G,
    show: S,
}

impl<G, S> Contramap<G, S> {
    pub fn new(transform: G, show: S) -> Self {
        Self { transform, show }
    }
}

impl<U, T, G, S> Show<U> for Contramap<G, S>
where
    U: ?Sized,
    G: Fn(&U) -> T,
    S: Show<T>,
{
    fn show(&self, value: &U) -> String {
        self.show.show(&(self.transform)(value))
    }
}

/// Render `transform(value)` with `show`
pub fn contramap<U, T, G, S>(transform: G, show: S) -> Contramap<G, S>
where
    U: ?Sized,
    G: Fn(&U) -> T,
    S: Show<T>,
{
    Contramap::new(transform, show)
}
