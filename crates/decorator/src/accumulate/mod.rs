//! Materializing lazily produced sequences.
//!
//! [`accumulate`], [`accumulate_with`] and [`accumulate_star`] build an [`Accumulate`]
//! decorator. The [`Accumulated`] function it produces drains the sequence returned by the
//! wrapped function before returning, so callers always receive a finished value.
mod accumulator;
mod from_items;

pub use accumulator::{AccumulateFn, Accumulator, Collect, Unpack};
pub use from_items::FromItems;

use crate::decorator::{Decorates, Decorator};
use crate::fn_trait::FnTrait;
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Copy)]
pub struct Accumulate<A> {
    accumulator: A,
}

impl<A> Accumulate<A> {
    pub fn new(accumulator: A) -> Self {
        Self { accumulator }
    }
}

/// Collects the produced sequence into `C`.
pub fn accumulate<C>() -> Accumulate<Collect<C>> {
    Accumulate::new(Collect::new())
}

/// Passes the produced sequence to `f` and returns whatever it builds.
pub fn accumulate_with<F>(f: F) -> Accumulate<AccumulateFn<F>> {
    Accumulate::new(AccumulateFn::new(f))
}

/// Calls `f` with the produced items as its positional arguments.
///
/// The sequence must yield exactly as many items as `f` takes; otherwise the call returns
/// [`AccumulateError::ArityMismatch`](crate::AccumulateError::ArityMismatch).
pub fn accumulate_star<F, Args>(f: F) -> Accumulate<Unpack<F, Args>>
where
    F: FnTrait<Args>,
{
    Accumulate::new(Unpack::new(f))
}

impl<A> Decorates for Accumulate<A> {}

impl<F, A: Clone> Decorator<F> for Accumulate<A> {
    type Out = Accumulated<F, A>;

    fn decorate(&self, f: F) -> Self::Out {
        Accumulated { f, accumulator: self.accumulator.clone() }
    }
}

/// A function whose sequence result is accumulated eagerly.
pub struct Accumulated<F, A> {
    f: F,
    accumulator: A,
}

impl<F, A, Args> FnTrait<Args> for Accumulated<F, A>
where
    F: FnTrait<Args>,
    F::Output: IntoIterator,
    A: Accumulator<<F::Output as IntoIterator>::IntoIter>,
{
    type Output = A::Output;

    fn call(&self, args: Args) -> Self::Output {
        let items = self.f.call(args).into_iter();
        self.accumulator.accumulate(items)
    }

    fn fn_name(&self) -> Cow<'static, str> {
        self.f.fn_name()
    }
}

impl<F, A> Accumulated<F, A> {
    /// For functions that can fail before producing a sequence: the error is returned as is,
    /// otherwise the sequence is accumulated.
    pub fn try_call<Args, I, E>(&self, args: Args) -> Result<A::Output, E>
    where
        F: FnTrait<Args, Output = Result<I, E>>,
        I: IntoIterator,
        A: Accumulator<I::IntoIter>,
    {
        let items = self.f.call(args)?.into_iter();
        Ok(self.accumulator.accumulate(items))
    }
}

impl<F, A: fmt::Debug> fmt::Debug for Accumulated<F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulated").field("accumulator", &self.accumulator).finish_non_exhaustive()
    }
}
