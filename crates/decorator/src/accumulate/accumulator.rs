use crate::accumulate::FromItems;
use crate::error::AccumulateError;
use crate::fn_trait::FnTrait;
use std::fmt;
use std::marker::PhantomData;

/// Turns a finite sequence into a finished value.
pub trait Accumulator<I: Iterator> {
    type Output;

    fn accumulate(&self, items: I) -> Self::Output;
}

/// Collects into any [`FromIterator`] container.
pub struct Collect<C> {
    _phantom: PhantomData<fn() -> C>,
}

impl<C> Collect<C> {
    pub fn new() -> Self {
        Self { _phantom: PhantomData }
    }
}

impl<C> Default for Collect<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Collect<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Collect<C> {}

impl<C> fmt::Debug for Collect<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Collect").field(&std::any::type_name::<C>()).finish()
    }
}

impl<I, C> Accumulator<I> for Collect<C>
where
    I: Iterator,
    C: FromIterator<I::Item>,
{
    type Output = C;

    fn accumulate(&self, items: I) -> Self::Output {
        items.collect()
    }
}

/// Hands the whole iterator to a closure.
#[derive(Clone, Copy)]
pub struct AccumulateFn<F> {
    f: F,
}

impl<F> AccumulateFn<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for AccumulateFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccumulateFn").finish_non_exhaustive()
    }
}

impl<I, F, Out> Accumulator<I> for AccumulateFn<F>
where
    I: Iterator,
    F: Fn(I) -> Out,
{
    type Output = Out;

    fn accumulate(&self, items: I) -> Self::Output {
        (self.f)(items)
    }
}

/// Spreads the items over the positional parameters of a constructor.
pub struct Unpack<F, Args> {
    f: F,
    _phantom: PhantomData<fn(Args)>,
}

impl<F, Args> Unpack<F, Args>
where
    F: FnTrait<Args>,
{
    pub fn new(f: F) -> Self {
        Self { f, _phantom: PhantomData }
    }
}

impl<F: Clone, Args> Clone for Unpack<F, Args> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone(), _phantom: PhantomData }
    }
}

impl<F, Args> fmt::Debug for Unpack<F, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unpack").field("arity", &std::any::type_name::<Args>()).finish_non_exhaustive()
    }
}

impl<I, F, Args> Accumulator<I> for Unpack<F, Args>
where
    I: Iterator,
    Args: FromItems<I::Item>,
    F: FnTrait<Args>,
{
    type Output = Result<F::Output, AccumulateError>;

    fn accumulate(&self, items: I) -> Self::Output {
        let args = Args::from_items(items)?;
        Ok(self.f.call(args))
    }
}
