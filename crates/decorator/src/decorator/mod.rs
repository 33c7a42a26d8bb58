//! The composition layer shared by every decorator factory of this crate.
//!
//! A [`Decorator`] turns a raw callable into a wrapped one. Decorators are plain values holding
//! their configuration, so the same decorator can wrap many callables, and two decorators can be
//! chained with [`DecoratorExt::and_then`] the way stacked decorators are applied bottom-up.
mod decorator_composer;

pub use decorator_composer::DecoratorComposer;

pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}

/// Marks the decorator values of this crate, which is what [`DecoratorExt`] is available on.
///
/// A decorator can wrap callables of any type, so the marker does not name an input type.
pub trait Decorates {}

/// Chaining for decorators; the input type is fixed by the final [`Decorator::decorate`] call.
pub trait DecoratorExt: Decorates + Sized {
    /// apply `self` first, then `decorator` to what `self` produced
    fn and_then<D: Decorates>(self, decorator: D) -> DecoratorComposer<Self, D> {
        DecoratorComposer::new(self, decorator)
    }

    /// apply `decorator` first, then `self`
    fn compose<D: Decorates>(self, decorator: D) -> DecoratorComposer<D, Self> {
        DecoratorComposer::new(decorator, self)
    }
}

impl<T: Decorates> DecoratorExt for T {}

/// Returns the callable it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityDecorator;

impl Decorates for IdentityDecorator {}

impl<In> Decorator<In> for IdentityDecorator {
    type Out = In;

    #[inline]
    fn decorate(&self, raw: In) -> In {
        raw
    }
}

/// Any `Fn(In) -> Out` used as a decorator; see [`decorator_fn`].
#[derive(Debug, Clone, Copy)]
pub struct DecoratorFn<F> {
    wrap: F,
}

/// Makes a decorator out of a function mapping the raw callable to its wrapped form.
pub fn decorator_fn<In, Out, F: Fn(In) -> Out>(wrap: F) -> DecoratorFn<F> {
    DecoratorFn { wrap }
}

impl<F> Decorates for DecoratorFn<F> {}

impl<In, Out, F: Fn(In) -> Out> Decorator<In> for DecoratorFn<F> {
    type Out = Out;

    fn decorate(&self, raw: In) -> Out {
        (self.wrap)(raw)
    }
}
