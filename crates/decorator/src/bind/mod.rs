//! Binding constructor arguments onto an object's fields.
//!
//! A constructor declares its parameters as a [`Signature`]. Decorating the constructor body with
//! [`constructor`] produces an [`Init`] that, on every call, binds the [`CallArgs`] against the
//! signature, stores each bound value on the instance through [`FieldSink`], and only then runs
//! the body.
mod arguments;
mod constructor;
mod signature;

pub use arguments::{BoundArguments, CallArgs};
pub use constructor::{Constructor, FieldSink, Init, constructor};
pub use signature::{ParamKind, Parameter, Signature, SignatureBuilder};
