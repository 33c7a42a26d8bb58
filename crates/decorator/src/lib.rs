//! Decorators that change what a callable does without touching its body.
//!
//! - [`constructor`] binds constructor arguments to named parameters and stores them as fields
//!   before the constructor body runs.
//! - [`accumulate`], [`accumulate_with`] and [`accumulate_star`] drain the sequence a function
//!   produces into a finished value.
//! - [`Trace`] reports every call with its arguments and result.
//!
//! ```
//! use micro_decorator::{Decorator, FnTrait, MemorySink, Trace};
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let sink = MemorySink::new();
//! let traced = Trace::named("add").show_counter(true).sink(sink.clone()).decorate(add);
//!
//! assert_eq!(traced.call((2, 3)), 5);
//! assert_eq!(sink.lines(), vec!["1 add(2, 3) -> 5"]);
//! ```
mod accumulate;
mod bind;
mod error;
mod fn_trait;
mod trace;

pub mod decorator;

pub use accumulate::{
    Accumulate, AccumulateFn, Accumulated, Accumulator, Collect, FromItems, Unpack, accumulate, accumulate_star,
    accumulate_with,
};
pub use bind::{
    BoundArguments, CallArgs, Constructor, FieldSink, Init, ParamKind, Parameter, Signature, SignatureBuilder,
    constructor,
};
pub use decorator::{Decorates, Decorator, DecoratorExt};
pub use error::{AccumulateError, BindError, DecoratorError, SignatureError};
pub use fn_trait::FnTrait;
pub use trace::{
    DebugResult, DisplayResult, FnSink, MemorySink, RenderResult, StdoutSink, Trace, TraceArgs, TraceLine, TraceOptions,
    TraceSink, Traced, TracingSink, fn_sink, trace,
};
