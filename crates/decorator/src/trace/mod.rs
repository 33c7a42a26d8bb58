//! Call tracing.
//!
//! [`Trace`] configures how calls are reported; decorating a function with it yields a
//! [`Traced`] function owning a private call counter. Every successful call writes one
//! [`TraceLine`] such as `3 add(2, 3) -> 5` to the configured [`TraceSink`].
mod args;
mod render;
mod sink;

pub(crate) use args::function_name;
pub use args::TraceArgs;
pub use render::{DebugResult, DisplayResult, RenderResult};
pub use sink::{FnSink, MemorySink, StdoutSink, TraceLine, TraceSink, TracingSink, fn_sink};

use crate::decorator::{Decorates, Decorator};
use crate::fn_trait::FnTrait;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceOptions {
    /// prefix each line with the call's ordinal
    pub show_counter: bool,
    /// render each argument as `value: Type`
    pub show_types: bool,
}

/// Decorator factory for traced functions.
///
/// `R` picks how results are rendered: [`DisplayResult`] unless [`Trace::debug_result`] is used.
#[derive(Debug, Clone)]
pub struct Trace<S = StdoutSink, R = DisplayResult> {
    name: Option<Cow<'static, str>>,
    options: TraceOptions,
    sink: S,
    render: PhantomData<R>,
}

/// Traces to standard output with the given options, naming functions after their type.
pub fn trace(options: TraceOptions) -> Trace {
    Trace::new().options(options)
}

impl Trace {
    /// Traces to standard output; the function name is the one the decorated function reports
    /// through [`FnTrait::fn_name`].
    pub fn new() -> Self {
        Self { name: None, options: TraceOptions::default(), sink: StdoutSink, render: PhantomData }
    }

    pub fn named<N: Into<Cow<'static, str>>>(name: N) -> Self {
        Self { name: Some(name.into()), ..Self::new() }
    }
}

impl Default for Trace {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, R> Trace<S, R> {
    pub fn show_counter(mut self, show_counter: bool) -> Self {
        self.options.show_counter = show_counter;
        self
    }

    pub fn show_types(mut self, show_types: bool) -> Self {
        self.options.show_types = show_types;
        self
    }

    pub fn options(mut self, options: TraceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn sink<T: TraceSink>(self, sink: T) -> Trace<T, R> {
        Trace { name: self.name, options: self.options, sink, render: PhantomData }
    }

    /// Renders results with `Debug` instead of `Display`.
    pub fn debug_result(self) -> Trace<S, DebugResult> {
        Trace { name: self.name, options: self.options, sink: self.sink, render: PhantomData }
    }
}

impl<S, R> Decorates for Trace<S, R> {}

impl<F, S: Clone, R> Decorator<F> for Trace<S, R> {
    type Out = Traced<F, S, R>;

    fn decorate(&self, f: F) -> Self::Out {
        // an inferred name is resolved on first use, where the function's `FnTrait` impl is known
        let name = self.name.clone().map_or_else(OnceLock::new, OnceLock::from);
        Traced {
            f,
            name,
            options: self.options,
            sink: self.sink.clone(),
            counter: AtomicU64::new(0),
            render: PhantomData,
        }
    }
}

/// A traced function. Its counter starts at zero and is never shared with another wrapping.
pub struct Traced<F, S = StdoutSink, R = DisplayResult> {
    f: F,
    name: OnceLock<Cow<'static, str>>,
    options: TraceOptions,
    sink: S,
    counter: AtomicU64,
    render: PhantomData<R>,
}

impl<F, S, R> Traced<F, S, R> {
    /// The name used in trace lines: the explicit one, or the inferred one once the function
    /// has been called.
    pub fn name(&self) -> Option<&str> {
        self.name.get().map(Deref::deref)
    }

    pub fn options(&self) -> TraceOptions {
        self.options
    }

    /// Number of calls started so far, failed ones included.
    pub fn calls(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    fn next_ordinal(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn resolve_name<Args>(&self) -> &Cow<'static, str>
    where
        F: FnTrait<Args>,
    {
        self.name.get_or_init(|| self.f.fn_name())
    }

    fn emit(&self, name: &str, ordinal: u64, args: &str, result: String)
    where
        S: TraceSink,
    {
        let ordinal = self.options.show_counter.then_some(ordinal);
        self.sink.emit(&TraceLine::new(ordinal, name, args, result));
    }

    /// Traces a fallible function: an `Ok` value is traced and returned, an `Err` is returned
    /// untouched and leaves no trace line.
    pub fn try_call<Args, T, E>(&self, args: Args) -> Result<T, E>
    where
        F: FnTrait<Args, Output = Result<T, E>>,
        Args: TraceArgs,
        R: RenderResult<T>,
        S: TraceSink,
    {
        let name = self.resolve_name::<Args>();
        let ordinal = self.next_ordinal();
        let rendered = args.render(self.options.show_types);
        let value = self.f.call(args)?;
        self.emit(name, ordinal, &rendered, R::render(&value));
        Ok(value)
    }
}

impl<F, S, R, Args> FnTrait<Args> for Traced<F, S, R>
where
    F: FnTrait<Args>,
    R: RenderResult<F::Output>,
    Args: TraceArgs,
    S: TraceSink,
{
    type Output = F::Output;

    fn call(&self, args: Args) -> Self::Output {
        let name = self.resolve_name::<Args>();
        let ordinal = self.next_ordinal();
        let rendered = args.render(self.options.show_types);
        let ret = self.f.call(args);
        self.emit(name, ordinal, &rendered, R::render(&ret));
        ret
    }

    fn fn_name(&self) -> Cow<'static, str> {
        self.resolve_name::<Args>().clone()
    }
}

impl<F, S: fmt::Debug, R> fmt::Debug for Traced<F, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traced")
            .field("name", &self.name())
            .field("options", &self.options)
            .field("sink", &self.sink)
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}
