use crate::bind::{CallArgs, Signature};
use crate::decorator::{Decorates, Decorator};
use crate::error::BindError;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// An object whose fields can be assigned by name.
#[cfg_attr(test, mockall::automock)]
pub trait FieldSink {
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), BindError>;
}

impl FieldSink for Map<String, Value> {
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), BindError> {
        self.insert(name.to_string(), value);
        Ok(())
    }
}

/// Decorator factory for constructor bodies sharing one [`Signature`].
#[derive(Debug, Clone)]
pub struct Constructor {
    signature: Arc<Signature>,
}

pub fn constructor(signature: Signature) -> Constructor {
    Constructor { signature: Arc::new(signature) }
}

impl Decorates for Constructor {}

impl<F> Decorator<F> for Constructor {
    type Out = Init<F>;

    fn decorate(&self, body: F) -> Self::Out {
        Init { signature: Arc::clone(&self.signature), body }
    }
}

/// A constructor body that runs only after every declared field has been assigned.
pub struct Init<F> {
    signature: Arc<Signature>,
    body: F,
}

impl<F> Init<F> {
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Binds `args`, assigns every bound parameter on `instance` in declaration order, then runs
    /// the body with the original arguments.
    ///
    /// A binding failure returns before any field is touched.
    pub fn init<T, R, E>(&self, instance: &mut T, args: CallArgs) -> Result<R, E>
    where
        T: FieldSink + ?Sized,
        F: Fn(&mut T, &CallArgs) -> Result<R, E>,
        E: From<BindError>,
    {
        let bound = self.signature.bind(&args).inspect_err(|e| debug!(cause = %e, "constructor arguments rejected"))?;

        for (name, value) in bound {
            instance.set_field(&name, value)?;
        }

        (self.body)(instance, &args)
    }

    /// Creates a default `T` and runs [`init`](Self::init) on it.
    pub fn construct<T, R, E>(&self, args: CallArgs) -> Result<T, E>
    where
        T: FieldSink + Default,
        F: Fn(&mut T, &CallArgs) -> Result<R, E>,
        E: From<BindError>,
    {
        let mut instance = T::default();
        self.init(&mut instance, args)?;
        Ok(instance)
    }
}

impl<F> fmt::Debug for Init<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Init").field("signature", &self.signature).finish_non_exhaustive()
    }
}
