use crate::bind::{BoundArguments, CallArgs};
use crate::error::{BindError, SignatureError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use tracing::trace;

/// How a parameter accepts its argument.
///
/// The declaration order of the variants is the order parameters must appear in a [`Signature`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    PositionalOnly,
    #[default]
    PositionalOrKeyword,
    /// collects the residual positional arguments into an array
    VarPositional,
    KeywordOnly,
    /// collects the residual keyword arguments into an object
    VarKeyword,
}

impl ParamKind {
    pub fn is_variadic(self) -> bool {
        matches!(self, Self::VarPositional | Self::VarKeyword)
    }

    pub fn accepts_positional(self) -> bool {
        matches!(self, Self::PositionalOnly | Self::PositionalOrKeyword)
    }

    pub fn accepts_keyword(self) -> bool {
        matches!(self, Self::PositionalOrKeyword | Self::KeywordOnly)
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PositionalOnly => "positional-only",
            Self::PositionalOrKeyword => "positional-or-keyword",
            Self::VarPositional => "var-positional",
            Self::KeywordOnly => "keyword-only",
            Self::VarKeyword => "var-keyword",
        };
        f.write_str(name)
    }
}

/// One entry of a declared parameter list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    name: String,
    #[serde(default)]
    kind: ParamKind,
    /// `Some(Value::Null)` is a real default of `null`; `None` means the parameter is required
    #[serde(default, deserialize_with = "present_default", skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
}

fn present_default<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Parameter {
    pub fn new<S: Into<String>>(name: S, kind: ParamKind) -> Self {
        Self { name: name.into(), kind, default: None }
    }

    pub fn with_default<V: Into<Value>>(mut self, default: V) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none() && !self.kind.is_variadic()
    }
}

/// A validated, ordered parameter descriptor list.
///
/// This is what a constructor declares in place of runtime introspection: names, kinds and
/// defaults, in declaration order. Deserializing a `Signature` runs the same validation as
/// [`SignatureBuilder::build`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Parameter>", into = "Vec<Parameter>")]
pub struct Signature {
    params: Vec<Parameter>,
}

impl Signature {
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::new()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|param| param.name == name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    fn has_var_keyword(&self) -> bool {
        self.params.iter().any(|param| param.kind == ParamKind::VarKeyword)
    }

    /// Matches `args` against the declared parameters and applies defaults.
    ///
    /// The result holds one entry per declared parameter, in declaration order. Nothing is
    /// returned unless every argument found a home and every required parameter got a value.
    pub fn bind(&self, args: &CallArgs) -> Result<BoundArguments, BindError> {
        let mut slots: Vec<Option<Value>> = vec![None; self.params.len()];
        let mut positional = args.positional().iter().cloned();

        for (slot, param) in slots.iter_mut().zip(&self.params) {
            match param.kind {
                ParamKind::PositionalOnly | ParamKind::PositionalOrKeyword => match positional.next() {
                    Some(value) => *slot = Some(value),
                    None => break,
                },
                ParamKind::VarPositional => {
                    *slot = Some(Value::Array(positional.by_ref().collect()));
                    break;
                }
                ParamKind::KeywordOnly | ParamKind::VarKeyword => break,
            }
        }

        if positional.next().is_some() {
            let expected = self.params.iter().filter(|param| param.kind.accepts_positional()).count();
            return Err(BindError::too_many_positional(expected, args.positional().len()));
        }

        let mut residual = Map::new();
        for (name, value) in args.keywords() {
            let target = self.params.iter().position(|param| param.kind.accepts_keyword() && param.name == *name);
            match target {
                Some(index) if slots[index].is_some() => return Err(BindError::multiple_values(name)),
                Some(index) => slots[index] = Some(value.clone()),
                None if self.has_var_keyword() => {
                    if residual.insert(name.clone(), value.clone()).is_some() {
                        return Err(BindError::multiple_values(name));
                    }
                }
                None => return Err(BindError::unexpected_keyword(name)),
            }
        }

        let mut arguments = Vec::with_capacity(self.params.len());
        for (slot, param) in slots.into_iter().zip(&self.params) {
            let value = match (slot, param.kind) {
                (Some(value), _) => value,
                (None, ParamKind::VarPositional) => Value::Array(Vec::new()),
                (None, ParamKind::VarKeyword) => Value::Object(std::mem::take(&mut residual)),
                (None, _) => param.default.clone().ok_or_else(|| BindError::missing_argument(&param.name))?,
            };
            arguments.push((param.name.clone(), value));
        }

        trace!(parameters = arguments.len(), "bound call arguments");
        Ok(BoundArguments::new(arguments))
    }
}

impl TryFrom<Vec<Parameter>> for Signature {
    type Error = SignatureError;

    fn try_from(params: Vec<Parameter>) -> Result<Self, Self::Error> {
        validate(&params)?;
        Ok(Self { params })
    }
}

impl From<Signature> for Vec<Parameter> {
    fn from(signature: Signature) -> Self {
        signature.params
    }
}

fn validate(params: &[Parameter]) -> Result<(), SignatureError> {
    let mut names = HashSet::with_capacity(params.len());
    let mut previous: Option<ParamKind> = None;
    let mut seen_default = false;

    for param in params {
        if !names.insert(param.name.as_str()) {
            return Err(SignatureError::duplicate_parameter(&param.name));
        }

        if param.kind.is_variadic() && param.default.is_some() {
            return Err(SignatureError::variadic_default(&param.name, param.kind));
        }

        if let Some(previous) = previous {
            // each variadic kind may appear at most once
            if param.kind < previous || (param.kind == previous && param.kind.is_variadic()) {
                return Err(SignatureError::wrong_order(&param.name, param.kind, previous));
            }
        }

        if param.kind.accepts_positional() {
            if param.default.is_some() {
                seen_default = true;
            } else if seen_default {
                return Err(SignatureError::non_default_after_default(&param.name));
            }
        }

        previous = Some(param.kind);
    }

    Ok(())
}

/// Builds a [`Signature`] one parameter at a time, validating on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct SignatureBuilder {
    params: Vec<Parameter>,
}

impl SignatureBuilder {
    fn new() -> Self {
        Self { params: Vec::new() }
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.params.push(parameter);
        self
    }

    /// a required positional-or-keyword parameter
    pub fn param<S: Into<String>>(self, name: S) -> Self {
        self.parameter(Parameter::new(name, ParamKind::PositionalOrKeyword))
    }

    pub fn param_with_default<S: Into<String>, V: Into<Value>>(self, name: S, default: V) -> Self {
        self.parameter(Parameter::new(name, ParamKind::PositionalOrKeyword).with_default(default))
    }

    pub fn positional_only<S: Into<String>>(self, name: S) -> Self {
        self.parameter(Parameter::new(name, ParamKind::PositionalOnly))
    }

    pub fn var_positional<S: Into<String>>(self, name: S) -> Self {
        self.parameter(Parameter::new(name, ParamKind::VarPositional))
    }

    pub fn keyword_only<S: Into<String>>(self, name: S) -> Self {
        self.parameter(Parameter::new(name, ParamKind::KeywordOnly))
    }

    pub fn keyword_only_with_default<S: Into<String>, V: Into<Value>>(self, name: S, default: V) -> Self {
        self.parameter(Parameter::new(name, ParamKind::KeywordOnly).with_default(default))
    }

    pub fn var_keyword<S: Into<String>>(self, name: S) -> Self {
        self.parameter(Parameter::new(name, ParamKind::VarKeyword))
    }

    pub fn build(self) -> Result<Signature, SignatureError> {
        Signature::try_from(self.params)
    }
}
