use thiserror::Error;

use crate::bind::ParamKind;

#[derive(Debug, Error)]
pub enum DecoratorError {
    #[error("bind error: {source}")]
    Bind {
        #[from]
        source: BindError,
    },

    #[error("signature error: {source}")]
    Signature {
        #[from]
        source: SignatureError,
    },

    #[error("accumulate error: {source}")]
    Accumulate {
        #[from]
        source: AccumulateError,
    },
}

/// The supplied arguments cannot be matched to a declared parameter list,
/// or a bound value cannot be stored on the target object.
#[derive(Error, Debug)]
pub enum BindError {
    #[error("takes {expected} positional arguments but {given} were given")]
    TooManyPositional { expected: usize, given: usize },

    #[error("got an unexpected keyword argument '{name}'")]
    UnexpectedKeyword { name: String },

    #[error("got multiple values for argument '{name}'")]
    MultipleValues { name: String },

    #[error("missing a required argument: '{name}'")]
    MissingArgument { name: String },

    #[error("invalid value for field '{name}': {reason}")]
    InvalidField { name: String, reason: String },

    #[error("bound arguments do not fit the target type: {source}")]
    Deserialize {
        #[from]
        source: serde_json::Error,
    },
}

impl BindError {
    pub fn too_many_positional(expected: usize, given: usize) -> Self {
        Self::TooManyPositional { expected, given }
    }

    pub fn unexpected_keyword<S: ToString>(name: S) -> Self {
        Self::UnexpectedKeyword { name: name.to_string() }
    }

    pub fn multiple_values<S: ToString>(name: S) -> Self {
        Self::MultipleValues { name: name.to_string() }
    }

    pub fn missing_argument<S: ToString>(name: S) -> Self {
        Self::MissingArgument { name: name.to_string() }
    }

    pub fn invalid_field<N: ToString, R: ToString>(name: N, reason: R) -> Self {
        Self::InvalidField { name: name.to_string(), reason: reason.to_string() }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SignatureError {
    #[error("duplicate parameter '{name}'")]
    DuplicateParameter { name: String },

    #[error("{kind} parameter '{name}' cannot follow a {previous} parameter")]
    WrongOrder { name: String, kind: ParamKind, previous: ParamKind },

    #[error("non-default parameter '{name}' follows default parameter")]
    NonDefaultAfterDefault { name: String },

    #[error("{kind} parameter '{name}' cannot declare a default")]
    VariadicDefault { name: String, kind: ParamKind },
}

impl SignatureError {
    pub fn duplicate_parameter<S: ToString>(name: S) -> Self {
        Self::DuplicateParameter { name: name.to_string() }
    }

    pub fn wrong_order<S: ToString>(name: S, kind: ParamKind, previous: ParamKind) -> Self {
        Self::WrongOrder { name: name.to_string(), kind, previous }
    }

    pub fn non_default_after_default<S: ToString>(name: S) -> Self {
        Self::NonDefaultAfterDefault { name: name.to_string() }
    }

    pub fn variadic_default<S: ToString>(name: S, kind: ParamKind) -> Self {
        Self::VariadicDefault { name: name.to_string(), kind }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccumulateError {
    #[error("constructor takes {expected} arguments but the sequence produced {actual}")]
    ArityMismatch { expected: usize, actual: usize },
}

impl AccumulateError {
    pub fn arity_mismatch(expected: usize, actual: usize) -> Self {
        Self::ArityMismatch { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(BindError::too_many_positional(2, 3).to_string(), "takes 2 positional arguments but 3 were given");
        assert_eq!(
            SignatureError::wrong_order("b", ParamKind::PositionalOrKeyword, ParamKind::KeywordOnly).to_string(),
            "positional-or-keyword parameter 'b' cannot follow a keyword-only parameter"
        );
        assert_eq!(
            AccumulateError::arity_mismatch(2, 0).to_string(),
            "constructor takes 2 arguments but the sequence produced 0"
        );
    }

    #[test]
    fn test_umbrella_conversions() {
        let err: DecoratorError = BindError::missing_argument("x").into();
        assert_eq!(err.to_string(), "bind error: missing a required argument: 'x'");

        let err: DecoratorError = AccumulateError::arity_mismatch(1, 2).into();
        assert!(matches!(err, DecoratorError::Accumulate { .. }));
    }
}
