use crate::error::BindError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// The arguments of one call: positional values followed by named ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    positional: Vec<Value>,
    keywords: Vec<(String, Value)>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg<V: Into<Value>>(mut self, value: V) -> Self {
        self.positional.push(value.into());
        self
    }

    pub fn kwarg<K: Into<String>, V: Into<Value>>(mut self, name: K, value: V) -> Self {
        self.keywords.push((name.into(), value.into()));
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// keyword arguments in call order; a name may repeat, which binding rejects
    pub fn keywords(&self) -> &[(String, Value)] {
        &self.keywords
    }

    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }
}

impl<V: Into<Value>> FromIterator<V> for CallArgs {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self { positional: iter.into_iter().map(Into::into).collect(), keywords: Vec::new() }
    }
}

/// Parameter name to resolved value for one call, in declaration order, defaults applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArguments {
    arguments: Vec<(String, Value)>,
}

impl BoundArguments {
    pub(crate) fn new(arguments: Vec<(String, Value)>) -> Self {
        Self { arguments }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.arguments.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.arguments.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arguments.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.arguments.into_iter().collect()
    }

    /// Builds `T` from the bound values, each parameter name becoming a field name.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, BindError> {
        let object = Value::Object(self.clone().into_map());
        Ok(serde_json::from_value(object)?)
    }
}

impl IntoIterator for BoundArguments {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.arguments.into_iter()
    }
}
