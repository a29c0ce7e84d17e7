//! Input coercion and shape-preserving entry points.
//!
//! Callers hand over either one value or a list of values. Both become a
//! batch of strings before they reach the dispatcher, and results come back
//! in the same shape: a scalar for a scalar, an equal-length list for a list.

use serde::Serialize;
use serde_json::Value;

use crate::dispatch::{AttributeValue, Dispatcher};
use crate::error::{BoundaryError, Result};

/// Raw caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocInput {
    Scalar(String),
    List(Vec<String>),
}

impl DocInput {
    /// Coerce a JSON value into a batch.
    ///
    /// Strings and numbers are scalars (numbers keep their decimal text, so a
    /// float id arrives as `"82683688377.0"`). Arrays of strings and numbers
    /// are lists. Everything else is rejected.
    pub fn from_json(value: &Value) -> std::result::Result<Self, BoundaryError> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    scalar_text(item).ok_or_else(|| BoundaryError::UnsupportedElement {
                        index,
                        kind: json_kind(item).to_string(),
                    })
                })
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(DocInput::List),
            other => scalar_text(other)
                .map(DocInput::Scalar)
                .ok_or_else(|| BoundaryError::UnsupportedContainer(json_kind(other).to_string())),
        }
    }

    /// The batch view of the input.
    pub fn values(&self) -> &[String] {
        match self {
            DocInput::Scalar(value) => std::slice::from_ref(value),
            DocInput::List(values) => values,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, DocInput::Scalar(_))
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Give `results` the shape of this input.
    pub fn shape<T>(&self, results: Vec<T>) -> Shaped<T> {
        match self {
            DocInput::Scalar(_) => match results.into_iter().next() {
                Some(value) => Shaped::Scalar(value),
                None => Shaped::List(Vec::new()),
            },
            DocInput::List(_) => Shaped::List(results),
        }
    }
}

impl From<&str> for DocInput {
    fn from(value: &str) -> Self {
        DocInput::Scalar(value.to_string())
    }
}

impl From<String> for DocInput {
    fn from(value: String) -> Self {
        DocInput::Scalar(value)
    }
}

impl From<Vec<String>> for DocInput {
    fn from(values: Vec<String>) -> Self {
        DocInput::List(values)
    }
}

impl From<Vec<&str>> for DocInput {
    fn from(values: Vec<&str>) -> Self {
        DocInput::List(values.into_iter().map(str::to_string).collect())
    }
}

/// Output mirroring the shape of a [`DocInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Shaped<T> {
    Scalar(T),
    List(Vec<T>),
}

impl<T> Shaped<T> {
    /// Flatten back into a list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Shaped::Scalar(value) => vec![value],
            Shaped::List(values) => values,
        }
    }
}

/// Parse with the default dispatcher.
pub fn parse(input: &DocInput, doctype: &str, mask: bool) -> Result<Shaped<Option<String>>> {
    let parsed = Dispatcher::new().parse(doctype, input.values(), mask)?;
    Ok(input.shape(parsed))
}

/// Validate with the default dispatcher.
pub fn validate(input: &DocInput, doctype: &str, lazy: bool) -> Result<Shaped<bool>> {
    let valid = Dispatcher::new().validate(doctype, input.values(), lazy)?;
    Ok(input.shape(valid))
}

/// Extract attributes with the default dispatcher.
pub fn attributes<N: AsRef<str>>(
    input: &DocInput,
    doctype: &str,
    names: &[N],
    lazy: bool,
) -> Result<Shaped<AttributeValue>> {
    let column = Dispatcher::new().attributes(doctype, input.values(), names, lazy)?;
    Ok(input.shape(column.into_values()))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocbrError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(
            DocInput::from_json(&json!("826.836.883-77")).unwrap(),
            DocInput::Scalar("826.836.883-77".to_string())
        );
        assert_eq!(
            DocInput::from_json(&json!(82683688377u64)).unwrap(),
            DocInput::Scalar("82683688377".to_string())
        );
        assert_eq!(
            DocInput::from_json(&json!(82683688377.0)).unwrap(),
            DocInput::Scalar("82683688377.0".to_string())
        );
    }

    #[test]
    fn test_from_json_lists() {
        let input = DocInput::from_json(&json!(["82683688377", 52998224725u64])).unwrap();
        assert_eq!(input, DocInput::from(vec!["82683688377", "52998224725"]));
        assert_eq!(DocInput::from_json(&json!([])).unwrap(), DocInput::List(Vec::new()));
    }

    #[test]
    fn test_from_json_rejects_unsupported() {
        assert_eq!(
            DocInput::from_json(&json!({"cpf": "1"})).unwrap_err(),
            BoundaryError::UnsupportedContainer("object".to_string())
        );
        assert_eq!(
            DocInput::from_json(&json!(null)).unwrap_err(),
            BoundaryError::UnsupportedContainer("null".to_string())
        );
        assert_eq!(
            DocInput::from_json(&json!(["1", true])).unwrap_err(),
            BoundaryError::UnsupportedElement {
                index: 1,
                kind: "bool".to_string()
            }
        );
        assert_eq!(
            DocInput::from_json(&json!([["1"]])).unwrap_err(),
            BoundaryError::UnsupportedElement {
                index: 0,
                kind: "array".to_string()
            }
        );
    }

    #[test]
    fn test_scalar_in_scalar_out() {
        let input = DocInput::from("155-59.A539000152");
        assert_eq!(
            parse(&input, "cnpj", true).unwrap(),
            Shaped::Scalar(Some("15.559.539/0001-52".to_string()))
        );
        assert_eq!(validate(&DocInput::from("84223533040"), "cnh", true).unwrap(), Shaped::Scalar(true));
        assert_eq!(
            attributes(&DocInput::from("389441060167"), "te", &["estado"], false).unwrap(),
            Shaped::Scalar(AttributeValue::Value(Some("SP".to_string())))
        );
    }

    #[test]
    fn test_list_in_list_out() {
        let input = DocInput::from(vec!["82683688377", "nope", "52998224725"]);
        assert_eq!(
            validate(&input, "cpf", false).unwrap(),
            Shaped::List(vec![true, false, true])
        );

        let single = DocInput::from(vec!["82683688377"]);
        assert_eq!(
            parse(&single, "cpf", true).unwrap(),
            Shaped::List(vec![Some("826.836.883-77".to_string())])
        );

        let scalar = validate(&DocInput::from("82683688377"), "cpf", false).unwrap();
        assert_eq!(scalar.into_vec(), vec![true]);
    }

    #[test]
    fn test_facade_errors() {
        let err = parse(&DocInput::from("1"), "rg", false).unwrap_err();
        assert!(matches!(err, DocbrError::Configuration(_)));
    }

    #[test]
    fn test_shaped_serialization() {
        let shaped = attributes(&DocInput::from("11987659876"), "tfone", &["*"], false).unwrap();
        assert_eq!(
            serde_json::to_value(&shaped).unwrap(),
            json!({"ddd": "11", "estado": "SP", "tipo": "celular"})
        );

        let shaped = parse(&DocInput::from(vec!["ABC1234", "x"]), "placa", true).unwrap();
        assert_eq!(serde_json::to_value(&shaped).unwrap(), json!(["ABC-1234", null]));
    }
}
