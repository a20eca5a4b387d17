// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde_json::Value;

use crate::error::SchemaError;
use crate::id::Id;
use crate::value::Variables;

/// Decode one argument out of a field's coerced-arguments object.
///
/// The implementing type doubles as the argument's declared GraphQL type:
/// `Option<T>` admits null or absent (nullable), `Vec<T>` admits an
/// ordered list, and the scalar impls terminate the chain. A non-nullable
/// declaration is simply the absence of `Option` in the type.
pub trait FromArgument: Sized {
    fn from_arguments(name: &str, arguments: &Variables) -> Result<Self, SchemaError>;
}

/// Look up `name` in `arguments` and decode it, failing when the argument
/// is missing or has the wrong shape.
pub fn require<T: FromArgument>(name: &str, arguments: &Variables) -> Result<T, SchemaError> {
    T::from_arguments(name, arguments)
}

/// The error-free counterpart of [`require`] for optional arguments:
/// any decoding failure is reported as `None`.
pub fn find<T: FromArgument>(name: &str, arguments: &Variables) -> Option<T> {
    T::from_arguments(name, arguments).ok()
}

fn lookup<'a>(name: &str, arguments: &'a Variables) -> Result<&'a Value, SchemaError> {
    arguments
        .get(name)
        .ok_or_else(|| SchemaError::InvalidArgument(name.to_string()))
}

fn mismatch(name: &str, expected: &str, actual: &Value) -> SchemaError {
    SchemaError::InvalidArgumentValue {
        argument: name.to_string(),
        message: format!("expected {expected}, found {}", type_name(actual)),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "Boolean",
        Value::Number(_) => "Number",
        Value::String(_) => "String",
        Value::Array(_) => "List",
        Value::Object(_) => "Object",
    }
}

impl FromArgument for i64 {
    fn from_arguments(name: &str, arguments: &Variables) -> Result<Self, SchemaError> {
        let value = lookup(name, arguments)?;
        value.as_i64().ok_or_else(|| mismatch(name, "Int", value))
    }
}

impl FromArgument for f64 {
    fn from_arguments(name: &str, arguments: &Variables) -> Result<Self, SchemaError> {
        let value = lookup(name, arguments)?;
        value.as_f64().ok_or_else(|| mismatch(name, "Float", value))
    }
}

impl FromArgument for String {
    fn from_arguments(name: &str, arguments: &Variables) -> Result<Self, SchemaError> {
        let value = lookup(name, arguments)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch(name, "String", value))
    }
}

impl FromArgument for bool {
    fn from_arguments(name: &str, arguments: &Variables) -> Result<Self, SchemaError> {
        let value = lookup(name, arguments)?;
        value.as_bool().ok_or_else(|| mismatch(name, "Boolean", value))
    }
}

impl FromArgument for Id {
    fn from_arguments(name: &str, arguments: &Variables) -> Result<Self, SchemaError> {
        let value = lookup(name, arguments)?;
        let encoded = value.as_str().ok_or_else(|| mismatch(name, "ID", value))?;

        Id::from_base64(encoded).map_err(|err| SchemaError::InvalidArgumentValue {
            argument: name.to_string(),
            message: err.to_string(),
        })
    }
}

/// The `Scalar` wildcard: any JSON value passes through untouched.
impl FromArgument for Value {
    fn from_arguments(name: &str, arguments: &Variables) -> Result<Self, SchemaError> {
        lookup(name, arguments).cloned()
    }
}

impl<T: FromArgument> FromArgument for Option<T> {
    fn from_arguments(name: &str, arguments: &Variables) -> Result<Self, SchemaError> {
        match arguments.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(_) => T::from_arguments(name, arguments).map(Some),
        }
    }
}

impl<T: FromArgument> FromArgument for Vec<T> {
    fn from_arguments(name: &str, arguments: &Variables) -> Result<Self, SchemaError> {
        let value = lookup(name, arguments)?;
        let elements = value.as_array().ok_or_else(|| mismatch(name, "List", value))?;

        elements
            .iter()
            .map(|element| {
                // Each element re-enters the chain under a synthetic
                // single-entry object, so nested modifiers keep working.
                let mut single = Variables::new();
                single.insert("value".to_owned(), element.clone());
                T::from_arguments("value", &single)
            })
            .collect()
    }
}
