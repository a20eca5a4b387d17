// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_value::Value as AstValue;
use serde_json::{Map, Number, Value};

/// The top-level variables object of one request, also the shape of a
/// field's coerced arguments.
pub type Variables = Map<String, Value>;

/// Convert a GraphQL AST value into JSON, substituting variables.
///
/// A variable with no binding becomes JSON null; enforcement of required
/// variables is deferred to argument coercion in the resolver. Type
/// mismatches are likewise not detected here.
pub fn resolve_value(value: &AstValue, variables: &Variables) -> Value {
    match value {
        AstValue::Variable(name) => variables
            .get(name.as_str())
            .cloned()
            .unwrap_or(Value::Null),
        AstValue::Null => Value::Null,
        AstValue::Number(number) => Value::Number(number.clone()),
        AstValue::String(string) => Value::String(string.clone()),
        AstValue::Boolean(boolean) => Value::Bool(*boolean),
        AstValue::Enum(symbol) => Value::String(symbol.to_string()),
        // Not constructible from query text, only programmatically.
        AstValue::Binary(bytes) => Value::Array(
            bytes
                .iter()
                .map(|byte| Value::Number(Number::from(*byte)))
                .collect(),
        ),
        AstValue::List(elements) => Value::Array(
            elements
                .iter()
                .map(|element| resolve_value(element, variables))
                .collect(),
        ),
        AstValue::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(name, value)| (name.to_string(), resolve_value(value, variables)))
                .collect(),
        ),
    }
}
