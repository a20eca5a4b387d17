// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use serde_json::Value;

use crate::error::SchemaError;
use crate::id::Id;
use crate::schema::{Object, ResolverParams};

/// Shape a resolver's native return value into response JSON.
///
/// Mirror image of [`FromArgument`](crate::FromArgument) for the output
/// direction: the implementing type carries the field's declared modifier
/// chain (`Option<T>` for nullable, `Vec<T>` for lists) down to a scalar
/// or an [`Object`] reference.
pub trait ResolveValue {
    fn resolve_value(&self, params: &ResolverParams<'_>) -> Result<Value, SchemaError>;
}

impl ResolveValue for i64 {
    fn resolve_value(&self, _params: &ResolverParams<'_>) -> Result<Value, SchemaError> {
        Ok(Value::from(*self))
    }
}

impl ResolveValue for f64 {
    fn resolve_value(&self, _params: &ResolverParams<'_>) -> Result<Value, SchemaError> {
        Ok(Value::from(*self))
    }
}

impl ResolveValue for bool {
    fn resolve_value(&self, _params: &ResolverParams<'_>) -> Result<Value, SchemaError> {
        Ok(Value::Bool(*self))
    }
}

impl ResolveValue for str {
    fn resolve_value(&self, _params: &ResolverParams<'_>) -> Result<Value, SchemaError> {
        Ok(Value::String(self.to_owned()))
    }
}

impl ResolveValue for String {
    fn resolve_value(&self, _params: &ResolverParams<'_>) -> Result<Value, SchemaError> {
        Ok(Value::String(self.clone()))
    }
}

impl ResolveValue for Id {
    fn resolve_value(&self, _params: &ResolverParams<'_>) -> Result<Value, SchemaError> {
        Ok(Value::String(self.to_base64()))
    }
}

/// The `Scalar` wildcard: raw JSON is emitted as-is.
impl ResolveValue for Value {
    fn resolve_value(&self, _params: &ResolverParams<'_>) -> Result<Value, SchemaError> {
        Ok(self.clone())
    }
}

/// Composite results recurse into the object with the field's
/// sub-selection, which must be present in the query.
impl ResolveValue for Arc<Object> {
    fn resolve_value(&self, params: &ResolverParams<'_>) -> Result<Value, SchemaError> {
        let selection = params.selection.ok_or(SchemaError::MissingSelection)?;
        self.resolve(selection, params.fragments, params.variables)
    }
}

impl<T: ResolveValue> ResolveValue for Option<T> {
    fn resolve_value(&self, params: &ResolverParams<'_>) -> Result<Value, SchemaError> {
        match self {
            Some(inner) => inner.resolve_value(params),
            None => Ok(Value::Null),
        }
    }
}

impl<T: ResolveValue> ResolveValue for Vec<T> {
    fn resolve_value(&self, params: &ResolverParams<'_>) -> Result<Value, SchemaError> {
        self.iter()
            .map(|element| element.resolve_value(params))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

impl<T: ResolveValue + ?Sized> ResolveValue for &T {
    fn resolve_value(&self, params: &ResolverParams<'_>) -> Result<Value, SchemaError> {
        (**self).resolve_value(params)
    }
}
