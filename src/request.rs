// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_parser::types::{DocumentOperations, ExecutableDocument, OperationDefinition};
use async_graphql_parser::Positioned;
use async_graphql_value::Name;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::error::SchemaError;
use crate::fragment::{Fragment, FragmentMap};
use crate::schema::TypeMap;
use crate::value::Variables;

/// The engine's entry point: owns the root objects and interprets one
/// operation per call against them.
#[derive(Debug)]
pub struct Request {
    operations: TypeMap,
}

impl Request {
    pub fn new(operations: TypeMap) -> Self {
        Self { operations }
    }

    /// Resolve one operation of `document` against the schema.
    ///
    /// The result is always a JSON object: `{"data": …}` on success,
    /// `{"data": null, "errors": [{"message": …}]}` on failure. The
    /// document itself is never mutated, so it may be reused across calls.
    #[instrument(name = "Request::resolve", skip(self, document, variables))]
    pub fn resolve(
        &self,
        document: &ExecutableDocument,
        operation_name: Option<&str>,
        variables: &Variables,
    ) -> Value {
        match self.execute(document, operation_name, variables) {
            Ok(data) => json!({ "data": data }),
            Err(err) => json!({
                "data": null,
                "errors": [{ "message": err.to_string() }],
            }),
        }
    }

    fn execute(
        &self,
        document: &ExecutableDocument,
        operation_name: Option<&str>,
        variables: &Variables,
    ) -> Result<Value, SchemaError> {
        let fragments = collect_fragments(document);
        let operation = find_operation(document, operation_name)?;

        let root = self.operations.get(operation.node.ty).ok_or_else(|| {
            SchemaError::UnexpectedOperationType(operation.node.ty.to_string())
        })?;

        debug!(operation_type = %operation.node.ty, "dispatching operation");

        root.resolve(&operation.node.selection_set, &fragments, variables)
    }
}

fn collect_fragments(document: &ExecutableDocument) -> FragmentMap<'_> {
    document
        .fragments
        .iter()
        .map(|(name, definition)| (name.as_str(), Fragment::new(&definition.node)))
        .collect()
}

fn find_operation<'a>(
    document: &'a ExecutableDocument,
    operation_name: Option<&str>,
) -> Result<&'a Positioned<OperationDefinition>, SchemaError> {
    // An empty operation name means the same as no name at all.
    let operation_name = operation_name.filter(|name| !name.is_empty());

    match &document.operations {
        DocumentOperations::Single(operation) => match operation_name {
            None => Ok(operation),
            Some(name) => Err(SchemaError::UnmatchedOperationName(name.to_string())),
        },
        DocumentOperations::Multiple(operations) => match operation_name {
            Some(name) => operations
                .get(&Name::new(name))
                .ok_or_else(|| SchemaError::UnmatchedOperationName(name.to_string())),
            None if operations.is_empty() => Err(SchemaError::NoOperationFound),
            None if operations.len() == 1 => {
                // The parser files a lone named operation under `Multiple`,
                // so a missing operationName is still unambiguous here. The
                // unwrap is fine, the entry was counted just above.
                Ok(operations.values().next().unwrap())
            }
            None => Err(SchemaError::MultipleOperationsNoOperationName),
        },
    }
}
