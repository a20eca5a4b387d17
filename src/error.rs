// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

/// The single error currency of the engine.
///
/// Resolvers may return any of these; the [`Request`](crate::Request)
/// boundary catches them and serializes each message into the response's
/// `errors` array. Unknown fields and unmatched fragment type conditions
/// are deliberately not errors.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A required argument was missing from the field's arguments object.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An argument was present but failed scalar or shape conversion.
    #[error("Invalid argument: {argument} message: {message}")]
    InvalidArgumentValue { argument: String, message: String },

    #[error("No operation found")]
    NoOperationFound,

    #[error("Must provide operation name if query contains multiple operations")]
    MultipleOperationsNoOperationName,

    #[error("operationName '{0}' doesn't match any operation")]
    UnmatchedOperationName(String),

    /// The document's operation kind has no root object in the `TypeMap`.
    #[error("Unexpected operation type: {0}")]
    UnexpectedOperationType(String),

    /// An object-valued field was resolved without a sub-selection.
    #[error("Missing selection set for an object-valued field")]
    MissingSelection,
}
