// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Execution core for GraphQL operations.
//!
//! Given a parsed [`ExecutableDocument`](async_graphql_parser::types::ExecutableDocument),
//! an operation name, and a variables object, [`Request::resolve`] walks the
//! chosen operation's selection set against a schema of [`Object`]s (each a
//! set of type names plus a [`ResolverMap`]) and produces the JSON response.
//! Execution is synchronous and single-threaded; resolvers are opaque
//! functions that may block on their own I/O.
//!
//! Parsing, schema validation, introspection, and transport are out of
//! scope: the embedder (or a code generator) binds resolvers, assembles a
//! [`TypeMap`] of root objects, and hands parsed documents in.

pub mod arguments;

mod error;
mod fragment;
mod id;
mod output;
mod request;
mod schema;
mod selection;
mod value;

pub use arguments::{find, require, FromArgument};
pub use error::SchemaError;
pub use fragment::{Fragment, FragmentMap};
pub use id::Id;
pub use output::ResolveValue;
pub use request::Request;
pub use schema::{Object, Resolver, ResolverMap, ResolverParams, TypeMap, TypeNames};
pub use value::{resolve_value, Variables};
