// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use async_graphql_parser::types::{OperationType, SelectionSet};
use async_graphql_parser::Positioned;
use serde_json::Value;

use crate::error::SchemaError;
use crate::fragment::FragmentMap;
use crate::selection::SelectionExecutor;
use crate::value::Variables;

/// The type-condition names an object answers to: its own type name plus
/// every interface and union it participates in.
pub type TypeNames = HashSet<String>;

/// Everything a resolver gets to see for one field.
#[derive(Debug)]
pub struct ResolverParams<'a> {
    /// The field's arguments after value coercion, keyed by argument name.
    pub arguments: Variables,
    /// The field's sub-selection, when the query wrote one. Fields that
    /// return a composite type cannot be shaped without it.
    pub selection: Option<&'a Positioned<SelectionSet>>,
    pub fragments: &'a FragmentMap<'a>,
    pub variables: &'a Variables,
}

/// An embedder-supplied function computing the value of one field.
/// Opaque to the engine; it may block on I/O.
pub type Resolver = Box<dyn Fn(ResolverParams<'_>) -> Result<Value, SchemaError> + Send + Sync>;

/// The resolvers of one object type, by field name.
pub type ResolverMap = HashMap<String, Resolver>;

/// Runtime representation of one GraphQL object type.
///
/// Constructed at schema-bind time and shared (possibly cyclically)
/// through `Arc`; execution never mutates it, so a schema may serve
/// concurrent requests.
pub struct Object {
    type_names: TypeNames,
    resolvers: ResolverMap,
}

impl Object {
    pub fn new(type_names: TypeNames, resolvers: ResolverMap) -> Self {
        Self {
            type_names,
            resolvers,
        }
    }

    pub(crate) fn type_names(&self) -> &TypeNames {
        &self.type_names
    }

    pub(crate) fn resolvers(&self) -> &ResolverMap {
        &self.resolvers
    }

    /// Evaluate a selection set against this object, producing the JSON
    /// object with one member per selected output key.
    pub fn resolve<'a>(
        &'a self,
        selection_set: &'a Positioned<SelectionSet>,
        fragments: &'a FragmentMap<'a>,
        variables: &'a Variables,
    ) -> Result<Value, SchemaError> {
        SelectionExecutor::new(self, fragments, variables).execute(selection_set)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("type_names", &self.type_names)
            .field("resolvers", &self.resolvers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The root objects of the schema, one per operation kind.
#[derive(Debug, Default)]
pub struct TypeMap {
    pub query: Option<Arc<Object>>,
    pub mutation: Option<Arc<Object>>,
    pub subscription: Option<Arc<Object>>,
}

impl TypeMap {
    pub fn get(&self, operation_type: OperationType) -> Option<&Arc<Object>> {
        match operation_type {
            OperationType::Query => self.query.as_ref(),
            OperationType::Mutation => self.mutation.as_ref(),
            OperationType::Subscription => self.subscription.as_ref(),
        }
    }
}
