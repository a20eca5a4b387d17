// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;

use async_graphql_parser::types::{FragmentDefinition, SelectionSet};
use async_graphql_parser::Positioned;

/// A named fragment, reduced to what execution needs: its type condition
/// and a borrowed selection set.
#[derive(Debug, Clone, Copy)]
pub struct Fragment<'a> {
    type_condition: &'a str,
    selection: &'a Positioned<SelectionSet>,
}

impl<'a> Fragment<'a> {
    pub fn new(definition: &'a FragmentDefinition) -> Self {
        Self {
            type_condition: definition.type_condition.node.on.node.as_str(),
            selection: &definition.selection_set,
        }
    }

    /// The type name this fragment applies to.
    pub fn type_condition(&self) -> &'a str {
        self.type_condition
    }

    pub fn selection(&self) -> &'a Positioned<SelectionSet> {
        self.selection
    }
}

/// Every fragment definition in the document, by name. Built once per
/// request and read-only thereafter; resolvers for composite fields reach
/// it through [`ResolverParams`](crate::ResolverParams).
pub type FragmentMap<'a> = HashMap<&'a str, Fragment<'a>>;
