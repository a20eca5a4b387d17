// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_parser::types::{Directive, Field, Selection, SelectionSet};
use async_graphql_parser::Positioned;
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::fragment::FragmentMap;
use crate::schema::{Object, ResolverParams};
use crate::value::{self, Variables};

/// Walks one selection set against one object type: evaluates `@skip` and
/// `@include`, dispatches fields to their resolvers, and expands fragment
/// spreads and inline fragments subject to their type conditions.
#[derive(Debug)]
pub(crate) struct SelectionExecutor<'a> {
    object: &'a Object,
    fragments: &'a FragmentMap<'a>,
    variables: &'a Variables,
}

impl<'a> SelectionExecutor<'a> {
    pub(crate) fn new(
        object: &'a Object,
        fragments: &'a FragmentMap<'a>,
        variables: &'a Variables,
    ) -> Self {
        Self {
            object,
            fragments,
            variables,
        }
    }

    pub(crate) fn execute(
        &self,
        selection_set: &'a Positioned<SelectionSet>,
    ) -> Result<Value, SchemaError> {
        let mut output = Map::new();
        self.execute_selection_set(selection_set, &mut output)?;
        Ok(Value::Object(output))
    }

    // Selections merge into a single output object: a key keeps the
    // position of its first write, a later duplicate replaces the value.
    fn execute_selection_set(
        &self,
        selection_set: &'a Positioned<SelectionSet>,
        output: &mut Map<String, Value>,
    ) -> Result<(), SchemaError> {
        for selection in &selection_set.node.items {
            match &selection.node {
                Selection::Field(field) => {
                    if self.should_skip(&field.node.directives) {
                        continue;
                    }

                    let value = self.execute_field(&field.node)?;
                    output.insert(output_name(&field.node), value);
                }
                Selection::FragmentSpread(spread) => {
                    if self.should_skip(&spread.node.directives) {
                        continue;
                    }

                    // An unknown fragment name is a no-op, like an
                    // unmatched type condition.
                    let fragment = self
                        .fragments
                        .get(spread.node.fragment_name.node.as_str());

                    if let Some(fragment) = fragment {
                        if self.object.type_names().contains(fragment.type_condition()) {
                            self.execute_selection_set(fragment.selection(), output)?;
                        }
                    }
                }
                Selection::InlineFragment(fragment) => {
                    if self.should_skip(&fragment.node.directives) {
                        continue;
                    }

                    // No type condition means the fragment applies
                    // unconditionally.
                    let applies = fragment
                        .node
                        .type_condition
                        .as_ref()
                        .map(|condition| {
                            self.object
                                .type_names()
                                .contains(condition.node.on.node.as_str())
                        })
                        .unwrap_or(true);

                    if applies {
                        self.execute_selection_set(&fragment.node.selection_set, output)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn execute_field(&self, field: &'a Field) -> Result<Value, SchemaError> {
        let resolver = match self.object.resolvers().get(field.name.node.as_str()) {
            Some(resolver) => resolver,
            // Generated resolver maps are expected to be exhaustive, so an
            // unknown field resolves to null rather than failing the request.
            None => return Ok(Value::Null),
        };

        let arguments = field
            .arguments
            .iter()
            .map(|(name, value)| {
                (
                    name.node.to_string(),
                    value::resolve_value(&value.node, self.variables),
                )
            })
            .collect();

        let selection = if field.selection_set.node.items.is_empty() {
            None
        } else {
            Some(&field.selection_set)
        };

        resolver(ResolverParams {
            arguments,
            selection,
            fragments: self.fragments,
            variables: self.variables,
        })
    }

    /// A selection is dropped when `@skip(if:)` evaluates to true or
    /// `@include(if:)` evaluates to false; a true `@skip` wins over a
    /// true `@include`.
    fn should_skip(&self, directives: &[Positioned<Directive>]) -> bool {
        directives
            .iter()
            .any(|directive| match directive.node.name.node.as_str() {
                "skip" => self.condition(&directive.node) == Some(true),
                "include" => self.condition(&directive.node) == Some(false),
                _ => false,
            })
    }

    /// The `if` argument of a directive, evaluated through value coercion
    /// so variable references work. Missing or non-boolean conditions
    /// yield `None` and never trigger a skip on their own.
    fn condition(&self, directive: &Directive) -> Option<bool> {
        directive
            .arguments
            .iter()
            .find(|(name, _)| name.node.as_str() == "if")
            .map(|(_, value)| value::resolve_value(&value.node, self.variables))
            .and_then(|value| value.as_bool())
    }
}

fn output_name(field: &Field) -> String {
    field
        .alias
        .as_ref()
        .unwrap_or(&field.name)
        .node
        .to_string()
}
