// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_graphql_parser::parse_query;
use graphql_runtime::{
    require, Id, Object, Request, ResolveValue, Resolver, ResolverMap, ResolverParams, TypeMap,
    Variables,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn object(type_names: &[&str], resolvers: Vec<(&str, Resolver)>) -> Arc<Object> {
    Arc::new(Object::new(
        type_names.iter().map(|name| name.to_string()).collect(),
        resolvers
            .into_iter()
            .map(|(name, resolver)| (name.to_string(), resolver))
            .collect::<ResolverMap>(),
    ))
}

fn string_field(value: &'static str) -> Resolver {
    Box::new(move |params: ResolverParams<'_>| value.resolve_value(&params))
}

/// A small Star-Wars-flavored schema: a droid hero, a human reachable by
/// id, and a list of characters.
fn star_wars() -> Request {
    let c3po = object(
        &["Droid", "Character"],
        vec![
            ("name", string_field("C-3PO")),
            ("primaryFunction", string_field("Protocol")),
        ],
    );

    let r2 = {
        let friends = vec![c3po.clone()];
        object(
            &["Droid", "Character"],
            vec![
                ("name", string_field("R2-D2")),
                ("primaryFunction", string_field("Astromech")),
                (
                    "appearsIn",
                    Box::new(|params: ResolverParams<'_>| {
                        vec!["NEWHOPE".to_owned(), "EMPIRE".to_owned(), "JEDI".to_owned()]
                            .resolve_value(&params)
                    }),
                ),
                (
                    "friends",
                    Box::new(move |params: ResolverParams<'_>| friends.resolve_value(&params)),
                ),
            ],
        )
    };

    let luke = {
        let friends = vec![r2.clone(), c3po.clone()];
        object(
            &["Human", "Character"],
            vec![
                ("name", string_field("Luke Skywalker")),
                ("homePlanet", string_field("Tatooine")),
                (
                    "friends",
                    Box::new(move |params: ResolverParams<'_>| friends.resolve_value(&params)),
                ),
            ],
        )
    };

    let characters = vec![luke.clone(), r2.clone(), c3po.clone()];

    let query = object(
        &["Query"],
        vec![
            ("hero", {
                let r2 = r2.clone();
                Box::new(move |params: ResolverParams<'_>| r2.resolve_value(&params))
            }),
            ("human", {
                let luke = luke.clone();
                Box::new(move |params: ResolverParams<'_>| {
                    let _id: Id = require("id", &params.arguments)?;
                    luke.resolve_value(&params)
                })
            }),
            (
                "characters",
                Box::new(move |params: ResolverParams<'_>| characters.resolve_value(&params)),
            ),
        ],
    );

    Request::new(TypeMap {
        query: Some(query),
        ..TypeMap::default()
    })
}

fn resolve(engine: &Request, query: &str, variables: Value) -> Value {
    let document = parse_query(query).unwrap();
    let variables = variables.as_object().cloned().unwrap_or_default();

    engine.resolve(&document, None, &variables)
}

fn output_keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect()
}

#[test]
fn hero_name() {
    let result = resolve(&star_wars(), "{ hero { name } }", json!({}));

    assert_eq!(result, json!({ "data": { "hero": { "name": "R2-D2" } } }));
}

#[test]
fn human_by_variable_id() {
    let result = resolve(
        &star_wars(),
        r#"query($id: ID!) { human(id: $id) { name } }"#,
        json!({ "id": "1000" }),
    );

    assert_eq!(
        result,
        json!({ "data": { "human": { "name": "Luke Skywalker" } } })
    );
}

#[test]
fn missing_required_argument_fails_the_request() {
    let result = resolve(&star_wars(), "{ human { name } }", json!({}));

    assert_eq!(
        result,
        json!({
            "data": null,
            "errors": [{ "message": "Invalid argument: id" }],
        })
    );
}

#[test]
fn skip_directive_omits_the_field() {
    let result = resolve(
        &star_wars(),
        "{ hero { name @skip(if: true) appearsIn } }",
        json!({}),
    );

    assert_eq!(
        result,
        json!({ "data": { "hero": { "appearsIn": ["NEWHOPE", "EMPIRE", "JEDI"] } } })
    );
}

#[test]
fn skip_and_include_are_idempotent_when_inactive() {
    let result = resolve(
        &star_wars(),
        "{ hero { name @skip(if: false) @include(if: true) } }",
        json!({}),
    );

    assert_eq!(result, json!({ "data": { "hero": { "name": "R2-D2" } } }));
}

#[test]
fn skip_wins_over_include() {
    let result = resolve(
        &star_wars(),
        "{ hero { name @skip(if: true) @include(if: true) } }",
        json!({}),
    );

    assert_eq!(result, json!({ "data": { "hero": {} } }));
}

#[test]
fn include_condition_through_a_variable() {
    let query = r#"query($withName: Boolean!) { hero { appearsIn name @include(if: $withName) } }"#;

    let included = resolve(&star_wars(), query, json!({ "withName": true }));
    assert_eq!(
        output_keys(&included["data"]["hero"]),
        vec!["appearsIn", "name"]
    );

    let omitted = resolve(&star_wars(), query, json!({ "withName": false }));
    assert_eq!(output_keys(&omitted["data"]["hero"]), vec!["appearsIn"]);
}

#[test]
fn alias_renames_the_output_key_only() {
    let result = resolve(&star_wars(), "{ hero { robot: name } }", json!({}));

    assert_eq!(result, json!({ "data": { "hero": { "robot": "R2-D2" } } }));
}

#[test]
fn selection_order_is_source_order() {
    let result = resolve(
        &star_wars(),
        "{ hero { primaryFunction name appearsIn } }",
        json!({}),
    );

    assert_eq!(
        output_keys(&result["data"]["hero"]),
        vec!["primaryFunction", "name", "appearsIn"]
    );
}

#[test]
fn fragment_merge_keeps_first_write_order() {
    let result = resolve(
        &star_wars(),
        r#"
        { hero { ...basics name } }

        fragment basics on Droid {
            name
            primaryFunction
        }
        "#,
        json!({}),
    );

    assert_eq!(
        output_keys(&result["data"]["hero"]),
        vec!["name", "primaryFunction"]
    );
    assert_eq!(result["data"]["hero"]["name"], json!("R2-D2"));
}

#[test]
fn fragment_with_matching_type_condition_applies() {
    let result = resolve(
        &star_wars(),
        r#"
        { hero { ...droidFields } }

        fragment droidFields on Droid {
            primaryFunction
        }
        "#,
        json!({}),
    );

    assert_eq!(
        result,
        json!({ "data": { "hero": { "primaryFunction": "Astromech" } } })
    );
}

#[test]
fn fragment_with_unmatched_type_condition_is_a_no_op() {
    let result = resolve(
        &star_wars(),
        r#"
        { human(id: "1000") { ...droidFields } }

        fragment droidFields on Droid {
            primaryFunction
        }
        "#,
        json!({}),
    );

    assert_eq!(result, json!({ "data": { "human": {} } }));
}

#[test]
fn inline_fragment_honors_its_type_condition() {
    let query = r#"
        {
            hero { ... on Droid { primaryFunction } }
            human(id: "1000") { ... on Droid { primaryFunction } }
        }
    "#;

    let result = resolve(&star_wars(), query, json!({}));

    assert_eq!(
        result,
        json!({
            "data": {
                "hero": { "primaryFunction": "Astromech" },
                "human": {},
            }
        })
    );
}

#[test]
fn inline_fragment_without_type_condition_applies_unconditionally() {
    let result = resolve(
        &star_wars(),
        "{ hero { ... { name } } }",
        json!({}),
    );

    assert_eq!(result, json!({ "data": { "hero": { "name": "R2-D2" } } }));
}

#[test]
fn skipped_fragment_spread_contributes_nothing() {
    let result = resolve(
        &star_wars(),
        r#"
        { hero { ...basics @skip(if: true) } }

        fragment basics on Droid { name }
        "#,
        json!({}),
    );

    assert_eq!(result, json!({ "data": { "hero": {} } }));
}

#[test]
fn unknown_fragment_spread_is_ignored() {
    let result = resolve(&star_wars(), "{ hero { ...nothing name } }", json!({}));

    assert_eq!(result, json!({ "data": { "hero": { "name": "R2-D2" } } }));
}

#[test]
fn unknown_field_resolves_to_null() {
    let result = resolve(&star_wars(), "{ hero { name shoeSize } }", json!({}));

    assert_eq!(
        result,
        json!({ "data": { "hero": { "name": "R2-D2", "shoeSize": null } } })
    );
}

#[test]
fn list_results_preserve_input_order() {
    let result = resolve(&star_wars(), "{ characters { name } }", json!({}));

    assert_eq!(
        result,
        json!({
            "data": {
                "characters": [
                    { "name": "Luke Skywalker" },
                    { "name": "R2-D2" },
                    { "name": "C-3PO" },
                ]
            }
        })
    );
}

#[test]
fn nested_selection_through_a_list_field() {
    let result = resolve(
        &star_wars(),
        r#"{ human(id: "1000") { friends { name } } }"#,
        json!({}),
    );

    assert_eq!(
        result,
        json!({
            "data": {
                "human": {
                    "friends": [{ "name": "R2-D2" }, { "name": "C-3PO" }]
                }
            }
        })
    );
}

#[test]
fn composite_field_without_a_selection_fails() {
    let result = resolve(&star_wars(), "{ hero }", json!({}));

    assert_eq!(
        result,
        json!({
            "data": null,
            "errors": [{ "message": "Missing selection set for an object-valued field" }],
        })
    );
}

#[test]
fn modifier_chain_round_trips_through_decode_and_shape() {
    let original = json!([1, null, 3]);

    let mut arguments = Variables::new();
    arguments.insert("value".to_owned(), original.clone());
    let decoded: Option<Vec<Option<i64>>> = require("value", &arguments).unwrap();

    let fragments = HashMap::new();
    let variables = Variables::new();
    let params = ResolverParams {
        arguments: Variables::new(),
        selection: None,
        fragments: &fragments,
        variables: &variables,
    };

    assert_eq!(decoded.resolve_value(&params).unwrap(), original);
}

#[test]
fn mutations_execute_in_source_order() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let step = |name: &'static str, log: &Arc<Mutex<Vec<&'static str>>>| -> Resolver {
        let log = log.clone();
        Box::new(move |params: ResolverParams<'_>| {
            log.lock().unwrap().push(name);
            name.resolve_value(&params)
        })
    };

    let mutation = object(
        &["Mutation"],
        vec![
            ("reload", step("reload", &log)),
            ("restart", step("restart", &log)),
            ("shutdown", step("shutdown", &log)),
        ],
    );

    let engine = Request::new(TypeMap {
        mutation: Some(mutation),
        ..TypeMap::default()
    });

    let result = resolve(&engine, "mutation { restart shutdown reload }", json!({}));

    assert_eq!(*log.lock().unwrap(), vec!["restart", "shutdown", "reload"]);
    assert_eq!(
        output_keys(&result["data"]),
        vec!["restart", "shutdown", "reload"]
    );
}

#[test]
fn subscription_selection_resolves_when_a_root_is_bound() {
    let subscription = object(&["Subscription"], vec![("ticks", string_field("1s"))]);

    let engine = Request::new(TypeMap {
        subscription: Some(subscription),
        ..TypeMap::default()
    });

    let result = resolve(&engine, "subscription { ticks }", json!({}));

    assert_eq!(result, json!({ "data": { "ticks": "1s" } }));
}
