//! End-to-end queries against the sample content.

use std::path::Path;

use folio_query::{Gateway, QueryRequest, execute};
use folio_store::ContentStore;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn gateway() -> Gateway {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../content/data");
    Gateway::new(ContentStore::open(dir).snapshot().unwrap())
}

fn run(gateway: &Gateway, query: &str) -> Value {
    serde_json::to_value(execute(gateway, &QueryRequest::new(query))).unwrap()
}

fn messages(response: &Value) -> Vec<String> {
    response["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["message"].as_str().unwrap().to_string())
        .collect()
}

#[rstest]
fn profile_with_nested_links(gateway: Gateway) {
    let response = run(&gateway, "{ profile { name socialLinks { platform } } }");
    assert_eq!(
        response,
        json!({"data": {"profile": {
            "name": "Alex Rivera",
            "socialLinks": [
                {"platform": "GitHub"},
                {"platform": "LinkedIn"},
                {"platform": "Dribbble"}
            ]
        }}})
    );
}

#[rstest]
fn projects_newest_first_with_filters(gateway: Gateway) {
    let all = run(&gateway, "{ projects { slug } }");
    let slugs: Vec<&str> = all["data"]["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, ["trailmix", "pantry-api", "ledger-cli", "tiny-forms"]);

    let featured = run(&gateway, "{ projects(featured: true) { slug } }");
    assert_eq!(
        featured["data"]["projects"],
        json!([{"slug": "trailmix"}, {"slug": "pantry-api"}])
    );

    let typed = run(&gateway, r#"{ projects(type: "api") { title } }"#);
    assert_eq!(typed["data"]["projects"], json!([{"title": "Pantry API"}]));
}

#[rstest]
fn unknown_enum_value_gives_empty_list(gateway: Gateway) {
    let response = run(&gateway, "{ caseStudies(type: GAME) { id } }");
    assert_eq!(response, json!({"data": {"caseStudies": []}}));
}

#[rstest]
fn missing_lookup_is_null_not_error(gateway: Gateway) {
    let response = run(
        &gateway,
        r#"{ project(slug: "nope") { id } caseStudy(slug: "booking-redesign") { title } }"#,
    );
    assert_eq!(
        response,
        json!({"data": {
            "project": null,
            "caseStudy": {"title": "Booking Flow Redesign"}
        }})
    );
}

#[rstest]
fn aliases_and_typename(gateway: Gateway) {
    let response = run(
        &gateway,
        "{ __typename web: skills(category: FRONTEND) { name } back: skills(category: BACKEND) { name __typename } }",
    );
    assert_eq!(
        response,
        json!({"data": {
            "__typename": "Query",
            "web": [{"name": "React"}, {"name": "TypeScript"}],
            "back": [
                {"name": "Rust", "__typename": "Skill"},
                {"name": "PostgreSQL", "__typename": "Skill"}
            ]
        }})
    );
}

#[rstest]
fn response_keys_follow_selection_order(gateway: Gateway) {
    let response = execute(
        &gateway,
        &QueryRequest::new(r#"{ skill(id: "sk-3") { proficiency name id } }"#),
    );
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"data":{"skill":{"proficiency":75,"name":"Rust","id":"sk-3"}}}"#
    );
}

#[rstest]
fn variables_and_defaults(gateway: Gateway) {
    let query = r#"query Pick($slug: String!, $kind: ProjectType = TOOL) {
        project(slug: $slug) { title }
        projects(type: $kind) { slug }
    }"#;
    let mut variables = serde_json::Map::new();
    variables.insert("slug".into(), json!("trailmix"));
    let response = execute(&gateway, &QueryRequest::new(query).with_variables(variables));
    assert_eq!(
        serde_json::to_value(response).unwrap(),
        json!({"data": {
            "project": {"title": "Trailmix"},
            "projects": [{"slug": "ledger-cli"}]
        }})
    );
}

#[rstest]
fn missing_required_variable(gateway: Gateway) {
    let response = run(&gateway, "query ($id: ID!) { skill(id: $id) { name } }");
    assert_eq!(response["data"], Value::Null);
    assert_eq!(
        messages(&response),
        ["Variable \"$id\" of required type \"ID!\" was not provided."]
    );
}

#[rstest]
fn undefined_variable(gateway: Gateway) {
    let response = run(&gateway, "{ skill(id: $id) { name } }");
    assert_eq!(messages(&response), ["Variable \"$id\" is not defined."]);
}

#[rstest]
fn unknown_fields_are_all_reported(gateway: Gateway) {
    let response = run(&gateway, "{ tags { name } projects { stars } posts { id } }");
    assert_eq!(response["data"], Value::Null);
    assert_eq!(
        messages(&response),
        [
            "Cannot query field \"stars\" on type \"Project\".",
            "Cannot query field \"posts\" on type \"Query\"."
        ]
    );
    assert_eq!(response["errors"][0]["path"], json!(["projects", "stars"]));
    assert_eq!(response["errors"][1]["path"], json!(["posts"]));
}

#[rstest]
#[case::empty_filtered_list("{ projects(type: GAME) { bogusField } }", "projects")]
#[case::null_lookup(r#"{ project(slug: "nonexistent") { bogusField } }"#, "project")]
#[case::matching_list("{ projects { bogusField } }", "projects")]
fn unknown_field_fails_whatever_the_data(
    gateway: Gateway,
    #[case] query: &str,
    #[case] key: &str,
) {
    let response = run(&gateway, query);
    assert_eq!(
        response,
        json!({"data": null, "errors": [{
            "message": "Cannot query field \"bogusField\" on type \"Project\".",
            "path": [key, "bogusField"]
        }]})
    );
}

#[rstest]
#[case::empty_list("{ projects(type: GAME) { metrics } }")]
#[case::null_lookup(r#"{ caseStudy(slug: "nonexistent") { metrics } }"#)]
fn object_field_selection_is_checked_without_data(gateway: Gateway, #[case] query: &str) {
    let response = run(&gateway, query);
    assert_eq!(response["data"], Value::Null);
    assert_eq!(
        messages(&response),
        ["Field \"metrics\" of type \"[Metric!]\" must have a selection of subfields."]
    );
}

#[rstest]
fn empty_nested_list_still_checks_subfields(gateway: Gateway) {
    let ok = run(&gateway, "{ projects(type: TOOL) { slug metrics { label } } }");
    assert_eq!(
        ok,
        json!({"data": {"projects": [{"slug": "ledger-cli", "metrics": null}]}})
    );

    let bad = run(&gateway, "{ projects(type: TOOL) { metrics { stars } } }");
    assert_eq!(bad["data"], Value::Null);
    assert_eq!(bad["errors"][0]["path"], json!(["projects", "metrics", "stars"]));
    assert_eq!(
        messages(&bad),
        ["Cannot query field \"stars\" on type \"Metric\"."]
    );
}

#[rstest]
fn timeline_runs_oldest_first(gateway: Gateway) {
    let response = run(&gateway, "{ timeline(type: WORK) { id startDate } }");
    assert_eq!(
        response["data"]["timeline"],
        json!([
            {"id": "exp-2", "startDate": "2019-06"},
            {"id": "exp-1", "startDate": "2022-03"}
        ])
    );
}

#[rstest]
#[case::required_argument("{ project { id } }", "argument \"slug\" is required")]
#[case::unknown_argument("{ tags(limit: 2) { id } }", "Unknown argument \"limit\"")]
#[case::bad_argument_kind("{ projects(featured: \"yes\") { id } }", "expected a boolean")]
#[case::missing_selection("{ projects }", "must have a selection of subfields")]
#[case::scalar_selection("{ profile { name { first } } }", "must not have a selection")]
#[case::syntax("{ projects { id }", "Syntax Error")]
#[case::mutation("mutation { projects { id } }", "Only query operations are supported.")]
fn rejected_queries(gateway: Gateway, #[case] query: &str, #[case] expected: &str) {
    let response = run(&gateway, query);
    assert_eq!(response["data"], Value::Null);
    let messages = messages(&response);
    assert!(
        messages.iter().any(|m| m.contains(expected)),
        "{messages:?} should mention {expected:?}"
    );
}

#[rstest]
fn named_operation_selection(gateway: Gateway) {
    let query = "query A { tags { id } } query B { profile { name } }";
    let mut request = QueryRequest::new(query);
    request.operation_name = Some("B".into());
    let response = serde_json::to_value(execute(&gateway, &request)).unwrap();
    assert_eq!(response, json!({"data": {"profile": {"name": "Alex Rivera"}}}));

    let ambiguous = run(&gateway, query);
    assert_eq!(
        messages(&ambiguous),
        ["Must provide operation name if query contains multiple operations."]
    );
}

#[rstest]
fn search_matches_across_text_fields(gateway: Gateway) {
    let response = run(&gateway, r#"{ skills(search: "SQL") { id } }"#);
    assert_eq!(response["data"]["skills"], json!([{"id": "sk-4"}]));
}

#[rstest]
fn repeated_queries_are_identical(gateway: Gateway) {
    let query = "{ tags { id name slug count } caseStudies(featured: true) { slug metrics { value } } }";
    assert_eq!(run(&gateway, query), run(&gateway, query));
}
