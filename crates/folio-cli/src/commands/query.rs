use std::path::Path;

use anyhow::{Context, bail};
use folio_query::{QueryRequest, execute};
use serde_json::{Map, Value};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::QueryArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{limit_lists, output};

/// Handle `folio query`.
pub fn handle(args: &QueryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = build_request(args)?;
    let gateway = ctx.gateway()?;
    let response = execute(&gateway, &request);

    let mut value = serde_json::to_value(&response)?;
    if let Some(limit) = effective_limit(flags.limit, ctx.config.general.default_limit) {
        limit_lists(&mut value, limit);
    }
    output(&value, flags.format)?;

    if !response.is_ok() {
        bail!("query returned {} error(s)", response.errors.len());
    }
    Ok(())
}

fn build_request(args: &QueryArgs) -> anyhow::Result<QueryRequest> {
    let document = match args.document.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("failed to read query document {path}"))?,
        None => args.document.clone(),
    };

    let mut request = QueryRequest::new(document);
    request.variables = args.variables.as_deref().map(parse_variables).transpose()?;
    request.operation_name.clone_from(&args.operation_name);
    Ok(request)
}

fn parse_variables(text: &str) -> anyhow::Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(text).context("--variables is not valid JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("--variables must be a JSON object, got {other}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn args(document: &str, variables: Option<&str>) -> QueryArgs {
        QueryArgs {
            document: document.to_string(),
            variables: variables.map(str::to_string),
            operation_name: None,
        }
    }

    #[test]
    fn inline_document_and_variables() {
        let request = build_request(&args("{ skill(id: $id) { name } }", Some(r#"{"id": "sk-1"}"#))).unwrap();
        assert_eq!(request.query, "{ skill(id: $id) { name } }");
        assert_eq!(request.variables.map(Value::Object), Some(json!({"id": "sk-1"})));
    }

    #[test]
    fn document_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags.graphql");
        std::fs::write(&path, "{ tags { name } }").unwrap();
        let request = build_request(&args(&format!("@{}", path.display()), None)).unwrap();
        assert_eq!(request.query, "{ tags { name } }");
    }

    #[test]
    fn variables_must_be_an_object() {
        let err = build_request(&args("{ tags { id } }", Some("[1]"))).unwrap_err();
        assert!(err.to_string().contains("must be a JSON object"));
        assert!(build_request(&args("{ tags { id } }", Some("{"))).is_err());
    }
}
