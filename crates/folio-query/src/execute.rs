//! Run a query document against the gateway and build the response envelope.
//!
//! Success is `{"data": {...}}`, with `null` under any lookup that found
//! nothing. Failure is `{"data": null, "errors": [...]}`: every root field is
//! resolved, and if any of them fails the whole response carries the errors
//! instead of partial data.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

use crate::document::{Document, Field, Operation, Value};
use crate::error::QueryError;
use crate::filter::{Criteria, TypeFilter};
use crate::gateway::Gateway;

// ---------------------------------------------------------------------------
// Request / response
// ---------------------------------------------------------------------------

/// A query request as clients send it, over GET parameters or a POST body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub query: String,
    #[serde(default)]
    pub variables: Option<Map<String, Json>>,
    #[serde(default)]
    pub operation_name: Option<String>,
}

impl QueryRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_variables(mut self, variables: Map<String, Json>) -> Self {
        self.variables = Some(variables);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResponse {
    pub data: Option<Json>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseError {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

impl From<&QueryError> for ResponseError {
    fn from(error: &QueryError) -> Self {
        Self {
            message: error.to_string(),
            path: error.path().map(<[String]>::to_vec),
        }
    }
}

impl QueryResponse {
    /// A failed response: no data, one entry per error.
    #[must_use]
    pub fn from_errors<'a>(errors: impl IntoIterator<Item = &'a QueryError>) -> Self {
        Self {
            data: None,
            errors: errors.into_iter().map(ResponseError::from).collect(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Parse and run `request` against `gateway`.
#[must_use]
pub fn execute(gateway: &Gateway, request: &QueryRequest) -> QueryResponse {
    match run(gateway, request) {
        Ok(data) => QueryResponse {
            data: Some(Json::Object(data)),
            errors: Vec::new(),
        },
        Err(errors) => {
            tracing::debug!(errors = errors.len(), "query failed");
            QueryResponse::from_errors(&errors)
        }
    }
}

fn run(gateway: &Gateway, request: &QueryRequest) -> Result<Map<String, Json>, Vec<QueryError>> {
    let document = Document::parse(&request.query).map_err(|e| vec![e])?;
    let operation = document
        .operation(request.operation_name.as_deref())
        .map_err(|e| vec![e])?;
    let ctx = Context::new(gateway, operation, request.variables.as_ref()).map_err(|e| vec![e])?;

    tracing::debug!(
        operation = operation.name.as_deref().unwrap_or("<anonymous>"),
        fields = operation.selection.len(),
        "executing query"
    );

    let mut data = Map::new();
    let mut errors = Vec::new();
    for field in &operation.selection {
        match ctx.resolve_root(field) {
            Ok(value) => {
                data.insert(field.response_key().to_string(), value);
            }
            Err(error) => errors.push(error),
        }
    }
    if errors.is_empty() {
        Ok(data)
    } else {
        Err(errors)
    }
}

/// Root fields of the `Query` type.
struct RootField {
    name: &'static str,
    /// Object type of the result (or of its elements).
    object: &'static str,
    /// Declared result type, for messages.
    ty: &'static str,
    arguments: &'static [&'static str],
}

const ROOT_FIELDS: &[RootField] = &[
    RootField { name: "profile", object: "Profile", ty: "Profile!", arguments: &[] },
    RootField { name: "experiences", object: "Experience", ty: "[Experience!]!", arguments: &["type", "search"] },
    RootField { name: "experience", object: "Experience", ty: "Experience", arguments: &["id"] },
    RootField { name: "timeline", object: "Experience", ty: "[Experience!]!", arguments: &["type", "search"] },
    RootField { name: "skills", object: "Skill", ty: "[Skill!]!", arguments: &["category", "search"] },
    RootField { name: "skill", object: "Skill", ty: "Skill", arguments: &["id"] },
    RootField { name: "projects", object: "Project", ty: "[Project!]!", arguments: &["type", "featured", "search"] },
    RootField { name: "project", object: "Project", ty: "Project", arguments: &["slug"] },
    RootField { name: "caseStudies", object: "CaseStudy", ty: "[CaseStudy!]!", arguments: &["type", "featured", "search"] },
    RootField { name: "caseStudy", object: "CaseStudy", ty: "CaseStudy", arguments: &["slug"] },
    RootField { name: "designs", object: "Design", ty: "[Design!]!", arguments: &["featured", "search"] },
    RootField { name: "tags", object: "Tag", ty: "[Tag!]!", arguments: &[] },
];

/// Fields each object type exposes, in wire (camelCase) spelling.
fn object_fields(object: &str) -> &'static [&'static str] {
    match object {
        "Profile" => &[
            "id", "name", "title", "bio", "avatar", "location", "email", "phone", "website",
            "socialLinks",
        ],
        "SocialLink" => &["platform", "url", "icon"],
        "Experience" => &[
            "id", "company", "role", "type", "startDate", "endDate", "current", "description",
            "responsibilities", "achievements", "technologies", "logo", "location",
        ],
        "Skill" => &["id", "name", "category", "proficiency", "yearsOfExperience", "icon", "projectCount"],
        "Project" => &[
            "id", "slug", "title", "description", "longDescription", "type", "image", "images",
            "demoUrl", "githubUrl", "technologies", "features", "challenges", "solutions",
            "metrics", "tags", "featured", "publishedAt",
        ],
        "CaseStudy" => &[
            "id", "slug", "title", "client", "duration", "role", "type", "heroImage", "images",
            "problemStatement", "solutions", "tools", "results", "metrics", "content", "tags",
            "featured", "publishedAt", "appStoreUrl", "googlePlayUrl", "liveSiteUrl",
        ],
        "Design" => &[
            "id", "title", "description", "image", "category", "featured", "appStoreUrl",
            "googlePlayUrl", "liveSiteUrl",
        ],
        "Metric" => &["label", "value", "description"],
        "Tag" => &["id", "name", "slug", "count"],
        _ => &[],
    }
}

/// Object type and declared type of a nested object field, or `None` for
/// scalars and scalar lists.
fn nested_object(parent: &str, field: &str) -> Option<(&'static str, &'static str)> {
    match (parent, field) {
        ("Profile", "socialLinks") => Some(("SocialLink", "[SocialLink!]!")),
        ("Project" | "CaseStudy", "metrics") => Some(("Metric", "[Metric!]")),
        _ => None,
    }
}

struct Context<'a> {
    gateway: &'a Gateway,
    /// Coerced variable values; undefined nullable variables are absent.
    variables: Map<String, Json>,
    defined: HashSet<&'a str>,
}

impl<'a> Context<'a> {
    fn new(
        gateway: &'a Gateway,
        operation: &'a Operation,
        provided: Option<&Map<String, Json>>,
    ) -> Result<Self, QueryError> {
        let mut variables = Map::new();
        for def in &operation.variables {
            let given = provided.and_then(|vars| vars.get(&def.name));
            let value = match (given, &def.default) {
                (Some(Json::Null), _) if def.ty.is_non_null() => {
                    return Err(QueryError::Variable {
                        name: def.name.clone(),
                        message: format!("of non-null type \"{}\" must not be null.", def.ty),
                    });
                }
                (Some(value), _) => value.clone(),
                (None, Some(default)) => literal(default)?,
                (None, None) if def.ty.is_non_null() => {
                    return Err(QueryError::Variable {
                        name: def.name.clone(),
                        message: format!("of required type \"{}\" was not provided.", def.ty),
                    });
                }
                (None, None) => continue,
            };
            variables.insert(def.name.clone(), value);
        }

        Ok(Self {
            gateway,
            variables,
            defined: operation.variables.iter().map(|d| d.name.as_str()).collect(),
        })
    }

    fn resolve_root(&self, field: &Field) -> Result<Json, QueryError> {
        let path = vec![field.response_key().to_string()];
        if field.name == "__typename" {
            reject_arguments("Query", field, &path)?;
            reject_selection(field, &path)?;
            return Ok(Json::String("Query".into()));
        }

        let root = ROOT_FIELDS
            .iter()
            .find(|root| root.name == field.name)
            .ok_or_else(|| QueryError::UnknownField {
                parent: "Query",
                field: field.name.clone(),
                path: path.clone(),
            })?;
        if let Some(arg) = field
            .arguments
            .iter()
            .find(|arg| !root.arguments.contains(&arg.name.as_str()))
        {
            return Err(QueryError::Argument {
                message: format!(
                    "Unknown argument \"{}\" on field \"Query.{}\".",
                    arg.name, field.name
                ),
                path,
            });
        }
        if field.selection.is_empty() {
            return Err(QueryError::Selection {
                message: format!(
                    "Field \"{}\" of type \"{}\" must have a selection of subfields.",
                    field.name, root.ty
                ),
                path,
            });
        }

        validate(root.object, &field.selection, &path)?;

        let args = Args {
            ctx: self,
            field,
            path: &path,
        };
        let gw = self.gateway;
        let value = match root.name {
            "profile" => serde_json::to_value(gw.profile())?,
            "experiences" => serde_json::to_value(gw.experiences(&args.typed_criteria("type")?))?,
            "experience" => serde_json::to_value(gw.experience(&args.required_id("id")?))?,
            "timeline" => serde_json::to_value(gw.timeline(&args.typed_criteria("type")?))?,
            "skills" => serde_json::to_value(gw.skills(&args.typed_criteria("category")?))?,
            "skill" => serde_json::to_value(gw.skill(&args.required_id("id")?))?,
            "projects" => serde_json::to_value(gw.projects(&args.typed_criteria("type")?))?,
            "project" => serde_json::to_value(gw.project(&args.required_id("slug")?))?,
            "caseStudies" => serde_json::to_value(gw.case_studies(&args.typed_criteria("type")?))?,
            "caseStudy" => serde_json::to_value(gw.case_study(&args.required_id("slug")?))?,
            "designs" => serde_json::to_value(gw.designs(&args.criteria()?))?,
            _ => serde_json::to_value(gw.tags())?,
        };
        Ok(shape(&value, root.object, &field.selection))
    }

    /// Substitute variables into an argument value. `None` when the argument
    /// is absent, `null`, or bound to a nullable variable with no value.
    fn argument(&self, value: &Value) -> Result<Option<Json>, QueryError> {
        match value {
            Value::Variable(name) => {
                if !self.defined.contains(name.as_str()) {
                    return Err(QueryError::Variable {
                        name: name.clone(),
                        message: "is not defined.".into(),
                    });
                }
                Ok(self.variables.get(name).filter(|v| !v.is_null()).cloned())
            }
            Value::Null => Ok(None),
            other => literal(other).map(Some),
        }
    }
}

/// Convert a variable-free literal to JSON.
fn literal(value: &Value) -> Result<Json, QueryError> {
    Ok(match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => Json::from(*i),
        Value::String(s) | Value::Enum(s) => Json::String(s.clone()),
        Value::List(items) => Json::Array(items.iter().map(literal).collect::<Result<_, _>>()?),
        Value::Variable(name) => {
            return Err(QueryError::Variable {
                name: name.clone(),
                message: "cannot be used in a default value.".into(),
            });
        }
    })
}

/// Typed access to one root field's arguments.
struct Args<'a> {
    ctx: &'a Context<'a>,
    field: &'a Field,
    path: &'a [String],
}

impl Args<'_> {
    fn get(&self, name: &str) -> Result<Option<Json>, QueryError> {
        match self.field.argument(name) {
            Some(value) => self.ctx.argument(value),
            None => Ok(None),
        }
    }

    fn invalid(&self, name: &str, expected: &str, got: &Json) -> QueryError {
        QueryError::Argument {
            message: format!(
                "Argument \"{name}\" on field \"Query.{}\" expected {expected}, got {got}.",
                self.field.name
            ),
            path: self.path.to_vec(),
        }
    }

    fn string(&self, name: &str) -> Result<Option<String>, QueryError> {
        match self.get(name)? {
            None => Ok(None),
            Some(Json::String(s)) => Ok(Some(s)),
            Some(other) => Err(self.invalid(name, "a string", &other)),
        }
    }

    fn boolean(&self, name: &str) -> Result<Option<bool>, QueryError> {
        match self.get(name)? {
            None => Ok(None),
            Some(Json::Bool(b)) => Ok(Some(b)),
            Some(other) => Err(self.invalid(name, "a boolean", &other)),
        }
    }

    /// An `ID!` or `String!` argument. Integers are accepted as IDs.
    fn required_id(&self, name: &str) -> Result<String, QueryError> {
        match self.get(name)? {
            Some(Json::String(s)) => Ok(s),
            Some(Json::Number(n)) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
            Some(other) => Err(self.invalid(name, "an ID", &other)),
            None => Err(QueryError::Argument {
                message: format!(
                    "Field \"Query.{}\" argument \"{name}\" is required, but it was not provided.",
                    self.field.name
                ),
                path: self.path.to_vec(),
            }),
        }
    }

    /// Featured and search arguments.
    fn criteria<K: Copy + PartialEq>(&self) -> Result<Criteria<K>, QueryError> {
        let mut criteria = Criteria::new().with_featured(self.boolean("featured")?);
        if let Some(search) = self.string("search")? {
            criteria = criteria.with_keyword(search);
        }
        Ok(criteria)
    }

    /// Featured and search arguments plus an enum type argument.
    fn typed_criteria<K: Copy + PartialEq + FromStr>(
        &self,
        type_arg: &str,
    ) -> Result<Criteria<K>, QueryError> {
        let kind = self.string(type_arg)?;
        Ok(self
            .criteria()?
            .with_type(TypeFilter::parse(kind.as_deref())))
    }
}

// ---------------------------------------------------------------------------
// Selection validation and projection
// ---------------------------------------------------------------------------

/// Check `selection` against the fields `object` declares, recursively.
/// Independent of the data, so empty lists and `null` lookups fail alike.
fn validate(object: &'static str, selection: &[Field], path: &[String]) -> Result<(), QueryError> {
    for sel in selection {
        let mut sel_path = path.to_vec();
        sel_path.push(sel.response_key().to_string());
        reject_arguments(object, sel, &sel_path)?;

        if sel.name == "__typename" {
            reject_selection(sel, &sel_path)?;
            continue;
        }
        if !object_fields(object).contains(&sel.name.as_str()) {
            return Err(QueryError::UnknownField {
                parent: object,
                field: sel.name.clone(),
                path: sel_path,
            });
        }
        match nested_object(object, &sel.name) {
            Some((_, ty)) if sel.selection.is_empty() => {
                return Err(QueryError::Selection {
                    message: format!(
                        "Field \"{}\" of type \"{ty}\" must have a selection of subfields.",
                        sel.name
                    ),
                    path: sel_path,
                });
            }
            Some((inner, _)) => validate(inner, &sel.selection, &sel_path)?,
            None => reject_selection(sel, &sel_path)?,
        }
    }
    Ok(())
}

/// Keep only the selected fields of `value`, recursively, in selection order.
/// The selection must already have passed [`validate`].
fn shape(value: &Json, object: &'static str, selection: &[Field]) -> Json {
    match value {
        Json::Array(items) => Json::Array(
            items
                .iter()
                .map(|item| shape(item, object, selection))
                .collect(),
        ),
        Json::Object(fields) => {
            let mut out = Map::new();
            for sel in selection {
                let shaped = if sel.name == "__typename" {
                    Json::String(object.into())
                } else {
                    match (fields.get(&sel.name), nested_object(object, &sel.name)) {
                        (Some(raw), Some((inner, _))) => shape(raw, inner, &sel.selection),
                        (Some(raw), None) => raw.clone(),
                        (None, _) => Json::Null,
                    }
                };
                out.insert(sel.response_key().to_string(), shaped);
            }
            Json::Object(out)
        }
        other => other.clone(),
    }
}

fn reject_arguments(object: &str, field: &Field, path: &[String]) -> Result<(), QueryError> {
    match field.arguments.first() {
        Some(arg) => Err(QueryError::Argument {
            message: format!(
                "Unknown argument \"{}\" on field \"{object}.{}\".",
                arg.name, field.name
            ),
            path: path.to_vec(),
        }),
        None => Ok(()),
    }
}

fn reject_selection(field: &Field, path: &[String]) -> Result<(), QueryError> {
    if field.selection.is_empty() {
        Ok(())
    } else {
        Err(QueryError::Selection {
            message: format!(
                "Field \"{}\" must not have a selection since it has no subfields.",
                field.name
            ),
            path: path.to_vec(),
        })
    }
}
