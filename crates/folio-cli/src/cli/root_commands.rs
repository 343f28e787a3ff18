use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load content and serve the query endpoint over HTTP.
    Serve(ServeArgs),
    /// Run a query document against local content.
    Query(QueryArgs),
    /// Load and validate every collection, then report record counts.
    Check,
    /// Print generated JSON Schemas.
    Schema(SchemaArgs),
    /// Print skill and case-study summary statistics.
    Stats,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host).
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind (overrides server.port; 0 picks a free port).
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct QueryArgs {
    /// Query document, or `@path` to read it from a file.
    pub document: String,
    /// Variables as a JSON object.
    #[arg(long)]
    pub variables: Option<String>,
    /// Operation to run when the document has several.
    #[arg(long)]
    pub operation_name: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. `projects`, `case_study`). Lists names when omitted.
    pub name: Option<String>,
    /// Write every schema as `<name>.schema.json` into this directory.
    #[arg(long, conflicts_with = "name")]
    pub out_dir: Option<PathBuf>,
}
