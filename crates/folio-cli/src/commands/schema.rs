use std::path::Path;

use anyhow::{Context, anyhow};
use folio_query::lookup::paginate;
use folio_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `folio schema`. Needs no content or config.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    if let Some(dir) = &args.out_dir {
        let written = write_all(&registry, dir)?;
        return output(&written, flags.format);
    }

    match &args.name {
        Some(name) => {
            let schema = registry
                .get(name)
                .ok_or_else(|| anyhow!("unknown schema '{name}'; run `folio schema` to list names"))?;
            output(schema, flags.format)
        }
        None => {
            let names = registry.list();
            let limit = flags.limit.and_then(|l| usize::try_from(l).ok()).filter(|l| *l > 0);
            output(&paginate(&names, limit, 0), flags.format)
        }
    }
}

/// Write each schema to `<dir>/<name>.schema.json`; returns the paths written.
fn write_all(registry: &SchemaRegistry, dir: &Path) -> anyhow::Result<Vec<String>> {
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    registry
        .list()
        .into_iter()
        .map(|name| {
            let path = dir.join(format!("{name}.schema.json"));
            let schema = registry.get(name).ok_or_else(|| anyhow!("schema '{name}' vanished"))?;
            std::fs::write(&path, serde_json::to_string_pretty(schema)?)
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(path.display().to_string())
        })
        .collect()
}
