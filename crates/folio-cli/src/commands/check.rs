use folio_core::responses::{CheckResponse, CollectionCount};
use folio_query::Gateway;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio check`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = check(ctx)?;
    tracing::debug!(collections = response.collections.len(), tags = response.tags, "content is valid");
    output(&response, flags.format)
}

/// Load every collection and report what was found.
pub fn check(ctx: &AppContext) -> anyhow::Result<CheckResponse> {
    let snapshot = ctx.snapshot()?;
    let collections = snapshot
        .counts()
        .into_iter()
        .map(|(collection, records)| {
            Ok(CollectionCount {
                collection,
                file: ctx.store.source().location(collection),
                records: u32::try_from(records)?,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let tags = Gateway::new(snapshot).tags().len();

    Ok(CheckResponse {
        content_dir: ctx.config.content.dir.clone(),
        collections,
        tags: u32::try_from(tags)?,
    })
}
