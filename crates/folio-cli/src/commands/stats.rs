use folio_core::responses::StatsResponse;
use folio_query::aggregate::{case_study_stats, skill_stats};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio stats`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot()?;
    let response = StatsResponse {
        skills: skill_stats(&snapshot.skills),
        case_studies: case_study_stats(&snapshot.case_studies),
    };
    output(&response, flags.format)
}
