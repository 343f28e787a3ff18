use std::sync::Arc;

use anyhow::Context;
use folio_server::{Endpoint, HttpServer};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Handle `folio serve`.
pub async fn handle(args: &ServeArgs, mut ctx: AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(host) = &args.host {
        ctx.config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        ctx.config.server.port = port;
    }

    let gateway = ctx.gateway()?;
    let endpoint = Endpoint::new(Arc::new(gateway), ctx.config.server.graphql_path.as_str());
    let addr = ctx.config.server.bind_addr();
    let server = HttpServer::bind(&addr, endpoint).with_context(|| format!("failed to start server on {addr}"))?;

    if !flags.quiet {
        eprintln!(
            "Serving {} at http://{}{}",
            ctx.config.content.dir,
            server.local_addr(),
            ctx.config.server.graphql_path
        );
    }
    server.run().await?;
    Ok(())
}
