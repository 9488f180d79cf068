use anyhow::Result;
use clap::Parser;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};

use crate::config::{init_logging, ServerArgs};
use crate::lsp::backend::Backend;

/// Start the LSP server on stdin/stdout
pub async fn serve() -> Result<()> {
    let args = ServerArgs::parse();
    init_logging(Some(args.log_level.as_str()), "info");
    log::info!("starting zlang-ls {}", env!("CARGO_PKG_VERSION"));

    let (service, socket) = LspService::build(Backend::new).finish();

    Server::new(stdin(), stdout(), socket).serve(service).await;

    log::info!("zlang-ls stopped");
    Ok(())
}
