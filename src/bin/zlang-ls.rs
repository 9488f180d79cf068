use anyhow::Result;
use zlang_checker::lsp::server::serve;

#[tokio::main]
async fn main() -> Result<()> {
    serve().await
}
