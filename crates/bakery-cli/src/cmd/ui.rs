use anyhow::Context;
use bakery_core::config::Config;
use std::path::Path;

pub fn run(root: &Path, port: u16, no_open: bool) -> anyhow::Result<()> {
    Config::load(root).context("failed to load config")?;

    let root = root.to_path_buf();
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        // Bind before serving so an OS-assigned port (0) is printed correctly
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
        bakery_server::serve_on(root, listener, !no_open).await
    })
}
