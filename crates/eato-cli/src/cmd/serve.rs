use std::path::Path;

/// Serve the roadmap over HTTP until ctrl-c. `port` overrides the config.
pub fn run(root: &Path, port: Option<u16>, open: bool) -> anyhow::Result<()> {
    let site = super::load_site(root)?;
    for w in site.validate() {
        tracing::warn!("{}", w.message);
    }
    let port = port.unwrap_or(site.config().server.port);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(eato_server::serve(root.to_path_buf(), site, port, open))
}
