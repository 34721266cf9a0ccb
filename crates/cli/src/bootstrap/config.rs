use crate::Cli;
use anyhow::Context;
use dns_edge_domain::Config;

/// Loads the configuration file (or defaults), applies CLI overrides, and
/// validates the result.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(bind) = &cli.bind {
        config.server.bind_address = bind.clone();
    }
    if !cli.instances.is_empty() {
        config.upstream.instances = cli.instances.clone();
    }

    config.validate()?;
    Ok(config)
}
