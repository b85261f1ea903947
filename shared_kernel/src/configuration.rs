use anyhow::Context;
use serde::de::DeserializeOwned;

/// Loads a crate's settings from its `configuration/` directory.
///
/// `base.yaml` is read for normal runs and `test.yaml` when compiled for
/// tests. Values can be overridden through `APP`-prefixed environment
/// variables, e.g. `APP_PROVIDER__HOST` overrides `provider.host`.
pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    let configuration_directory = base_path.join("configuration");
    let file = if cfg!(test) { "test.yaml" } else { "base.yaml" };
    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join(file)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .with_context(|| format!("Failed to build configuration from {file}"))?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}
