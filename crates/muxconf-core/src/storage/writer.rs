use std::path::Path;

use log::info;

use crate::generator::config::ResolvedConfiguration;
use crate::kernel::error::Result;
use crate::storage::provider::StorageProvider;

/// Persists a generated config and its external scripts
#[derive(Debug)]
pub struct ConfigWriter<'a> {
    provider: &'a dyn StorageProvider,
}

impl<'a> ConfigWriter<'a> {
    pub fn new(provider: &'a dyn StorageProvider) -> Self {
        Self { provider }
    }

    pub fn write(&self, config: &ResolvedConfiguration, conf_file: &Path) -> Result<()> {
        for script in &config.external_scripts {
            info!("Writing script {}", script.path.display());
            self.provider.write_executable(&script.path, &script.contents)?;
        }
        info!("Writing config {}", conf_file.display());
        self.provider.write_string(conf_file, &config.render())
    }
}
