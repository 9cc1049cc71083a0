use crate::scene::{LoadingConfig, WorldConfig};

/// Application-level configuration consumed at startup.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub loading: LoadingConfig,
    /// Extra keys loaded synchronously at startup, alongside the loading bar.
    pub splash: Vec<String>,
    /// Extra keys streamed during loading, on top of what the world needs.
    pub manifest: Vec<String>,
    pub world: WorldConfig,
}

impl AppConfig {
    pub fn with_world(mut self, world: WorldConfig) -> Self {
        self.world = world;
        self
    }

    pub fn with_loads_per_frame(mut self, loads: usize) -> Self {
        self.loading.loads_per_frame = loads;
        self
    }

    pub fn with_manifest_entry(mut self, key: impl Into<String>) -> Self {
        self.manifest.push(key.into());
        self
    }

    pub fn with_splash_entry(mut self, key: impl Into<String>) -> Self {
        self.splash.push(key.into());
        self
    }

    /// Keys the loading screen needs before its first frame.
    pub fn startup_keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.loading.bar_texture.as_str())
            .chain(self.splash.iter().map(String::as_str))
    }

    /// Keys streamed by the loading phase.
    pub fn manifest_keys(&self) -> Vec<String> {
        let mut keys = self.world.asset_keys();
        for key in &self.manifest {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_keys_lead_with_loading_bar() {
        let config = AppConfig::default().with_splash_entry("logo");
        let keys: Vec<&str> = config.startup_keys().collect();
        assert_eq!(keys, ["progress", "logo"]);
    }

    #[test]
    fn manifest_keys_skip_world_duplicates() {
        let config = AppConfig::default()
            .with_manifest_entry("ship")
            .with_manifest_entry("music");
        assert_eq!(config.manifest_keys(), ["ship", "guard", "crate", "music"]);
    }
}
