use std::sync::Arc;

use crate::building::OverpassBuildings;
use crate::config::ServerConfig;
use crate::providers;
use crate::resolver::AddressResolver;
use crate::settings::SettingsStore;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub settings: SettingsStore,
    /// One pooled client for all outbound provider calls.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: ServerConfig, settings: SettingsStore) -> Result<Self, reqwest::Error> {
        Ok(Self {
            config: Arc::new(config),
            settings,
            http: providers::http_client()?,
        })
    }

    /// Resolver chain for the settings in force right now.
    pub fn address_resolver(&self) -> AddressResolver {
        AddressResolver::from_settings(
            &self.http,
            &self.config.endpoints,
            &self.settings.snapshot(),
        )
    }

    pub fn building_source(&self) -> OverpassBuildings {
        OverpassBuildings::new(self.http.clone(), &self.config.endpoints.overpass)
    }
}
