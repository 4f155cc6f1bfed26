//! Address resolution as an ordered chain of strategies.

use async_trait::async_trait;
use shared_types::{DpvMatch, ResolvedLocation, ResolverKind, Settings};

use crate::config::ProviderEndpoints;
use crate::providers::{nominatim, smarty, ProviderError};

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub location: ResolvedLocation,
    pub resolved_by: ResolverKind,
    /// Only the validating provider reports a delivery-point match.
    pub dpv: Option<DpvMatch>,
}

#[async_trait]
pub trait AddressStrategy: Send + Sync {
    fn kind(&self) -> ResolverKind;
    async fn resolve(&self, address: &str) -> Result<Resolution, ProviderError>;
}

pub struct SmartyStrategy {
    client: reqwest::Client,
    base_url: String,
    auth_id: String,
    auth_token: String,
}

impl SmartyStrategy {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        auth_id: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            auth_id: auth_id.into(),
            auth_token: auth_token.into(),
        }
    }
}

#[async_trait]
impl AddressStrategy for SmartyStrategy {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Smarty
    }

    async fn resolve(&self, address: &str) -> Result<Resolution, ProviderError> {
        let candidate = smarty::validate_address(
            &self.client,
            &self.base_url,
            &self.auth_id,
            &self.auth_token,
            address,
        )
        .await?;

        let dpv = candidate.dpv_match();
        Ok(Resolution {
            location: candidate.into_location(),
            resolved_by: ResolverKind::Smarty,
            dpv,
        })
    }
}

pub struct NominatimStrategy {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimStrategy {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AddressStrategy for NominatimStrategy {
    fn kind(&self) -> ResolverKind {
        ResolverKind::Nominatim
    }

    async fn resolve(&self, address: &str) -> Result<Resolution, ProviderError> {
        let place = nominatim::search(&self.client, &self.base_url, address).await?;
        Ok(Resolution {
            location: place.into_location(address),
            resolved_by: ResolverKind::Nominatim,
            dpv: None,
        })
    }
}

pub struct AddressResolver {
    strategies: Vec<Box<dyn AddressStrategy>>,
}

impl AddressResolver {
    pub fn new(strategies: Vec<Box<dyn AddressStrategy>>) -> Self {
        Self { strategies }
    }

    /// Smarty first when both credentials are set, Nominatim always last.
    pub fn from_settings(
        client: &reqwest::Client,
        endpoints: &ProviderEndpoints,
        settings: &Settings,
    ) -> Self {
        let mut strategies: Vec<Box<dyn AddressStrategy>> = Vec::with_capacity(2);
        if let Some((auth_id, auth_token)) = settings.smarty_credentials() {
            strategies.push(Box::new(SmartyStrategy::new(
                client.clone(),
                &endpoints.smarty,
                auth_id,
                auth_token,
            )));
        }
        strategies.push(Box::new(NominatimStrategy::new(
            client.clone(),
            &endpoints.nominatim,
        )));
        Self::new(strategies)
    }

    pub fn kinds(&self) -> Vec<ResolverKind> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    /// Try each strategy in order; the first success wins. `None` when all fail.
    pub async fn resolve(&self, address: &str) -> Option<Resolution> {
        for strategy in &self.strategies {
            match strategy.resolve(address).await {
                Ok(resolution) => {
                    tracing::info!(
                        resolver = ?strategy.kind(),
                        city = resolution.location.city.as_deref().unwrap_or(""),
                        "Address resolved"
                    );
                    return Some(resolution);
                }
                Err(e) => {
                    tracing::warn!(resolver = ?strategy.kind(), error = %e, "Address strategy failed");
                }
            }
        }
        None
    }
}
