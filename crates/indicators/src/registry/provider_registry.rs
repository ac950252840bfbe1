//! Provider registry: explicit `provider_id` to adapter mapping.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::Endpoints;
use crate::provider::dbnomics::DbnomicsProvider;
use crate::provider::ecb::EcbProvider;
use crate::provider::eurostat::EurostatProvider;
use crate::provider::imf::ImfProvider;
use crate::provider::offline::OfflineProvider;
use crate::provider::world_bank::WorldBankProvider;
use crate::provider::{HttpFetcher, SeriesProvider};

/// Registry of series adapters keyed by provider id.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<&'static str, Arc<dyn SeriesProvider>>,
}

impl ProviderRegistry {
    /// Create a registry from adapters. A later adapter with a duplicate id
    /// replaces the earlier one.
    pub fn new(providers: Vec<Arc<dyn SeriesProvider>>) -> Self {
        let mut map: HashMap<&'static str, Arc<dyn SeriesProvider>> =
            HashMap::with_capacity(providers.len());
        for provider in providers {
            if map.insert(provider.id(), provider.clone()).is_some() {
                warn!(
                    "Provider '{}' registered twice, keeping the last one",
                    provider.id()
                );
            }
        }
        Self { providers: map }
    }

    /// Every built-in adapter sharing one HTTP fetcher.
    pub fn with_defaults(http: Arc<HttpFetcher>, endpoints: &Endpoints) -> Self {
        let registry = Self::new(vec![
            Arc::new(WorldBankProvider::with_base_url(
                http.clone(),
                &endpoints.world_bank,
            )),
            Arc::new(EurostatProvider::with_base_url(
                http.clone(),
                &endpoints.eurostat,
            )),
            Arc::new(ImfProvider::with_base_url(http.clone(), &endpoints.dbnomics)),
            Arc::new(DbnomicsProvider::with_base_url(
                http.clone(),
                &endpoints.dbnomics,
            )),
            Arc::new(EcbProvider::with_base_url(http, &endpoints.ecb)),
            Arc::new(OfflineProvider::oecd()),
            Arc::new(OfflineProvider::gmd()),
        ]);
        info!("Registered providers: {}", registry.ids().join(", "));
        registry
    }

    /// Register or replace one adapter.
    pub fn register(&mut self, provider: Arc<dyn SeriesProvider>) {
        debug!("Registering provider '{}'", provider.id());
        self.providers.insert(provider.id(), provider);
    }

    pub fn get(&self, provider_id: &str) -> Option<&Arc<dyn SeriesProvider>> {
        self.providers.get(provider_id)
    }

    pub fn contains(&self, provider_id: &str) -> bool {
        self.providers.contains_key(provider_id)
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.providers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Human-readable label for a provider id, falling back to the id itself.
    pub fn label(&self, provider_id: &str) -> String {
        self.get(provider_id)
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| provider_id.to_string())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::errors::ProviderError;
    use crate::matrix::IndicatorMatrix;
    use crate::models::TimeSeries;
    use crate::provider::SeriesRequest;

    struct NamedProvider(&'static str, &'static str);

    #[async_trait]
    impl SeriesProvider for NamedProvider {
        fn id(&self) -> &'static str {
            self.0
        }

        fn label(&self) -> &'static str {
            self.1
        }

        async fn fetch_series(
            &self,
            _request: &SeriesRequest<'_>,
        ) -> Result<TimeSeries, ProviderError> {
            Ok(TimeSeries::new())
        }
    }

    #[test]
    fn test_defaults_cover_builtin_matrix() {
        let registry = ProviderRegistry::with_defaults(
            Arc::new(HttpFetcher::default()),
            &Endpoints::default(),
        );
        let matrix = IndicatorMatrix::builtin().unwrap();
        matrix.ensure_providers(|id| registry.contains(id)).unwrap();
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn test_duplicate_id_keeps_last() {
        let registry = ProviderRegistry::new(vec![
            Arc::new(NamedProvider("imf", "first")),
            Arc::new(NamedProvider("imf", "second")),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.label("imf"), "second");
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let registry = ProviderRegistry::default();
        assert_eq!(registry.label("oecd"), "oecd");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_ids_sorted() {
        let mut registry = ProviderRegistry::new(vec![Arc::new(NamedProvider("world_bank", "WB"))]);
        registry.register(Arc::new(NamedProvider("ecb", "ECB")));
        assert_eq!(registry.ids(), vec!["ecb", "world_bank"]);
    }
}
