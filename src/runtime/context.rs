use crate::config::Config;
use crate::delivery::DeliveryClient;
use crate::preferences::PreferenceStore;

#[derive(Debug, Clone)]
pub struct AppContext {
    config: Config,
    preferences: PreferenceStore,
    delivery: DeliveryClient,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let preferences = PreferenceStore::new(config.data_dir.clone());
        let delivery = DeliveryClient::with_endpoint(config.collector_url.clone());
        Self {
            config,
            preferences,
            delivery,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn delivery(&self) -> &DeliveryClient {
        &self.delivery
    }
}
