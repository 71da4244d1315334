use crate::dto::settings_dto::UpdateSettingsPayload;
use crate::error::Result;
use crate::models::settings::Settings;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct SettingsService {
    store: SharedStore,
}

impl SettingsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> Result<Settings> {
        let store = self.store.lock();
        Ok(store.settings.clone())
    }

    pub async fn update(&self, payload: UpdateSettingsPayload) -> Result<Settings> {
        let mut store = self.store.lock();
        payload.apply_to(&mut store.settings);
        tracing::info!("Settings updated");

        Ok(store.settings.clone())
    }
}
