use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::api::BeachApi;
use crate::types::{Beach, BeachRequest, BeachStatus, Result};

/// Bucket label for beaches without a region, kept from the source UI.
const UNKNOWN_REGION: &str = "기타";

/// Beach listings: the primary list, the managed-by-me list, transient
/// search results, and an optional current selection.
pub struct BeachStore {
    api: BeachApi,
    state: RwLock<BeachState>,
}

#[derive(Debug, Default)]
struct BeachState {
    beaches: Vec<Beach>,
    my_beaches: Vec<Beach>,
    search_results: Vec<Beach>,
    current_beach: Option<Beach>,
    loading: bool,
    error: Option<String>,
}

impl BeachStore {
    pub fn new(api: BeachApi) -> Self {
        Self {
            api,
            state: RwLock::new(BeachState::default()),
        }
    }

    // ----- actions -----

    pub async fn fetch_all_beaches(&self) -> Result<Vec<Beach>> {
        self.begin();
        let result = self.api.get_all().await;
        if let Ok(beaches) = &result {
            self.state.write().beaches = beaches.clone();
        }
        self.complete(result)
    }

    pub async fn fetch_active_beaches(&self) -> Result<Vec<Beach>> {
        self.begin();
        let result = self.api.get_active().await;
        if let Ok(beaches) = &result {
            self.state.write().beaches = beaches.clone();
        }
        self.complete(result)
    }

    pub async fn fetch_beach_by_id(&self, id: i64) -> Result<Beach> {
        self.begin();
        let result = self.api.get_by_id(id).await;
        if let Ok(beach) = &result {
            self.state.write().current_beach = Some(beach.clone());
        }
        self.complete(result)
    }

    /// Returns the region's beaches without touching the primary list.
    pub async fn fetch_beaches_by_region(&self, region: &str) -> Result<Vec<Beach>> {
        self.begin();
        let result = self.api.get_by_region(region).await;
        self.complete(result)
    }

    pub async fn fetch_my_beaches(&self) -> Result<Vec<Beach>> {
        self.begin();
        let result = self.api.get_mine().await;
        if let Ok(beaches) = &result {
            self.state.write().my_beaches = beaches.clone();
        }
        self.complete(result)
    }

    pub async fn search_beaches(&self, name: &str) -> Result<Vec<Beach>> {
        self.begin();
        let result = self.api.search(name).await;
        if let Ok(beaches) = &result {
            self.state.write().search_results = beaches.clone();
        }
        self.complete(result)
    }

    /// Creates the beach and appends it to the primary list.
    pub async fn create_beach(&self, beach_data: BeachRequest) -> Result<Beach> {
        self.begin();
        let result = self.api.create(&beach_data).await;
        if let Ok(beach) = &result {
            self.state.write().beaches.push(beach.clone());
        }
        self.complete(result)
    }

    pub async fn update_beach(&self, id: i64, beach_data: BeachRequest) -> Result<Beach> {
        self.begin();
        let result = self.api.update(id, &beach_data).await;
        if let Ok(beach) = &result {
            self.replace_everywhere(beach);
        }
        self.complete(result)
    }

    pub async fn delete_beach(&self, id: i64) -> Result<()> {
        self.begin();
        let result = self.api.delete(id).await;
        if result.is_ok() {
            let mut state = self.state.write();
            state.beaches.retain(|b| b.id != id);
            state.my_beaches.retain(|b| b.id != id);
            state.search_results.retain(|b| b.id != id);
            if state.current_beach.as_ref().is_some_and(|b| b.id == id) {
                state.current_beach = None;
            }
        }
        self.complete(result)
    }

    pub async fn toggle_beach_status(&self, id: i64) -> Result<Beach> {
        self.begin();
        let result = self.api.toggle_status(id).await;
        if let Ok(beach) = &result {
            self.replace_everywhere(beach);
        }
        self.complete(result)
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    pub fn clear_search_results(&self) {
        self.state.write().search_results.clear();
    }

    // ----- derived views -----

    pub fn beaches(&self) -> Vec<Beach> {
        self.state.read().beaches.clone()
    }

    pub fn my_beaches(&self) -> Vec<Beach> {
        self.state.read().my_beaches.clone()
    }

    pub fn search_results(&self) -> Vec<Beach> {
        self.state.read().search_results.clone()
    }

    pub fn current_beach(&self) -> Option<Beach> {
        self.state.read().current_beach.clone()
    }

    pub fn active_beaches(&self) -> Vec<Beach> {
        self.state
            .read()
            .beaches
            .iter()
            .filter(|b| b.status == BeachStatus::Active)
            .cloned()
            .collect()
    }

    pub fn beaches_by_region(&self) -> BTreeMap<String, Vec<Beach>> {
        let state = self.state.read();
        let mut groups: BTreeMap<String, Vec<Beach>> = BTreeMap::new();
        for beach in &state.beaches {
            let region = beach
                .region
                .clone()
                .unwrap_or_else(|| UNKNOWN_REGION.to_string());
            groups.entry(region).or_default().push(beach.clone());
        }
        groups
    }

    pub fn total_beaches(&self) -> usize {
        self.state.read().beaches.len()
    }

    pub fn search_result_count(&self) -> usize {
        self.state.read().search_results.len()
    }

    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    // ----- uniform action plumbing -----

    /// One id, one record: an updated beach replaces its entry in every list
    /// that holds it, and the current selection when it matches.
    fn replace_everywhere(&self, updated: &Beach) {
        let mut guard = self.state.write();
        let state = &mut *guard;
        for list in [
            &mut state.beaches,
            &mut state.my_beaches,
            &mut state.search_results,
        ] {
            if let Some(slot) = list.iter_mut().find(|b| b.id == updated.id) {
                *slot = updated.clone();
            }
        }
        if state
            .current_beach
            .as_ref()
            .is_some_and(|b| b.id == updated.id)
        {
            state.current_beach = Some(updated.clone());
        }
    }

    fn begin(&self) {
        let mut state = self.state.write();
        state.loading = true;
        state.error = None;
    }

    fn complete<T>(&self, result: Result<T>) -> Result<T> {
        let mut state = self.state.write();
        if let Err(e) = &result {
            state.error = Some(e.to_string());
        }
        state.loading = false;
        result
    }
}
