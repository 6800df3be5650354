use std::sync::Arc;

use tokio::sync::Mutex;

use crate::STORAGE_KEY;
use crate::error::RegistryError;
use crate::models::foods::{FoodId, FoodInput, FoodRecord, seed_records};
use crate::store::PersistentStore;

type Result<T, E = RegistryError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// An existing food list was read from the store.
    Loaded { count: usize },
    /// The store was empty and the seed records were installed.
    Seeded,
}

/// Owns the food list and mirrors every change to a [`PersistentStore`].
///
/// Every mutation encodes and writes the whole list before the in-memory copy is replaced,
/// so a failed write leaves the registry exactly as it was before the call.
#[derive(Debug)]
pub struct FoodRegistry<S> {
    store: S,
    foods: Vec<FoodRecord>,
}

impl<S> FoodRegistry<S>
where
    S: PersistentStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            foods: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the persisted list, installing the seed records when nothing (or only
    /// whitespace) was stored yet.
    ///
    /// On a read or decode failure the list is left empty. If writing the seed records
    /// fails they stay in memory and the write error is returned.
    #[tracing::instrument(skip(self))]
    pub async fn initialize(&mut self) -> Result<LoadOutcome> {
        self.foods.clear();

        let stored = match self.store.get(STORAGE_KEY).await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::error!(error = ?e, "Failed to read food list");
                return Err(e.into());
            }
        };

        match stored.filter(|blob| !blob.trim().is_empty()) {
            Some(blob) => {
                let foods = serde_json::from_str::<Vec<FoodRecord>>(&blob).map_err(|source| {
                    tracing::error!(error = ?source, "Stored food list is malformed");
                    RegistryError::Malformed { source }
                })?;

                let count = foods.len();
                self.foods = foods;
                tracing::info!(%count, "Food list loaded");
                Ok(LoadOutcome::Loaded { count })
            }
            None => {
                self.foods = seed_records();
                tracing::info!("No stored food list, installing seed records");

                if let Err(e) = self.persist(&self.foods).await {
                    tracing::error!(error = ?e, "Failed to persist seed records");
                    return Err(e);
                }

                Ok(LoadOutcome::Seeded)
            }
        }
    }

    /// A snapshot of the food list in insertion order.
    pub fn list(&self) -> Vec<FoodRecord> {
        self.foods.clone()
    }

    pub fn get(&self, id: FoodId) -> Option<&FoodRecord> {
        self.foods.iter().find(|food| food.id == id)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// The id the next created record will receive.
    pub fn next_id(&self) -> Result<FoodId> {
        let max = self
            .foods
            .iter()
            .map(|food| food.id)
            .max()
            .unwrap_or_default();

        max.next().ok_or(RegistryError::IdsExhausted(max))
    }

    #[tracing::instrument(skip(self, input))]
    pub async fn create(&mut self, input: &FoodInput) -> Result<FoodRecord> {
        let draft = input.validate_into_draft()?;
        let food = draft.into_record(self.next_id()?);

        let mut updated = self.foods.clone();
        updated.push(food.clone());
        self.commit(updated).await?;

        tracing::info!(id = %food.id, "Food created");
        Ok(food)
    }

    #[tracing::instrument(skip(self, input))]
    pub async fn update(&mut self, id: FoodId, input: &FoodInput) -> Result<FoodRecord> {
        let draft = input.validate_into_draft()?;

        let position = self
            .foods
            .iter()
            .position(|food| food.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        let mut updated = self.foods.clone();
        let food = &mut updated[position];
        draft.apply_to(food);
        let food = food.clone();
        self.commit(updated).await?;

        tracing::info!(%id, "Food updated");
        Ok(food)
    }

    /// Removes the record with `id`. Deleting an unknown id is a no-op.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&mut self, id: FoodId) -> Result<()> {
        if !self.foods.iter().any(|food| food.id == id) {
            tracing::warn!(%id, "Delete requested for unknown food");
            return Ok(());
        }

        let updated = self
            .foods
            .iter()
            .filter(|food| food.id != id)
            .cloned()
            .collect();
        self.commit(updated).await?;

        tracing::info!(%id, "Food deleted");
        Ok(())
    }

    async fn commit(&mut self, updated: Vec<FoodRecord>) -> Result<()> {
        if let Err(e) = self.persist(&updated).await {
            tracing::error!(error = ?e, "Failed to persist food list, changes discarded");
            return Err(e);
        }

        self.foods = updated;
        Ok(())
    }

    async fn persist(&self, foods: &[FoodRecord]) -> Result<()> {
        let blob = serde_json::to_string(foods).map_err(|source| RegistryError::Encode { source })?;
        self.store.set(STORAGE_KEY, blob).await?;
        tracing::debug!(count = foods.len(), "Food list persisted");
        Ok(())
    }
}

/// Clonable handle that serializes access to one [`FoodRegistry`].
///
/// The lock is held across each store write, so two tasks can never persist
/// interleaved snapshots of the list.
#[derive(Debug)]
pub struct SharedFoodRegistry<S> {
    inner: Arc<Mutex<FoodRegistry<S>>>,
}

impl<S> Clone for SharedFoodRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> SharedFoodRegistry<S>
where
    S: PersistentStore,
{
    pub fn new(registry: FoodRegistry<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    pub async fn initialize(&self) -> Result<LoadOutcome> {
        self.inner.lock().await.initialize().await
    }

    pub async fn list(&self) -> Vec<FoodRecord> {
        self.inner.lock().await.list()
    }

    pub async fn create(&self, input: &FoodInput) -> Result<FoodRecord> {
        self.inner.lock().await.create(input).await
    }

    pub async fn update(&self, id: FoodId, input: &FoodInput) -> Result<FoodRecord> {
        self.inner.lock().await.update(id, input).await
    }

    pub async fn delete(&self, id: FoodId) -> Result<()> {
        self.inner.lock().await.delete(id).await
    }
}

impl<S> From<FoodRegistry<S>> for SharedFoodRegistry<S>
where
    S: PersistentStore,
{
    fn from(registry: FoodRegistry<S>) -> Self {
        Self::new(registry)
    }
}
