//! In-process stores used when no database is configured, and by tests.
//!
//! Contents live for the lifetime of the process.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::Owner;
use crate::domain::item::ports::ItemRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

/// Users keyed by their exact email address.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        let email = user.email.as_str().to_string();
        if users.contains_key(&email) {
            return Err(UserError::EmailTaken(email));
        }

        users.insert(email, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, UserError> {
        Ok(self.users.read().await.contains_key(email))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<HashMap<ItemId, Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, item: Item) -> Result<Item, ItemError> {
        self.items.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn list_by_owner(&self, owner: &Owner) -> Result<Vec<Item>, ItemError> {
        let mut items: Vec<Item> = self
            .items
            .read()
            .await
            .values()
            .filter(|item| item.is_owned_by(owner))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(items)
    }

    async fn update(&self, item: Item) -> Result<Item, ItemError> {
        let mut items = self.items.write().await;
        let Some(stored) = items.get_mut(&item.id) else {
            return Err(ItemError::NotFound(item.id.to_string()));
        };

        stored.name = item.name.clone();
        stored.description = item.description.clone();
        Ok(stored.clone())
    }

    async fn delete(&self, id: &ItemId) -> Result<(), ItemError> {
        self.items
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ItemError::NotFound(id.to_string()))
    }
}
