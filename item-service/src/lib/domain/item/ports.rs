use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::Owner;
use crate::domain::item::models::UpdateItemCommand;

/// Port for owner-scoped item operations.
///
/// Every call is made on behalf of `owner`; items belonging to anyone else
/// behave as if they did not exist.
#[async_trait]
pub trait ItemServicePort: Send + Sync + 'static {
    /// Create an item owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_item(&self, owner: &Owner, command: CreateItemCommand)
        -> Result<Item, ItemError>;

    /// List the owner's items, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_items(&self, owner: &Owner) -> Result<Vec<Item>, ItemError>;

    /// Retrieve one of the owner's items.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist or belongs to another owner
    /// * `DatabaseError` - Database operation failed
    async fn get_item(&self, owner: &Owner, id: &ItemId) -> Result<Item, ItemError>;

    /// Update name and/or description of one of the owner's items.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist or belongs to another owner
    /// * `DatabaseError` - Database operation failed
    async fn update_item(
        &self,
        owner: &Owner,
        id: &ItemId,
        command: UpdateItemCommand,
    ) -> Result<Item, ItemError>;

    /// Delete one of the owner's items.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist or belongs to another owner
    /// * `DatabaseError` - Database operation failed
    async fn delete_item(&self, owner: &Owner, id: &ItemId) -> Result<(), ItemError>;
}

/// Persistence operations for item aggregate.
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    /// Persist new item to storage.
    async fn create(&self, item: Item) -> Result<Item, ItemError>;

    /// Retrieve item by identifier, regardless of owner.
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError>;

    /// Retrieve all items of an owner, newest first.
    async fn list_by_owner(&self, owner: &Owner) -> Result<Vec<Item>, ItemError>;

    /// Write back name and description of an existing item.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    async fn update(&self, item: Item) -> Result<Item, ItemError>;

    /// Remove item from storage.
    ///
    /// # Errors
    /// * `NotFound` - Item does not exist
    async fn delete(&self, id: &ItemId) -> Result<(), ItemError>;
}
