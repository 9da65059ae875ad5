use std::sync::Arc;

use async_trait::async_trait;
use chrono::SubsecRound;
use chrono::Utc;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::CreateItemCommand;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::Owner;
use crate::domain::item::models::UpdateItemCommand;
use crate::domain::item::ports::ItemRepository;
use crate::domain::item::ports::ItemServicePort;

/// Domain service implementation for item operations.
pub struct ItemService<IR>
where
    IR: ItemRepository,
{
    repository: Arc<IR>,
}

impl<IR> ItemService<IR>
where
    IR: ItemRepository,
{
    pub fn new(repository: Arc<IR>) -> Self {
        Self { repository }
    }

    /// Load an item and check it belongs to `owner`.
    async fn find_owned(&self, owner: &Owner, id: &ItemId) -> Result<Item, ItemError> {
        match self.repository.find_by_id(id).await? {
            Some(item) if item.is_owned_by(owner) => Ok(item),
            Some(_) => {
                tracing::debug!(item_id = %id, owner = %owner, "Item belongs to another owner");
                Err(ItemError::NotFound(id.to_string()))
            }
            None => Err(ItemError::NotFound(id.to_string())),
        }
    }
}

#[async_trait]
impl<IR> ItemServicePort for ItemService<IR>
where
    IR: ItemRepository,
{
    async fn create_item(
        &self,
        owner: &Owner,
        command: CreateItemCommand,
    ) -> Result<Item, ItemError> {
        let item = Item {
            id: ItemId::new(),
            name: command.name,
            description: command.description,
            owner: owner.clone(),
            // Microseconds, the precision the database keeps
            created_at: Utc::now().trunc_subsecs(6),
        };

        let created_item = self.repository.create(item).await?;
        tracing::info!(item_id = %created_item.id, owner = %owner, "Item created");

        Ok(created_item)
    }

    async fn list_items(&self, owner: &Owner) -> Result<Vec<Item>, ItemError> {
        self.repository.list_by_owner(owner).await
    }

    async fn get_item(&self, owner: &Owner, id: &ItemId) -> Result<Item, ItemError> {
        self.find_owned(owner, id).await
    }

    async fn update_item(
        &self,
        owner: &Owner,
        id: &ItemId,
        command: UpdateItemCommand,
    ) -> Result<Item, ItemError> {
        let mut item = self.find_owned(owner, id).await?;

        if let Some(name) = command.name {
            item.name = name;
        }

        if let Some(description) = command.description {
            item.description = Some(description);
        }

        self.repository.update(item).await
    }

    async fn delete_item(&self, owner: &Owner, id: &ItemId) -> Result<(), ItemError> {
        self.find_owned(owner, id).await?;
        self.repository.delete(id).await?;
        tracing::info!(item_id = %id, owner = %owner, "Item deleted");

        Ok(())
    }
}
