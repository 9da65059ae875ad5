use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::models::Description;
use crate::domain::item::models::Item;
use crate::domain::item::models::ItemId;
use crate::domain::item::models::ItemName;
use crate::domain::item::models::Owner;
use crate::domain::item::ports::ItemRepository;

pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    owner_email: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ItemRow> for Item {
    type Error = ItemError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        Ok(Item {
            id: ItemId(row.id),
            name: ItemName::new(row.name)?,
            description: row.description.map(Description::new).transpose()?,
            owner: Owner::new(row.owner_email),
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn create(&self, item: Item) -> Result<Item, ItemError> {
        sqlx::query(
            r#"
            INSERT INTO items (id, name, description, owner_email, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(item.id.0)
        .bind(item.name.as_str())
        .bind(item.description.as_ref().map(Description::as_str))
        .bind(item.owner.as_str())
        .bind(item.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        Ok(item)
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, description, owner_email, created_at
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        row.map(Item::try_from).transpose()
    }

    async fn list_by_owner(&self, owner: &Owner) -> Result<Vec<Item>, ItemError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, description, owner_email, created_at
            FROM items
            WHERE owner_email = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Item::try_from).collect()
    }

    async fn update(&self, item: Item) -> Result<Item, ItemError> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = $2, description = $3
            WHERE id = $1
            "#,
        )
        .bind(item.id.0)
        .bind(item.name.as_str())
        .bind(item.description.as_ref().map(Description::as_str))
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(item.id.to_string()));
        }

        Ok(item)
    }

    async fn delete(&self, id: &ItemId) -> Result<(), ItemError> {
        let result = sqlx::query(
            r#"
            DELETE FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ItemError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
