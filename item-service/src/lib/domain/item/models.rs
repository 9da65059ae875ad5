use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::item::errors::DescriptionError;
use crate::domain::item::errors::ItemIdError;
use crate::domain::item::errors::ItemNameError;

/// Item aggregate entity.
///
/// `owner` and `created_at` are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
    pub description: Option<Description>,
    pub owner: Owner,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn is_owned_by(&self, owner: &Owner) -> bool {
        &self.owner == owner
    }
}

/// Item unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an item ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ItemIdError> {
        Uuid::parse_str(s)
            .map(ItemId)
            .map_err(|e| ItemIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Owner of an item: the verified subject (email) of the caller that created it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Owner(String);

impl Owner {
    pub fn new(subject: impl Into<String>) -> Self {
        Self(subject.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Item name value type
///
/// Non-blank, at most 200 characters. Surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    const MAX_LENGTH: usize = 200;

    /// # Errors
    /// * `Blank` - Name is empty after trimming
    /// * `TooLong` - Name exceeds 200 characters
    pub fn new(name: String) -> Result<Self, ItemNameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ItemNameError::Blank);
        }

        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ItemNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-text item description, at most 2000 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    const MAX_LENGTH: usize = 2000;

    /// # Errors
    /// * `TooLong` - Description exceeds 2000 characters
    pub fn new(description: String) -> Result<Self, DescriptionError> {
        let length = description.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(DescriptionError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(description))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create an item with validated fields
#[derive(Debug)]
pub struct CreateItemCommand {
    pub name: ItemName,
    pub description: Option<Description>,
}

/// Command to update an item.
///
/// Only provided fields are changed; owner and creation time never are.
#[derive(Debug, Default)]
pub struct UpdateItemCommand {
    pub name: Option<ItemName>,
    pub description: Option<Description>,
}
