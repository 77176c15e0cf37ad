use crate::core::models::Item;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Item ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Item name
    pub name: String,

    /// Item description
    pub description: String,

    /// Free-text status
    pub status: String,

    /// Contact email
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain item
    pub fn to_domain_item(&self) -> Item {
        Item {
            id: Some(self.id),
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status.clone(),
            email: self.email.clone(),
        }
    }

    /// Convert domain item to an active model; unsaved items leave the id unset
    pub fn from_domain_item(item: &Item) -> ActiveModel {
        ActiveModel {
            id: item.id.map_or(NotSet, Set),
            name: Set(item.name.clone()),
            description: Set(item.description.clone()),
            status: Set(item.status.clone()),
            email: Set(item.email.clone()),
        }
    }
}
