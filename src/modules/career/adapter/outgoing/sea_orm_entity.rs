use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::career::domain::entities::Career;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "careers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub username: String,

    pub created_datetime: DateTimeWithTimeZone,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,
}

impl Model {
    pub fn to_domain(&self) -> Career {
        Career {
            id: self.id,
            username: self.username.clone(),
            created_datetime: self.created_datetime.with_timezone(&Utc),
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
