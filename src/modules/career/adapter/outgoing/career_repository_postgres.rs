use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

use crate::career::{
    application::ports::outgoing::{CareerRepository, CareerRepositoryError},
    domain::entities::{Career, CareerChanges, CareerId, NewCareer},
};

// SeaORM entity
use super::sea_orm_entity::{
    ActiveModel as CareerActiveModel, Column as CareerColumn, Entity as CareerEntity,
    Model as CareerModel,
};

#[derive(Debug, Clone)]
pub struct CareerRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CareerRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn unavailable(err: DbErr) -> CareerRepositoryError {
    CareerRepositoryError::Unavailable(err.to_string())
}

#[async_trait]
impl CareerRepository for CareerRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Career>, CareerRepositoryError> {
        let models: Vec<CareerModel> = CareerEntity::find()
            .order_by_asc(CareerColumn::Id)
            .all(&*self.db)
            .await
            .map_err(unavailable)?;

        Ok(models.iter().map(CareerModel::to_domain).collect())
    }

    async fn save(&self, career: NewCareer) -> Result<Career, CareerRepositoryError> {
        let active = CareerActiveModel {
            username: Set(career.username),
            created_datetime: Set(Utc::now().fixed_offset()),
            title: Set(career.title),
            content: Set(career.content),
            ..Default::default()
        };

        let inserted: CareerModel = active.insert(&*self.db).await.map_err(unavailable)?;

        Ok(inserted.to_domain())
    }

    async fn update(
        &self,
        changes: CareerChanges,
    ) -> Result<Option<Career>, CareerRepositoryError> {
        let Some(existing) = CareerEntity::find_by_id(changes.id)
            .one(&*self.db)
            .await
            .map_err(unavailable)?
        else {
            return Ok(None);
        };

        // username and created_datetime stay untouched
        let mut active: CareerActiveModel = existing.into();
        active.title = Set(changes.title);
        active.content = Set(changes.content);

        let updated = active.update(&*self.db).await.map_err(unavailable)?;

        Ok(Some(updated.to_domain()))
    }

    async fn delete(&self, career: Career) -> Result<CareerId, CareerRepositoryError> {
        CareerEntity::delete_by_id(career.id)
            .exec(&*self.db)
            .await
            .map_err(unavailable)?;

        Ok(career.id)
    }

    async fn get_by_id(&self, id: CareerId) -> Result<Option<Career>, CareerRepositoryError> {
        let found = CareerEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(unavailable)?;

        Ok(found.as_ref().map(CareerModel::to_domain))
    }
}
