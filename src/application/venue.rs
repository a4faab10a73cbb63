use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{
    core::{NewVenue, Price, Venue, VenueRepository},
    Entity,
};

use super::{require, Field, ServiceError, ValidationError};

/// 会場登録の入力
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct VenueInput {
    pub name: Field,
    pub location: Field,
    pub capacity: Field,
    pub price: Field,
}

impl VenueInput {
    fn parse(&self) -> Result<NewVenue, ValidationError> {
        require(&[&self.name, &self.location, &self.capacity, &self.price])?;
        let venue = NewVenue::new(
            self.name.text("name")?,
            self.location.text("location")?,
            self.capacity.integer("capacity")?,
            Price::new(self.price.number("price")?),
        )?;
        Ok(venue)
    }
}

/// 会場サービス
#[derive(Clone, Debug)]
pub struct VenueService<R> {
    repository: R,
}

impl<R: VenueRepository> VenueService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// 会場を登録する
    pub async fn create_venue(&self, input: VenueInput) -> Result<Venue, ServiceError> {
        let venue = input.parse().map_err(|e| {
            warn!(error = %e, "会場の入力が不正です");
            e
        })?;
        let venue = self.repository.create(venue).await?;
        info!(
            entity = Venue::ENTITY_NAME,
            id = %venue.id(),
            name = venue.name(),
            price = %venue.price(),
            "会場を登録しました"
        );
        Ok(venue)
    }

    /// 全ての会場を取得する
    pub async fn list_venues(&self) -> Result<Vec<Venue>, ServiceError> {
        Ok(self.repository.find_all().await?)
    }

    /// 会場数を数える
    pub async fn count_venues(&self) -> Result<u64, ServiceError> {
        Ok(self.repository.count().await?)
    }
}
