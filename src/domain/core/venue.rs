use async_trait::async_trait;
use derive_more::{Deref, Display, Error, From};
use serde::{Deserialize, Serialize};

use crate::domain::{DataAccessError, Entity, Id};

use super::Price;

/// 会場リポジトリ
#[async_trait]
pub trait VenueRepository {
    /// 会場を登録し、採番されたIDを含む会場を返す
    async fn create(&self, venue: NewVenue) -> Result<Venue, DataAccessError>;
    /// 全ての会場を登録順に取得する
    async fn find_all(&self) -> Result<Vec<Venue>, DataAccessError>;
    /// 会場数を数える
    async fn count(&self) -> Result<u64, DataAccessError>;
}

/// 会場ID
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, From, Deref, Default,
)]
pub struct VenueId(i64);

impl Id for VenueId {
    type Inner = i64;
}

/// 未登録の会場
#[derive(Clone, Debug, PartialEq)]
pub struct NewVenue {
    name: String,
    location: String,
    capacity: i64,
    price: Price,
}

impl NewVenue {
    pub fn new(
        name: String,
        location: String,
        capacity: i64,
        price: Price,
    ) -> Result<Self, VenueError> {
        Self::validate_name(&name)?;
        Self::validate_location(&location)?;
        Self::validate_capacity(capacity)?;
        Self::validate_price(&price)?;
        Ok(Self {
            name,
            location,
            capacity,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// 採番されたIDで会場にする
    pub fn into_venue(self, id: VenueId) -> Venue {
        Venue {
            id,
            name: self.name,
            location: self.location,
            capacity: self.capacity,
            price: self.price,
        }
    }

    fn validate_name(name: &str) -> Result<(), VenueError> {
        match name.trim().is_empty() {
            true => Err(VenueError::NameIsBlank),
            false => Ok(()),
        }
    }

    fn validate_location(location: &str) -> Result<(), VenueError> {
        match location.trim().is_empty() {
            true => Err(VenueError::LocationIsBlank),
            false => Ok(()),
        }
    }

    fn validate_capacity(capacity: i64) -> Result<(), VenueError> {
        if capacity < 1 {
            return Err(VenueError::InvalidCapacity);
        }
        Ok(())
    }

    fn validate_price(price: &Price) -> Result<(), VenueError> {
        if !price.is_positive() {
            return Err(VenueError::InvalidPrice);
        }
        Ok(())
    }
}

/// 会場エンティティ
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    id: VenueId,
    name: String,
    location: String,
    capacity: i64,
    price: Price,
}

impl Venue {
    /// 保存済みの値から会場を復元する
    pub fn new(id: VenueId, name: String, location: String, capacity: i64, price: Price) -> Self {
        Self {
            id,
            name,
            location,
            capacity,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl Entity for Venue {
    type Id = VenueId;

    const ENTITY_NAME: &'static str = "venue";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// 会場エラー
#[derive(Error, Display, Debug, Clone, PartialEq, Eq)]
pub enum VenueError {
    /// 会場名が空欄です
    #[display(fmt = "Venue name cannot be blank")]
    NameIsBlank,
    /// 所在地が空欄です
    #[display(fmt = "Location cannot be blank")]
    LocationIsBlank,
    /// 収容人数が不正です
    #[display(fmt = "Capacity must be a positive integer")]
    InvalidCapacity,
    /// 料金が不正です
    #[display(fmt = "Price must be a positive number")]
    InvalidPrice,
}
