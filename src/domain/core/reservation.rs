use async_trait::async_trait;
use derive_more::{Deref, Display, Error, From};
use serde::{Deserialize, Serialize};

use crate::domain::{DataAccessError, Entity, Id};

use super::{Price, VenueId};

/// 予約リポジトリ
#[async_trait]
pub trait ReservationRepository {
    /// 予約を登録し、採番されたIDを含む予約を返す
    async fn create(&self, reservation: NewReservation) -> Result<Reservation, DataAccessError>;
    /// 会場と結合できる予約を登録順に取得する
    async fn find_all_with_venue(&self) -> Result<Vec<ReservationView>, DataAccessError>;
    /// 予約を削除し、削除件数を返す
    async fn delete_by_id(&self, id: ReservationId) -> Result<u64, DataAccessError>;
    /// 予約数を数える
    async fn count(&self) -> Result<u64, DataAccessError>;
    /// 会場と結合できる予約ごとに会場の料金を合計する
    async fn total_revenue(&self) -> Result<Price, DataAccessError>;
}

/// 予約ID
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, From, Deref, Default,
)]
pub struct ReservationId(i64);

impl Id for ReservationId {
    type Inner = i64;
}

/// 未登録の予約
///
/// 会場IDは存在も範囲も確認しない。存在しない会場への予約は一覧と売上から外れる。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewReservation {
    venue_id: VenueId,
    customer_name: String,
    reservation_date: String,
}

impl NewReservation {
    pub fn new(
        venue_id: VenueId,
        customer_name: String,
        reservation_date: String,
    ) -> Result<Self, ReservationError> {
        Self::validate_customer_name(&customer_name)?;
        Self::validate_reservation_date(&reservation_date)?;
        Ok(Self {
            venue_id,
            customer_name,
            reservation_date,
        })
    }

    pub fn venue_id(&self) -> VenueId {
        self.venue_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn reservation_date(&self) -> &str {
        &self.reservation_date
    }

    /// 採番されたIDで予約にする
    pub fn into_reservation(self, id: ReservationId) -> Reservation {
        Reservation {
            id,
            venue_id: self.venue_id,
            customer_name: self.customer_name,
            reservation_date: self.reservation_date,
        }
    }

    fn validate_customer_name(customer_name: &str) -> Result<(), ReservationError> {
        if customer_name.trim().is_empty() {
            return Err(ReservationError::CustomerNameIsBlank);
        }
        Ok(())
    }

    // 日付の形式は検証しない
    fn validate_reservation_date(reservation_date: &str) -> Result<(), ReservationError> {
        if reservation_date.trim().is_empty() {
            return Err(ReservationError::ReservationDateIsBlank);
        }
        Ok(())
    }
}

/// 予約エンティティ
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    venue_id: VenueId,
    customer_name: String,
    reservation_date: String,
}

impl Reservation {
    pub fn venue_id(&self) -> VenueId {
        self.venue_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn reservation_date(&self) -> &str {
        &self.reservation_date
    }
}

impl Entity for Reservation {
    type Id = ReservationId;

    const ENTITY_NAME: &'static str = "reservation";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// 会場名と料金を結合した予約
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReservationView {
    id: ReservationId,
    customer_name: String,
    reservation_date: String,
    #[serde(rename = "venue")]
    venue_name: String,
    price: Price,
}

impl ReservationView {
    pub fn new(
        id: ReservationId,
        customer_name: String,
        reservation_date: String,
        venue_name: String,
        price: Price,
    ) -> Self {
        Self {
            id,
            customer_name,
            reservation_date,
            venue_name,
            price,
        }
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn reservation_date(&self) -> &str {
        &self.reservation_date
    }

    pub fn venue_name(&self) -> &str {
        &self.venue_name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

/// 予約エラー
#[derive(Error, Display, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// お客様の名前が空欄です
    #[display(fmt = "Customer name cannot be blank")]
    CustomerNameIsBlank,
    /// 予約日が空欄です
    #[display(fmt = "Reservation date cannot be blank")]
    ReservationDateIsBlank,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reservation() {
        let reservation = NewReservation::new(
            VenueId::from(3),
            "Alice".to_owned(),
            "2024-01-01".to_owned(),
        )
        .unwrap()
        .into_reservation(ReservationId(9));
        assert_eq!(reservation.id(), ReservationId(9));
        assert_eq!(reservation.venue_id(), VenueId::from(3));
        assert_eq!(reservation.customer_name(), "Alice");
        assert_eq!(reservation.reservation_date(), "2024-01-01");
    }

    #[test]
    fn test_reservation_date_is_not_parsed() {
        let reservation =
            NewReservation::new(VenueId::from(1), "Bob".to_owned(), "next friday".to_owned());
        assert!(reservation.is_ok());
    }

    #[test]
    fn test_any_venue_id_is_accepted() {
        for venue_id in [-2, 0, 77] {
            let reservation =
                NewReservation::new(VenueId::from(venue_id), "Bob".to_owned(), "2024-01-01".to_owned())
                    .unwrap();
            assert_eq!(reservation.venue_id(), VenueId::from(venue_id));
        }
    }

    #[test]
    fn test_new_reservation_errors() {
        let err = NewReservation::new(VenueId::from(1), "  ".to_owned(), "2024-01-01".to_owned());
        assert_eq!(err, Err(ReservationError::CustomerNameIsBlank));
        let err = NewReservation::new(VenueId::from(1), "Bob".to_owned(), "".to_owned());
        assert_eq!(err, Err(ReservationError::ReservationDateIsBlank));
    }

    #[test]
    fn test_view_serializes_venue_key() {
        let view = ReservationView::new(
            ReservationId(1),
            "Alice".to_owned(),
            "2024-01-01".to_owned(),
            "Hall A".to_owned(),
            Price::new(100.0),
        );
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            serde_json::json!({
                "id": 1,
                "customer_name": "Alice",
                "reservation_date": "2024-01-01",
                "venue": "Hall A",
                "price": 100.0,
            })
        );
    }
}
