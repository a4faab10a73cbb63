use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{
    core::{
        NewReservation, Price, Reservation, ReservationId, ReservationRepository,
        ReservationView, VenueId,
    },
    Entity, Id,
};

use super::{integral, require, Field, ServiceError, ValidationError};

/// 予約登録の入力
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReservationInput {
    pub venue_id: Field,
    pub customer_name: Field,
    pub reservation_date: Field,
}

impl ReservationInput {
    fn parse(&self) -> Result<NewReservation, ValidationError> {
        require(&[&self.venue_id, &self.customer_name, &self.reservation_date])?;
        let reservation = NewReservation::new(
            VenueId::from(self.venue_id.integer("venue_id")?),
            self.customer_name.text("customer_name")?,
            self.reservation_date.text("reservation_date")?,
        )?;
        Ok(reservation)
    }
}

/// 予約サービス
#[derive(Clone, Debug)]
pub struct ReservationService<R> {
    repository: R,
}

impl<R: ReservationRepository> ReservationService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// 予約を登録する
    ///
    /// 会場の存在は確認しない。
    pub async fn create_reservation(
        &self,
        input: ReservationInput,
    ) -> Result<Reservation, ServiceError> {
        let reservation = input.parse().map_err(|e| {
            warn!(error = %e, "予約の入力が不正です");
            e
        })?;
        let reservation = self.repository.create(reservation).await?;
        info!(
            entity = Reservation::ENTITY_NAME,
            id = %reservation.id(),
            venue_id = %reservation.venue_id(),
            "予約を登録しました"
        );
        Ok(reservation)
    }

    /// 会場名と料金付きで全ての予約を取得する
    pub async fn list_reservations(&self) -> Result<Vec<ReservationView>, ServiceError> {
        Ok(self.repository.find_all_with_venue().await?)
    }

    /// 予約を削除し、削除件数 (0 または 1) を返す
    pub async fn delete_reservation(&self, id: ReservationId) -> Result<u64, ServiceError> {
        let deleted = self.repository.delete_by_id(id).await?;
        info!(entity = Reservation::ENTITY_NAME, %id, deleted, "予約を削除しました");
        Ok(deleted)
    }

    /// パス等の文字列IDで予約を削除する
    ///
    /// `1.0` のように整数として表せる数値も受け付ける。数値でないIDはどの予約にも一致しない。
    pub async fn delete_reservation_by_key(&self, key: &str) -> Result<u64, ServiceError> {
        let id = ReservationId::parse(key).or_else(|| {
            key.parse::<f64>()
                .ok()
                .and_then(integral)
                .map(ReservationId::from)
        });
        match id {
            Some(id) => self.delete_reservation(id).await,
            None => {
                warn!(key, "数値でない予約IDです");
                Ok(0)
            }
        }
    }

    /// 予約数を数える
    pub async fn count_reservations(&self) -> Result<u64, ServiceError> {
        Ok(self.repository.count().await?)
    }

    /// 予約ごとの会場料金の合計
    pub async fn total_revenue(&self) -> Result<Price, ServiceError> {
        Ok(self.repository.total_revenue().await?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::core::{NewVenue, VenueRepository};
    use crate::infrastructure::{SqliteReservationRepository, SqliteStorage};

    use super::*;

    async fn service() -> (SqliteStorage, ReservationService<SqliteReservationRepository>) {
        let storage = SqliteStorage::in_memory().await.unwrap();
        let venue = NewVenue::new(
            "Hall A".to_owned(),
            "Downtown".to_owned(),
            50,
            Price::new(100.0),
        )
        .unwrap();
        storage.venues().create(venue).await.unwrap();
        let service = ReservationService::new(storage.reservations());
        (storage, service)
    }

    fn input(value: serde_json::Value) -> ReservationInput {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (_storage, service) = service().await;
        let reservation = service
            .create_reservation(input(json!({
                "venue_id": "1",
                "customer_name": "Alice",
                "reservation_date": "2024-01-01",
            })))
            .await
            .unwrap();
        assert_eq!(reservation.id(), ReservationId::from(1));
        assert_eq!(reservation.venue_id(), VenueId::from(1));

        let views = service.list_reservations().await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].venue_name(), "Hall A");
        assert_eq!(views[0].price(), Price::new(100.0));
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected() {
        let (_storage, service) = service().await;
        let cases = [
            json!({ "venue_id": 0, "customer_name": "Alice", "reservation_date": "2024-01-01" }),
            json!({ "venue_id": 1, "customer_name": "", "reservation_date": "2024-01-01" }),
            json!({ "venue_id": 1, "customer_name": "Alice" }),
            json!({}),
        ];
        for case in cases {
            let result = service.create_reservation(input(case)).await;
            assert!(matches!(
                result,
                Err(ServiceError::Validation(ValidationError::MissingFields))
            ));
        }
        let result = service
            .create_reservation(input(json!({
                "venue_id": "abc", "customer_name": "Alice", "reservation_date": "2024-01-01",
            })))
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::Validation(ValidationError::InvalidField("venue_id")))
        ));
        assert_eq!(service.count_reservations().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_venue_is_accepted_but_hidden() {
        let (_storage, service) = service().await;
        let reservation = service
            .create_reservation(input(json!({
                "venue_id": 77, "customer_name": "Ghost", "reservation_date": "2024-02-02",
            })))
            .await
            .unwrap();
        assert_eq!(reservation.venue_id(), VenueId::from(77));
        assert!(service.list_reservations().await.unwrap().is_empty());
        assert_eq!(service.count_reservations().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_negative_venue_id_is_accepted_but_hidden() {
        let (_storage, service) = service().await;
        let reservation = service
            .create_reservation(input(json!({
                "venue_id": -2, "customer_name": "Dave", "reservation_date": "2024-02-03",
            })))
            .await
            .unwrap();
        assert_eq!(reservation.venue_id(), VenueId::from(-2));
        assert!(service.list_reservations().await.unwrap().is_empty());
        assert_eq!(service.count_reservations().await.unwrap(), 1);
        assert_eq!(service.total_revenue().await.unwrap(), Price::new(0.0));
    }

    #[tokio::test]
    async fn test_delete_reservation() {
        let (_storage, service) = service().await;
        let reservation = service
            .create_reservation(input(json!({
                "venue_id": 1, "customer_name": "Alice", "reservation_date": "2024-01-01",
            })))
            .await
            .unwrap();
        assert_eq!(service.delete_reservation(ReservationId::from(99)).await.unwrap(), 0);
        assert_eq!(service.count_reservations().await.unwrap(), 1);
        assert_eq!(service.delete_reservation(reservation.id()).await.unwrap(), 1);
        assert_eq!(service.delete_reservation(reservation.id()).await.unwrap(), 0);
        assert!(service.list_reservations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_reservation_by_key() {
        let (_storage, service) = service().await;
        service
            .create_reservation(input(json!({
                "venue_id": 1, "customer_name": "Alice", "reservation_date": "2024-01-01",
            })))
            .await
            .unwrap();
        assert_eq!(service.delete_reservation_by_key("abc").await.unwrap(), 0);
        assert_eq!(service.delete_reservation_by_key("1.5").await.unwrap(), 0);
        assert_eq!(service.delete_reservation_by_key("1").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_reservation_by_integral_key() {
        let (_storage, service) = service().await;
        service
            .create_reservation(input(json!({
                "venue_id": 1, "customer_name": "Alice", "reservation_date": "2024-01-01",
            })))
            .await
            .unwrap();
        assert_eq!(service.delete_reservation_by_key("1.0").await.unwrap(), 1);
        assert_eq!(service.count_reservations().await.unwrap(), 0);
    }
}
