use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use crate::domain::core::{
    NewReservation, Price, Reservation, ReservationId, ReservationRepository, ReservationView,
};
use crate::domain::DataAccessError;

#[derive(Clone, Debug)]
pub struct SqliteReservationRepository {
    pool: SqlitePool,
}

impl SqliteReservationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ReservationViewRow {
    id: i64,
    customer_name: String,
    reservation_date: String,
    venue: String,
    price: f64,
}

impl From<ReservationViewRow> for ReservationView {
    fn from(row: ReservationViewRow) -> Self {
        ReservationView::new(
            row.id.into(),
            row.customer_name,
            row.reservation_date,
            row.venue,
            Price::new(row.price),
        )
    }
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepository {
    async fn create(&self, reservation: NewReservation) -> Result<Reservation, DataAccessError> {
        let id = sqlx::query(
            "INSERT INTO reservations (venue_id, customer_name, reservation_date) VALUES (?, ?, ?)",
        )
        .bind(*reservation.venue_id())
        .bind(reservation.customer_name())
        .bind(reservation.reservation_date())
        .execute(&self.pool)
        .await?
        .last_insert_rowid();
        Ok(reservation.into_reservation(id.into()))
    }

    async fn find_all_with_venue(&self) -> Result<Vec<ReservationView>, DataAccessError> {
        let rows = sqlx::query_as::<_, ReservationViewRow>(
            "SELECT r.id, r.customer_name, r.reservation_date, v.name AS venue, v.price
             FROM reservations r JOIN venues v ON r.venue_id = v.id
             ORDER BY r.id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(ReservationView::from).collect())
    }

    async fn delete_by_id(&self, id: ReservationId) -> Result<u64, DataAccessError> {
        let deleted = sqlx::query("DELETE FROM reservations WHERE id = ?")
            .bind(*id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(deleted)
    }

    async fn count(&self) -> Result<u64, DataAccessError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reservations")
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn total_revenue(&self) -> Result<Price, DataAccessError> {
        let total = sqlx::query_scalar::<_, f64>(
            "SELECT IFNULL(SUM(v.price), 0.0)
             FROM reservations r JOIN venues v ON r.venue_id = v.id",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(Price::new(total))
    }
}
