use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use crate::domain::core::{NewVenue, Price, Venue, VenueRepository};
use crate::domain::DataAccessError;

#[derive(Clone, Debug)]
pub struct SqliteVenueRepository {
    pool: SqlitePool,
}

impl SqliteVenueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct VenueRow {
    id: i64,
    name: String,
    location: String,
    capacity: i64,
    price: f64,
}

impl From<VenueRow> for Venue {
    fn from(row: VenueRow) -> Self {
        Venue::new(
            row.id.into(),
            row.name,
            row.location,
            row.capacity,
            Price::new(row.price),
        )
    }
}

#[async_trait]
impl VenueRepository for SqliteVenueRepository {
    async fn create(&self, venue: NewVenue) -> Result<Venue, DataAccessError> {
        let id = sqlx::query(
            "INSERT INTO venues (name, location, capacity, price) VALUES (?, ?, ?, ?)",
        )
        .bind(venue.name())
        .bind(venue.location())
        .bind(venue.capacity())
        .bind(venue.price().amount())
        .execute(&self.pool)
        .await?
        .last_insert_rowid();
        Ok(venue.into_venue(id.into()))
    }

    async fn find_all(&self) -> Result<Vec<Venue>, DataAccessError> {
        let rows = sqlx::query_as::<_, VenueRow>(
            "SELECT id, name, location, capacity, price FROM venues ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn count(&self) -> Result<u64, DataAccessError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM venues")
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
