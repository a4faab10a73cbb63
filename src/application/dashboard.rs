use crate::domain::core::{ReservationRepository, Summary, VenueRepository};

use super::{ReservationService, ServiceError, VenueService};

/// ダッシュボードサービス
#[derive(Clone, Debug)]
pub struct DashboardService<V, R> {
    venues: VenueService<V>,
    reservations: ReservationService<R>,
}

impl<V, R> DashboardService<V, R>
where
    V: VenueRepository,
    R: ReservationRepository,
{
    pub fn new(venues: VenueService<V>, reservations: ReservationService<R>) -> Self {
        Self {
            venues,
            reservations,
        }
    }

    /// 会場数・予約数・売上を集計する
    pub async fn get_summary(&self) -> Result<Summary, ServiceError> {
        Ok(Summary {
            total_venues: self.venues.count_venues().await?,
            total_reservations: self.reservations.count_reservations().await?,
            total_revenue: self.reservations.total_revenue().await?,
        })
    }
}
