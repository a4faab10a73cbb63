use serde::{Deserialize, Serialize};

use super::Price;

/// ダッシュボード集計
///
/// 売上は予約1件ごとに会場の料金を数える。同じ会場が3回予約されれば料金も3回加算される。
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_venues: u64,
    pub total_reservations: u64,
    pub total_revenue: Price,
}
