//! 会場・予約・ダッシュボードのサービス
//!
//! リクエストの入力はJSONの値をそのまま受け取り、ここで必須チェックと型変換を行う。
//! 必須チェックは「値が偽とみなされるか」で判定するため、`0` や `""` も未入力として扱う。

mod dashboard;
mod reservation;
mod venue;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{
    core::{ReservationError, VenueError},
    DataAccessError,
};

pub use self::dashboard::*;
pub use self::reservation::*;
pub use self::venue::*;

/// 入力エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid value for field `{0}`")]
    InvalidField(&'static str),
    #[error(transparent)]
    Venue(#[from] VenueError),
    #[error(transparent)]
    Reservation(#[from] ReservationError),
}

/// サービスエラー
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] DataAccessError),
}

impl From<VenueError> for ServiceError {
    fn from(value: VenueError) -> Self {
        Self::Validation(value.into())
    }
}

impl From<ReservationError> for ServiceError {
    fn from(value: ReservationError) -> Self {
        Self::Validation(value.into())
    }
}

/// 型の決まっていない入力フィールド
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Field(Option<Value>);

impl Field {
    /// 値が真とみなされるか
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    fn text(&self, name: &'static str) -> Result<String, ValidationError> {
        match &self.0 {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            _ => Err(ValidationError::InvalidField(name)),
        }
    }

    fn integer(&self, name: &'static str) -> Result<i64, ValidationError> {
        let invalid = || ValidationError::InvalidField(name);
        match &self.0 {
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => Ok(i),
                None => n.as_f64().and_then(integral).ok_or_else(invalid),
            },
            Some(Value::String(s)) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
                    .ok_or_else(invalid)
            }
            _ => Err(invalid()),
        }
    }

    fn number(&self, name: &'static str) -> Result<f64, ValidationError> {
        let parsed = match &self.0 {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed
            .filter(|f| f.is_finite())
            .ok_or(ValidationError::InvalidField(name))
    }
}

fn integral(f: f64) -> Option<i64> {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// 全てのフィールドが真とみなされることを確認する
fn require(fields: &[&Field]) -> Result<(), ValidationError> {
    match fields.iter().all(|field| field.is_truthy()) {
        true => Ok(()),
        false => Err(ValidationError::MissingFields),
    }
}
