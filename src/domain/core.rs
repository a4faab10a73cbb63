mod dashboard;
mod reservation;
mod venue;

use std::fmt::{self, Display};

use derive_more::{Deref, From};
use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

pub use self::dashboard::*;
pub use self::reservation::*;
pub use self::venue::*;

/// 料金の表示記号
pub const CURRENCY_SYMBOL: &str = "₱";

/// 料金 (1予約あたり)
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize, From, Deref)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.0.to_string();
        let (whole, fraction) = match raw.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (raw.as_str(), None),
        };
        match whole.parse::<i64>() {
            Ok(n) => write!(f, "{}{}", CURRENCY_SYMBOL, n.to_formatted_string(&Locale::en))?,
            Err(_) => write!(f, "{}{}", CURRENCY_SYMBOL, whole)?,
        }
        if let Some(fraction) = fraction {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display() {
        assert_eq!(format!("{}", Price::new(1000000.0)), "₱1,000,000");
        assert_eq!(format!("{}", Price::new(1500.5)), "₱1,500.5");
        assert_eq!(format!("{}", Price::new(0.0)), "₱0");
    }

    #[test]
    fn test_price_is_positive() {
        assert!(Price::new(0.01).is_positive());
        assert!(!Price::new(0.0).is_positive());
        assert!(!Price::new(-100.0).is_positive());
        assert!(!Price::new(f64::NAN).is_positive());
        assert!(!Price::new(f64::INFINITY).is_positive());
    }

    #[test]
    fn test_price_serialize() {
        assert_eq!(serde_json::to_string(&Price::new(100.0)).unwrap(), "100.0");
        assert_eq!(serde_json::from_str::<Price>("50").unwrap(), Price::new(50.0));
    }
}
