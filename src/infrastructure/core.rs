mod reservation;
mod venue;

pub use self::reservation::*;
pub use self::venue::*;
