pub mod clock;
pub mod detail_cache;

pub use clock::{Clock, ManualClock, SystemClock};
pub use detail_cache::{DetailCache, DEFAULT_TTL};
