//! Pending-case aging.
//!
//! Enrichment attaches an aging bucket to every case. The bucket depends on
//! the instant the run happens, so `now` is always passed in explicitly.

pub mod bucket;
pub mod service;


pub use bucket::AgingBucket;
pub use service::{AgingService, EnrichedTransaction};
