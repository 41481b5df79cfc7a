pub mod client;
pub mod error;
pub mod query;
pub mod region;
pub mod stats;
pub mod types;

pub use client::YpayClient;
pub use error::YpayError;
pub use query::{MerchantQuery, DEFAULT_PAGE_SIZE};
pub use region::{RegionScan, ScanEnd, ScanOptions, DEFAULT_MAX_PAGES};
pub use stats::{category_counts, filter_by_categories, CategoryCount, ALL_CATEGORIES};
pub use types::{MerchantPage, MerchantRecord, UNCATEGORIZED};
