//! Region scan: walks every page of the unfiltered merchant list and keeps the
//! records whose address contains a region name.
//!
//! A failed or empty page ends the scan quietly. Callers get whatever was
//! accumulated up to that point; [`ScanEnd`] records why the loop stopped so it
//! can be logged, but it is never turned into an error.

use ypay_core::AppConfig;

use crate::client::YpayClient;
use crate::query::{MerchantQuery, DEFAULT_PAGE_SIZE};
use crate::types::MerchantRecord;

/// Upper bound on pages per scan when the caller does not set one. Guards
/// against an upstream `totalCount` that never lets the loop finish.
pub const DEFAULT_MAX_PAGES: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub page_size: u32,
    pub max_pages: u32,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl ScanOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            page_size: config.page_size,
            max_pages: config.max_pages,
        }
    }
}

/// Why a region scan stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEnd {
    /// `page * page_size` reached the declared total.
    Exhausted,
    /// A page came back with no records.
    EmptyPage,
    /// A request failed; holds the error message.
    Failed(String),
    /// The page cap was hit before the total was covered.
    PageCap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionScan {
    pub records: Vec<MerchantRecord>,
    /// Pages that returned successfully.
    pub pages_fetched: u32,
    pub end: ScanEnd,
}

impl YpayClient {
    /// Collects every merchant whose address contains `region`.
    ///
    /// Pages are fetched one after another starting at page 1. Matching is a
    /// raw, case-sensitive substring test; records keep their arrival order
    /// and are not deduplicated.
    pub async fn scan_region(&self, region: &str, options: ScanOptions) -> RegionScan {
        let mut records = Vec::new();
        let mut page_no = 1u32;
        let mut pages_fetched = 0u32;

        let end = loop {
            if pages_fetched >= options.max_pages {
                tracing::warn!(
                    region,
                    max_pages = options.max_pages,
                    "region scan hit page cap"
                );
                break ScanEnd::PageCap;
            }

            let query = MerchantQuery::page(page_no).with_rows(options.page_size);
            let page = match self.fetch_page(&query).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(region, page_no, error = %e, "region scan stopped on failed page");
                    break ScanEnd::Failed(e.to_string());
                }
            };
            pages_fetched += 1;

            if page.records.is_empty() {
                break ScanEnd::EmptyPage;
            }

            let before = records.len();
            records.extend(
                page.records
                    .into_iter()
                    .filter(|r| r.address_contains(region)),
            );
            tracing::debug!(
                region,
                page_no,
                matched = records.len() - before,
                total_count = page.total_count,
                "scanned merchant page"
            );

            if u64::from(page_no) * u64::from(options.page_size) >= page.total_count {
                break ScanEnd::Exhausted;
            }

            let Some(next) = page_no.checked_add(1) else {
                break ScanEnd::PageCap;
            };
            page_no = next;
        };

        tracing::info!(
            region,
            pages_fetched,
            matched = records.len(),
            end = ?end,
            "region scan finished"
        );

        RegionScan {
            records,
            pages_fetched,
            end,
        }
    }

    /// Records-only form of [`YpayClient::scan_region`]. An empty result means
    /// either no merchant matched or the first page failed.
    pub async fn fetch_by_region(&self, region: &str, options: ScanOptions) -> Vec<MerchantRecord> {
        self.scan_region(region, options).await.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_upstream_page_size() {
        let options = ScanOptions::default();
        assert_eq!(options.page_size, 1000);
        assert_eq!(options.max_pages, 500);
    }
}
