use serde::{Deserialize, Serialize};

/// Items per upstream page, matching the `n=20` the client always requests.
pub const PAGE_SIZE: u32 = 20;

/// One video entry of the upstream list
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeedItem {
    pub title: String,
    pub url: String,
    pub time: String,
}

/// Envelope the upstream API wraps every response in
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeedPayload {
    pub data: FeedData,
}

/// One page of the video list, as reported by upstream
///
/// `page` is the 1-based page upstream believes it served; `total` is the
/// item count across all pages. Unknown upstream fields are ignored.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeedData {
    pub list: Vec<FeedItem>,
    pub page: u32,
    pub total: u32,
}

/// Page count for a feed of `total` items at the fixed page size
pub fn total_pages(total: u32) -> u32 {
    total.div_ceil(PAGE_SIZE)
}
