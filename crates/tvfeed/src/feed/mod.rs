use crate::prelude::{println, *};

pub mod page;

// Re-export domain types from core
pub use tvfeed_core::feed::{FeedData, FeedItem, FeedPayload};

/// Fixed upstream endpoint: the CCTV news column, 20 items per page,
/// newest first. The only request-time variable is the page number.
const FEED_API_BASE: &str = "https://api.cntv.cn/NewVideo/getVideoListByColumn?id=TOPC1451558976694518&n=20&sort=desc&mode=0&serviceId=tvcctv";

#[derive(Debug, clap::Parser)]
#[command(name = "feed")]
#[command(about = "Video feed operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Fetch one feed page and print it
    #[clap(name = "page")]
    Page(page::PageOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Feed API Base: {}", FEED_API_BASE);
        println!();
    }

    match app.command {
        Commands::Page(options) => page::run(options, global).await,
    }
}

pub fn feed_url(page: u32) -> String {
    format!("{FEED_API_BASE}&p={page}")
}

/// One upstream round trip: fetch `page` of the feed and decode the body.
///
/// The body is read as text and parsed separately so a non-JSON response
/// surfaces as a decode fault rather than a transport one.
pub async fn fetch_feed_page(
    client: &reqwest::Client,
    page: u32,
) -> Result<FeedPayload, FeedError> {
    let url = feed_url(page);
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| FeedError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FeedError::UpstreamStatus(response.status().as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FeedError::Network(e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| FeedError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_url_appends_page() {
        let url = feed_url(3);
        assert!(url.starts_with("https://api.cntv.cn/NewVideo/getVideoListByColumn?"));
        assert!(url.ends_with("&p=3"));
    }

    #[test]
    fn test_feed_url_keeps_fixed_parameters() {
        let url = feed_url(1);
        assert!(url.contains("id=TOPC1451558976694518"));
        assert!(url.contains("n=20"));
        assert!(url.contains("sort=desc"));
        assert!(url.contains("mode=0"));
        assert!(url.contains("serviceId=tvcctv"));
    }
}
