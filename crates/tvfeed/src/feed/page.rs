use crate::prelude::{println, *};
use colored::Colorize;
use tvfeed_core::feed::{total_pages, FeedData};
use tvfeed_core::page::render_document;

use super::fetch_feed_page;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct PageOptions {
    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: u32,

    /// Output the full HTML document instead of text
    #[arg(long)]
    pub html: bool,

    /// Output the decoded upstream payload as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: PageOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching feed page {}...", options.page);
    }

    let client = reqwest::Client::new();
    let payload = fetch_feed_page(&client, options.page).await?;

    if options.json {
        let json = serde_json::to_string_pretty(&payload)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else if options.html {
        println!("{}", render_document(&payload.data));
    } else {
        print!("{}", format_page_text(&payload.data));
    }

    Ok(())
}

/// Colored terminal rendition of one feed page with navigation hints
fn format_page_text(feed: &FeedData) -> String {
    let mut result = String::new();
    let total_pages = total_pages(feed.total);

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "CCTV 新闻列表 (Page {} of {})",
            feed.page, total_pages
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if feed.list.is_empty() {
        result.push_str(&format!("\n{}\n", "No videos on this page.".yellow()));
    } else {
        for (idx, item) in feed.list.iter().enumerate() {
            result.push_str(&format!(
                "\n{} {}\n",
                format!("[{}]", idx + 1).yellow().bold(),
                item.title.white().bold()
            ));
            result.push_str(&format!(
                "    {}: {}\n",
                "URL".green(),
                item.url.cyan().underline()
            ));
            result.push_str(&format!(
                "    {}: {}\n",
                "Time".green(),
                item.time.bright_black()
            ));
        }
    }

    result.push_str(&format!(
        "\n{} {} {} {} ({} {})\n",
        "Showing page".bright_white(),
        feed.page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        total_pages.to_string().bright_cyan().bold(),
        feed.total.to_string().bright_cyan().bold(),
        "total videos".bright_white()
    ));

    result.push_str(&format!("\n{}:\n", "To navigate".bright_white().bold()));
    if feed.page < total_pages {
        result.push_str(&format!(
            "  {}: {}\n",
            "Next page".green(),
            format!("tvfeed feed page --page {}", feed.page + 1).cyan()
        ));
    }
    if feed.page > 1 {
        result.push_str(&format!(
            "  {}: {}\n",
            "Previous page".green(),
            format!("tvfeed feed page --page {}", feed.page - 1).cyan()
        ));
    }

    result.push_str(&format!("\n{}:\n", "To get HTML output".bright_white().bold()));
    result.push_str(&format!(
        "  {}\n",
        format!("tvfeed feed page --page {} --html", feed.page).cyan()
    ));

    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tvfeed_core::feed::FeedItem;

    fn create_test_item(title: &str) -> FeedItem {
        FeedItem {
            title: title.to_string(),
            url: format!("https://tv.example.com/{title}"),
            time: "2023-04-01 08:00:00".to_string(),
        }
    }

    fn create_test_feed(items: Vec<FeedItem>, page: u32, total: u32) -> FeedData {
        FeedData {
            list: items,
            page,
            total,
        }
    }

    #[test]
    fn test_format_page_text_basic() {
        let feed = create_test_feed(vec![create_test_item("Morning Briefing")], 1, 1);

        let formatted = format_page_text(&feed);

        assert!(formatted.contains("CCTV 新闻列表"));
        assert!(formatted.contains("Page 1 of 1"));
        assert!(formatted.contains("Morning Briefing"));
        assert!(formatted.contains("[1]"));
        assert!(formatted.contains("2023-04-01 08:00:00"));
    }

    #[test]
    fn test_format_page_text_numbers_rows_in_order() {
        let feed = create_test_feed(
            vec![
                create_test_item("First"),
                create_test_item("Second"),
                create_test_item("Third"),
            ],
            1,
            3,
        );

        let formatted = format_page_text(&feed);

        assert!(formatted.contains("[1]"));
        assert!(formatted.contains("[2]"));
        assert!(formatted.contains("[3]"));
        assert!(formatted.find("First").unwrap() < formatted.find("Second").unwrap());
        assert!(formatted.find("Second").unwrap() < formatted.find("Third").unwrap());
    }

    #[test]
    fn test_format_page_text_empty() {
        let feed = create_test_feed(vec![], 1, 0);

        let formatted = format_page_text(&feed);

        assert!(formatted.contains("No videos on this page."));
    }

    #[test]
    fn test_format_page_text_first_page_navigation() {
        let feed = create_test_feed(vec![create_test_item("Clip")], 1, 45);

        let formatted = format_page_text(&feed);

        assert!(formatted.contains("Page 1 of 3"));
        assert!(formatted.contains("tvfeed feed page --page 2"));
        assert!(!formatted.contains("Previous page"));
    }

    #[test]
    fn test_format_page_text_last_page_navigation() {
        let feed = create_test_feed(vec![create_test_item("Clip")], 3, 45);

        let formatted = format_page_text(&feed);

        assert!(!formatted.contains("Next page"));
        assert!(formatted.contains("Previous page"));
        assert!(formatted.contains("tvfeed feed page --page 2"));
    }

    #[test]
    fn test_format_page_text_middle_page_navigation() {
        let feed = create_test_feed(vec![create_test_item("Clip")], 2, 45);

        let formatted = format_page_text(&feed);

        assert!(formatted.contains("tvfeed feed page --page 3"));
        assert!(formatted.contains("tvfeed feed page --page 1"));
    }

    #[test]
    fn test_format_page_text_html_hint() {
        let feed = create_test_feed(vec![create_test_item("Clip")], 2, 45);

        let formatted = format_page_text(&feed);

        assert!(formatted.contains("tvfeed feed page --page 2 --html"));
    }
}
