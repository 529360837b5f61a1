//! HTML document assembly for one feed page.
//!
//! Upstream-supplied text is escaped at every embedding site; the feed is
//! not trusted to be HTML-clean. Everything else on the page is a fixed
//! literal.

use crate::feed::{total_pages, FeedData, FeedItem};
use crate::pagination::render_controls;

/// Page chrome pulled from public CDNs
const CDN_INCLUDES: &str = r#"<link rel="stylesheet" href="https://stackpath.bootstrapcdn.com/bootstrap/4.5.2/css/bootstrap.min.css">
    <script src="https://code.jquery.com/jquery-3.5.1.slim.min.js"></script>
    <script src="https://stackpath.bootstrapcdn.com/bootstrap/4.5.2/js/bootstrap.bundle.min.js"></script>
    <link rel="stylesheet" href="https://use.fontawesome.com/releases/v5.15.3/css/all.css">"#;

const CUSTOM_STYLE: &str = r#"<style>
      body {
        background-color: #f0f0f0;
      }
      .container {
        max-width: 800px;
        margin-top: 20px;
      }
      .list-group-item {
        color: #333;
      }
      .list-group-item:hover {
        color: #fff;
        background-color: #007bff;
      }
      .pagination {
        justify-content: center;
      }
      .page-link {
        color: #007bff;
      }
      .page-link:hover {
        color: #fff;
        background-color: #007bff;
        border-color: #007bff;
      }
      .page-item.active .page-link {
        color: #fff;
        background-color: #007bff;
        border-color: #007bff;
      }
    </style>"#;

/// One list row: title anchor plus trailing time label
pub fn render_item(item: &FeedItem) -> String {
    format!(
        r#"<div class="d-flex w-100 justify-content-between"><a href="{url}" class="list-group-item list-group-item-action">{title}</a><small>{time}</small></div>"#,
        url = html_escape::encode_double_quoted_attribute(&item.url),
        title = html_escape::encode_text(&item.title),
        time = html_escape::encode_text(&item.time),
    )
}

/// Rows for the whole list, in upstream order
pub fn render_list(items: &[FeedItem]) -> String {
    items.iter().map(render_item).collect()
}

/// Complete HTML document for one feed page.
///
/// The current page and total page count come straight from the payload;
/// the pagination controls are derived from them on every render.
pub fn render_document(feed: &FeedData) -> String {
    let rows = render_list(&feed.list);
    let pagination = render_controls(feed.page, total_pages(feed.total));

    format!(
        r#"<html>
  <head>
    <title>采集网站</title>
    {CDN_INCLUDES}
    {CUSTOM_STYLE}
  </head>
  <body>
    <div class="container">
      <h1 class="text-center"><i class="fas fa-newspaper"></i> 新闻列表</h1>
      <div class="list-group">{rows}</div>
      <nav>{pagination}</nav>
    </div>
  </body>
</html>
"#
    )
}
