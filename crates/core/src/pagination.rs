//! Sliding-window pagination controls.
//!
//! The control list always carries first/previous/next/last links around a
//! fixed-width window of numbered buttons, with disabled ellipsis markers
//! standing in for the truncated ranges on either side. A feed that fits on
//! one page gets no controls at all.

/// Numbered buttons visible in the window
pub const MAX_VISIBLE_BUTTONS: u32 = 5;

/// One slot of the numbered window
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum WindowSlot {
    /// Non-clickable marker for a truncated page range
    Gap,
    /// A numbered button; `active` marks the current page
    Page { number: u32, active: bool },
}

/// Window bounds around `current`, clipped to `[1, total]`.
///
/// The window anchors two pages before the current one and never
/// back-shifts, so it shrinks below its full width near the last page.
/// The arithmetic is total: a `current` past `total` yields an inverted
/// (empty) range rather than wrapping.
pub fn window_bounds(current: u32, total: u32) -> (u32, u32) {
    let start = current.saturating_sub(MAX_VISIBLE_BUTTONS / 2).max(1);
    let end = start.saturating_add(MAX_VISIBLE_BUTTONS - 1).min(total);
    (start, end)
}

/// Ordered slots for the numbered window, gap markers included.
pub fn build_window(current: u32, total: u32) -> Vec<WindowSlot> {
    let (start, end) = window_bounds(current, total);
    let mut slots = Vec::new();

    if start > 1 {
        slots.push(WindowSlot::Gap);
    }

    for number in start..=end {
        slots.push(WindowSlot::Page {
            number,
            active: number == current,
        });
    }

    if end < total {
        slots.push(WindowSlot::Gap);
    }

    slots
}

const GAP_ITEM: &str = r#"<li class="page-item disabled"><span class="page-link">...</span></li>"#;

fn page_link(page: u32, label: &str) -> String {
    format!(r#"<li class="page-item"><a class="page-link" href="?page={page}">{label}</a></li>"#)
}

fn active_page(page: u32) -> String {
    format!(r#"<li class="page-item active"><span class="page-link">{page}</span></li>"#)
}

/// Bootstrap pagination control list for `(current, total)`.
///
/// A `total` of 0 or 1 produces the empty `<ul>`; that guard also
/// suppresses the otherwise-unconditional first/last links.
pub fn render_controls(current: u32, total: u32) -> String {
    let mut html = String::from(r#"<ul class="pagination">"#);

    if total > 1 {
        html.push_str(&page_link(1, "首页"));
        if current > 1 {
            html.push_str(&page_link(current - 1, "上一页"));
        }

        for slot in build_window(current, total) {
            match slot {
                WindowSlot::Gap => html.push_str(GAP_ITEM),
                WindowSlot::Page { number, active: true } => html.push_str(&active_page(number)),
                WindowSlot::Page { number, active: false } => {
                    html.push_str(&page_link(number, &number.to_string()))
                }
            }
        }

        if current < total {
            html.push_str(&page_link(current + 1, "下一页"));
        }
        html.push_str(&page_link(total, "尾页"));
    }

    html.push_str("</ul>");
    html
}
