//! Page selector shown under the user table.

use eframe::egui;

const NEIGHBOURS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Gap,
}

/// First page, last page and a window around `current`, with gaps between.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let low = current.saturating_sub(NEIGHBOURS).max(1);
    let high = (current + NEIGHBOURS).min(total);

    let mut items = Vec::new();
    if low > 1 {
        items.push(PageItem::Page(1));
        if low > 2 {
            items.push(PageItem::Gap);
        }
    }
    items.extend((low..=high).map(PageItem::Page));
    if high < total {
        if high + 1 < total {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Page(total));
    }
    items
}

/// Renders the selector and returns the page the user clicked, always within
/// `1..=total_pages` and never the current page.
pub fn show(ui: &mut egui::Ui, current_page: u32, total_pages: u32) -> Option<u32> {
    let total = total_pages.max(1);
    let mut clicked = None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(current_page > 1, egui::Button::new("« Anterior"))
            .clicked()
        {
            clicked = Some(current_page - 1);
        }

        for item in page_items(current_page, total) {
            match item {
                PageItem::Page(page) => {
                    let selected = page == current_page;
                    if ui.selectable_label(selected, page.to_string()).clicked() && !selected {
                        clicked = Some(page);
                    }
                }
                PageItem::Gap => {
                    ui.label("…");
                }
            }
        }

        if ui
            .add_enabled(current_page < total, egui::Button::new("Siguiente »"))
            .clicked()
        {
            clicked = Some(current_page + 1);
        }
    });

    clicked.filter(|page| (1..=total).contains(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Gap, Page};

    #[test]
    fn single_page() {
        assert_eq!(page_items(1, 1), vec![Page(1)]);
        assert_eq!(page_items(1, 0), vec![Page(1)]);
    }

    #[test]
    fn short_ranges_have_no_gaps() {
        assert_eq!(page_items(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_items(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn long_ranges_collapse_around_current() {
        assert_eq!(
            page_items(10, 20),
            vec![Page(1), Gap, Page(8), Page(9), Page(10), Page(11), Page(12), Gap, Page(20)]
        );
        assert_eq!(
            page_items(1, 20),
            vec![Page(1), Page(2), Page(3), Gap, Page(20)]
        );
        assert_eq!(
            page_items(19, 20),
            vec![Page(1), Gap, Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn adjacent_edge_page_is_not_a_gap() {
        assert_eq!(
            page_items(4, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]
        );
    }

    #[test]
    fn current_beyond_total_is_clamped() {
        assert_eq!(page_items(9, 2), vec![Page(1), Page(2)]);
    }
}
