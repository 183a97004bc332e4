//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Screen areas for one page
pub struct PageLayout {
    /// Page indicator dots, top-right
    pub indicators: Option<Rect>,
    pub content: Rect,
    /// Back / counter / Next bar
    pub nav: Option<Rect>,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Split the screen into indicator row, page content and navigation bar
///
/// The welcome page has no navigation chrome.
pub fn calculate_page_layout(area: Rect, show_chrome: bool) -> PageLayout {
    if !show_chrome {
        return PageLayout {
            indicators: None,
            content: area,
            nav: None,
        };
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    PageLayout {
        indicators: Some(chunks[0]),
        content: chunks[1],
        nav: Some(chunks[2]),
    }
}

/// Display width of a string in terminal columns
pub fn text_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16
}

/// One-row rect of `width` columns centered horizontally in `area` at row `y`
pub fn centered_row(area: Rect, width: u16, y: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, y, width, 1)
}

/// Whether a terminal cell falls inside `rect`
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Apply a signed offset, keeping the result inside `[min, max]`
pub fn offset_within(base: u16, offset: i16, min: u16, max: u16) -> u16 {
    let moved = base as i32 + offset as i32;
    moved.clamp(min as i32, max.max(min) as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_has_no_chrome() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = calculate_page_layout(area, false);
        assert_eq!(layout.content, area);
        assert!(layout.nav.is_none() && layout.indicators.is_none());
    }

    #[test]
    fn test_chrome_rows() {
        let layout = calculate_page_layout(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.indicators.unwrap().height, 1);
        assert_eq!(layout.nav.unwrap().height, 3);
        assert_eq!(layout.content.height, 20);
    }

    #[test]
    fn test_emoji_width() {
        assert_eq!(text_width("Hi 🎉"), 5);
    }

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(10, 5, 4, 2);
        assert!(contains(rect, 10, 5));
        assert!(contains(rect, 13, 6));
        assert!(!contains(rect, 14, 5));
        assert!(!contains(rect, 10, 7));
    }

    #[test]
    fn test_offset_within_clamps() {
        assert_eq!(offset_within(2, -5, 0, 10), 0);
        assert_eq!(offset_within(8, 5, 0, 10), 10);
        assert_eq!(offset_within(5, 1, 0, 10), 6);
    }
}
