//! Small drawing helpers shared by the pages

use super::layout::{centered_row, text_width};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Fill `area` with a background color
pub fn fill(frame: &mut Frame, area: Rect, bg: Color) {
    frame.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(bg)),
        area,
    );
}

/// Draw one centered line at row `y`, clipped to `area`
pub fn centered_text(frame: &mut Frame, area: Rect, y: u16, text: &str, style: Style) {
    if y < area.y || y >= area.y + area.height {
        return;
    }
    let rect = centered_row(area, text_width(text), y);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text.to_string(), style)))
            .alignment(Alignment::Center),
        rect,
    );
}

/// Draw a pill button centered at row `y`; returns its clickable area
pub fn button(frame: &mut Frame, area: Rect, y: u16, label: &str, style: Style) -> Rect {
    let text = format!(" {} ", label);
    if y < area.y || y >= area.y + area.height {
        return Rect::default();
    }
    let rect = centered_row(area, text_width(&text) + 2, y);
    let line = Line::from(vec![
        Span::styled("(", style.remove_modifier(Modifier::BOLD)),
        Span::styled(text, style),
        Span::styled(")", style.remove_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(line), rect);
    rect
}

/// Draw a glyph at an absolute cell, skipped when it would leave `area`
pub fn glyph(frame: &mut Frame, area: Rect, x: u16, y: u16, text: &str, style: Style) {
    let width = text_width(text);
    if x < area.x || y < area.y || y >= area.y + area.height {
        return;
    }
    if x + width > area.x + area.width {
        return;
    }
    frame.render_widget(
        Paragraph::new(Span::styled(text.to_string(), style)),
        Rect::new(x, y, width, 1),
    );
}

/// Word-wrap `text` to lines of at most `width` columns
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if text_width(&candidate) > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap("You taught us how to never give up", 12);
        assert_eq!(lines, vec!["You taught", "us how to", "never give", "up"]);
    }

    #[test]
    fn test_wrap_keeps_long_word_whole() {
        let lines = wrap("supercalifragilistic yes", 5);
        assert_eq!(lines, vec!["supercalifragilistic", "yes"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap("   ", 10).is_empty());
    }
}
