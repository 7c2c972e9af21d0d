pub mod handler;

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{http::models::VideoSummary, ui::theme::Theme};

/// One catalog row: truncated title plus a muted channel/views/date tail.
pub fn summary_line(video: &VideoSummary, theme: Theme, max_title_width: usize) -> Line<'static> {
    let mut spans = vec![Span::styled(
        truncate_to_width(&video.title, max_title_width),
        Style::default().fg(theme.text()),
    )];

    let mut meta = Vec::new();
    if let Some(channel) = &video.channel {
        meta.push(channel.name.clone());
    }
    meta.push(format!("{} views", video.view_count));
    if let Some(published_at) = &video.published_at {
        meta.push(published_at.clone());
    }
    spans.push(Span::styled(
        format!("  ·  {}", meta.join(" · ")),
        Style::default().fg(theme.muted()),
    ));

    Line::from(spans)
}

/// Clamp a string to a terminal display width, appending an ellipsis when
/// anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width + 1 > max_width {
            break;
        }
        width += char_width;
        out.push(c);
    }
    out.push('…');
    out
}
