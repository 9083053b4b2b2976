use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Placeholder printed for absent optional values in tables and CSV.
pub const NOT_AVAILABLE: &str = "N/A";

/// Value or `N/A`
pub fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

/// Truncate text to a display width, ending with "..." when cut
///
/// # Examples
/// ```
/// use donelog_core::utils::text::truncate_text;
/// assert_eq!(truncate_text("Refactor billing module", 12), "Refactor ...");
/// assert_eq!(truncate_text("short", 12), "short");
/// ```
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let ellipsis_width = ELLIPSIS.width();
    if max_width <= ellipsis_width {
        return clip_text(text, max_width);
    }

    let mut result = take_width(text, max_width - ellipsis_width);
    result.push_str(ELLIPSIS);
    result
}

/// Cut text to a display width without any marker
pub fn clip_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    take_width(text, max_width)
}

fn take_width(text: &str, target_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result
}
