//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Rating as "⭐ 4.2".
pub fn rating_label(rating: f64) -> String {
    format!("⭐ {:.1}", rating)
}

/// Coordinates with the precision the add form accepts.
pub fn coords(lat: f64, lon: f64) -> String {
    format!("{:.10}, {:.10}", lat, lon)
}

/// Cut `s` to at most `max` terminal columns, appending "…" when shortened.
pub fn truncate_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
