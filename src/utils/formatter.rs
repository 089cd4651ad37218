// src/utils/formatter.rs
use crate::filesystem::Item;
use crate::i18n::{keys, Params, Translate};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn format_bytes(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} B", size)
    }
}

/// Directories have no meaningful size and show a dash.
pub fn format_size(item: &Item) -> String {
    if item.is_directory {
        "-".to_string()
    } else {
        format_bytes(item.size_bytes)
    }
}

pub fn format_updated(item: &Item, translator: &dyn Translate) -> String {
    match item.updated() {
        Some(dt) => dt.format(DATE_FORMAT).to_string(),
        None => {
            tracing::debug!(item = %item.id, raw = %item.updated_at, "cannot display updatedAt");
            translator.t(keys::INVALID_DATE, &Params::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::KeyEcho;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_directory_size_is_dash() {
        assert_eq!(format_size(&Item::directory("d", "docs")), "-");
        assert_eq!(format_size(&Item::file("f", "a").with_size(3)), "3 B");
    }

    #[test]
    fn test_format_updated() {
        let ok = Item::file("1", "a").with_updated_at("2024-03-01T10:05:00Z");
        assert_eq!(format_updated(&ok, &KeyEcho), "2024-03-01 10:05");
        let bad = Item::file("2", "b").with_updated_at("garbage");
        assert_eq!(format_updated(&bad, &KeyEcho), keys::INVALID_DATE);
    }
}
