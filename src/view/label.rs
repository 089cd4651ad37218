// src/view/label.rs
use crate::i18n::{keys, params, Params, Translate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCountLabel {
    NoFiles,
    LimitReached(usize),
    AndMore(usize),
    Count(usize),
}

/// The order of these checks matters: hitting the cap wins over "and more".
pub fn item_count_label(visible: usize, total: Option<usize>, has_more: bool, limit: usize) -> ItemCountLabel {
    if visible == 0 {
        return ItemCountLabel::NoFiles;
    }
    if visible >= limit {
        return ItemCountLabel::LimitReached(visible);
    }
    if has_more && total.map_or(true, |total| total > visible) {
        return ItemCountLabel::AndMore(visible);
    }
    match total {
        Some(total) if total != visible => ItemCountLabel::Count(total),
        _ => ItemCountLabel::Count(visible),
    }
}

impl ItemCountLabel {
    pub fn key(&self) -> &'static str {
        match self {
            ItemCountLabel::NoFiles => keys::NO_FILES,
            ItemCountLabel::LimitReached(_) => keys::LIMIT_REACHED,
            ItemCountLabel::AndMore(_) => keys::ITEMS_AND_MORE,
            ItemCountLabel::Count(_) => keys::ITEM_COUNT,
        }
    }

    pub fn count(&self) -> Option<usize> {
        match *self {
            ItemCountLabel::NoFiles => None,
            ItemCountLabel::LimitReached(n) | ItemCountLabel::AndMore(n) | ItemCountLabel::Count(n) => Some(n),
        }
    }

    pub fn render(&self, translator: &dyn Translate) -> String {
        let params = match self.count() {
            Some(count) => params([("count", count.to_string())]),
            None => Params::new(),
        };
        translator.t(self.key(), &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::KeyEcho;

    #[test]
    fn limit_dominates_and_more() {
        assert_eq!(item_count_label(10_000, None, true, 10_000), ItemCountLabel::LimitReached(10_000));
        assert_eq!(item_count_label(12_000, Some(50_000), true, 10_000), ItemCountLabel::LimitReached(12_000));
    }

    #[test]
    fn empty_wins_over_everything() {
        assert_eq!(item_count_label(0, Some(10), true, 0), ItemCountLabel::NoFiles);
    }

    #[test]
    fn and_more_needs_unknown_or_larger_total() {
        assert_eq!(item_count_label(50, None, true, 100), ItemCountLabel::AndMore(50));
        assert_eq!(item_count_label(50, Some(80), true, 100), ItemCountLabel::AndMore(50));
        assert_eq!(item_count_label(50, Some(50), true, 100), ItemCountLabel::Count(50));
    }

    #[test]
    fn known_total_is_preferred() {
        assert_eq!(item_count_label(50, Some(80), false, 100), ItemCountLabel::Count(80));
        assert_eq!(item_count_label(50, Some(20), true, 100), ItemCountLabel::Count(20));
        assert_eq!(item_count_label(7, None, false, 100), ItemCountLabel::Count(7));
    }

    #[test]
    fn render_passes_count() {
        assert_eq!(ItemCountLabel::AndMore(3).render(&KeyEcho), "fileBrowser.itemsAndMore(count=3)");
        assert_eq!(ItemCountLabel::NoFiles.render(&KeyEcho), "fileBrowser.noFiles");
    }
}
