// src/view/sort.rs
use crate::filesystem::Item;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Name,
    UpdatedAt,
    Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        SortConfig { key, direction }
    }

    /// Header click: same column flips, another column starts ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            SortConfig { key, direction: self.direction.flipped() }
        } else {
            SortConfig { key, direction: SortDirection::Asc }
        }
    }
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Text(String),
    Number(i64),
}

fn sort_value(item: &Item, key: SortKey) -> SortValue {
    match key {
        SortKey::Name => SortValue::Text(item.name.to_lowercase()),
        SortKey::UpdatedAt => SortValue::Number(item.updated_millis()),
        SortKey::Size => SortValue::Number(item.effective_size().min(i64::MAX as u64) as i64),
    }
}

/// Returns a sorted copy. Ties keep input order regardless of direction.
/// Keys are computed once per item, so a bad date is reported once per pass.
pub fn sorted(items: &[Item], config: SortConfig) -> Vec<Item> {
    let mut keyed: Vec<(SortValue, usize)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (sort_value(item, config.key), index))
        .collect();
    keyed.sort_by(|(va, ia), (vb, ib)| {
        let ord = match config.direction {
            SortDirection::Asc => va.cmp(vb),
            SortDirection::Desc => vb.cmp(va),
        };
        ord.then(ia.cmp(ib))
    });
    keyed.into_iter().map(|(_, index)| items[index].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let items = vec![Item::file("1", "b"), Item::file("2", "A")];
        let out = sorted(&items, SortConfig::default());
        assert_eq!(names(&out), vec!["A", "b"]);
        assert_eq!(names(&items), vec!["b", "A"]);
    }

    #[test]
    fn test_stable_in_both_directions() {
        let items = vec![
            Item::file("1", "x").with_size(5),
            Item::file("2", "y").with_size(1),
            Item::file("3", "z").with_size(5),
            Item::file("4", "w").with_size(1),
        ];
        let asc = sorted(&items, SortConfig::new(SortKey::Size, SortDirection::Asc));
        assert_eq!(names(&asc), vec!["y", "w", "x", "z"]);
        let desc = sorted(&items, SortConfig::new(SortKey::Size, SortDirection::Desc));
        assert_eq!(names(&desc), vec!["x", "z", "y", "w"]);
    }

    #[test]
    fn test_equal_names_keep_order() {
        let items = vec![Item::file("1", "Same"), Item::file("2", "same"), Item::file("3", "SAME")];
        let out = sorted(&items, SortConfig::new(SortKey::Name, SortDirection::Desc));
        let ids: Vec<&str> = out.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_updated_at_with_invalid_dates() {
        let items = vec![
            Item::file("1", "new").with_updated_at("2024-05-01T00:00:00Z"),
            Item::file("2", "broken").with_updated_at("yesterday-ish"),
            Item::file("3", "old").with_updated_at("2020-01-01"),
        ];
        let out = sorted(&items, SortConfig::new(SortKey::UpdatedAt, SortDirection::Asc));
        assert_eq!(names(&out), vec!["broken", "old", "new"]);
    }

    #[test]
    fn test_directories_sort_as_zero_size() {
        let items = vec![Item::file("1", "f").with_size(10), Item::directory("2", "d").with_size(999)];
        let out = sorted(&items, SortConfig::new(SortKey::Size, SortDirection::Asc));
        assert_eq!(names(&out), vec!["d", "f"]);
    }

    #[test]
    fn test_toggle() {
        let cfg = SortConfig::default();
        let flipped = cfg.toggle(SortKey::Name);
        assert_eq!(flipped.direction, SortDirection::Desc);
        let switched = flipped.toggle(SortKey::Size);
        assert_eq!(switched, SortConfig::new(SortKey::Size, SortDirection::Asc));
    }
}
