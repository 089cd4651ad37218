// src/view/selection.rs
use crate::filesystem::Item;
use std::collections::HashSet;

/// Pointer modifiers relevant to selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false, ctrl: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true, ctrl: false };
    pub const CTRL: Modifiers = Modifiers { shift: false, ctrl: true };
}

/// Selected ids plus the range pivot. Indices always refer to the sorted
/// list the caller passes in alongside them.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: HashSet<String>,
    anchor: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Option<usize>) {
        self.anchor = anchor;
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Click on `items[index]`. Range beats toggle beats plain click.
    /// Returns false only when `index` is out of range.
    pub fn select(&mut self, items: &[Item], index: usize, modifiers: Modifiers) -> bool {
        let Some(item) = items.get(index) else {
            return false;
        };

        if modifiers.shift {
            if let Some(anchor) = self.anchor {
                self.select_range(items, anchor, index);
                return true;
            }
        }

        if modifiers.ctrl {
            if !self.selected.remove(&item.id) {
                self.selected.insert(item.id.clone());
            }
        } else if self.selected.len() == 1 && self.selected.contains(&item.id) {
            self.selected.clear();
        } else {
            self.replace_with(&item.id);
        }
        self.anchor = Some(index);
        true
    }

    /// Replaces the selection with the closed interval between `anchor` and
    /// `index`, disabled rows included. A stale anchor is clamped into the
    /// current list.
    pub fn select_range(&mut self, items: &[Item], anchor: usize, index: usize) {
        self.selected.clear();
        if items.is_empty() {
            return;
        }
        let last = items.len() - 1;
        let (a, b) = (anchor.min(last), index.min(last));
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.selected.extend(items[lo..=hi].iter().map(|item| item.id.clone()));
    }

    pub fn replace_with(&mut self, id: &str) {
        self.selected.clear();
        self.selected.insert(id.to_string());
    }

    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.selected = ids.into_iter().collect();
    }

    /// Returns whether anything was selected before.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.selected.is_empty();
        self.selected.clear();
        self.anchor = None;
        had_any
    }

    /// Selected items in list order.
    pub fn materialize(&self, items: &[Item]) -> Vec<Item> {
        items.iter().filter(|item| self.selected.contains(&item.id)).cloned().collect()
    }

    /// Drops ids that no longer exist. Returns true when the membership shrank.
    pub fn prune(&mut self, items: &[Item]) -> bool {
        let live: HashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();
        let before = self.selected.len();
        self.selected.retain(|id| live.contains(id.as_str()));
        self.selected.len() != before
    }

    /// Moves the anchor to wherever its item landed after a reorder.
    pub fn remap_anchor(&mut self, old_order: &[Item], new_order: &[Item]) {
        self.anchor = remap_index(self.anchor, old_order, new_order);
    }
}

/// Follows the item at `index` in `old_order` into `new_order` by id.
pub fn remap_index(index: Option<usize>, old_order: &[Item], new_order: &[Item]) -> Option<usize> {
    let id = &old_order.get(index?)?.id;
    new_order.iter().position(|item| &item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<Item> {
        (0..n).map(|i| Item::file(format!("id{}", i), format!("f{}", i))).collect()
    }

    fn ids(sel: &Selection, list: &[Item]) -> Vec<String> {
        sel.materialize(list).into_iter().map(|i| i.id).collect()
    }

    #[test]
    fn plain_click_replaces_then_deselects() {
        let list = items(3);
        let mut sel = Selection::new();
        sel.select(&list, 0, Modifiers::NONE);
        assert_eq!(ids(&sel, &list), vec!["id0"]);
        sel.select(&list, 2, Modifiers::NONE);
        assert_eq!(ids(&sel, &list), vec!["id2"]);
        sel.select(&list, 2, Modifiers::NONE);
        assert!(sel.is_empty());
        assert_eq!(sel.anchor(), Some(2));
    }

    #[test]
    fn plain_click_on_member_of_multi_selection_narrows() {
        let list = items(3);
        let mut sel = Selection::new();
        sel.select_all(list.iter().map(|i| i.id.clone()));
        sel.select(&list, 1, Modifiers::NONE);
        assert_eq!(ids(&sel, &list), vec!["id1"]);
    }

    #[test]
    fn shift_range_in_either_direction() {
        let list = items(6);
        for (anchor, index) in [(1usize, 4usize), (4, 1), (3, 3)] {
            let mut sel = Selection::new();
            sel.select(&list, anchor, Modifiers::NONE);
            sel.select(&list, index, Modifiers::SHIFT);
            let (lo, hi) = (anchor.min(index), anchor.max(index));
            let expected: Vec<String> = (lo..=hi).map(|i| format!("id{}", i)).collect();
            assert_eq!(ids(&sel, &list), expected);
            assert_eq!(sel.anchor(), Some(anchor));
        }
    }

    #[test]
    fn repeated_shift_clicks_pivot_on_same_anchor() {
        let list = items(6);
        let mut sel = Selection::new();
        sel.select(&list, 2, Modifiers::NONE);
        sel.select(&list, 5, Modifiers::SHIFT);
        sel.select(&list, 0, Modifiers::SHIFT);
        assert_eq!(ids(&sel, &list), vec!["id0", "id1", "id2"]);
    }

    #[test]
    fn range_is_not_additive() {
        let list = items(6);
        let mut sel = Selection::new();
        sel.select(&list, 0, Modifiers::CTRL);
        sel.select(&list, 5, Modifiers::CTRL);
        sel.select(&list, 3, Modifiers::SHIFT);
        assert_eq!(ids(&sel, &list), vec!["id3", "id4", "id5"]);
    }

    #[test]
    fn shift_without_anchor_acts_like_plain_click() {
        let list = items(3);
        let mut sel = Selection::new();
        sel.select(&list, 1, Modifiers::SHIFT);
        assert_eq!(ids(&sel, &list), vec!["id1"]);
        assert_eq!(sel.anchor(), Some(1));
    }

    #[test]
    fn ctrl_toggles_only_target() {
        let list = items(4);
        let mut sel = Selection::new();
        sel.select(&list, 0, Modifiers::NONE);
        sel.select(&list, 2, Modifiers::CTRL);
        assert_eq!(ids(&sel, &list), vec!["id0", "id2"]);
        sel.select(&list, 0, Modifiers::CTRL);
        assert_eq!(ids(&sel, &list), vec!["id2"]);
        assert_eq!(sel.anchor(), Some(0));
    }

    #[test]
    fn stale_anchor_is_clamped() {
        let list = items(3);
        let mut sel = Selection::new();
        sel.set_anchor(Some(10));
        sel.select(&list, 1, Modifiers::SHIFT);
        assert_eq!(ids(&sel, &list), vec!["id1", "id2"]);
    }

    #[test]
    fn range_includes_disabled_rows_inside_interval() {
        let mut list = items(3);
        list[1] = list[1].clone().disabled();
        let mut sel = Selection::new();
        sel.select(&list, 0, Modifiers::NONE);
        sel.select(&list, 2, Modifiers::SHIFT);
        assert_eq!(ids(&sel, &list), vec!["id0", "id1", "id2"]);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let list = items(2);
        let mut sel = Selection::new();
        assert!(!sel.select(&list, 9, Modifiers::NONE));
        assert!(sel.is_empty());
    }

    #[test]
    fn prune_drops_missing_ids_only() {
        let list = items(3);
        let mut sel = Selection::new();
        sel.select_all(list.iter().map(|i| i.id.clone()));
        sel.set_anchor(Some(1));
        let shrunk = &list[..2];
        assert!(sel.prune(shrunk));
        assert_eq!(sel.len(), 2);
        assert_eq!(sel.anchor(), Some(1));
        assert!(!sel.prune(shrunk));
    }

    #[test]
    fn remap_follows_item() {
        let list = items(3);
        let reversed: Vec<Item> = list.iter().rev().cloned().collect();
        assert_eq!(remap_index(Some(0), &list, &reversed), Some(2));
        assert_eq!(remap_index(None, &list, &reversed), None);
        assert_eq!(remap_index(Some(7), &list, &reversed), None);
    }
}
