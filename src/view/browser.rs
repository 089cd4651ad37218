// src/view/browser.rs
use super::actions::{Action, AddAction, AddMenu};
use super::callbacks::Callbacks;
use super::drag::{DragEvent, DragOverlay, Transition};
use super::filter::DateFilter;
use super::keyboard::{self, FocusTarget, KeyCommand, KeyInput};
use super::label::{item_count_label, ItemCountLabel};
use super::listener::{Listener, ListenerRegistry};
use super::path::{self, PathSegment};
use super::selection::{remap_index, Modifiers, Selection};
use super::sort::{self, SortConfig, SortKey};
use super::EventOutcome;
use crate::config::{HeightMode, Pagination, ViewConfig};
use crate::filesystem::Item;
use crate::i18n::{keys, KeyEcho, Params, Translate};

/// Owns every piece of interaction state for one mounted listing.
///
/// The host calls [`FileBrowser::set_items`] on each render with a fresh
/// snapshot, feeds pointer, key and drag events in, and receives intents
/// through [`Callbacks`]. Indices passed in always refer to
/// [`FileBrowser::sorted_items`].
pub struct FileBrowser {
    config: ViewConfig,
    translator: Box<dyn Translate>,
    callbacks: Callbacks,
    items: Vec<Item>,
    sorted: Vec<Item>,
    current_path: String,
    pagination: Pagination,
    sort: SortConfig,
    date_filter: DateFilter,
    selection: Selection,
    active: Option<usize>,
    hovered: Option<usize>,
    drag: DragOverlay,
    focus: FocusTarget,
    listeners: ListenerRegistry,
    add_menu: AddMenu,
}

impl FileBrowser {
    pub fn new(config: ViewConfig, callbacks: Callbacks) -> Self {
        FileBrowser {
            sort: config.initial_sort,
            add_menu: AddMenu::new(config.show_upload),
            config,
            translator: Box::new(KeyEcho),
            callbacks,
            items: Vec::new(),
            sorted: Vec::new(),
            current_path: String::new(),
            pagination: Pagination::default(),
            date_filter: DateFilter::default(),
            selection: Selection::new(),
            active: None,
            hovered: None,
            drag: DragOverlay::new(),
            focus: FocusTarget::default(),
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn with_translator(mut self, translator: impl Translate + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    // ---- render pass ----------------------------------------------------

    /// Takes the collaborator's latest snapshot. A different path resets all
    /// interaction state. Otherwise positions follow their items by id, and
    /// a different id sequence also prunes the selection to surviving ids.
    pub fn set_items(&mut self, items: Vec<Item>, current_path: impl Into<String>) {
        let current_path = current_path.into();
        let path_changed = current_path != self.current_path;
        let shape_changed = !same_ids(&self.items, &items);

        self.items = items;
        self.current_path = current_path;
        let previous = std::mem::replace(&mut self.sorted, sort::sorted(&self.items, self.sort));

        if path_changed {
            self.reset_interaction();
        } else if shape_changed {
            tracing::debug!(count = self.items.len(), "item collection changed shape");
            self.follow_reorder(&previous);
            if self.selection.prune(&self.sorted) {
                self.notify_selection();
            }
        } else {
            self.follow_reorder(&previous);
        }
    }

    pub fn set_pagination(&mut self, pagination: Pagination) {
        self.pagination = pagination;
    }

    fn follow_reorder(&mut self, previous: &[Item]) {
        self.selection.remap_anchor(previous, &self.sorted);
        self.active = remap_index(self.active, previous, &self.sorted);
        self.hovered = remap_index(self.hovered, previous, &self.sorted);
    }

    fn apply_sort(&mut self, config: SortConfig) {
        self.sort = config;
        let previous = std::mem::replace(&mut self.sorted, sort::sorted(&self.items, config));
        self.follow_reorder(&previous);
    }

    fn reset_interaction(&mut self) {
        if self.selection.clear() {
            self.notify_selection();
        }
        self.active = None;
        self.hovered = None;
    }

    fn notify_selection(&mut self) {
        let items = self.selection.materialize(&self.sorted);
        self.callbacks.selection_change(items);
    }

    // ---- derived views ----------------------------------------------------

    pub fn sorted_items(&self) -> &[Item] {
        &self.sorted
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn root_label(&self) -> String {
        match self.config.root_label {
            Some(ref label) => label.clone(),
            None => self.translator.t(keys::ROOT, &Params::new()),
        }
    }

    pub fn breadcrumb(&self) -> Vec<PathSegment> {
        path::segments(&self.current_path, &self.root_label())
    }

    pub fn item_count_label(&self) -> ItemCountLabel {
        item_count_label(
            self.sorted.len(),
            self.pagination.total_count,
            self.pagination.has_more,
            self.config.item_limit,
        )
    }

    pub fn item_count_text(&self) -> String {
        self.item_count_label().render(self.translator.as_ref())
    }

    pub fn translator(&self) -> &dyn Translate {
        self.translator.as_ref()
    }

    pub fn sort_config(&self) -> SortConfig {
        self.sort
    }

    pub fn date_filter(&self) -> DateFilter {
        self.date_filter
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn height_mode(&self) -> HeightMode {
        self.config.height
    }

    pub fn selected_items(&self) -> Vec<Item> {
        self.selection.materialize(&self.sorted)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    pub fn anchor_index(&self) -> Option<usize> {
        self.selection.anchor()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag.is_active()
    }

    pub fn is_action_enabled(&self, action: Action) -> bool {
        action.is_enabled(self.selected_items().len())
    }

    pub fn add_menu_entries(&self) -> Vec<AddAction> {
        self.add_menu.entries()
    }

    pub fn is_add_menu_open(&self) -> bool {
        self.add_menu.is_open()
    }

    // ---- lifetime and focus ---------------------------------------------

    pub fn mount(&mut self) {
        self.listeners.subscribe(Listener::KeyDown);
    }

    /// Drops every listener, including the add menu's.
    pub fn unmount(&mut self) {
        self.listeners.clear();
        self.add_menu.set_open(false);
        self.drag = DragOverlay::new();
    }

    pub fn is_mounted(&self) -> bool {
        self.listeners.is_active(Listener::KeyDown)
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FocusTarget) {
        self.focus = focus;
    }

    // ---- pointer --------------------------------------------------------

    /// Returns false when the row does not exist or is disabled.
    pub fn click(&mut self, index: usize, modifiers: Modifiers) -> bool {
        match self.sorted.get(index) {
            Some(item) if !item.disabled => {}
            _ => return false,
        }
        self.selection.select(&self.sorted, index, modifiers);
        self.active = Some(index);
        self.notify_selection();
        true
    }

    pub fn double_click(&mut self, index: usize) -> bool {
        self.activate(index)
    }

    pub fn hover(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|&i| self.sorted.get(i).is_some_and(|item| !item.disabled));
    }

    /// Enters a directory. Files and disabled rows are ignored.
    pub fn activate(&mut self, index: usize) -> bool {
        let target = match self.sorted.get(index) {
            Some(item) if item.is_directory && !item.disabled => path::join(&self.current_path, &item.name),
            _ => return false,
        };
        self.callbacks.navigate(target);
        self.reset_interaction();
        true
    }

    pub fn navigate_to_segment(&mut self, index: usize) -> bool {
        let Some(segment) = self.breadcrumb().into_iter().nth(index) else {
            return false;
        };
        self.callbacks.navigate(segment.path);
        self.reset_interaction();
        true
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        let next = self.sort.toggle(key);
        self.apply_sort(next);
        self.callbacks.sort_change(next);
    }

    pub fn select_all(&mut self) {
        let ids = self.sorted.iter().map(|item| item.id.clone());
        self.selection.select_all(ids);
        self.notify_selection();
    }

    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.notify_selection();
        }
    }

    // ---- keyboard ---------------------------------------------------------

    pub fn handle_key(&mut self, input: &KeyInput) -> EventOutcome {
        if !self.listeners.is_active(Listener::KeyDown) {
            return EventOutcome::Ignored;
        }
        let Some(command) = keyboard::interpret(input, self.focus, self.config.platform) else {
            return EventOutcome::Ignored;
        };

        match command {
            KeyCommand::SelectAll => self.select_all(),
            KeyCommand::Move { delta, extend } => self.move_active(delta, extend),
            KeyCommand::Activate => {
                if let Some(index) = self.active {
                    self.activate(index);
                }
            }
        }
        EventOutcome::PreventDefault
    }

    fn move_active(&mut self, delta: isize, extend: bool) {
        let Some(next) = keyboard::step(self.active, delta, self.sorted.len()) else {
            return;
        };
        self.active = Some(next);

        match self.selection.anchor() {
            Some(anchor) if extend => {
                self.selection.select_range(&self.sorted, anchor, next);
                self.notify_selection();
            }
            _ => {
                let item = &self.sorted[next];
                if !item.disabled {
                    let id = item.id.clone();
                    self.selection.replace_with(&id);
                    self.selection.set_anchor(Some(next));
                    self.notify_selection();
                }
            }
        }

        if next + 1 == self.sorted.len() {
            self.load_more();
        }
    }

    // ---- drag and drop ----------------------------------------------------

    pub fn handle_drag(&mut self, event: DragEvent) -> EventOutcome {
        match event {
            DragEvent::Enter { has_files } => {
                if self.drag.enter(has_files) == Transition::Activated {
                    tracing::debug!("drop overlay shown");
                }
            }
            DragEvent::Over => {}
            DragEvent::Leave => {
                if self.drag.leave() == Transition::Deactivated {
                    tracing::debug!("drop overlay hidden");
                }
            }
            DragEvent::Drop(payload) => {
                self.drag.drop_payload();
                tracing::info!(files = payload.paths.len(), "files dropped");
                self.callbacks.file_drop(payload);
            }
        }
        EventOutcome::PreventDefault
    }

    // ---- toolbar ----------------------------------------------------------

    pub fn refresh(&mut self) {
        self.callbacks.refresh();
    }

    /// Emits the action's intent with the selected items, if enabled.
    pub fn trigger(&mut self, action: Action) -> bool {
        let items = self.selected_items();
        if !action.is_enabled(items.len()) {
            return false;
        }
        match action {
            Action::Rename => self.callbacks.rename(items),
            Action::Move => self.callbacks.move_items(items),
            Action::Download => self.callbacks.download(items),
            Action::Share => self.callbacks.share(items),
            Action::Delete => self.callbacks.delete(items),
        }
        true
    }

    pub fn open_add_menu(&mut self) {
        self.add_menu.set_open(true);
        self.listeners.subscribe(Listener::OutsideClick);
    }

    pub fn close_add_menu(&mut self) {
        self.add_menu.set_open(false);
        self.listeners.unsubscribe(Listener::OutsideClick);
    }

    pub fn toggle_add_menu(&mut self) {
        if self.add_menu.is_open() {
            self.close_add_menu();
        } else {
            self.open_add_menu();
        }
    }

    /// Returns true when the click closed the menu.
    pub fn outside_click(&mut self) -> bool {
        if !self.listeners.is_active(Listener::OutsideClick) {
            return false;
        }
        self.close_add_menu();
        true
    }

    pub fn choose_add(&mut self, action: AddAction) -> bool {
        if !self.add_menu.offers(action) {
            return false;
        }
        self.close_add_menu();
        match action {
            AddAction::Upload => self.callbacks.upload(),
            AddAction::CreateFolder => self.callbacks.create_folder(),
            AddAction::ImportFiles => self.callbacks.import_files(),
            AddAction::ImportFolders => self.callbacks.import_folders(),
        }
        true
    }

    pub fn set_date_filter(&mut self, filter: DateFilter) {
        if filter == self.date_filter {
            return;
        }
        self.date_filter = filter;
        self.callbacks.date_filter_change(filter);
    }

    /// Asks for the next page unless nothing is left or a request is in flight.
    pub fn load_more(&mut self) -> bool {
        if !self.pagination.has_more || self.pagination.is_loading_more {
            return false;
        }
        self.callbacks.load_more();
        true
    }
}

fn same_ids(a: &[Item], b: &[Item]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.id == y.id)
}
