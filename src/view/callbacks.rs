// src/view/callbacks.rs
use crate::filesystem::Item;
use crate::view::drag::DropPayload;
use crate::view::filter::DateFilter;
use crate::view::sort::SortConfig;

type Handler<T> = Option<Box<dyn FnMut(T)>>;
type Signal = Option<Box<dyn FnMut()>>;

/// Intent sinks. Every slot is optional; firing an empty slot does nothing.
#[derive(Default)]
pub struct Callbacks {
    navigate: Handler<String>,
    refresh: Signal,
    upload: Signal,
    create_folder: Signal,
    import_files: Signal,
    import_folders: Signal,
    rename: Handler<Vec<Item>>,
    move_items: Handler<Vec<Item>>,
    download: Handler<Vec<Item>>,
    share: Handler<Vec<Item>>,
    delete: Handler<Vec<Item>>,
    date_filter_change: Handler<DateFilter>,
    sort_change: Handler<SortConfig>,
    selection_change: Handler<Vec<Item>>,
    file_drop: Handler<DropPayload>,
    load_more: Signal,
}

fn fire<T>(intent: &'static str, slot: &mut Handler<T>, value: T) {
    match slot {
        Some(handler) => {
            tracing::debug!(intent, "emitting intent");
            handler(value);
        }
        None => tracing::debug!(intent, "no handler registered"),
    }
}

fn signal(intent: &'static str, slot: &mut Signal) {
    match slot {
        Some(handler) => {
            tracing::debug!(intent, "emitting intent");
            handler();
        }
        None => tracing::debug!(intent, "no handler registered"),
    }
}

impl Callbacks {
    pub fn new() -> Self {
        Callbacks::default()
    }

    pub fn on_navigate(mut self, f: impl FnMut(String) + 'static) -> Self {
        self.navigate = Some(Box::new(f));
        self
    }

    pub fn on_refresh(mut self, f: impl FnMut() + 'static) -> Self {
        self.refresh = Some(Box::new(f));
        self
    }

    pub fn on_upload(mut self, f: impl FnMut() + 'static) -> Self {
        self.upload = Some(Box::new(f));
        self
    }

    pub fn on_create_folder(mut self, f: impl FnMut() + 'static) -> Self {
        self.create_folder = Some(Box::new(f));
        self
    }

    pub fn on_import_files(mut self, f: impl FnMut() + 'static) -> Self {
        self.import_files = Some(Box::new(f));
        self
    }

    pub fn on_import_folders(mut self, f: impl FnMut() + 'static) -> Self {
        self.import_folders = Some(Box::new(f));
        self
    }

    pub fn on_rename(mut self, f: impl FnMut(Vec<Item>) + 'static) -> Self {
        self.rename = Some(Box::new(f));
        self
    }

    pub fn on_move(mut self, f: impl FnMut(Vec<Item>) + 'static) -> Self {
        self.move_items = Some(Box::new(f));
        self
    }

    pub fn on_download(mut self, f: impl FnMut(Vec<Item>) + 'static) -> Self {
        self.download = Some(Box::new(f));
        self
    }

    pub fn on_share(mut self, f: impl FnMut(Vec<Item>) + 'static) -> Self {
        self.share = Some(Box::new(f));
        self
    }

    pub fn on_delete(mut self, f: impl FnMut(Vec<Item>) + 'static) -> Self {
        self.delete = Some(Box::new(f));
        self
    }

    pub fn on_date_filter_change(mut self, f: impl FnMut(DateFilter) + 'static) -> Self {
        self.date_filter_change = Some(Box::new(f));
        self
    }

    pub fn on_sort_change(mut self, f: impl FnMut(SortConfig) + 'static) -> Self {
        self.sort_change = Some(Box::new(f));
        self
    }

    pub fn on_selection_change(mut self, f: impl FnMut(Vec<Item>) + 'static) -> Self {
        self.selection_change = Some(Box::new(f));
        self
    }

    pub fn on_file_drop(mut self, f: impl FnMut(DropPayload) + 'static) -> Self {
        self.file_drop = Some(Box::new(f));
        self
    }

    pub fn on_load_more(mut self, f: impl FnMut() + 'static) -> Self {
        self.load_more = Some(Box::new(f));
        self
    }

    pub(crate) fn navigate(&mut self, path: String) {
        fire("navigate", &mut self.navigate, path);
    }

    pub(crate) fn refresh(&mut self) {
        signal("refresh", &mut self.refresh);
    }

    pub(crate) fn upload(&mut self) {
        signal("upload", &mut self.upload);
    }

    pub(crate) fn create_folder(&mut self) {
        signal("createFolder", &mut self.create_folder);
    }

    pub(crate) fn import_files(&mut self) {
        signal("importFiles", &mut self.import_files);
    }

    pub(crate) fn import_folders(&mut self) {
        signal("importFolders", &mut self.import_folders);
    }

    pub(crate) fn rename(&mut self, items: Vec<Item>) {
        fire("rename", &mut self.rename, items);
    }

    pub(crate) fn move_items(&mut self, items: Vec<Item>) {
        fire("move", &mut self.move_items, items);
    }

    pub(crate) fn download(&mut self, items: Vec<Item>) {
        fire("download", &mut self.download, items);
    }

    pub(crate) fn share(&mut self, items: Vec<Item>) {
        fire("share", &mut self.share, items);
    }

    pub(crate) fn delete(&mut self, items: Vec<Item>) {
        fire("delete", &mut self.delete, items);
    }

    pub(crate) fn date_filter_change(&mut self, filter: DateFilter) {
        fire("dateFilterChange", &mut self.date_filter_change, filter);
    }

    pub(crate) fn sort_change(&mut self, config: SortConfig) {
        fire("sortChange", &mut self.sort_change, config);
    }

    pub(crate) fn selection_change(&mut self, items: Vec<Item>) {
        fire("selectionChange", &mut self.selection_change, items);
    }

    pub(crate) fn file_drop(&mut self, payload: DropPayload) {
        fire("fileDrop", &mut self.file_drop, payload);
    }

    pub(crate) fn load_more(&mut self) {
        signal("loadMore", &mut self.load_more);
    }
}
