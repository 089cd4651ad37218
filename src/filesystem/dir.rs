// src/filesystem/dir.rs
use super::Item;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Lists a real directory tree as `Item`s addressed by slash-delimited
/// virtual paths relative to `root`. This is the collaborator side of the
/// view: it owns the data, the view only reports intents.
pub struct DirNavigator {
    pub root: PathBuf,
    pub show_hidden: bool,
    pub filter: Option<String>,
}

impl DirNavigator {
    pub fn new(root: PathBuf) -> Self {
        DirNavigator { root, show_hidden: false, filter: None }
    }

    /// Maps a virtual path (`""`, `"/"`, `"/a/b"`, `"a/b"`) onto disk.
    /// Parent and root components are ignored so the result never escapes `root`.
    pub fn resolve(&self, virtual_path: &str) -> PathBuf {
        let mut path = self.root.clone();
        for component in Path::new(virtual_path.trim_start_matches('/')).components() {
            if let Component::Normal(part) = component {
                path.push(part);
            }
        }
        path
    }

    pub fn list(&self, virtual_path: &str) -> Vec<Item> {
        let dir = self.resolve(virtual_path);
        let mut items = Vec::new();

        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).into_iter().flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if !self.show_hidden && name.starts_with('.') {
                continue;
            }
            if let Some(ref filter) = self.filter {
                if !name.to_lowercase().contains(&filter.to_lowercase()) {
                    continue;
                }
            }
            let Ok(metadata) = entry.metadata() else {
                tracing::debug!(path = %entry.path().display(), "skipping entry without metadata");
                continue;
            };

            let id = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .replace('\\', "/");
            let stamp = |t: std::io::Result<std::time::SystemTime>| {
                t.ok()
                    .map(|t| chrono::DateTime::<chrono::Utc>::from(t).to_rfc3339())
                    .unwrap_or_default()
            };

            let is_dir = metadata.is_dir();
            items.push(Item {
                id,
                name,
                parent_path: virtual_path.to_string(),
                size_bytes: if is_dir { 0 } else { metadata.len() },
                is_directory: is_dir,
                updated_at: stamp(metadata.modified()),
                created_at: stamp(metadata.created()),
                disabled: false,
            });
        }

        items
    }

    pub fn search(&mut self, query: &str) {
        self.filter = if query.is_empty() { None } else { Some(query.to_string()) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("filebrowser-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("docs")).unwrap();
        fs::write(dir.join("notes.txt"), "hello").unwrap();
        fs::write(dir.join(".hidden"), "").unwrap();
        fs::write(dir.join("docs").join("inner.md"), "# inner").unwrap();
        dir
    }

    #[test]
    fn test_list_root_skips_hidden() {
        let dir = scratch_dir("list");
        let nav = DirNavigator::new(dir.clone());
        let mut items = nav.list("/");
        items.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "docs");
        assert!(items[0].is_directory);
        assert_eq!(items[0].size_bytes, 0);
        assert_eq!(items[1].name, "notes.txt");
        assert_eq!(items[1].size_bytes, 5);
        assert!(items[1].updated().is_some());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_list_nested_and_filter() {
        let dir = scratch_dir("nested");
        let mut nav = DirNavigator::new(dir.clone());
        let items = nav.list("/docs");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "docs/inner.md");

        nav.search("NOTES");
        let items = nav.list("");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "notes.txt");
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_resolve_stays_under_root() {
        let nav = DirNavigator::new(PathBuf::from("/srv/data"));
        assert_eq!(nav.resolve("/../etc"), PathBuf::from("/srv/data/etc"));
        assert_eq!(nav.resolve(""), PathBuf::from("/srv/data"));
        assert_eq!(nav.resolve("a/b"), PathBuf::from("/srv/data/a/b"));
    }
}
