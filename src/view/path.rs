// src/view/path.rs

/// One clickable breadcrumb entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub label: String,
    pub path: String,
}

impl PathSegment {
    fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        PathSegment { label: label.into(), path: path.into() }
    }
}

/// Breadcrumb for `current_path`. The root segment keeps `""` vs `"/"`
/// as given so later joins follow the same convention.
pub fn segments(current_path: &str, root_label: &str) -> Vec<PathSegment> {
    if current_path.is_empty() || current_path == "/" {
        return vec![PathSegment::new(root_label, current_path)];
    }

    let absolute = current_path.starts_with('/');
    let root_path = if absolute { "/" } else { "" };
    let mut out = vec![PathSegment::new(root_label, root_path)];

    let mut acc = String::new();
    for token in current_path.split('/').filter(|t| !t.is_empty()) {
        if !acc.is_empty() {
            acc.push('/');
        }
        acc.push_str(token);
        let path = if absolute { format!("/{}", acc) } else { acc.clone() };
        out.push(PathSegment::new(token, path));
    }
    out
}

/// Target of activating a directory named `name` while at `current_path`.
pub fn join(current_path: &str, name: &str) -> String {
    match current_path {
        "" => name.to_string(),
        "/" => format!("/{}", name),
        base => format!("{}/{}", base.trim_end_matches('/'), name),
    }
}
