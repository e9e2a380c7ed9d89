use crate::constants::{ADMIN_PATH_FRAGMENT, INDEX_PATHS};

/// Pages this client knows how to initialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    AdminDashboard,
}

impl Page {
    /// Route detection: a literal match on the path. `/` and `/index` select
    /// the index page, anything containing `/admin` the admin dashboard, and
    /// any other path has no initializer.
    pub fn detect(path: &str) -> Option<Self> {
        if INDEX_PATHS.contains(&path) {
            Some(Self::Index)
        } else if path.contains(ADMIN_PATH_FRAGMENT) {
            Some(Self::AdminDashboard)
        } else {
            None
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::AdminDashboard => "admin dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn root_and_index_paths_select_index() {
        assert_eq!(Page::detect("/"), Some(Page::Index));
        assert_eq!(Page::detect("/index"), Some(Page::Index));
    }

    #[test]
    fn admin_substring_selects_dashboard() {
        assert_eq!(Page::detect("/admin"), Some(Page::AdminDashboard));
        assert_eq!(Page::detect("/admin/announcements"), Some(Page::AdminDashboard));
    }

    #[test]
    fn unknown_path_has_no_initializer() {
        assert_eq!(Page::detect("/login"), None);
        assert_eq!(Page::detect("/index.html"), None);
        assert_eq!(Page::detect(""), None);
    }
}
