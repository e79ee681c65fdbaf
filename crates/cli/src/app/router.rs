//! Path-based navigation between screens.

use std::fmt;

/// A screen the shell can show.
///
/// Investment routes carry the reference as typed; the shell resolves it
/// against the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Dashboard,
    /// `/investments`
    List,
    /// `/investments/add`
    Add,
    /// `/investments/:id`
    Show(String),
    /// `/investments/:id/edit`
    Edit(String),
    /// Any other path.
    NotFound(String),
}

impl Route {
    /// Parse a path. Trailing slashes are ignored; unknown paths map to
    /// [`Route::NotFound`].
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        if !trimmed.starts_with('/') {
            return Self::NotFound(trimmed.to_string());
        }

        match segments.as_slice() {
            [] => Self::Dashboard,
            ["investments"] => Self::List,
            ["investments", "add"] => Self::Add,
            ["investments", id] => Self::Show((*id).to_string()),
            ["investments", id, "edit"] => Self::Edit((*id).to_string()),
            _ => Self::NotFound(trimmed.to_string()),
        }
    }

    /// The canonical path of this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::List => "/investments".to_string(),
            Self::Add => "/investments/add".to_string(),
            Self::Show(id) => format!("/investments/{id}"),
            Self::Edit(id) => format!("/investments/{id}/edit"),
            Self::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
