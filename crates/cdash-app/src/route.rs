//! Route parsing for the three dashboard pages

use std::fmt;

/// Where the user currently is
///
/// Detail ids are kept exactly as they appeared in the path; the detail page
/// decides whether they are usable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Users,
    UserDetail(String),
}

/// Top-level navigation entries shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Dashboard,
    Users,
}

impl NavSection {
    pub const ALL: [NavSection; 2] = [NavSection::Dashboard, NavSection::Users];

    /// Translation key of the entry label
    pub fn label_key(&self) -> &'static str {
        match self {
            NavSection::Dashboard => "nav.dashboard",
            NavSection::Users => "nav.users",
        }
    }

    pub fn route(&self) -> Route {
        match self {
            NavSection::Dashboard => Route::Dashboard,
            NavSection::Users => Route::Users,
        }
    }
}

impl Route {
    /// Parse an app path. Unknown paths land on the dashboard.
    pub fn parse(path: &str) -> Route {
        let path = path.trim();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Route::Dashboard,
            "/users" | "users" => Route::Users,
            _ => {
                let rest = trimmed
                    .strip_prefix("/users/")
                    .or_else(|| trimmed.strip_prefix("users/"));
                match rest {
                    Some(id) if !id.is_empty() && !id.contains('/') => {
                        Route::UserDetail(id.to_string())
                    }
                    _ => Route::Dashboard,
                }
            }
        }
    }

    /// Path form of this route
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Users => "/users".to_string(),
            Route::UserDetail(id) => format!("/users/{id}"),
        }
    }

    /// Header entry to highlight for this route
    pub fn nav_section(&self) -> NavSection {
        match self {
            Route::Dashboard => NavSection::Dashboard,
            Route::Users | Route::UserDetail(_) => NavSection::Users,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Parse a raw detail id as a positive integer
///
/// Only ASCII digits are accepted: no sign, whitespace or trailing text.
pub fn parse_user_id(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|id| *id > 0)
}
