//! Explicit user context for a single CLI invocation.

use crate::config::Config;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: Option<String>,
    admin: bool,
}

impl Session {
    /// Build a session from the `--user` flag. Blank names mean anonymous.
    pub fn new(username: Option<&str>, cfg: &Config) -> Self {
        let username = username
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string);
        let admin = username.as_deref() == Some(cfg.admin_user.as_str());
        Self { username, admin }
    }

    pub fn anonymous() -> Self {
        Self {
            username: None,
            admin: false,
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Username of a logged-in user, or `NotLoggedIn`.
    pub fn require_user(&self) -> AppResult<&str> {
        self.username().ok_or(AppError::NotLoggedIn)
    }

    /// Username of the admin, or the matching permission error.
    pub fn require_admin(&self) -> AppResult<&str> {
        let user = self.require_user()?;
        if self.admin {
            Ok(user)
        } else {
            Err(AppError::NotAdmin(user.to_string()))
        }
    }
}
