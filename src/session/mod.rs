//! Operator session and role gate
//!
//! Two roles, one transition each way. The credential pair is a single
//! hardcoded constant guarding one offline register; it is not an
//! authentication system and must not grow into one.

use crate::error::{TillError, TillResult};
use tracing::{info, warn};

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "admin";

/// Operator role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Public,
    Admin,
}

/// Transient session state; always starts public, never persisted.
#[derive(Debug)]
pub struct Session {
    role: Role,
}

impl Session {
    pub fn new() -> Self {
        Self { role: Role::Public }
    }

    /// Switch to admin on an exact credential match. Any mismatch stays
    /// public with the same generic failure; the response never says
    /// which half was wrong.
    pub fn login(&mut self, username: &str, password: &str) -> TillResult<()> {
        if username == ADMIN_USER && password == ADMIN_PASS {
            self.role = Role::Admin;
            info!("admin mode enabled");
            Ok(())
        } else {
            warn!("rejected admin login attempt");
            Err(TillError::InvalidCredentials)
        }
    }

    /// Back to public, unconditionally.
    pub fn logout(&mut self) {
        self.role = Role::Public;
        info!("back to public mode");
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Gate for catalog mutation and listing.
    pub fn require_admin(&self) -> TillResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(TillError::AccessDenied)
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_public() {
        let session = Session::new();
        assert_eq!(session.role(), Role::Public);
        assert!(matches!(
            session.require_admin(),
            Err(TillError::AccessDenied)
        ));
    }

    #[test]
    fn exact_credentials_log_in() {
        let mut session = Session::new();
        session.login("admin", "admin").unwrap();
        assert!(session.is_admin());
        assert!(session.require_admin().is_ok());
    }

    #[test]
    fn mismatch_is_generic_and_keeps_public() {
        let mut session = Session::new();
        for (user, pass) in [("admin", "wrong"), ("wrong", "admin"), ("", "")] {
            let err = session.login(user, pass).unwrap_err();
            assert!(matches!(err, TillError::InvalidCredentials));
            assert_eq!(session.role(), Role::Public);
        }
    }

    #[test]
    fn logout_is_unconditional() {
        let mut session = Session::new();
        session.logout();
        assert_eq!(session.role(), Role::Public);

        session.login("admin", "admin").unwrap();
        session.logout();
        assert_eq!(session.role(), Role::Public);
    }
}
