//! Login gate credential check.

use crate::config::AuthConfig;
use crate::error::{AppError, Result};

/// Check a login attempt against the configured credential pair.
///
/// Both values are compared exactly as typed. There is no lockout.
pub fn check_login(auth: &AuthConfig, login_id: &str, password: &str) -> Result<()> {
    if login_id == auth.login_id && password == auth.password {
        tracing::info!("Login succeeded for {}", login_id);
        Ok(())
    } else {
        tracing::warn!("Login failed for {:?}", login_id);
        Err(AppError::LoginFailed)
    }
}
