//! Resolver initialization.
//!
//! Builds the [`DigResolver`] from configuration after checking that the
//! configured binary can actually be found.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::resolver::DigResolver;

/// Initializes the `dig` resolver described by `config`.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the binary is neither an
/// existing path nor found on `PATH`.
pub fn init_resolver(config: &Config) -> Result<Arc<DigResolver>, InitializationError> {
    let binary = locate_binary(&config.dig_binary).ok_or_else(|| {
        InitializationError::DnsResolverError(format!(
            "{} not found; install dig (bind-utils / dnsutils) or pass --dig-binary",
            config.dig_binary.display()
        ))
    })?;
    log::debug!("Using {}", binary.display());

    Ok(Arc::new(DigResolver::new(
        binary,
        Duration::from_secs(config.timeout_seconds),
    )))
}

/// Resolves `binary` to an existing file. Bare names are searched on `PATH`.
pub(crate) fn locate_binary(binary: &Path) -> Option<PathBuf> {
    if binary.components().count() > 1 || binary.is_absolute() {
        return binary.is_file().then(|| binary.to_path_buf());
    }

    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}
