// Build-time identity from Cargo.toml

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// `"<name> <version>"`, reported as the implementation version of the local source.
pub fn describe() -> String {
    format!("{} {}", NAME, VERSION)
}
