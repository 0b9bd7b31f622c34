//! Build identification.
//!
//! The commit hash and build date come from `FOF_COMMIT_HASH` and
//! `FOF_BUILD_DATE` at compile time.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const COMMIT_HASH: &str = match option_env!("FOF_COMMIT_HASH") {
    Some(hash) => hash,
    None => "unknown",
};

pub const BUILD_DATE: &str = match option_env!("FOF_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

/// Multi-line block printed by `--version`.
pub fn version_info() -> String {
    format_version_info(
        VERSION,
        COMMIT_HASH,
        BUILD_DATE,
        &format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
    )
}

pub fn format_version_info(version: &str, commit: &str, built: &str, platform: &str) -> String {
    format!("FOF9 Editor v{version}\nCommit: {commit}\nBuilt: {built}\nPlatform: {platform}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_info_names_the_build() {
        let info = version_info();
        assert!(info.starts_with(&format!("FOF9 Editor v{VERSION}\n")));
        assert!(info.contains("\nCommit: "));
        assert!(info.contains("\nBuilt: "));
    }
}
