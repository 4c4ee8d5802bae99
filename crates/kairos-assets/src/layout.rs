//! Default input and output locations, relative to the repository root.

use std::path::{Path, PathBuf};

/// Environment variable naming the repository root.
pub const ROOT_ENV: &str = "KAIROS_ROOT";

/// Resolves every conventional asset path from a single root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root from `KAIROS_ROOT`, falling back to the current directory.
    pub fn from_env() -> Self {
        match std::env::var_os(ROOT_ENV) {
            Some(p) => Self::new(p),
            None => Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn trade_app_dir(&self) -> PathBuf {
        self.root.join("kairos-trade")
    }

    pub fn wallet_app_dir(&self) -> PathBuf {
        self.root.join("kairos-wallet")
    }

    pub fn trade_icon_source(&self) -> PathBuf {
        self.trade_app_dir().join("public/icons/icon-512.png")
    }

    pub fn wallet_icon_source(&self) -> PathBuf {
        self.wallet_app_dir().join("public/icons/kairos-token.png")
    }

    pub fn extension_icon_dir(&self) -> PathBuf {
        self.root.join("kairos-extension/dist/icons")
    }

    pub fn extension_public_icon_dir(&self) -> PathBuf {
        self.root.join("kairos-extension/public/icons")
    }

    pub fn cws_dir(&self) -> PathBuf {
        self.root.join("kairos-extension/cws-assets")
    }

    pub fn promo_dir(&self) -> PathBuf {
        self.root.join("assets/promo")
    }

    pub fn branding_dir(&self) -> PathBuf {
        self.root.join("assets/branding")
    }

    pub fn banner_logo(&self) -> PathBuf {
        self.branding_dir().join("logo-256.png")
    }

    pub fn website_dir(&self) -> PathBuf {
        self.root.join("website")
    }

    pub fn favicon_source(&self) -> PathBuf {
        self.website_dir().join("kairos-logo.png")
    }

    /// Where the rasterized wallet logo set lands.
    pub fn wallet_logo_dir(&self) -> PathBuf {
        self.wallet_app_dir()
    }

    pub fn certificate_dir(&self) -> PathBuf {
        self.root.join("assets/documents")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_rooted() {
        let layout = ProjectLayout::new("/repo");
        assert_eq!(
            layout.trade_icon_source(),
            PathBuf::from("/repo/kairos-trade/public/icons/icon-512.png")
        );
        assert_eq!(
            layout.extension_icon_dir(),
            PathBuf::from("/repo/kairos-extension/dist/icons")
        );
        assert_eq!(layout.banner_logo(), PathBuf::from("/repo/assets/branding/logo-256.png"));
        assert_eq!(layout.favicon_source(), PathBuf::from("/repo/website/kairos-logo.png"));
    }
}
