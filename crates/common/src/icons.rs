// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

//! Icon resolution for list rows

use std::path::{Path, PathBuf};

/// Edge length, in pixels, icons are scaled to
pub const ICON_SIZE: i32 = 64;

/// Built-in images used when no icon file is available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Generic "no media" image
    NoMedia,
    /// Jar file image, used for custom mods
    Jar,
}

impl Placeholder {
    /// File stem of the placeholder in the assets directory
    pub fn asset_stem(&self) -> &'static str {
        match self {
            Placeholder::NoMedia => "noMedia",
            Placeholder::Jar => "jar",
        }
    }

    /// Themed icon name used when the asset file is missing too
    pub fn icon_name(&self) -> &'static str {
        match self {
            Placeholder::NoMedia => "image-missing-symbolic",
            Placeholder::Jar => "package-x-generic-symbolic",
        }
    }
}

/// Where a row gets its image from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    File(PathBuf),
    Placeholder(Placeholder),
}

impl Icon {
    /// Use `path` if a file exists there, otherwise the placeholder
    pub fn resolve(path: &Path, fallback: Placeholder) -> Self {
        if path.is_file() {
            Icon::File(path.to_path_buf())
        } else {
            Icon::Placeholder(fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AANobbMI.png");
        std::fs::write(&path, b"png").unwrap();

        assert_eq!(Icon::resolve(&path, Placeholder::NoMedia), Icon::File(path));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Icon::resolve(&dir.path().join("missing.png"), Placeholder::NoMedia),
            Icon::Placeholder(Placeholder::NoMedia)
        );
        // A directory is not an icon
        assert_eq!(
            Icon::resolve(dir.path(), Placeholder::Jar),
            Icon::Placeholder(Placeholder::Jar)
        );
    }
}
