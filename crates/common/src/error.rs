// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

// Error types for Minecraft Mod Manager

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Profile name cannot be empty")]
    ProfileNameEmpty,

    #[error("Profile name contains invalid characters: {0}")]
    ProfileNameInvalid(String),

    #[error("Profile already exists: {0}")]
    ProfileExists(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Mod name cannot be empty")]
    ModNameEmpty,

    #[error("Mod name must be a plain file name: {0}")]
    ModNameInvalid(String),

    #[error("A mod file with this name already exists: {0}")]
    ModExists(String),

    #[error("Unknown mod loader: {0}")]
    UnknownModLoader(String),

    #[error("No Minecraft version selected")]
    NoVersionSelected,

    #[error("Version list unavailable: {0}")]
    VersionList(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Localization key of the message shown to the user for this error
    pub fn lang_key(&self) -> &'static str {
        match self {
            Error::ProfileNameEmpty => "profileNameEmptyError",
            Error::ProfileNameInvalid(_) => "profileNameInvalidError",
            Error::ProfileExists(_) => "profileNameExistsError",
            Error::ProfileNotFound(_) => "profileNotFoundError",
            Error::ModNameEmpty => "modNameEmptyError",
            Error::ModNameInvalid(_) => "modNameInvalidError",
            Error::ModExists(_) => "modNameExistsError",
            Error::NoVersionSelected => "noVersionSelectedError",
            Error::VersionList(_) | Error::Http(_) => "versionListError",
            _ => "unexpectedError",
        }
    }

    /// Validation failures keep the dialog open for correction
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::ProfileNameEmpty
                | Error::ProfileNameInvalid(_)
                | Error::ProfileExists(_)
                | Error::ModNameEmpty
                | Error::ModNameInvalid(_)
                | Error::ModExists(_)
                | Error::NoVersionSelected
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
