// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Minecraft Mod Manager Contributors

//! Radio group listing the versions of one mod

use modman_common::{ReleaseType, VersionEntry, VersionProperties};

const LATEST_MARKER: &str = "(latest) ";
const RECOMMENDED_MARKER: &str = "(recommended) ";

/// Build the label shown for one version
fn build_label(key: &str, props: &VersionProperties, latest: bool, recommended: bool) -> String {
    let mut label = format!("{} - {}", props.release_type, key);
    if latest {
        label.insert_str(0, LATEST_MARKER);
    }
    if recommended {
        label.insert_str(0, RECOMMENDED_MARKER);
    }
    label
}

/// Recover the version key from a radio label by stripping its markers
pub fn version_key_from_label(label: &str) -> &str {
    let mut rest = label;
    loop {
        if let Some(stripped) = rest.strip_prefix(LATEST_MARKER) {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix(RECOMMENDED_MARKER) {
            rest = stripped;
        } else {
            break;
        }
    }

    for release_type in ReleaseType::ALL {
        let prefix = format!("{} - ", release_type.as_str());
        if let Some(stripped) = rest.strip_prefix(prefix.as_str()) {
            return stripped;
        }
    }
    rest
}

#[derive(Debug, Clone)]
struct RadioButton {
    label: String,
    key: String,
    props: VersionProperties,
}

/// Mutually exclusive list of mod versions, newest first
#[derive(Debug, Clone, Default)]
pub struct ModVersionRadio {
    buttons: Vec<RadioButton>,
    checked: Option<usize>,
}

impl ModVersionRadio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed versions
    ///
    /// The first entry is marked latest. The first release compatible with
    /// `game_version` is marked recommended.
    pub fn set_versions<I>(&mut self, versions: I, game_version: &str)
    where
        I: IntoIterator<Item = VersionEntry>,
    {
        self.buttons.clear();
        self.checked = None;

        let mut recommended_found = false;
        for (index, (key, props)) in versions.into_iter().enumerate() {
            let recommended = !recommended_found
                && props.release_type == ReleaseType::Release
                && props.supports(game_version);
            recommended_found |= recommended;

            self.buttons.push(RadioButton {
                label: build_label(&key, &props, index == 0, recommended),
                key,
                props,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buttons.iter().map(|b| b.label.as_str())
    }

    /// Check one button; the previously checked one is released
    pub fn check(&mut self, index: usize) -> bool {
        if index >= self.buttons.len() {
            return false;
        }
        self.checked = Some(index);
        true
    }

    pub fn uncheck(&mut self) {
        self.checked = None;
    }

    pub fn checked_index(&self) -> Option<usize> {
        self.checked
    }

    /// Properties of the checked version, `None` when nothing is checked
    pub fn get_selection_data(&self) -> Option<&VersionProperties> {
        self.checked_version().map(|(_, props)| props)
    }

    /// Key and properties of the checked version
    pub fn checked_version(&self) -> Option<(&str, &VersionProperties)> {
        let button = self.buttons.get(self.checked?)?;
        if version_key_from_label(&button.label) != button.key {
            return None;
        }
        Some((button.key.as_str(), &button.props))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, release_type: ReleaseType, mc: &[&str]) -> VersionEntry {
        (key.to_string(), VersionProperties::new(release_type, mc))
    }

    fn sample() -> Vec<VersionEntry> {
        vec![
            entry("3.0-beta", ReleaseType::Beta, &["1.20.1"]),
            entry("2.1", ReleaseType::Release, &["1.20.4"]),
            entry("2.0", ReleaseType::Release, &["1.20.1", "1.20"]),
            entry("1.9", ReleaseType::Release, &["1.20.1"]),
            entry("1.0-alpha", ReleaseType::Alpha, &["1.19.2"]),
        ]
    }

    #[test]
    fn test_labels() {
        let mut radio = ModVersionRadio::new();
        radio.set_versions(sample(), "1.20.1");

        let labels: Vec<_> = radio.labels().collect();
        assert_eq!(
            labels,
            vec![
                "(latest) beta - 3.0-beta",
                "release - 2.1",
                "(recommended) release - 2.0",
                "release - 1.9",
                "alpha - 1.0-alpha",
            ]
        );
    }

    #[test]
    fn test_single_recommended_marker() {
        let mut radio = ModVersionRadio::new();
        radio.set_versions(sample(), "1.20.1");
        assert_eq!(radio.labels().filter(|l| l.contains("(recommended)")).count(), 1);

        radio.set_versions(sample(), "1.8.9");
        assert_eq!(radio.labels().filter(|l| l.contains("(recommended)")).count(), 0);
    }

    #[test]
    fn test_latest_and_recommended_on_one_label() {
        let mut radio = ModVersionRadio::new();
        radio.set_versions(vec![entry("1.0", ReleaseType::Release, &["1.20.1"])], "1.20.1");

        assert_eq!(radio.labels().next(), Some("(recommended) (latest) release - 1.0"));
        radio.check(0);
        assert_eq!(radio.checked_version().map(|(k, _)| k), Some("1.0"));
    }

    #[test]
    fn test_label_round_trip() {
        let mut radio = ModVersionRadio::new();
        radio.set_versions(sample(), "1.20.1");

        for (index, (key, _)) in sample().iter().enumerate() {
            assert!(radio.check(index));
            assert_eq!(radio.checked_version().map(|(k, _)| k), Some(key.as_str()));
        }
    }

    #[test]
    fn test_key_containing_marker_text() {
        assert_eq!(version_key_from_label("(latest) release - beta - 2"), "beta - 2");
        assert_eq!(version_key_from_label("plain"), "plain");
    }

    #[test]
    fn test_duplicate_keys_keep_their_own_properties() {
        let mut radio = ModVersionRadio::new();
        radio.set_versions(
            vec![
                entry("1.0", ReleaseType::Beta, &["1.19.2"]),
                entry("1.0", ReleaseType::Release, &["1.20.1"]),
            ],
            "1.20.1",
        );

        radio.check(1);
        let (key, props) = radio.checked_version().unwrap();
        assert_eq!(key, "1.0");
        assert_eq!(props.release_type, ReleaseType::Release);
        assert_eq!(props.mc_versions, vec!["1.20.1"]);
    }

    #[test]
    fn test_selection_data() {
        let mut radio = ModVersionRadio::new();
        radio.set_versions(sample(), "1.20.1");
        assert!(radio.get_selection_data().is_none());

        radio.check(2);
        let props = radio.get_selection_data().unwrap();
        assert_eq!(props.release_type, ReleaseType::Release);
        assert_eq!(props.mc_versions, vec!["1.20.1", "1.20"]);

        radio.check(4);
        assert_eq!(radio.checked_index(), Some(4));
        assert!(!radio.check(5));
        assert_eq!(radio.checked_index(), Some(4));
    }

    #[test]
    fn test_set_versions_resets_check() {
        let mut radio = ModVersionRadio::new();
        radio.set_versions(sample(), "1.20.1");
        radio.check(1);
        radio.set_versions(sample(), "1.20.4");
        assert!(radio.get_selection_data().is_none());
        assert_eq!(radio.labels().nth(1), Some("(recommended) release - 2.1"));
    }
}
