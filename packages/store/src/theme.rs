//! # Highlight themes
//!
//! [`CodeTheme`] is the fixed catalogue of syntax-highlight themes a user can pick
//! in settings. Each theme has a stable storage key (`"oneDark"`, `"dracula"`, ...)
//! and a display label.
//!
//! [`ThemePreference`] persists the selection under [`CODE_THEME_KEY`]. The
//! preference lives outside the session, so it survives logout.

use std::fmt;
use std::str::FromStr;

use crate::storage::{KeyValueStore, CODE_THEME_KEY};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CodeTheme {
    #[default]
    OneDark,
    VscDarkPlus,
    Dracula,
    AtomDark,
    Okaidia,
    A11yDark,
    MaterialDark,
    MaterialLight,
    MaterialOceanic,
    Nord,
    ShadesOfPurple,
    Synthwave84,
}

impl CodeTheme {
    pub const ALL: [CodeTheme; 12] = [
        CodeTheme::OneDark,
        CodeTheme::VscDarkPlus,
        CodeTheme::Dracula,
        CodeTheme::AtomDark,
        CodeTheme::Okaidia,
        CodeTheme::A11yDark,
        CodeTheme::MaterialDark,
        CodeTheme::MaterialLight,
        CodeTheme::MaterialOceanic,
        CodeTheme::Nord,
        CodeTheme::ShadesOfPurple,
        CodeTheme::Synthwave84,
    ];

    /// Key written to storage and used as the CSS class suffix.
    pub fn key(self) -> &'static str {
        match self {
            CodeTheme::OneDark => "oneDark",
            CodeTheme::VscDarkPlus => "vscDarkPlus",
            CodeTheme::Dracula => "dracula",
            CodeTheme::AtomDark => "atomDark",
            CodeTheme::Okaidia => "okaidia",
            CodeTheme::A11yDark => "a11yDark",
            CodeTheme::MaterialDark => "materialDark",
            CodeTheme::MaterialLight => "materialLight",
            CodeTheme::MaterialOceanic => "materialOceanic",
            CodeTheme::Nord => "nord",
            CodeTheme::ShadesOfPurple => "shadesOfPurple",
            CodeTheme::Synthwave84 => "synthwave84",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CodeTheme::OneDark => "One Dark",
            CodeTheme::VscDarkPlus => "VS Dark+",
            CodeTheme::Dracula => "Dracula",
            CodeTheme::AtomDark => "Atom Dark",
            CodeTheme::Okaidia => "Okaidia",
            CodeTheme::A11yDark => "A11Y Dark",
            CodeTheme::MaterialDark => "Material Dark",
            CodeTheme::MaterialLight => "Material Light",
            CodeTheme::MaterialOceanic => "Material Oceanic",
            CodeTheme::Nord => "Nord",
            CodeTheme::ShadesOfPurple => "Shades of Purple",
            CodeTheme::Synthwave84 => "Synthwave '84",
        }
    }
}

impl fmt::Display for CodeTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a string is not one of the known theme keys.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown highlight theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for CodeTheme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CodeTheme::ALL
            .into_iter()
            .find(|theme| theme.key() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Persisted highlight-theme selection.
#[derive(Clone, Debug)]
pub struct ThemePreference<S> {
    storage: S,
    current: CodeTheme,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Load the stored selection, falling back to [`CodeTheme::default`].
    pub fn load(storage: S) -> Self {
        let current = storage
            .get(CODE_THEME_KEY)
            .and_then(|key| match key.parse() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!("ignoring stored theme: {e}");
                    None
                }
            })
            .unwrap_or_default();
        Self { storage, current }
    }

    pub fn get(&self) -> CodeTheme {
        self.current
    }

    pub fn set(&mut self, theme: CodeTheme) {
        self.current = theme;
        self.storage.set(CODE_THEME_KEY, theme.key());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    #[test]
    fn test_default_when_nothing_stored() {
        let pref = ThemePreference::load(MemoryStorage::new());
        assert_eq!(pref.get(), CodeTheme::OneDark);
    }

    #[test]
    fn test_set_persists_across_loads() {
        let storage = MemoryStorage::new();
        let mut pref = ThemePreference::load(storage.clone());
        pref.set(CodeTheme::Dracula);
        assert_eq!(pref.get(), CodeTheme::Dracula);
        assert_eq!(storage.get(CODE_THEME_KEY).as_deref(), Some("dracula"));

        let reloaded = ThemePreference::load(storage);
        assert_eq!(reloaded.get(), CodeTheme::Dracula);
    }

    #[test]
    fn test_unknown_stored_key_falls_back() {
        let storage = MemoryStorage::new();
        storage.set(CODE_THEME_KEY, "solarized");
        assert_eq!(ThemePreference::load(storage).get(), CodeTheme::OneDark);
    }

    #[test]
    fn test_keys_parse_back() {
        for theme in CodeTheme::ALL {
            assert_eq!(theme.key().parse::<CodeTheme>(), Ok(theme));
        }
        assert_eq!(CodeTheme::Synthwave84.label(), "Synthwave '84");
    }
}
