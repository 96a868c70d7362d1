use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{Skin, Theme, BUILTIN_SKINS, BUILTIN_THEMES};

const USER_THEME_APP_DIR: &str = "snake-elite";

/// A named theme as exposed to the menu and renderer.
#[derive(Debug, Clone)]
pub struct ThemeItem {
    pub id: String,
    pub theme: Theme,
}

/// A named snake skin.
#[derive(Debug, Clone)]
pub struct SkinItem {
    pub id: String,
    pub skin: Skin,
}

/// Problems with a single user theme file.
///
/// These never surface to the player: a broken cosmetic file is skipped and
/// the builtin sets keep the session going.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid theme json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid color literal {0:?}, expected #rrggbb")]
    Color(String),
    #[error("theme file has no usable name")]
    Name,
}

/// The cyclable cosmetic sets: builtin themes and skins, with user-provided
/// theme files overlaid by id.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<ThemeItem>,
    skins: Vec<SkinItem>,
}

impl ThemeCatalog {
    /// Loads the builtin sets, then overlays `*.json` files from the user
    /// theme directory. Unreadable or malformed files are skipped.
    #[must_use]
    pub fn load() -> Self {
        let mut catalog = Self::builtin();
        if let Some(dir) = user_theme_dir() {
            catalog.merge_theme_dir(&dir);
        }
        catalog
    }

    /// Returns only the builtin themes and skins.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            themes: BUILTIN_THEMES
                .iter()
                .map(|(id, theme)| ThemeItem {
                    id: (*id).to_owned(),
                    theme: *theme,
                })
                .collect(),
            skins: BUILTIN_SKINS
                .iter()
                .map(|(id, skin)| SkinItem {
                    id: (*id).to_owned(),
                    skin: *skin,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn theme_count(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn skin_count(&self) -> usize {
        self.skins.len()
    }

    /// Returns the theme at `index`, clamping out-of-range indices to the
    /// first entry. The catalog is never empty.
    #[must_use]
    pub fn theme_at(&self, index: usize) -> &Theme {
        &self.themes.get(index).unwrap_or(&self.themes[0]).theme
    }

    #[must_use]
    pub fn skin_at(&self, index: usize) -> &Skin {
        &self.skins.get(index).unwrap_or(&self.skins[0]).skin
    }

    #[must_use]
    pub fn theme_id_at(&self, index: usize) -> &str {
        &self.themes.get(index).unwrap_or(&self.themes[0]).id
    }

    #[must_use]
    pub fn skin_id_at(&self, index: usize) -> &str {
        &self.skins.get(index).unwrap_or(&self.skins[0]).id
    }

    /// Finds a theme by id, case-insensitively.
    #[must_use]
    pub fn position_of_theme(&self, id: &str) -> Option<usize> {
        let wanted = id.to_ascii_lowercase();
        self.themes.iter().position(|item| item.id == wanted)
    }

    fn merge_theme_dir(&mut self, dir: &Path) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension() != Some(OsStr::new("json")) {
                continue;
            }
            let Ok(item) = load_theme_file(&path) else {
                continue;
            };
            self.upsert_theme(item);
        }
    }

    fn upsert_theme(&mut self, item: ThemeItem) {
        match self.themes.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => existing.theme = item.theme,
            None => self.themes.push(item),
        }
    }
}

/// On-disk shape of one user theme file.
#[derive(Debug, Deserialize)]
struct ThemeFile {
    bg: String,
    grid: String,
    wall: String,
    ui: String,
}

fn user_theme_dir() -> Option<PathBuf> {
    let mut dir = dirs::data_local_dir()?;
    dir.push(USER_THEME_APP_DIR);
    dir.push("themes");
    Some(dir)
}

fn load_theme_file(path: &Path) -> Result<ThemeItem, ThemeError> {
    let raw = fs::read_to_string(path)?;
    let file: ThemeFile = serde_json::from_str(&raw)?;
    let id = path
        .file_stem()
        .and_then(OsStr::to_str)
        .ok_or(ThemeError::Name)?
        .to_ascii_lowercase();

    Ok(ThemeItem {
        id,
        theme: Theme {
            bg: parse_hex_color(&file.bg)?,
            grid: parse_hex_color(&file.grid)?,
            wall: parse_hex_color(&file.wall)?,
            ui: parse_hex_color(&file.ui)?,
        },
    })
}

fn parse_hex_color(raw: &str) -> Result<Color, ThemeError> {
    let digits = raw.strip_prefix('#').unwrap_or(raw);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ThemeError::Color(raw.to_owned()));
    }

    let component = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ThemeError::Color(raw.to_owned()))
    };

    Ok(Color::Rgb(
        component(0..2)?,
        component(2..4)?,
        component(4..6)?,
    ))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use ratatui::style::Color;

    use super::{load_theme_file, parse_hex_color, ThemeCatalog};

    #[test]
    fn builtin_catalog_has_three_of_each() {
        let catalog = ThemeCatalog::builtin();

        assert_eq!(catalog.theme_count(), 3);
        assert_eq!(catalog.skin_count(), 3);
        assert_eq!(catalog.theme_id_at(0), "mainframe");
        assert_eq!(catalog.skin_id_at(2), "toxic");
    }

    #[test]
    fn position_lookup_is_case_insensitive() {
        let catalog = ThemeCatalog::builtin();

        assert_eq!(catalog.position_of_theme("SYNTHWAVE"), Some(2));
        assert_eq!(catalog.position_of_theme("nope"), None);
    }

    #[test]
    fn out_of_range_indices_fall_back_to_first_entry() {
        let catalog = ThemeCatalog::builtin();

        assert_eq!(catalog.theme_id_at(99), "mainframe");
        assert_eq!(catalog.skin_id_at(99), "classic");
    }

    #[test]
    fn hex_colors_parse_with_or_without_hash() {
        assert_eq!(parse_hex_color("#14001e").unwrap(), Color::Rgb(20, 0, 30));
        assert_eq!(parse_hex_color("ff00ff").unwrap(), Color::Rgb(255, 0, 255));

        assert!(parse_hex_color("#abc").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
    }

    #[test]
    fn malformed_theme_file_is_an_error_not_a_panic() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(load_theme_file(&path).is_err());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn valid_theme_file_round_trips() {
        let path = unique_test_path("ember");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(
            &path,
            r##"{"bg": "#100500", "grid": "#201000", "wall": "#ffaa00", "ui": "#ff6600"}"##,
        )
        .expect("test file write should succeed");

        let item = load_theme_file(&path).expect("valid file should parse");
        assert!(item.id.starts_with("ember"));
        assert_eq!(item.theme.ui, Color::Rgb(255, 102, 0));

        let _ = fs::remove_file(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("snake-elite-theme-tests")
            .join(format!("{label}-{nanos}.json"))
    }
}
