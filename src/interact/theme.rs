use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context as _;

use crate::{
    content::model::LogoSources,
    foundation::error::{LandkitError, LandkitResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn logo_src(self, logo: &LogoSources) -> &str {
        match self {
            Self::Light => &logo.light,
            Self::Dark => &logo.dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = LandkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(LandkitError::validation(format!("unknown theme '{other}'"))),
        }
    }
}

/// Where the chosen theme survives between page loads.
pub trait ThemeStore: fmt::Debug {
    fn load(&self) -> LandkitResult<Option<Theme>>;
    fn save(&mut self, theme: Theme) -> LandkitResult<()>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryThemeStore {
    value: Option<Theme>,
}

impl MemoryThemeStore {
    pub fn new(value: Option<Theme>) -> Self {
        Self { value }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> LandkitResult<Option<Theme>> {
        Ok(self.value)
    }

    fn save(&mut self, theme: Theme) -> LandkitResult<()> {
        self.value = Some(theme);
        Ok(())
    }
}

/// Stores the theme name as a single line of text.
#[derive(Clone, Debug)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> LandkitResult<Option<Theme>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("read theme file '{}'", self.path.display()))
                    .into());
            }
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some)
    }

    fn save(&mut self, theme: Theme) -> LandkitResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create theme dir '{}'", parent.display()))?;
            }
        }
        std::fs::write(&self.path, format!("{theme}\n"))
            .with_context(|| format!("write theme file '{}'", self.path.display()))?;
        Ok(())
    }
}

/// Current theme plus the store it is persisted to.
#[derive(Debug)]
pub struct ThemeSwitch {
    current: Theme,
    store: Box<dyn ThemeStore>,
}

impl ThemeSwitch {
    /// Stored preference wins, then the system preference, then [`Theme::Light`].
    pub fn new(store: Box<dyn ThemeStore>, system: Option<Theme>) -> LandkitResult<Self> {
        let current = store.load()?.or(system).unwrap_or_default();
        Ok(Self { current, store })
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn set(&mut self, theme: Theme) -> LandkitResult<()> {
        self.store.save(theme)?;
        self.current = theme;
        Ok(())
    }

    pub fn toggle(&mut self) -> LandkitResult<Theme> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/theme.rs"]
mod tests;
