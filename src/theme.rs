use std::{fmt, str::FromStr};

use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub const fn opposite(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub const fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0:?}")]
    Unknown(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("document root not updated: {0}")]
    Document(String),
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

/// Body classes. Nothing theme-dependent goes here: the server always renders
/// `light`, so any themed paint outside the hidden page wrapper would flash.
pub const BODY_CLASS: &str = "relative overflow-x-hidden font-sans antialiased";

/// Page wrapper classes. The wrapper owns the themed background and stays
/// invisible until the stored theme has been applied.
pub const fn page_class(resolved: bool) -> &'static str {
    if resolved {
        "relative min-h-screen flex flex-col bg-stone-50 dark:bg-stone-950 transition-colors duration-300"
    } else {
        "relative min-h-screen flex flex-col bg-stone-50 dark:bg-stone-950 invisible"
    }
}

/// Where the theme lives outside the store: durable storage and the document root.
pub trait ThemeEnvironment {
    /// Raw value stored under [`THEME_STORAGE_KEY`], if any.
    fn load(&self) -> Option<String>;
    /// Overwrite the stored value.
    fn persist(&mut self, theme: Theme) -> Result<(), ThemeError>;
    /// Make `theme` the only theme class on the document root.
    fn apply(&mut self, theme: Theme) -> Result<(), ThemeError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Box<dyn Fn(Theme) + Send + Sync>;

/// Page-lifetime theme state.
///
/// Starts unresolved on `light` without touching the environment, so server
/// markup and the first client render agree. [`ThemeStore::resolve`] adopts
/// the stored preference once the client has mounted.
pub struct ThemeStore<E> {
    theme: Theme,
    resolved: bool,
    env: E,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

impl<E: ThemeEnvironment> ThemeStore<E> {
    pub fn new(env: E) -> Self {
        Self {
            theme: Theme::default(),
            resolved: false,
            env,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Adopt the stored theme, falling back to `light` when nothing valid is stored.
    ///
    /// Only the first call reads storage; later calls return the current theme.
    pub fn resolve(&mut self) -> Theme {
        if self.resolved {
            return self.theme;
        }
        let initial = match self.env.load() {
            Some(raw) => raw.parse().unwrap_or_else(|e: ThemeError| {
                log::warn!("ignoring stored theme: {e}");
                Theme::default()
            }),
            None => Theme::default(),
        };
        self.set(initial);
        initial
    }

    pub fn get(&self) -> Theme {
        self.theme
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.resolved = true;
        // the in-memory value stays authoritative even if the environment refuses
        if let Err(e) = self.env.apply(theme) {
            log::warn!("couldn't apply theme {theme}: {e}");
        }
        if let Err(e) = self.env.persist(theme) {
            log::warn!("couldn't persist theme {theme}: {e}");
        }
        for (_, listener) in &self.listeners {
            listener(theme);
        }
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.opposite();
        self.set(next);
        next
    }

    pub fn subscribe(&mut self, listener: impl Fn(Theme) + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        before != self.listeners.len()
    }

    pub fn environment(&self) -> &E {
        &self.env
    }
}
