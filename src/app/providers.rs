use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{
    storage::{use_local_storage_with_options, UseStorageOptions},
    use_media_query, use_window_size, UseWindowSizeReturn,
};

use crate::{
    capability::{detect, CapabilityProbe, CapabilitySnapshot, ProbeError, REDUCED_MOTION_QUERY},
    theme::{Theme, ThemeEnvironment, ThemeError, ThemeStore, THEME_STORAGE_KEY},
};

/// Theme environment backed by `localStorage` and the `<html>` class list.
pub struct DocumentTheme {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
}

impl DocumentTheme {
    fn new() -> Self {
        let (stored, set_stored, _) = use_local_storage_with_options::<String, FromToStringCodec>(
            THEME_STORAGE_KEY,
            UseStorageOptions::default().on_error(|e| log::warn!("theme storage: {e}")),
        );
        Self { stored, set_stored }
    }
}

impl ThemeEnvironment for DocumentTheme {
    fn load(&self) -> Option<String> {
        Some(self.stored.get_untracked()).filter(|raw| !raw.is_empty())
    }

    fn persist(&mut self, theme: Theme) -> Result<(), ThemeError> {
        // write failures surface through the storage hook's error callback
        self.set_stored.set(theme.as_str().to_string());
        Ok(())
    }

    fn apply(&mut self, theme: Theme) -> Result<(), ThemeError> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| ThemeError::Document("no document element".to_string()))?;
        let classes = root.class_list();
        classes
            .remove_2(Theme::Light.as_str(), Theme::Dark.as_str())
            .and_then(|_| classes.add_1(theme.as_str()))
            .map_err(|e| ThemeError::Document(format!("{e:?}")))
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<Theme>,
    resolved: ReadSignal<bool>,
    store: StoredValue<ThemeStore<DocumentTheme>>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get()
    }

    pub fn set(&self, theme: Theme) {
        self.store.update_value(|s| s.set(theme));
    }

    pub fn toggle(&self) {
        self.store.update_value(|s| {
            s.toggle();
        });
    }
}

pub fn provide_theme() -> ThemeContext {
    let (theme, set_theme) = signal(Theme::default());
    let (resolved, set_resolved) = signal(false);
    let store = StoredValue::new(ThemeStore::new(DocumentTheme::new()));
    store.update_value(|s| {
        s.subscribe(move |t| set_theme.set(t));
    });

    // effects only run in the browser, after hydration
    Effect::new(move |_| {
        store.update_value(|s| {
            let t = s.resolve();
            log::debug!("theme resolved to {t}");
        });
        set_resolved.set(true);
    });

    let ctx = ThemeContext {
        theme,
        resolved,
        store,
    };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

struct BrowserProbe {
    viewport_width: f64,
    reduced_motion: bool,
}

impl CapabilityProbe for BrowserProbe {
    fn viewport_width(&self) -> Result<f64, ProbeError> {
        if self.viewport_width.is_finite() {
            Ok(self.viewport_width)
        } else {
            Err(ProbeError::Unavailable("viewport width"))
        }
    }

    fn user_agent(&self) -> Result<String, ProbeError> {
        web_sys::window()
            .ok_or(ProbeError::NoWindow)?
            .navigator()
            .user_agent()
            .map_err(|_| ProbeError::Unavailable("user agent"))
    }

    fn prefers_reduced_motion(&self) -> Result<bool, ProbeError> {
        Ok(self.reduced_motion)
    }
}

/// Live capability snapshot. Stays at the all-`false` default until the
/// client mounts so hydration sees the same markup the server rendered.
pub fn provide_capabilities() -> Signal<CapabilitySnapshot> {
    let (mounted, set_mounted) = signal(false);
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let reduced_motion = use_media_query(REDUCED_MOTION_QUERY);

    Effect::new(move |_| set_mounted.set(true));

    let snapshot = Memo::new(move |_| {
        if !mounted.get() {
            return CapabilitySnapshot::default();
        }
        detect(&BrowserProbe {
            viewport_width: width.get(),
            reduced_motion: reduced_motion.get(),
        })
    });
    let snapshot = Signal::from(snapshot);
    provide_context(snapshot);
    snapshot
}

pub fn use_capabilities() -> Signal<CapabilitySnapshot> {
    use_context::<Signal<CapabilitySnapshot>>()
        .unwrap_or_else(|| Signal::stored(CapabilitySnapshot::default()))
}
