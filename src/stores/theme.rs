//! Theme Store
//!
//! Dark/light preference. Every change is persisted under the `theme` key
//! and reflected as exactly one of two classes on the document root.

use std::sync::Arc;

use log::warn;

use crate::storage::{SharedStorage, THEME_KEY};
use crate::store::{store_is_dark, store_set_dark, AppStore};

pub const DARK_MARKER: &str = "dark-theme";
pub const LIGHT_MARKER: &str = "light-theme";

/// Element that carries the theme marker classes
pub trait ThemeRoot: Send + Sync {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// `document.documentElement`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRoot;

impl BrowserRoot {
    fn class_list() -> Option<web_sys::DomTokenList> {
        if !cfg!(target_arch = "wasm32") {
            return None;
        }
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|el| el.class_list())
    }

    /// `prefers-color-scheme: dark` media query
    pub fn prefers_dark() -> bool {
        if !cfg!(target_arch = "wasm32") {
            return false;
        }
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }
}

impl ThemeRoot for BrowserRoot {
    fn add_class(&self, class: &str) {
        if let Some(list) = Self::class_list() {
            let _ = list.add_1(class);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Some(list) = Self::class_list() {
            let _ = list.remove_1(class);
        }
    }
}

/// Stored choice wins; otherwise follow the OS preference
pub fn initial_theme(saved: Option<&str>, prefers_dark: bool) -> bool {
    match saved {
        Some("dark") => true,
        Some("light") => false,
        _ => prefers_dark,
    }
}

#[derive(Clone)]
pub struct ThemeStore {
    state: AppStore,
    storage: SharedStorage,
    root: Arc<dyn ThemeRoot>,
}

impl ThemeStore {
    /// Resolve the initial theme and apply its marker
    pub fn init(
        state: AppStore,
        storage: SharedStorage,
        root: Arc<dyn ThemeRoot>,
        prefers_dark: bool,
    ) -> Self {
        let saved = storage.get_item(THEME_KEY).unwrap_or_else(|e| {
            warn!("[THEME] Failed to read saved theme: {}", e);
            None
        });
        let dark = initial_theme(saved.as_deref(), prefers_dark);
        store_set_dark(&state, dark);

        let store = Self {
            state,
            storage,
            root,
        };
        store.apply(dark);
        store
    }

    pub fn is_dark(&self) -> bool {
        store_is_dark(&self.state)
    }

    pub fn set_theme(&self, dark: bool) {
        store_set_dark(&self.state, dark);
        let value = if dark { "dark" } else { "light" };
        if let Err(e) = self.storage.set_item(THEME_KEY, value) {
            warn!("[THEME] Failed to persist theme: {}", e);
        }
        self.apply(dark);
    }

    pub fn toggle_theme(&self) {
        self.set_theme(!self.is_dark());
    }

    fn apply(&self, dark: bool) {
        let (on, off) = if dark {
            (DARK_MARKER, LIGHT_MARKER)
        } else {
            (LIGHT_MARKER, DARK_MARKER)
        };
        self.root.add_class(on);
        self.root.remove_class(off);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::Mutex;

    use crate::storage::{KeyValueStorage, MemoryStorage};
    use crate::store::new_app_store;

    #[derive(Default)]
    struct RecordingRoot {
        classes: Mutex<BTreeSet<String>>,
    }

    impl RecordingRoot {
        fn classes(&self) -> Vec<String> {
            self.classes.lock().unwrap().iter().cloned().collect()
        }
    }

    impl ThemeRoot for RecordingRoot {
        fn add_class(&self, class: &str) {
            self.classes.lock().unwrap().insert(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.classes.lock().unwrap().remove(class);
        }
    }

    fn setup(saved: Option<&str>, prefers_dark: bool) -> (ThemeStore, MemoryStorage, Arc<RecordingRoot>) {
        let memory = MemoryStorage::default();
        if let Some(value) = saved {
            memory.set_item(THEME_KEY, value).unwrap();
        }
        let root = Arc::new(RecordingRoot::default());
        let theme = ThemeStore::init(new_app_store(), Arc::new(memory.clone()), root.clone(), prefers_dark);
        (theme, memory, root)
    }

    #[test]
    fn test_initial_theme_resolution() {
        assert!(initial_theme(Some("dark"), false));
        assert!(!initial_theme(Some("light"), true));
        assert!(initial_theme(None, true));
        assert!(!initial_theme(None, false));
        assert!(initial_theme(Some("sepia"), true));
    }

    #[test]
    fn test_init_applies_marker_without_persisting() {
        let (theme, memory, root) = setup(None, true);
        assert!(theme.is_dark());
        assert_eq!(root.classes(), vec![DARK_MARKER.to_string()]);
        assert!(memory.get_item(THEME_KEY).unwrap().is_none());
    }

    #[test]
    fn test_set_theme_swaps_markers_and_persists() {
        let (theme, memory, root) = setup(Some("dark"), false);
        theme.set_theme(false);
        assert!(!theme.is_dark());
        assert_eq!(root.classes(), vec![LIGHT_MARKER.to_string()]);
        assert_eq!(memory.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_twice_restores_value_and_marker() {
        let (theme, memory, root) = setup(Some("light"), true);
        let before = root.classes();

        theme.toggle_theme();
        assert_eq!(memory.get_item(THEME_KEY).unwrap().as_deref(), Some("dark"));
        theme.toggle_theme();

        assert!(!theme.is_dark());
        assert_eq!(memory.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(root.classes(), before);
    }
}
