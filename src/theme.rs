//! Theme registry and the orchestrator's selection snapshot.
//!
//! The active selection is the only state shared between builds, so the
//! orchestrator snapshots it on entry and restores it on every exit path
//! via [`ThemeSnapshot`]. Interior mutability keeps the registry shareable
//! by reference in the single-threaded pipeline.

use crate::error::PipelineError;
use std::cell::RefCell;
use std::collections::HashMap;

/// Styling constants a page builder reads while drawing. Resolving these
/// into strokes and fills is the rendering surface's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub foreground: String,
    pub background: String,
    pub accent: String,
    pub muted: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: "#1a1a1a".to_string(),
            background: "#ffffff".to_string(),
            accent: "#2a6f4e".to_string(),
            muted: "#9a9a9a".to_string(),
        }
    }
}

#[derive(Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    active: RefCell<Option<String>>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, theme: Theme) {
        self.themes.insert(name.into(), theme);
    }

    pub fn select(&self, name: &str) -> Result<(), PipelineError> {
        if !self.themes.contains_key(name) {
            return Err(PipelineError::Config(format!("unknown theme '{}'", name)));
        }
        *self.active.borrow_mut() = Some(name.to_string());
        Ok(())
    }

    pub fn clear_selection(&self) {
        *self.active.borrow_mut() = None;
    }

    pub fn active_name(&self) -> Option<String> {
        self.active.borrow().clone()
    }

    /// The currently selected theme, or the default when nothing is
    /// selected or the selection no longer exists.
    pub fn active(&self) -> Theme {
        self.active
            .borrow()
            .as_ref()
            .and_then(|name| self.themes.get(name))
            .cloned()
            .unwrap_or_default()
    }

    /// Captures the active selection; dropping the snapshot restores it.
    pub fn snapshot(&self) -> ThemeSnapshot<'_> {
        ThemeSnapshot {
            registry: self,
            saved: self.active_name(),
        }
    }
}

/// RAII guard restoring a theme selection on drop, success or error alike.
pub struct ThemeSnapshot<'a> {
    registry: &'a ThemeRegistry,
    saved: Option<String>,
}

impl Drop for ThemeSnapshot<'_> {
    fn drop(&mut self) {
        *self.registry.active.borrow_mut() = self.saved.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ThemeRegistry {
        let mut registry = ThemeRegistry::new();
        registry.insert("light", Theme::default());
        registry.insert(
            "dark",
            Theme {
                foreground: "#eeeeee".to_string(),
                background: "#101010".to_string(),
                ..Theme::default()
            },
        );
        registry
    }

    #[test]
    fn select_requires_a_known_theme() {
        let registry = registry();
        assert!(registry.select("dark").is_ok());
        assert!(registry.select("sepia").is_err());
        assert_eq!(registry.active_name().as_deref(), Some("dark"));
    }

    #[test]
    fn snapshot_restores_on_drop() {
        let registry = registry();
        registry.select("light").unwrap();
        {
            let _snapshot = registry.snapshot();
            registry.select("dark").unwrap();
            assert_eq!(registry.active_name().as_deref(), Some("dark"));
        }
        assert_eq!(registry.active_name().as_deref(), Some("light"));
    }

    #[test]
    fn snapshot_restores_an_empty_selection() {
        let registry = registry();
        {
            let _snapshot = registry.snapshot();
            registry.select("dark").unwrap();
        }
        assert_eq!(registry.active_name(), None);
    }
}
