//! Menu item descriptors
//!
//! The geometry core only ever consumes the item count and the separator
//! count; everything else on an item is carried through for the overlay-list
//! renderer.

use std::sync::Arc;

/// One row of the menu
#[derive(Clone)]
pub struct MenuItem {
    /// Display label
    label: String,
    /// Extra visual gap after this item (beyond the hairline divider)
    with_separator: bool,
    /// Non-interactive heading row
    is_title: bool,
    /// Rendered in the destructive accent color
    is_destructive: bool,
    /// Optional icon name resolved by the renderer
    icon: Option<String>,
    /// Press handler, dispatched by the overlay renderer
    on_press: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl std::fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("with_separator", &self.with_separator)
            .field("is_title", &self.is_title)
            .field("is_destructive", &self.is_destructive)
            .field("icon", &self.icon)
            .field("on_press", &self.on_press.is_some())
            .finish()
    }
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            with_separator: false,
            is_title: false,
            is_destructive: false,
            icon: None,
            on_press: None,
        }
    }

    /// Add a visual separator gap after this item
    pub fn with_separator(mut self) -> Self {
        self.with_separator = true;
        self
    }

    /// Mark as a heading row
    pub fn title(mut self) -> Self {
        self.is_title = true;
        self
    }

    /// Mark as destructive (delete-style styling)
    pub fn destructive(mut self) -> Self {
        self.is_destructive = true;
        self
    }

    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }

    pub fn on_press<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_press = Some(Arc::new(f));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn has_separator(&self) -> bool {
        self.with_separator
    }

    pub fn is_title(&self) -> bool {
        self.is_title
    }

    pub fn is_destructive(&self) -> bool {
        self.is_destructive
    }

    pub fn icon_name(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Press handler, if any (clones the Arc)
    pub fn press_handler(&self) -> Option<Arc<dyn Fn() + Send + Sync>> {
        self.on_press.clone()
    }
}

/// Ordered list of menu items
///
/// Identity matters: replacing the list is what triggers a menu-height
/// recomputation, never a per-frame geometry pass.
#[derive(Clone, Debug, Default)]
pub struct MenuSpec {
    items: Vec<MenuItem>,
}

impl MenuSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many items carry the explicit separator flag
    pub fn separator_count(&self) -> usize {
        self.items.iter().filter(|item| item.has_separator()).count()
    }
}
