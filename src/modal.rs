//! Shared modal display state.
//!
//! A single [`ModalState`] backs the one modal overlay on the page. Every open
//! overwrites whatever the previous item left behind, so close never has to
//! reset content.

/// Content copied out of a gallery item at click time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemContent {
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
}

/// Keys that dismiss an open modal.
const DISMISS_KEYS: [&str; 2] = ["Escape", "Esc"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
    content: Option<ItemContent>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `content`, replacing anything previously displayed.
    pub fn open(&mut self, content: ItemContent) {
        self.content = Some(content);
        self.open = true;
    }

    /// Hide the modal. Returns `false` if it was already hidden.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Close on a dismiss key while open. Anything else is a no-op.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.open && DISMISS_KEYS.contains(&key) && self.close()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn content(&self) -> Option<&ItemContent> {
        self.content.as_ref()
    }

    /// CSS `display` for the modal container.
    pub fn display(&self) -> &'static str {
        if self.open {
            "block"
        } else {
            "none"
        }
    }

    /// Page scroll policy while in this state.
    pub fn scroll_lock(&self) -> ScrollLock {
        if self.open {
            ScrollLock::Locked
        } else {
            ScrollLock::Free
        }
    }
}

/// Background page scrolling, expressed as the body's `overflow` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollLock {
    Locked,
    Free,
}

impl ScrollLock {
    pub fn overflow(self) -> &'static str {
        match self {
            Self::Locked => "hidden",
            Self::Free => "auto",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sunset() -> ItemContent {
        ItemContent {
            image_src: "sunset.jpg".into(),
            image_alt: "Sunset".into(),
            title: "Sunset".into(),
            description: "A beautiful sunset".into(),
        }
    }

    fn forest() -> ItemContent {
        ItemContent {
            image_src: "forest.jpg".into(),
            image_alt: "Forest".into(),
            title: "Forest".into(),
            description: "Tall pines".into(),
        }
    }

    #[test]
    fn opening_copies_item_and_locks_scroll() {
        let mut modal = ModalState::new();
        modal.open(sunset());
        assert!(modal.is_open());
        assert_eq!(modal.content(), Some(&sunset()));
        assert_eq!(modal.display(), "block");
        assert_eq!(modal.scroll_lock().overflow(), "hidden");
    }

    #[test]
    fn close_hides_and_frees_scroll() {
        let mut modal = ModalState::new();
        modal.open(sunset());
        assert!(modal.close());
        assert_eq!(modal.display(), "none");
        assert_eq!(modal.scroll_lock(), ScrollLock::Free);
        assert_eq!(modal.scroll_lock().overflow(), "auto");
        assert!(!modal.close());
    }

    #[test]
    fn reopening_shows_latest_item_only() {
        let mut modal = ModalState::new();
        modal.open(sunset());
        modal.close();
        modal.open(forest());
        assert_eq!(modal.content(), Some(&forest()));
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut modal = ModalState::new();
        let before = modal.clone();
        assert!(!modal.handle_key("Escape"));
        assert_eq!(modal, before);

        modal.open(sunset());
        assert!(!modal.handle_key("Enter"));
        assert!(modal.is_open());
        assert!(modal.handle_key("Escape"));
        assert!(!modal.is_open());
    }

    #[test]
    fn legacy_esc_key_name_dismisses() {
        let mut modal = ModalState::new();
        modal.open(forest());
        assert!(modal.handle_key("Esc"));
    }
}
