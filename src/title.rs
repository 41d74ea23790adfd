//! Window title cache and change notification
//!
//! Holds the last title set through OSC 0/2 and a single observer slot.
//! The observer runs synchronously on the caller's thread for every update,
//! including updates that repeat the current title.

use std::fmt;

/// Observer invoked with the new title
pub type TitleCallback = Box<dyn FnMut(&str)>;

/// Cached title plus at most one change observer
#[derive(Default)]
pub struct WindowTitle {
    title: String,
    on_change: Option<TitleCallback>,
}

impl WindowTitle {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            title: initial.into(),
            on_change: None,
        }
    }

    pub fn get(&self) -> &str {
        &self.title
    }

    /// Register the observer. Replaces any previous one.
    pub fn set_callback(&mut self, callback: TitleCallback) {
        if self.on_change.is_some() {
            tracing::debug!("replacing title observer");
        }
        self.on_change = Some(callback);
    }

    /// Remove the observer, returning it if one was registered
    pub fn take_callback(&mut self) -> Option<TitleCallback> {
        self.on_change.take()
    }

    pub fn has_callback(&self) -> bool {
        self.on_change.is_some()
    }

    /// Replace the cached title, then notify the observer
    pub fn update(&mut self, title: &str) {
        self.title.clear();
        self.title.push_str(title);
        tracing::debug!(title, "window title changed");
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.title);
        }
    }
}

impl fmt::Debug for WindowTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowTitle")
            .field("title", &self.title)
            .field("has_callback", &self.has_callback())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, TitleCallback) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, Box::new(move |t: &str| sink.borrow_mut().push(t.to_string())))
    }

    #[test]
    fn test_update_without_callback_caches() {
        let mut title = WindowTitle::default();
        title.update("vim");
        assert_eq!(title.get(), "vim");
    }

    #[test]
    fn test_update_replaces() {
        let mut title = WindowTitle::new("long initial title");
        title.update("ls");
        assert_eq!(title.get(), "ls");
    }

    #[test]
    fn test_last_registration_wins() {
        let (first, cb1) = recorder();
        let (second, cb2) = recorder();
        let mut title = WindowTitle::default();
        title.set_callback(cb1);
        title.set_callback(cb2);
        title.update("top");
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), vec!["top".to_string()]);
    }

    #[test]
    fn test_take_callback_stops_notifications() {
        let (seen, cb) = recorder();
        let mut title = WindowTitle::default();
        title.set_callback(cb);
        assert!(title.take_callback().is_some());
        title.update("quiet");
        assert!(seen.borrow().is_empty());
        assert!(!title.has_callback());
    }

    #[test]
    fn test_debug_hides_callback() {
        let mut title = WindowTitle::new("x");
        title.set_callback(Box::new(|_: &str| {}));
        assert_eq!(
            format!("{:?}", title),
            r#"WindowTitle { title: "x", has_callback: true }"#
        );
    }
}
