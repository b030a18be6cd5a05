//! The page hosting the review: background scroll state and the event
//! listeners the detail modal registers while it is open.
//!
//! Both resources are handed out as guards. Dropping a guard releases what it
//! holds, so every exit path (close, replace, teardown) gives them back.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    OutsideClick,
    EscapeKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Escape,
    PointerDown { inside_modal: bool },
}

impl ListenerKind {
    fn matches(self, event: PageEvent) -> bool {
        match (self, event) {
            (ListenerKind::EscapeKey, PageEvent::Escape) => true,
            (ListenerKind::OutsideClick, PageEvent::PointerDown { inside_modal }) => !inside_modal,
            _ => false,
        }
    }
}

#[derive(Debug, Default)]
struct PageState {
    scroll_locks: usize,
    next_listener_id: u64,
    listeners: Vec<(u64, ListenerKind)>,
}

/// Single-threaded handle to the page; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct Page {
    state: Rc<RefCell<PageState>>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.state.borrow().scroll_locks > 0
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Suppress background scroll until the returned guard is dropped.
    pub fn lock_scroll(&self) -> ScrollLock {
        let mut state = self.state.borrow_mut();
        state.scroll_locks += 1;
        if state.scroll_locks == 1 {
            tracing::debug!("Background scroll suppressed");
        }
        ScrollLock { page: self.clone() }
    }

    pub fn subscribe(&self, kind: ListenerKind) -> Subscription {
        let mut state = self.state.borrow_mut();
        let id = state.next_listener_id;
        state.next_listener_id += 1;
        state.listeners.push((id, kind));
        tracing::trace!("Registered {:?} listener #{}", kind, id);
        Subscription {
            page: self.clone(),
            id,
        }
    }

    /// Deliver `event` to the registered listeners. Returns the first listener
    /// kind that accepted it, or `None` when nobody is listening for it.
    pub fn dispatch(&self, event: PageEvent) -> Option<ListenerKind> {
        self.state
            .borrow()
            .listeners
            .iter()
            .map(|(_, kind)| *kind)
            .find(|kind| kind.matches(event))
    }
}

#[must_use = "scroll is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScrollLock {
    page: Page,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let mut state = self.page.state.borrow_mut();
        state.scroll_locks = state.scroll_locks.saturating_sub(1);
        if state.scroll_locks == 0 {
            tracing::debug!("Background scroll restored");
        }
    }
}

#[must_use = "the listener is removed as soon as the guard is dropped"]
#[derive(Debug)]
pub struct Subscription {
    page: Page,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let id = self.id;
        self.page
            .state
            .borrow_mut()
            .listeners
            .retain(|(listener, _)| *listener != id);
        tracing::trace!("Removed listener #{}", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_lock_released_on_drop() {
        let page = Page::new();
        assert!(!page.is_scroll_locked());
        {
            let _lock = page.lock_scroll();
            assert!(page.is_scroll_locked());
        }
        assert!(!page.is_scroll_locked());
    }

    #[test]
    fn test_dispatch_only_reaches_registered_listeners() {
        let page = Page::new();
        assert_eq!(page.dispatch(PageEvent::Escape), None);

        let esc = page.subscribe(ListenerKind::EscapeKey);
        let outside = page.subscribe(ListenerKind::OutsideClick);
        assert_eq!(page.listener_count(), 2);
        assert_eq!(page.dispatch(PageEvent::Escape), Some(ListenerKind::EscapeKey));
        assert_eq!(
            page.dispatch(PageEvent::PointerDown { inside_modal: false }),
            Some(ListenerKind::OutsideClick)
        );
        assert_eq!(page.dispatch(PageEvent::PointerDown { inside_modal: true }), None);

        drop(esc);
        assert_eq!(page.dispatch(PageEvent::Escape), None);
        drop(outside);
        assert_eq!(page.listener_count(), 0);
    }
}
