use super::page::{ListenerKind, Page, PageEvent, ScrollLock, Subscription};
use crate::record::models::Record;
use crate::report::detail::DetailView;

/// What asked the modal to close. All of them end in [`DetailModal::close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    OutsideClick,
    EscapeKey,
}

impl From<ListenerKind> for CloseTrigger {
    fn from(kind: ListenerKind) -> Self {
        match kind {
            ListenerKind::OutsideClick => CloseTrigger::OutsideClick,
            ListenerKind::EscapeKey => CloseTrigger::EscapeKey,
        }
    }
}

// Guards are dropped together with the open state.
#[derive(Debug)]
struct OpenDetail {
    view: DetailView,
    _listeners: [Subscription; 2],
    _scroll: ScrollLock,
}

/// Modal detail view. At most one record is shown at a time.
#[derive(Debug)]
pub struct DetailModal {
    page: Page,
    open: Option<OpenDetail>,
}

impl DetailModal {
    pub fn new(page: Page) -> Self {
        Self { page, open: None }
    }

    /// Show `record`, replacing whatever is currently open.
    pub fn open(&mut self, record: &Record) -> &DetailView {
        if let Some(previous) = self.open.take() {
            tracing::debug!("Replacing detail view for record {}", previous.view.id);
        }

        let open = self.open.insert(OpenDetail {
            view: DetailView::from_record(record),
            _listeners: [
                self.page.subscribe(ListenerKind::OutsideClick),
                self.page.subscribe(ListenerKind::EscapeKey),
            ],
            _scroll: self.page.lock_scroll(),
        });
        tracing::info!("Opened detail view for record {}", record.id);
        &open.view
    }

    /// Close the modal. Returns false when it was already closed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        match self.open.take() {
            Some(closed) => {
                tracing::info!(
                    "Closed detail view for record {} ({:?})",
                    closed.view.id,
                    trigger
                );
                true
            }
            None => false,
        }
    }

    /// Route a page event; closes the modal when one of its listeners fires.
    pub fn handle(&mut self, event: PageEvent) -> bool {
        match self.page.dispatch(event) {
            Some(kind) => self.close(kind.into()),
            None => false,
        }
    }

    pub fn current(&self) -> Option<&DetailView> {
        self.open.as_ref().map(|o| &o.view)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}
