pub mod modal;
pub mod page;

use crate::config::Settings;
use crate::record::RecordSet;
use crate::report::{ReportFormat, TableView, csv};
use modal::{CloseTrigger, DetailModal};
use page::{Page, PageEvent};

pub const HELP: &str = "\
Commands:
  open <id>       activate the row for record <id>
  close           press the modal's close button
  escape          press the escape key
  click-outside   click outside the modal
  click-inside    click inside the modal
  export          export all records to CSV
  table           show the records table
  help            show this help
  quit            leave the review";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Open(i64),
    Close,
    Escape,
    ClickOutside,
    ClickInside,
    Export,
    Table,
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let cmd = words.next().unwrap_or_default();
        let command = match cmd {
            "open" => {
                let id = words
                    .next()
                    .ok_or_else(|| "usage: open <id>".to_string())?;
                let id = id
                    .parse::<i64>()
                    .map_err(|_| format!("not a record id: {id}"))?;
                SessionCommand::Open(id)
            }
            "close" => SessionCommand::Close,
            "escape" | "esc" => SessionCommand::Escape,
            "click-outside" => SessionCommand::ClickOutside,
            "click-inside" => SessionCommand::ClickInside,
            "export" => SessionCommand::Export,
            "table" => SessionCommand::Table,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => return Err(format!("unknown command: {other} (try `help`)")),
        };
        if words.next().is_some() {
            return Err(format!("unexpected arguments after `{cmd}`"));
        }
        Ok(command)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// Interactive review over a loaded record set. Owns the only mutable state:
/// which record, if any, the detail modal shows.
pub struct Session {
    records: RecordSet,
    settings: Settings,
    modal: DetailModal,
}

impl Session {
    pub fn new(records: RecordSet, settings: Settings) -> Self {
        Self::with_page(records, settings, Page::new())
    }

    pub fn with_page(records: RecordSet, settings: Settings, page: Page) -> Self {
        Self {
            records,
            settings,
            modal: DetailModal::new(page),
        }
    }

    pub fn modal(&self) -> &DetailModal {
        &self.modal
    }

    pub fn apply(&mut self, command: SessionCommand) -> anyhow::Result<Outcome> {
        let out = match command {
            SessionCommand::Open(id) => self.open(id),
            SessionCommand::Close => closed_message(self.modal.close(CloseTrigger::Button)),
            SessionCommand::Escape => closed_message(self.modal.handle(PageEvent::Escape)),
            SessionCommand::ClickOutside => closed_message(
                self.modal
                    .handle(PageEvent::PointerDown { inside_modal: false }),
            ),
            SessionCommand::ClickInside => {
                self.modal
                    .handle(PageEvent::PointerDown { inside_modal: true });
                String::new()
            }
            SessionCommand::Export => self.export(),
            SessionCommand::Table => {
                TableView::build(&self.records).render(ReportFormat::Terminal)?
            }
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(out))
    }

    // A failed export is reported and the review carries on.
    fn export(&self) -> String {
        match csv::export(
            self.records.records(),
            &self.settings.export_dir,
            &self.settings.export_file_name,
        ) {
            Ok(path) => format!(
                "Exported {} record(s) to {}",
                self.records.len(),
                path.display()
            ),
            Err(e) => {
                tracing::warn!("Export failed: {}", e);
                format!("Export failed: {e}")
            }
        }
    }

    fn open(&mut self, id: i64) -> String {
        let view = TableView::build(&self.records);
        let modal = &mut self.modal;
        let mut rendered = String::new();
        let found = view.activate(id, |record| {
            rendered = modal.open(record).render_terminal();
        });
        if found {
            rendered
        } else {
            format!("No record with id {id}")
        }
    }
}

fn closed_message(closed: bool) -> String {
    if closed {
        "Detail view closed".to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_set;

    fn session() -> (Session, Page) {
        let page = Page::new();
        let s = Session::with_page(sample_set(), Settings::default(), page.clone());
        (s, page)
    }

    fn text(outcome: Outcome) -> String {
        match outcome {
            Outcome::Continue(s) => s,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(SessionCommand::parse("open 3"), Ok(SessionCommand::Open(3)));
        assert_eq!(SessionCommand::parse("  esc "), Ok(SessionCommand::Escape));
        assert_eq!(SessionCommand::parse("q"), Ok(SessionCommand::Quit));
        assert!(SessionCommand::parse("open").is_err());
        assert!(SessionCommand::parse("open x").is_err());
        assert!(SessionCommand::parse("close now").is_err());
        assert!(SessionCommand::parse("dance").is_err());
    }

    #[test]
    fn test_open_then_open_replaces() {
        let (mut s, page) = session();
        let out = text(s.apply(SessionCommand::Open(1)).unwrap());
        assert!(out.contains("Record Details: Ann"));
        let out = text(s.apply(SessionCommand::Open(2)).unwrap());
        assert!(out.contains("Record Details: Bob"));
        assert_eq!(s.modal().current().map(|v| v.id), Some(2));
        assert_eq!(page.listener_count(), 2);
    }

    #[test]
    fn test_all_close_paths_release_page() {
        for cmd in [
            SessionCommand::Close,
            SessionCommand::Escape,
            SessionCommand::ClickOutside,
        ] {
            let (mut s, page) = session();
            s.apply(SessionCommand::Open(2)).unwrap();
            assert!(page.is_scroll_locked());
            let out = text(s.apply(cmd.clone()).unwrap());
            assert_eq!(out, "Detail view closed", "{cmd:?}");
            assert!(!s.modal().is_open());
            assert!(!page.is_scroll_locked());
            assert_eq!(page.listener_count(), 0);
        }
    }

    #[test]
    fn test_click_inside_keeps_modal_open() {
        let (mut s, page) = session();
        s.apply(SessionCommand::Open(1)).unwrap();
        s.apply(SessionCommand::ClickInside).unwrap();
        assert!(s.modal().is_open());
        assert!(page.is_scroll_locked());
    }

    #[test]
    fn test_close_twice_is_quiet() {
        let (mut s, _) = session();
        s.apply(SessionCommand::Open(1)).unwrap();
        s.apply(SessionCommand::Close).unwrap();
        assert_eq!(text(s.apply(SessionCommand::Close).unwrap()), "");
    }

    #[test]
    fn test_unknown_record() {
        let (mut s, _) = session();
        let out = text(s.apply(SessionCommand::Open(42)).unwrap());
        assert_eq!(out, "No record with id 42");
        assert!(!s.modal().is_open());
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            export_dir: dir.path().to_path_buf(),
            ..Settings::default()
        };
        let mut s = Session::new(sample_set(), settings);
        let out = text(s.apply(SessionCommand::Export).unwrap());
        assert!(out.starts_with("Exported 3 record(s)"));
        assert!(dir.path().join("data_export.csv").exists());
    }

    #[test]
    fn test_failed_export_keeps_session_alive() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let settings = Settings {
            export_dir: blocker,
            ..Settings::default()
        };
        let mut s = Session::new(sample_set(), settings);

        let out = text(s.apply(SessionCommand::Export).unwrap());
        assert!(out.starts_with("Export failed: "), "{out}");

        let out = text(s.apply(SessionCommand::Open(1)).unwrap());
        assert!(out.contains("Record Details: Ann"));
    }

    #[test]
    fn test_quit() {
        assert_eq!(session().0.apply(SessionCommand::Quit).unwrap(), Outcome::Quit);
    }
}
