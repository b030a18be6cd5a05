use crate::record::RecordSet;
use crate::report::{ReportFormat, TableView};

pub fn render_table(records: &RecordSet, format: &str, output: Option<&str>) -> anyhow::Result<()> {
    if records.is_empty() {
        tracing::warn!("Source returned no records");
    }

    let view = TableView::build(records);
    let rendered = view.render(ReportFormat::parse(format))?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("Table written to {path}");
        }
        None => {
            println!("{rendered}");
        }
    }

    Ok(())
}
