use std::io::Write;
use std::path::Path;

use crate::config::Settings;
use crate::record::RecordSet;
use crate::report::csv;

pub fn export_records(
    records: &RecordSet,
    settings: &Settings,
    dir: Option<&Path>,
    to_stdout: bool,
) -> anyhow::Result<()> {
    if to_stdout {
        let content = csv::render(records.records())?;
        std::io::stdout().write_all(content.as_bytes())?;
        return Ok(());
    }

    let dir = dir.unwrap_or(settings.export_dir.as_path());
    let path = csv::export(records.records(), dir, &settings.export_file_name)?;
    println!(
        "Exported {} record(s) to {}",
        records.len(),
        path.display()
    );
    Ok(())
}
