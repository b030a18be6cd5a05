use crate::error::AppError;
use crate::record::RecordSet;
use crate::report::detail::DetailView;

pub fn show_record(records: &RecordSet, id: i64, json: bool) -> anyhow::Result<()> {
    let record = records.get(id).ok_or(AppError::RecordNotFound(id))?;
    let detail = DetailView::from_record(record);

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        print!("{}", detail.render_terminal());
    }
    Ok(())
}
