use super::TableView;

pub fn render(view: &TableView<'_>) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
