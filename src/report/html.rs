use super::{Column, TableView, marker_class};

const STYLE: &str = "<style>
  body { font-family: system-ui, sans-serif; margin: 2rem auto; padding: 0 1rem;
    color: #111827; }
  header p { color: #6b7280; font-size: 0.875rem; }
  table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
  th { padding: 1rem 1.5rem; text-align: left; font-size: 0.75rem; color: #6b7280;
    text-transform: uppercase; border-bottom: 1px solid #f3f4f6; }
  td { padding: 1rem; font-size: 0.875rem; }
  tbody tr:hover { background: #f9fafb; }
  .field-ok { border-left: 2px solid #22c55e; }
  .marker-warning { border-left: 2px solid #eab308; }
  .marker-critical { border-left: 4px solid #ef4444; font-weight: 600; }
  .cell { position: relative; }
  .tooltip { position: absolute; bottom: 100%; visibility: hidden; background: #111827;
    color: #fff; font-size: 0.75rem; border-radius: 4px; padding: 0.5rem; width: 140px;
    z-index: 10; }
  .cell:hover .tooltip, .cell:focus .tooltip { visibility: visible; }
  .badge { display: inline-flex; padding: 0.125rem 0.625rem; border-radius: 9999px;
    font-size: 0.75rem; font-weight: 500; }
  .badge-positive { background: #f0fdf4; color: #166534; }
  .badge-cautionary { background: #fefce8; color: #854d0e; }
  .badge-neutral { background: #f9fafb; color: #1f2937; }
</style>
";

pub fn render(view: &TableView<'_>) -> anyhow::Result<String> {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(view.header.title)));
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!(
        "<header>\n<h1>{}</h1>\n<p>{}</p>\n<p>Last updated: {} | {} records</p>\n</header>\n",
        escape_html(view.header.title),
        escape_html(view.header.subtitle),
        escape_html(&view.header.last_updated),
        view.header.record_count,
    ));

    html.push_str("<table>\n<thead><tr>");
    for label in &view.columns {
        html.push_str(&format!("<th>{}</th>", escape_html(label)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in &view.rows {
        html.push_str(&format!("<tr data-record-id=\"{}\">", row.id));
        for (column, cell) in Column::ALL.iter().zip(&row.cells) {
            let eligible = column.error_field().is_some();
            match (&cell.marker, &cell.message) {
                (Some(severity), Some(msg)) => html.push_str(&format!(
                    concat!(
                        "<td class=\"{}\"><div class=\"cell\" tabindex=\"0\" title=\"{msg}\">",
                        "<span class=\"tooltip\">{msg}</span>{}</div></td>",
                    ),
                    marker_class(*severity),
                    escape_html(&cell.text),
                    msg = escape_html(msg),
                )),
                _ if eligible => html.push_str(&format!(
                    "<td class=\"field-ok\">{}</td>",
                    escape_html(&cell.text)
                )),
                _ => html.push_str(&format!("<td>{}</td>", escape_html(&cell.text))),
            }
        }
        html.push_str(&format!(
            "<td><span class=\"{}\">{}</span></td>",
            row.status.style.css_class(),
            escape_html(&row.status.label)
        ));
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody></table>\n");

    html.push_str("</body>\n</html>\n");

    Ok(html)
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
