//! Excel export: the legacy `.xls` HTML envelope.
//!
//! Tabular reports export their table directly; reports without one fall
//! back to a two-column sheet of the summary figures.

use crate::models::report::{ReportDocument, ReportTable};

use super::{escape, filename, ExportFile};

const MEDIA_TYPE: &str = "application/vnd.ms-excel";

pub fn to_excel(doc: &ReportDocument) -> ExportFile {
    let table = doc.table.clone().unwrap_or_else(|| ReportTable {
        header: vec!["Indicator".to_string(), "Value".to_string()],
        rows: doc
            .stats
            .iter()
            .map(|s| vec![s.label.clone(), s.value.clone()])
            .collect(),
    });

    let mut content = String::new();
    content.push('\u{feff}');
    content.push_str(concat!(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' ",
        "xmlns:x='urn:schemas-microsoft-com:office:excel' ",
        "xmlns='http://www.w3.org/TR/REC-html40'>",
        "<head><meta charset='utf-8'></head><body>",
    ));

    content.push_str(&format!(
        "<p><b>{}</b></p><p>{} / {}</p>",
        escape(&doc.title),
        escape(&doc.doc_number),
        escape(&doc.period)
    ));

    content.push_str("<table border='1'><tr>");
    for cell in &table.header {
        content.push_str(&format!("<th>{}</th>", escape(cell)));
    }
    content.push_str("</tr>");
    for row in &table.rows {
        content.push_str("<tr>");
        for cell in row {
            content.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        content.push_str("</tr>");
    }
    content.push_str("</table></body></html>");

    ExportFile {
        filename: filename(&doc.title, "xls"),
        media_type: MEDIA_TYPE.to_string(),
        content,
    }
}
