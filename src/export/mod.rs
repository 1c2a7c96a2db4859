//! Report exporters.
//!
//! A [`ReportDocument`](crate::models::ReportDocument) renders to a shared
//! HTML body; the Word and Excel exporters wrap that body (or the tabular
//! part of it) in the legacy Office HTML envelopes that desktop Office
//! applications open natively.

pub mod excel;
pub mod word;

use chrono::Utc;

use crate::models::report::{ReportDocument, StatEntry};

pub use excel::to_excel;
pub use word::to_word;

/// Institution letterhead printed on every exported document
pub const INSTITUTION_NAME: &str = "Universitas Lamappapoleonro";
pub const INSTITUTION_SYSTEM: &str = "Sistem Informasi Sarana Prasarana (SIM-SARPRAS)";
pub const INSTITUTION_ADDRESS: &str = "Jl. Kesatria No. 11, Watansoppeng, Sulawesi Selatan";
/// City printed before the date in the signature block
pub const SIGNATURE_CITY: &str = "Watansoppeng";

/// A rendered file ready to hand to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub media_type: String,
    pub content: String,
}

/// Plain HTML body for the in-app print preview
pub fn to_print(doc: &ReportDocument) -> String {
    body_html(doc)
}

/// Minimal HTML text escaping for values interpolated into markup
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn filename(title: &str, extension: &str) -> String {
    format!("Report_{}.{}", title.replace(' ', "_"), extension)
}

/// Document body shared by the print preview and the Word export
pub(crate) fn body_html(doc: &ReportDocument) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"header\">");
    html.push_str(&format!("<h2>{}</h2>", escape(INSTITUTION_SYSTEM)));
    html.push_str(&format!("<h3>{}</h3>", escape(INSTITUTION_NAME)));
    html.push_str(&format!("<p>{}</p>", escape(INSTITUTION_ADDRESS)));
    html.push_str("</div><hr/>");

    html.push_str(&format!("<h1>{}</h1>", escape(&doc.title)));
    html.push_str(&format!(
        "<p>Number: {} &mdash; Period: {}</p>",
        escape(&doc.doc_number),
        escape(&doc.period)
    ));

    if !doc.stats.is_empty() {
        html.push_str("<table class=\"stats\">");
        for StatEntry { label, value } in &doc.stats {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                escape(label),
                escape(value)
            ));
        }
        html.push_str("</table>");
    }

    if let Some(table) = &doc.table {
        html.push_str("<table class=\"body\" border=\"1\"><tr>");
        for cell in &table.header {
            html.push_str(&format!("<th>{}</th>", escape(cell)));
        }
        html.push_str("</tr>");
        for row in &table.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", escape(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</table>");
    }

    for section in &doc.sections {
        html.push_str(&format!("<h3>{}</h3>", escape(&section.title)));
        if section.items.is_empty() {
            html.push_str("<p><em>No records in this period.</em></p>");
        } else {
            html.push_str("<ul>");
            for item in &section.items {
                html.push_str(&format!("<li>{}</li>", escape(item)));
            }
            html.push_str("</ul>");
        }
    }

    if let Some(recommendation) = &doc.recommendation {
        html.push_str(&format!(
            "<p class=\"recommendation\">{}</p>",
            escape(recommendation)
        ));
    }

    html.push_str("<div class=\"signature\">");
    html.push_str(&format!(
        "<p>{}, {}</p>",
        escape(SIGNATURE_CITY),
        Utc::now().format("%d %B %Y")
    ));
    html.push_str("<p>Kepala BAUK</p>");
    html.push_str("<br/><br/><br/>");
    html.push_str(&format!("<p><b>{}</b></p>", escape(&doc.signatory)));
    html.push_str("</div>");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape("a < b & \"c\" > d"),
            "a &lt; b &amp; &quot;c&quot; &gt; d"
        );
    }

    #[test]
    fn filename_replaces_spaces() {
        assert_eq!(
            filename("Inventory Activity Report", "doc"),
            "Report_Inventory_Activity_Report.doc"
        );
    }
}
