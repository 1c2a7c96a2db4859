//! Word export: the legacy `.doc` HTML envelope that Microsoft Word opens
//! as a native document.

use crate::models::ReportDocument;

use super::{body_html, filename, ExportFile};

const MEDIA_TYPE: &str = "application/msword";

pub fn to_word(doc: &ReportDocument) -> ExportFile {
    let mut content = String::new();
    // Byte order mark keeps Word from misreading the encoding
    content.push('\u{feff}');
    content.push_str(concat!(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' ",
        "xmlns:w='urn:schemas-microsoft-com:office:word' ",
        "xmlns='http://www.w3.org/TR/REC-html40'>",
        "<head><meta charset='utf-8'><title>Report</title>",
        "<style>body { font-family: Arial, sans-serif; font-size: 12pt; } ",
        "table { border-collapse: collapse; width: 100%; } ",
        "td, th { border: 1px solid #000; padding: 4px; } ",
        ".header { text-align: center; } ",
        ".signature { margin-top: 40px; text-align: right; }</style>",
        "</head><body>",
    ));
    content.push_str(&body_html(doc));
    content.push_str("</body></html>");

    ExportFile {
        filename: filename(&doc.title, "doc"),
        media_type: MEDIA_TYPE.to_string(),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::{ReportSection, StatEntry};

    fn doc() -> ReportDocument {
        ReportDocument {
            title: "Inventory Activity Report".to_string(),
            period: "01/03/2024 - 31/03/2024".to_string(),
            doc_number: "RPT-00042/SSP/2024".to_string(),
            stats: vec![StatEntry {
                label: "New Assets Registered".to_string(),
                value: "2".to_string(),
            }],
            table: None,
            sections: vec![ReportSection {
                title: "Asset Procurement Details".to_string(),
                items: vec!["AST-001 - Projector <demo> - Rp 6.500.000".to_string()],
            }],
            recommendation: None,
            signatory: "Admin Pusat".to_string(),
        }
    }

    #[test]
    fn word_export_wraps_body_in_office_envelope() {
        let file = to_word(&doc());
        assert_eq!(file.filename, "Report_Inventory_Activity_Report.doc");
        assert_eq!(file.media_type, "application/msword");
        assert!(file.content.starts_with('\u{feff}'));
        assert!(file
            .content
            .contains("xmlns:w='urn:schemas-microsoft-com:office:word'"));
        assert!(file.content.contains("RPT-00042/SSP/2024"));
        assert!(file.content.contains("Projector &lt;demo&gt;"));
        assert!(file.content.contains("Admin Pusat"));
    }
}
