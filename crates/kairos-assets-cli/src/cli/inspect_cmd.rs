//! `inspect-pdf`: print a PDF's interactive-form structure.

use crate::cli::output;
use anyhow::{Context, Result};
use kairos_assets::pdf_inspect::{self, FormReport, XfaEntry, XfaReport};
use std::path::Path;

pub fn run(path: &Path) -> Result<()> {
    let report = pdf_inspect::inspect_file(path).with_context(|| format!("failed to inspect {}", path.display()))?;

    if output::is_json() {
        output::print_json(&serde_json::to_value(&report)?);
        return Ok(());
    }
    for line in render_lines(&report) {
        println!("{line}");
    }
    Ok(())
}

/// Human-readable report, one entry per output line.
pub fn render_lines(report: &FormReport) -> Vec<String> {
    let mut lines = Vec::new();
    match report {
        FormReport::NoAcroForm { catalog_keys } => {
            lines.push("No AcroForm found".to_string());
            lines.push(format!("Catalog keys: [{}]", catalog_keys.join(", ")));
        }
        FormReport::AcroForm(form) => {
            lines.push(format!("AcroForm found: [{}]", form.keys.join(", ")));
            match &form.xfa {
                Some(XfaReport::Packets { entries }) => {
                    lines.push("XFA form detected (Adobe LiveCycle)".to_string());
                    for entry in entries {
                        lines.push(match entry {
                            XfaEntry::Key { index, key } => format!("  [{index}] key: {key}"),
                            XfaEntry::Data { index, preview } => format!("  [{index}] data preview: {preview:?}"),
                            XfaEntry::Error { index, message } => format!("  [{index}] error: {message}"),
                        });
                    }
                }
                Some(XfaReport::Other { object_type }) => {
                    lines.push("XFA form detected (Adobe LiveCycle)".to_string());
                    lines.push(format!("XFA is not an array, type: {object_type}"));
                }
                None => {}
            }
            if let Some(count) = form.field_count {
                lines.push(format!("Fields: {count}"));
                for field in &form.fields {
                    lines.push(format!(
                        "  Field: T={}, FT={}",
                        field.name.as_deref().unwrap_or("None"),
                        field.field_type.as_deref().unwrap_or("None")
                    ));
                }
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use kairos_assets::pdf_inspect::{AcroFormReport, FieldSummary};

    #[test]
    fn test_no_acroform_lines() {
        let lines = render_lines(&FormReport::NoAcroForm {
            catalog_keys: vec!["/Type".into(), "/Pages".into()],
        });
        assert_eq!(lines, vec!["No AcroForm found", "Catalog keys: [/Type, /Pages]"]);
    }

    #[test]
    fn test_acroform_lines() {
        let lines = render_lines(&FormReport::AcroForm(AcroFormReport {
            keys: vec!["/Fields".into(), "/XFA".into()],
            xfa: Some(XfaReport::Packets {
                entries: vec![XfaEntry::Key {
                    index: 0,
                    key: "preamble".into(),
                }],
            }),
            field_count: Some(12),
            fields: vec![FieldSummary {
                name: Some("Name1".into()),
                field_type: None,
            }],
        }));
        assert_eq!(lines[0], "AcroForm found: [/Fields, /XFA]");
        assert_eq!(lines[1], "XFA form detected (Adobe LiveCycle)");
        assert_eq!(lines[2], "  [0] key: preamble");
        assert_eq!(lines[3], "Fields: 12");
        assert_eq!(lines[4], "  Field: T=Name1, FT=None");
    }
}
