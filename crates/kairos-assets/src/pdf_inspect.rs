//! Interactive-form inspection for PDFs: AcroForm keys, XFA packets, field names.

use crate::error::{AssetError, Result};
use lopdf::{Dictionary, Document, Object};
use serde::Serialize;
use std::path::Path;

/// Bytes of each XFA stream included in the report.
pub const XFA_PREVIEW_BYTES: usize = 300;
/// Fields listed in the report; the count always covers all of them.
pub const MAX_LISTED_FIELDS: usize = 10;

/// One element of an XFA array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum XfaEntry {
    /// Packet name (`preamble`, `template`, `datasets`, ...).
    Key { index: usize, key: String },
    /// Leading bytes of a packet stream, lossily decoded.
    Data { index: usize, preview: String },
    Error { index: usize, message: String },
}

/// XFA presence and shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum XfaReport {
    Packets { entries: Vec<XfaEntry> },
    /// XFA present but not an array (a single stream, usually).
    Other { object_type: String },
}

/// Name and type of a terminal or non-terminal field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSummary {
    pub name: Option<String>,
    pub field_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcroFormReport {
    pub keys: Vec<String>,
    pub xfa: Option<XfaReport>,
    pub field_count: Option<usize>,
    pub fields: Vec<FieldSummary>,
}

/// What was found in a document catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormReport {
    AcroForm(AcroFormReport),
    NoAcroForm { catalog_keys: Vec<String> },
}

/// Load `path` and inspect its catalog.
pub fn inspect_file(path: &Path) -> Result<FormReport> {
    if !path.exists() {
        return Err(AssetError::MissingSource(path.to_path_buf()));
    }
    let doc = Document::load(path)?;
    inspect(&doc)
}

/// Inspect an already-loaded document.
pub fn inspect(doc: &Document) -> Result<FormReport> {
    let root = doc.trailer.get(b"Root")?;
    let catalog = resolve(doc, root)?.as_dict()?;

    let acroform = match catalog.get(b"AcroForm") {
        Ok(obj) => resolve(doc, obj)?.as_dict()?,
        Err(_) => {
            return Ok(FormReport::NoAcroForm {
                catalog_keys: dict_keys(catalog),
            })
        }
    };

    let xfa = acroform
        .get(b"XFA")
        .ok()
        .map(|obj| inspect_xfa(doc, obj));

    let (field_count, fields) = match acroform.get(b"Fields") {
        Ok(obj) => {
            let list = resolve(doc, obj)?.as_array()?;
            let fields = list
                .iter()
                .take(MAX_LISTED_FIELDS)
                .map(|f| summarize_field(doc, f))
                .collect();
            (Some(list.len()), fields)
        }
        Err(_) => (None, Vec::new()),
    };

    Ok(FormReport::AcroForm(AcroFormReport {
        keys: dict_keys(acroform),
        xfa,
        field_count,
        fields,
    }))
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Result<&'a Object> {
    match obj {
        Object::Reference(id) => Ok(doc.get_object(*id)?),
        other => Ok(other),
    }
}

fn dict_keys(dict: &Dictionary) -> Vec<String> {
    dict.iter()
        .map(|(k, _)| format!("/{}", String::from_utf8_lossy(k)))
        .collect()
}

fn inspect_xfa(doc: &Document, obj: &Object) -> XfaReport {
    let obj = match resolve(doc, obj) {
        Ok(o) => o,
        Err(e) => {
            return XfaReport::Other {
                object_type: format!("unresolvable ({e})"),
            }
        }
    };
    let Object::Array(items) = obj else {
        return XfaReport::Other {
            object_type: obj.enum_variant().to_string(),
        };
    };

    let entries = items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Object::String(bytes, _) | Object::Name(bytes) => XfaEntry::Key {
                index,
                key: String::from_utf8_lossy(bytes).into_owned(),
            },
            other => match resolve(doc, other).and_then(|o| Ok(o.as_stream()?)) {
                Ok(stream) => {
                    let data = stream
                        .decompressed_content()
                        .unwrap_or_else(|_| stream.content.clone());
                    let end = data.len().min(XFA_PREVIEW_BYTES);
                    XfaEntry::Data {
                        index,
                        preview: String::from_utf8_lossy(&data[..end]).into_owned(),
                    }
                }
                Err(e) => XfaEntry::Error {
                    index,
                    message: e.to_string(),
                },
            },
        })
        .collect();

    XfaReport::Packets { entries }
}

fn summarize_field(doc: &Document, field: &Object) -> FieldSummary {
    let Ok(dict) = resolve(doc, field).and_then(|o| Ok(o.as_dict()?)) else {
        return FieldSummary {
            name: None,
            field_type: None,
        };
    };
    let text = |key: &[u8]| -> Option<String> {
        match dict.get(key).ok()? {
            Object::String(bytes, _) => Some(decode_text_string(bytes)),
            Object::Name(bytes) => Some(format!("/{}", String::from_utf8_lossy(bytes))),
            _ => None,
        }
    };
    FieldSummary {
        name: text(b"T"),
        field_type: text(b"FT"),
    }
}

/// PDF text strings are PDFDocEncoding or UTF-16BE with a BOM.
fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xFE, 0xFF]) {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
