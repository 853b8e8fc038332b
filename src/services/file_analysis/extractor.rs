// Document Text Extraction
// DOCX / PDF / TXT uploads to plain text

use regex::Regex;
use std::io::{Cursor, Read};
use std::sync::OnceLock;
use tracing::{info, warn};

use crate::models::DocumentFormat;
use super::AnalysisError;

/// Pick the extractor by file extension (case-insensitive)
pub fn detect_format(file_name: &str) -> Result<DocumentFormat, AnalysisError> {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".docx") {
        Ok(DocumentFormat::Docx)
    } else if lower.ends_with(".pdf") {
        Ok(DocumentFormat::Pdf)
    } else if lower.ends_with(".txt") {
        Ok(DocumentFormat::Txt)
    } else {
        Err(AnalysisError::UnsupportedFormat {
            file_name: file_name.to_string(),
        })
    }
}

pub fn extract_text(bytes: &[u8], file_name: &str) -> Result<(String, DocumentFormat), AnalysisError> {
    let format = detect_format(file_name)?;
    let text = match format {
        DocumentFormat::Docx => extract_text_from_docx(bytes)?,
        DocumentFormat::Pdf => extract_text_from_pdf(bytes)?,
        DocumentFormat::Txt => extract_text_from_txt(bytes),
    };
    info!(
        file = file_name,
        format = %format,
        bytes = bytes.len(),
        chars = text.chars().count(),
        "extract.done"
    );
    Ok((text, format))
}

/// Non-blank paragraphs joined by blank lines
pub fn extract_text_from_docx(bytes: &[u8]) -> Result<String, AnalysisError> {
    match docx_rs::read_docx(bytes) {
        Ok(docx) => {
            let paragraphs: Vec<String> = docx
                .document
                .children
                .iter()
                .filter_map(|child| match child {
                    docx_rs::DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
                    _ => None,
                })
                .filter(|t| !t.trim().is_empty())
                .collect();
            Ok(paragraphs.join("\n\n"))
        }
        Err(e) => {
            warn!(error = %e, "docx-rs rejected package; reading document.xml directly");
            extract_text_from_document_xml(bytes)
                .map_err(|fallback| AnalysisError::Docx(format!("{}; fallback: {}", e, fallback)))
        }
    }
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut out = String::new();
    for child in &paragraph.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            for rc in &run.children {
                match rc {
                    docx_rs::RunChild::Text(t) => out.push_str(&t.text),
                    docx_rs::RunChild::Tab(_) => out.push('\t'),
                    _ => {}
                }
            }
        }
    }
    out
}

fn paragraph_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<w:p[ >].*?</w:p>").expect("paragraph regex"))
}

fn text_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>").expect("text run regex"))
}

fn unescape_xml(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Raw `word/document.xml` scan for packages docx-rs cannot model
fn extract_text_from_document_xml(bytes: &[u8]) -> Result<String, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| e.to_string())?
        .read_to_string(&mut xml)
        .map_err(|e| e.to_string())?;

    let paragraphs: Vec<String> = paragraph_re()
        .find_iter(&xml)
        .map(|p| {
            text_run_re()
                .captures_iter(p.as_str())
                .filter_map(|c| c.get(1).map(|m| unescape_xml(m.as_str())))
                .collect::<String>()
        })
        .filter(|t| !t.trim().is_empty())
        .collect();
    Ok(paragraphs.join("\n\n"))
}

pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<String, AnalysisError> {
    // The PDF parser panics on some malformed inputs.
    let result = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));
    match result {
        Ok(Ok(text)) => Ok(text.trim().to_string()),
        Ok(Err(e)) => Err(AnalysisError::Pdf(format!("{:?}", e))),
        Err(_) => Err(AnalysisError::Pdf("PDF parser aborted on malformed input".to_string())),
    }
}

/// UTF-8, falling back to Latin-1 (which accepts every byte)
pub fn extract_text_from_txt(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            warn!("text file is not valid UTF-8; decoding as Latin-1");
            bytes.iter().map(|&b| b as char).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docx_like_zip(document_xml: &str) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut buf);
            let options = zip::write::SimpleFileOptions::default();
            writer.start_file("word/document.xml", options).unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        buf.into_inner()
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format("Paper.DOCX").unwrap(), DocumentFormat::Docx);
        assert_eq!(detect_format("draft.pdf").unwrap(), DocumentFormat::Pdf);
        assert_eq!(detect_format("notes.txt").unwrap(), DocumentFormat::Txt);
        let err = detect_format("slides.pptx").unwrap_err();
        assert!(err.to_string().contains("Supported: .docx, .pdf, .txt"));
    }

    #[test]
    fn test_txt_utf8_and_latin1() {
        assert_eq!(extract_text_from_txt("naïve".as_bytes()), "naïve");
        assert_eq!(extract_text_from_txt(&[0x63, 0x61, 0x66, 0xE9]), "café");
    }

    #[test]
    fn test_extract_text_txt_roundtrip_format() {
        let (text, format) = extract_text(b"Plain body.", "a.txt").unwrap();
        assert_eq!(text, "Plain body.");
        assert_eq!(format, DocumentFormat::Txt);
    }

    #[test]
    fn test_docx_built_with_docx_rs() {
        let mut buf = Cursor::new(Vec::new());
        docx_rs::Docx::new()
            .add_paragraph(docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text("ABSTRACT")))
            .add_paragraph(docx_rs::Paragraph::new())
            .add_paragraph(docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text("Body text here.")))
            .build()
            .pack(&mut buf)
            .unwrap();

        let text = extract_text_from_docx(buf.get_ref()).unwrap();
        assert_eq!(text, "ABSTRACT\n\nBody text here.");
    }

    #[test]
    fn test_document_xml_scan() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>Fish &amp; chips</w:t></w:r><w:r><w:t xml:space="preserve"> are good</w:t></w:r></w:p><w:p></w:p><w:p><w:r><w:t>Second</w:t></w:r></w:p></w:body></w:document>"#;
        let text = extract_text_from_document_xml(&docx_like_zip(xml)).unwrap();
        assert_eq!(text, "Fish & chips are good\n\nSecond");
    }

    #[test]
    fn test_garbage_docx_is_an_error() {
        let err = extract_text_from_docx(b"not a zip archive").unwrap_err();
        assert!(matches!(err, AnalysisError::Docx(_)));
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        let err = extract_text_from_pdf(b"%PDF-garbage").unwrap_err();
        assert!(matches!(err, AnalysisError::Pdf(_)));
    }
}
