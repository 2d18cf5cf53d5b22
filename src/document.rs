//! Document text extraction for local files.
//!
//! PDFs go through pdf-extract page by page; DOCX files are OOXML zip
//! containers, so `word/document.xml` is streamed through quick-xml and the
//! run text of each paragraph is collected. Both formats join their
//! segments with newlines, preserving document order.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
    #[error("failed to open DOCX container: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("failed to parse DOCX content: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("failed to decode DOCX text: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Supported document formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
    Unknown,
}

impl DocumentKind {
    /// Classify a path by its extension (case-insensitive).
    ///
    /// Anything without an extension is `Unknown`; unrecognised extensions
    /// are `PlainText` and will be read as UTF-8 by the caller.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => DocumentKind::Pdf,
            Some(ext) if ext.eq_ignore_ascii_case("docx") => DocumentKind::Docx,
            Some(_) => DocumentKind::PlainText,
            None => DocumentKind::Unknown,
        }
    }
}

/// Extract the visible text of a PDF, one segment per page.
///
/// Pages are concatenated in order, each followed by a newline. A page with
/// no extractable text (a scanned image, say) contributes an empty segment;
/// no OCR is attempted.
pub fn extract_pdf(path: &Path) -> Result<String, DocumentError> {
    let pages = pdf_extract::extract_text_by_pages(path)?;

    let mut text = String::new();
    for page in pages {
        text.push_str(&page);
        text.push('\n');
    }
    Ok(text)
}

/// Extract the paragraph text of a DOCX file in document order.
///
/// Each paragraph's runs are concatenated and followed by a newline.
pub fn extract_docx(path: &Path) -> Result<String, DocumentError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut xml = String::new();
    archive.by_name("word/document.xml")?.read_to_string(&mut xml)?;

    extract_docx_paragraphs(&xml)
}

/// Walk the WordprocessingML body, collecting `w:t` run text and emitting a
/// newline at the end of every `w:p` paragraph.
fn extract_docx_paragraphs(xml: &str) -> Result<String, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => {
                // read_text hands back the raw XML content; entities like
                // &amp; must be unescaped to get the visible text.
                let raw = reader.read_text(e.name())?;
                text.push_str(&quick_xml::escape::unescape(&raw)?);
            }
            Event::End(e) if e.local_name().as_ref() == b"p" => {
                text.push('\n');
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docx_body(paragraphs: &[&str]) -> String {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
            .collect();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{}</w:body></w:document>"#,
            body
        )
    }

    fn write_docx(paragraphs: &[&str]) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        let mut writer = zip::ZipWriter::new(file.reopen().unwrap());
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(docx_body(paragraphs).as_bytes()).unwrap();
        writer.finish().unwrap();
        file
    }

    #[test]
    fn kind_from_extension_is_case_insensitive() {
        assert_eq!(DocumentKind::from_path(Path::new("a.pdf")), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_path(Path::new("a.PDF")), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_path(Path::new("a.docx")), DocumentKind::Docx);
        assert_eq!(DocumentKind::from_path(Path::new("a.DocX")), DocumentKind::Docx);
        assert_eq!(
            DocumentKind::from_path(Path::new("notes.md")),
            DocumentKind::PlainText
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("Makefile")),
            DocumentKind::Unknown
        );
    }

    #[test]
    fn docx_paragraphs_join_with_newlines_in_order() {
        let file = write_docx(&["Page1", "Page2"]);
        let text = extract_docx(file.path()).unwrap();
        assert_eq!(text, "Page1\nPage2\n");
    }

    #[test]
    fn docx_paragraph_runs_are_concatenated() {
        let xml = docx_body(&[]).replace(
            "<w:body></w:body>",
            "<w:body><w:p><w:r><w:t>Hello </w:t></w:r><w:r><w:t>world</w:t></w:r></w:p></w:body>",
        );
        let text = extract_docx_paragraphs(&xml).unwrap();
        assert_eq!(text, "Hello world\n");
    }

    #[test]
    fn docx_entities_are_unescaped_to_visible_text() {
        let file = write_docx(&["A &amp; B", "1 &lt; 2 &gt; 0", "&quot;quoted&quot;"]);
        let text = extract_docx(file.path()).unwrap();
        assert_eq!(text, "A & B\n1 < 2 > 0\n\"quoted\"\n");
    }

    #[test]
    fn empty_docx_paragraph_contributes_a_blank_line() {
        let xml = docx_body(&[]).replace(
            "<w:body></w:body>",
            "<w:body><w:p><w:r><w:t>First</w:t></w:r></w:p><w:p></w:p><w:p><w:r><w:t>Last</w:t></w:r></w:p></w:body>",
        );
        let text = extract_docx_paragraphs(&xml).unwrap();
        assert_eq!(text, "First\n\nLast\n");
    }

    #[test]
    fn corrupt_docx_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"not a zip archive").unwrap();
        assert!(extract_docx(file.path()).is_err());
    }

    /// Build a minimal uncompressed two-page PDF with one text object per
    /// page, computing the xref offsets as the body is assembled.
    fn two_page_pdf(first: &str, second: &str) -> Vec<u8> {
        let c1 = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", first);
        let c2 = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", second);
        let page = |contents: u32| {
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 5 0 R >> >> /Contents {} 0 R >>",
                contents
            )
        };
        let bodies = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R 4 0 R] /Count 2 >>".to_string(),
            page(6),
            page(7),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
            format!("<< /Length {} >>\nstream\n{}\nendstream", c1.len(), c1),
            format!("<< /Length {} >>\nstream\n{}\nendstream", c2.len(), c2),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for (i, body) in bodies.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
        }

        let xref_offset = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n", bodies.len() + 1));
        pdf.push_str("0000000000 65535 f \n");
        for offset in &offsets {
            pdf.push_str(&format!("{:010} 00000 n \n", offset));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            bodies.len() + 1,
            xref_offset
        ));
        pdf.into_bytes()
    }

    #[test]
    fn pdf_pages_join_with_newlines_in_order() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(&two_page_pdf("Page1", "Page2")).unwrap();

        let text = extract_pdf(file.path()).unwrap();

        // Page segments come out in document order, separated by newlines.
        // The extractor may pad segments with its own whitespace, so
        // compare the non-empty trimmed lines.
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert_eq!(lines, ["Page1", "Page2"]);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn missing_pdf_is_an_error() {
        assert!(extract_pdf(Path::new("/no/such/file.pdf")).is_err());
    }
}
