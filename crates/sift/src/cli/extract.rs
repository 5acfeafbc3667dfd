//! Text extraction from resume files.
//!
//! The engine consumes plain text; this module turns files into
//! [`Document`]s. Extraction is pluggable through [`TextExtractor`], with
//! built-in extractors for plain text and markdown. Binary containers
//! (PDF and friends) are out of scope: they produce an empty document,
//! which the engine degrades to a zero-relevance record instead of
//! failing the run.

use std::{fs, io, path::Path};

use pulldown_cmark::{Event, Parser};
use sift_engine::Document;

/// Extensions treated as binary containers that sift does not extract.
static BINARY_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "odt", "rtf", "zip", "tar", "gz", "png", "jpg", "jpeg", "gif", "exe",
    "bin",
];

/// A strategy turning one file into plain text.
pub trait TextExtractor {
    /// Checks if this extractor handles the given file path.
    fn can_extract(&self, path: &Path) -> bool;

    /// Extracts plain text from the file.
    fn extract(&self, path: &Path) -> io::Result<String>;
}

/// Extractor for plain text files; the fallback for unknown extensions.
///
/// Reads the file with lossy UTF-8 conversion, so stray bytes never fail
/// the candidate.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn can_extract(&self, _path: &Path) -> bool {
        true
    }

    fn extract(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Extractor for markdown files.
///
/// Strips formatting by keeping only text and code events, joined with
/// spaces, so headings and list markers don't leak into the token stream.
pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn can_extract(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
    }

    fn extract(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        let raw = String::from_utf8_lossy(&bytes);

        let mut text = String::with_capacity(raw.len());
        for event in Parser::new(&raw) {
            match event {
                Event::Text(chunk) | Event::Code(chunk) => {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(&chunk);
                }
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                _ => {}
            }
        }

        Ok(text)
    }
}

/// Checks if a file is a binary container sift does not extract.
pub fn is_binary_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Turns a file into a [`Document`], degrading instead of failing.
///
/// Binary containers and unreadable files become empty documents; a
/// warning goes to stderr and the candidate stays in the report as a
/// zero-relevance record.
pub fn extract_document(path: &Path) -> Document {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    if is_binary_file(path) {
        eprintln!(
            "warning: {} is a binary container; treating as unreadable",
            path.display()
        );
        return Document::new(name, "");
    }

    let markdown = MarkdownExtractor;
    let result = if markdown.can_extract(path) {
        markdown.extract(path)
    } else {
        PlainTextExtractor.extract(path)
    };

    match result {
        Ok(text) => Document::new(name, text),
        Err(err) => {
            eprintln!("warning: could not read {}: {err}", path.display());
            Document::new(name, "")
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn plain_text_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "resume.txt", "Python engineer");

        let doc = extract_document(&path);
        assert_eq!(doc.name, "resume.txt");
        assert_eq!(doc.text, "Python engineer");
    }

    #[test]
    fn markdown_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "resume.md",
            "# Jane Doe\n\nSenior *Python* engineer\n\n- Kubernetes\n- `PostgreSQL`\n",
        );

        let doc = extract_document(&path);
        assert!(doc.text.contains("Jane Doe"));
        assert!(doc.text.contains("Python"));
        assert!(doc.text.contains("PostgreSQL"));
        assert!(!doc.text.contains('#'));
        assert!(!doc.text.contains('*'));
        assert!(!doc.text.contains('`'));
    }

    #[test]
    fn binary_container_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "resume.pdf", "%PDF-1.4 not really text");

        let doc = extract_document(&path);
        assert_eq!(doc.name, "resume.pdf");
        assert!(doc.text.is_empty());
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let doc = extract_document(Path::new("/nonexistent/resume.txt"));
        assert_eq!(doc.name, "resume.txt");
        assert!(doc.text.is_empty());
    }

    #[test]
    fn binary_detection() {
        assert!(is_binary_file(Path::new("a.pdf")));
        assert!(is_binary_file(Path::new("a.DOCX")));
        assert!(!is_binary_file(Path::new("a.txt")));
        assert!(!is_binary_file(Path::new("a.md")));
        assert!(!is_binary_file(Path::new("resume")));
    }

    #[test]
    fn markdown_extractor_scope() {
        let md = MarkdownExtractor;
        assert!(md.can_extract(Path::new("a.md")));
        assert!(md.can_extract(Path::new("a.MD")));
        assert!(!md.can_extract(Path::new("a.txt")));
    }
}
