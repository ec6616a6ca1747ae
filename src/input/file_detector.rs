//! File type detection

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    /// Recognized but not extractable; rejected with a conversion hint.
    Docx,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            "docx" | "doc" => FileType::Docx,
            _ => FileType::Unknown,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, FileType::Pdf | FileType::Text | FileType::Markdown)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileType::Pdf => "PDF",
            FileType::Text => "plain text",
            FileType::Markdown => "Markdown",
            FileType::Docx => "Word document",
            FileType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("Md"), FileType::Markdown);
    }

    #[test]
    fn test_docx_is_recognized_but_unsupported() {
        let docx = FileType::from_extension("docx");
        assert_eq!(docx, FileType::Docx);
        assert!(!docx.is_supported());
    }

    #[test]
    fn test_unknown_extension() {
        assert!(!FileType::from_extension("xyz").is_supported());
    }
}
