//! Text extraction from various file formats

use crate::error::{Result, ResumeScreenerError};
use pulldown_cmark::{html, Parser};
use std::path::Path;
use tokio::fs;

/// Words that suggest extracted text really is a resume.
const RESUME_INDICATORS: [&str; 11] = [
    "experience", "education", "skills", "work", "employment", "university",
    "college", "degree", "email", "phone", "address",
];

const MIN_CONTENT_LENGTH: usize = 50;
const MIN_INDICATORS: usize = 2;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeScreenerError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeScreenerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(clean_extracted_text(&text))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ResumeScreenerError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await.map_err(ResumeScreenerError::Io)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let re = regex::Regex::new(r"<[^>]*>").expect("invalid tag pattern");
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

/// Normalize whitespace in extracted text while preserving line structure.
/// Line breaks matter downstream (line-length checks), so only horizontal
/// whitespace runs and blank-line runs are collapsed.
pub fn clean_extracted_text(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut blank_run = 0usize;

    for line in text.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            blank_run += 1;
            if blank_run == 1 && !lines.is_empty() {
                lines.push(String::new());
            }
        } else {
            blank_run = 0;
            lines.push(collapsed);
        }
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

/// Heuristic check that extracted content looks like a resume: long enough
/// and mentioning at least two resume indicator words.
pub fn looks_like_resume(text: &str) -> bool {
    if text.trim().len() < MIN_CONTENT_LENGTH {
        return false;
    }

    let text_lower = text.to_lowercase();
    let indicator_count = RESUME_INDICATORS
        .iter()
        .filter(|indicator| text_lower.contains(*indicator))
        .count();

    indicator_count >= MIN_INDICATORS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_extracted_text_collapses_runs() {
        let raw = "Jane   Doe\t engineer\n\n\n\nExperience  here\n\n";
        assert_eq!(
            clean_extracted_text(raw),
            "Jane Doe engineer\n\nExperience here"
        );
    }

    #[test]
    fn test_markdown_strips_formatting() {
        let extractor = MarkdownExtractor;
        let html = "<h1>Jane Doe</h1>\n<p><strong>Engineer</strong> with skills</p>";
        let text = extractor.html_to_text(html);
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Engineer"));
        assert!(!text.contains("<strong>"));
    }

    #[test]
    fn test_looks_like_resume_requires_length_and_indicators() {
        assert!(!looks_like_resume("too short"));
        assert!(!looks_like_resume(&"lorem ipsum dolor sit amet ".repeat(10)));
        assert!(looks_like_resume(
            "Jane Doe has ten years of work experience and a university education \
             in computer science with many technical skills."
        ));
    }
}
