//! Text extraction from raw text, PDF payloads and Markdown

use crate::error::{Result, ResumeMatcherError};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// A document as handed to the pipeline: pasted text or an uploaded PDF
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    Text(String),
    Pdf(Vec<u8>),
}

/// Anything that can turn PDF bytes into the text of each page, in order
pub trait PageExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>>;
}

pub struct PdfExtractor;

impl PageExtractor for PdfExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        if !is_pdf(bytes) {
            return Err(ResumeMatcherError::Extraction(
                "payload is not a PDF document".to_string(),
            ));
        }

        // pdf-extract panics on some structurally valid but incomplete
        // documents (e.g. a font reference without /Resources)
        match panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        })) {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(ResumeMatcherError::Extraction(format!(
                "Failed to extract text from PDF: {}",
                e
            ))),
            Err(payload) => Err(ResumeMatcherError::Extraction(format!(
                "PDF could not be parsed: {}",
                panic_message(payload.as_ref())
            ))),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown error"
    }
}

/// Magic bytes check, tolerating leading whitespace some generators emit
pub fn is_pdf(bytes: &[u8]) -> bool {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    bytes[start..].starts_with(b"%PDF-")
}

pub fn extract_text(source: &DocumentSource) -> Result<String> {
    extract_text_with(source, &PdfExtractor)
}

/// Pages without a text layer contribute nothing; they are not an error.
pub fn extract_text_with<E: PageExtractor>(source: &DocumentSource, extractor: &E) -> Result<String> {
    match source {
        DocumentSource::Text(text) => Ok(text.clone()),
        DocumentSource::Pdf(bytes) => {
            let pages = extractor.extract_pages(bytes)?;
            log::debug!("Extracted {} PDF pages", pages.len());
            Ok(pages.concat())
        }
    }
}

/// Render Markdown and strip it back to plain text lines
pub fn markdown_to_text(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_to_text(&html_output)
}

fn html_to_text(html: &str) -> String {
    let text = html
        .replace("<br />", "\n")
        .replace("</p>", "\n\n")
        .replace("</li>", "\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let tag_regex = Regex::new(r"<[^>]*>").expect("Invalid tag regex");
    let clean_text = tag_regex.replace_all(&text, "");

    clean_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
