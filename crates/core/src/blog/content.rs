//! Article body blocks.
//!
//! Bodies are authored as a list of lightly marked-up strings:
//! `## ` and `### ` start headings, `- ` starts a bullet, and a paragraph
//! opening with `**Label**:` is a labelled paragraph.

use serde::{Deserialize, Serialize};

/// One rendered block of an article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Section heading.
    Heading2(String),
    /// Sub-section heading.
    Heading3(String),
    /// Checklist bullet.
    Bullet(String),
    /// Paragraph led by a bold label.
    Labeled {
        /// Label text without emphasis markers.
        label: String,
        /// Remainder of the paragraph.
        body: String,
    },
    /// Plain paragraph.
    Paragraph(String),
}

impl ContentBlock {
    /// Classifies one authored line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        if let Some(text) = line.strip_prefix("## ") {
            return Self::Heading2(text.to_string());
        }
        if let Some(text) = line.strip_prefix("### ") {
            return Self::Heading3(text.to_string());
        }
        if let Some(text) = line.strip_prefix("- ") {
            return Self::Bullet(text.to_string());
        }
        if line.starts_with("**")
            && let Some((label, body)) = line.split_once(':')
        {
            return Self::Labeled {
                label: label.replace("**", ""),
                body: body.trim_start().to_string(),
            };
        }
        Self::Paragraph(line.to_string())
    }
}

/// Parses every authored line of an article body.
#[must_use]
pub fn parse_body(lines: &[&str]) -> Vec<ContentBlock> {
    lines.iter().map(|line| ContentBlock::parse(line)).collect()
}
