/// Run types and implementation for the document writer.
use std::fmt::Write as FmtWrite;

use crate::docx::escape_xml;
use crate::error::Result;

/// Run content type.
#[derive(Debug, Clone)]
pub enum RunContent {
    /// Plain text. Embedded newlines are serialized as explicit line breaks.
    Text(String),
    /// Page break
    PageBreak,
}

/// A text run with character formatting.
///
/// Runs are the smallest unit of formatted text: every size, weight,
/// italics, or color change within a paragraph starts a new run.
#[derive(Debug)]
pub struct Run {
    /// Run content
    pub(crate) content: RunContent,
    /// Run properties
    pub(crate) properties: RunProperties,
}

impl Run {
    pub(crate) fn new() -> Self {
        Self {
            content: RunContent::Text(String::new()),
            properties: RunProperties::default(),
        }
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: &str) {
        self.content = RunContent::Text(text.to_string());
    }

    /// Get the text content. Empty for non-text content.
    pub fn text(&self) -> &str {
        match &self.content {
            RunContent::Text(s) => s,
            _ => "",
        }
    }

    /// Make the text bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.properties.bold = Some(bold);
        self
    }

    /// Make the text italic.
    pub fn italic(&mut self, italic: bool) -> &mut Self {
        self.properties.italic = Some(italic);
        self
    }

    /// Set font size in half-points (e.g., 21 = 10.5pt).
    pub fn font_size(&mut self, size: u32) -> &mut Self {
        self.properties.font_size = Some(size);
        self
    }

    /// Set font name.
    pub fn font_name(&mut self, name: &str) -> &mut Self {
        self.properties.font_name = Some(name.to_string());
        self
    }

    /// Set text color using hex RGB (e.g., "2F92AD").
    pub fn color(&mut self, color: &str) -> &mut Self {
        self.properties.color = Some(color.to_string());
        self
    }

    /// Check whether this run is bold.
    pub fn is_bold(&self) -> bool {
        self.properties.bold.unwrap_or(false)
    }

    /// Check whether this run is italic.
    pub fn is_italic(&self) -> bool {
        self.properties.italic.unwrap_or(false)
    }

    /// Get the run color, if set.
    pub fn get_color(&self) -> Option<&str> {
        self.properties.color.as_deref()
    }

    /// Turn this run into a page break.
    pub fn page_break(&mut self) -> &mut Self {
        self.content = RunContent::PageBreak;
        self
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");

        // Write run properties
        if self.properties.has_properties() {
            xml.push_str("<w:rPr>");

            if let Some(bold) = self.properties.bold
                && bold
            {
                xml.push_str("<w:b/>");
            }

            if let Some(italic) = self.properties.italic
                && italic
            {
                xml.push_str("<w:i/>");
            }

            if let Some(ref font_name) = self.properties.font_name {
                write!(
                    xml,
                    "<w:rFonts w:ascii=\"{}\" w:hAnsi=\"{}\"/>",
                    escape_xml(font_name),
                    escape_xml(font_name)
                )?;
            }

            if let Some(size) = self.properties.font_size {
                write!(xml, "<w:sz w:val=\"{}\"/>", size)?;
            }

            if let Some(ref color) = self.properties.color {
                write!(xml, "<w:color w:val=\"{}\"/>", color)?;
            }

            xml.push_str("</w:rPr>");
        }

        // Write content based on type
        match &self.content {
            RunContent::Text(text) if !text.is_empty() => {
                // Embedded newlines become explicit <w:br/> breaks; Word
                // ignores literal newline characters in w:t content.
                for (index, segment) in text.split('\n').enumerate() {
                    if index > 0 {
                        xml.push_str("<w:br/>");
                    }
                    if !segment.is_empty() {
                        write!(
                            xml,
                            "<w:t xml:space=\"preserve\">{}</w:t>",
                            escape_xml(segment)
                        )?;
                    }
                }
            },
            RunContent::PageBreak => {
                xml.push_str("<w:br w:type=\"page\"/>");
            },
            _ => {},
        }

        xml.push_str("</w:r>");

        Ok(())
    }
}

/// Run properties.
#[derive(Debug, Default)]
pub(crate) struct RunProperties {
    pub(crate) bold: Option<bool>,
    pub(crate) italic: Option<bool>,
    pub(crate) font_size: Option<u32>,
    pub(crate) font_name: Option<String>,
    pub(crate) color: Option<String>,
}

impl RunProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.bold.is_some()
            || self.italic.is_some()
            || self.font_size.is_some()
            || self.font_name.is_some()
            || self.color.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(run: &Run) -> String {
        let mut xml = String::new();
        run.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_plain_run() {
        let mut run = Run::new();
        run.set_text("Hello");
        assert_eq!(
            render(&run),
            "<w:r><w:t xml:space=\"preserve\">Hello</w:t></w:r>"
        );
    }

    #[test]
    fn test_formatted_run() {
        let mut run = Run::new();
        run.set_text("Hello");
        run.bold(true).italic(true).font_size(21).color("2F92AD");

        let xml = render(&run);
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains("<w:i/>"));
        assert!(xml.contains("<w:sz w:val=\"21\"/>"));
        assert!(xml.contains("<w:color w:val=\"2F92AD\"/>"));
    }

    #[test]
    fn test_multiline_text() {
        let mut run = Run::new();
        run.set_text("Knowledge Base\nOnboarding Questionnaire");

        let xml = render(&run);
        assert!(xml.contains("Knowledge Base</w:t><w:br/><w:t"));
        assert!(xml.contains("Onboarding Questionnaire"));
    }

    #[test]
    fn test_page_break() {
        let mut run = Run::new();
        run.page_break();
        assert_eq!(render(&run), "<w:r><w:br w:type=\"page\"/></w:r>");
    }

    #[test]
    fn test_text_escaping() {
        let mut run = Run::new();
        run.set_text("Services & Products");
        assert!(render(&run).contains("Services &amp; Products"));
    }
}
