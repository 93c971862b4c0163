/// Document body accumulator for the document writer.
use std::fmt::Write as FmtWrite;

use crate::docx::format::ImageFormat;
use crate::docx::paragraph::{Paragraph, ParagraphElement};
use crate::docx::section::SectionProperties;
use crate::docx::table::Table;
use crate::error::{DocxError, Result};

/// A body element (paragraph or table).
#[derive(Debug)]
pub enum BodyElement {
    Paragraph(Paragraph),
    Table(Table),
}

/// The document body: an ordered, append-only sequence of block elements.
///
/// Blocks are never revisited once appended; the document is produced by a
/// single forward pass and serialized exactly once by the package.
#[derive(Debug)]
pub struct Document {
    /// Content elements (paragraphs, tables) in document order
    elements: Vec<BodyElement>,
    /// Section properties (page setup, margins)
    section: SectionProperties,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            section: SectionProperties::default(),
        }
    }

    /// Get a mutable reference to the section properties.
    pub fn section_mut(&mut self) -> &mut SectionProperties {
        &mut self.section
    }

    /// Get a reference to the section properties.
    pub fn section(&self) -> &SectionProperties {
        &self.section
    }

    /// Add a new paragraph to the end of the document.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.elements.push(BodyElement::Paragraph(Paragraph::new()));
        match self.elements.last_mut() {
            Some(BodyElement::Paragraph(p)) => p,
            _ => unreachable!(),
        }
    }

    /// Add a paragraph with text.
    pub fn add_paragraph_with_text(&mut self, text: &str) -> &mut Paragraph {
        let para = self.add_paragraph();
        para.add_run_with_text(text);
        para
    }

    /// Add a heading paragraph using the built-in `Heading{level}` style.
    pub fn add_heading(&mut self, text: &str, level: u8) -> Result<&mut Paragraph> {
        if level == 0 || level > 9 {
            return Err(DocxError::InvalidFormat(
                "Heading level must be 1-9".to_string(),
            ));
        }
        let style = format!("Heading{}", level);
        let para = self.add_paragraph();
        para.set_style(&style);
        para.add_run_with_text(text);
        Ok(para)
    }

    /// Add a table with the given number of rows and columns.
    pub fn add_table(&mut self, rows: usize, cols: usize) -> &mut Table {
        self.elements.push(BodyElement::Table(Table::new(rows, cols)));
        match self.elements.last_mut() {
            Some(BodyElement::Table(t)) => t,
            _ => unreachable!(),
        }
    }

    /// Add a page break.
    pub fn add_page_break(&mut self) -> &mut Paragraph {
        let para = self.add_paragraph();
        para.add_run().page_break();
        para
    }

    /// Get the number of paragraphs in the document body.
    pub fn paragraph_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, BodyElement::Paragraph(_)))
            .count()
    }

    /// Get the number of tables in the document body.
    pub fn table_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, BodyElement::Table(_)))
            .count()
    }

    /// Get the body elements in document order.
    pub fn body(&self) -> &[BodyElement] {
        &self.elements
    }

    /// Collect all inline images from the document in body order.
    pub(crate) fn collect_images(&self) -> Vec<(&[u8], ImageFormat)> {
        let mut images = Vec::new();

        for element in &self.elements {
            if let BodyElement::Paragraph(para) = element {
                for para_element in &para.elements {
                    if let ParagraphElement::InlineImage(image) = para_element {
                        images.push((image.data(), image.format()));
                    }
                }
            }
        }

        images
    }

    /// Serialize the document to XML.
    ///
    /// `image_rel_ids` must contain one relationship ID per inline image in
    /// body order; the package assigns them when it registers the media
    /// parts.
    pub(crate) fn to_xml(&self, image_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(4096);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">"#);
        xml.push_str("<w:body>");

        // Images are numbered globally across the body
        let mut image_counter = 0;

        for element in &self.elements {
            match element {
                BodyElement::Paragraph(p) => p.to_xml(&mut xml, image_rel_ids, &mut image_counter)?,
                BodyElement::Table(t) => t.to_xml(&mut xml)?,
            }
        }

        // The sectPr must be the last element in the body
        self.write_section_properties(&mut xml)?;

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        Ok(xml)
    }

    fn write_section_properties(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:sectPr>");

        write!(
            xml,
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            self.section.page_width, self.section.page_height
        )?;

        write!(
            xml,
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}"/>"#,
            self.section.margin_top,
            self.section.margin_right,
            self.section.margin_bottom,
            self.section.margin_left,
            self.section.header_distance,
            self.section.footer_distance
        )?;

        xml.push_str("</w:sectPr>");
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_empty_document() {
        let doc = Document::new();
        assert_eq!(doc.paragraph_count(), 0);
        assert_eq!(doc.table_count(), 0);
    }

    #[test]
    fn test_add_paragraph() {
        let mut doc = Document::new();
        doc.add_paragraph_with_text("Hello, World!");
        assert_eq!(doc.paragraph_count(), 1);
    }

    #[test]
    fn test_add_table() {
        let mut doc = Document::new();
        let table = doc.add_table(2, 3);
        assert_eq!(table.row_count(), 2);
        table.cell(0, 0).unwrap().set_text("Cell 1");
        assert_eq!(doc.table_count(), 1);
    }

    #[test]
    fn test_heading_level_check() {
        let mut doc = Document::new();
        assert!(doc.add_heading("Title", 2).is_ok());
        assert!(doc.add_heading("Bad", 0).is_err());
        assert!(doc.add_heading("Bad", 10).is_err());
    }

    #[test]
    fn test_xml_generation() {
        let mut doc = Document::new();
        doc.add_paragraph_with_text("Test paragraph");

        let xml = doc.to_xml(&[]).unwrap();
        assert!(xml.contains("<w:document"));
        assert!(xml.contains("<w:body>"));
        assert!(xml.contains("<w:p>"));
        assert!(xml.contains("Test paragraph"));
    }

    #[test]
    fn test_run_formatting() {
        let mut doc = Document::new();
        let para = doc.add_paragraph();
        para.add_run_with_text("Bold text").bold(true);
        para.add_run_with_text("Italic text").italic(true);

        let xml = doc.to_xml(&[]).unwrap();
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains("<w:i/>"));
    }

    #[test]
    fn test_page_break() {
        let mut doc = Document::new();
        doc.add_page_break();

        let xml = doc.to_xml(&[]).unwrap();
        assert!(xml.contains("<w:br w:type=\"page\"/>"));
    }

    #[test]
    fn test_section_properties_are_last() {
        let mut doc = Document::new();
        doc.add_paragraph_with_text("content");
        *doc.section_mut() = SectionProperties::letter().margins_cm(2.5, 2.5, 2.5, 2.5);

        let xml = doc.to_xml(&[]).unwrap();
        let sect_pos = xml.find("<w:sectPr>").unwrap();
        let body_end = xml.find("</w:body>").unwrap();
        assert!(sect_pos < body_end);
        assert!(xml.contains(r#"w:top="1417""#));
    }
}
