/// Paragraph types and implementation for the document writer.
use std::fmt::Write as FmtWrite;

use crate::docx::escape_xml;
use crate::docx::format::ParagraphAlignment;
use crate::docx::image::InlineImage;
use crate::docx::run::Run;
use crate::error::{DocxError, Result};
use crate::units;

/// Elements that can appear in a paragraph.
#[derive(Debug)]
pub(crate) enum ParagraphElement {
    Run(Run),
    InlineImage(InlineImage),
}

/// A paragraph in a document.
#[derive(Debug)]
pub struct Paragraph {
    /// Elements (runs and inline images) in this paragraph
    pub(crate) elements: Vec<ParagraphElement>,
    /// Paragraph style ID
    pub(crate) style: Option<String>,
    /// Paragraph properties
    pub(crate) properties: ParagraphProperties,
}

impl Paragraph {
    pub(crate) fn new() -> Self {
        Self {
            elements: Vec::new(),
            style: None,
            properties: ParagraphProperties::default(),
        }
    }

    /// Add a new run to the paragraph.
    pub fn add_run(&mut self) -> &mut Run {
        self.elements.push(ParagraphElement::Run(Run::new()));
        match self.elements.last_mut() {
            Some(ParagraphElement::Run(r)) => r,
            _ => unreachable!(),
        }
    }

    /// Add a run with text.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut Run {
        let run = self.add_run();
        run.set_text(text);
        run
    }

    /// Add an inline image to the paragraph.
    pub fn add_image(&mut self, image: InlineImage) -> &mut InlineImage {
        self.elements.push(ParagraphElement::InlineImage(image));
        match self.elements.last_mut() {
            Some(ParagraphElement::InlineImage(img)) => img,
            _ => unreachable!(),
        }
    }

    /// Set the paragraph style.
    pub fn set_style(&mut self, style_id: &str) {
        self.style = Some(style_id.to_string());
    }

    /// Set paragraph alignment.
    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) {
        self.properties.alignment = Some(alignment);
    }

    /// Set spacing before this paragraph (in points).
    pub fn set_space_before(&mut self, points: f64) {
        self.properties.space_before = Some(units::pt_to_twips(points));
    }

    /// Set spacing after this paragraph (in points).
    pub fn set_space_after(&mut self, points: f64) {
        self.properties.space_after = Some(units::pt_to_twips(points));
    }

    /// Iterate over the runs of this paragraph.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.elements.iter().filter_map(|element| match element {
            ParagraphElement::Run(run) => Some(run),
            _ => None,
        })
    }

    /// Iterate mutably over the runs of this paragraph.
    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut Run> {
        self.elements.iter_mut().filter_map(|element| match element {
            ParagraphElement::Run(run) => Some(run),
            _ => None,
        })
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs().map(Run::text).collect()
    }

    /// Get the paragraph alignment, if set.
    pub fn alignment(&self) -> Option<ParagraphAlignment> {
        self.properties.alignment
    }

    /// Number of inline images in this paragraph.
    pub(crate) fn image_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, ParagraphElement::InlineImage(_)))
            .count()
    }

    /// Check whether any run of this paragraph is a page break.
    pub fn has_page_break(&self) -> bool {
        self.runs()
            .any(|run| matches!(run.content, crate::docx::run::RunContent::PageBreak))
    }

    /// Serialize the paragraph, consuming relationship IDs for images.
    ///
    /// `image_counter` indexes into `image_rel_ids` and advances across the
    /// whole document body so every image gets its own relationship.
    pub(crate) fn to_xml(
        &self,
        xml: &mut String,
        image_rel_ids: &[String],
        image_counter: &mut usize,
    ) -> Result<()> {
        xml.push_str("<w:p>");

        // Write paragraph properties
        if self.style.is_some() || self.properties.has_properties() {
            xml.push_str("<w:pPr>");

            if let Some(ref style) = self.style {
                write!(xml, "<w:pStyle w:val=\"{}\"/>", escape_xml(style))?;
            }

            if let Some(alignment) = self.properties.alignment {
                write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_str())?;
            }

            if self.properties.space_before.is_some() || self.properties.space_after.is_some() {
                xml.push_str("<w:spacing");
                if let Some(before) = self.properties.space_before {
                    write!(xml, " w:before=\"{}\"", before)?;
                }
                if let Some(after) = self.properties.space_after {
                    write!(xml, " w:after=\"{}\"", after)?;
                }
                xml.push_str("/>");
            }

            xml.push_str("</w:pPr>");
        }

        for element in &self.elements {
            match element {
                ParagraphElement::Run(run) => run.to_xml(xml)?,
                ParagraphElement::InlineImage(image) => {
                    let rel_id = image_rel_ids.get(*image_counter).ok_or_else(|| {
                        DocxError::InvalidFormat(
                            "no relationship assigned for inline image".to_string(),
                        )
                    })?;
                    xml.push_str("<w:r>");
                    image.to_xml(xml, rel_id)?;
                    xml.push_str("</w:r>");
                    *image_counter += 1;
                },
            }
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}

/// Paragraph properties.
#[derive(Debug, Default)]
pub(crate) struct ParagraphProperties {
    pub(crate) alignment: Option<ParagraphAlignment>,
    pub(crate) space_before: Option<u32>,
    pub(crate) space_after: Option<u32>,
}

impl ParagraphProperties {
    pub(crate) fn has_properties(&self) -> bool {
        self.alignment.is_some() || self.space_before.is_some() || self.space_after.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(para: &Paragraph) -> String {
        let mut xml = String::new();
        para.to_xml(&mut xml, &[], &mut 0).unwrap();
        xml
    }

    #[test]
    fn test_empty_paragraph() {
        let para = Paragraph::new();
        assert_eq!(render(&para), "<w:p></w:p>");
    }

    #[test]
    fn test_styled_paragraph() {
        let mut para = Paragraph::new();
        para.set_style("Heading2");
        para.add_run_with_text("What Happens Next?");

        let xml = render(&para);
        assert!(xml.contains("<w:pStyle w:val=\"Heading2\"/>"));
        assert!(xml.contains("What Happens Next?"));
    }

    #[test]
    fn test_spacing_in_twips() {
        let mut para = Paragraph::new();
        para.set_space_before(18.0);
        para.set_space_after(4.0);

        let xml = render(&para);
        assert!(xml.contains("<w:spacing w:before=\"360\" w:after=\"80\"/>"));
    }

    #[test]
    fn test_alignment() {
        let mut para = Paragraph::new();
        para.set_alignment(ParagraphAlignment::Center);
        assert!(render(&para).contains("<w:jc w:val=\"center\"/>"));
    }

    #[test]
    fn test_image_without_relationship_fails() {
        let mut para = Paragraph::new();
        let png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        para.add_image(InlineImage::from_bytes(png, 914400, 914400).unwrap());

        let mut xml = String::new();
        assert!(para.to_xml(&mut xml, &[], &mut 0).is_err());
    }

    #[test]
    fn test_text_concatenation() {
        let mut para = Paragraph::new();
        para.add_run_with_text("1. ");
        para.add_run_with_text("About Your Business");
        assert_eq!(para.text(), "1. About Your Business");
    }
}
