//! Questionnaire document assembly.
//!
//! The builder walks the static content plan in [`super::content`] and
//! appends styled blocks to a [`DocxPackage`] in a single forward pass:
//! cover, instructions, sections 1-6, the FAQ, and the closing note. No
//! block is revisited after it is appended.

use std::fs;
use std::path::{Path, PathBuf};

use image::GenericImageView;
use log::{debug, info};

use crate::docx::{
    BorderStyle, CellBorder, DocxPackage, InlineImage, ParagraphAlignment, SectionProperties,
};
use crate::error::Result;
use crate::units;

use super::content::{
    self, BODY_TEXT, BOX_BORDER, BOX_FILL, DARK_NAVY, FAINT_GRAY, GRAY, Section, TEAL, Tip,
};

/// Display width of the cover logo, in inches.
const LOGO_WIDTH_INCHES: f64 = 2.0;

/// Assembles the questionnaire document through the docx writer.
pub struct QuestionnaireBuilder {
    pkg: DocxPackage,
}

impl QuestionnaireBuilder {
    /// Create a builder with the questionnaire's page and text defaults.
    pub fn new() -> Self {
        let mut pkg = DocxPackage::new();

        // 2.5cm margins on all sides
        *pkg.document_mut().section_mut() = SectionProperties::letter().margins_cm(2.5, 2.5, 2.5, 2.5);

        // Normal text: Calibri 11pt, dark gray
        let defaults = pkg.defaults_mut();
        defaults.font_name = "Calibri".to_string();
        defaults.font_size = 22;
        defaults.color = Some(BODY_TEXT.to_string());

        *pkg.properties_mut() = crate::docx::DocumentProperties::new()
            .title(content::DOC_TITLE)
            .subject(content::DOC_SUBJECT)
            .creator(content::DOC_CREATOR);

        Self { pkg }
    }

    /// Build the complete questionnaire.
    ///
    /// `logo` is probed for existence: a missing file is skipped silently,
    /// while an unreadable or undecodable file is a fatal error.
    pub fn build(mut self, logo: Option<&Path>) -> Result<DocxPackage> {
        self.add_cover(logo)?;
        self.add_instructions()?;

        for section in content::SECTIONS {
            self.add_section(section);
        }
        self.add_faq();

        self.add_closing()?;
        Ok(self.pkg)
    }

    /// Append a heading paragraph whose runs are recolored.
    fn add_colored_heading(&mut self, text: &str, level: u8, color: &str) -> Result<()> {
        let heading = self.pkg.document_mut().add_heading(text, level)?;
        for run in heading.runs_mut() {
            run.color(color);
        }
        Ok(())
    }

    /// Append the numbered bilingual section header.
    fn add_section_header(&mut self, number: u8, title_en: &str, title_es: &str) {
        let para = self.pkg.document_mut().add_paragraph();
        para.set_space_before(18.0);
        para.set_space_after(4.0);

        para.add_run_with_text(&format!("{}. ", number))
            .font_size(units::pt_to_half_points(14.0))
            .bold(true)
            .color(TEAL);

        para.add_run_with_text(title_en)
            .font_size(units::pt_to_half_points(14.0))
            .bold(true)
            .color(DARK_NAVY);

        para.add_run_with_text("  /  ")
            .font_size(units::pt_to_half_points(12.0))
            .color(GRAY);

        para.add_run_with_text(title_es)
            .font_size(units::pt_to_half_points(12.0))
            .italic(true)
            .color(GRAY);
    }

    /// Append a bilingual question: bold English prompt, italic Spanish
    /// prompt directly beneath it.
    fn add_question(&mut self, en: &str, es: &str) {
        let doc = self.pkg.document_mut();

        let para = doc.add_paragraph();
        para.set_space_before(8.0);
        para.set_space_after(2.0);
        para.add_run_with_text(&format!("  {}", en))
            .font_size(units::pt_to_half_points(10.5))
            .bold(true)
            .color(DARK_NAVY);

        let para = doc.add_paragraph();
        para.set_space_before(0.0);
        para.set_space_after(2.0);
        para.add_run_with_text(&format!("  {}", es))
            .font_size(units::pt_to_half_points(10.0))
            .italic(true)
            .color(GRAY);
    }

    /// Append a bordered, shaded answer box sized to `lines` text lines,
    /// followed by a spacer paragraph.
    fn add_answer_box(&mut self, lines: u32) {
        let doc = self.pkg.document_mut();

        let table = doc.add_table(1, 1);
        table.set_alignment(ParagraphAlignment::Center);

        let cell = table
            .cell(0, 0)
            .expect("freshly created 1x1 table has a cell");
        cell.set_border(CellBorder {
            style: BorderStyle::Single,
            size: 4,
            color: BOX_BORDER.to_string(),
        });
        cell.set_shading(BOX_FILL);
        // The box height is carried by paragraph spacing: 14pt per line
        cell.first_paragraph_mut()
            .set_space_after(f64::from(lines) * 14.0);

        doc.add_paragraph(); // spacer
    }

    /// Append a small-print tip annotation.
    fn add_tip(&mut self, tip: &Tip) {
        let para = self.pkg.document_mut().add_paragraph();
        para.set_space_before(4.0);
        para.set_space_after(8.0);

        para.add_run_with_text("TIP: ")
            .font_size(units::pt_to_half_points(9.0))
            .bold(true)
            .color(TEAL);

        para.add_run_with_text(tip.en)
            .font_size(units::pt_to_half_points(9.0))
            .color(GRAY);

        para.add_run_with_text("  |  ")
            .font_size(units::pt_to_half_points(9.0))
            .color(FAINT_GRAY);

        para.add_run_with_text(tip.es)
            .font_size(units::pt_to_half_points(9.0))
            .italic(true)
            .color(GRAY);
    }

    /// Append the cover page: optional logo, title block, org-info fields.
    fn add_cover(&mut self, logo: Option<&Path>) -> Result<()> {
        self.add_logo(logo)?;

        let doc = self.pkg.document_mut();

        // Title
        let para = doc.add_paragraph();
        para.set_alignment(ParagraphAlignment::Center);
        para.set_space_before(20.0);
        para.add_run_with_text(content::COVER_TITLE)
            .font_size(units::pt_to_half_points(26.0))
            .bold(true)
            .color(DARK_NAVY);

        // Subtitle
        let para = doc.add_paragraph();
        para.set_alignment(ParagraphAlignment::Center);
        para.set_space_after(8.0);
        para.add_run_with_text(content::COVER_SUBTITLE)
            .font_size(units::pt_to_half_points(16.0))
            .italic(true)
            .color(GRAY);

        // Description
        let para = doc.add_paragraph();
        para.set_alignment(ParagraphAlignment::Center);
        para.set_space_after(30.0);
        para.add_run_with_text(content::COVER_DESCRIPTION)
            .font_size(units::pt_to_half_points(10.5))
            .color(GRAY);

        // Org info fields
        doc.add_paragraph();
        for label in content::COVER_FIELDS {
            let para = doc.add_paragraph();
            para.add_run_with_text(label)
                .font_size(units::pt_to_half_points(10.0))
                .bold(true)
                .color(DARK_NAVY);
            para.add_run_with_text(content::COVER_FIELD_RULE)
                .font_size(units::pt_to_half_points(10.0))
                .color(FAINT_GRAY);
        }

        doc.add_page_break();
        Ok(())
    }

    /// Insert the centered cover logo if the file exists.
    ///
    /// The display width is fixed; the height follows the image's pixel
    /// aspect ratio.
    fn add_logo(&mut self, logo: Option<&Path>) -> Result<()> {
        let Some(path) = logo else {
            return Ok(());
        };
        if !path.exists() {
            debug!("logo not found at {}, skipping", path.display());
            return Ok(());
        }

        let data = fs::read(path)?;
        let (px_width, px_height) = image::load_from_memory(&data)?.dimensions();

        let width_emu = units::inches_to_emu(LOGO_WIDTH_INCHES);
        let height_emu =
            (width_emu as f64 * f64::from(px_height) / f64::from(px_width)) as i64;
        debug!(
            "embedding logo {} ({}x{} px)",
            path.display(),
            px_width,
            px_height
        );

        let para = self.pkg.document_mut().add_paragraph();
        para.set_alignment(ParagraphAlignment::Center);
        para.add_image(InlineImage::from_bytes(data, width_emu, height_emu)?)
            .set_description("ChatFlow360 logo");

        Ok(())
    }

    /// Append the how-to-use block.
    fn add_instructions(&mut self) -> Result<()> {
        self.add_colored_heading(content::INSTRUCTIONS_TITLE, 2, DARK_NAVY)?;

        let doc = self.pkg.document_mut();

        let para = doc.add_paragraph();
        para.add_run_with_text(content::INSTRUCTIONS_EN)
            .font_size(units::pt_to_half_points(10.0))
            .color(GRAY);

        let para = doc.add_paragraph();
        para.set_space_before(6.0);
        para.add_run_with_text(content::INSTRUCTIONS_ES)
            .font_size(units::pt_to_half_points(10.0))
            .italic(true)
            .color(GRAY);

        doc.add_paragraph();
        Ok(())
    }

    /// Append one numbered section with its questions, tips, and boxes.
    fn add_section(&mut self, section: &Section) {
        if section.page_break_before {
            self.pkg.document_mut().add_page_break();
        }

        self.add_section_header(section.number, section.title_en, section.title_es);

        for question in section.questions {
            self.add_question(question.en, question.es);
            if let Some(ref tip) = question.tip {
                self.add_tip(tip);
            }
            self.add_answer_box(question.answer_lines);
        }
    }

    /// Append the FAQ section: intro plus numbered blank prompts.
    fn add_faq(&mut self) {
        self.add_section_header(content::FAQ_NUMBER, content::FAQ_TITLE_EN, content::FAQ_TITLE_ES);

        let doc = self.pkg.document_mut();

        let para = doc.add_paragraph();
        para.set_space_after(8.0);
        para.add_run_with_text(content::FAQ_INTRO_EN)
            .font_size(units::pt_to_half_points(10.0))
            .color(GRAY);

        let para = doc.add_paragraph();
        para.set_space_after(12.0);
        para.add_run_with_text(content::FAQ_INTRO_ES)
            .font_size(units::pt_to_half_points(10.0))
            .italic(true)
            .color(GRAY);

        for i in 1..=content::FAQ_PROMPTS {
            let para = self.pkg.document_mut().add_paragraph();
            para.set_space_before(10.0);
            para.add_run_with_text(&format!("Q{} / P{}:", i, i))
                .font_size(units::pt_to_half_points(10.0))
                .bold(true)
                .color(TEAL);
            self.add_answer_box(content::FAQ_ANSWER_LINES);
        }
    }

    /// Append the closing note and the branding footer.
    fn add_closing(&mut self) -> Result<()> {
        self.pkg.document_mut().add_page_break();
        self.add_colored_heading(content::CLOSING_TITLE, 2, DARK_NAVY)?;

        let doc = self.pkg.document_mut();

        let para = doc.add_paragraph();
        para.add_run_with_text(content::CLOSING_EN)
            .font_size(units::pt_to_half_points(10.5))
            .color(GRAY);

        let para = doc.add_paragraph();
        para.set_space_before(12.0);
        para.add_run_with_text(content::CLOSING_ES)
            .font_size(units::pt_to_half_points(10.5))
            .italic(true)
            .color(GRAY);

        doc.add_paragraph();

        let para = doc.add_paragraph();
        para.set_alignment(ParagraphAlignment::Center);
        para.add_run_with_text(content::FOOTER_SITE)
            .font_size(units::pt_to_half_points(10.0))
            .bold(true)
            .color(TEAL);

        let para = doc.add_paragraph();
        para.set_alignment(ParagraphAlignment::Center);
        para.add_run_with_text(content::FOOTER_TAGLINE)
            .font_size(units::pt_to_half_points(9.0))
            .color(GRAY);
        Ok(())
    }
}

impl Default for QuestionnaireBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the questionnaire and save it to `output`.
///
/// Returns the resolved output path. The output directory must already
/// exist; it is not created.
pub fn generate(output: &Path, logo: Option<&Path>) -> Result<PathBuf> {
    let pkg = QuestionnaireBuilder::new().build(logo)?;
    let path = pkg.save(output)?;
    info!("questionnaire written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::BodyElement;

    #[test]
    fn test_build_without_logo() {
        let pkg = QuestionnaireBuilder::new().build(None).unwrap();
        assert!(pkg.document().paragraph_count() > 0);
        // One box per question plus the FAQ prompts
        let expected_boxes: usize = content::SECTIONS
            .iter()
            .map(|s| s.questions.len())
            .sum::<usize>()
            + content::FAQ_PROMPTS as usize;
        assert_eq!(pkg.document().table_count(), expected_boxes);
    }

    #[test]
    fn test_missing_logo_is_skipped() {
        let pkg = QuestionnaireBuilder::new()
            .build(Some(Path::new("no/such/logo.png")))
            .unwrap();

        let has_image = pkg.document().body().iter().any(|element| match element {
            BodyElement::Paragraph(p) => p.image_count() > 0,
            BodyElement::Table(_) => false,
        });
        assert!(!has_image);
    }

    #[test]
    fn test_section_page_breaks() {
        let pkg = QuestionnaireBuilder::new().build(None).unwrap();

        // Cover, sections 3 and 6, and the closing note each break the page
        let page_breaks = pkg
            .document()
            .body()
            .iter()
            .filter(|element| match element {
                BodyElement::Paragraph(p) => p.has_page_break(),
                BodyElement::Table(_) => false,
            })
            .count();
        assert_eq!(page_breaks, 4);
    }
}
