/// Style definitions and styles-part generation for the document writer.
///
/// Styles define reusable formatting applied by name from paragraphs, and
/// the document defaults carry the base font every run inherits unless it
/// overrides them.
use std::fmt::Write as FmtWrite;

use crate::docx::escape_xml;
use crate::error::Result;

/// Type of a style definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleType {
    /// Paragraph style.
    Paragraph,
    /// Character style.
    Character,
}

impl StyleType {
    /// Convert the style type to its XML attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Character => "character",
        }
    }
}

/// Document-wide run defaults written to `w:docDefaults`.
///
/// These are the font, size, and color every run inherits unless a style or
/// the run itself overrides them.
#[derive(Debug, Clone)]
pub struct DocumentDefaults {
    /// Font family name
    pub font_name: String,
    /// Font size in half-points
    pub font_size: u32,
    /// Text color in hex RGB format, if overridden
    pub color: Option<String>,
}

impl Default for DocumentDefaults {
    fn default() -> Self {
        Self {
            font_name: "Calibri".to_string(),
            font_size: 22,
            color: None,
        }
    }
}

/// A style definition for the styles part.
#[derive(Debug, Clone)]
pub struct Style {
    /// Style identifier (e.g., "Heading1")
    style_id: String,
    /// UI-visible name (e.g., "Heading 1")
    name: String,
    /// Type of style
    style_type: StyleType,
    /// Whether this is the default style for its type
    is_default: bool,
    /// ID of the style this is based on
    based_on: Option<String>,
    /// UI priority for display ordering (lower = higher priority)
    priority: Option<i32>,
    /// Whether to show in the quick style gallery
    is_quick_style: bool,
    /// Font family name
    font_name: Option<String>,
    /// Font size in half-points
    font_size: Option<u32>,
    /// Bold formatting
    bold: bool,
    /// Italic formatting
    italic: bool,
    /// Font color (hex RGB)
    color: Option<String>,
    /// Space before paragraph in twips
    space_before: Option<u32>,
    /// Space after paragraph in twips
    space_after: Option<u32>,
}

impl Style {
    /// Create a new style with the given ID, name, and type.
    pub fn new(style_id: impl Into<String>, name: impl Into<String>, style_type: StyleType) -> Self {
        Self {
            style_id: style_id.into(),
            name: name.into(),
            style_type,
            is_default: false,
            based_on: None,
            priority: None,
            is_quick_style: false,
            font_name: None,
            font_size: None,
            bold: false,
            italic: false,
            color: None,
            space_before: None,
            space_after: None,
        }
    }

    /// Get the style identifier.
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    /// Get the style name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mark this style as the default for its type.
    pub fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    /// Set the style this one is based on.
    pub fn set_based_on(&mut self, based_on: Option<String>) {
        self.based_on = based_on;
    }

    /// Set the UI priority.
    pub fn set_priority(&mut self, priority: Option<i32>) {
        self.priority = priority;
    }

    /// Show this style in the quick style gallery.
    pub fn set_quick_style(&mut self, quick: bool) {
        self.is_quick_style = quick;
    }

    /// Set the font family name.
    pub fn set_font_name(&mut self, font_name: Option<String>) {
        self.font_name = font_name;
    }

    /// Set the font size in half-points.
    pub fn set_font_size(&mut self, font_size: Option<u32>) {
        self.font_size = font_size;
    }

    /// Set bold formatting.
    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    /// Set italic formatting.
    pub fn set_italic(&mut self, italic: bool) {
        self.italic = italic;
    }

    /// Set the font color (hex RGB).
    pub fn set_color(&mut self, color: Option<String>) {
        self.color = color;
    }

    /// Set space before in twips.
    pub fn set_space_before(&mut self, twips: Option<u32>) {
        self.space_before = twips;
    }

    /// Set space after in twips.
    pub fn set_space_after(&mut self, twips: Option<u32>) {
        self.space_after = twips;
    }

    /// Generate XML for this style.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);

        write!(
            &mut xml,
            r#"<w:style w:type="{}" w:styleId="{}""#,
            self.style_type.to_xml(),
            escape_xml(&self.style_id)
        )?;

        if self.is_default {
            xml.push_str(r#" w:default="1""#);
        }

        xml.push('>');

        write!(&mut xml, r#"<w:name w:val="{}"/>"#, escape_xml(&self.name))?;

        if let Some(ref based_on) = self.based_on {
            write!(&mut xml, r#"<w:basedOn w:val="{}"/>"#, escape_xml(based_on))?;
        }

        if let Some(priority) = self.priority {
            write!(&mut xml, r#"<w:uiPriority w:val="{}"/>"#, priority)?;
        }

        if self.is_quick_style {
            xml.push_str("<w:qFormat/>");
        }

        // Paragraph properties
        if matches!(self.style_type, StyleType::Paragraph)
            && (self.space_before.is_some() || self.space_after.is_some())
        {
            xml.push_str("<w:pPr><w:spacing");
            if let Some(before) = self.space_before {
                write!(&mut xml, r#" w:before="{}""#, before)?;
            }
            if let Some(after) = self.space_after {
                write!(&mut xml, r#" w:after="{}""#, after)?;
            }
            xml.push_str("/></w:pPr>");
        }

        // Run properties (character formatting)
        let has_run_props = self.font_name.is_some()
            || self.font_size.is_some()
            || self.bold
            || self.italic
            || self.color.is_some();

        if has_run_props {
            xml.push_str("<w:rPr>");

            if let Some(ref font_name) = self.font_name {
                write!(
                    &mut xml,
                    r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:cs="{}"/>"#,
                    escape_xml(font_name),
                    escape_xml(font_name),
                    escape_xml(font_name)
                )?;
            }

            if self.bold {
                xml.push_str("<w:b/>");
            }

            if self.italic {
                xml.push_str("<w:i/>");
            }

            if let Some(size) = self.font_size {
                write!(&mut xml, r#"<w:sz w:val="{}"/>"#, size)?;
                write!(&mut xml, r#"<w:szCs w:val="{}"/>"#, size)?;
            }

            if let Some(ref color) = self.color {
                write!(&mut xml, r#"<w:color w:val="{}"/>"#, escape_xml(color))?;
            }

            xml.push_str("</w:rPr>");
        }

        xml.push_str("</w:style>");

        Ok(xml)
    }

    /// Create the "Normal" paragraph style (base style).
    pub fn normal() -> Self {
        let mut style = Self::new("Normal", "Normal", StyleType::Paragraph);
        style.set_default(true);
        style
    }

    /// Create the "Heading 1" style.
    pub fn heading_1() -> Self {
        let mut style = Self::new("Heading1", "Heading 1", StyleType::Paragraph);
        style.set_based_on(Some("Normal".to_string()));
        style.set_font_name(Some("Calibri Light".to_string()));
        style.set_font_size(Some(32)); // 16pt
        style.set_color(Some("2F5496".to_string()));
        style.set_space_before(Some(240)); // 12pt before
        style.set_space_after(Some(0));
        style.set_priority(Some(9));
        style.set_quick_style(true);
        style
    }

    /// Create the "Heading 2" style.
    pub fn heading_2() -> Self {
        let mut style = Self::new("Heading2", "Heading 2", StyleType::Paragraph);
        style.set_based_on(Some("Normal".to_string()));
        style.set_font_name(Some("Calibri Light".to_string()));
        style.set_font_size(Some(26)); // 13pt
        style.set_color(Some("2F5496".to_string()));
        style.set_space_before(Some(40)); // 2pt before
        style.set_space_after(Some(0));
        style.set_priority(Some(9));
        style.set_quick_style(true);
        style
    }
}

/// Generate the complete styles.xml content.
pub(crate) fn generate_styles_xml(
    defaults: &DocumentDefaults,
    styles: &[Style],
) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
    );
    xml.push_str(
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );

    // Document defaults: the base run formatting every style inherits
    xml.push_str("<w:docDefaults>");
    xml.push_str("<w:rPrDefault><w:rPr>");
    write!(
        &mut xml,
        r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:cs="{}"/>"#,
        escape_xml(&defaults.font_name),
        escape_xml(&defaults.font_name),
        escape_xml(&defaults.font_name)
    )?;
    write!(&mut xml, r#"<w:sz w:val="{}"/>"#, defaults.font_size)?;
    write!(&mut xml, r#"<w:szCs w:val="{}"/>"#, defaults.font_size)?;
    if let Some(ref color) = defaults.color {
        write!(&mut xml, r#"<w:color w:val="{}"/>"#, escape_xml(color))?;
    }
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str("<w:pPrDefault/>");
    xml.push_str("</w:docDefaults>");

    for style in styles {
        let style_xml = style.to_xml()?;
        xml.push_str(&style_xml);
    }

    xml.push_str("</w:styles>");

    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_basic_style() {
        let style = Style::new("MyStyle", "My Custom Style", StyleType::Paragraph);
        assert_eq!(style.style_id(), "MyStyle");
        assert_eq!(style.name(), "My Custom Style");
    }

    #[test]
    fn test_heading_factory() {
        let h2 = Style::heading_2();
        let xml = h2.to_xml().unwrap();
        assert!(xml.contains(r#"w:styleId="Heading2""#));
        assert!(xml.contains(r#"<w:basedOn w:val="Normal"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="26"/>"#));
    }

    #[test]
    fn test_styles_xml_defaults() {
        let defaults = DocumentDefaults {
            font_name: "Calibri".to_string(),
            font_size: 22,
            color: Some("333333".to_string()),
        };
        let xml = generate_styles_xml(&defaults, &[Style::normal()]).unwrap();

        assert!(xml.contains(r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="22"/>"#));
        assert!(xml.contains(r#"<w:color w:val="333333"/>"#));
        assert!(xml.contains(r#"w:styleId="Normal" w:default="1""#));
    }
}
