/// Inline image support for the document writer.
use std::fmt::Write as FmtWrite;

use crate::docx::escape_xml;
use crate::docx::format::ImageFormat;
use crate::error::{DocxError, Result};

/// An inline image embedded within a paragraph.
///
/// The image bytes are stored on the document and written to the package's
/// `word/media/` directory at save time; the paragraph XML only carries a
/// relationship reference and the display extent in EMUs.
#[derive(Debug)]
pub struct InlineImage {
    /// Image binary data
    pub(crate) data: Vec<u8>,
    /// Image format
    pub(crate) format: ImageFormat,
    /// Display width in EMUs (914400 per inch)
    pub(crate) width_emu: i64,
    /// Display height in EMUs
    pub(crate) height_emu: i64,
    /// Image description/alt text
    pub(crate) description: String,
}

impl InlineImage {
    /// Create a new inline image from bytes with a fixed display extent.
    pub fn from_bytes(data: Vec<u8>, width_emu: i64, height_emu: i64) -> Result<Self> {
        let format = ImageFormat::detect_from_bytes(&data)
            .ok_or_else(|| DocxError::InvalidFormat("Unknown image format".to_string()))?;

        Ok(Self {
            data,
            format,
            width_emu,
            height_emu,
            description: String::new(),
        })
    }

    /// Set the image description/alt text.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Get a reference to the image data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the image format.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Get the display width in EMUs.
    pub fn width_emu(&self) -> i64 {
        self.width_emu
    }

    /// Get the display height in EMUs.
    pub fn height_emu(&self) -> i64 {
        self.height_emu
    }

    /// Serialize the inline image to XML with its relationship ID.
    pub(crate) fn to_xml(&self, xml: &mut String, r_id: &str) -> Result<()> {
        let desc = escape_xml(&self.description);

        write!(
            xml,
            r#"<w:drawing><wp:inline distT="0" distB="0" distL="0" distR="0"><wp:extent cx="{}" cy="{}"/><wp:effectExtent l="0" t="0" r="0" b="0"/><wp:docPr id="1" name="Picture" descr="{}"/><wp:cNvGraphicFramePr><a:graphicFrameLocks xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" noChangeAspect="1"/></wp:cNvGraphicFramePr><a:graphic xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:pic xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:nvPicPr><pic:cNvPr id="0" name="Picture" descr="{}"/><pic:cNvPicPr/></pic:nvPicPr><pic:blipFill><a:blip r:embed="{}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill><pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{}" cy="{}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing>"#,
            self.width_emu, self.height_emu, desc, desc, r_id, self.width_emu, self.height_emu
        )?;

        Ok(())
    }
}
