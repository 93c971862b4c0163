//! Word (.docx) document writing support.
//!
//! This module builds Word documents in the Office Open XML (OOXML) format.
//! A document is accumulated as a sequence of body elements (paragraphs and
//! tables), serialized to WordprocessingML, and packaged together with its
//! styles part, core properties, and relationships into an OPC container
//! (a ZIP archive).
//!
//! # Architecture
//!
//! The module is organized around these key types:
//! - `DocxPackage`: the overall .docx file package and its serialization
//! - `Document`: the document body and content API
//! - `Paragraph`: a paragraph with runs and inline images
//! - `Run`: a text run with character formatting
//! - `Table`: a table with rows and cells
//! - `SectionProperties`: page size and margins
//!
//! # Example
//!
//! ```
//! use rambutan::docx::DocxPackage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pkg = DocxPackage::new();
//! let doc = pkg.document_mut();
//!
//! let para = doc.add_paragraph();
//! para.add_run_with_text("Hello").bold(true).color("2F92AD");
//!
//! let table = doc.add_table(1, 1);
//! if let Some(cell) = table.cell(0, 0) {
//!     cell.set_shading("F8FAFB");
//! }
//!
//! let bytes = pkg.to_bytes()?;
//! # assert!(!bytes.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod format;
pub mod image;
pub mod package;
pub mod paragraph;
pub mod properties;
pub mod run;
pub mod section;
pub mod style;
pub mod table;

pub use document::{BodyElement, Document};
pub use format::{BorderStyle, ImageFormat, ParagraphAlignment};
pub use image::InlineImage;
pub use package::DocxPackage;
pub use paragraph::Paragraph;
pub use properties::DocumentProperties;
pub use run::{Run, RunContent};
pub use section::SectionProperties;
pub use style::{DocumentDefaults, Style, StyleType};
pub use table::{Cell, CellBorder, Row, Table};

/// Escape XML special characters.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_escaping() {
        let escaped = escape_xml(r#"<foo & "bar">"#);
        assert_eq!(escaped, "&lt;foo &amp; &quot;bar&quot;&gt;");
    }
}
