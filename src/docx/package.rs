//! OPC package assembly and serialization.
//!
//! A .docx file is an OPC package: a ZIP archive holding XML parts plus a
//! `[Content_Types].xml` map and `_rels` relationship files. This module
//! assembles the parts produced by the rest of the writer and serializes
//! them with a fixed part order and fixed entry timestamps, so identical
//! content always produces identical bytes.

use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use log::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::docx::document::Document;
use crate::docx::escape_xml;
use crate::docx::properties::DocumentProperties;
use crate::docx::style::{self, DocumentDefaults, Style};
use crate::error::Result;

/// Content type URIs (like MIME-types) that specify a part's format.
mod content_type {
    pub const OPC_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const OPC_CORE_PROPERTIES: &str =
        "application/vnd.openxmlformats-package.core-properties+xml";
    pub const WML_DOCUMENT_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const WML_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const XML: &str = "application/xml";
}

/// Relationship type URIs used in OPC packages.
mod relationship_type {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
}

/// A Word (.docx) package.
///
/// This is the main entry point for creating Word documents. It owns the
/// document body, the styles that accompany it, and the core properties,
/// and serializes them all into the OPC container.
pub struct DocxPackage {
    /// The document body
    document: Document,
    /// Core properties (metadata)
    properties: DocumentProperties,
    /// Document-wide run defaults
    defaults: DocumentDefaults,
    /// Style definitions for the styles part
    styles: Vec<Style>,
}

impl DocxPackage {
    /// Create a new empty package with the built-in style set.
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            properties: DocumentProperties::new(),
            defaults: DocumentDefaults::default(),
            styles: vec![Style::normal(), Style::heading_1(), Style::heading_2()],
        }
    }

    /// Get a reference to the document body.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get a mutable reference to the document body.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Get a reference to the package properties.
    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    /// Get a mutable reference to the package properties.
    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    /// Get a mutable reference to the document-wide run defaults.
    pub fn defaults_mut(&mut self) -> &mut DocumentDefaults {
        &mut self.defaults
    }

    /// Add a style definition to the styles part.
    pub fn add_style(&mut self, style: Style) {
        self.styles.push(style);
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        // Register media parts and assign their relationship IDs first; the
        // document XML references them by ID.
        let images = self.document.collect_images();

        let mut document_rels = Relationships::new();
        document_rels.add(relationship_type::STYLES, "styles.xml");

        let mut media_parts: Vec<(String, Vec<u8>)> = Vec::new();
        let mut image_rel_ids: Vec<String> = Vec::new();

        for (index, (data, format)) in images.iter().enumerate() {
            let filename = format!("media/image{}.{}", index + 1, format.extension());
            let rel_id = document_rels.add(relationship_type::IMAGE, &filename);
            image_rel_ids.push(rel_id);
            media_parts.push((format!("word/{}", filename), data.to_vec()));
        }

        let document_xml = self.document.to_xml(&image_rel_ids)?;
        let styles_xml = style::generate_styles_xml(&self.defaults, &self.styles)?;
        let core_xml = self.properties.to_xml();

        let mut package_rels = Relationships::new();
        package_rels.add(relationship_type::OFFICE_DOCUMENT, "word/document.xml");
        package_rels.add(relationship_type::CORE_PROPERTIES, "docProps/core.xml");

        let mut content_types = ContentTypes::new();
        content_types.add_override("/word/document.xml", content_type::WML_DOCUMENT_MAIN);
        content_types.add_override("/word/styles.xml", content_type::WML_STYLES);
        content_types.add_override("/docProps/core.xml", content_type::OPC_CORE_PROPERTIES);
        for (_, format) in &images {
            content_types.add_default(format.extension(), format.mime_type());
        }

        // Parts in a fixed order: the archive layout is part of the
        // deterministic-output contract.
        let mut parts: Vec<(String, Vec<u8>)> = vec![
            (
                "[Content_Types].xml".to_string(),
                content_types.to_xml().into_bytes(),
            ),
            ("_rels/.rels".to_string(), package_rels.to_xml().into_bytes()),
            ("docProps/core.xml".to_string(), core_xml.into_bytes()),
            ("word/document.xml".to_string(), document_xml.into_bytes()),
            (
                "word/_rels/document.xml.rels".to_string(),
                document_rels.to_xml().into_bytes(),
            ),
            ("word/styles.xml".to_string(), styles_xml.into_bytes()),
        ];
        parts.extend(media_parts);

        debug!(
            "serializing package: {} parts, {} images",
            parts.len(),
            image_rel_ids.len()
        );

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        // Fixed timestamp (DOS epoch) keeps repeated builds byte-identical.
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        for (name, blob) in &parts {
            writer.start_file(name.as_str(), options)?;
            writer.write_all(blob)?;
        }

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }

    /// Save the package to a file, overwriting any existing file.
    ///
    /// Parent directories are not created; a missing output directory
    /// surfaces as an IO error. Returns the resolved (absolute) path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let bytes = self.to_bytes()?;
        std::fs::write(&path, bytes)?;
        let resolved = std::path::absolute(path.as_ref())?;
        debug!("package saved: {}", resolved.display());
        Ok(resolved)
    }
}

impl Default for DocxPackage {
    fn default() -> Self {
        Self::new()
    }
}

/// Collection of relationships from a single source.
///
/// IDs are assigned sequentially (`rId1`, `rId2`, …) in insertion order and
/// serialized in that same order.
struct Relationships {
    rels: Vec<(String, &'static str, String)>,
}

impl Relationships {
    fn new() -> Self {
        Self { rels: Vec::new() }
    }

    /// Add a relationship and return its assigned ID.
    fn add(&mut self, reltype: &'static str, target: &str) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push((r_id.clone(), reltype, target.to_string()));
        r_id
    }

    /// Serialize relationships to a .rels file body.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        xml.push('\n');

        for (r_id, reltype, target) in &self.rels {
            xml.push_str(&format!(
                r#"  <Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(r_id),
                escape_xml(reltype),
                escape_xml(target)
            ));
            xml.push('\n');
        }

        xml.push_str("</Relationships>");

        xml
    }
}

/// Helper for building `[Content_Types].xml` content.
///
/// Manages Default and Override elements for content type mapping. Both
/// maps are ordered so serialization is stable.
struct ContentTypes {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,
    /// Override content types by part name
    overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();

        // Standard defaults present in every package
        defaults.insert(
            "rels".to_string(),
            content_type::OPC_RELATIONSHIPS.to_string(),
        );
        defaults.insert("xml".to_string(), content_type::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Add a default content type for an extension.
    fn add_default(&mut self, extension: &str, mime: &str) {
        self.defaults.insert(extension.to_string(), mime.to_string());
    }

    /// Add an override content type for a specific part name.
    fn add_override(&mut self, partname: &str, mime: &str) {
        self.overrides.insert(partname.to_string(), mime.to_string());
    }

    /// Generate the XML for `[Content_Types].xml`.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        xml.push('\n');

        for (ext, mime) in &self.defaults {
            xml.push_str(&format!(
                r#"  <Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(mime)
            ));
            xml.push('\n');
        }

        for (partname, mime) in &self.overrides {
            xml.push_str(&format!(
                r#"  <Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(mime)
            ));
            xml.push('\n');
        }

        xml.push_str("</Types>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypes::new();
        cti.add_default("png", "image/png");
        cti.add_override("/word/document.xml", content_type::WML_DOCUMENT_MAIN);

        let xml = cti.to_xml();

        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(xml.contains(r#"<Override PartName="/word/document.xml""#));
    }

    #[test]
    fn test_relationship_ids_are_sequential() {
        let mut rels = Relationships::new();
        let first = rels.add(relationship_type::STYLES, "styles.xml");
        let second = rels.add(relationship_type::IMAGE, "media/image1.png");

        assert_eq!(first, "rId1");
        assert_eq!(second, "rId2");

        let xml = rels.to_xml();
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(r#"Target="media/image1.png""#));
    }

    #[test]
    fn test_package_round_trip() {
        let mut pkg = DocxPackage::new();
        pkg.document_mut().add_paragraph_with_text("Test paragraph");

        let bytes = pkg.to_bytes().unwrap();
        assert!(bytes.starts_with(b"PK"));

        let document = read_part(&bytes, "word/document.xml");
        assert!(document.contains("Test paragraph"));

        let rels = read_part(&bytes, "_rels/.rels");
        assert!(rels.contains("word/document.xml"));
        assert!(rels.contains("docProps/core.xml"));

        let content_types = read_part(&bytes, "[Content_Types].xml");
        assert!(content_types.contains("wordprocessingml.document.main"));
    }

    #[test]
    fn test_deterministic_output() {
        let build = || {
            let mut pkg = DocxPackage::new();
            pkg.document_mut().add_paragraph_with_text("same content");
            pkg.to_bytes().unwrap()
        };

        assert_eq!(build(), build());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = DocxPackage::new();
        let result = pkg.save(dir.path().join("does-not-exist").join("out.docx"));
        assert!(matches!(result, Err(crate::error::DocxError::Io(_))));
    }

    #[test]
    fn test_save_returns_resolved_path() {
        let dir = tempfile::tempdir().unwrap();
        let pkg = DocxPackage::new();
        let path = pkg.save(dir.path().join("out.docx")).unwrap();
        assert!(path.is_absolute());
        assert!(path.exists());
    }
}
