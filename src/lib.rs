//! Rambutan - generator for the ChatFlow360 knowledge-base onboarding questionnaire
//!
//! This crate procedurally builds a bilingual (English/Spanish) onboarding
//! questionnaire and writes it as a Word document in the Office Open XML
//! (OOXML) format (.docx). The document collects the business knowledge an
//! AI chat assistant needs before it can answer visitor questions.
//!
//! The crate has two layers:
//!
//! - [`docx`]: a small WordprocessingML writer for paragraphs, styled runs,
//!   tables, inline images, page geometry, and a styles part, plus the
//!   OPC/ZIP packaging that turns them into a valid .docx file.
//! - [`questionnaire`]: the fixed bilingual content plan (cover,
//!   instructions, seven numbered sections, FAQ, closing note) and the
//!   builder that walks it, appending styled blocks in a single forward
//!   pass.
//!
//! # Example - Generating the questionnaire
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let output = Path::new("docs/ChatFlow360-Knowledge-Questionnaire.docx");
//! let logo = Path::new("public/logo.png");
//!
//! // The logo is optional: a missing file is skipped silently.
//! let path = rambutan::questionnaire::generate(output, Some(logo))?;
//! println!("Document saved: {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building a document directly
//!
//! ```
//! use rambutan::docx::DocxPackage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pkg = DocxPackage::new();
//! let doc = pkg.document_mut();
//!
//! let para = doc.add_paragraph();
//! para.add_run_with_text("Bold text ").bold(true);
//! para.add_run_with_text("and normal text.");
//!
//! let bytes = pkg.to_bytes()?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok(())
//! # }
//! ```

pub mod docx;
pub mod error;
pub mod questionnaire;

pub(crate) mod units;

pub use error::{DocxError, Result};
