//! Structural tests for the generated questionnaire document.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use rambutan::docx::BodyElement;
use rambutan::questionnaire::{QuestionnaireBuilder, content, generate};

/// Build the questionnaire package bytes without a logo.
fn build_bytes() -> Vec<u8> {
    QuestionnaireBuilder::new()
        .build(None)
        .unwrap()
        .to_bytes()
        .unwrap()
}

/// Extract a part from the package archive.
fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

fn part_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    archive.file_names().map(String::from).collect()
}

/// Count start elements with the given name in an XML document.
fn count_elements(xml: &str, element: &[u8]) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut count = 0;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == element => count += 1,
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => panic!("XML parse error: {}", e),
        }
    }
    count
}

#[test]
fn builds_are_byte_identical() {
    assert_eq!(build_bytes(), build_bytes());
}

#[test]
fn document_has_seven_numbered_sections_in_order() {
    let pkg = QuestionnaireBuilder::new().build(None).unwrap();

    let mut headers: Vec<(u8, String, String)> = Vec::new();
    for element in pkg.document().body() {
        let BodyElement::Paragraph(para) = element else {
            continue;
        };
        let runs: Vec<_> = para.runs().collect();
        if runs.len() != 4 || runs[0].get_color() != Some(content::TEAL) {
            continue;
        }
        let Ok(number) = runs[0].text().trim_end_matches(". ").parse::<u8>() else {
            continue;
        };
        assert!(runs[1].is_bold(), "English title run is bold");
        assert!(runs[3].is_italic(), "Spanish title run is italic");
        headers.push((number, runs[1].text().to_string(), runs[3].text().to_string()));
    }

    assert_eq!(headers.len(), 7);
    for (index, (number, title_en, title_es)) in headers.iter().enumerate() {
        assert_eq!(*number as usize, index + 1, "sections appear in source order");
        if let Some(section) = content::SECTIONS.get(index) {
            assert_eq!(title_en, section.title_en);
            assert_eq!(title_es, section.title_es);
        } else {
            assert_eq!(title_en, content::FAQ_TITLE_EN);
            assert_eq!(title_es, content::FAQ_TITLE_ES);
        }
    }
}

#[test]
fn every_question_is_followed_by_one_answer_box() {
    let pkg = QuestionnaireBuilder::new().build(None).unwrap();
    let body = pkg.document().body();

    for section in content::SECTIONS {
        for question in section.questions {
            let en_text = format!("  {}", question.en);
            let pos = body
                .iter()
                .position(|el| matches!(el, BodyElement::Paragraph(p) if p.text() == en_text))
                .unwrap_or_else(|| panic!("question not found: {}", question.en));

            // Spanish prompt directly beneath the English one
            match &body[pos + 1] {
                BodyElement::Paragraph(p) => assert_eq!(p.text(), format!("  {}", question.es)),
                BodyElement::Table(_) => panic!("expected Spanish prompt after: {}", question.en),
            }

            // Optional tip, then exactly one answer box and its spacer
            let mut index = pos + 2;
            if question.tip.is_some() {
                match &body[index] {
                    BodyElement::Paragraph(p) => assert!(p.text().starts_with("TIP: ")),
                    BodyElement::Table(_) => panic!("expected tip after: {}", question.en),
                }
                index += 1;
            }
            assert!(
                matches!(&body[index], BodyElement::Table(_)),
                "answer box must immediately follow: {}",
                question.en
            );
            assert!(
                matches!(&body[index + 1], BodyElement::Paragraph(_)),
                "spacer paragraph follows the answer box"
            );
        }
    }
}

#[test]
fn faq_has_seven_prompts_each_with_answer_box() {
    let pkg = QuestionnaireBuilder::new().build(None).unwrap();
    let body = pkg.document().body();

    for i in 1..=content::FAQ_PROMPTS {
        let prompt = format!("Q{} / P{}:", i, i);
        let pos = body
            .iter()
            .position(|el| matches!(el, BodyElement::Paragraph(p) if p.text() == prompt))
            .unwrap_or_else(|| panic!("FAQ prompt not found: {}", prompt));
        assert!(
            matches!(&body[pos + 1], BodyElement::Table(_)),
            "answer box follows {}",
            prompt
        );
    }
}

#[test]
fn answer_box_count_matches_content_plan() {
    let bytes = build_bytes();
    let document = read_part(&bytes, "word/document.xml");

    let expected: usize = content::SECTIONS
        .iter()
        .map(|s| s.questions.len())
        .sum::<usize>()
        + content::FAQ_PROMPTS as usize;

    assert_eq!(count_elements(&document, b"w:tbl"), expected);
}

#[test]
fn output_without_logo_has_no_image_block() {
    let bytes = build_bytes();

    let document = read_part(&bytes, "word/document.xml");
    assert!(!document.contains("<w:drawing>"));
    assert!(part_names(&bytes).iter().all(|n| !n.starts_with("word/media/")));
}

#[test]
fn logo_is_embedded_centered_at_fixed_width() {
    let dir = tempfile::tempdir().unwrap();
    let logo_path = dir.path().join("logo.png");

    // A 4x2 logo: the 2in display width halves into a 1in display height
    let logo = image::RgbaImage::from_pixel(4, 2, image::Rgba([47, 146, 173, 255]));
    let mut cursor = Cursor::new(Vec::new());
    logo.write_to(&mut cursor, image::ImageFormat::Png).unwrap();
    std::fs::write(&logo_path, cursor.into_inner()).unwrap();

    let bytes = QuestionnaireBuilder::new()
        .build(Some(&logo_path))
        .unwrap()
        .to_bytes()
        .unwrap();

    let document = read_part(&bytes, "word/document.xml");
    assert_eq!(document.matches("<w:drawing>").count(), 1);
    assert!(document.contains(r#"<wp:extent cx="1828800" cy="914400"/>"#));

    // The logo paragraph is centered and precedes the title
    assert!(document.contains(r#"<w:jc w:val="center"/></w:pPr><w:r><w:drawing>"#));
    let drawing_pos = document.find("<w:drawing>").unwrap();
    let title_pos = document.find("Knowledge Base").unwrap();
    assert!(drawing_pos < title_pos);

    assert!(part_names(&bytes).contains(&"word/media/image1.png".to_string()));
    let content_types = read_part(&bytes, "[Content_Types].xml");
    assert!(content_types.contains(r#"Extension="png""#));
}

#[test]
fn missing_logo_path_is_skipped_silently() {
    let with_missing_logo = QuestionnaireBuilder::new()
        .build(Some(Path::new("no/such/logo.png")))
        .unwrap()
        .to_bytes()
        .unwrap();

    // Identical to a run that never asked for a logo
    assert_eq!(with_missing_logo, build_bytes());
}

#[test]
fn bilingual_cover_and_closing_are_present() {
    let bytes = build_bytes();
    let document = read_part(&bytes, "word/document.xml");

    assert!(document.contains("Knowledge Base"));
    assert!(document.contains("Cuestionario de Base de Conocimiento"));
    assert!(document.contains("What Happens Next?"));
    assert!(document.contains("chatflow360.com"));
    // The multi-line cover title uses explicit line breaks
    assert!(document.contains("Knowledge Base</w:t><w:br/><w:t"));
}

#[test]
fn generate_writes_file_and_returns_resolved_path() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("questionnaire.docx");

    let path = generate(&output, None).unwrap();
    assert!(path.is_absolute());

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
    assert!(read_part(&bytes, "docProps/core.xml").contains(content::DOC_TITLE));
}

#[test]
fn generate_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("does-not-exist").join("questionnaire.docx");

    assert!(generate(&output, None).is_err());
}
