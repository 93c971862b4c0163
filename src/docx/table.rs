/// Table types and implementation for the document writer.
use std::fmt::Write as FmtWrite;

use crate::docx::format::{BorderStyle, ParagraphAlignment};
use crate::docx::paragraph::Paragraph;
use crate::error::Result;

/// Border definition for a table cell.
#[derive(Debug, Clone)]
pub struct CellBorder {
    /// Border style
    pub style: BorderStyle,
    /// Border width in eighths of a point (e.g., 4 = 0.5pt)
    pub size: u32,
    /// Border color in hex RGB format (e.g., "B0BFCB")
    pub color: String,
}

impl Default for CellBorder {
    fn default() -> Self {
        Self {
            style: BorderStyle::Single,
            size: 4,
            color: "000000".to_string(),
        }
    }
}

/// Table properties.
#[derive(Debug, Default)]
pub(crate) struct TableProperties {
    pub(crate) alignment: Option<ParagraphAlignment>,
    pub(crate) width_pct: Option<u32>,
}

/// A table with rows and cells.
#[derive(Debug)]
pub struct Table {
    /// Table rows
    pub(crate) rows: Vec<Row>,
    /// Table properties
    pub(crate) properties: TableProperties,
}

impl Table {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        let mut table = Self {
            rows: Vec::with_capacity(rows),
            properties: TableProperties::default(),
        };
        for _ in 0..rows {
            table.add_row(cols);
        }
        table
    }

    /// Add a new row with the given column count.
    pub fn add_row(&mut self, cols: usize) -> &mut Row {
        self.rows.push(Row::new(cols));
        match self.rows.last_mut() {
            Some(row) => row,
            None => unreachable!(),
        }
    }

    /// Set the table alignment within the page.
    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) {
        self.properties.alignment = Some(alignment);
    }

    /// Set the table width in fiftieths of a percent (5000 = 100%).
    pub fn set_width_pct(&mut self, width: u32) {
        self.properties.width_pct = Some(width);
    }

    /// Get a cell by row and column index.
    pub fn cell(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row)?.cell(col)
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a row by index.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tbl>");

        // Write table properties
        xml.push_str("<w:tblPr>");

        let width = self.properties.width_pct.unwrap_or(5000);
        write!(xml, "<w:tblW w:w=\"{}\" w:type=\"pct\"/>", width)?;

        if let Some(alignment) = self.properties.alignment {
            write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_str())?;
        }

        xml.push_str("</w:tblPr>");

        // Write grid
        if let Some(first_row) = self.rows.first() {
            xml.push_str("<w:tblGrid>");
            for _ in 0..first_row.cell_count() {
                xml.push_str("<w:gridCol/>");
            }
            xml.push_str("</w:tblGrid>");
        }

        // Write rows
        for row in &self.rows {
            row.to_xml(xml)?;
        }

        xml.push_str("</w:tbl>");

        Ok(())
    }
}

/// A table row.
#[derive(Debug)]
pub struct Row {
    /// Table cells in this row
    pub(crate) cells: Vec<Cell>,
}

impl Row {
    pub(crate) fn new(cols: usize) -> Self {
        let mut row = Self {
            cells: Vec::with_capacity(cols),
        };
        for _ in 0..cols {
            row.cells.push(Cell::new());
        }
        row
    }

    /// Get a cell by index.
    pub fn cell(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Get the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tr>");

        for cell in &self.cells {
            cell.to_xml(xml)?;
        }

        xml.push_str("</w:tr>");

        Ok(())
    }
}

/// Cell properties.
#[derive(Debug, Default)]
pub(crate) struct CellProperties {
    /// Uniform border applied to all four sides
    pub(crate) border: Option<CellBorder>,
    /// Cell background fill in hex RGB format
    pub(crate) shading: Option<String>,
}

/// A table cell.
///
/// Cells always contain at least one paragraph.
#[derive(Debug)]
pub struct Cell {
    /// Paragraphs in this cell
    pub(crate) paragraphs: Vec<Paragraph>,
    /// Cell properties
    pub(crate) properties: CellProperties,
}

impl Cell {
    pub(crate) fn new() -> Self {
        Self {
            paragraphs: vec![Paragraph::new()],
            properties: CellProperties::default(),
        }
    }

    /// Add a new paragraph to the cell.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.paragraphs.push(Paragraph::new());
        match self.paragraphs.last_mut() {
            Some(para) => para,
            None => unreachable!(),
        }
    }

    /// Get the first paragraph of the cell.
    pub fn first_paragraph_mut(&mut self) -> &mut Paragraph {
        match self.paragraphs.first_mut() {
            Some(para) => para,
            None => unreachable!(),
        }
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Set text in the first paragraph, replacing any existing content.
    pub fn set_text(&mut self, text: &str) {
        self.paragraphs.clear();
        let para = self.add_paragraph();
        para.add_run_with_text(text);
    }

    /// Apply a uniform border to all four sides of the cell.
    pub fn set_border(&mut self, border: CellBorder) {
        self.properties.border = Some(border);
    }

    /// Set cell background fill in hex RGB format (e.g., "F8FAFB").
    pub fn set_shading(&mut self, fill: &str) {
        self.properties.shading = Some(fill.to_string());
    }

    fn write_border(xml: &mut String, side: &str, border: &CellBorder) -> Result<()> {
        write!(
            xml,
            "<w:{} w:val=\"{}\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>",
            side,
            border.style.as_str(),
            border.size,
            border.color
        )?;
        Ok(())
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tc>");

        // Write cell properties if any
        if self.properties.border.is_some() || self.properties.shading.is_some() {
            xml.push_str("<w:tcPr>");

            if let Some(ref border) = self.properties.border {
                xml.push_str("<w:tcBorders>");
                for side in ["top", "left", "bottom", "right"] {
                    Self::write_border(xml, side, border)?;
                }
                xml.push_str("</w:tcBorders>");
            }

            if let Some(ref fill) = self.properties.shading {
                write!(xml, "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>", fill)?;
            }

            xml.push_str("</w:tcPr>");
        }

        let mut image_counter = 0;
        for para in &self.paragraphs {
            para.to_xml(xml, &[], &mut image_counter)?;
        }

        xml.push_str("</w:tc>");

        Ok(())
    }
}
