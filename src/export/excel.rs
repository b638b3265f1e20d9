//! Excel rendering for screening results

use super::ExportRow;
use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};

const SHEET_NAME: &str = "Hasil Analisis";

// Fixed column set: header label and width, in output order
const COLUMNS: [(&str, f64); 7] = [
    ("Nama Kandidat", 30.0),
    ("Skor", 10.0),
    ("Ringkasan Positif", 50.0),
    ("Poin Kunci Cocok", 50.0),
    ("Poin Perhatian", 50.0),
    ("Bahasa CV", 15.0),
    ("Nama File Asli", 30.0),
];

/// Render screening rows into an in-memory xlsx workbook
pub fn build_report(rows: &[ExportRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_report_sheet(sheet, rows)?;

    workbook
        .save_to_buffer()
        .context("Failed to serialize xlsx workbook")
}

fn write_report_sheet(sheet: &mut Worksheet, rows: &[ExportRow]) -> Result<()> {
    sheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    let wrap_format = Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::Top)
        .set_align(FormatAlign::Left);

    for (col, (header, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet.write_string_with_format(0, col, *header, &header_format)?;
        sheet.set_column_width(col, *width)?;
    }

    for (row_idx, entry) in rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        sheet.write_string_with_format(row, 0, &entry.nama_kandidat, &wrap_format)?;
        sheet.write_number_with_format(row, 1, entry.skor_kecocokan, &wrap_format)?;
        sheet.write_string_with_format(row, 2, &entry.ringkasan_positif, &wrap_format)?;
        sheet.write_string_with_format(row, 3, entry.poin_kunci_cocok.bullet_text(), &wrap_format)?;
        sheet.write_string_with_format(row, 4, entry.poin_perhatian.bullet_text(), &wrap_format)?;
        sheet.write_string_with_format(row, 5, &entry.bahasa_terdeteksi, &wrap_format)?;
        sheet.write_string_with_format(row, 6, &entry.original_filename, &wrap_format)?;
    }

    Ok(())
}
