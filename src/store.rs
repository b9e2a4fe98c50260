// src/store.rs
//
// Persisted dataset: a spreadsheet (primary) and a CSV (secondary) with the
// same schema. Both carry a leading 0-based row index with a blank header.
// Charts always reload from the CSV.
//
// Writes go straight to the final paths; an interrupted save leaves whatever
// was written so far.

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::{
    config::{consts::COLUMNS, options::StoreOptions},
    data::{Dataset, Movie},
    error::Result,
    file::ensure_parent,
};

/// Both files present → the dataset is reused and no scrape happens.
pub fn exists(opts: &StoreOptions) -> bool {
    opts.xlsx_path().is_file() && opts.csv_path().is_file()
}

/// Write both formats, overwriting whatever is there.
pub fn save(opts: &StoreOptions, ds: &Dataset) -> Result<()> {
    let xlsx = opts.xlsx_path();
    let csv = opts.csv_path();

    write_xlsx(&xlsx, &opts.sheet_name, ds)?;
    write_csv(&csv, ds)?;

    info!(rows = ds.len(), "Store: wrote {} and {}", xlsx.display(), csv.display());
    Ok(())
}

/// Reload the dataset from the CSV. The index column is ignored.
pub fn load(opts: &StoreOptions) -> Result<Dataset> {
    read_csv(&opts.csv_path())
}

pub fn write_csv(path: &Path, ds: &Dataset) -> Result<()> {
    ensure_parent(path)?;
    let mut w = csv::Writer::from_path(path)?;

    w.write_record(std::iter::once("").chain(COLUMNS))?;
    for (ix, m) in ds.iter().enumerate() {
        let idx = ix.to_string();
        let row = m.to_row();
        w.write_record(std::iter::once(idx.as_str()).chain(row.iter().map(String::as_str)))?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_csv(path: &Path) -> Result<Dataset> {
    let mut r = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut movies = Vec::new();
    for rec in r.deserialize::<Movie>() {
        movies.push(rec?);
    }
    Ok(Dataset::from_movies(movies))
}

pub fn write_xlsx(path: &Path, sheet_name: &str, ds: &Dataset) -> Result<()> {
    ensure_parent(path)?;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    // Header: blank cell over the index column, then the schema labels.
    for (c, label) in COLUMNS.iter().enumerate() {
        sheet.write_string(0, col(c + 1), *label)?;
    }

    for (ix, m) in ds.iter().enumerate() {
        let row = (ix + 1) as u32;
        sheet.write_number(row, 0, ix as f64)?;
        sheet.write_number(row, 1, f64::from(m.rank))?;

        // Text columns after rank; empty values stay blank cells.
        for (c, cell) in m.to_row().iter().enumerate().skip(1) {
            if !cell.is_empty() {
                sheet.write_string(row, col(c + 1), cell.as_str())?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[inline]
fn col(c: usize) -> u16 { c as u16 }
