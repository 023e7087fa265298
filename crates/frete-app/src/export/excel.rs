//! Excel export functionality

use std::path::Path;

use frete_infra::csv_export::HEADER;
use frete_types::{Error, Result, StoredFreight};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::app::DashboardStats;

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export records to an Excel file with a summary and a detail sheet
pub fn export_to_excel(
    records: &[StoredFreight],
    stats: &DashboardStats,
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, stats)?;

    let details_sheet = workbook.add_worksheet();
    write_freights_sheet(details_sheet, records)?;

    workbook.save(output_path).map_err(excel_err)?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, stats: &DashboardStats) -> Result<()> {
    sheet.set_name("Summary").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format("\"R$\" #,##0.00");

    sheet
        .write_string_with_format(0, 0, "CDD Freight Report", &header_format)
        .map_err(excel_err)?;

    let counts = [
        ("Total Freights:", stats.total_freights as f64),
        ("Total Deliveries:", stats.total_deliveries as f64),
    ];
    for (i, (label, value)) in counts.iter().enumerate() {
        let row = 2 + i as u32;
        sheet.write_string(row, 0, *label).map_err(excel_err)?;
        sheet.write_number(row, 1, *value).map_err(excel_err)?;
    }

    let values = [
        ("Total Value:", stats.total_value),
        ("Santa Luzia:", stats.value_santa_luzia),
        ("Contagem:", stats.value_contagem),
        ("Other:", stats.value_other),
    ];
    for (i, (label, value)) in values.iter().enumerate() {
        let row = 5 + i as u32;
        sheet.write_string(row, 0, *label).map_err(excel_err)?;
        sheet
            .write_number_with_format(row, 1, *value, &money_format)
            .map_err(excel_err)?;
    }

    Ok(())
}

fn write_freights_sheet(sheet: &mut Worksheet, records: &[StoredFreight]) -> Result<()> {
    sheet.set_name("Freights").map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format("\"R$\" #,##0.00");

    for (col, header) in HEADER.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (row_idx, stored) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let r = &stored.record;

        let texts = [
            r.date.as_str(),
            r.facility.as_str(),
            r.driver_name.as_str(),
            r.license_plate.as_str(),
            r.vehicle_class.label(),
            r.map.as_str(),
            r.city.as_str(),
            r.region.as_str(),
        ];
        for (col, text) in texts.iter().enumerate() {
            sheet
                .write_string(row, col as u16, *text)
                .map_err(excel_err)?;
        }

        sheet
            .write_number(row, 8, r.delivery_count as f64)
            .map_err(excel_err)?;
        sheet
            .write_number_with_format(row, 9, r.price, &money_format)
            .map_err(excel_err)?;
    }

    sheet.autofit();

    Ok(())
}
