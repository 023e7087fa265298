//! Export freight records to `;`-delimited CSV

use std::io::Write;
use std::path::Path;

use frete_types::{Result, StoredFreight};

/// Column titles shared with the Excel export
pub const HEADER: [&str; 10] = [
    "Data",
    "CDD",
    "Motorista",
    "Placa",
    "Veiculo",
    "Mapa",
    "Cidade",
    "Regiao",
    "Entregas",
    "Valor",
];

pub fn write_csv<W: Write>(records: &[StoredFreight], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);
    wtr.write_record(HEADER)?;

    for stored in records {
        let r = &stored.record;
        let count = r.delivery_count.to_string();
        let price = format!("{:.2}", r.price);
        wtr.write_record([
            r.date.as_str(),
            r.facility.as_str(),
            r.driver_name.as_str(),
            r.license_plate.as_str(),
            r.vehicle_class.label(),
            r.map.as_str(),
            r.city.as_str(),
            r.region.as_str(),
            count.as_str(),
            price.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn export_to_csv(records: &[StoredFreight], output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_csv(records, file)
}
