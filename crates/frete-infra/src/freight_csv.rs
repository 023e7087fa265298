//! Row-level parser and batch import for spreadsheet exports
//!
//! Columns are read by fixed position (spreadsheet letters in brackets),
//! whatever the header row says:
//! date=4 (E), map=6 (G), vehicle=11 (L), plate=12 (M), deliveries=21 (V),
//! city=36 (AK), region=37 (AL).
//!
//! The first line is always a header. Bad rows are counted and skipped,
//! never fatal.

use frete_domain::{
    classify_vehicle, normalize_date, normalize_plate, placeholder_driver_name,
    resolve_rate_for_class, DriverDirectory,
};
use frete_types::{Facility, FreightRecord, ImportBatchResult, RowFailure, RowFailureReason};
use tracing::{debug, info, warn};

const IDX_DATE: usize = 4;
const IDX_MAP: usize = 6;
const IDX_VEHICLE: usize = 11;
const IDX_PLATE: usize = 12;
const IDX_COUNT: usize = 21;
const IDX_CITY: usize = 36;
const IDX_REGION: usize = 37;

/// Import with the built-in driver roster
pub fn import_batch(text: &str, default_facility: &Facility) -> ImportBatchResult {
    import_batch_with(text, default_facility, DriverDirectory::builtin())
}

/// Import every non-header, non-blank line of `text`
///
/// The facility is not read from the file: every record gets
/// `default_facility`. Records keep input line order.
pub fn import_batch_with(
    text: &str,
    default_facility: &Facility,
    directory: &DriverDirectory,
) -> ImportBatchResult {
    let mut result = ImportBatchResult::default();

    for (idx, line) in text.split('\n').enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let line_number = idx + 1;
        match parse_row(line, default_facility, directory) {
            Ok(record) => {
                debug!(
                    line = line_number,
                    plate = %record.license_plate,
                    class = %record.vehicle_class,
                    price = record.price,
                    "row imported"
                );
                result.records.push(record);
                result.success_count += 1;
            }
            Err(reason) => {
                warn!(line = line_number, reason = %reason, "row skipped");
                result.failures.push(RowFailure {
                    line: line_number,
                    reason,
                });
                result.failure_count += 1;
            }
        }
    }

    info!(
        facility = %default_facility,
        success = result.success_count,
        failed = result.failure_count,
        "CSV import finished"
    );
    result
}

/// Parse one trimmed, non-blank data line into a priced record
pub fn parse_row(
    line: &str,
    facility: &Facility,
    directory: &DriverDirectory,
) -> Result<FreightRecord, RowFailureReason> {
    let cols = split_fields(line);
    if cols.len() <= IDX_COUNT {
        return Err(RowFailureReason::TooFewFields {
            found: cols.len(),
            required: IDX_COUNT,
        });
    }

    let field = |idx: usize| cols.get(idx).copied().unwrap_or_default();
    let plate_raw = field(IDX_PLATE);
    let count_raw = field(IDX_COUNT);

    if plate_raw.is_empty() {
        return Err(RowFailureReason::MissingPlate);
    }
    if count_raw.is_empty() {
        return Err(RowFailureReason::MissingCount);
    }
    let delivery_count = parse_leading_int(count_raw)
        .ok_or_else(|| RowFailureReason::InvalidCount(count_raw.to_string()))?;

    let map = field(IDX_MAP);
    let city = field(IDX_CITY);
    let region = field(IDX_REGION);

    // A roster hit overrides both the name and the file's vehicle text
    let (driver_name, vehicle_class) = match directory.lookup(plate_raw) {
        Some(entry) => (entry.name.clone(), entry.vehicle_class),
        None => (
            placeholder_driver_name(map),
            classify_vehicle(field(IDX_VEHICLE)),
        ),
    };

    let price = resolve_rate_for_class(facility, vehicle_class, delivery_count, city, region);

    Ok(FreightRecord {
        driver_name,
        license_plate: normalize_plate(plate_raw),
        vehicle_class,
        map: map.to_string(),
        city: city.to_string(),
        region: region.to_string(),
        date: normalize_date(field(IDX_DATE)),
        facility: facility.clone(),
        delivery_count,
        price,
    })
}

/// Split on whichever of `;` or `,` yields more fields (`,` on ties),
/// trimming each field and one layer of surrounding double quotes
fn split_fields(line: &str) -> Vec<&str> {
    let semicolons = line.split(';').count();
    let commas = line.split(',').count();
    let separator = if semicolons > commas { ';' } else { ',' };

    line.split(separator).map(|col| strip_quotes(col.trim())).collect()
}

fn strip_quotes(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}

/// Lenient integer read: optional sign, then the leading digit run
///
/// `"12 entregas"` is 12; `"abc"` is `None`.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(&b'-') => (true, &s[1..]),
        Some(&b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use frete_types::VehicleClass;

    /// Build a 38-column row with the given values at the fixed positions
    #[allow(clippy::too_many_arguments)]
    fn row(
        sep: char,
        date: &str,
        map: &str,
        vehicle: &str,
        plate: &str,
        count: &str,
        city: &str,
        region: &str,
    ) -> String {
        let mut cols = vec![String::new(); 38];
        cols[IDX_DATE] = date.to_string();
        cols[IDX_MAP] = map.to_string();
        cols[IDX_VEHICLE] = vehicle.to_string();
        cols[IDX_PLATE] = plate.to_string();
        cols[IDX_COUNT] = count.to_string();
        cols[IDX_CITY] = city.to_string();
        cols[IDX_REGION] = region.to_string();
        cols.join(&sep.to_string())
    }

    fn header() -> String {
        (0..38).map(|i| format!("COL{}", i)).collect::<Vec<_>>().join(";")
    }

    #[test]
    fn test_one_good_row_one_bad_count() {
        let text = [
            header(),
            row(';', "05/03/2024", "4412", "VUC", "XYZ-9999", "18", "Esmeraldas", ""),
            row(';', "05/03/2024", "4413", "TOCO", "XYZ-8888", "muitas", "Betim", ""),
        ]
        .join("\n");

        let result = import_batch(&text, &Facility::Contagem);
        assert_eq!(result.success_count, 1);
        assert_eq!(result.failure_count, 1);
        assert_eq!(result.records.len(), 1);
        assert!(!result.is_total_failure());

        let record = &result.records[0];
        assert_eq!(record.map, "4412");
        assert_eq!(record.driver_name, "Motorista (Rota 4412)");
        assert_eq!(record.license_plate, "XYZ9999");
        assert_eq!(record.vehicle_class, VehicleClass::Vuc);
        assert_eq!(record.date, "2024-03-05");
        assert_eq!(record.delivery_count, 18);
        assert_eq!(record.price, 810.0);

        assert_eq!(result.failures[0].line, 3);
        assert_eq!(
            result.failures[0].reason,
            RowFailureReason::InvalidCount("muitas".to_string())
        );
    }

    #[test]
    fn test_first_line_always_skipped() {
        // A data-looking first line is still treated as a header
        let data = row(',', "01/02/2024", "1", "VUC", "AAA1111", "5", "", "");
        let text = format!("{}\n{}", data, data);
        let result = import_batch(&text, &Facility::SantaLuzia);
        assert_eq!(result.success_count, 1);
        assert_eq!(result.failure_count, 0);
    }

    #[test]
    fn test_roster_overrides_vehicle_text() {
        // HJU2112 is a TRUCK in the roster; file says VUC
        let text = format!(
            "{}\n{}",
            header(),
            row(';', "2024-03-05", "9", "VUC", "hju-2112", "10", "Contagem", "")
        );
        let result = import_batch(&text, &Facility::Contagem);
        let record = &result.records[0];
        assert_eq!(record.driver_name, "Wemerson Alves De Oliveira");
        assert_eq!(record.vehicle_class, VehicleClass::Truck);
        assert_eq!(record.price, 1000.0);
        assert_eq!(record.date, "2024-03-05");
    }

    #[test]
    fn test_failure_reasons() {
        let directory = DriverDirectory::builtin();
        let f = Facility::SantaLuzia;
        assert_eq!(
            parse_row("a;b;c", &f, directory),
            Err(RowFailureReason::TooFewFields {
                found: 3,
                required: IDX_COUNT
            })
        );
        let no_plate = row(';', "", "", "VUC", "", "3", "", "");
        assert_eq!(
            parse_row(&no_plate, &f, directory),
            Err(RowFailureReason::MissingPlate)
        );
        let no_count = row(';', "", "", "VUC", "ABC1234", "", "", "");
        assert_eq!(
            parse_row(&no_count, &f, directory),
            Err(RowFailureReason::MissingCount)
        );
    }

    #[test]
    fn test_short_row_reaching_count_column_is_accepted() {
        // 22 fields: city/region columns absent
        let mut cols = vec![""; 22];
        cols[IDX_PLATE] = "ABC1234";
        cols[IDX_COUNT] = "4";
        cols[IDX_VEHICLE] = "toco";
        let line = cols.join(",");
        let record = parse_row(&line, &Facility::SantaLuzia, DriverDirectory::builtin()).unwrap();
        assert_eq!(record.city, "");
        assert_eq!(record.region, "");
        assert_eq!(record.price, 900.0);
        assert_eq!(record.driver_name, "Motorista Não Identificado");
    }

    #[test]
    fn test_quoted_fields_and_crlf() {
        let line = row(
            ',',
            "\"05/03/2024\"",
            "\"77\"",
            "\"3/4\"",
            "\"ABC1234\"",
            "\"21\"",
            "\"Lagoa Santa\"",
            "\"\"",
        );
        let text = format!("{}\r\n{}\r\n\r\n", header(), line);
        let result = import_batch(&text, &Facility::SantaLuzia);
        assert_eq!(result.success_count, 1);
        let record = &result.records[0];
        assert_eq!(record.city, "Lagoa Santa");
        assert_eq!(record.map, "77");
        assert_eq!(record.price, 800.0);
    }

    #[test]
    fn test_delimiter_detection() {
        assert_eq!(split_fields("a;b;c,d"), vec!["a", "b", "c,d"]);
        assert_eq!(split_fields("a,b;c,d"), vec!["a", "b;c", "d"]);
        // tie goes to comma
        assert_eq!(split_fields("a;b,c"), vec!["a;b", "c"]);
    }

    #[test]
    fn test_strip_one_quote_layer() {
        assert_eq!(strip_quotes("\"abc\""), "abc");
        assert_eq!(strip_quotes("\"\"abc\"\""), "\"abc\"");
        assert_eq!(strip_quotes("\""), "");
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int("12 entregas"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("1.5"), Some(1));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_unknown_facility_prices_zero_but_imports() {
        let text = format!(
            "{}\n{}",
            header(),
            row(';', "", "1", "VUC", "ABC1234", "5", "", "")
        );
        let result = import_batch(&text, &Facility::Other("Betim".to_string()));
        assert_eq!(result.success_count, 1);
        assert_eq!(result.records[0].price, 0.0);
    }

    #[test]
    fn test_empty_payload_is_total_failure() {
        let result = import_batch("", &Facility::Contagem);
        assert!(result.is_total_failure());
        assert_eq!(result.failure_count, 0);
    }
}
