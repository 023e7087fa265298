//! Output formatting module

use frete_app::app::DashboardStats;
use frete_domain::{DriverEntry, RateQuote};
use frete_types::{Facility, ImportBatchResult, OutputFormat, Result, StoredFreight};
use serde_json::json;

fn money(value: f64) -> String {
    format!("R$ {:.2}", value)
}

/// Cut to `max` chars, marking the cut with "..."
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

pub fn print_quote(
    format: OutputFormat,
    facility: &Facility,
    count: i64,
    quote: &RateQuote,
) -> Result<()> {
    if format == OutputFormat::Json {
        let value = json!({
            "facility": facility,
            "vehicle_class": quote.vehicle_class,
            "delivery_count": count,
            "special_zone": quote.zone,
            "price": quote.price,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("\nRate Quote");
    println!("==========");
    println!("CDD:             {}", facility);
    println!("Vehicle class:   {}", quote.vehicle_class);
    println!("Deliveries:      {}", count);
    println!("Zone:            {}", quote.zone.unwrap_or("standard"));
    println!("Price:           {}", money(quote.price));
    if quote.price == 0.0 {
        println!("\n(no tariff for this CDD / vehicle combination)");
    }
    Ok(())
}

pub fn print_added(format: OutputFormat, stored: &StoredFreight) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(stored)?);
        return Ok(());
    }

    let r = &stored.record;
    println!("Freight added: {}", stored.id);
    println!(
        "  {} {} ({}) {} deliveries -> {}",
        r.date,
        r.driver_name,
        r.vehicle_class,
        r.delivery_count,
        money(r.price)
    );
    Ok(())
}

pub fn print_import_result(
    format: OutputFormat,
    facility: &Facility,
    result: &ImportBatchResult,
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    let total: f64 = result.records.iter().map(|r| r.price).sum();

    println!("\nImport Summary ({})", facility);
    println!("==============");
    println!("Imported:        {}", result.success_count);
    println!("Skipped:         {}", result.failure_count);
    println!("Total value:     {}", money(total));

    if !result.failures.is_empty() {
        println!("\nSkipped rows:");
        for failure in &result.failures {
            println!("  line {:>5}: {}", failure.line, failure.reason);
        }
    }
    Ok(())
}

pub fn print_records(format: OutputFormat, records: &[StoredFreight]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    println!("Freights: {}", records.len());
    println!();

    if records.is_empty() {
        println!("No freights found.");
        return Ok(());
    }

    println!(
        "{:<10} {:<12} {:<28} {:<8} {:<6} {:<18} {:>5} {:>12}  {}",
        "Date", "CDD", "Driver", "Plate", "Class", "City", "Del.", "Value", "Id"
    );
    println!("{}", "-".repeat(140));

    for stored in records {
        let r = &stored.record;
        println!(
            "{:<10} {:<12} {:<28} {:<8} {:<6} {:<18} {:>5} {:>12}  {}",
            r.date,
            truncate(r.facility.as_str(), 12),
            truncate(&r.driver_name, 28),
            r.license_plate,
            r.vehicle_class.label(),
            truncate(&r.city, 18),
            r.delivery_count,
            money(r.price),
            stored.id
        );
    }
    Ok(())
}

pub fn print_stats(format: OutputFormat, stats: &DashboardStats) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("\nDashboard");
    println!("=========");
    println!("Freights:        {}", stats.total_freights);
    println!("Deliveries:      {}", stats.total_deliveries);
    println!("Total value:     {}", money(stats.total_value));
    println!();
    println!("Santa Luzia:     {}", money(stats.value_santa_luzia));
    println!("Contagem:        {}", money(stats.value_contagem));
    if stats.value_other != 0.0 {
        println!("Other:           {}", money(stats.value_other));
    }
    Ok(())
}

pub fn print_drivers(format: OutputFormat, drivers: &[&DriverEntry]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(drivers)?);
        return Ok(());
    }

    println!("{:<12} {:<9} {:<6} {}", "CDD", "Plate", "Class", "Driver");
    println!("{}", "-".repeat(64));
    for d in drivers {
        println!(
            "{:<12} {:<9} {:<6} {}",
            d.facility,
            d.plate,
            d.vehicle_class.label(),
            d.name
        );
    }
    Ok(())
}
