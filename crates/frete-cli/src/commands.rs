//! Command handlers

use std::path::{Path, PathBuf};

use chrono::Local;
use frete_app::app::{DateRange, ManualEntry, RecordQuery, RecordService};
use frete_app::config::Config;
use frete_app::export::{export_to_csv, export_to_excel};
use frete_app::repository::{open_driver_directory, open_freight_repo};
use frete_domain::quote;
use frete_infra::persistence::FileFreightRepository;
use frete_types::{Facility, OutputFormat, Result};
use tracing::info;

use crate::cli::{Cli, Commands, Period};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Quote {
            vehicle,
            count,
            cdd,
            city,
            region,
        } => {
            let facility = facility_or_default(cdd.as_deref(), &config);
            let rate = quote(&facility, vehicle, *count, city, region);
            output::print_quote(format, &facility, *count, &rate)
        }

        Commands::Add {
            plate,
            vehicle,
            count,
            date,
            driver,
            map,
            city,
            region,
            cdd,
        } => {
            let service = open_service(&config)?;
            let entry = ManualEntry {
                driver_name: driver.clone(),
                license_plate: plate.clone(),
                vehicle_text: vehicle.clone(),
                map: map.clone(),
                city: city.clone(),
                region: region.clone(),
                date: date.clone(),
                facility: facility_or_default(cdd.as_deref(), &config),
                delivery_count: *count,
            };
            let stored = service.add_manual(entry)?;
            output::print_added(format, &stored)
        }

        Commands::Import { file, cdd } => cmd_import(&config, format, file, cdd.as_deref()),

        Commands::List {
            search,
            cdd,
            period,
            from,
            to,
        } => {
            let date_range = if from.is_some() || to.is_some() {
                DateRange::Custom {
                    start: *from,
                    end: *to,
                }
            } else {
                match period {
                    Period::All => DateRange::All,
                    Period::Week => DateRange::Week,
                    Period::LastMonth => DateRange::LastMonth,
                }
            };
            let query = RecordQuery {
                search: search.clone(),
                facility: cdd.as_deref().map(Facility::parse),
                date_range,
            };

            let service = open_service(&config)?;
            let records = service.list(&query, Local::now().date_naive())?;
            output::print_records(format, &records)
        }

        Commands::Stats => {
            let service = open_service(&config)?;
            output::print_stats(format, &service.stats()?)
        }

        Commands::Delete { id } => {
            let service = open_service(&config)?;
            service.delete(*id)?;
            println!("Deleted {}", id);
            Ok(())
        }

        Commands::Export { output } => cmd_export(&config, output),

        Commands::Drivers => {
            let directory = open_driver_directory(&config)?;
            output::print_drivers(format, &directory.entries())
        }

        Commands::Config {
            show,
            set_default_cdd,
            set_store_dir,
            set_roster,
            set_output,
            reset,
        } => cmd_config(
            *show,
            set_default_cdd.clone(),
            set_store_dir.clone(),
            set_roster.clone(),
            *set_output,
            *reset,
        ),
    }
}

fn facility_or_default(cdd: Option<&str>, config: &Config) -> Facility {
    cdd.map(Facility::parse)
        .unwrap_or_else(|| config.default_facility.clone())
}

fn open_service(config: &Config) -> Result<RecordService<FileFreightRepository>> {
    let repo = open_freight_repo(config)?;
    let directory = open_driver_directory(config)?;
    Ok(RecordService::new(repo, directory))
}

fn cmd_import(
    config: &Config,
    format: OutputFormat,
    file: &Path,
    cdd: Option<&str>,
) -> Result<()> {
    let facility = facility_or_default(cdd, config);
    let service = open_service(config)?;
    let result = service.import_file(file, &facility)?;
    output::print_import_result(format, &facility, &result)
}

fn cmd_export(config: &Config, output_path: &Path) -> Result<()> {
    let service = open_service(config)?;
    let records = service.all()?;

    let is_excel = output_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"));

    if is_excel {
        let stats = service.stats()?;
        export_to_excel(&records, &stats, output_path)?;
    } else {
        export_to_csv(&records, output_path)?;
    }

    info!(path = %output_path.display(), count = records.len(), "export written");
    println!("Exported {} freights to {}", records.len(), output_path.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_default_cdd: Option<String>,
    set_store_dir: Option<PathBuf>,
    set_roster: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(cdd) = set_default_cdd {
        config.default_facility = Facility::parse(&cdd);
        modified = true;
    }

    if let Some(dir) = set_store_dir {
        config.store_dir = Some(dir);
        modified = true;
    }

    if let Some(path) = set_roster {
        // Fail now rather than on the next import
        frete_infra::roster_loader::load_roster_file(&path)?;
        config.roster_path = Some(path);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(())
}
