//! Output formatting module

use serde_json::json;

use carseek_app::routes::{Route, ROOT_REDIRECT, ROUTES};
use carseek_store::CarStore;
use carseek_types::{OutputFormat, Result, SearchedVehicle};

/// Print the current result and its resolved maintenance spec
pub fn output_lookup(output_format: OutputFormat, store: &CarStore) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&json!({
            "search_type": store.last_search_type(),
            "vehicle": store.current(),
            "maintenance": store.maintenance_info(),
            "maintenance_due": store.maintenance_due(),
        }))?;
        println!("{}", content);
        return Ok(());
    }

    match store.current() {
        None => {
            println!("No matching vehicle found.");
        }
        Some(vehicle) => {
            println!("\nVehicle");
            println!("=======");
            println!("Name:           {}", vehicle.name());
            println!("Year:           {}", vehicle.year);
            println!("Age:            {} years", store.age_years());
            if let Some(ref vin) = vehicle.vin {
                println!("VIN:            {}", vin);
            }
            if let Some(ref plate) = vehicle.license_plate {
                println!("License plate:  {}", plate);
            }
            println!(
                "Searched at:    {}",
                vehicle.searched_at.format("%Y-%m-%d %H:%M:%S UTC")
            );

            match store.maintenance_info() {
                None => println!("\nNo maintenance spec covers this vehicle."),
                Some(spec) => {
                    println!("\nMaintenance ({}-{})", spec.from_year, spec.to_year);
                    println!("====================");
                    println!("Oil type:         {}", spec.oil_type);
                    println!("Oil capacity:     {}", spec.oil_capacity);
                    println!("Gearbox:          {}", spec.gearbox_type);
                    println!("Differential oil: {}", spec.differential_oil);
                    println!("Service interval: {} km", spec.service_interval_km);
                }
            }

            if store.user_km() > 0 {
                println!(
                    "\nOdometer:       {} km ({})",
                    store.user_km(),
                    if store.maintenance_due() {
                        "maintenance due"
                    } else {
                        "ok"
                    }
                );
            }
        }
    }

    Ok(())
}

/// Print the vehicle catalog
pub fn output_vehicle_catalog(output_format: OutputFormat, store: &CarStore) -> Result<()> {
    let catalog = store.vehicle_catalog();
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(catalog.records())?);
        return Ok(());
    }

    println!(
        "{:<19} {:<9} {:<10} {:<9} {:>5}",
        "VIN", "Plate", "Brand", "Model", "Year"
    );
    println!("{}", "-".repeat(57));
    for r in catalog.records() {
        println!(
            "{:<19} {:<9} {:<10} {:<9} {:>5}",
            r.vin, r.license_plate, r.brand, r.model, r.year
        );
    }
    println!("\n{} vehicles", catalog.len());
    Ok(())
}

/// Print the maintenance catalog
pub fn output_maintenance_catalog(output_format: OutputFormat, store: &CarStore) -> Result<()> {
    let catalog = store.maintenance_catalog();
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(catalog.specs())?);
        return Ok(());
    }

    println!(
        "{:<10} {:<9} {:<11} {:<7} {:<9} {:>9}",
        "Brand", "Model", "Years", "Oil", "Capacity", "Interval"
    );
    println!("{}", "-".repeat(61));
    for s in catalog.specs() {
        println!(
            "{:<10} {:<9} {:<11} {:<7} {:<9} {:>6} km",
            s.brand,
            s.model,
            format!("{}-{}", s.from_year, s.to_year),
            s.oil_type,
            s.oil_capacity,
            s.service_interval_km
        );
    }
    println!("\n{} specs", catalog.len());
    Ok(())
}

/// Print one ring of history entries, newest first
pub fn output_history<'a>(
    label: &str,
    entries: impl Iterator<Item = &'a Option<SearchedVehicle>>,
) {
    println!("{}", label);
    println!("{}", "=".repeat(label.len()));
    let mut any = false;
    for (i, entry) in entries.enumerate() {
        any = true;
        match entry {
            Some(v) => println!(
                "{:>3}  {:<22} {:>5}  {}",
                i,
                v.name(),
                v.year,
                v.searched_at.format("%H:%M:%S")
            ),
            None => println!("{:>3}  (no match)", i),
        }
    }
    if !any {
        println!("  (empty)");
    }
}

/// Print the route table or a single resolved route
pub fn output_routes(output_format: OutputFormat, resolved: Option<&Route>) -> Result<()> {
    match resolved {
        Some(route) => {
            if output_format == OutputFormat::Json {
                let content = serde_json::to_string_pretty(&json!({
                    "path": route.path,
                    "view": route.view,
                    "alias": route.alias,
                }))?;
                println!("{}", content);
            } else {
                println!("{} -> {}", route.path, route.view);
                if let Some(alias) = route.alias {
                    println!("alias: {}", alias);
                }
            }
        }
        None => {
            if output_format == OutputFormat::Json {
                let routes: Vec<_> = ROUTES
                    .iter()
                    .map(|r| json!({"path": r.path, "view": r.view, "alias": r.alias}))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&routes)?);
            } else {
                println!("/ -> redirect {}", ROOT_REDIRECT);
                for r in ROUTES {
                    match r.alias {
                        Some(alias) => println!("{:<22} -> {} (alias {})", r.path, r.view, alias),
                        None => println!("{:<22} -> {}", r.path, r.view),
                    }
                }
            }
        }
    }
    Ok(())
}
