//! Command handlers

use std::io::{self, BufRead, Write};

use carseek_app::config::Config;
use carseek_app::routes;
use carseek_infra::persistence::FilePasswordRepository;
use carseek_store::{AuthStore, CarStore};
use carseek_types::{OutputFormat, Result};

use crate::cli::{AuthAction, Cli, Commands};
use crate::output;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(format) = cli.format {
        config.output_format = format;
    }
    let format = config.output_format;

    match cli.command {
        Commands::Vin { vin } => {
            let mut store = open_store(&config, cli.km)?;
            store.search_by_vin(&vin);
            output::output_lookup(format, &store)?;
        }

        Commands::Plate { plate } => {
            let mut store = open_store(&config, cli.km)?;
            store.search_by_plate(&plate);
            output::output_lookup(format, &store)?;
        }

        Commands::Model { brand, model, year } => {
            let mut store = open_store(&config, cli.km)?;
            store.search_by_model(&brand, &model, year);
            output::output_lookup(format, &store)?;
        }

        Commands::Catalog { maintenance } => {
            let store = open_store(&config, cli.km)?;
            if maintenance {
                output::output_maintenance_catalog(format, &store)?;
            } else {
                output::output_vehicle_catalog(format, &store)?;
            }
        }

        Commands::Shell => {
            let store = open_store(&config, cli.km)?;
            run_shell(store, format)?;
        }

        Commands::Auth { action } => {
            let repo = FilePasswordRepository::open(Config::config_dir()?)?;
            let mut auth = AuthStore::open(repo)?;
            match action {
                AuthAction::Set { password } => {
                    auth.set_password(&password)?;
                    println!("Password updated.");
                }
                AuthAction::Check { password } => {
                    if auth.check_password(&password) {
                        println!("Password matches.");
                    } else {
                        println!("Password does not match.");
                        std::process::exit(1);
                    }
                }
            }
        }

        Commands::Config {
            show,
            set_limit,
            set_output,
            set_vehicles,
            set_specs,
            reset,
        } => {
            if reset {
                config = Config::default();
                config.save()?;
                println!("Configuration reset to defaults.");
                return Ok(());
            }

            let mut changed = false;
            if let Some(limit) = set_limit {
                config.maintenance_limit_km = limit;
                changed = true;
            }
            if let Some(fmt) = set_output {
                config.output_format = fmt;
                changed = true;
            }
            if let Some(path) = set_vehicles {
                config.vehicle_catalog = Some(path);
                changed = true;
            }
            if let Some(path) = set_specs {
                config.maintenance_catalog = Some(path);
                changed = true;
            }

            if changed {
                config.save()?;
                println!("Configuration saved.");
            }
            if show || !changed {
                print!("{}", config);
            }
        }

        Commands::Routes { path } => match path {
            Some(path) => match routes::resolve(&path) {
                Some(route) => output::output_routes(format, Some(route))?,
                None => {
                    println!("No route for {}", path);
                    std::process::exit(1);
                }
            },
            None => output::output_routes(format, None)?,
        },
    }

    Ok(())
}

/// Build a session store from the configured catalogs
fn open_store(config: &Config, km: Option<u32>) -> Result<CarStore> {
    let (vehicles, specs) = config.load_catalogs()?;
    let mut store = CarStore::new(vehicles, specs);
    store.set_maintenance_limit(config.maintenance_limit_km);
    if let Some(km) = km {
        store.set_user_km(km);
    }
    Ok(store)
}

const SHELL_HELP: &str = "\
Commands:
  vin <VIN>                    search by VIN
  plate <PLATE>                search by license plate
  model <BRAND> <MODEL> <YEAR> search by brand/model/year
  current                      show the current result
  recent                       show the 5 most recent searches
  history                      show the search history (up to 50)
  restore <N>                  make history entry N the current result
  km <KM>                      set the odometer reading
  clear-recent                 empty the recent list
  clear-history                empty the full history
  help                         show this help
  quit                         leave the shell";

/// Interactive session loop
///
/// The store lives for the life of the process, so history accumulates
/// across commands like it does across pages in the original app.
fn run_shell(mut store: CarStore, format: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("carseek shell - type 'help' for commands");
    loop {
        print!("carseek> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}

            ["quit"] | ["exit"] => break,

            ["help"] => println!("{}", SHELL_HELP),

            ["vin", vin] => {
                store.search_by_vin(vin);
                output::output_lookup(format, &store)?;
            }

            ["plate", plate] => {
                store.search_by_plate(plate);
                output::output_lookup(format, &store)?;
            }

            ["model", brand, model, year] => match year.parse::<i32>() {
                Ok(year) => {
                    store.search_by_model(brand, model, year);
                    output::output_lookup(format, &store)?;
                }
                Err(_) => eprintln!("Invalid year: {}", year),
            },

            ["current"] => output::output_lookup(format, &store)?,

            ["recent"] => output::output_history("Recent searches", store.recent().iter()),

            ["history"] => output::output_history("Search history", store.history().iter()),

            ["restore", index] => match index.parse::<usize>() {
                Ok(index) => match store.history().get(index).cloned() {
                    Some(Some(entry)) => {
                        store.restore_from_history(entry);
                        output::output_lookup(format, &store)?;
                    }
                    Some(None) => eprintln!("Entry {} was a failed search", index),
                    None => eprintln!("No history entry {}", index),
                },
                Err(_) => eprintln!("Invalid index: {}", index),
            },

            ["km", km] => match km.parse::<u32>() {
                Ok(km) => {
                    store.set_user_km(km);
                    println!(
                        "Odometer set to {} km ({})",
                        km,
                        if store.maintenance_due() {
                            "maintenance due"
                        } else {
                            "ok"
                        }
                    );
                }
                Err(_) => eprintln!("Invalid km value: {}", km),
            },

            ["clear-recent"] => {
                store.clear_recent();
                println!("Recent list cleared.");
            }

            ["clear-history"] => {
                store.clear_history();
                println!("History cleared.");
            }

            _ => eprintln!("Unknown command, type 'help' for commands"),
        }
    }

    Ok(())
}
