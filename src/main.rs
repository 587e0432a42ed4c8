//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use featurelayer_service::args;
use featurelayer_service::summary::layer_summary;
use log::Record;
use std::env;
use std::io::Write;
use std::process;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        let ts = time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            ts,
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log = match (args.value_of("loglevel"), env::var("RUST_LOG")) {
        (None, Ok(rust_log_env)) => rust_log_env,
        (loglevel, _) => match loglevel.unwrap_or("info") {
            "debug" => "debug,hyper=info,reqwest=info,rustls=info".to_string(),
            loglevel => loglevel.to_string(),
        },
    };
    builder.parse_filters(&rust_log);

    builder.init();
}

fn fetch(args: &ArgMatches<'_>) {
    let service = args::service_from_args(args).unwrap_or_else(|err| {
        println!("Error reading configuration - {} ", err);
        process::exit(1)
    });
    let with_geometry = args
        .value_of("geometry")
        .map_or(false, |s| s.parse::<bool>().unwrap_or(false));
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|err| {
        println!("Error starting runtime - {} ", err);
        process::exit(1)
    });
    let layers = runtime
        .block_on(service.load(args.value_of("layer")))
        .unwrap_or_else(|err| {
            error!("{}", err);
            process::exit(1)
        });
    let summaries = layers
        .iter()
        .map(|layer| layer_summary(layer, with_geometry))
        .collect::<Result<Vec<_>, _>>()
        .and_then(|summaries| serde_json::to_string_pretty(&summaries));
    match summaries {
        Ok(json) => println!("{}", json),
        Err(err) => {
            error!("Error writing layer summary - {}", err);
            process::exit(1)
        }
    }
}

fn main() {
    dotenv().ok();
    let mut app = App::new("featurelayer")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("Load Esri feature layers and resolve their feature styles")
        .subcommand(SubCommand::with_name("fetch")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --url=[URL] 'Feature layer URL .../FeatureServer/<id>'
                                              --layer=[NAME] 'Load only this layer'
                                              --where=[FILTER] 'Query filter (Default: 1=1)'
                                              --features-per-request=[NUM] 'Page size (Default: 1000)'
                                              --max-features=[NUM] 'Stop paging after NUM features (Default: 5000)'
                                              --use-style=[true|false] 'Style features with the service renderer'
                                              --timeout=[SECONDS] 'HTTP request timeout'
                                              --geometry=[false|true] 'Include feature geometries in output'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Fetch features and print their resolved styles as JSON"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --url=[URL] 'Feature layer URL .../FeatureServer/<id>'
                                              --where=[FILTER] 'Query filter (Default: 1=1)'
                                              --features-per-request=[NUM] 'Page size (Default: 1000)'
                                              --max-features=[NUM] 'Stop paging after NUM features (Default: 5000)'
                                              --use-style=[true|false] 'Style features with the service renderer'
                                              --timeout=[SECONDS] 'HTTP request timeout'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("fetch", Some(sub_m)) => {
                init_logger(sub_m);
                fetch(sub_m);
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                match args::gen_config(sub_m) {
                    Ok(config) => println!("{}", config),
                    Err(err) => {
                        println!("Error reading configuration - {} ", err);
                        process::exit(1)
                    }
                }
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
