// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use demos::dump::write_report;
use demos::samples::SAMPLES;
use log::info;
use rdjson::ParseConfig;

#[derive(Parser, Debug)]
#[command(
    name = "rdjson-dump",
    version,
    about = "Parse a JSON document and dump the resulting tree"
)]
struct Args {
    #[arg(help = "JSON file to parse (reads stdin when omitted)")]
    file: Option<PathBuf>,
    #[arg(long, value_name = "N", help = "Maximum nesting depth of arrays and objects")]
    max_depth: Option<usize>,
    #[arg(long, conflicts_with = "max_depth", help = "Disable the nesting limit")]
    unbounded: bool,
    #[arg(long, conflicts_with = "file", help = "Run the built-in sample documents")]
    samples: bool,
}

impl Args {
    fn config(&self) -> ParseConfig {
        match (self.unbounded, self.max_depth) {
            (true, _) => ParseConfig::unbounded(),
            (false, Some(n)) => ParseConfig::with_max_depth(n),
            (false, None) => ParseConfig::default(),
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    match path {
        Some(path) => File::open(path)?.read_to_end(&mut bytes)?,
        None => io::stdin().lock().read_to_end(&mut bytes)?,
    };
    Ok(bytes)
}

/// Parses one document and prints its report; returns whether it parsed.
fn run(input: &[u8], config: ParseConfig) -> bool {
    let result = rdjson::Parser::with_config_from_slice(input, config).parse();
    let ok = result.is_ok();
    let mut report = String::new();
    match write_report(&mut report, &String::from_utf8_lossy(input), &result) {
        Ok(()) => print!("{report}"),
        Err(e) => eprintln!("Error: Unable to format report: {e}"),
    }
    ok
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();
    info!("using {:?}", config);

    if args.samples {
        println!("================== Start test ===================");
        for sample in SAMPLES {
            run(sample.as_bytes(), config);
        }
        println!("================== Finish test ==================");
        return;
    }

    let input = match read_input(args.file.as_ref()) {
        Ok(bytes) => bytes,
        Err(e) => {
            let source = args
                .file
                .as_ref()
                .map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
            eprintln!("Error: Unable to read '{}': {}", source, e);
            std::process::exit(1);
        }
    };

    if !run(&input, config) {
        std::process::exit(1);
    }
}
