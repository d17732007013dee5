use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use sawmill::io;
use sawmill::io::cli::Cli;
use sawmill::script::{self, SessionScript};
use timber_cut::io::CUT_LIST_FILE_NAME;
use timber_cut::util::SawmillConfig;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SawmillConfig::default()
        }
        Some(config_file) => io::read_json(&config_file).context("incorrect config file format")?,
    };

    info!("[MAIN] Successfully parsed SawmillConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable name")?
        .to_string();

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {:?}", args.output_folder)
        })?;
    }

    let session: SessionScript = io::read_json(args.input_file.as_path())?;
    info!("[MAIN] replaying {} events", session.events.len());

    let output = script::replay(config, &session)?;
    info!("[MAIN] estimated price: ${} ({})", output.price, output.material.name());

    let csv = timber_cut::io::rows_to_csv(&output.cut_list);
    io::write_csv(&csv, &args.output_folder.join(CUT_LIST_FILE_NAME))?;

    let output_path = args.output_folder.join(format!("session_{input_file_stem}.json"));
    io::write_json(&output, Path::new(&output_path))?;

    Ok(())
}
