use clap::{Arg, Command};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use libmdocspoofer::config::Config;
use libmdocspoofer::process::process;

fn make_template_config(path: &Path) {
    let config = Config::default();
    let yaml_str = serde_yaml::to_string(&config).unwrap();
    let mut file = File::create(path).expect("Could not create template config file!");
    file.write_all(yaml_str.as_bytes())
        .expect("Failed to write yaml data to file!");
}

fn prompt(message: &str) -> String {
    print!("{message}: ");
    std::io::stdout().flush().expect("Could not flush stdout!");
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .expect("Failed to read from stdin!");
    line.trim().to_string()
}

fn prompt_dose() -> f64 {
    loop {
        let text = prompt("Dose per image (electrons per square angstrom)");
        match text.parse::<f64>() {
            Ok(dose) => return dose,
            Err(_) => println!("'{text}' is not a number, try again."),
        }
    }
}

fn main() {
    // Create a cli
    let matches = Command::new("mdocspoofer_cli")
        .about("Generate spoofed SerialEM mdoc sidecar files for tilt-series movie frames")
        .subcommand(Command::new("new").about("Make a template configuration yaml file"))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .global(true)
                .help("Path to a YAML configuration file"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Directory containing frame-stack movies"),
        )
        .arg(
            Arg::new("dose")
                .short('d')
                .long("dose")
                .value_parser(clap::value_parser!(f64))
                .help("Dose per image in electrons per square angstrom"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Directory to write mdoc files to (default: mdoc)"),
        )
        .get_matches();

    // Initialize feedback
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("Could not create logging!");

    if let Some(("new", _)) = matches.subcommand() {
        let config_path = PathBuf::from(
            matches
                .get_one::<String>("config")
                .map(String::as_str)
                .unwrap_or("config.yaml"),
        );
        log::info!(
            "Making a template config at {}...",
            config_path.to_string_lossy()
        );

        make_template_config(&config_path);
        log::info!("Done.");
        return;
    }

    // Build our config, prompting for anything required but not given
    let config = if let Some(config_path) = matches.get_one::<String>("config") {
        log::info!("Loading config from {config_path}...");
        match Config::read_config_file(Path::new(config_path)) {
            Ok(c) => c,
            Err(e) => {
                log::error!("{e}");
                return;
            }
        }
    } else {
        let frames_path = PathBuf::from(
            matches
                .get_one::<String>("input")
                .cloned()
                .unwrap_or_else(|| prompt("Directory containing frames")),
        );
        let dose_per_image = matches
            .get_one::<f64>("dose")
            .copied()
            .unwrap_or_else(prompt_dose);
        let mut config = Config::new(frames_path, dose_per_image);
        if let Some(output) = matches.get_one::<String>("output") {
            config.mdoc_path = PathBuf::from(output);
        }
        config
    };

    log::info!("Frames Path: {}", config.frames_path.to_string_lossy());
    log::info!("Mdoc Path: {}", config.mdoc_path.to_string_lossy());
    log::info!("Dose Per Image: {}", config.dose_per_image);

    match process(&config) {
        Ok(n_mdocs) => log::info!(
            "Done! Wrote {} mdoc files for frames in '{}' to '{}'",
            n_mdocs,
            config.frames_path.to_string_lossy(),
            config.mdoc_path.to_string_lossy()
        ),
        Err(e) => log::error!("Spoofing failed with error: {e}"),
    }
}
