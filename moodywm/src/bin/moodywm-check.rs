use anyhow::Result;
use clap::{arg, command};
use moodywm::Config;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let matches = command!("moodywm check")
        .about("Checks syntax of the configuration file")
        .help_template(moodywm::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the file in the config directory otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(PathBuf::from);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m moodywm version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    match check_config_file(config_file, verbose) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            config.check_mousekey(verbose);
            config.check_layout(verbose);
            config.check_keybinds(verbose);
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
        }
    }
    println!("\x1b[0;94m::\x1b[0m Checking environment . . .");
    check_environment(verbose);

    Ok(())
}

/// Loads configuration from either specified file (preferred) or default.
/// # Errors
///
/// Errors if file cannot be read. Indicates filesystem error
/// (inadequate permissions, disk full, etc.)
/// If a path is specified and does not exist, returns an error.
fn check_config_file(fspath: Option<PathBuf>, verbose: bool) -> Result<Config> {
    let config_filename = match fspath {
        Some(path) => path,
        None => moodywm::get_default_path()?,
    };
    if verbose {
        dbg!(&config_filename);
    }
    if !Path::new(&config_filename).exists() {
        anyhow::bail!(
            "Configuration file {} does not exist",
            config_filename.display()
        );
    }
    moodywm::load_from_path(&config_filename)
}

fn check_environment(verbose: bool) {
    match std::env::var("DISPLAY") {
        Ok(val) => {
            if verbose {
                println!(":: DISPLAY: {val}");
            }
            println!("\x1b[0;92m    -> Environment OK \x1b[0m");
        }
        Err(_) => println!(
            "\x1b[1;93mWARN: DISPLAY is not set, moodywm has to be started from an X session.\x1b[0m"
        ),
    }
    if !moodywm::is_program_in_path("sh") {
        println!("\x1b[1;91mERROR: `sh` is not in PATH, Execute keybinds will not work.\x1b[0m");
    }
}
