//! Shortkey - keyboard shortcut registry in a terminal

mod config;
mod term;

use shortkey_core::ShortcutManager;
use shortkey_engine::engine::Platform;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: shortkey [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>           Load shortcuts from TOML file");
    eprintln!("  --platform <name>         Match as 'macos' or 'other' (default: detected)");
    eprintln!("  --no-defaults             Skip the built-in sample shortcuts");
    eprintln!("  --check                   Validate and list shortcuts, then exit");
    eprintln!("  -h, --help                Print help");
}

fn init_logging() {
    // Rejected shortcuts are already reported as warnings on stderr.
    let filter = EnvFilter::try_from_env("SHORTKEY_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn,shortkey_core=error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_shortcuts(manager: &ShortcutManager) {
    for (group, shortcut) in manager.iter() {
        println!("{}\t{}\t{}", group.unwrap_or("-"), shortcut.name(), shortcut.combo());
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config_file: Option<PathBuf> = None;
    let mut platform_override: Option<Platform> = None;
    let mut no_defaults = false;
    let mut check = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            "--platform" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --platform requires a value");
                    std::process::exit(1);
                }
                match args[i].parse::<Platform>() {
                    Ok(platform) => platform_override = Some(platform),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            "--no-defaults" => no_defaults = true,
            "--check" => check = true,
            arg => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    init_logging();

    let (mut shortcut_config, mut warnings) = config::load_config(config_file.as_ref());
    if no_defaults {
        shortcut_config.include_defaults = false;
    }
    let platform = platform_override
        .or(shortcut_config.platform)
        .unwrap_or_else(Platform::current);

    let messages = config::MessageQueue::default();
    let (mut manager, register_warnings) = config::build_manager(&shortcut_config, platform, &messages);
    warnings.extend(register_warnings);
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    if check {
        print_shortcuts(&manager);
        if !warnings.is_empty() {
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = term::run(&mut manager, &messages) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
