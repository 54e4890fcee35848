//! CodePlay - multi-language code playground
//!
//! Binary entry point: argument parsing, logging setup, configuration
//! loading and either the GUI window or a headless `--run`.

mod app;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context as _, Result};
use eframe::egui;
use tracing::{debug, error, info, warn};

use codeplay::config::RuntimeConfig;
use codeplay::execution::simulate;
use codeplay::models::{registry, Language};

use app::CodePlayApp;

/// What the process was asked to do
#[derive(Debug, Clone, PartialEq, Default)]
enum Mode {
    /// Open the playground window
    #[default]
    Gui,
    /// Print the simulated output of a file and exit
    Run(PathBuf),
    ListLanguages,
    Help,
    Version,
}

/// Application configuration
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug mode
    debug: bool,
    /// Language selected at startup (registry name)
    language: Option<String>,
    /// Initial theme
    theme: Option<String>,
    /// Window width
    width: Option<f32>,
    /// Window height
    height: Option<f32>,
    mode: Mode,
}

impl AppArgs {
    /// Parse the process arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::parse_from(&args)
    }

    /// Parse arguments (without the program name)
    fn parse_from(args: &[String]) -> Result<Self> {
        let mut app_args = AppArgs::default();
        let mut iter = args.iter();

        let value = |flag: &str, iter: &mut std::slice::Iter<'_, String>| {
            iter.next()
                .cloned()
                .with_context(|| format!("Missing value for {}", flag))
        };

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    app_args.config_path = Some(PathBuf::from(value(arg, &mut iter)?));
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--language" | "-l" => {
                    app_args.language = Some(value(arg, &mut iter)?);
                }
                "--theme" | "-t" => {
                    app_args.theme = Some(value(arg, &mut iter)?);
                }
                "--width" | "-w" => {
                    let raw = value(arg, &mut iter)?;
                    app_args.width =
                        Some(raw.parse().with_context(|| format!("Invalid width '{}'", raw))?);
                }
                "--height" | "-h" => {
                    let raw = value(arg, &mut iter)?;
                    app_args.height =
                        Some(raw.parse().with_context(|| format!("Invalid height '{}'", raw))?);
                }
                "--run" | "-r" => {
                    app_args.mode = Mode::Run(PathBuf::from(value(arg, &mut iter)?));
                }
                "--list-languages" => {
                    app_args.mode = Mode::ListLanguages;
                }
                "--help" | "-?" => {
                    app_args.mode = Mode::Help;
                }
                "--version" | "-v" => {
                    app_args.mode = Mode::Version;
                }
                other if other.starts_with('-') => {
                    bail!("Unknown option: {}", other);
                }
                other => {
                    warn!("Ignoring positional argument: {}", other);
                }
            }
        }

        Ok(app_args)
    }

    /// Resolve `--language` against the registry
    fn language(&self) -> Result<Option<Language>> {
        match &self.language {
            Some(name) => Language::from_name(name)
                .map(Some)
                .with_context(|| format!("Unknown language '{}' (see --list-languages)", name)),
            None => Ok(None),
        }
    }
}

/// Print help information
fn print_help() {
    println!("{} - {}", codeplay::NAME, codeplay::DESCRIPTION);
    println!();
    println!("USAGE:");
    println!("    codeplay [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>      Path to configuration file");
    println!("    -d, --debug              Enable debug logging");
    println!("    -l, --language <NAME>    Language selected at startup (e.g. Rust, C++)");
    println!("    -t, --theme <THEME>      Theme (dark, light or a configured theme)");
    println!("    -w, --width <WIDTH>      Initial window width");
    println!("    -h, --height <HEIGHT>    Initial window height");
    println!("    -r, --run <FILE>         Print the simulated output of FILE and exit");
    println!("        --list-languages     List supported languages and exit");
    println!("    -?, --help               Print this help message");
    println!("    -v, --version            Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    CodePlay looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. $XDG_CONFIG_HOME/codeplay/config.toml");
    println!("    3. <platform config dir>/codeplay/config.toml");
    println!("    4. ~/.codeplay/config.toml");
    println!("    5. ./.codeplay/config.toml");
    println!("    6. Built-in defaults");
    println!("    A config.json next to any of these is read as well.");
    println!();
    println!("ENVIRONMENT:");
    println!("    CODEPLAY_CONFIG    Path to configuration file");
    println!("    CODEPLAY_DEBUG     Enable debug logging (1 or true)");
    println!("    RUST_LOG           Set logging filter (error, warn, info, debug, trace)");
}

fn env_flag(name: &str) -> bool {
    env::var(name).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

fn init_logging(debug: bool) {
    let log_level = if debug || env_flag("CODEPLAY_DEBUG") {
        "debug"
    } else {
        "info"
    };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        eprintln!();
        print_help();
        process::exit(2);
    });

    match &args.mode {
        Mode::Help => {
            print_help();
            return Ok(());
        }
        Mode::Version => {
            println!("CodePlay v{}", codeplay::VERSION);
            return Ok(());
        }
        Mode::ListLanguages => {
            for descriptor in registry() {
                println!("{:<12} {}", descriptor.name, descriptor.file_name());
            }
            return Ok(());
        }
        Mode::Gui | Mode::Run(_) => {}
    }

    init_logging(args.debug);
    debug!("Debug mode enabled");

    if let Mode::Run(path) = &args.mode {
        let output = run_headless(path, args.language()?)?;
        println!("{}", output);
        return Ok(());
    }

    info!("Starting CodePlay v{}", codeplay::VERSION);

    let runtime_config = load_configuration(&args)?;
    let native_options = create_native_options(&runtime_config);
    let app = CodePlayApp::new(runtime_config);

    if let Err(e) = eframe::run_native(
        "CodePlay",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    ) {
        error!("Application failed: {}", e);
        process::exit(1);
    }

    info!("CodePlay shutdown complete");
    Ok(())
}

/// Simulate one source file without opening a window
fn run_headless(path: &Path, language: Option<Language>) -> Result<String> {
    let language = match language {
        Some(language) => language,
        None => {
            let extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or_default();
            Language::from_extension(extension)
                .ok_or_else(|| codeplay::Error::UnknownExtension {
                    extension: extension.to_string(),
                })
                .with_context(|| format!("Pass --language to run {}", path.display()))?
        }
    };

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Simulating {} as {}", path.display(), language);
    Ok(simulate(&source, language))
}

/// Load configuration from file or use defaults, then apply CLI overrides
fn load_configuration(args: &AppArgs) -> Result<RuntimeConfig> {
    let config_path = args
        .config_path
        .clone()
        .or_else(|| env::var("CODEPLAY_CONFIG").ok().map(PathBuf::from));

    let mut runtime_config = match &config_path {
        Some(path) => match codeplay::init_with_config(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config from {}: {}", path.display(), e);
                info!("Falling back to default configuration");
                codeplay::init()
            }
        },
        None => codeplay::init(),
    };

    if let Some(theme_name) = &args.theme {
        debug!("Applying theme override: {}", theme_name);
        if let Err(e) = runtime_config.set_theme(theme_name) {
            warn!("Failed to apply theme '{}': {}", theme_name, e);
        }
    }

    match args.language() {
        Ok(Some(language)) => runtime_config.set_initial_language(language),
        Ok(None) => {}
        Err(e) => warn!("{:#}", e),
    }

    runtime_config.set_window_size(args.width, args.height);
    Ok(runtime_config)
}

/// Create native options for the application window
fn create_native_options(runtime_config: &RuntimeConfig) -> eframe::NativeOptions {
    let ui = &runtime_config.config().ui;

    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CodePlay")
            .with_app_id("codeplay")
            .with_icon(std::sync::Arc::new(create_window_icon()))
            .with_inner_size([ui.window_width, ui.window_height])
            .with_min_inner_size([400.0, 300.0]),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    }
}

/// A 32x32 "play" triangle on the accent color
fn create_window_icon() -> egui::IconData {
    const SIZE: u32 = 32;
    let background: [u8; 4] = [0x25, 0x63, 0xeb, 255];
    let foreground: [u8; 4] = [255, 255, 255, 255];

    let mut rgba: Vec<u8> = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            // Triangle with its tip at (24, 16) and its back edge at x = 10
            let dy = (y as i32 - 16).unsigned_abs();
            let inside = x >= 10 && x <= 24 && dy * 14 <= (24 - x) * 8;
            rgba.extend_from_slice(if inside { &foreground } else { &background });
        }
    }

    egui::IconData {
        rgba,
        width: SIZE,
        height: SIZE,
    }
}
