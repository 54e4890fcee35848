//! Simulated code execution
//!
//! Nothing here runs user code. Each language has one print idiom (see
//! [`Language::print_pattern`]); every match in the source contributes one
//! output line built from its captured argument, and a fixed banner closes
//! the output. Any failure replaces the whole output with an error line.

pub mod literal;

use crate::models::{Extraction, Language};
use literal::LiteralError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing line of every successful simulated run
pub const SUCCESS_BANNER: &str = "=== Code Execution Successful ===";

/// Prefix of the single line returned for a failed run
pub const ERROR_PREFIX: &str = "Error: ";

/// Shown by the UI when a run produces no text at all
pub const NO_OUTPUT: &str = "No output";

/// A simulated run that could not complete
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("{0}")]
    Literal(#[from] LiteralError),

    #[error("invalid print pattern for {language}: {reason}")]
    Pattern { language: Language, reason: String },
}

/// Outcome of a simulated run, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    /// Text for the output pane
    pub text: String,
    /// Number of echoed print lines (zero on failure)
    pub line_count: usize,
    pub succeeded: bool,
}

static PRINT_PATTERNS: Lazy<Vec<(Language, Result<Regex, regex::Error>)>> = Lazy::new(|| {
    Language::ALL
        .iter()
        .map(|language| (*language, Regex::new(language.print_pattern())))
        .collect()
});

fn print_regex(language: Language) -> Result<&'static Regex, SimulationError> {
    let compiled = PRINT_PATTERNS
        .iter()
        .find(|(candidate, _)| *candidate == language)
        .map(|(_, compiled)| compiled);

    match compiled {
        Some(Ok(regex)) => Ok(regex),
        Some(Err(err)) => Err(SimulationError::Pattern {
            language,
            reason: err.to_string(),
        }),
        None => Err(SimulationError::Pattern {
            language,
            reason: "pattern not registered".to_string(),
        }),
    }
}

/// Render one captured print argument
pub fn render_argument(argument: &str, extraction: Extraction) -> Result<String, SimulationError> {
    match extraction {
        Extraction::EvaluateLiteral => Ok(literal::evaluate(argument)?.display()),
        Extraction::StripQuotes => Ok(argument.replace(['"', '\''], "")),
    }
}

/// Collect the output lines of a simulated run, in source order
pub fn execute(source: &str, language: Language) -> Result<Vec<String>, SimulationError> {
    let regex = print_regex(language)?;
    let extraction = language.extraction();

    regex
        .captures_iter(source)
        .map(|captures| {
            let argument = captures.get(1).map_or("", |m| m.as_str());
            render_argument(argument, extraction)
        })
        .collect()
}

/// Join output lines and close them with the success banner
pub fn format_output(lines: &[String]) -> String {
    if lines.is_empty() {
        SUCCESS_BANNER.to_string()
    } else {
        format!("{}\n{}", lines.join("\n"), SUCCESS_BANNER)
    }
}

/// Run the simulator and keep the outcome details
pub fn run(source: &str, language: Language) -> Simulation {
    match execute(source, language) {
        Ok(lines) => Simulation {
            text: format_output(&lines),
            line_count: lines.len(),
            succeeded: true,
        },
        Err(err) => Simulation {
            text: format!("{}{}", ERROR_PREFIX, err),
            line_count: 0,
            succeeded: false,
        },
    }
}

/// Simulate running `source` as `language`, returning the display string
pub fn simulate(source: &str, language: Language) -> String {
    run(source, language).text
}

/// Simulate by registry name.
///
/// A name outside the registry has no print idiom, so only the banner is
/// produced.
pub fn simulate_by_name(source: &str, name: &str) -> String {
    match Language::from_name(name) {
        Some(language) => simulate(source, language),
        None => {
            debug!("No print pattern for language '{}'", name);
            SUCCESS_BANNER.to_string()
        }
    }
}
