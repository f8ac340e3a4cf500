//! Report shapes and output formats.

use anyhow::Result;
use clap::ValueEnum;
use pmf_core::{ComputationResult, DistributionKind, Error, RenderObserver};
use pmf_prob::Session;
use pmf_prob::math::to_plain;
use pmf_prob::render::{formula_latex, formula_text, probability_fixed, result_text};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One plain-text line per result
    Text,
    /// Display-math LaTeX, as a MathJax/KaTeX page would receive it
    Latex,
    /// Pretty JSON
    Json,
}

/// Outcome of one evaluation, in a serializable shape.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub distribution: DistributionKind,
    pub ok: bool,
    /// Full-precision probability in plain notation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<String>,
    /// Probability rounded to `decimals` places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    /// The panel the session rendered (result on success, errors otherwise).
    pub latex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl Report {
    /// Build from a submit outcome and the session panels it produced.
    pub fn new<O: RenderObserver>(
        session: &Session<O>,
        outcome: &pmf_core::Result<ComputationResult>,
    ) -> Self {
        let distribution = session.selected();
        let latex = session.result().or(session.errors()).unwrap_or_default().to_string();
        match outcome {
            Ok(r) => Self {
                distribution,
                ok: true,
                probability: Some(to_plain(&r.probability)),
                rounded: Some(probability_fixed(r)),
                decimals: Some(r.decimals),
                latex,
                text: Some(result_text(r)),
                errors: Vec::new(),
            },
            Err(e) => Self {
                distribution,
                ok: false,
                probability: None,
                rounded: None,
                decimals: None,
                latex,
                text: None,
                errors: error_messages(e),
            },
        }
    }
}

fn error_messages(err: &Error) -> Vec<String> {
    match err {
        Error::Validation(v) => v.messages(),
        _ => vec!["invalid input".to_string()],
    }
}

/// Write reports to stdout (successes) and stderr (failures).
///
/// JSON always goes to stdout: a single object for one report, an array
/// otherwise.
pub fn emit(reports: &[Report], format: OutputFormat, labelled: bool) -> Result<()> {
    if format == OutputFormat::Json {
        let json = match reports {
            [single] if !labelled => serde_json::to_string_pretty(single)?,
            _ => serde_json::to_string_pretty(reports)?,
        };
        println!("{}", json);
        return Ok(());
    }

    for (i, report) in reports.iter().enumerate() {
        let label =
            if labelled { format!("[{}] {}: ", i, report.distribution) } else { String::new() };
        match (format, report.ok) {
            (OutputFormat::Latex, true) => println!("{}{}", label, report.latex),
            (OutputFormat::Latex, false) => eprintln!("{}{}", label, report.latex),
            (_, true) => println!("{}{}", label, report.text.as_deref().unwrap_or_default()),
            (_, false) => {
                for msg in &report.errors {
                    eprintln!("{}error: {}", label, msg);
                }
            }
        }
    }
    Ok(())
}

/// Print the symbolic formula for `kind`.
pub fn emit_formula(kind: DistributionKind, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", formula_text(kind)),
        OutputFormat::Latex => println!("{}", formula_latex(kind)),
        OutputFormat::Json => {
            let v = serde_json::json!({
                "distribution": kind,
                "params": kind.required_params(),
                "text": formula_text(kind),
                "latex": formula_latex(kind),
            });
            println!("{}", serde_json::to_string_pretty(&v)?);
        }
    }
    Ok(())
}
