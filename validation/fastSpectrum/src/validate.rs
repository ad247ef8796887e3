use fastSpectrum::internals::api::BinConvention;
use fastSpectrum::prelude::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    #[serde(default)]
    notes: String,
    #[serde(flatten)]
    case: Case,
    /// Output of the reference implementation, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expected: Option<Vec<f64>>,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "kernel", rename_all = "snake_case")]
enum Case {
    Rebin {
        counts_in: Vec<f64>,
        grid_in: Vec<f64>,
        grid_out: Vec<f64>,
        /// "lower_edge", "edges" or "centre"; inferred when absent.
        #[serde(default)]
        convention: Option<String>,
    },
    GaussSmoothing {
        counts_in: Vec<f64>,
        energies: Vec<f64>,
        fwhm: f64,
        /// Use the exact FWHM-to-sigma factor instead of 2.355.
        #[serde(default)]
        exact_fwhm: bool,
    },
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    counts_out: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_abs_diff: Option<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let input_dir = PathBuf::from(args.next().unwrap_or_else(|| "cases".into()));
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| "../output/fastSpectrum".into()));

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Pass a directory of JSON cases.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(&output_dir)?;

    for entry in fs::read_dir(&input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            info!(file = ?path.file_name(), "processing case");
            process_file(&path, &output_dir)?;
        }
    }

    Ok(())
}

fn parse_convention(name: &str) -> Result<BinConvention, Box<dyn Error>> {
    match name {
        "lower_edge" => Ok(LowerEdge),
        "edges" => Ok(Edges),
        "centre" | "center" => Ok(Centre),
        other => Err(format!("unknown bin convention '{other}'").into()),
    }
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let counts_out = match &data.case {
        Case::Rebin {
            counts_in,
            grid_in,
            grid_out,
            convention,
        } => {
            // Reference implementations drop uncovered counts silently.
            let mut builder = Rebin::<f64>::new().truncation_policy(TruncationPolicy::Silent);
            if let Some(name) = convention {
                builder = builder.bin_convention(parse_convention(name)?);
            }
            builder.build()?.rebin(counts_in, grid_in, grid_out)?.counts
        }
        Case::GaussSmoothing {
            counts_in,
            energies,
            fwhm,
            exact_fwhm,
        } => {
            let conversion = if *exact_fwhm { Exact } else { Rounded };
            GaussSmoothing::new()
                .fwhm(*fwhm)
                .fwhm_conversion(conversion)
                .build()?
                .smooth(counts_in, energies)?
                .counts
        }
    };

    data.result.max_abs_diff = data.expected.as_ref().map(|expected| {
        if expected.len() != counts_out.len() {
            return f64::INFINITY;
        }
        expected
            .iter()
            .zip(counts_out.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    });
    if let Some(diff) = data.result.max_abs_diff {
        if diff > 1e-9 {
            warn!(case = %data.name, max_abs_diff = diff, "output differs from reference");
        }
    }
    data.result.counts_out = counts_out;

    let file_name = input_path
        .file_name()
        .ok_or_else(|| format!("{:?} has no file name", input_path))?;
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_dir.join(file_name), output_json)?;

    Ok(())
}
