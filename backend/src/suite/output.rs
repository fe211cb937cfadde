//! Persistence of sample batches and reports
//!
//! Layout under the output directory:
//!
//! ```text
//! <GeneratorName>.txt   one sample per line
//! test.txt              rendered text report
//! report.json           full report, including previews for charting
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{render_text, SuiteError, SuiteReport};

pub const REPORT_TEXT_FILE: &str = "test.txt";
pub const REPORT_JSON_FILE: &str = "report.json";

/// Write one batch as `<dir>/<name>.txt`, creating `dir` if needed
pub fn write_samples(dir: &Path, name: &str, samples: &[f64]) -> Result<PathBuf, SuiteError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{name}.txt"));
    let body = samples
        .iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(&path, body)?;
    info!(path = %path.display(), count = samples.len(), "wrote samples");
    Ok(path)
}

/// Write the text and JSON forms of `report` into `dir`
pub fn write_report(dir: &Path, report: &SuiteReport) -> Result<(), SuiteError> {
    fs::create_dir_all(dir)?;

    let text_path = dir.join(REPORT_TEXT_FILE);
    fs::write(&text_path, render_text(report))?;

    let json_path = dir.join(REPORT_JSON_FILE);
    fs::write(&json_path, serde_json::to_string_pretty(report)?)?;

    info!(
        text = %text_path.display(),
        json = %json_path.display(),
        "wrote report"
    );
    Ok(())
}
