use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use nwss_model::RecordSchema;
use nwss_report::{write_json_schema, write_validation_report_json};
use nwss_standards::nwss_schema;
use nwss_validate::{FixedClock, SystemClock, ValidationOptions};

use nwss_cli::pipeline::{FileResult, ValidationRun, validate_inputs};
use nwss_cli::summary::fields_table;

use crate::cli::{SchemaArgs, ValidateArgs};

fn load_schema() -> Result<RecordSchema> {
    nwss_schema().context("load nwss dictionary")
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationRun> {
    let schema = load_schema()?;
    let mut options = ValidationOptions::default();
    if args.allow_unknown_fields {
        options = options.ignore_unknown_fields();
    }

    let run = match args.today {
        Some(date) => validate_inputs(&args.inputs, &schema, options, &FixedClock::on(date))?,
        None => validate_inputs(&args.inputs, &schema, options, &SystemClock)?,
    };

    if let Some(dir) = &args.report_dir {
        for file in &run.files {
            let path = write_report(dir, file)?;
            info!(path = %path.display(), "wrote validation report");
        }
    }
    Ok(run)
}

fn write_report(dir: &Path, file: &FileResult) -> Result<PathBuf> {
    let stem = file
        .path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());
    let path = dir.join(format!("{stem}.validation.json"));
    write_validation_report_json(&path, &file.path.display().to_string(), &file.batch)?;
    Ok(path)
}

pub fn run_schema(args: &SchemaArgs) -> Result<PathBuf> {
    let schema = load_schema()?;
    write_json_schema(&args.output, &schema)?;
    info!(path = %args.output.display(), fields = schema.fields().len(), "wrote json schema");
    Ok(args.output.clone())
}

pub fn run_fields() -> Result<()> {
    let schema = load_schema()?;
    println!("{}", fields_table(&schema));
    Ok(())
}
