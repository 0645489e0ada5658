//! Batch command implementation
//!
//! Processes rendering jobs from a JSONL file, writing one result line per
//! job to stdout. A failing job does not stop the others.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use overlay::prelude::*;

use super::{font_library, resolve_font};
use crate::{
    cli::BatchArgs,
    jsonl::{BatchJob, JobResult},
};

pub fn run(args: &BatchArgs, quiet: bool) -> Result<()> {
    // Open input source
    let reader: Box<dyn BufRead> = if let Some(ref input_path) = args.input {
        Box::new(BufReader::new(File::open(input_path)?))
    } else {
        if !quiet {
            eprintln!("Reading jobs from stdin...");
        }
        Box::new(BufReader::new(io::stdin()))
    };

    fs::create_dir_all(&args.output)?;

    let generator = Generator::new(font_library(&args.fonts)?);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut job_count = 0;
    let mut error_count = 0;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        job_count += 1;

        let result = match serde_json::from_str::<BatchJob>(&line) {
            Ok(job) => {
                let id = job.id.clone().unwrap_or_else(|| job_count.to_string());
                let file_name = job
                    .output
                    .clone()
                    .unwrap_or_else(|| args.pattern.replace("{}", &job_count.to_string()));
                let output = args.output.join(file_name);
                log::debug!("Job {}: {:?} -> {}", id, job.text, output.display());

                match process_job(&generator, &job, &output) {
                    Ok((summary, variant)) => JobResult::success(id, &output, &summary, variant),
                    Err(e) => JobResult::error(id, e.to_string()),
                }
            },
            Err(e) => JobResult::error(job_count.to_string(), format!("invalid job: {}", e)),
        };

        if !result.is_ok() {
            error_count += 1;
            log::warn!(
                "Job {} failed: {}",
                result.id,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
        let json = serde_json::to_string(&result)
            .map_err(|e| OverlayError::ConfigError(format!("cannot encode result: {}", e)))?;
        writeln!(out, "{}", json)?;
    }

    if !quiet {
        eprintln!(
            "Batch complete: {} jobs, {} succeeded, {} failed",
            job_count,
            job_count - error_count,
            error_count
        );
    }

    if error_count > 0 {
        Err(OverlayError::ConfigError(format!("{} jobs failed", error_count)))
    } else {
        Ok(())
    }
}

fn process_job(
    generator: &Generator,
    job: &BatchJob,
    output: &Path,
) -> Result<(LayoutSummary, FontVariant)> {
    let canvas = job.canvas()?;
    let mut style = job.style()?;

    // A job's own font file draws whichever variant the job asked for
    let (variant, font) = match &job.font {
        Some(path) => {
            log::debug!("Using {} as the {} font", path.display(), style.variant);
            (style.variant, generator.library().load_path(path)?)
        },
        None => resolve_font(generator.library(), style.variant)?,
    };
    style.variant = variant;

    let request = RenderRequest::new(job.text.clone(), canvas).with_style(style);
    let rendered = generator.generate_with_font(&request, font.as_ref())?;
    rendered.save_png(output)?;
    Ok((rendered.summary, variant))
}
