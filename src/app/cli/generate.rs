use crate::domain::AppError;
use crate::{GenerateOptions, GenerationReport};

pub fn run_generate(options: GenerateOptions, json: bool) -> Result<(), AppError> {
    let report = crate::generate(options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &GenerationReport) {
    if !report.is_complete() {
        println!("⚠️  Static config copy failed for {} replica(s):", report.copy_failures.len());
        for failure in &report.copy_failures {
            println!("  • {}: {}", failure.replica, failure.cause);
        }
    }
    println!("✅ PostgreSQL configuration files generated successfully!");
}
