use std::env;
use std::path::Path;
use table_detector::config::load_config;
use table_detector::diagnostics::DetectionReport;
use table_detector::image::io::{load_rgb_image, write_json_file};
use table_detector::render::PngRenderer;
use table_detector::{DetectionOutcome, TableDetector};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_rgb_image(&config.input)?;

    let mut detector = TableDetector::new(config.params.clone());
    if let Some(dir) = &config.output.debug_dir {
        detector = detector.with_renderer(PngRenderer::new(dir));
    }
    let report = detector.process(&image.as_view());

    print_text_summary(&report);

    match &config.output.json_out {
        Some(path) => {
            write_json_file(path, &report)?;
            println!("\nJSON report written to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            println!("\nJSON report:\n{json}");
        }
    }

    if let Some(dir) = &config.output.debug_dir {
        println!("Debug artifacts written to {}", dir.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: table_detector <config.json>".to_string()
}

fn print_text_summary(report: &DetectionReport) {
    let result = &report.result;
    let input = &report.trace.input;
    println!("Input: {}x{}", input.width, input.height);
    println!(
        "Mask pixels: {} | edge pixels: {}",
        report.trace.mask_pixels, report.trace.edge_pixels
    );
    match &result.outcome {
        DetectionOutcome::Found(boundary) => {
            let rho = result.rho_resolution.unwrap_or(f32::NAN);
            println!(
                "Table found after {} attempt(s) at rho resolution {:.2}",
                result.attempts, rho
            );
            for (i, line) in boundary.lines().iter().enumerate() {
                println!(
                    "  edge {i}: offset={:.1} angle={:.2}°",
                    line.offset,
                    line.angle.to_degrees()
                );
            }
            for seg in &result.segments {
                println!(
                    "  segment ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                    seg.p0[0], seg.p0[1], seg.p1[0], seg.p1[1]
                );
            }
        }
        DetectionOutcome::NotFound => {
            println!("Table not found after {} attempt(s)", result.attempts);
            for attempt in &report.trace.attempts {
                println!(
                    "  rho={:.2}: {} raw line(s), {} cluster(s)",
                    attempt.rho_resolution,
                    attempt.raw_lines,
                    attempt.cluster_count()
                );
            }
        }
    }
    println!("Latency: {:.3} ms", result.latency_ms);
}
