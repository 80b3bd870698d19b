use aligned_lsd::config::detect;
use aligned_lsd::image::io::{load_grayscale_image, write_json_file, write_segments_txt};
use aligned_lsd::image::ImageF32;
use aligned_lsd::LineDetector;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = detect::load_config(Path::new(&config_path))?;
    if config.inputs.is_empty() {
        return Err("Config lists no inputs".to_string());
    }

    let mut images = Vec::with_capacity(config.inputs.len());
    for input in &config.inputs {
        let gray = load_grayscale_image(input)?;
        images.push(ImageF32::from_gray_u8(&gray.as_view()));
    }

    let detector = LineDetector::new(config.detector.clone());
    let reports = detector.process_batch(&images);

    for (input, report) in config.inputs.iter().zip(&reports) {
        let report_path = config.output.report_path(input);
        write_json_file(&report_path, report)?;
        if config.output.segments_txt {
            write_segments_txt(&config.output.segments_path(input), &report.segments)?;
        }
        println!(
            "{}: {} segments, {} validated candidates, {:.2} ms -> {}",
            input.display(),
            report.segments.len(),
            report.candidates.len(),
            report.timing.total_ms,
            report_path.display()
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: detect_segments <config.json>".to_string()
}
