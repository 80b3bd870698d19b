use aligned_lsd::image::ImageU8;
use aligned_lsd::{DetectorParams, LineDetector};

fn main() {
    // Demo stub: a dark frame with one bright square, run through the detector
    let w = 160usize;
    let h = 120usize;
    let mut gray = vec![0u8; w * h];
    for y in 30..90 {
        for x in 40..120 {
            gray[y * w + x] = 200;
        }
    }
    let img = ImageU8 {
        w,
        h,
        stride: w,
        data: &gray,
    };

    let det = LineDetector::new(DetectorParams::default());
    let report = det.process(img);
    for seg in &report.segments {
        println!(
            "({:.1}, {:.1}) -> ({:.1}, {:.1})",
            seg.beg[0], seg.beg[1], seg.end[0], seg.end[1]
        );
    }
    println!(
        "segments={} latency_ms={:.3}",
        report.segments.len(),
        report.timing.total_ms
    );
}
