use aligned_lsd::stages::GradientField;

const DIAGONAL_COMPONENT: f32 = 141.421_36;

/// `n × n` gradient field with a noise-free main-diagonal edge of magnitude
/// 200 (gradient at 135°) over a background of magnitude 10.
pub fn diagonal_edge_field(n: usize) -> GradientField {
    assert!(n > 0, "field size must be positive");
    let mut gx = vec![10.0; n * n];
    let mut gy = vec![0.0; n * n];
    for i in 0..n {
        gx[i * n + i] = DIAGONAL_COMPONENT;
        gy[i * n + i] = -DIAGONAL_COMPONENT;
    }
    GradientField::from_components(n, n, gx, gy).expect("consistent buffers")
}

/// Dark left half, bright right half, with a single mid-grey column at
/// `edge_x` so the blurred step peaks on one pixel column.
pub fn vertical_step_u8(width: usize, height: usize, edge_x: usize) -> Vec<u8> {
    assert!(edge_x < width, "edge column must lie inside the image");
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = match x.cmp(&edge_x) {
                std::cmp::Ordering::Less => 0,
                std::cmp::Ordering::Equal => 100,
                std::cmp::Ordering::Greater => 200,
            };
        }
    }
    img
}

/// Deterministic pseudo-random texture (64-bit LCG) in `[lo, lo + span)`.
pub fn noise_u8(width: usize, height: usize, seed: u64, lo: u8, span: u8) -> Vec<u8> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..width * height)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            lo.saturating_add(((state >> 33) % span.max(1) as u64) as u8)
        })
        .collect()
}

/// Bright filled rectangle `[x0, x1) × [y0, y1)` over `base`.
pub fn paint_rect(img: &mut [u8], width: usize, rect: (usize, usize, usize, usize), value: u8) {
    let (x0, y0, x1, y1) = rect;
    for y in y0..y1 {
        for x in x0..x1 {
            img[y * width + x] = value;
        }
    }
}
