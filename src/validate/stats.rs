/// Population moments of a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moments {
    pub mean: f64,
    pub std: f64,
    pub skewness: f64,
    /// Excess kurtosis (0 for a normal distribution).
    pub kurtosis: f64,
}

impl Moments {
    /// `None` for an empty sample or one without spread.
    pub fn of(values: &[f32]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
        let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
        for &v in values {
            let d = v as f64 - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
        }
        m2 /= n;
        m3 /= n;
        m4 /= n;
        let std = m2.sqrt();
        if !std.is_finite() || std <= 1e-12 {
            return None;
        }
        Some(Self {
            mean,
            std,
            skewness: m3 / (std * std * std),
            kurtosis: m4 / (m2 * m2) - 3.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_two_point_sample() {
        let m = Moments::of(&[1.0, 3.0, 1.0, 3.0]).unwrap();
        assert!((m.mean - 2.0).abs() < 1e-12);
        assert!((m.std - 1.0).abs() < 1e-12);
        assert!(m.skewness.abs() < 1e-12);
        assert!((m.kurtosis + 2.0).abs() < 1e-12);
    }

    #[test]
    fn long_tail_sets_skew_sign() {
        let right = Moments::of(&[0.0, 0.0, 0.0, 0.0, 10.0]).unwrap();
        assert!(right.skewness > 0.0);
        let left = Moments::of(&[10.0, 10.0, 10.0, 10.0, 0.0]).unwrap();
        assert!(left.skewness < 0.0);
        assert!((left.kurtosis - right.kurtosis).abs() < 1e-9);
    }

    #[test]
    fn flat_or_empty_samples_have_no_moments() {
        assert!(Moments::of(&[]).is_none());
        assert!(Moments::of(&[4.0; 6]).is_none());
    }
}
