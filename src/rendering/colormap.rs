// src/rendering/colormap.rs

/// Sequential purple-blue ramp (ColorBrewer PuBu, 9 classes), light to dark.
const PUBU: [(f64, f64, f64); 9] = [
    (0xff as f64 / 255.0, 0xf7 as f64 / 255.0, 0xfb as f64 / 255.0),
    (0xec as f64 / 255.0, 0xe7 as f64 / 255.0, 0xf2 as f64 / 255.0),
    (0xd0 as f64 / 255.0, 0xd1 as f64 / 255.0, 0xe6 as f64 / 255.0),
    (0xa6 as f64 / 255.0, 0xbd as f64 / 255.0, 0xdb as f64 / 255.0),
    (0x74 as f64 / 255.0, 0xa9 as f64 / 255.0, 0xcf as f64 / 255.0),
    (0x36 as f64 / 255.0, 0x90 as f64 / 255.0, 0xc0 as f64 / 255.0),
    (0x05 as f64 / 255.0, 0x70 as f64 / 255.0, 0xb0 as f64 / 255.0),
    (0x04 as f64 / 255.0, 0x5a as f64 / 255.0, 0x8d as f64 / 255.0),
    (0x02 as f64 / 255.0, 0x38 as f64 / 255.0, 0x58 as f64 / 255.0),
];

/// Colour at `t` in [0, 1]; out-of-range values clamp, NaN maps to the low end.
pub fn pubu(t: f64) -> (f64, f64, f64) {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let pos = t * (PUBU.len() - 1) as f64;
    let i = (pos.floor() as usize).min(PUBU.len() - 2);
    let f = pos - i as f64;

    let (r0, g0, b0) = PUBU[i];
    let (r1, g1, b1) = PUBU[i + 1];
    let w = 1.0 - f;
    (r0 * w + r1 * f, g0 * w + g1 * f, b0 * w + b1 * f)
}

/// Linear min/max normalization. A flat set maps everything to 0.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let lo = finite.clone().fold(f64::INFINITY, f64::min);
    let hi = finite.fold(f64::NEG_INFINITY, f64::max);
    let range = hi - lo;

    values
        .iter()
        .map(|&v| {
            if range > 0.0 && range.is_finite() {
                (v - lo) / range
            } else {
                0.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(pubu(0.0), PUBU[0]);
        assert_eq!(pubu(1.0), PUBU[8]);
        assert_eq!(pubu(-3.0), PUBU[0]);
        assert_eq!(pubu(f64::NAN), PUBU[0]);
    }

    #[test]
    fn test_darkens_with_weight() {
        let light = pubu(0.2);
        let dark = pubu(0.8);
        assert!(dark.0 + dark.1 + dark.2 < light.0 + light.1 + light.2);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(&[1.0, 3.0, 2.0]), vec![0.0, 1.0, 0.5]);
        assert_eq!(normalize(&[5.0, 5.0]), vec![0.0, 0.0]);
        assert!(normalize(&[]).is_empty());
    }
}
