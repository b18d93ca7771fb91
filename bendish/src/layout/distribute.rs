//! Shared pixel distribution for every solver.
//!
//! Space is handed out in whole pixels. When it does not divide evenly, the
//! remainder goes one pixel each to the first recipients in insertion order,
//! so the same tree always produces the same rectangles. Fractional pixels
//! are left unassigned.

/// Split `extra` whole pixels among `count` recipients.
///
/// Returns `count` shares that sum to `floor(extra)` (zero if `extra` is
/// negative). Shares differ by at most one pixel, larger shares first.
pub fn distribute(extra: f32, count: usize) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }

    let whole = extra.max(0.0).floor();
    let base = (whole / count as f32).floor();
    let remainder = ((whole - base * count as f32) as usize).min(count);

    (0..count)
        .map(|i| if i < remainder { base + 1.0 } else { base })
        .collect()
}

/// Shrink `naturals` proportionally so they fit in `available`.
///
/// Each share is `floor(natural * available / total)`; the pixels lost to
/// flooring go one each to the first entries. Used when a non-scrolling
/// container's content overflows it.
pub fn compress(naturals: &[f32], available: f32) -> Vec<f32> {
    let total: f32 = naturals.iter().sum();
    if total <= 0.0 || naturals.is_empty() {
        return vec![0.0; naturals.len()];
    }

    let available = available.max(0.0).floor();
    let scale = available / total;
    let mut sizes: Vec<f32> = naturals.iter().map(|n| (n * scale).floor()).collect();

    let used: f32 = sizes.iter().sum();
    let leftover = ((available - used).max(0.0) as usize).min(sizes.len());
    for size in sizes.iter_mut().take(leftover) {
        *size += 1.0;
    }

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribute_even() {
        assert_eq!(distribute(250.0, 2), vec![125.0, 125.0]);
        assert_eq!(distribute(300.0, 3), vec![100.0, 100.0, 100.0]);
    }

    #[test]
    fn test_distribute_remainder_goes_first() {
        assert_eq!(distribute(301.0, 2), vec![151.0, 150.0]);
        assert_eq!(distribute(11.0, 4), vec![3.0, 3.0, 3.0, 2.0]);
    }

    #[test]
    fn test_distribute_drops_fraction() {
        let shares = distribute(10.75, 3);
        assert_eq!(shares, vec![4.0, 3.0, 3.0]);
        assert_eq!(shares.iter().sum::<f32>(), 10.0);
    }

    #[test]
    fn test_distribute_degenerate() {
        assert!(distribute(100.0, 0).is_empty());
        assert_eq!(distribute(-5.0, 2), vec![0.0, 0.0]);
        assert_eq!(distribute(1.0, 3), vec![1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_compress_proportional() {
        assert_eq!(compress(&[100.0, 100.0], 100.0), vec![50.0, 50.0]);
        assert_eq!(compress(&[200.0, 100.0], 150.0), vec![100.0, 50.0]);
    }

    #[test]
    fn test_compress_fills_available() {
        let sizes = compress(&[10.0, 10.0, 10.0], 20.0);
        // 6.66 each floors to 6, two spare pixels go to the first two.
        assert_eq!(sizes, vec![7.0, 7.0, 6.0]);
        assert_eq!(sizes.iter().sum::<f32>(), 20.0);
    }

    #[test]
    fn test_compress_zero_total() {
        assert_eq!(compress(&[0.0, 0.0], 50.0), vec![0.0, 0.0]);
    }
}
