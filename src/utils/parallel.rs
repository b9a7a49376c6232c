#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use rayon::prelude::*;

/// Batches smaller than this are not worth spinning up Rayon for.
pub const PARALLEL_THRESHOLD: usize = 256;

/// Maps `f` over `items`, in parallel when the `parallel` feature is on and the
/// batch is large enough. Output order always matches input order.
#[inline]
pub fn map<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    {
        if items.len() > PARALLEL_THRESHOLD {
            return items.par_iter().map(f).collect();
        }
        items.iter().map(f).collect()
    }
    #[cfg(any(not(feature = "parallel"), target_arch = "wasm32"))]
    {
        items.iter().map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keeps_order_above_threshold() {
        let items: Vec<usize> = (0..PARALLEL_THRESHOLD * 4).collect();
        let out = map(&items, |i| i * 2);
        assert_eq!(out.len(), items.len());
        assert!(out.iter().enumerate().all(|(i, v)| *v == i * 2));
    }

    #[test]
    fn test_map_empty() {
        let items: Vec<f64> = Vec::new();
        assert!(map(&items, |x| x + 1.0).is_empty());
    }
}
