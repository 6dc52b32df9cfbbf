//! Pairwise overlap detection
//!
//! Tests every unordered pair of buffers for intersection and reports the
//! intersecting pairs by name.
//!
//! Pairs are visited in a fixed order: `i` from `0` to `n - 2`, and for each
//! `i`, `j` from `i + 1` to `n - 1`. Exactly `n * (n - 1) / 2` pairs are
//! tested and an index is never paired with itself. There is no spatial
//! index: each pair costs one call to the provider's `intersects`.
//!
//! Whether boundary-only contact counts as overlap is left to the provider.

use geobuffer_core::{Algorithm, Buffer, Error, GeometryProvider, Result};
use std::fmt;
use tracing::{debug, info};

use super::planar::PlanarGeometry;

/// Two buffers whose polygons intersect.
///
/// `first` belongs to the buffer with the lower input index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverlapPair {
    pub first: String,
    pub second: String,
}

impl OverlapPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl fmt::Display for OverlapPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} overlaps with {}", self.first, self.second)
    }
}

/// Overlap detection algorithm over an injected geometry provider
#[derive(Debug, Clone, Default)]
pub struct OverlapDetector<P = PlanarGeometry> {
    provider: P,
}

impl<P: GeometryProvider> OverlapDetector<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: GeometryProvider> Algorithm for OverlapDetector<P> {
    type Input = Vec<Buffer>;
    type Output = Vec<OverlapPair>;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Overlap"
    }

    fn description(&self) -> &'static str {
        "Unordered pairs of buffers whose polygons intersect"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        find_overlaps(&input, &self.provider)
    }
}

/// Number of unordered index pairs among `n` items
pub fn candidate_pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Index pairs `(i, j)` with `i < j < n`, in traversal order
pub fn candidate_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Find every pair of intersecting buffers.
///
/// Pairs are returned in traversal order with the lower-index name first.
/// A provider failure on any pair aborts the pass and no pairs are returned.
///
/// # Arguments
/// * `buffers` - Labeled buffer polygons, in input order
/// * `provider` - Geometry engine answering the `intersects` predicate
///
/// # Returns
/// The intersecting pairs
pub fn find_overlaps<P: GeometryProvider>(
    buffers: &[Buffer],
    provider: &P,
) -> Result<Vec<OverlapPair>> {
    let mut pairs = Vec::new();

    for (i, j) in candidate_pairs(buffers.len()) {
        let (a, b) = (&buffers[i], &buffers[j]);
        if provider.intersects(&a.geometry, &b.geometry)? {
            debug!("{} intersects {}", a.name(), b.name());
            pairs.push(OverlapPair::new(a.name(), b.name()));
        }
    }

    info!(
        "{} of {} candidate pairs overlap",
        pairs.len(),
        candidate_pair_count(buffers.len())
    );
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Geometry, LineString, Polygon};
    use geobuffer_core::make_labeled;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Square tagged with its index through the x coordinate of its first vertex
    fn tagged(index: usize) -> Polygon<f64> {
        let x = index as f64;
        Polygon::new(
            LineString::from(vec![(x, 0.0), (x + 0.5, 0.0), (x + 0.5, 0.5), (x, 0.5), (x, 0.0)]),
            vec![],
        )
    }

    fn tag(polygon: &Polygon<f64>) -> usize {
        polygon.exterior().0[0].x as usize
    }

    fn tagged_buffers(n: usize) -> Vec<Buffer> {
        (0..n)
            .map(|i| make_labeled(format!("site-{}", i), tagged(i)))
            .collect()
    }

    /// Records every predicate call and answers from a fixed rule
    struct Recording<F> {
        rule: F,
        calls: RefCell<Vec<(usize, usize)>>,
    }

    impl<F: Fn(usize, usize) -> Result<bool>> Recording<F> {
        fn new(rule: F) -> Self {
            Self {
                rule,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl<F: Fn(usize, usize) -> Result<bool>> GeometryProvider for Recording<F> {
        fn buffer(&self, _geometry: &Geometry<f64>, _radius: f64) -> Result<Polygon<f64>> {
            Err(Error::Geometry("not used".into()))
        }

        fn intersects(&self, a: &Polygon<f64>, b: &Polygon<f64>) -> Result<bool> {
            let (i, j) = (tag(a), tag(b));
            self.calls.borrow_mut().push((i, j));
            (self.rule)(i, j)
        }
    }

    #[test]
    fn test_candidate_pair_count() {
        assert_eq!(candidate_pair_count(0), 0);
        assert_eq!(candidate_pair_count(1), 0);
        assert_eq!(candidate_pair_count(2), 1);
        assert_eq!(candidate_pair_count(4), 6);
        assert_eq!(candidate_pair_count(10), 45);
    }

    #[test]
    fn test_candidate_pairs_order() {
        let pairs: Vec<_> = candidate_pairs(4).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_examines_each_unordered_pair_once() {
        for n in 0..9 {
            let provider = Recording::new(|_, _| Ok(false));
            find_overlaps(&tagged_buffers(n), &provider).unwrap();

            let calls = provider.calls.into_inner();
            assert_eq!(calls.len(), n * n.saturating_sub(1) / 2, "n = {}", n);
            assert!(calls.iter().all(|&(i, j)| i < j), "self or reversed pair for n = {}", n);

            let distinct: HashSet<_> = calls.iter().copied().collect();
            assert_eq!(distinct.len(), calls.len());
        }
    }

    #[test]
    fn test_all_overlapping_reported_in_traversal_order() {
        let provider = Recording::new(|_, _| Ok(true));
        let pairs = find_overlaps(&tagged_buffers(3), &provider).unwrap();

        assert_eq!(
            pairs,
            vec![
                OverlapPair::new("site-0", "site-1"),
                OverlapPair::new("site-0", "site-2"),
                OverlapPair::new("site-1", "site-2"),
            ]
        );
    }

    #[test]
    fn test_symmetric_overlap_reported_once() {
        // Symmetric rule: 1 and 3 touch each other, nothing else does
        let provider = Recording::new(|i, j| Ok((i, j) == (1, 3) || (i, j) == (3, 1)));
        let pairs = find_overlaps(&tagged_buffers(5), &provider).unwrap();

        assert_eq!(pairs, vec![OverlapPair::new("site-1", "site-3")]);
    }

    #[test]
    fn test_no_buffers_or_single_buffer() {
        let provider = Recording::new(|_, _| Ok(true));
        assert!(find_overlaps(&tagged_buffers(0), &provider).unwrap().is_empty());
        assert!(find_overlaps(&tagged_buffers(1), &provider).unwrap().is_empty());
        assert!(provider.calls.borrow().is_empty());
    }

    #[test]
    fn test_idempotent() {
        let rule = |i: usize, j: usize| -> Result<bool> { Ok((i + j) % 3 == 0) };
        let buffers = tagged_buffers(7);

        let first = find_overlaps(&buffers, &Recording::new(rule)).unwrap();
        let second = find_overlaps(&buffers, &Recording::new(rule)).unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_provider_failure_aborts_pass() {
        let provider = Recording::new(|i, j| {
            if (i, j) == (1, 2) {
                Err(Error::Geometry("invalid polygon".into()))
            } else {
                Ok(true)
            }
        });
        let result = find_overlaps(&tagged_buffers(4), &provider);

        assert!(matches!(result, Err(Error::Geometry(_))));
        // (0,1) (0,2) (0,3) (1,2): nothing after the failing pair is tested
        assert_eq!(provider.calls.borrow().len(), 4);
    }

    #[test]
    fn test_pair_display() {
        let pair = OverlapPair::new("Hospital A", "Hospital B");
        assert_eq!(pair.to_string(), "Hospital A overlaps with Hospital B");
    }

    #[test]
    fn test_overlap_detector_algorithm() {
        // Tagged squares are 0.5 wide at unit spacing: all disjoint
        let detector = OverlapDetector::new(PlanarGeometry::default());
        let pairs = detector.execute_default(tagged_buffers(4)).unwrap();
        assert!(pairs.is_empty());
        assert_eq!(detector.name(), "Overlap");
    }

    #[test]
    fn test_overlap_detector_uses_injected_provider() {
        let detector = OverlapDetector::new(Recording::new(|i, j| Ok(j == i + 1)));
        let pairs = detector.execute_default(tagged_buffers(3)).unwrap();

        assert_eq!(
            pairs,
            vec![
                OverlapPair::new("site-0", "site-1"),
                OverlapPair::new("site-1", "site-2"),
            ]
        );
        assert_eq!(detector.provider.calls.borrow().len(), 3);
    }
}
