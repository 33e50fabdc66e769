//! Spatially clustered spawn positions
//!
//! Item groups spawn around centroids so debris arrives in rafts rather
//! than an even sprinkle. Centroid seeds are drawn uniformly inside the
//! spawn region, relaxed once by a single partition-and-average pass over
//! a scatter sample, then each centroid emits its share of jittered
//! positions. The relaxation is one-shot and offline; there is no
//! iterative clustering service behind it.

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use crate::consts::ITEM_SIZE;

/// Scatter samples per cluster used by the relaxation pass
const SCATTER_PER_CLUSTER: usize = 4;

/// Generate `total_items / cluster_count` positions per cluster inside
/// `region`. Integer division truncates: a total that does not divide
/// evenly yields fewer positions. Emitted positions may overlap each
/// other; overlap is what lets debris pin against obstacles.
///
/// `cluster_count` must be at least 1.
pub fn clustered_positions(
    rng: &mut impl Rng,
    cluster_count: usize,
    total_items: usize,
    region: Rect,
) -> Vec<Vec2> {
    debug_assert!(cluster_count >= 1, "cluster_count must be >= 1");

    let centroids = relaxed_centroids(rng, cluster_count, region);

    let per_cluster = total_items / cluster_count;
    let mut positions = Vec::with_capacity(per_cluster * cluster_count);
    for centroid in &centroids {
        for _ in 0..per_cluster {
            let offset = Vec2::new(
                rng.random_range(-ITEM_SIZE..ITEM_SIZE),
                rng.random_range(-ITEM_SIZE..ITEM_SIZE),
            );
            positions.push(*centroid + offset);
        }
    }
    positions
}

/// Sample `cluster_count` centroid seeds uniformly in `region` and relax
/// them with one partition pass: scatter points are assigned to their
/// nearest seed and each seed moves to the mean of its assignment. Means
/// of in-region points stay in-region, so relaxed centroids never leave
/// the spawn band.
fn relaxed_centroids(rng: &mut impl Rng, cluster_count: usize, region: Rect) -> Vec<Vec2> {
    let seeds: Vec<Vec2> = (0..cluster_count).map(|_| uniform_in(rng, region)).collect();
    let scatter: Vec<Vec2> = (0..cluster_count * SCATTER_PER_CLUSTER)
        .map(|_| uniform_in(rng, region))
        .collect();

    let mut sums = vec![Vec2::ZERO; cluster_count];
    let mut counts = vec![0u32; cluster_count];
    for point in &scatter {
        let nearest = nearest_seed(&seeds, *point);
        sums[nearest] += *point;
        counts[nearest] += 1;
    }

    seeds
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            if counts[i] > 0 {
                sums[i] / counts[i] as f32
            } else {
                *seed
            }
        })
        .collect()
}

fn nearest_seed(seeds: &[Vec2], point: Vec2) -> usize {
    let mut best = 0;
    let mut best_dist = f32::MAX;
    for (i, seed) in seeds.iter().enumerate() {
        let dist = seed.distance_squared(point);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

fn uniform_in(rng: &mut impl Rng, region: Rect) -> Vec2 {
    crate::lerp_point(region.min(), region.max(), rng.random::<f32>(), rng.random::<f32>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spawn_region() -> Rect {
        // Right half of the play area, water band only
        Rect::new(400.0, 200.0, 400.0, 400.0)
    }

    #[test]
    fn test_even_division_yields_exact_count() {
        let mut rng = Pcg32::seed_from_u64(42);
        let positions = clustered_positions(&mut rng, 3, 9, spawn_region());
        assert_eq!(positions.len(), 9);
    }

    #[test]
    fn test_uneven_division_truncates() {
        let mut rng = Pcg32::seed_from_u64(42);
        // 10 / 3 == 3 per cluster -> 9 positions, one short of the request
        let positions = clustered_positions(&mut rng, 3, 10, spawn_region());
        assert_eq!(positions.len(), 9);
    }

    #[test]
    fn test_centroids_stay_in_region() {
        let region = spawn_region();
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            for centroid in relaxed_centroids(&mut rng, 3, region) {
                assert!(centroid.x >= region.x && centroid.x <= region.right());
                assert!(centroid.y >= region.y && centroid.y <= region.bottom());
            }
        }
    }

    #[test]
    fn test_jitter_stays_within_item_size_of_centroid() {
        let region = spawn_region();
        let mut rng = Pcg32::seed_from_u64(7);
        let centroids = relaxed_centroids(&mut rng, 1, region);
        let mut rng = Pcg32::seed_from_u64(7);
        let positions = clustered_positions(&mut rng, 1, 20, region);
        for pos in positions {
            let d = pos - centroids[0];
            assert!(d.x >= -ITEM_SIZE && d.x < ITEM_SIZE);
            assert!(d.y >= -ITEM_SIZE && d.y < ITEM_SIZE);
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        let pa = clustered_positions(&mut a, 3, 9, spawn_region());
        let pb = clustered_positions(&mut b, 3, 9, spawn_region());
        assert_eq!(pa, pb);
    }
}
