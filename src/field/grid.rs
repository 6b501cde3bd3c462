use std::fmt;

use rand::Rng;

/// Baseline opacity tiers, picked by `(row + col) % 3`.
const OPACITY_TIERS: [f64; 3] = [0.2, 0.4, 0.6];
/// Fraction of the centre-to-corner distance at which the edge factor saturates.
const FALLOFF_REACH: f64 = 0.7;
/// Upper bound on the keep probability of a cell.
const KEEP_SCALE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointId {
    pub row: u32,
    pub col: u32,
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dot-{}-{}", self.row, self.col)
    }
}

/// One cell of the decorative grid. Immutable once generated.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    id: PointId,
    base: Vec2,
    base_opacity: f64,
}

impl Point {
    pub fn id(&self) -> PointId {
        self.id
    }

    pub fn base(&self) -> Vec2 {
        self.base
    }

    pub fn base_opacity(&self) -> f64 {
        self.base_opacity
    }
}

/// How far a cell sits from the centre, relative to the farthest cell, saturating at 1.
pub fn edge_factor(distance_from_center: f64, max_distance: f64) -> f64 {
    if max_distance <= 0.0 {
        return 0.0;
    }
    (distance_from_center / (max_distance * FALLOFF_REACH)).min(1.0)
}

/// Lays out a `spacing`-pitched lattice over `width` x `height` and keeps each
/// cell with probability `edge_factor * 0.6`.
///
/// The lattice includes both borders, so a 100 x 40 area at spacing 20 has
/// 6 x 3 candidate cells. Draws come from `rng` in row-major order; the same
/// seed and inputs always give the same set.
pub fn generate<R: Rng + ?Sized>(width: f64, height: f64, spacing: f64, rng: &mut R) -> Vec<Point> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(width) || !valid(height) || !valid(spacing) {
        return Vec::new();
    }

    let cols = (width / spacing).ceil() as u32;
    let rows = (height / spacing).ceil() as u32;
    let center = Vec2::new(width / 2.0, height / 2.0);
    let max_distance = center.length();

    let mut points = Vec::new();
    for row in 0..=rows {
        for col in 0..=cols {
            let base = Vec2::new(col as f64 * spacing, row as f64 * spacing);
            let offset = Vec2::new(base.x - center.x, base.y - center.y);
            let edge = edge_factor(offset.length(), max_distance);

            // kept when the draw lands at or below the keep threshold
            if rng.gen::<f64>() > edge * KEEP_SCALE {
                continue;
            }

            let tier = OPACITY_TIERS[((row + col) % 3) as usize];
            points.push(Point {
                id: PointId { row, col },
                base,
                base_opacity: tier * edge,
            });
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_degenerate_sizes_are_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(generate(0.0, 100.0, 20.0, &mut rng).is_empty());
        assert!(generate(100.0, 0.0, 20.0, &mut rng).is_empty());
        assert!(generate(100.0, 100.0, 0.0, &mut rng).is_empty());
        assert!(generate(-5.0, 100.0, 20.0, &mut rng).is_empty());
        assert!(generate(f64::NAN, 100.0, 20.0, &mut rng).is_empty());
    }

    #[test]
    fn test_same_seed_same_points() {
        let a = generate(640.0, 280.0, 20.0, &mut ChaCha8Rng::seed_from_u64(42));
        let b = generate(640.0, 280.0, 20.0, &mut ChaCha8Rng::seed_from_u64(42));
        assert!(!a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn test_points_stay_on_lattice() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let points = generate(100.0, 40.0, 20.0, &mut rng);
        for p in &points {
            let PointId { row, col } = p.id();
            assert!(row <= 2 && col <= 5, "{} outside lattice", p.id());
            assert_eq!(p.base(), Vec2::new(col as f64 * 20.0, row as f64 * 20.0));
            assert!((0.0..=0.6).contains(&p.base_opacity()));
        }
    }

    #[test]
    fn test_ids_unique() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let points = generate(800.0, 300.0, 20.0, &mut rng);
        let mut ids = points.iter().map(|p| p.id()).collect::<Vec<_>>();
        ids.sort_by_key(|id| (id.row, id.col));
        ids.dedup();
        assert_eq!(ids.len(), points.len());
    }

    #[test]
    fn test_center_cell_never_kept() {
        // edge factor is 0 at the exact centre, so the keep threshold is 0
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let points = generate(40.0, 40.0, 20.0, &mut rng);
            assert!(points.iter().all(|p| p.id() != PointId { row: 1, col: 1 }));
        }
    }

    #[test]
    fn test_retention_follows_edge_factor() {
        // Keep probability is edge_factor * 0.6, so far cells survive more often
        // than near-centre ones.
        let (w, h, s) = (400.0, 400.0, 20.0);
        let center = Vec2::new(w / 2.0, h / 2.0);
        let max_distance = center.length();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let (mut inner, mut outer) = (0usize, 0usize);
        for _ in 0..200 {
            for p in generate(w, h, s, &mut rng) {
                let d = Vec2::new(p.base().x - center.x, p.base().y - center.y).length();
                if d < max_distance * 0.25 {
                    inner += 1;
                } else if d > max_distance * 0.75 {
                    outer += 1;
                }
            }
        }
        // per-cell rates, normalised by how many lattice cells fall in each band
        let lattice = generate_all(w, h, s);
        let inner_cells = lattice.iter().filter(|d| **d < max_distance * 0.25).count();
        let outer_cells = lattice.iter().filter(|d| **d > max_distance * 0.75).count();
        let inner_rate = inner as f64 / (inner_cells * 200) as f64;
        let outer_rate = outer as f64 / (outer_cells * 200) as f64;
        assert!(outer_rate > inner_rate, "{outer_rate} <= {inner_rate}");
        assert!((outer_rate - 0.6).abs() < 0.05);
    }

    fn generate_all(w: f64, h: f64, s: f64) -> Vec<f64> {
        let center = Vec2::new(w / 2.0, h / 2.0);
        let (cols, rows) = ((w / s).ceil() as u32, (h / s).ceil() as u32);
        (0..=rows)
            .flat_map(|r| (0..=cols).map(move |c| (r, c)))
            .map(|(r, c)| Vec2::new(c as f64 * s - center.x, r as f64 * s - center.y).length())
            .collect()
    }

    #[test]
    fn test_edge_factor_saturates() {
        assert_eq!(edge_factor(0.0, 100.0), 0.0);
        assert!((edge_factor(35.0, 100.0) - 0.5).abs() < 1e-12);
        assert_eq!(edge_factor(70.0, 100.0), 1.0);
        assert_eq!(edge_factor(100.0, 100.0), 1.0);
        assert_eq!(edge_factor(10.0, 0.0), 0.0);
    }
}
