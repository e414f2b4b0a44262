//! Move the catalog origin onto a chosen star and keep only the stars that
//! would be visible from there.

use tracing::info;

use crate::error::StarNotFound;
use crate::{StarCatalog, StarRecord};

/// Apparent magnitude of a star with absolute magnitude `absolute` seen from
/// `distance` parsecs (distance modulus).
///
/// A zero distance yields negative infinity: the star is infinitely bright.
pub fn apparent_magnitude(absolute: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return f64::NEG_INFINITY;
    }
    5.0 * (distance / 10.0).log10() + absolute
}

/// Recenter `catalog` on the star named `center` and drop everything dimmer
/// than `max_magnitude`.
///
/// The returned catalog is a new snapshot: positions are relative to the
/// center star and `magnitude` holds the apparent magnitude from there. The
/// center star itself is not included. A star whose apparent magnitude equals
/// the cutoff is kept. A star sharing the center's position is always kept.
///
/// `catalog` must hold absolute magnitudes, i.e. it must not have been
/// recentered already.
pub fn recenter(
    catalog: &StarCatalog,
    center: &str,
    max_magnitude: f64,
) -> Result<StarCatalog, StarNotFound> {
    let center_star = catalog.find_by_name(center).ok_or_else(|| StarNotFound {
        name: center.to_string(),
    })?;
    let origin = center_star.position;

    let recentered: StarCatalog = catalog
        .iter()
        .filter(|star| star.id != center_star.id)
        .filter_map(|star| {
            let position = star.position - origin;
            let magnitude = apparent_magnitude(star.magnitude as f64, position.norm());
            if magnitude > max_magnitude {
                return None;
            }
            Some(StarRecord {
                position,
                magnitude: magnitude as f32,
                ..star.clone()
            })
        })
        .collect();

    info!(
        "Recentered on {} (id {}): kept {} of {} stars brighter than magnitude {:.1}",
        center,
        center_star.id,
        recentered.len(),
        catalog.len().saturating_sub(1),
        max_magnitude
    );
    Ok(recentered)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{Rgb, Vector3};

    fn star(id: u32, name: &str, pos: [f64; 3], mag: f32) -> StarRecord {
        StarRecord {
            id,
            names: name.split('|').map(str::to_string).collect(),
            position: Vector3::new(pos[0], pos[1], pos[2]),
            magnitude: mag,
            color: Rgb::new(255, 255, 255),
        }
    }

    fn neighborhood() -> StarCatalog {
        StarCatalog::from_stars(vec![
            star(1, "Sol", [0.0, 0.0, 0.0], 4.8),
            star(2, "Alpha", [10.0, 0.0, 0.0], 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn distance_modulus() {
        assert_abs_diff_eq!(apparent_magnitude(1.0, 10.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(apparent_magnitude(1.0, 100.0), 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(apparent_magnitude(4.83, 1.0), -0.17, epsilon = 1e-12);
        assert_eq!(apparent_magnitude(4.83, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn recentering_on_sol_keeps_alpha() {
        let out = recenter(&neighborhood(), "Sol", 6.0).unwrap();
        assert_eq!(out.len(), 1);
        assert!(out.get(1).is_none());

        let alpha = out.get(2).unwrap();
        assert_eq!(alpha.position, Vector3::new(10.0, 0.0, 0.0));
        assert_abs_diff_eq!(alpha.distance(), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(alpha.magnitude, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn unknown_center_reports_name() {
        let err = recenter(&neighborhood(), "Jupiter", 6.0).unwrap_err();
        assert_eq!(err.name, "Jupiter");
    }

    #[test]
    fn positions_shift_and_dim_stars_drop() {
        let catalog = StarCatalog::from_stars(vec![
            star(1, "Sol", [0.0, 0.0, 0.0], 4.8),
            star(2, "Alpha", [10.0, 0.0, 0.0], 1.0),
            star(3, "Far|Dim", [0.0, 0.0, 1000.0], 4.0),
        ])
        .unwrap();

        let out = recenter(&catalog, "Alpha", 6.0).unwrap();
        // Sol at 10 pc keeps its absolute magnitude; Far at ~1000 pc is at 14.
        assert_eq!(out.ids().collect::<Vec<_>>(), vec![1]);
        let sol = out.get(1).unwrap();
        assert_eq!(sol.position, Vector3::new(-10.0, 0.0, 0.0));
        assert_abs_diff_eq!(sol.magnitude, 4.8, epsilon = 1e-6);

        // The input snapshot is untouched.
        assert_eq!(catalog.get(1).unwrap().position, Vector3::zeros());
        assert_eq!(catalog.get(3).unwrap().magnitude, 4.0);

        // Matching works on any designation.
        let out = recenter(&catalog, "Dim", 20.0).unwrap();
        assert_eq!(out.len(), 2);
        assert!(!out.contains(3));
    }

    #[test]
    fn cutoff_is_inclusive() {
        let catalog = StarCatalog::from_stars(vec![
            star(1, "Sol", [0.0, 0.0, 0.0], 4.8),
            star(2, "Edge", [0.0, 10.0, 0.0], 5.5),
            star(3, "Over", [0.0, -10.0, 0.0], 5.5001),
        ])
        .unwrap();
        let out = recenter(&catalog, "Sol", 5.5_f32 as f64).unwrap();
        assert!(out.contains(2));
        assert!(!out.contains(3));
    }

    #[test]
    fn coincident_star_is_always_kept() {
        let catalog = StarCatalog::from_stars(vec![
            star(1, "Primary", [3.0, 4.0, 5.0], 4.8),
            star(2, "Companion", [3.0, 4.0, 5.0], 30.0),
        ])
        .unwrap();
        let out = recenter(&catalog, "Primary", -5.0).unwrap();
        let companion = out.get(2).unwrap();
        assert_eq!(companion.position, Vector3::zeros());
        assert_eq!(companion.magnitude, f32::NEG_INFINITY);
    }
}
