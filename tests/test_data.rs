//! Shared catalog fixtures for the integration tests.
//!
//! Builds neighborhood catalogs in memory and encodes them with the binary
//! layout, so tests exercise the same decode path as a real `starMap.data`.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skygen::{encode_catalog, Rgb, StarCatalog, StarRecord, Vector3};

pub fn star(id: u32, names: &str, pos: [f64; 3], mag: f32, rgb: [u8; 3]) -> StarRecord {
    StarRecord {
        id,
        names: names.split('|').map(str::to_string).collect(),
        position: Vector3::new(pos[0], pos[1], pos[2]),
        magnitude: mag,
        color: Rgb::new(rgb[0], rgb[1], rgb[2]),
    }
}

/// A handful of real nearby stars (positions in parsecs, approximate).
pub fn local_neighborhood() -> StarCatalog {
    StarCatalog::from_stars(vec![
        star(0, "Sol", [0.0, 0.0, 0.0], 4.85, [255, 245, 230]),
        star(
            70890,
            "Proxima Centauri|Alp Cen C",
            [-0.472, -0.361, -1.151],
            15.53,
            [255, 180, 120],
        ),
        star(
            71683,
            "Rigil Kentaurus|Alp Cen A",
            [-0.495, -0.414, -1.157],
            4.38,
            [255, 240, 220],
        ),
        star(32349, "Sirius|Alp CMa", [-0.494, 2.477, -0.758], 1.45, [200, 215, 255]),
        star(91262, "Vega|Alp Lyr", [1.004, -5.904, 4.697], 0.58, [190, 205, 255]),
        star(11767, "Polaris|Alp UMi", [4.1, 3.2, 132.7], -3.6, [255, 250, 235]),
        star(27989, "Betelgeuse|Alp Ori", [4.4, 152.0, 22.0], -5.85, [255, 160, 90]),
    ])
    .expect("fixture ids are unique")
}

/// `count` stars scattered in a cube of half-width `extent` parsecs, with the
/// first star named "Center" at the origin.
pub fn random_neighborhood(seed: u64, count: u32, extent: f64) -> StarCatalog {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stars = vec![star(1, "Center", [0.0, 0.0, 0.0], 4.8, [255, 255, 255])];
    for id in 2..=count {
        let pos = [
            rng.random_range(-extent..extent),
            rng.random_range(-extent..extent),
            rng.random_range(-extent..extent),
        ];
        let mag = rng.random_range(-5.0..15.0) as f32;
        let rgb = [rng.random(), rng.random(), rng.random()];
        stars.push(star(id, &format!("Star {id}|S{id}"), pos, mag, rgb));
    }
    StarCatalog::from_stars(stars).expect("fixture ids are unique")
}

pub fn catalog_bytes(catalog: &StarCatalog) -> Vec<u8> {
    encode_catalog(catalog).expect("fixture names fit in a record")
}
