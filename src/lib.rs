//! # skygen
//!
//! Night-sky generator for planets around other stars.
//!
//! Given a catalog of the stellar neighborhood, `skygen` moves the origin onto
//! any named star, recomputes every other star's apparent magnitude from
//! there, rotates the sky into the frame of a planet orbiting that star, and
//! projects the result onto an equirectangular map and two polar maps. Drawing
//! the maps is left to the caller; this crate produces pixel positions, dot
//! sizes, colors and labels.
//!
//! ## Example
//!
//! ```no_run
//! use skygen::{SkyConfig, SkySession, OrientationParams};
//!
//! let session = SkySession::load_from_file("data/starMap.data").unwrap();
//!
//! let config = SkyConfig {
//!     center_star: "Rigil Kentaurus".to_string(),
//!     orientation: OrientationParams {
//!         axial_tilt: 25.0_f64.to_radians(),
//!         inclination: 2.0_f64.to_radians(),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let sky = session.generate(&config).unwrap();
//! for star in sky.labeled() {
//!     println!("{:?} at {:?}", star.label, star.wide);
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. **Decode**: read the binary neighborhood catalog ([`catalogs`])
//! 2. **Recenter**: shift positions onto the chosen star and drop stars
//!    dimmer than the cutoff ([`recenter`])
//! 3. **Orient**: compose the planet's four angles into one [`Rotor`]
//!    ([`orientation`])
//! 4. **Rotate**: apply the rotor to every star
//! 5. **Project**: RA/Dec, map pixels and dot size per star ([`projection`],
//!    [`skymap`])

pub mod catalogs;
pub mod config;
pub mod error;
pub mod orientation;
pub mod projection;
pub mod recenter;
pub mod rotor;
pub mod session;
pub mod skymap;
pub mod star;
pub mod starcatalog;

pub use catalogs::{decode_catalog, encode_catalog, load_catalog_from_file, write_catalog};
pub use config::{parse_angle, MapGeometry, SkyConfig, DEFAULT_LABELS};
pub use error::{AngleParseError, DecodeError, EncodeError, SkyError, SkyResult, StarNotFound};
pub use orientation::{OrientationParams, EARTH_AXIAL_TILT};
pub use projection::Hemisphere;
pub use rotor::Rotor;
pub use session::{Recentered, RotatedSky, SkySession};
pub use skymap::{ProjectedStar, SkyMap};
pub use star::*;
pub use starcatalog::*;

// Positions stay in f64 end to end; catalog distances span several orders of
// magnitude and the recentering subtraction loses precision in f32.
pub type Vector3 = nalgebra::Vector3<f64>;
