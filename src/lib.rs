//! # swegrid
//!
//! Coordinate conversion between geodetic coordinates (latitude and longitude)
//! and the Swedish national grids, RT 90 and SWEREF 99, by the Gauss-Krüger projection
//! which Lantmäteriet (the Swedish mapping authority) publishes [^1].
//!
//! ```
//! use swegrid::{geodetic_to_grid, grid_to_geodetic, CoordinateSystem, Result};
//!
//! fn main() -> Result<()> {
//!     // Looks up the parameters of the grid
//!     let system = CoordinateSystem::lookup("sweref99tm")?;
//!
//!     // Projects 60°N 16°E onto the grid
//!     let grid = geodetic_to_grid(60.0, 16.0, &system);
//!     // Prints Grid: GridCoordinate { northing: 6651832.735314947, easting: 555776.2667522328 }
//!     println!("Grid: {grid:?}");
//!
//!     // and back to latitude and longitude
//!     let coord = grid_to_geodetic(grid.northing, grid.easting, &system);
//!     assert!((coord.latitude - 60.0).abs() < 1e-9);
//!     assert!((coord.longitude - 16.0).abs() < 1e-9);
//!
//!     Ok(())
//! }
//! ```
//!
//! Features:
//!
//! - Supports both forward (geodetic to grid) and inverse (grid to geodetic) projection
//! - Supports all grids of [SWEREF 99] (TM and the twelve local zones 12 00 to 23 15)
//!   and the six zones of [RT 90] (7.5 gon V to 5.0 gon O)
//!   - For example, SWEREF 99 to SWEREF 99 TM ([EPSG:4619] to [EPSG:3006])
//!     and SWEREF 99 to RT 90 2.5 gon V ([EPSG:4619] to [EPSG:3021])
//! - Supports user-defined Gauss-Krüger projections by [`CoordinateSystem`]
//! - Supports DMS notation of the latitude and longitude, see [`dms`]
//! - Clean implementation, it depends on [`thiserror`][thiserror] only
//!   - It depends on [`serde`][serde] crate only if `serde` feature on
//!
//! [SWEREF 99]: https://epsg.io/4619
//! [RT 90]: https://epsg.io/4124
//!
//! [EPSG:4619]: https://epsg.io/4619
//! [EPSG:3006]: https://epsg.io/3006
//! [EPSG:3021]: https://epsg.io/3021
//!
//! [thiserror]: https://crates.io/crates/thiserror
//! [serde]: https://crates.io/crates/serde
//!
//! The RT 90 grids take SWEREF 99 latitude and longitude,
//! the projection parameters absorb the datum shift.
//! The zones on the Bessel 1841 ellipsoid, such as `bessel_rt90_2.5_gon_v`,
//! take latitude and longitude of the RT 90 datum itself.
//!
//! The `fma` feature makes the evaluation of the series use the fused multiply-add.
//!
//! # Serialization and Deserialization
//!
//! It supports (de)serialization by [`serde` crate](https://crates.io/crates/serde)
//! for all `struct` and [`System`] only if the feature `serde` is enabled.
//! [`System`] is (de)serialized as its identifier.
//! We show a (de)serialization example to/from json;
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # {
//! use serde_json;
//! use swegrid::{CoordinateSystem, GridCoordinate, System};
//!
//! # fn run() -> serde_json::Result<()> {
//!     let system = System::SWEREF99_1330;
//!
//!     // Serialize to json
//!     let json = serde_json::to_string(&system)?;
//!     assert_eq!(json, r#""sweref991330""#);
//!
//!     // Deserialize from json
//!     let result: System = serde_json::from_str(&json)?;
//!     assert_eq!(result, system);
//!
//!     let json = serde_json::to_string(&GridCoordinate::new(7000000.0, 150000.0))?;
//!     assert_eq!(json, r#"{"northing":7000000.0,"easting":150000.0}"#);
//!
//!     // A custom projection
//!     let json = r#"{
//!         "semi_major_axis": 6378137.0,
//!         "flattening": 0.003352810681182319,
//!         "central_meridian": 13.5,
//!         "latitude_of_origin": 0.0,
//!         "scale_factor": 1.0,
//!         "false_easting": 150000.0,
//!         "false_northing": 0.0
//!     }"#;
//!     let result: CoordinateSystem = serde_json::from_str(json)?;
//!     assert_eq!(result, system.parameters());
//!
//!     Ok(())
//! # }
//! # run().unwrap();
//! # }
//! ```
//!
//! [^1]: Lantmäteriet: <https://www.lantmateriet.se/>,
//!       see _Gauss Conformal Projection (Transverse Mercator), Krüger's Formulas_.

#[doc(inline)]
pub use coordinate::{GeodeticCoordinate, GridCoordinate};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use projection::{geodetic_to_grid, grid_to_geodetic};
#[doc(inline)]
pub use system::{CoordinateSystem, System};

pub mod coordinate;
pub mod dms;
pub mod ellipsoid;
pub mod error;
mod internal;
pub mod projection;
pub mod system;
