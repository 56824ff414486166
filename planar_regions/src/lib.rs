//! Boolean operations (union, intersection, difference and exclusive or) between multi-polygon
//! regions, computed with a plane sweep.
//!
//! Operands are lists of closed [region::Region] loops filled with the even-odd rule. Input may
//! self intersect, overlap itself, or contain holes given as nested loops, results are always
//! simple, non-overlapping loops.
//!
//! # Examples
//!
//! ```
//! use planar_regions::region;
//! use planar_regions::region::{difference, union, Region};
//!
//! let a: [Region<f64>; 1] = [region![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]];
//! let b = [region![(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]];
//!
//! let u = union(&a, &b).unwrap();
//! assert_eq!(u.len(), 1);
//! assert_eq!(u[0].vertex_count(), 8);
//!
//! let d = difference(&a, &b).unwrap();
//! assert!((d[0].area() - 3.0).abs() < 1e-9);
//! ```

#[macro_use]
mod macros;
pub mod core;
pub mod region;

pub use static_aabb2d_index;
