//! 2D vector math
//!
//! A single `f64` value type, [`Vector2`], with the usual vector arithmetic,
//! normalization, angles, interpolation and reflection
//!
//! Division is the only fallible operation, see [`Vector2::div`]
//!
//! ```
//! use vector2d::Vector2;
//!
//! let v = Vector2::new(3.0, 4.0);
//! assert_eq!(v.length(), 5.0);
//! assert_eq!(v.to_string(), "Vector2(3, 4)");
//! assert!(v.div(0.0).is_err());
//! ```

#[macro_use]
pub mod vec_error;
pub mod vector2;

pub use vec_error::{Vec2Error, Vec2ErrorKind};
pub use vector2::Vector2;
