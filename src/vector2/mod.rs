mod direction;
mod geometry;
mod ops;
mod vector;

pub use self::vector::*;
