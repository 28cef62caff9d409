use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Vector2;

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, other: Vector2) -> Self::Output {
        Vector2::add(self, other)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, other: Vector2) -> Self::Output {
        Vector2::sub(self, other)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, o: f64) -> Self::Output {
        Vector2::mul(self, o)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    fn mul(self, v: Vector2) -> Self::Output {
        Vector2::mul(v, self)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Vector2) {
        *self = Vector2::add(*self, other);
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Vector2) {
        *self = Vector2::sub(*self, other);
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, o: f64) {
        *self = Vector2::mul(*self, o);
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        v.unpack()
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        [v.x, v.y]
    }
}
