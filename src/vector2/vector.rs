use std::fmt::{self, Display, Formatter};

use float_cmp::{ApproxEq, F64Margin};

use crate::vec_error::{Vec2Error, Vec2ErrorKind};

/// point or direction in 2D space
///
/// Operations return new values and leave their operands untouched; only the
/// `set_*` methods mutate in place.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

#[allow(clippy::should_implement_trait)]
impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn set_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// exact comparison of both components, same as `==`
    pub fn equals(&self, other: &Vector2) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// component-wise comparison within `margin`
    pub fn approx_eq(&self, other: &Vector2, margin: F64Margin) -> bool {
        self.x.approx_eq(other.x, margin) && self.y.approx_eq(other.y, margin)
    }

    pub fn add(self, v: Vector2) -> Vector2 {
        Vector2::new(self.x + v.x, self.y + v.y)
    }

    /// `self - v`
    pub fn sub(self, v: Vector2) -> Vector2 {
        Vector2::new(self.x - v.x, self.y - v.y)
    }

    pub fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }

    /// Divide both components by `scalar`.
    ///
    /// A zero divisor (either sign) is rejected with
    /// [`Vec2ErrorKind::DivisionByZero`]. NaN and infinite divisors are
    /// accepted and follow IEEE-754.
    pub fn div(self, scalar: f64) -> Result<Vector2, Vec2Error> {
        if scalar == 0.0 {
            log::warn!("refuse to divide {} by zero", self);
            return Err(vec2_err!(
                Vec2ErrorKind::DivisionByZero,
                &format!("can not divide {} by zero", self)
            ));
        }
        Ok(Vector2::new(self.x / scalar, self.y / scalar))
    }

    pub fn dot(self, v: Vector2) -> f64 {
        self.x * v.x + self.y * v.y
    }

    pub fn unpack(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

// shortest round-trip form, integral values without a decimal point
fn fmt_component(v: f64, f: &mut Formatter<'_>) -> fmt::Result {
    if v == f64::INFINITY {
        write!(f, "Infinity")
    } else if v == f64::NEG_INFINITY {
        write!(f, "-Infinity")
    } else if v == 0.0 {
        // -0 prints as 0
        write!(f, "0")
    } else if v.abs() >= 1e21 || v.abs() < 1e-6 {
        // exponent form outside [1e-6, 1e21), sign always written
        let exp = format!("{:e}", v);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, power)
            }
            _ => write!(f, "{}", exp),
        }
    } else {
        write!(f, "{}", v)
    }
}

impl Display for Vector2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2(")?;
        fmt_component(self.x, f)?;
        write!(f, ", ")?;
        fmt_component(self.y, f)?;
        write!(f, ")")
    }
}
