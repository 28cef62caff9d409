use super::Vector2;

impl Vector2 {
    /// euclidean length, never negative
    pub fn length(self) -> f64 {
        self.sqr_length().sqrt()
    }

    /// squared length, for comparing lengths without a sqrt
    pub fn sqr_length(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Unit vector with the same direction.
    ///
    /// A zero length vector normalizes to `(0, 0)`.
    pub fn norm(self) -> Vector2 {
        let len = self.length();
        if len == 0.0 {
            log::trace!("normalize zero length vector {}", self);
            return Vector2::ZERO;
        }
        Vector2::new(self.x / len, self.y / len)
    }

    /// angle to the positive x axis in radians, in `[-π, π]`
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Unsigned angle between `self` and `v` in radians, in `[0, π]`.
    ///
    /// NaN if either vector has zero length.
    pub fn angle_to(self, v: Vector2) -> f64 {
        let cos_theta = self.dot(v) / (self.length() * v.length());
        // rounding can land just outside [-1, 1] for parallel vectors
        cos_theta.clamp(-1.0, 1.0).acos()
    }

    pub fn distance(self, v: Vector2) -> f64 {
        self.sub(v).length()
    }

    /// component-wise maximum
    pub fn max(self, v: Vector2) -> Vector2 {
        Vector2::new(self.x.max(v.x), self.y.max(v.y))
    }

    /// component-wise minimum
    pub fn min(self, v: Vector2) -> Vector2 {
        Vector2::new(self.x.min(v.x), self.y.min(v.y))
    }

    /// Reflect across `normal`, which must already be unit length.
    pub fn reflect(self, normal: Vector2) -> Vector2 {
        self.sub(normal.mul(2.0 * self.dot(normal)))
    }

    /// Linear interpolation toward `v`. `t` is not clamped, values outside
    /// `[0, 1]` extrapolate.
    pub fn lerp(self, v: Vector2, t: f64) -> Vector2 {
        self.add(v.sub(self).mul(t))
    }

    /// Step toward `target` by at most `max_distance_delta`.
    ///
    /// Returns `target` once it is within reach. A negative delta moves away
    /// from `target`.
    pub fn move_toward(self, target: Vector2, max_distance_delta: f64) -> Vector2 {
        let to_target = target.sub(self);
        let distance = to_target.length();
        if distance <= max_distance_delta || distance == 0.0 {
            return target;
        }
        let dir = Vector2::new(to_target.x / distance, to_target.y / distance);
        self.add(dir.mul(max_distance_delta))
    }
}

#[cfg(test)]
mod test_geometry {
    use super::*;
    use float_cmp::{ApproxEq, F64Margin};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_length() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.sqr_length(), 25.0);
        assert_eq!(Vector2::new(-3.0, -4.0).length(), 5.0);
        assert_eq!(Vector2::ZERO.length(), 0.0);
    }

    #[test]
    fn test_norm() {
        let n = Vector2::new(3.0, 4.0).norm();
        assert!(n.x.approx_eq(0.6, F64Margin::default()));
        assert!(n.y.approx_eq(0.8, F64Margin::default()));
        assert!(n.length().approx_eq(1.0, F64Margin::default()));

        assert_eq!(Vector2::ZERO.norm(), Vector2::ZERO);
        assert_eq!(Vector2::new(0.0, -7.0).norm(), Vector2::TOP);
    }

    #[test]
    fn test_angle() {
        assert!(Vector2::new(0.0, 1.0).angle().approx_eq(FRAC_PI_2, F64Margin::default()));
        assert!(Vector2::new(1.0, 1.0).angle().approx_eq(FRAC_PI_4, F64Margin::default()));
        assert!(Vector2::new(0.0, -1.0).angle().approx_eq(-FRAC_PI_2, F64Margin::default()));
        assert_eq!(Vector2::new(-1.0, 0.0).angle(), PI);
    }

    #[test]
    fn test_angle_to() {
        let a = Vector2::new(1.0, 0.0).angle_to(Vector2::new(0.0, 1.0));
        assert!(a.approx_eq(FRAC_PI_2, F64Margin::default()));

        // unsigned
        let a = Vector2::new(1.0, 0.0).angle_to(Vector2::new(0.0, -1.0));
        assert!(a.approx_eq(FRAC_PI_2, F64Margin::default()));

        let a = Vector2::new(2.0, 0.0).angle_to(Vector2::new(-5.0, 0.0));
        assert!(a.approx_eq(PI, F64Margin::default()));

        assert!(Vector2::ZERO.angle_to(Vector2::RIGHT).is_nan());
        assert!(Vector2::RIGHT.angle_to(Vector2::ZERO).is_nan());
    }

    #[test]
    fn test_angle_to_parallel() {
        let a = Vector2::new(0.7000000000000001, 2.1);
        assert_eq!(a.angle_to(Vector2::new(2.1, 6.300000000000001)), 0.0);
        assert_eq!(a.angle_to(Vector2::new(-2.1, -6.300000000000001)), PI);

        // acos is steep near ±1, a few ulps of cosine error is ~1e-8 rad
        let margin = F64Margin { epsilon: 1e-6, ulps: 4 };
        for i in 1..200 {
            let a = Vector2::new(0.1 * i as f64, 0.3 * i as f64);
            let same = a.angle_to(a.mul(3.0));
            let opposite = a.angle_to(a.mul(-1.0));
            assert!(same.approx_eq(0.0, margin));
            assert!(opposite.approx_eq(PI, margin));
        }
    }

    #[test]
    fn test_distance() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_max_min() {
        let v1 = Vector2::new(1.0, 5.0);
        let v2 = Vector2::new(3.0, 2.0);
        assert_eq!(v1.max(v2), Vector2::new(3.0, 5.0));
        assert_eq!(v1.min(v2), Vector2::new(1.0, 2.0));

        // NaN component takes the other side
        let nan = Vector2::new(f64::NAN, 0.0);
        assert_eq!(nan.max(v1), Vector2::new(1.0, 5.0));
    }

    #[test]
    fn test_reflect() {
        let r = Vector2::new(1.0, -1.0).reflect(Vector2::new(0.0, 1.0));
        assert_eq!(r, Vector2::new(1.0, 1.0));

        let r = Vector2::new(2.0, 3.0).reflect(Vector2::LEFT);
        assert_eq!(r, Vector2::new(-2.0, 3.0));

        // non-unit normal is not normalized
        let r = Vector2::new(1.0, -1.0).reflect(Vector2::new(0.0, 2.0));
        assert_eq!(r, Vector2::new(1.0, 7.0));
    }

    #[test]
    fn test_lerp() {
        let a = Vector2::ZERO;
        let b = Vector2::new(10.0, 10.0);
        assert_eq!(a.lerp(b, 0.5), Vector2::new(5.0, 5.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 2.0), Vector2::new(20.0, 20.0));
        assert_eq!(a.lerp(b, -0.5), Vector2::new(-5.0, -5.0));
    }

    #[test]
    fn test_move_toward() {
        let origin = Vector2::ZERO;
        let far = Vector2::new(10.0, 0.0);
        let near = Vector2::new(3.0, 0.0);
        assert_eq!(origin.move_toward(far, 5.0), Vector2::new(5.0, 0.0));
        assert_eq!(origin.move_toward(near, 5.0), near);
        assert_eq!(origin.move_toward(near, 3.0), near);
        assert_eq!(origin.move_toward(origin, 0.0), origin);

        let moved = origin.move_toward(Vector2::new(3.0, 4.0), 2.5);
        assert!(moved.approx_eq(&Vector2::new(1.5, 2.0), F64Margin::default()));

        // negative delta moves away
        assert_eq!(origin.move_toward(far, -2.0), Vector2::new(-2.0, 0.0));
    }
}
