use super::Vector2;

// screen space directions, y grows downward
impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    pub const TOP: Vector2 = Vector2 { x: 0.0, y: -1.0 };
    pub const LEFT: Vector2 = Vector2 { x: -1.0, y: 0.0 };
    pub const RIGHT: Vector2 = Vector2 { x: 1.0, y: 0.0 };
    pub const DOWN: Vector2 = Vector2 { x: 0.0, y: 1.0 };
}
