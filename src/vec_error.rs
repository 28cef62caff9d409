//! vector error type

use std::error::Error;
use std::fmt::{Display, Formatter};

/// kind of failure reported by a [`Vec2Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vec2ErrorKind {
    /// vector divided by a zero scalar
    DivisionByZero,
}

#[derive(Debug)]
pub struct Vec2Error {
    kind: Vec2ErrorKind,
    err: String,
}

impl Vec2Error {
    pub fn new(kind: Vec2ErrorKind, err: &str) -> Vec2Error {
        Vec2Error {
            kind,
            err: err.to_string(),
        }
    }

    pub fn kind(&self) -> Vec2ErrorKind {
        self.kind
    }
}

impl Display for Vec2Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[Vec2Error]: {}", self.err)
    }
}

impl Error for Vec2Error {}

#[macro_export]
macro_rules! vec2_err {
    ( $kind:expr, $x:expr ) => {{
        $crate::vec_error::Vec2Error::new(
            $kind,
            format!("{}:{} : {}", file!(), line!(), $x).as_str(),
        )
    }};
}
