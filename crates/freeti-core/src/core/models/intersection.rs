use serde::Serialize;
use std::fmt;

/// Where the Lambda=0 and Lambda=1 lines cross, relative to the integration domain `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Intersection {
    /// The lines cross inside `[0, 1]`; `x_err` is the propagated uncertainty of `x`.
    Found { x: f64, x_err: f64 },
    /// The lines cross at a finite point outside `[0, 1]`.
    OutOfDomain { x: f64 },
    /// Equal slopes, the lines never cross.
    Parallel,
    /// Non-finite inputs made the crossing NaN.
    Undefined,
}

impl Intersection {
    pub fn in_domain(&self) -> bool {
        matches!(self, Intersection::Found { .. })
    }

    /// The crossing point, if the lines have one.
    pub fn x(&self) -> Option<f64> {
        match *self {
            Intersection::Found { x, .. } | Intersection::OutOfDomain { x } => Some(x),
            Intersection::Parallel | Intersection::Undefined => None,
        }
    }

    pub fn x_err(&self) -> Option<f64> {
        match *self {
            Intersection::Found { x_err, .. } => Some(x_err),
            _ => None,
        }
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(4);
        match self {
            Intersection::Found { x, x_err } => {
                write!(f, "Intersection at x = {:.*} ± {:.*}", p, x, p, x_err)
            }
            Intersection::OutOfDomain { x } => {
                write!(f, "x_intersect = {:.*}, no intercept in [0, 1]", p, x)
            }
            Intersection::Parallel => write!(f, "Lines are parallel, no intercept in [0, 1]"),
            Intersection::Undefined => {
                write!(f, "x_intersect is undefined (non-finite input), no intercept in [0, 1]")
            }
        }
    }
}
