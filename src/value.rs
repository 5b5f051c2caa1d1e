use std::fmt::Debug;

use num::ToPrimitive;

use crate::{Error, Result};

/// A value that can sit on the face of a die.
///
/// Faces are compared with their natural ordering, so numeric faces sort
/// ascending and text faces sort lexically.
pub trait Face: Sized + Send + Sync + Debug + Clone + PartialEq + Eq + PartialOrd + Ord {}

impl<T> Face for T where
    T: Sized + Send + Sync + Debug + Clone + PartialEq + Eq + PartialOrd + Ord
{
}

/// Anything accepted as a face weight: numbers, or text that parses as one.
pub trait IntoWeight {
    fn into_weight(self) -> Result<f64>;
}

macro_rules! impl_into_weight_numeric {
    ($($typ:ty),*) => {
        $(
            impl $crate::value::IntoWeight for $typ {
                fn into_weight(self) -> $crate::Result<f64> {
                    let w = self
                        .to_f64()
                        .ok_or_else(|| Error::InvalidWeight(format!("{:?}", self)))?;
                    check(w)
                }
            }
        )*
    };
}

impl_into_weight_numeric!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl IntoWeight for &str {
    fn into_weight(self) -> Result<f64> {
        let w = self
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidWeight(format!("{:?}", self)))?;
        check(w)
    }
}

impl IntoWeight for String {
    fn into_weight(self) -> Result<f64> {
        self.as_str().into_weight()
    }
}

impl IntoWeight for &String {
    fn into_weight(self) -> Result<f64> {
        self.as_str().into_weight()
    }
}

#[inline]
fn check(w: f64) -> Result<f64> {
    if w.is_finite() && w >= 0.0 {
        Ok(w)
    } else {
        Err(Error::InvalidWeight(w.to_string()))
    }
}
