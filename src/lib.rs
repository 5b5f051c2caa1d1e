mod analyzer;
pub mod defs;
mod die;
mod game;
mod table;
mod util;
mod value;

use std::rc::Rc;

pub use analyzer::{Analyzer, FaceCounts};
pub use die::Die;
pub use game::Game;
use rand::distributions::WeightedError;
pub use table::{Layout, NarrowRow, NarrowTable, Results, WideTable};
use thiserror::Error;
pub use util::Counts;
pub use value::{Face, IntoWeight};

type Ptr<T> = Rc<T>;
pub type Result<T> = ::core::result::Result<T, Error>;

pub const DEFAULT_WEIGHT: f64 = 1.0;
pub const DEFAULT_SIDES: i32 = 6;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("a die needs at least one face")]
    EmptyFaces,
    #[error("duplicate face: {0}")]
    DuplicateFace(String),
    #[error("face not on die: {0}")]
    UnknownFace(String),
    #[error("invalid weight: {0}")]
    InvalidWeight(String),
    #[error("invalid layout {0:?}, expected \"wide\" or \"narrow\"")]
    InvalidLayout(String),
    #[error("game has not been played")]
    NotPlayed,
    #[error("weights do not form a distribution: {0}")]
    Weights(#[from] WeightedError),
}
