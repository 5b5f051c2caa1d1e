//! The two layouts a game's results can be read in.
//!
//! Rolls and dice are numbered from 1. A wide table has one row per roll and
//! one column per die; a narrow table has one row per (roll, die) pair, sorted
//! by roll and then by die. Converting between them is lossless.

use std::fmt::{self, Display};
use std::str::FromStr;

use itertools::Itertools;

use crate::value::Face;
use crate::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    #[default]
    Wide,
    Narrow,
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "wide" => Ok(Self::Wide),
            "narrow" => Ok(Self::Narrow),
            _ => Err(Error::InvalidLayout(s.to_string())),
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wide => write!(f, "wide"),
            Self::Narrow => write!(f, "narrow"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WideTable<T>
where
    T: Face,
{
    dice: usize,
    rows: Vec<Vec<T>>,
}

impl<T> WideTable<T>
where
    T: Face,
{
    /// Builds a table from one column of outcomes per die.
    pub(crate) fn from_columns(columns: Vec<Vec<T>>, rolls: usize) -> Self {
        let dice = columns.len();
        let mut columns = columns.into_iter().map(Vec::into_iter).collect_vec();
        let rows = (0..rolls)
            .map(|_| columns.iter_mut().filter_map(Iterator::next).collect_vec())
            .collect_vec();
        Self { dice, rows }
    }

    #[must_use]
    pub fn rolls(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn dice(&self) -> usize {
        self.dice
    }

    #[must_use]
    pub fn row(&self, roll: usize) -> Option<&[T]> {
        roll.checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
    }

    #[must_use]
    pub fn get(&self, roll: usize, die: usize) -> Option<&T> {
        self.row(roll)?.get(die.checked_sub(1)?)
    }

    /// Rows paired with their 1-based roll number.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[T])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i + 1, r.as_slice()))
    }

    #[must_use]
    pub fn to_narrow(&self) -> NarrowTable<T> {
        let rows = self
            .iter()
            .flat_map(|(roll, row)| {
                row.iter().enumerate().map(move |(i, outcome)| NarrowRow {
                    roll,
                    die: i + 1,
                    outcome: outcome.clone(),
                })
            })
            .collect_vec();
        NarrowTable {
            rolls: self.rolls(),
            dice: self.dice,
            rows,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct NarrowRow<T> {
    pub roll: usize,
    pub die: usize,
    pub outcome: T,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NarrowTable<T>
where
    T: Face,
{
    rolls: usize,
    dice: usize,
    rows: Vec<NarrowRow<T>>,
}

impl<T> NarrowTable<T>
where
    T: Face,
{
    #[must_use]
    pub fn rows(&self) -> &[NarrowRow<T>] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn rolls(&self) -> usize {
        self.rolls
    }

    #[must_use]
    pub fn dice(&self) -> usize {
        self.dice
    }

    #[must_use]
    pub fn get(&self, roll: usize, die: usize) -> Option<&T> {
        if roll == 0 || die == 0 || roll > self.rolls || die > self.dice {
            return None;
        }
        self.rows
            .get((roll - 1) * self.dice + (die - 1))
            .map(|r| &r.outcome)
    }

    #[must_use]
    pub fn to_wide(&self) -> WideTable<T> {
        let rows = if self.dice == 0 {
            vec![Vec::new(); self.rolls]
        } else {
            self.rows
                .chunks(self.dice)
                .map(|c| c.iter().map(|r| r.outcome.clone()).collect_vec())
                .collect_vec()
        };
        WideTable {
            dice: self.dice,
            rows,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Results<T>
where
    T: Face,
{
    Wide(WideTable<T>),
    Narrow(NarrowTable<T>),
}

impl<T> Results<T>
where
    T: Face,
{
    #[must_use]
    pub fn layout(&self) -> Layout {
        match self {
            Self::Wide(_) => Layout::Wide,
            Self::Narrow(_) => Layout::Narrow,
        }
    }

    #[must_use]
    pub fn into_wide(self) -> WideTable<T> {
        match self {
            Self::Wide(t) => t,
            Self::Narrow(t) => t.to_wide(),
        }
    }

    #[must_use]
    pub fn into_narrow(self) -> NarrowTable<T> {
        match self {
            Self::Wide(t) => t.to_narrow(),
            Self::Narrow(t) => t,
        }
    }
}
