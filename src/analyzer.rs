//! Statistics over a game's current results.
//!
//! An [`Analyzer`] keeps nothing but a borrow of its game. Every method reads
//! the table as it is at call time, so replaying the game is reflected on the
//! next call. A game that was never played reads as a table with no rolls.

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::game::Game;
use crate::table::WideTable;
use crate::util::{tally, Counts};
use crate::value::Face;

#[derive(Clone, Debug)]
pub struct Analyzer<'a, T>
where
    T: Face,
{
    game: &'a Game<T>,
}

/// Per-roll face tallies, one column per face known to any die in the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceCounts<T>
where
    T: Face,
{
    faces: Vec<T>,
    rows: Vec<Vec<usize>>,
}

impl<'a, T> Analyzer<'a, T>
where
    T: Face,
{
    #[must_use]
    pub fn new(game: &'a Game<T>) -> Self {
        Self { game }
    }

    #[must_use]
    pub fn game(&self) -> &'a Game<T> {
        self.game
    }

    /// Number of rolls in which every die shows the same face.
    #[must_use]
    pub fn jackpot(&self) -> usize {
        self.read(|t| {
            t.iter()
                .filter(|(_, row)| row.iter().all_equal_value().is_ok())
                .count()
        })
    }

    #[must_use]
    pub fn face_counts(&self) -> FaceCounts<T> {
        let faces = self
            .game
            .dice()
            .iter()
            .flat_map(|d| d.faces().iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect_vec();
        let rows = self.read(|t| {
            t.iter()
                .map(|(_, row)| {
                    let seen = tally(row.iter());
                    faces
                        .iter()
                        .map(|f| seen.get(f).copied().unwrap_or(0))
                        .collect_vec()
                })
                .collect_vec()
        });
        FaceCounts { faces, rows }
    }

    /// Rolls grouped by their sorted outcomes.
    #[must_use]
    pub fn combo_count(&self) -> Counts<T> {
        self.read(|t| tally(t.iter().map(|(_, row)| row.iter().cloned().sorted().collect_vec())))
    }

    /// Rolls grouped by their outcomes in die order.
    #[must_use]
    pub fn permutation_count(&self) -> Counts<T> {
        self.read(|t| tally(t.iter().map(|(_, row)| row.to_vec())))
    }

    fn read<R, F>(&self, f: F) -> R
    where
        R: Default,
        F: FnOnce(&WideTable<T>) -> R,
    {
        self.game.table().as_ref().map(f).unwrap_or_default()
    }
}

impl<T> FaceCounts<T>
where
    T: Face,
{
    /// Every face any die in the game can show, ascending.
    #[must_use]
    pub fn faces(&self) -> &[T] {
        &self.faces
    }

    #[must_use]
    pub fn rolls(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn row(&self, roll: usize) -> Option<&[usize]> {
        roll.checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
    }

    /// Count of `face` in `roll`. `None` only when the roll or face is unknown.
    #[must_use]
    pub fn get(&self, roll: usize, face: &T) -> Option<usize> {
        let i = self.faces.binary_search(face).ok()?;
        self.row(roll).map(|r| r[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, r)| (i + 1, r.as_slice()))
    }
}
