use std::collections::BTreeMap;
use std::fmt::{self, Debug};

use itertools::Itertools;
use rand::{thread_rng, RngCore};

use super::inner::DieInner;
use crate::value::{Face, IntoWeight};
use crate::{Error, Ptr, Result};

/// A weighted die.
///
/// `Die` is a shared handle: cloning it does not copy the die, and a weight
/// change made through any clone is seen by every game holding that die.
#[derive(Clone)]
pub struct Die<T = i32>(Ptr<DieInner<T>>)
where
    T: Face;

impl Die {
    /// A die with faces `1..=sides`, all weighted equally. Fails with
    /// [`Error::EmptyFaces`] when `sides` is below 1.
    pub fn numeric(sides: i32) -> Result<Self> {
        Die::uniform(1..=sides)
    }
}

impl<T> Die<T>
where
    T: Face,
{
    /// Builds a die from distinct faces. Every face starts with weight 1.0.
    pub fn new<I>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Ok(Self(Ptr::new(DieInner::new(faces)?)))
    }

    /// Builds a die from any faces, dropping repeats. Faces end up sorted.
    pub fn uniform<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Ok(Self(Ptr::new(DieInner::uniform(values)?)))
    }

    /// Stock dice only: `values` must hold at least one face.
    pub(crate) fn stock<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let faces = values.into_iter().sorted().dedup().collect_vec();
        Self(Ptr::new(DieInner::with_faces(faces)))
    }

    #[must_use]
    pub fn faces(&self) -> &[T] {
        self.0.faces()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.faces().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.faces().is_empty()
    }

    #[must_use]
    pub fn weight(&self, face: &T) -> Option<f64> {
        self.0.weight(face)
    }

    /// Replaces the weight of one face. Nothing changes on error.
    pub fn set_weight<W>(&self, face: &T, weight: W) -> Result<()>
    where
        W: IntoWeight,
    {
        if self.0.position(face).is_none() {
            return Err(Error::UnknownFace(format!("{face:?}")));
        }
        let weight = weight.into_weight()?;
        self.0.set_weight(face, weight)?;
        log::debug!("die {:p}: weight of {face:?} set to {weight}", Ptr::as_ptr(&self.0));
        Ok(())
    }

    /// Detached copy of the face to weight mapping.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<T, f64> {
        self.0.snapshot()
    }

    /// Normalized weights in face order.
    #[must_use]
    pub fn probabilities(&self) -> Vec<(T, f64)> {
        self.0.probabilities()
    }

    /// Draws `n` faces with replacement, each with probability weight / total.
    pub fn draw_rng<G>(&self, n: usize, rng: &mut G) -> Result<Vec<T>>
    where
        G: RngCore,
    {
        log::trace!("die {:p}: drawing {n}", Ptr::as_ptr(&self.0));
        self.0.draw_rng(n, rng)
    }

    pub fn draw(&self, n: usize) -> Result<Vec<T>> {
        let mut rng = thread_rng();
        self.draw_rng(n, &mut rng)
    }

    /// Whether both handles point at the same die.
    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        Ptr::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Debug for Die<T>
where
    T: Face,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.snapshot()).finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn numeric_die_has_unit_weights() {
        let die = Die::numeric(6).unwrap();
        assert_eq!(die.faces(), &[1, 2, 3, 4, 5, 6]);
        assert!(die.snapshot().values().all(|&w| w == 1.0));
    }

    #[test]
    fn uniform_drops_repeats() {
        let die = Die::uniform([3, 1, 3, 2]).unwrap();
        assert_eq!(die.faces(), &[1, 2, 3]);
    }

    #[test]
    fn no_sides_no_die() {
        assert_eq!(Die::numeric(0).unwrap_err(), Error::EmptyFaces);
        assert_eq!(Die::numeric(-3).unwrap_err(), Error::EmptyFaces);
        assert_eq!(Die::<i32>::uniform(Vec::new()).unwrap_err(), Error::EmptyFaces);
        let one = Die::numeric(1).unwrap();
        assert_eq!(one.faces(), &[1]);
        assert!(!one.is_empty());
    }

    #[test]
    fn set_weight_touches_one_face() {
        let die = Die::numeric(6).unwrap();
        die.set_weight(&3, 5).unwrap();
        let state = die.snapshot();
        assert_eq!(state.len(), 6);
        assert_eq!(state[&3], 5.0);
        assert!(state
            .iter()
            .filter(|(k, _)| **k != 3)
            .all(|(_, &w)| w == 1.0));
    }

    #[test]
    fn fractional_weight_is_not_truncated() {
        let die = Die::numeric(6).unwrap();
        die.set_weight(&1, 2.75).unwrap();
        die.set_weight(&2, "0.5").unwrap();
        assert_eq!(die.weight(&1), Some(2.75));
        assert_eq!(die.weight(&2), Some(0.5));
    }

    #[test]
    fn failed_set_weight_leaves_state_intact() {
        let die = Die::new(["H", "T"]).unwrap();
        let before = die.snapshot();
        assert_eq!(
            die.set_weight(&"X", 2),
            Err(Error::UnknownFace("\"X\"".into()))
        );
        assert!(matches!(
            die.set_weight(&"H", "lots"),
            Err(Error::InvalidWeight(_))
        ));
        assert_eq!(die.snapshot(), before);
    }

    #[test]
    fn unknown_face_wins_over_bad_weight() {
        let die = Die::numeric(2).unwrap();
        assert!(matches!(
            die.set_weight(&9, "lots"),
            Err(Error::UnknownFace(_))
        ));
    }

    #[test]
    fn snapshot_is_detached() {
        let die = Die::numeric(3).unwrap();
        let mut state = die.snapshot();
        state.insert(1, 100.0);
        state.insert(42, 1.0);
        assert_eq!(die.weight(&1), Some(1.0));
        assert_eq!(die.weight(&42), None);
    }

    #[test]
    fn clones_share_weights() {
        let die = Die::numeric(6).unwrap();
        let alias = die.clone();
        alias.set_weight(&6, 10).unwrap();
        assert_eq!(die.weight(&6), Some(10.0));
        assert!(die.same(&alias));
        assert!(!die.same(&Die::numeric(6).unwrap()));
    }

    #[test]
    fn draws_converge_to_weights() {
        let die = Die::numeric(4).unwrap();
        die.set_weight(&4, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(12345);
        let n = 200_000;
        let draws = die.draw_rng(n, &mut rng).unwrap();
        for (face, p) in die.probabilities() {
            let seen = draws.iter().filter(|&&x| x == face).count() as f64 / n as f64;
            assert!((seen - p).abs() < 0.01, "face {face}: {seen} vs {p}");
        }
    }

    #[test]
    fn draw_is_fresh_each_call() {
        let die = Die::new(["a", "b", "c"]).unwrap();
        assert_eq!(die.draw(5).unwrap().len(), 5);
        assert_eq!(die.draw(0).unwrap().len(), 0);
        assert!(die.draw(1).unwrap().iter().all(|f| die.faces().contains(f)));
    }
}
