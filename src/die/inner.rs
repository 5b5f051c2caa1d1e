use std::cell::RefCell;
use std::collections::BTreeMap;

use itertools::Itertools;
use rand::distributions::{Distribution, WeightedIndex};
use rand::RngCore;

use crate::value::Face;
use crate::{Error, Result, DEFAULT_WEIGHT};

/// Faces in construction order and one weight per face, index-aligned.
#[derive(Clone, Debug, PartialEq)]
pub struct DieInner<T>
where
    T: Face,
{
    faces: Vec<T>,
    weights: RefCell<Vec<f64>>,
}

impl<T> DieInner<T>
where
    T: Face,
{
    pub fn new<I>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let faces = faces.into_iter().collect_vec();
        if faces.is_empty() {
            return Err(Error::EmptyFaces);
        }
        if let Some((dup, _)) = faces.iter().sorted().tuple_windows().find(|(a, b)| a == b) {
            return Err(Error::DuplicateFace(format!("{dup:?}")));
        }
        Ok(Self::with_faces(faces))
    }

    /// Distinct, sorted faces with unit weights.
    pub fn uniform<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let faces = values.into_iter().sorted().dedup().collect_vec();
        if faces.is_empty() {
            return Err(Error::EmptyFaces);
        }
        Ok(Self::with_faces(faces))
    }

    /// Unchecked; `faces` must be non-empty and distinct.
    pub(crate) fn with_faces(faces: Vec<T>) -> Self {
        let n = faces.len();
        Self {
            faces,
            weights: RefCell::new(vec![DEFAULT_WEIGHT; n]),
        }
    }

    #[must_use]
    pub fn faces(&self) -> &[T] {
        &self.faces
    }

    #[must_use]
    pub fn position(&self, face: &T) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }

    #[must_use]
    pub fn weight(&self, face: &T) -> Option<f64> {
        self.position(face).map(|i| self.weights.borrow()[i])
    }

    pub fn set_weight(&self, face: &T, weight: f64) -> Result<()> {
        let i = self
            .position(face)
            .ok_or_else(|| Error::UnknownFace(format!("{face:?}")))?;
        self.weights.borrow_mut()[i] = weight;
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<T, f64> {
        self.faces
            .iter()
            .cloned()
            .zip(self.weights.borrow().iter().copied())
            .collect()
    }

    #[must_use]
    pub fn probabilities(&self) -> Vec<(T, f64)> {
        let weights = self.weights.borrow();
        let total: f64 = weights.iter().sum();
        self.faces
            .iter()
            .zip(weights.iter())
            .map(|(f, w)| (f.clone(), if total > 0.0 { w / total } else { 0.0 }))
            .collect_vec()
    }

    pub fn draw_rng<G>(&self, n: usize, rng: &mut G) -> Result<Vec<T>>
    where
        G: RngCore,
    {
        let dist = WeightedIndex::<f64>::new(self.weights.borrow().iter())?;
        Ok((0..n)
            .map(|_| self.faces[dist.sample(rng)].clone())
            .collect_vec())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn rejects_duplicates_and_empty() {
        assert_eq!(
            DieInner::new([1, 2, 2, 3]),
            Err(Error::DuplicateFace("2".into()))
        );
        assert_eq!(DieInner::<i32>::new([]), Err(Error::EmptyFaces));
    }

    #[test]
    fn uniform_sorts_and_rejects_empty() {
        let die = DieInner::uniform([2, 1, 2]).unwrap();
        assert_eq!(die.faces(), &[1, 2]);
        assert_eq!(DieInner::<i32>::uniform(Vec::new()), Err(Error::EmptyFaces));
    }

    #[test]
    fn keeps_construction_order() {
        let die = DieInner::new(["c", "a", "b"]).unwrap();
        assert_eq!(die.faces(), &["c", "a", "b"]);
        assert!(die.snapshot().values().all(|&w| w == 1.0));
    }

    #[test]
    fn zero_weight_face_is_never_drawn() {
        let die = DieInner::new([1, 2, 3]).unwrap();
        die.set_weight(&2, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let draws = die.draw_rng(1_000, &mut rng).unwrap();
        assert_eq!(draws.len(), 1_000);
        assert!(draws.iter().all(|&x| x != 2));
    }

    #[test]
    fn all_zero_weights_cannot_be_drawn() {
        let die = DieInner::new([1, 2]).unwrap();
        die.set_weight(&1, 0.0).unwrap();
        die.set_weight(&2, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(die.draw_rng(1, &mut rng), Err(Error::Weights(_))));
    }
}
