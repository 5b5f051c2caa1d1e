use std::cell::{Ref, RefCell};

use bon::Builder;
use rand::{thread_rng, RngCore};

use crate::die::Die;
use crate::table::{Layout, Results, WideTable};
use crate::value::Face;
use crate::{Error, Result};

/// A fixed set of dice rolled together, and the table of the last play.
///
/// Dice are held by handle, so the same die may sit in several games. Each
/// call to [`Game::play`] replaces the stored table; nothing accumulates.
#[derive(Clone, Debug, Builder)]
pub struct Game<T>
where
    T: Face,
{
    #[builder(into)]
    dice: Vec<Die<T>>,
    #[builder(skip)]
    results: RefCell<Option<WideTable<T>>>,
}

impl<T> Game<T>
where
    T: Face,
{
    #[must_use]
    pub fn new<I>(dice: I) -> Self
    where
        I: IntoIterator<Item = Die<T>>,
    {
        Self {
            dice: dice.into_iter().collect(),
            results: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn dice(&self) -> &[Die<T>] {
        &self.dice
    }

    /// Number of rolls in the stored table, 0 before the first play.
    #[must_use]
    pub fn rolls(&self) -> usize {
        self.results.borrow().as_ref().map_or(0, WideTable::rolls)
    }

    #[must_use]
    pub fn is_played(&self) -> bool {
        self.results.borrow().is_some()
    }

    pub fn play(&self, rolls: usize) -> Result<()> {
        let mut rng = thread_rng();
        self.play_rng(rolls, &mut rng)
    }

    /// Rolls every die `rolls` times. Each die draws its whole column before
    /// the next die starts. The previous table is kept if any draw fails.
    pub fn play_rng<G>(&self, rolls: usize, rng: &mut G) -> Result<()>
    where
        G: RngCore,
    {
        let columns = self
            .dice
            .iter()
            .map(|d| d.draw_rng(rolls, rng))
            .collect::<Result<Vec<_>>>()?;
        *self.results.borrow_mut() = Some(WideTable::from_columns(columns, rolls));
        log::debug!("played {rolls} rolls of {} dice", self.dice.len());
        Ok(())
    }

    /// A copy of the stored table in the named layout (`"wide"` or
    /// `"narrow"`, any case).
    pub fn results(&self, layout: &str) -> Result<Results<T>> {
        self.results_as(layout.parse()?)
    }

    pub fn results_as(&self, layout: Layout) -> Result<Results<T>> {
        let table = self.results.borrow();
        let table = table.as_ref().ok_or(Error::NotPlayed)?;
        Ok(match layout {
            Layout::Wide => Results::Wide(table.clone()),
            Layout::Narrow => Results::Narrow(table.to_narrow()),
        })
    }

    pub(crate) fn table(&self) -> Ref<'_, Option<WideTable<T>>> {
        self.results.borrow()
    }
}
