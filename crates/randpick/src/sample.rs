use crate::types::{Definition, Pick, Results};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Source of randomness for [`sample`].
///
/// Works on positions rather than items so that any list can be drawn from.
pub trait Picker {
    /// A uniformly random index in `0..len`. `len` is never zero.
    fn pick_one(&mut self, len: usize) -> usize;

    /// `amount` distinct indices in `0..len`, in draw order.
    /// `amount` never exceeds `len`.
    fn pick_many(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick_one(&mut self, len: usize) -> usize {
        (**self).pick_one(len)
    }

    fn pick_many(&mut self, len: usize, amount: usize) -> Vec<usize> {
        (**self).pick_many(len, amount)
    }
}

impl<P: Picker + ?Sized> Picker for Box<P> {
    fn pick_one(&mut self, len: usize) -> usize {
        (**self).pick_one(len)
    }

    fn pick_many(&mut self, len: usize, amount: usize) -> Vec<usize> {
        (**self).pick_many(len, amount)
    }
}

/// [`Picker`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngPicker<R> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<ThreadRng> {
    /// Picker using the thread-local generator.
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl RngPicker<StdRng> {
    /// Deterministic picker: the same seed yields the same sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Picker for RngPicker<R> {
    fn pick_one(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn pick_many(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, len, amount).into_vec()
    }
}

/// Draw one generation cycle from every category.
///
/// Categories without items are left out. Otherwise the effective pick
/// count (`pick_count` clamped to the number of items) decides the shape:
/// exactly one draw is a [`Pick::One`], anything else is a [`Pick::Many`]
/// of distinct items in draw order.
pub fn sample<P: Picker + ?Sized>(definition: &Definition, picker: &mut P) -> Results {
    let mut results = Results::new();

    for (name, category) in definition.categories.iter() {
        if category.items.is_empty() {
            debug!(category = name, "skipping category with no items");
            continue;
        }

        let count = category.effective_pick_count();
        let pick = if count == 1 {
            let index = picker.pick_one(category.items.len());
            Pick::One(category.items[index].clone())
        } else {
            let indices = picker.pick_many(category.items.len(), count);
            Pick::Many(
                indices
                    .into_iter()
                    .map(|i| category.items[i].clone())
                    .collect(),
            )
        };
        results.insert(name, pick);
    }

    results
}
