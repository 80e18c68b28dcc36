use crate::builder::Build;
use crate::KLowest;
use std::marker::PhantomData;

/// `KLowest` builder.
///
/// This builder can be consumed later to spawn a
/// [`KLowest`](../../struct.KLowest.html) selector.
///
/// ## Examples
///
/// ```
/// use klowest::Selector;
/// use klowest::builder::{Build, KLowestBuilder};
///
/// let mut selector = KLowestBuilder::<i64>::new(2).build();
/// selector.observe(1i64);
/// ```
pub struct KLowestBuilder<K> {
    pub(crate) capacity: usize,
    unused: PhantomData<K>,
}

impl<K> KLowestBuilder<K> {
    /// The [KLowest](../../struct.KLowest.html) selector spawned by
    /// this builder will retain up to `capacity` values.
    pub fn new(capacity: usize) -> Self {
        KLowestBuilder {
            capacity,
            unused: PhantomData,
        }
    }
}

impl<K> Clone for KLowestBuilder<K> {
    fn clone(&self) -> Self {
        KLowestBuilder {
            capacity: self.capacity,
            unused: PhantomData,
        }
    }
}

impl<K> Build<KLowest<K>> for KLowestBuilder<K> {
    fn build(self) -> KLowest<K> {
        KLowest::new(self.capacity)
    }
}
