//! Slice registry for modular features.
//! A minimal type-erased container for pre-initialized feature state.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Marker trait for feature state that can be shared across threads.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A container for an initialized feature.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), state: Box::new(state) }
    }
}

/// Initialized slices of one host, looked up by concrete type.
#[derive(Debug, Default)]
pub struct SliceRegistry {
    slices: Vec<InitializedSlice>,
}

impl SliceRegistry {
    /// Registers a slice; a later registration of the same type shadows the earlier one.
    pub fn register(&mut self, slice: InitializedSlice) {
        self.slices.retain(|existing| existing.id != slice.id);
        self.slices.push(slice);
    }

    #[must_use]
    pub fn get<T: FeatureSlice>(&self) -> Option<&T> {
        self.slices
            .iter()
            .find(|slice| slice.id == TypeId::of::<T>())
            .and_then(|slice| slice.state.as_any().downcast_ref::<T>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl FromIterator<InitializedSlice> for SliceRegistry {
    fn from_iter<I: IntoIterator<Item = InitializedSlice>>(iter: I) -> Self {
        let mut registry = Self::default();
        for slice in iter {
            registry.register(slice);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Counter(u8);

    impl FeatureSlice for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn later_registration_shadows_earlier() {
        let slices = [InitializedSlice::new(Counter(1)), InitializedSlice::new(Counter(2))];
        let registry: SliceRegistry = slices.into_iter().collect();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get::<Counter>().map(|p| p.0), Some(2));
    }
}
