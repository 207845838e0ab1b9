use crate::traits::{subscriber::same_subscriber, Subscriber};

/// Fixed-capacity set of subscriber handles
///
/// Slots are filled first-empty-first, so an unsubscribe followed by a
/// subscribe reuses the freed slot. Subscribing into a full registry drops the
/// handle: there is nowhere to put it and no allocator to ask.
///
/// Notification order is slot order.
pub struct Registry<'a, const N: usize> {
    slots: [Option<&'a dyn Subscriber>; N],
}

impl<'a, const N: usize> Registry<'a, N> {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self { slots: [None; N] }
    }

    /// Register `handle` in the first empty slot
    ///
    /// Returns `false` when every slot is taken; the handle is dropped.
    /// Registering a handle twice gives it two slots.
    pub fn subscribe(&mut self, handle: &'a dyn Subscriber) -> bool {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(handle);
                true
            }
            None => {
                log_warn!("subscriber registry full ({} slots), handle dropped", N);
                false
            }
        }
    }

    /// Remove the first slot holding `handle`
    ///
    /// Returns `false` when the handle was not registered.
    pub fn unsubscribe(&mut self, handle: &dyn Subscriber) -> bool {
        let found = self
            .slots
            .iter_mut()
            .find(|slot| matches!(slot, Some(held) if same_subscriber(*held, handle)));

        match found {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// Call every registered subscriber with `value`
    #[inline]
    pub fn notify(&self, value: u16) {
        for subscriber in self.slots.iter().flatten() {
            subscriber.on_measurement(value);
        }
    }

    /// Whether `handle` occupies a slot
    pub fn contains(&self, handle: &dyn Subscriber) -> bool {
        self.slots
            .iter()
            .flatten()
            .any(|held| same_subscriber(*held, handle))
    }

    /// Occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if no subscriber is registered
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Check if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Total slots
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for Registry<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}
