use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::TargetEstimate;

#[derive(Debug, Default)]
struct EstimateSlot {
    estimate: TargetEstimate,
    updates: u64,
}

/// Handle to the most recently published target estimate.
///
/// Clones share the same slot: give one to the frame producer and one to
/// each reader. Both `publish` and `get` hold the lock only long enough to
/// copy the `{center_x, distance}` pair, so a reader never sees half of an
/// update.
#[derive(Debug, Clone, Default)]
pub struct SharedEstimate {
    slot: Arc<Mutex<EstimateSlot>>,
}

impl SharedEstimate {
    pub fn new() -> Self {
        Self::default()
    }

    // The slot is plain Copy data, so a poisoned lock still guards a whole value.
    fn lock(&self) -> MutexGuard<'_, EstimateSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn publish(&self, estimate: TargetEstimate) {
        let mut slot = self.lock();
        slot.estimate = estimate;
        slot.updates += 1;
    }

    pub fn get(&self) -> TargetEstimate {
        self.lock().estimate
    }

    /// Number of estimates published so far.
    pub fn updates(&self) -> u64 {
        self.lock().updates
    }

    /// Estimate together with the update count it belongs to.
    pub fn snapshot(&self) -> (TargetEstimate, u64) {
        let slot = self.lock();
        (slot.estimate, slot.updates)
    }
}
