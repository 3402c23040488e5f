//! Outside-interaction dismissal as a scoped subscription.
//!
//! The platform layer owns a [`DismissHub`] and calls
//! [`DismissHub::outside_interaction`] for every pointer press outside the
//! widget. Each interactive session holds a [`DismissSubscription`]; dropping
//! it unregisters the session on every exit path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

#[derive(Default)]
struct Registry {
    next_id: u64,
    pending: HashMap<u64, Arc<AtomicBool>>,
}

#[derive(Clone, Default)]
pub struct DismissHub {
    registry: Arc<Mutex<Registry>>,
}

impl DismissHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> DismissSubscription {
        let flag = Arc::new(AtomicBool::new(false));
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.pending.insert(id, Arc::clone(&flag));

        DismissSubscription {
            id,
            flag,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Marks every live subscription as dismissed.
    pub fn outside_interaction(&self) {
        for flag in lock(&self.registry).pending.values() {
            flag.store(true, Ordering::Release);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.registry).pending.len()
    }
}

impl std::fmt::Debug for DismissHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DismissHub")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[derive(Debug)]
pub struct DismissSubscription {
    id: u64,
    flag: Arc<AtomicBool>,
    registry: Weak<Mutex<Registry>>,
}

impl DismissSubscription {
    /// Returns true once per outside interaction since the last call.
    pub fn take_pending(&self) -> bool {
        self.flag.swap(false, Ordering::AcqRel)
    }
}

impl Drop for DismissSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).pending.remove(&self.id);
        }
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}
