//! In-process view over one replicated root.
//!
//! # Responsibility
//! - Stand in for the external replicated-tree substrate: hold one root,
//!   apply mutations as indivisible transactions, and fire "changed"
//!   notifications after each commit.
//!
//! # Invariants
//! - Every listener fires exactly once per committed transaction, after the
//!   mutation closure has fully applied.
//! - No observer can read the root mid-transaction; `transact` is the only
//!   mutation path.
//!
//! Network propagation, cross-client merge rules, and persistence belong to
//! the external substrate and are out of scope here.

use log::debug;

/// Handle returned by `on_changed`, used to unsubscribe.
pub type SubscriptionId = u64;

/// One replicated root plus its change listeners.
pub struct TreeView<T> {
    root: T,
    next_subscription_id: SubscriptionId,
    listeners: Vec<(SubscriptionId, Box<dyn FnMut()>)>,
}

impl<T> TreeView<T> {
    /// Initializes the view with an initial root value.
    pub fn new(initial: T) -> Self {
        Self {
            root: initial,
            next_subscription_id: 1,
            listeners: Vec::new(),
        }
    }

    /// Read access to the committed root state.
    pub fn root(&self) -> &T {
        &self.root
    }

    /// Applies one mutation closure as a single indivisible change.
    ///
    /// Listeners observe only the fully-applied state; a composite operation
    /// submitted through one `transact` call is never visible half-done.
    pub fn transact<R>(&mut self, mutation: impl FnOnce(&mut T) -> R) -> R {
        let result = mutation(&mut self.root);
        debug!(
            "event=transaction_committed module=sync status=ok listeners={}",
            self.listeners.len()
        );
        for (_, listener) in &mut self.listeners {
            listener();
        }
        result
    }

    /// Subscribes to committed-change notifications.
    pub fn on_changed(&mut self, listener: impl FnMut() + 'static) -> SubscriptionId {
        let id = self.next_subscription_id;
        self.next_subscription_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes one subscription. Returns whether it was still registered.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }
}
