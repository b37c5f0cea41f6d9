//! Cart/wishlist state synchronizer.
//!
//! Keeps three sources of truth consistent per slot: the in-memory
//! membership set, the persisted snapshot on disk, and the remote store.
//! Mutations wait for server confirmation before touching local state; there
//! is no optimistic update and therefore no rollback path. That trades a
//! little latency for a much simpler consistency story: each item's state
//! change linearizes at confirmation time.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tracing::{debug, warn};

use bramble_core::{ProductId, Quantity, Slot};

use crate::error::ApiError;
use crate::remote::MutationApi;
use crate::session::Session;
use crate::store::SlotStore;

/// How [`Synchronizer::reconcile`] treats the remote store relative to the
/// locally persisted snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReconcilePolicy {
    /// Trust the persisted snapshot; never fetch remote membership.
    #[default]
    LocalOnly,
    /// Replace local membership with the remote store's.
    RemoteWins,
    /// Merge remote membership into local.
    Union,
}

/// Error parsing a [`ReconcilePolicy`] from a string.
#[derive(Debug, Error)]
#[error("unknown reconcile policy {0:?}, expected \"local-only\", \"remote-wins\", or \"union\"")]
pub struct ReconcilePolicyParseError(String);

impl core::str::FromStr for ReconcilePolicy {
    type Err = ReconcilePolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local-only" => Ok(Self::LocalOnly),
            "remote-wins" => Ok(Self::RemoteWins),
            "union" => Ok(Self::Union),
            other => Err(ReconcilePolicyParseError(other.to_string())),
        }
    }
}

/// Outcome of a mutation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The remote store confirmed the change and local state was updated.
    Applied,
    /// The item already had a mutation in flight for this slot; no second
    /// remote call was issued.
    AlreadyPending,
}

#[derive(Default)]
struct SlotState {
    /// Last confirmed server state, merged with nothing speculative.
    membership: HashSet<ProductId>,
    /// Items with exactly one outstanding remote mutation. Absence = idle.
    pending: HashSet<ProductId>,
}

impl SlotState {
    fn hydrated(membership: HashSet<ProductId>) -> Self {
        Self {
            membership,
            pending: HashSet::new(),
        }
    }
}

#[derive(Default)]
struct SyncState {
    cart: SlotState,
    wishlist: SlotState,
}

impl SyncState {
    const fn slot(&self, slot: Slot) -> &SlotState {
        match slot {
            Slot::Cart => &self.cart,
            Slot::Wishlist => &self.wishlist,
        }
    }

    const fn slot_mut(&mut self, slot: Slot) -> &mut SlotState {
        match slot {
            Slot::Cart => &mut self.cart,
            Slot::Wishlist => &mut self.wishlist,
        }
    }
}

/// Synchronizer for per-item cart and wishlist membership.
///
/// Owns the canonical in-memory sets and the per-item pending markers for
/// both slots, and orchestrates confirmed membership transitions with
/// write-through persistence on every add/remove.
///
/// # Concurrency
///
/// All state lives behind one mutex that is never held across an await
/// point: operations on different items interleave freely while each state
/// transition stays atomic. The pending marker admits at most one in-flight
/// mutation per (slot, item), so outcomes for a single item are totally
/// ordered by completion time; across items there is no ordering and no
/// global lock.
///
/// # Session lifecycle
///
/// A synchronizer is bound to the [`Session`] it was built with. On login or
/// logout, drop it and build a new one; requests still in flight die with
/// their synchronizer instead of mutating the next session's state. A caller
/// that keeps an old instance alive across a session change keeps that
/// hazard.
pub struct Synchronizer<M> {
    session: Session,
    store: SlotStore,
    remote: M,
    policy: ReconcilePolicy,
    state: Mutex<SyncState>,
}

impl<M: MutationApi> Synchronizer<M> {
    /// Build a synchronizer for a session.
    ///
    /// An authenticated session hydrates membership from the persisted
    /// snapshot; an anonymous one starts empty. The persisted snapshot is
    /// never cleared here, so local state survives logout/login cycles on
    /// the same machine. No remote call is made; see [`Self::reconcile`].
    #[must_use]
    pub fn new(session: Session, store: SlotStore, remote: M, policy: ReconcilePolicy) -> Self {
        let state = if session.is_authenticated() {
            SyncState {
                cart: SlotState::hydrated(store.load(Slot::Cart)),
                wishlist: SlotState::hydrated(store.load(Slot::Wishlist)),
            }
        } else {
            SyncState::default()
        };

        Self {
            session,
            store,
            remote,
            policy,
            state: Mutex::new(state),
        }
    }

    /// Request adding `id` to `slot` with the given cart quantity.
    ///
    /// Membership is only updated after the remote store confirms; a failed
    /// call leaves it untouched. An add for an item that is already a
    /// confirmed member is still sent - the server is the source of truth
    /// for idempotence and the client never pre-validates membership.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthenticated`] without any state change when the
    /// session has no credential; otherwise the remote failure, with the
    /// pending marker cleared and membership unchanged.
    pub async fn request_add(
        &self,
        slot: Slot,
        id: &ProductId,
        quantity: Quantity,
    ) -> Result<MutationOutcome, ApiError> {
        let token = self.session.require_token()?;

        if !self.lock().slot_mut(slot).pending.insert(id.clone()) {
            debug!(%slot, product_id = %id, "mutation already in flight, ignoring add");
            return Ok(MutationOutcome::AlreadyPending);
        }

        let result = self.remote.add_item(slot, id, quantity, token).await;

        let mut state = self.lock();
        let slot_state = state.slot_mut(slot);
        slot_state.pending.remove(id);

        match result {
            Ok(_ack) => {
                slot_state.membership.insert(id.clone());
                self.write_through(slot, &slot_state.membership);
                Ok(MutationOutcome::Applied)
            }
            Err(err) => {
                warn!(%slot, product_id = %id, error = %err, "add rejected, membership unchanged");
                Err(err)
            }
        }
    }

    /// Request removing `id` from `slot`.
    ///
    /// Symmetric to [`Self::request_add`]: membership is only updated after
    /// confirmation, and a remove for a non-member is still sent.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::request_add`].
    pub async fn request_remove(
        &self,
        slot: Slot,
        id: &ProductId,
    ) -> Result<MutationOutcome, ApiError> {
        let token = self.session.require_token()?;

        if !self.lock().slot_mut(slot).pending.insert(id.clone()) {
            debug!(%slot, product_id = %id, "mutation already in flight, ignoring remove");
            return Ok(MutationOutcome::AlreadyPending);
        }

        let result = self.remote.remove_item(slot, id, token).await;

        let mut state = self.lock();
        let slot_state = state.slot_mut(slot);
        slot_state.pending.remove(id);

        match result {
            Ok(_ack) => {
                slot_state.membership.remove(id);
                self.write_through(slot, &slot_state.membership);
                Ok(MutationOutcome::Applied)
            }
            Err(err) => {
                warn!(%slot, product_id = %id, error = %err, "remove rejected, membership unchanged");
                Err(err)
            }
        }
    }

    /// Reconcile `slot` against the remote store per the configured policy.
    ///
    /// Never runs implicitly; callers opt in at a moment of their choosing.
    /// [`ReconcilePolicy::LocalOnly`] is a no-op without network traffic.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthenticated`] when the session has no credential,
    /// otherwise the fetch failure. Local state is untouched on failure.
    pub async fn reconcile(&self, slot: Slot) -> Result<(), ApiError> {
        if matches!(self.policy, ReconcilePolicy::LocalOnly) {
            return Ok(());
        }

        let token = self.session.require_token()?;
        let remote = self.remote.fetch_items(slot, token).await?;

        let mut state = self.lock();
        let slot_state = state.slot_mut(slot);
        match self.policy {
            ReconcilePolicy::LocalOnly => {}
            ReconcilePolicy::RemoteWins => slot_state.membership = remote,
            ReconcilePolicy::Union => slot_state.membership.extend(remote),
        }
        self.write_through(slot, &slot_state.membership);
        Ok(())
    }

    /// Whether `id` is a confirmed member of `slot`.
    #[must_use]
    pub fn is_member(&self, slot: Slot, id: &ProductId) -> bool {
        self.lock().slot(slot).membership.contains(id)
    }

    /// Whether `id` has an unconfirmed mutation in flight for `slot`.
    #[must_use]
    pub fn is_pending(&self, slot: Slot, id: &ProductId) -> bool {
        self.lock().slot(slot).pending.contains(id)
    }

    /// Snapshot of `slot`'s confirmed membership.
    #[must_use]
    pub fn members(&self, slot: Slot) -> HashSet<ProductId> {
        self.lock().slot(slot).membership.clone()
    }

    /// Number of in-flight mutations for `slot`.
    #[must_use]
    pub fn pending_count(&self, slot: Slot) -> usize {
        self.lock().slot(slot).pending.len()
    }

    /// The session this synchronizer is bound to.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Write membership through to the persisted snapshot.
    ///
    /// Persistence failures are logged and absorbed: the in-memory state
    /// stays authoritative for the rest of the session.
    fn write_through(&self, slot: Slot, membership: &HashSet<ProductId>) {
        if let Err(err) = self.store.save(slot, membership) {
            warn!(%slot, error = %err, "failed to persist membership, keeping in-memory state");
        }
    }

    fn lock(&self) -> MutexGuard<'_, SyncState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
