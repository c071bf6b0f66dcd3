//! Core accrual engine.

use crate::error::AccrualError;
use crate::events::MintedEvent;
use crate::record::AccrualRecord;
use std::collections::HashMap;
use ubi_ledger::BalanceLedger;
use ubi_registry::HumanityRegistry;
use ubi_store::AccrualStore;
use ubi_types::{Identity, LedgerParams, Timestamp, UbiAmount};

/// The accrual engine — owns per-identity accrual records, the global rate,
/// and the mint audit log.
///
/// The engine is the only mutator of accrual state and of balances derived
/// from accrual. It consults the registry at every mutating call (never
/// caching the answer) and credits the ledger passed in by the caller.
///
/// No interior locking: callers own the engine behind `&mut self`, and the
/// hosting process must serialize calls (a single task owning the engine is
/// enough) to keep each operation atomic with respect to the others.
pub struct AccrualEngine {
    governor: Identity,
    /// Raw units minted per second of accrual. A single current value — no
    /// rate history is kept, so a change applies to the whole elapsed
    /// interval at the next settlement.
    accrued_per_second: u128,
    records: HashMap<Identity, AccrualRecord>,
    /// Append-only mint log, drained by the caller.
    pending_events: Vec<MintedEvent>,
}

impl AccrualEngine {
    /// Build an engine from deployment parameters.
    pub fn new(params: &LedgerParams) -> Self {
        Self {
            governor: params.governor.clone(),
            accrued_per_second: params.accrued_per_second,
            records: HashMap::new(),
            pending_events: Vec::new(),
        }
    }

    /// The current accrual rate, in raw units per second.
    pub fn accrued_per_second(&self) -> u128 {
        self.accrued_per_second
    }

    /// The identity authorized to change the rate.
    pub fn governor(&self) -> &Identity {
        &self.governor
    }

    /// Change the global accrual rate. Governor only.
    ///
    /// Applies prospectively: in-flight records are untouched, and their
    /// next settlement uses the new rate for the entire elapsed interval.
    pub fn change_rate(&mut self, caller: &Identity, new_rate: u128) -> Result<(), AccrualError> {
        if *caller != self.governor {
            return Err(AccrualError::Unauthorized);
        }
        self.accrued_per_second = new_rate;
        Ok(())
    }

    /// Begin accruing UBI for a registry-verified identity.
    ///
    /// Sets the identity's settlement point to `now`; no balance change.
    pub fn start_accruing(
        &mut self,
        registry: &dyn HumanityRegistry,
        identity: &Identity,
        now: Timestamp,
    ) -> Result<(), AccrualError> {
        // Already-accruing wins over registration status: an identity
        // mid-accrual is rejected with AlreadyAccruing even if the registry
        // has since dropped it.
        if self.record(identity).is_accruing() {
            return Err(AccrualError::AlreadyAccruing(identity.to_string()));
        }
        if !registry.is_registered(identity) {
            return Err(AccrualError::NotRegistered(identity.to_string()));
        }
        self.records
            .entry(identity.clone())
            .or_default()
            .start(now);
        Ok(())
    }

    /// Value accrued since the identity's last settlement.
    ///
    /// Pure query: 0 when the identity is not accruing, 0 on overflow.
    pub fn get_accrued_value(&self, identity: &Identity, now: Timestamp) -> UbiAmount {
        UbiAmount::new(self.record(identity).pending(self.accrued_per_second, now))
    }

    /// The identity's last settlement point; epoch 0 means not accruing.
    pub fn last_settled_at(&self, identity: &Identity) -> Timestamp {
        self.record(identity).last_settled_at()
    }

    /// Whether the identity is currently accruing.
    pub fn is_accruing(&self, identity: &Identity) -> bool {
        self.record(identity).is_accruing()
    }

    /// Settle pending accrual into the identity's balance.
    ///
    /// The identity stays accruing with its settlement point advanced to
    /// `now`. A zero-elapsed mint credits 0, succeeds, and still emits a
    /// [`MintedEvent`]. Returns the credited amount.
    pub fn mint_accrued(
        &mut self,
        registry: &dyn HumanityRegistry,
        ledger: &mut BalanceLedger,
        identity: &Identity,
        now: Timestamp,
    ) -> Result<UbiAmount, AccrualError> {
        if !registry.is_registered(identity) {
            return Err(AccrualError::NotRegistered(identity.to_string()));
        }
        if !self.record(identity).is_accruing() {
            return Err(AccrualError::NotAccruing(identity.to_string()));
        }
        let amount = self.settle(ledger, identity, now)?;
        if let Some(record) = self.records.get_mut(identity) {
            record.settle(now);
        }
        Ok(amount)
    }

    /// Report an identity the registry has dropped, settling its remaining
    /// accrual and stopping it entirely.
    ///
    /// Callable by anyone — there is deliberately no caller parameter. The
    /// identity exits the accruing state and must call
    /// [`AccrualEngine::start_accruing`] again (which will fail until it is
    /// re-verified). Returns the final credited amount.
    pub fn report_removal(
        &mut self,
        registry: &dyn HumanityRegistry,
        ledger: &mut BalanceLedger,
        identity: &Identity,
        now: Timestamp,
    ) -> Result<UbiAmount, AccrualError> {
        if !self.record(identity).is_accruing() {
            return Err(AccrualError::NotAccruing(identity.to_string()));
        }
        if registry.is_registered(identity) {
            return Err(AccrualError::StillRegistered(identity.to_string()));
        }
        let amount = self.settle(ledger, identity, now)?;
        if let Some(record) = self.records.get_mut(identity) {
            record.clear();
        }
        Ok(amount)
    }

    /// Drain the pending mint events for the caller to process.
    pub fn drain_events(&mut self) -> Vec<MintedEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Pending mint events not yet drained.
    pub fn pending_events(&self) -> &[MintedEvent] {
        &self.pending_events
    }

    /// Number of identities currently accruing.
    pub fn accruing_count(&self) -> usize {
        self.records.values().filter(|r| r.is_accruing()).count()
    }

    /// Identities currently accruing.
    pub fn accruing_identities(&self) -> impl Iterator<Item = &Identity> {
        self.records
            .iter()
            .filter(|(_, r)| r.is_accruing())
            .map(|(identity, _)| identity)
    }

    /// Records logically exist for every identity from genesis; absent map
    /// entries read as idle.
    fn record(&self, identity: &Identity) -> AccrualRecord {
        self.records.get(identity).copied().unwrap_or_default()
    }

    /// Compute pending accrual at the current rate, credit it to the
    /// ledger, and emit the mint event. The caller adjusts the record
    /// afterwards; nothing here mutates engine state until the credit has
    /// succeeded.
    fn settle(
        &mut self,
        ledger: &mut BalanceLedger,
        identity: &Identity,
        now: Timestamp,
    ) -> Result<UbiAmount, AccrualError> {
        let pending = self
            .record(identity)
            .pending_checked(self.accrued_per_second, now)
            .ok_or(AccrualError::Overflow)?;
        let amount = UbiAmount::new(pending);
        ledger
            .credit(identity, amount)
            .map_err(|e| AccrualError::Ledger(e.to_string()))?;
        self.pending_events.push(MintedEvent {
            identity: identity.clone(),
            amount,
            at: now,
        });
        Ok(amount)
    }
}

impl AccrualEngine {
    const META_GOVERNOR: &'static [u8] = b"governor";
    const META_RATE: &'static [u8] = b"accrued_per_second";

    /// Persist engine state (records plus global state) to a store.
    ///
    /// The pending event log is a runtime queue, not persisted state.
    pub fn save_to_store(&self, store: &dyn AccrualStore) -> Result<(), AccrualError> {
        let governor_bytes = bincode::serialize(&self.governor)
            .map_err(|e| AccrualError::Store(e.to_string()))?;
        store
            .put_meta(Self::META_GOVERNOR, &governor_bytes)
            .map_err(|e| AccrualError::Store(e.to_string()))?;

        store
            .put_meta(Self::META_RATE, &self.accrued_per_second.to_be_bytes())
            .map_err(|e| AccrualError::Store(e.to_string()))?;

        for (identity, record) in &self.records {
            let bytes = bincode::serialize(record)
                .map_err(|e| AccrualError::Store(e.to_string()))?;
            store
                .put_record(identity, &bytes)
                .map_err(|e| AccrualError::Store(e.to_string()))?;
        }
        Ok(())
    }

    /// Restore an engine from a store.
    pub fn load_from_store(store: &dyn AccrualStore) -> Result<Self, AccrualError> {
        let governor = match store
            .get_meta(Self::META_GOVERNOR)
            .map_err(|e| AccrualError::Store(e.to_string()))?
        {
            Some(bytes) => bincode::deserialize(&bytes)
                .map_err(|e| AccrualError::Store(e.to_string()))?,
            None => return Err(AccrualError::Store("missing governor meta entry".into())),
        };

        let accrued_per_second = match store
            .get_meta(Self::META_RATE)
            .map_err(|e| AccrualError::Store(e.to_string()))?
        {
            Some(bytes) if bytes.len() >= 16 => {
                u128::from_be_bytes(bytes[..16].try_into().expect("length checked above"))
            }
            _ => 0,
        };

        let entries = store
            .iter_records()
            .map_err(|e| AccrualError::Store(e.to_string()))?;
        let mut records = HashMap::new();
        for (identity, bytes) in entries {
            let record: AccrualRecord = bincode::deserialize(&bytes)
                .map_err(|e| AccrualError::Store(e.to_string()))?;
            records.insert(identity, record);
        }

        Ok(Self {
            governor,
            accrued_per_second,
            records,
            pending_events: Vec::new(),
        })
    }
}
