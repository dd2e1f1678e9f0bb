// src/store.rs
//! In-memory record collection shared by every request handler.
//!
//! One mutex guards the whole `Vec`; each operation takes it exactly once, so
//! id assignment and the list mutation happen together. Nothing awaits while
//! the guard is held.

use std::sync::{Mutex, MutexGuard};

use crate::airdrop::{parse_deadline, Airdrop, AirdropPatch, AirdropView, ValidNewAirdrop};
use crate::config::consts::SEED_AIRDROPS;
use crate::error::{RegistryError, RegistryResult};
use crate::specs::airdrops::ScrapedAirdrop;

#[derive(Debug, Default)]
pub struct AirdropStore {
    records: Mutex<Vec<Airdrop>>,
}

impl AirdropStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the two sample records the service ships with.
    pub fn with_samples() -> Self {
        let mut records = Vec::with_capacity(SEED_AIRDROPS.len());
        for (name, deadline) in SEED_AIRDROPS {
            // Constants; a parse failure here is a bug, not input.
            if let Ok(d) = parse_deadline(deadline) {
                let id = next_id(&records);
                records.push(Airdrop::new(id, s!(name), d));
            }
        }
        Self { records: Mutex::new(records) }
    }

    fn lock(&self) -> RegistryResult<MutexGuard<'_, Vec<Airdrop>>> {
        self.records
            .lock()
            .map_err(|_| RegistryError::Internal(s!("airdrop store lock poisoned")))
    }

    pub fn list(&self) -> RegistryResult<Vec<AirdropView>> {
        Ok(self.lock()?.iter().map(Airdrop::view).collect())
    }

    pub fn len(&self) -> RegistryResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> RegistryResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn create(&self, input: ValidNewAirdrop) -> RegistryResult<AirdropView> {
        let mut records = self.lock()?;
        let airdrop = Airdrop::new(next_id(&records), input.name, input.claim_deadline);
        let view = airdrop.view();
        records.push(airdrop);
        logf!("Created airdrop {} ({})", view.id, view.name);
        Ok(view)
    }

    /// Unknown id is reported before the patch is validated; a patch that
    /// fails validation changes nothing.
    pub fn update(&self, id: u32, patch: AirdropPatch) -> RegistryResult<AirdropView> {
        let mut records = self.lock()?;
        let target = records
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| RegistryError::airdrop_not_found(id))?;
        patch.validate()?.apply(target);
        logf!("Updated airdrop {id}");
        Ok(target.view())
    }

    pub fn delete(&self, id: u32) -> RegistryResult<()> {
        let mut records = self.lock()?;
        let pos = records
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| RegistryError::airdrop_not_found(id))?;
        records.remove(pos);
        logf!("Deleted airdrop {id}");
        Ok(())
    }

    /// Append scraped listings. Rows without a usable deadline are skipped.
    /// Returns the number added.
    pub fn import<I>(&self, scraped: I) -> RegistryResult<usize>
    where
        I: IntoIterator<Item = ScrapedAirdrop>,
    {
        let mut records = self.lock()?;
        let mut added = 0;
        for item in scraped {
            if item.name.trim().is_empty() {
                logw!("Skipping scraped airdrop with a blank name");
                continue;
            }
            let Some(deadline) = item.claim_deadline.as_deref().and_then(|d| parse_deadline(d).ok()) else {
                logw!("Skipping scraped airdrop '{}': no valid deadline", item.name);
                continue;
            };
            let mut airdrop = Airdrop::new(next_id(&records), item.name, deadline);
            airdrop.status = item.status;
            records.push(airdrop);
            added += 1;
        }
        logf!("Imported {added} scraped airdrop(s)");
        Ok(added)
    }
}

/// max(id) + 1, or 1 when empty.
fn next_id(records: &[Airdrop]) -> u32 {
    records.iter().map(|a| a.id).max().map_or(1, |m| m + 1)
}
