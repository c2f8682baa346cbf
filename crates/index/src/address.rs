//! Bidirectional mapping between record keys and dense addresses
//!
//! Posting lists store compact integer addresses instead of cloned keys;
//! this table holds the one copy of each key and resolves both ways. The
//! `next` counter only moves forward: deleting a key frees its table
//! entry but leaves a hole in the numeric range, and holes are only
//! reclaimed by [`AddressTable::rebuild_dense`].

use crate::posting::Address;
use rustc_hash::FxHashMap;

/// Key ↔ address table with a monotonically increasing address counter
#[derive(Debug, Clone, Default)]
pub struct AddressTable {
    key_by_address: FxHashMap<Address, String>,
    address_by_key: FxHashMap<String, Address>,
    next: Address,
}

impl AddressTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.key_by_address.len()
    }

    /// Whether the table holds no keys
    pub fn is_empty(&self) -> bool {
        self.key_by_address.is_empty()
    }

    /// The next address that would be assigned; also the exclusive upper
    /// bound of every address ever handed out since the last rebuild
    pub fn next_address(&self) -> Address {
        self.next
    }

    /// Address for `key`, allocating one on first sight
    pub fn get_or_assign(&mut self, key: &str) -> Address {
        if let Some(&address) = self.address_by_key.get(key) {
            return address;
        }
        let address = self.next;
        self.next += 1;
        self.key_by_address.insert(address, key.to_string());
        self.address_by_key.insert(key.to_string(), address);
        address
    }

    /// Address of a live key
    pub fn address(&self, key: &str) -> Option<Address> {
        self.address_by_key.get(key).copied()
    }

    /// Key owning an address
    pub fn key(&self, address: Address) -> Option<&str> {
        self.key_by_address.get(&address).map(String::as_str)
    }

    /// Free a key's entry, returning the address it held. The address is
    /// not reused until the next [`rebuild_dense`](Self::rebuild_dense).
    pub fn remove(&mut self, key: &str) -> Option<Address> {
        let address = self.address_by_key.remove(key)?;
        self.key_by_address.remove(&address);
        Some(address)
    }

    /// Drop every entry and reset the counter
    pub fn clear(&mut self) {
        self.key_by_address.clear();
        self.address_by_key.clear();
        self.next = 0;
    }

    /// Reassign dense addresses `0..len` in ascending old-address order
    /// and return the old→new mapping for rewriting posting lists.
    pub fn rebuild_dense(&mut self) -> FxHashMap<Address, Address> {
        let mut old_addresses: Vec<Address> = self.key_by_address.keys().copied().collect();
        old_addresses.sort_unstable();

        let mut mapping = FxHashMap::default();
        let mut key_by_address = FxHashMap::default();
        let mut address_by_key = FxHashMap::default();

        for (new, &old) in old_addresses.iter().enumerate() {
            let new = new as Address;
            if let Some(key) = self.key_by_address.remove(&old) {
                address_by_key.insert(key.clone(), new);
                key_by_address.insert(new, key);
                mapping.insert(old, new);
            }
        }

        self.key_by_address = key_by_address;
        self.address_by_key = address_by_key;
        self.next = mapping.len() as Address;
        mapping
    }
}
