//! Posting variant: the value a word token maps to in the index
//!
//! Most words appear in exactly one record, so the posting collapses to a
//! bare address instead of paying for a one-element vector. The variant is
//! normalized by its own methods only: `Many` always holds at least two
//! distinct addresses, so no call site ever observes (or has to handle) a
//! degenerate multi-element form.

use serde::Serialize;

/// Dense integer proxy for a record key
///
/// Unique among live keys at any instant, but reusable across the index
/// lifetime: compaction reassigns the whole address space.
pub type Address = u32;

/// Addresses of the records containing one word token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Posting {
    /// The word appears in exactly one record
    Single(Address),
    /// The word appears in two or more records, in insertion order
    Many(Vec<Address>),
}

/// Outcome of removing an address from a posting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Removal {
    /// The address was not in the posting
    Absent,
    /// The address was removed; the posting is still non-empty
    Removed,
    /// The address was the posting's last entry; the caller must discard
    /// the whole posting (its word no longer indexes anything)
    Emptied,
}

impl Posting {
    /// Posting for a word seen in one record
    pub fn new(address: Address) -> Self {
        Posting::Single(address)
    }

    /// Add an address, promoting to `Many` on the second distinct entry.
    /// Returns false when the address was already present.
    pub fn insert(&mut self, address: Address) -> bool {
        match self {
            Posting::Single(existing) if *existing == address => false,
            Posting::Single(existing) => {
                *self = Posting::Many(vec![*existing, address]);
                true
            }
            Posting::Many(addresses) => {
                if addresses.contains(&address) {
                    return false;
                }
                addresses.push(address);
                true
            }
        }
    }

    /// Remove an address, collapsing `Many` back to `Single` at one entry
    pub fn remove(&mut self, address: Address) -> Removal {
        match self {
            Posting::Single(existing) if *existing == address => Removal::Emptied,
            Posting::Single(_) => Removal::Absent,
            Posting::Many(addresses) => {
                let Some(at) = addresses.iter().position(|&a| a == address) else {
                    return Removal::Absent;
                };
                addresses.remove(at);
                if addresses.len() == 1 {
                    *self = Posting::Single(addresses[0]);
                }
                Removal::Removed
            }
        }
    }

    /// Whether the posting contains an address
    pub fn contains(&self, address: Address) -> bool {
        self.as_slice().contains(&address)
    }

    /// Number of addresses in the posting (never zero)
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// A posting is never empty; provided for clippy symmetry
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Both cases viewed uniformly as a slice of addresses
    pub fn as_slice(&self) -> &[Address] {
        match self {
            Posting::Single(address) => std::slice::from_ref(address),
            Posting::Many(addresses) => addresses,
        }
    }

    /// Rewrite every address through `map` (compaction support)
    pub fn map_addresses(&mut self, mut map: impl FnMut(Address) -> Address) {
        match self {
            Posting::Single(address) => *address = map(*address),
            Posting::Many(addresses) => {
                for address in addresses {
                    *address = map(*address);
                }
            }
        }
    }
}
