//! Policy table: static channel id -> ChannelMode mapping.
//!
//! Built once at startup and validated at construction. Read-only afterwards,
//! so it can be shared across concurrent message handlers without locking.

use crate::domain::{ChannelMode, DomainError};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    modes: HashMap<u64, ChannelMode>,
    /// Channel ids in configuration order.
    order: Vec<u64>,
}

impl PolicyTable {
    /// Build the table from per-mode channel lists.
    ///
    /// A channel listed under two different modes is rejected. Repeating an id
    /// within the same mode is harmless and collapsed.
    pub fn new<I, C>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (ChannelMode, C)>,
        C: IntoIterator<Item = u64>,
    {
        let mut table = Self::default();
        for (mode, channels) in entries {
            for channel_id in channels {
                match table.modes.get(&channel_id) {
                    Some(&existing) if existing == mode => {}
                    Some(&existing) => {
                        return Err(DomainError::OverlappingChannel {
                            channel_id,
                            first: existing,
                            second: mode,
                        });
                    }
                    None => {
                        table.modes.insert(channel_id, mode);
                        table.order.push(channel_id);
                    }
                }
            }
        }
        Ok(table)
    }

    /// Mode of the channel, or `None` if the channel is not moderated.
    pub fn lookup_mode(&self, channel_id: u64) -> Option<ChannelMode> {
        self.modes.get(&channel_id).copied()
    }

    /// Channels configured under `mode`, in configuration order.
    pub fn channels_for(&self, mode: ChannelMode) -> Vec<u64> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.modes.get(id) == Some(&mode))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
