use super::error::{CatalogError, CatalogResult};
use super::models::EntityKind;

/// Identifier reserved for the first seeded record of every kind.
pub const RESERVED_SEED_ID: u64 = 1;

/// Hands out identifiers, one strictly increasing sequence per entity kind.
/// Counters never rewind, so an identifier freed by a delete is not reissued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next_artist_id: u64,
    next_album_id: u64,
    next_song_id: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        IdAllocator {
            next_artist_id: RESERVED_SEED_ID + 1,
            next_album_id: RESERVED_SEED_ID + 1,
            next_song_id: RESERVED_SEED_ID + 1,
        }
    }
}

impl IdAllocator {
    /// Starts every sequence above the highest identifier already in use.
    /// Fails when a kind already holds `u64::MAX`.
    pub fn starting_after(
        max_artist_id: u64,
        max_album_id: u64,
        max_song_id: u64,
    ) -> CatalogResult<Self> {
        let after = |max_id: u64, kind: EntityKind| {
            max_id
                .max(RESERVED_SEED_ID)
                .checked_add(1)
                .ok_or(CatalogError::IdsExhausted(kind))
        };
        Ok(IdAllocator {
            next_artist_id: after(max_artist_id, EntityKind::Artist)?,
            next_album_id: after(max_album_id, EntityKind::Album)?,
            next_song_id: after(max_song_id, EntityKind::Song)?,
        })
    }

    /// `u64::MAX` is never handed out: the counter stays put once it would
    /// have to move past it, and every later call fails.
    pub fn next(&mut self, kind: EntityKind) -> CatalogResult<u64> {
        let counter = self.counter_mut(kind);
        let id = *counter;
        *counter = id
            .checked_add(1)
            .ok_or(CatalogError::IdsExhausted(kind))?;
        Ok(id)
    }

    /// The identifier the next call to [`IdAllocator::next`] will return.
    pub fn peek(&self, kind: EntityKind) -> u64 {
        match kind {
            EntityKind::Artist => self.next_artist_id,
            EntityKind::Album => self.next_album_id,
            EntityKind::Song => self.next_song_id,
        }
    }

    fn counter_mut(&mut self, kind: EntityKind) -> &mut u64 {
        match kind {
            EntityKind::Artist => &mut self.next_artist_id,
            EntityKind::Album => &mut self.next_album_id,
            EntityKind::Song => &mut self.next_song_id,
        }
    }
}
