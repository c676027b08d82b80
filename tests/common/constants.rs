//! Shared constants for end-to-end tests
//!
//! When the seed catalog changes, update only this file and `fixtures.rs`.
#![allow(dead_code)]

// ============================================================================
// Seed Catalog IDs
// ============================================================================

/// Artist ID for "Red Hot Chili Peppers"
pub const ARTIST_1_ID: u64 = 1;
pub const ARTIST_1_NAME: &str = "Red Hot Chili Peppers";

/// Album ID for "Stadium Arcadium" by Red Hot Chili Peppers
pub const ALBUM_1_ID: u64 = 1;
pub const ALBUM_1_NAME: &str = "Stadium Arcadium";

/// Song ID for "Dani California" on Stadium Arcadium
pub const SONG_1_ID: u64 = 1;
pub const SONG_1_NAME: &str = "Dani California";
pub const SONG_1_TRACK_NUMBER: i64 = 1;
pub const SONG_1_LYRICS: &str = "Getting born in the state of Mississippi";

/// First identifier handed out for every kind after seeding
pub const FIRST_NEW_ID: u64 = 2;

pub const DELETED_MESSAGE: &str = "Successfully deleted";

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness checks (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

/// HTTP request timeout for test client (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 5;
