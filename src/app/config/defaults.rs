// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and bounds for configuration.
//!
//! # Categories
//!
//! - **Gallery**: thumbnail size, column count, overscan rows
//! - **Auth**: request timeout

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Side of a square thumbnail in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 160;
pub const MIN_THUMBNAIL_SIZE: u32 = 64;
pub const MAX_THUMBNAIL_SIZE: u32 = 512;

/// Grid columns. Cell side is viewport width divided by this.
pub const DEFAULT_COLUMNS: u32 = 2;
pub const MIN_COLUMNS: u32 = 1;
pub const MAX_COLUMNS: u32 = 6;

/// Rows bound above and below the visible window.
pub const DEFAULT_OVERSCAN_ROWS: u32 = 2;
pub const MIN_OVERSCAN_ROWS: u32 = 0;
pub const MAX_OVERSCAN_ROWS: u32 = 8;

// ==========================================================================
// Auth Defaults
// ==========================================================================

/// Per-request timeout for the authentication service.
pub const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 15;
pub const MIN_AUTH_TIMEOUT_SECS: u64 = 1;
pub const MAX_AUTH_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_THUMBNAIL_SIZE > 0);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);

    assert!(MIN_COLUMNS > 0);
    assert!(DEFAULT_COLUMNS >= MIN_COLUMNS && DEFAULT_COLUMNS <= MAX_COLUMNS);

    assert!(DEFAULT_OVERSCAN_ROWS >= MIN_OVERSCAN_ROWS);
    assert!(DEFAULT_OVERSCAN_ROWS <= MAX_OVERSCAN_ROWS);

    assert!(MIN_AUTH_TIMEOUT_SECS > 0);
    assert!(DEFAULT_AUTH_TIMEOUT_SECS >= MIN_AUTH_TIMEOUT_SECS);
    assert!(DEFAULT_AUTH_TIMEOUT_SECS <= MAX_AUTH_TIMEOUT_SECS);
};
