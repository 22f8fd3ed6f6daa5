// src/config/consts.rs

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Settings file lookup, first hit wins
pub const SETTINGS_CANDIDATES: &[&str] = &["cricdex.toml", ".store/cricdex.toml"];

// Home page
pub const CAROUSEL_PERIOD_MS: u64 = 5_000;
pub const COUNT_UP_MS: u64 = 1_500;
pub const FEATURED_COUNT: usize = 5;

// Search view: external representation keys
pub const KEY_QUERY: &str = "q";
pub const KEY_COUNTRY: &str = "country";
pub const KEY_ROLE: &str = "role";

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 760.0;
