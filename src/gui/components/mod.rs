// src/gui/components/mod.rs
pub mod filter_bar;
pub mod nav_bar;
pub mod player_card;
pub mod stat_counter;
