pub mod active_filters;
pub mod case_grid;
pub mod featured;
pub mod filter_bar;
pub mod header;
pub mod loading_overlay;
pub mod scroll;
pub mod search_bar;
pub mod stats;
