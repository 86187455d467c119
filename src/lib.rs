pub mod action;
pub mod config;
pub mod filter;
pub mod network;
pub mod report;
pub mod util;
pub mod weights;
