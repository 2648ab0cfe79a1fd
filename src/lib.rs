//! Target Ranker - projected gain and experience rates for network targets

pub mod core;
pub mod network;
pub mod ranking;
pub mod rates;
