pub mod filter;
pub mod location;
pub mod skills;
pub mod tiers;
