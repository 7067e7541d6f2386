pub mod flexible;
pub mod toposort;
pub mod tracks;
