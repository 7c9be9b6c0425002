// infogain/src/commands/mod.rs
pub mod entropy;
pub mod gain;
pub mod sigmoid;
