// infogain/src/lib.rs
//! # infogain CLI Application
//!
//! This crate provides the command-line interface for the infogain toolkit:
//! entropy of a frequency distribution, information gain of candidate splits
//! over a CSV dataset, and the logistic sigmoid.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
