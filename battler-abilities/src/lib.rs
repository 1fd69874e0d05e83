extern crate alloc;

pub mod abilities;
pub mod battle;
pub mod catalog;
pub mod common;
pub mod data;
pub mod dispatch;
pub mod error;
pub mod rng;
