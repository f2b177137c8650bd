#![allow(dead_code)]

pub mod fixture_helpers;
pub mod utils;
