#![allow(clippy::approx_constant)]
#![allow(clippy::wildcard_enum_match_arm)]

mod casts;
mod config;
mod properties;
