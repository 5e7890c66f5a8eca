#![no_std]

pub mod fund_proxy;
pub mod governance;
pub mod registry_proxy;
pub mod types;
