//! Progress and projected-completion forecasting for the Mission Control dashboard.
//!
//! The core is [`services::completion_estimate`], which turns remaining work into a
//! projected completion date on a business-day calendar ([`domain::calendar`]).

pub mod commands;
pub mod domain;
pub mod services;

#[cfg(test)]
mod test_support;
