pub mod cache;
pub mod condition;
pub mod error;
pub mod format;
pub mod openweather;
pub mod provider;
pub mod service;
pub mod types;

#[cfg(test)]
pub mod stub;
