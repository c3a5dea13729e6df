//! Notifier-RS Library
//!
//! A notification sender whose output channels are stacked at runtime as
//! decorators around a base notifier, plus the CLI that drives it.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod services;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
