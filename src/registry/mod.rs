// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Ordered configuration registry and the sources it is built from.

pub mod application;
pub mod configtree;
pub mod environment;
pub mod source;

pub use application::{load_application_config, parse_application_config};
pub use configtree::load_config_tree;
pub use environment::system_environment;
pub use source::{PropertySource, Registry};
