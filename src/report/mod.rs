// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret reporter: resolves labelled secrets once the application is ready
//! and logs them.

pub mod entries;
pub mod reporter;

pub use entries::{default_entries, Lookup, ReportEntry};
pub use reporter::{read_secret_file, ReportedSecret, SecretReporter};
