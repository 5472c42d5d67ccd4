// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system. Locale files are embedded from
//! `assets/i18n/` at build time; the active locale is resolved from the CLI
//! flag, then the config file, then the OS locale, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
