// SPDX-License-Identifier: MPL-2.0
//! Centralized styling functions for UI components.

pub mod button;
pub mod container;
