// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styling helpers.

pub mod button;
pub mod container;
