// SPDX-License-Identifier: Apache-2.0

//! Support code for the `rdjson-dump` driver.

pub mod dump;
pub mod samples;
