// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkipListError {
    #[error("allocation failed")]
    Allocation(#[from] TryReserveError),
    #[error("node bucket already holds {capacity} values")]
    BucketFull { capacity: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}
