//! Identifiers linking children to the parent they were built for.
//!
//! Parents own their children outright. A child only remembers the id of its
//! parent, so attaching it to a different parent can be detected without a
//! back-pointer.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Process-unique identity of a [`Mesh`](crate::Mesh).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(u64);

impl MeshId {
    pub(crate) fn next() -> Self {
        Self(next_id())
    }
}

/// Process-unique identity of a [`DatasetGroup`](crate::DatasetGroup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(u64);

impl GroupId {
    pub(crate) fn next() -> Self {
        Self(next_id())
    }
}
