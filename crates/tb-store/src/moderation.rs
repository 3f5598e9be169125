//! Admin moderation actions over the posts collection: approving and
//! rejecting pending publications.

use crate::RecordStore;
use tb_core::error::Result;
use tb_core::models::{Post, PostStatus, RecordId};
use tracing::info;

/// Publishes the post. Returns `false` when no post carries the id:
/// nothing to do, not an error.
pub fn approve(store: &RecordStore, id: RecordId) -> Result<bool> {
    set_status(store, id, PostStatus::Published, None)
}

/// Rejects the post, optionally attaching the reviewer's note.
pub fn reject(store: &RecordStore, id: RecordId, note: Option<String>) -> Result<bool> {
    set_status(store, id, PostStatus::Rejected, note)
}

fn set_status(
    store: &RecordStore,
    id: RecordId,
    status: PostStatus,
    note: Option<String>,
) -> Result<bool> {
    let Some(mut post) = store.get::<Post>(id) else {
        return Ok(false);
    };

    post.status = status;
    if note.is_some() {
        post.moderation_note = note;
    }

    store.upsert(post)?;
    info!(id, status = status.as_str(), "post moderated");
    Ok(true)
}
