use crate::error::Result;
use crate::model::Photo;
use std::path::PathBuf;

/// Abstract interface for snapshot I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while PhotoStore handles the "what" (capacity, identity, ordering).
pub trait StorageBackend {
    /// Load the full record set, in store order.
    /// A backend that has never been written returns an empty list.
    fn load_photos(&self) -> Result<Vec<Photo>>;

    /// Replace the full record set.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_photos(&self, photos: &[Photo]) -> Result<()>;

    /// Where the snapshot lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
