//! Hash computation for tree nodes using BLAKE3

use crate::types::Hash;
use blake3::Hasher;

/// Type discriminator fed first into every directory hash
pub const DIRECTORY_TAG: &[u8] = b"dir ";

/// Type discriminator fed first into every file hash
pub const FILE_TAG: &[u8] = b"file ";

const NAME_HASH_SEP: &[u8] = b" ";

/// Compute the hash of a directory from its children
///
/// hash = H("dir " || name_0 || " " || hash_0 || name_1 || " " || hash_1 ...)
///
/// Children must already be sorted by name. The directory's own name is not
/// an input, so the result identifies contents rather than position.
pub fn compute_directory_hash<'a, I>(children: I) -> Hash
where
    I: IntoIterator<Item = (&'a str, Hash)>,
{
    let mut hasher = Hasher::new();
    hasher.update(DIRECTORY_TAG);

    for (name, child_hash) in children {
        hasher.update(name.as_bytes());
        hasher.update(NAME_HASH_SEP);
        hasher.update(&child_hash);
    }

    *hasher.finalize().as_bytes()
}

/// Compute the hash of a file from its contents
///
/// hash = H("file " || contents)
pub fn compute_file_hash(contents: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(FILE_TAG);
    hasher.update(contents);
    *hasher.finalize().as_bytes()
}

/// Compute a generic hash of arbitrary data
pub fn compute_hash(data: &[u8]) -> Hash {
    let mut hasher = Hasher::new();
    hasher.update(data);
    *hasher.finalize().as_bytes()
}
