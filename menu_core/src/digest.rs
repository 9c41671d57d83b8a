use std::hash::{DefaultHasher, Hash, Hasher};

pub type DigestOutput = u64;

/// A cheap fingerprint of a value's contents. Two equal values have equal
/// digests; views compare digests to decide whether to re-read.
pub trait Digestible {
    fn digest(&self) -> DigestOutput;
}

pub(crate) fn hash_digest<T: Hash + ?Sized>(value: &T) -> DigestOutput {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
