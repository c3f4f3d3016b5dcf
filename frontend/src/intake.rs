//! File validation and the pending-upload set.
//!
//! Everything here is pure, synchronous logic over [`CandidateFile`] values,
//! generic over the browser file handle so it runs on the host in tests.

use crate::config::{ALLOWED_EXTENSIONS, MAX_FILE_SIZE};
use crate::types::{CandidateFile, IntakeError, ValidationError};

/// Validate a single candidate against the type and size constraints.
///
/// Pure function, no side effects. The extension check is case-insensitive;
/// a dotless filename is rejected as an unsupported type, never a crash.
pub fn validate<H>(file: &CandidateFile<H>) -> Result<(), ValidationError> {
    let extension = file.extension();
    if !ALLOWED_EXTENSIONS.iter().any(|a| *a == extension) {
        return Err(ValidationError::UnsupportedType { filename: file.name.clone() });
    }
    if file.size_bytes > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge { filename: file.name.clone() });
    }
    Ok(())
}

/// Result of feeding one batch of candidates into the pending set.
#[derive(Debug)]
pub struct AddOutcome<H> {
    /// Files that passed validation and were newly appended.
    pub accepted: usize,
    /// Rejected files paired with the reason, in batch order.
    pub rejected: Vec<(CandidateFile<H>, ValidationError)>,
}

/// The ordered, de-duplicated collection of validated files awaiting
/// submission.
///
/// Invariants: insertion order is preserved, no two elements share the
/// `(name, size)` identity, and every element has passed [`validate`].
#[derive(Clone, Debug, Default)]
pub struct PendingSet<H> {
    files: Vec<CandidateFile<H>>,
}

impl<H> PendingSet<H> {
    pub fn new() -> Self {
        PendingSet { files: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[CandidateFile<H>] {
        &self.files
    }

    fn contains_identity(&self, candidate: &CandidateFile<H>) -> bool {
        self.files.iter().any(|f| f.identity() == candidate.identity())
    }

    /// Feed a batch of candidates through validation into the set.
    ///
    /// Processing never short-circuits: a rejected file is recorded and the
    /// rest of the batch continues. A valid file whose identity is already
    /// present is silently skipped, so re-dropping an overlapping selection
    /// does not produce duplicate rows.
    pub fn add(&mut self, batch: Vec<CandidateFile<H>>) -> AddOutcome<H> {
        let mut outcome = AddOutcome { accepted: 0, rejected: Vec::new() };
        for candidate in batch {
            match validate(&candidate) {
                Err(err) => outcome.rejected.push((candidate, err)),
                Ok(()) => {
                    if !self.contains_identity(&candidate) {
                        self.files.push(candidate);
                        outcome.accepted += 1;
                    }
                }
            }
        }
        outcome
    }

    /// Remove exactly one file, preserving the relative order of the rest.
    ///
    /// An out-of-bounds index is a wiring bug, reported as
    /// [`IntakeError::IndexOutOfRange`] with the set left untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<CandidateFile<H>, IntakeError> {
        if index >= self.files.len() {
            return Err(IntakeError::IndexOutOfRange { index, len: self.files.len() });
        }
        Ok(self.files.remove(index))
    }

    /// Empty the set after a successful submission round-trip.
    pub fn clear(&mut self) {
        self.files.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size_bytes: u64) -> CandidateFile<()> {
        CandidateFile { name: name.to_string(), size_bytes, handle: () }
    }

    #[test]
    fn accepts_allowed_extensions_case_insensitively() {
        assert!(validate(&file("a.pdf", 100)).is_ok());
        assert!(validate(&file("A.PDF", 100)).is_ok());
        assert!(validate(&file("scan.TiFf", 100)).is_ok());
    }

    #[test]
    fn rejects_unknown_extension() {
        assert_eq!(
            validate(&file("a.doc", 100)),
            Err(ValidationError::UnsupportedType { filename: "a.doc".to_string() })
        );
    }

    #[test]
    fn rejects_dotless_filename_as_unsupported() {
        assert_eq!(
            validate(&file("README", 100)),
            Err(ValidationError::UnsupportedType { filename: "README".to_string() })
        );
    }

    #[test]
    fn rejects_oversized_file_regardless_of_extension() {
        assert_eq!(
            validate(&file("big.pdf", MAX_FILE_SIZE + 1)),
            Err(ValidationError::TooLarge { filename: "big.pdf".to_string() })
        );
    }

    #[test]
    fn accepts_file_at_exactly_the_ceiling() {
        assert!(validate(&file("edge.pdf", MAX_FILE_SIZE)).is_ok());
    }

    #[test]
    fn duplicate_identity_is_added_once() {
        let mut set = PendingSet::new();
        set.add(vec![file("a.pdf", 100)]);
        let outcome = set.add(vec![file("a.pdf", 100)]);
        assert_eq!(set.len(), 1);
        assert_eq!(outcome.accepted, 0);
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn same_name_different_size_is_a_distinct_file() {
        let mut set = PendingSet::new();
        set.add(vec![file("a.pdf", 100), file("a.pdf", 200)]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn invalid_file_does_not_abort_the_batch() {
        let mut set = PendingSet::new();
        let outcome = set.add(vec![file("a.pdf", 100), file("b.doc", 100), file("c.png", 100)]);
        assert_eq!(outcome.accepted, 2);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].0.name, "b.doc");
        let names: Vec<&str> = set.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "c.png"]);
    }

    #[test]
    fn remove_at_out_of_bounds_leaves_set_unchanged() {
        let mut set: PendingSet<()> = PendingSet::new();
        assert_eq!(
            set.remove_at(0).unwrap_err(),
            IntakeError::IndexOutOfRange { index: 0, len: 0 }
        );

        set.add(vec![file("a.pdf", 100)]);
        assert_eq!(
            set.remove_at(1).unwrap_err(),
            IntakeError::IndexOutOfRange { index: 1, len: 1 }
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_at_preserves_relative_order() {
        let mut set = PendingSet::new();
        set.add(vec![file("a.pdf", 1), file("b.png", 2), file("c.bmp", 3)]);
        let removed = set.remove_at(1).unwrap();
        assert_eq!(removed.name, "b.png");
        let names: Vec<&str> = set.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "c.bmp"]);
    }
}
