use thiserror::Error;

/// The ways a sort can fail. Every failure is reported as the result of the
/// offending call; there are no partial results.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, Ord, PartialEq, PartialOrd)]
pub enum Error {
    /// Some component holds more than one vertex, so the graph has a cycle
    /// and no strict topological order exists.
    #[error("cycles in graph")]
    Cycles,

    /// Two distinct source objects projected to the same vertex key, making
    /// the mapping back from vertices to sources ambiguous.
    #[error("two source objects project to the same vertex key")]
    DuplicateKey,
}
