//! Error types for vector operations.

use thiserror::Error;

/// Errors that can occur during vector operations.
///
/// Both variants signal caller misuse rather than transient faults;
/// every other operation in this crate is total over finite inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    /// The right-hand operand of a multiply was neither a scalar of the
    /// vector's component type nor another vector.
    #[error("unsupported operand type for vector multiply: {type_name}")]
    UnsupportedOperandType {
        /// Name of the rejected operand type.
        type_name: &'static str,
    },

    /// An angle was requested against a zero-length vector, for which
    /// the angle is undefined.
    #[error("cannot compute an angle with a zero-length vector")]
    ZeroLengthVector,
}
