//! Error types with diagnostics using miette
//!
//! Registration failures surface immediately; a typo'd coordinate tag is
//! deliberately not caught until something tries to resolve it.

use miette::Diagnostic;
use thiserror::Error;

use crate::metrics::Op;

// ============================================================================
// Coordinate Errors
// ============================================================================

/// Errors from unit/axis registration and coordinate resolution.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum CoordError {
    #[error("unknown coordinate system: {name}")]
    #[diagnostic(
        code(candru::coord::unknown_system),
        help("register the unit or axis on the canvas before resolving")
    )]
    UnknownCoordinate { name: String },

    #[error("invalid unit or axis name: {name:?}")]
    #[diagnostic(
        code(candru::coord::invalid_identifier),
        help(
            "names must be non-empty and may not shadow a reserved word, an existing unit or axis, or the \"axis_\" namespace"
        )
    )]
    InvalidIdentifier { name: String },

    #[error("invalid {op} between {lhs} and {rhs}")]
    #[diagnostic(code(candru::coord::type_mismatch))]
    TypeMismatch {
        op: Op,
        lhs: &'static str,
        rhs: &'static str,
    },
}

// ============================================================================
// Grid Errors
// ============================================================================

/// Errors from grid derivation.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("exactly one of spacing or size must be given for the {axis} dimension")]
    #[diagnostic(
        code(candru::grid::sizing),
        help("pass one of `spacing`/`spacing_{axis}` or `size`/`size_{axis}`, never both or neither")
    )]
    Sizing { axis: char },

    #[error("grid must have at least one row and one cell")]
    #[diagnostic(code(candru::grid::empty))]
    Empty,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Coord(#[from] CoordError),
}
