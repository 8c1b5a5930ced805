use thiserror::Error;

use crate::shape::ShapeId;

/// Errors raised while routing an event through the editor.
///
/// None of these reach the user. The public event handlers log them and
/// carry on, since every one of them describes a gesture that simply has
/// nothing to act on.
#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    /// The id does not name a shape in the scene
    #[error("shape {0} is not in the scene")]
    ShapeNotFound(ShapeId),

    /// The operation needs a selected shape
    #[error("no shape is selected")]
    NoSelection,

    /// Text editing was attempted on a non-text shape
    #[error("shape {id} is a {kind}, not text")]
    NotText { id: ShapeId, kind: &'static str },

    /// An animation target was given while no shape was armed
    #[error("no shape is armed for animation")]
    NothingArmed,
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
