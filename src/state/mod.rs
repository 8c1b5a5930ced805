mod editor_state;
mod session;

pub use editor_state::EditorState;
pub use session::InteractionSession;
