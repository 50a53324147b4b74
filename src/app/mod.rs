pub mod controller;
pub mod editor;
pub mod input_handler;
pub mod layout;
pub mod state;

pub use controller::ToolController;
pub use editor::EditorApp;

/// The closed set of drawing tools; exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Pencil,
    Fill,
    Eraser,
}

impl Tool {
    pub fn label(self) -> &'static str {
        match self {
            Tool::Pencil => "✏ Pencil",
            Tool::Fill => "💧 Fill",
            Tool::Eraser => "⬜ Eraser",
        }
    }
}
