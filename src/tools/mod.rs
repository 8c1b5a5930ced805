use crate::shape::ShapeKind;

/// The tool currently governing pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Line,
    Rectangle,
    Ellipse,
    Text,
    #[default]
    Select,
    Animate,
}

impl Mode {
    /// Toolbar order
    pub const ALL: [Mode; 6] = [
        Mode::Ellipse,
        Mode::Line,
        Mode::Rectangle,
        Mode::Text,
        Mode::Select,
        Mode::Animate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Line => "Line",
            Mode::Rectangle => "Rectangle",
            Mode::Ellipse => "Ellipse",
            Mode::Text => "Text",
            Mode::Select => "Select",
            Mode::Animate => "Animate",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Mode::Line => "╱",
            Mode::Rectangle => "▭",
            Mode::Ellipse => "◯",
            Mode::Text => "T",
            Mode::Select => "⬉",
            Mode::Animate => "▶",
        }
    }

    /// The kind of shape a pointer press creates in this mode, if any
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Mode::Line => Some(ShapeKind::Line),
            Mode::Rectangle => Some(ShapeKind::Rectangle),
            Mode::Ellipse => Some(ShapeKind::Ellipse),
            Mode::Text => Some(ShapeKind::Text),
            Mode::Select | Mode::Animate => None,
        }
    }

    pub fn is_drawing_mode(&self) -> bool {
        self.shape_kind().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawing_modes() {
        let drawing: Vec<_> = Mode::ALL.iter().filter(|m| m.is_drawing_mode()).collect();
        assert_eq!(drawing.len(), 4);
        assert!(!Mode::Select.is_drawing_mode());
        assert!(!Mode::Animate.is_drawing_mode());
    }
}
