//! How vertices and edges are drawn

/// Marker drawn at each vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum VertexStyle {
    #[default]
    None,
    Round,
    Square,
}

impl VertexStyle {
    pub fn marker(self) -> Option<char> {
        match self {
            VertexStyle::None => None,
            VertexStyle::Round => Some('o'),
            VertexStyle::Square => Some('#'),
        }
    }

    pub fn next(self) -> Self {
        match self {
            VertexStyle::None => VertexStyle::Round,
            VertexStyle::Round => VertexStyle::Square,
            VertexStyle::Square => VertexStyle::None,
        }
    }
}

/// Stroke used for edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LineStyle {
    None,
    #[default]
    Solid,
    Dashed,
}

impl LineStyle {
    pub fn next(self) -> Self {
        match self {
            LineStyle::None => LineStyle::Solid,
            LineStyle::Solid => LineStyle::Dashed,
            LineStyle::Dashed => LineStyle::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStyle {
    pub vertices: VertexStyle,
    pub lines: LineStyle,
}
