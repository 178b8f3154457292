use serde::{Deserialize, Serialize};

/// The two finishes a floor panel can be ordered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelFinish {
    #[default]
    Opaque,
    Mirror,
}

impl PanelFinish {
    pub fn all() -> [PanelFinish; 2] {
        [PanelFinish::Opaque, PanelFinish::Mirror]
    }

    pub fn toggled(self) -> PanelFinish {
        match self {
            PanelFinish::Opaque => PanelFinish::Mirror,
            PanelFinish::Mirror => PanelFinish::Opaque,
        }
    }

    pub fn is_mirror(self) -> bool {
        self == PanelFinish::Mirror
    }

    /// Single character used when printing a grid: `.` opaque, `#` mirror.
    pub fn symbol(self) -> char {
        match self {
            PanelFinish::Opaque => '.',
            PanelFinish::Mirror => '#',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<PanelFinish> {
        match symbol {
            '.' => Some(PanelFinish::Opaque),
            '#' => Some(PanelFinish::Mirror),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PanelFinish::Opaque => "Opaque",
            PanelFinish::Mirror => "Mirror",
        }
    }
}

impl std::fmt::Display for PanelFinish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
