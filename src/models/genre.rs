use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Genres on the wheel, in segment order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Action,
    Comedie,
    Drame,
    Horreur,
    Romance,
    ScienceFiction,
    Thriller,
    Animation,
}

impl Genre {
    /// Fixed segment order of the wheel
    pub const ALL: [Genre; 8] = [
        Genre::Action,
        Genre::Comedie,
        Genre::Drame,
        Genre::Horreur,
        Genre::Romance,
        Genre::ScienceFiction,
        Genre::Thriller,
        Genre::Animation,
    ];

    /// Value sent as the `genre` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Comedie => "comedie",
            Genre::Drame => "drame",
            Genre::Horreur => "horreur",
            Genre::Romance => "romance",
            Genre::ScienceFiction => "science-fiction",
            Genre::Thriller => "thriller",
            Genre::Animation => "animation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedie => "Comédie",
            Genre::Drame => "Drame",
            Genre::Horreur => "Horreur",
            Genre::Romance => "Romance",
            Genre::ScienceFiction => "Science-fiction",
            Genre::Thriller => "Thriller",
            Genre::Animation => "Animation",
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
