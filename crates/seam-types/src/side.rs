use serde::{Deserialize, Serialize};

/// Which of the two compared sequences a position or chunk refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The left-hand sequence a comparison starts from.
    Original,
    /// The right-hand sequence a comparison leads to.
    Revised,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Side::Original => Side::Revised,
            Side::Revised => Side::Original,
        }
    }
}
