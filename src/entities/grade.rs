use super::EntityId;
use serde::{Deserialize, Serialize};

/// A named evaluation item owned by a subject. `score` stays `None` until graded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: EntityId,
    pub name: String,
    pub score: Option<f64>,
}

impl Grade {
    /// Score as shown in lists, `?` when not graded yet.
    pub fn display_score(&self) -> String {
        match self.score {
            Some(score) => format!("{}", score),
            None => "?".to_string(),
        }
    }
}
