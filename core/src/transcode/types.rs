use serde::{Deserialize, Serialize};

/// One token of a parsed tweet, keyed by its engine-assigned 1-based index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub index: i64,
    pub word: String,
    #[serde(rename = "originalText")]
    pub original_text: String,
    pub pos: String,
}

/// One dependency edge with its governor/dependent glosses resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub dep: String,
    pub governor: i64,
    #[serde(rename = "governorGloss")]
    pub governor_gloss: String,
    pub dependent: i64,
    #[serde(rename = "dependentGloss")]
    pub dependent_gloss: String,
}

/// Stanford-style parse of a single tweet. `index` is the 0-based position
/// of the tweet in the original request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetParse {
    pub index: usize,
    pub tokens: Vec<Token>,
    #[serde(rename = "basicDependencies")]
    pub basic_dependencies: Vec<Dependency>,
}

impl TweetParse {
    pub fn empty(index: usize) -> Self {
        Self {
            index,
            tokens: Vec::new(),
            basic_dependencies: Vec::new(),
        }
    }
}
