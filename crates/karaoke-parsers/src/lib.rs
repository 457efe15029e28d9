pub mod attributes;
pub mod key;
pub mod keywords;
pub mod metadata;
pub mod normalize;
pub mod score;

pub use attributes::{determine_attributes, Attributes};
pub use metadata::{parse_metadata, ParsedMetadata};
pub use normalize::{clean_text, normalize_for_comparison};
pub use score::{relevance_score, score_candidate, ScoreInput};
