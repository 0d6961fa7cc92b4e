pub mod filter;
pub mod keywords;
pub mod ranking;

pub use filter::{filter, FilterCriteria};
pub use keywords::KeywordIndex;
pub use ranking::{RankedProgram, RankingEngine};
