use crate::types::Program;

use super::keywords::KeywordIndex;

/// Score added when a stem appears in the program title
pub const TITLE_WEIGHT: u32 = 3;
/// Score added when a stem appears in the program summary
pub const SUMMARY_WEIGHT: u32 = 1;

/// A program paired with its relevance score for one query
#[derive(Debug, Clone, Copy)]
pub struct RankedProgram<'a> {
    pub program: &'a Program,
    pub score: u32,
}

/// Ranks programs against free-text English queries.
///
/// Every query token is looked up in the [`KeywordIndex`], and the whole
/// query re-joined with single spaces is looked up once more as a phrase so
/// that multi-word entries like "machine learning" match. Both passes add
/// to the same score. Each stem contributes at most once per field:
/// [`TITLE_WEIGHT`] for the title and [`SUMMARY_WEIGHT`] for the summary.
pub struct RankingEngine<'a> {
    index: &'a KeywordIndex,
}

impl<'a> RankingEngine<'a> {
    pub fn new(index: &'a KeywordIndex) -> Self {
        Self { index }
    }

    /// Programs with a positive score, best first.
    ///
    /// Ties keep their order from `programs`.
    pub fn search<'p>(&self, programs: &'p [Program], query: &str) -> Vec<&'p Program> {
        self.rank(programs, query)
            .into_iter()
            .map(|ranked| ranked.program)
            .collect()
    }

    /// Like [`search`](Self::search) but keeps the scores.
    pub fn rank<'p>(&self, programs: &'p [Program], query: &str) -> Vec<RankedProgram<'p>> {
        let query = query.to_lowercase();
        let tokens: Vec<&str> = query.split_whitespace().collect();
        if tokens.is_empty() {
            return Vec::new();
        }
        let phrase = tokens.join(" ");

        let mut ranked: Vec<RankedProgram<'p>> = programs
            .iter()
            .map(|program| RankedProgram {
                program,
                score: self.score(program, &tokens, &phrase),
            })
            .filter(|ranked| ranked.score > 0)
            .collect();

        // sort_by is stable, which keeps input order among equal scores
        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            query = %phrase,
            tokens = tokens.len(),
            matched = ranked.len(),
            "ranked programs"
        );

        ranked
    }

    fn score(&self, program: &Program, tokens: &[&str], phrase: &str) -> u32 {
        let title = program.title.to_lowercase();
        let summary = program.summary.to_lowercase();

        let token_score: u32 = tokens
            .iter()
            .map(|token| self.score_term(token, &title, &summary))
            .sum();

        token_score + self.score_term(phrase, &title, &summary)
    }

    fn score_term(&self, term: &str, title: &str, summary: &str) -> u32 {
        self.index
            .lookup(term)
            .iter()
            .map(|stem| {
                let mut score = 0;
                if title.contains(stem.as_str()) {
                    score += TITLE_WEIGHT;
                }
                if summary.contains(stem.as_str()) {
                    score += SUMMARY_WEIGHT;
                }
                score
            })
            .sum()
    }
}
