use serde::Deserialize;

/// Request body for score submission. Optional at the wire level so that an
/// absent value maps to the missing-score error instead of a body-parse
/// rejection.
#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    pub score: Option<i32>,
}

#[cfg(test)]
mod dto_tests {
    use super::*;

    #[test]
    fn absent_score_deserializes_to_none() {
        let req: SubmitScoreRequest = serde_json::from_str("{}").unwrap();
        assert!(req.score.is_none());
    }

    #[test]
    fn numeric_score_is_kept() {
        let req: SubmitScoreRequest = serde_json::from_str(r#"{"score": 20}"#).unwrap();
        assert_eq!(req.score, Some(20));
    }
}
