use super::*;

#[test]
fn display_messages_are_stable() {
    assert_eq!(
        Error::BadRequest("missing source".to_string()).to_string(),
        "Bad request: missing source"
    );
    assert_eq!(Error::InvalidApiKey.to_string(), "Invalid API key");
    assert_eq!(Error::InsufficientCredits.to_string(), "Insufficient credits");
    assert_eq!(Error::RateLimitExceeded.to_string(), "Rate limit exceeded");
    assert_eq!(
        Error::Timeout.to_string(),
        "Timeout waiting for render to complete"
    );
}

#[test]
fn generic_api_error_falls_back_without_hint() {
    assert_eq!(Error::Api(String::new()).to_string(), "Creatomate API error");
    assert_eq!(Error::Api("server melted".to_string()).to_string(), "server melted");
}

#[test]
fn status_codes_map_to_variants() {
    assert!(matches!(Error::from_status(400, "h"), Error::BadRequest(h) if h == "h"));
    assert!(matches!(Error::from_status(401, ""), Error::InvalidApiKey));
    assert!(matches!(Error::from_status(402, ""), Error::InsufficientCredits));
    assert!(matches!(Error::from_status(429, ""), Error::RateLimitExceeded));
    assert!(matches!(Error::from_status(500, "oops"), Error::Api(h) if h == "oops"));
    assert!(matches!(Error::from_status(404, ""), Error::Api(h) if h.is_empty()));
}

#[test]
fn wait_error_keeps_source_and_finished() {
    let err = WaitError::from(Error::Timeout);
    assert!(err.finished.is_empty());
    assert!(err.error.is_interrupted());
    assert_eq!(err.to_string(), "Timeout waiting for render to complete");
    assert!(std::error::Error::source(&err).is_some());
}
