/// Failure taxonomy for the upstream feed round trip.
///
/// Nothing here is recovered from; the serving boundary maps every variant
/// to the same generic failure response.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("network error: {0}")]
    Network(String),

    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("malformed upstream payload: {0}")]
    Decode(String),
}
