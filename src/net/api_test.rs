use super::*;

#[test]
fn join_url_strips_trailing_slash() {
    assert_eq!(join_url("http://localhost:8000/", TOKEN_PATH), "http://localhost:8000/token");
    assert_eq!(join_url("http://localhost:8000", REGISTER_PATH), "http://localhost:8000/register");
}

#[test]
fn aggregated_data_url_carries_period_query() {
    assert_eq!(
        aggregated_data_url("http://api.test", Period::LastWeek),
        "http://api.test/aggregated-data?period=1w"
    );
    assert_eq!(
        aggregated_data_url("http://api.test/", Period::LastMonth),
        "http://api.test/aggregated-data?period=1m"
    );
}

#[test]
fn bearer_header_formats_scheme() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn api_error_status_display() {
    assert_eq!(ApiError::Status(401).to_string(), "server responded with status 401");
}
