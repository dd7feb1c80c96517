/// Static informational endpoint for the API-testing frontend.
pub async fn my_postman_info() -> &'static str {
    "Hello from request-relay"
}
