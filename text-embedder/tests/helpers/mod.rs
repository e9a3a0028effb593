use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Build a JSON body mimicking a real OpenAI embeddings response.
pub fn embeddings_body(vectors: &[Vec<f32>]) -> serde_json::Value {
    let data: Vec<serde_json::Value> = vectors
        .iter()
        .enumerate()
        .map(|(i, v)| serde_json::json!({ "object": "embedding", "index": i, "embedding": v }))
        .collect();
    serde_json::json!({
        "object": "list",
        "data": data,
        "model": "text-embedding-3-small",
        "usage": { "prompt_tokens": 8, "total_tokens": 8 },
    })
}

/// Mount a successful `POST /embeddings` mock that must be hit exactly once.
pub async fn mount_ok(server: &MockServer, vectors: &[Vec<f32>]) {
    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(embeddings_body(vectors)))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a `POST /embeddings` mock that rejects the API key.
pub async fn mount_unauthorized(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/embeddings"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": {
                "message": "Incorrect API key provided.",
                "type": "authentication_error",
                "param": null,
                "code": "invalid_api_key",
            }
        })))
        .mount(server)
        .await;
}
