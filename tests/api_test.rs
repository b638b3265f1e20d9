use cv_screener::config::ApiConfig;
use cv_screener::web::build_rocket;
use mockito::Matcher;
use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;

fn test_config(api_url: String) -> ApiConfig {
    ApiConfig {
        api_url,
        api_key: "test-key".to_string(),
        model: "deepseek-chat".to_string(),
        timeout_seconds: 5,
    }
}

// Wraps a verdict object the way the completion API returns it
fn completion_body(verdict: &str) -> String {
    serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": verdict}}]
    })
    .to_string()
}

#[test]
fn analyze_returns_scored_result_with_original_filename() {
    let mut server = mockito::Server::new();

    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            r#"{"nama_kandidat":"A","skor_kecocokan":90,"bahasa_terdeteksi":"English","ringkasan_positif":"Solid Python background.","poin_kunci_cocok":["5 years Python"],"poin_perhatian":[]}"#,
        ))
        .create();

    let client = Client::tracked(build_rocket(test_config(server.url()))).unwrap();
    let response = client
        .post("/api/analyze")
        .header(ContentType::JSON)
        .body(r#"{"jdText":"Need Python developer","cvData":[{"filename":"a.pdf","text":"5 years Python"}]}"#)
        .dispatch();

    assert_eq!(response.status(), Status::Ok);

    let results: Vec<serde_json::Value> = response.into_json().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["nama_kandidat"], "A");
    assert_eq!(results[0]["skor_kecocokan"], 90);
    assert_eq!(results[0]["original_filename"], "a.pdf");
    assert!(results[0].get("error").is_none());
}

#[test]
fn analyze_sorts_results_by_score_descending() {
    let mut server = mockito::Server::new();

    let _weak = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::Regex("fresh graduate".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            r#"{"nama_kandidat":"B","skor_kecocokan":40,"bahasa_terdeteksi":"English","ringkasan_positif":"Junior profile.","poin_kunci_cocok":[],"poin_perhatian":["No production experience"]}"#,
        ))
        .create();

    let _strong = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::Regex("5 years Python".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            r#"{"nama_kandidat":"A","skor_kecocokan":90,"bahasa_terdeteksi":"English","ringkasan_positif":"Strong fit.","poin_kunci_cocok":["Python"],"poin_perhatian":[]}"#,
        ))
        .create();

    let client = Client::tracked(build_rocket(test_config(server.url()))).unwrap();
    let response = client
        .post("/api/analyze")
        .header(ContentType::JSON)
        .body(
            r#"{"jdText":"Need Python developer","cvData":[
                {"filename":"b.pdf","text":"fresh graduate"},
                {"filename":"a.pdf","text":"5 years Python"}
            ]}"#,
        )
        .dispatch();

    assert_eq!(response.status(), Status::Ok);

    let results: Vec<serde_json::Value> = response.into_json().unwrap();
    assert_eq!(results.len(), 2);
    // highest score first, regardless of submission order
    assert_eq!(results[0]["skor_kecocokan"], 90);
    assert_eq!(results[0]["original_filename"], "a.pdf");
    assert_eq!(results[1]["skor_kecocokan"], 40);
    assert_eq!(results[1]["original_filename"], "b.pdf");
}

#[test]
fn failed_completion_yields_degraded_result() {
    let mut server = mockito::Server::new();

    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(503)
        .with_body("service unavailable")
        .create();

    let client = Client::tracked(build_rocket(test_config(server.url()))).unwrap();
    let response = client
        .post("/api/analyze")
        .header(ContentType::JSON)
        .body(r#"{"jdText":"Need Python developer","cvData":[{"filename":"a.pdf","text":"5 years Python"}]}"#)
        .dispatch();

    assert_eq!(response.status(), Status::Ok);

    let results: Vec<serde_json::Value> = response.into_json().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["skor_kecocokan"], 0);
    assert_eq!(results[0]["nama_kandidat"], "a.pdf");
    assert_eq!(results[0]["original_filename"], "a.pdf");
    assert!(results[0]["error"].is_string());
}

#[test]
fn malformed_analyze_body_is_rejected() {
    let client = Client::tracked(build_rocket(test_config(
        "http://127.0.0.1:1".to_string(),
    )))
    .unwrap();

    // missing cvData
    let response = client
        .post("/api/analyze")
        .header(ContentType::JSON)
        .body(r#"{"jdText":"Need Python developer"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);

    // no body at all
    let response = client
        .post("/api/analyze")
        .header(ContentType::JSON)
        .dispatch();
    assert!(response.status().code >= 400 && response.status().code < 500);
}

#[test]
fn empty_export_payload_is_rejected() {
    let client = Client::tracked(build_rocket(test_config(
        "http://127.0.0.1:1".to_string(),
    )))
    .unwrap();

    let response = client
        .post("/api/download_excel")
        .header(ContentType::JSON)
        .body("[]")
        .dispatch();

    assert_eq!(response.status(), Status::BadRequest);

    let body: serde_json::Value = response.into_json().unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[test]
fn export_returns_spreadsheet_attachment() {
    let client = Client::tracked(build_rocket(test_config(
        "http://127.0.0.1:1".to_string(),
    )))
    .unwrap();

    let response = client
        .post("/api/download_excel")
        .header(ContentType::JSON)
        .body(
            r#"[{
                "nama_kandidat": "A",
                "skor_kecocokan": 90,
                "bahasa_terdeteksi": "English",
                "ringkasan_positif": "Strong fit.",
                "poin_kunci_cocok": ["Python", "Django"],
                "poin_perhatian": [],
                "original_filename": "a.pdf"
            }]"#,
        )
        .dispatch();

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.content_type(),
        Some(ContentType::new(
            "application",
            "vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        ))
    );

    let disposition = response
        .headers()
        .get_one("Content-Disposition")
        .unwrap()
        .to_string();
    assert!(disposition.contains("hasil_penyaringan_synapsis_ai.xlsx"));

    let bytes = response.into_bytes().unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
