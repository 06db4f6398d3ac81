use member_admin::domain::member::{Member, MemberId};
use member_admin::error::Error;
use member_admin::services::members_api::{build_client, fetch_members};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MEMBERS_JSON: &str = r#"[
    {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
    {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"member"},
    {"id":3,"name":"Arvind Kumar","email":"arvind@mailinator.com","role":"admin"}
]"#;

async fn serve(route: &str, response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn fetches_and_decodes_members() {
    let server = serve(
        "/members.json",
        ResponseTemplate::new(200).set_body_raw(MEMBERS_JSON, "application/json"),
    )
    .await;

    let client = build_client().expect("client");
    let url = format!("{}/members.json", server.uri());
    let members = fetch_members(&client, &url).await.expect("fetch ok");

    assert_eq!(
        members,
        vec![
            Member::new(1u64, "Aaron Miles", "aaron@mailinator.com", "member"),
            Member::new(2u64, "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
            Member::new(3u64, "Arvind Kumar", "arvind@mailinator.com", "admin"),
        ]
    );
    assert_eq!(members[2].id, MemberId(3));
}

#[tokio::test]
async fn empty_array_is_an_empty_list() {
    let server = serve(
        "/members.json",
        ResponseTemplate::new(200).set_body_raw("[]", "application/json"),
    )
    .await;

    let client = build_client().expect("client");
    let url = format!("{}/members.json", server.uri());
    let members = fetch_members(&client, &url).await.expect("fetch ok");
    assert!(members.is_empty());
}

#[tokio::test]
async fn fails_on_http_status() {
    let server = serve("/missing", ResponseTemplate::new(404)).await;

    let client = build_client().expect("client");
    let url = format!("{}/missing", server.uri());
    let err = fetch_members(&client, &url).await.expect_err("404 must fail");

    match err {
        Error::Status { url: failed, status } => {
            assert_eq!(failed, url);
            assert_eq!(status.as_u16(), 404);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn fails_on_malformed_body() {
    let server = serve(
        "/members.json",
        ResponseTemplate::new(200).set_body_raw(r#"{"members":[]}"#, "application/json"),
    )
    .await;

    let client = build_client().expect("client");
    let url = format!("{}/members.json", server.uri());
    let err = fetch_members(&client, &url).await.expect_err("object body must fail");
    assert!(matches!(err, Error::Json { .. }), "unexpected error: {err:?}");
}

#[tokio::test]
async fn fails_when_server_unreachable() {
    let client = build_client().expect("client");
    let err = fetch_members(&client, "http://127.0.0.1:9/members.json")
        .await
        .expect_err("closed port must fail");
    assert!(matches!(err, Error::Http { .. }), "unexpected error: {err:?}");
}
