mod common;

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use coursework::Method;
use coursework::client::{HttpTransport, ResourceClient, Transport, TransportError};
use coursework::resource::{Certificate, Course, Description, Instructor};
use coursework::store::{Collection, StoreError, Stored};
use serde_json::{Value, json};

use common::TestServer;

fn client(server: &TestServer) -> ResourceClient<Course> {
    ResourceClient::new(&server.url())
}

async fn raw(server: &TestServer, method: Method, path: &str, body: Option<&str>) -> (u16, Value) {
    let uri = format!("{}{path}", server.url()).parse().unwrap();
    let reply = HttpTransport::new()
        .send(method, uri, body.map(|b| Bytes::copy_from_slice(b.as_bytes())))
        .await
        .unwrap();
    let body = serde_json::from_slice(&reply.body).unwrap_or(Value::Null);
    (reply.status, body)
}

/// create → get → list, checking statuses on the wire and values through the client.
#[tokio::test]
async fn create_get_list_scenario() {
    let server = TestServer::start().await;

    let (status, created) = raw(
        &server,
        Method::Post,
        "/courses",
        Some(r#"{"title":"Intro to Systems","rating":4.5}"#),
    )
    .await;
    assert_eq!(status, 201);
    let id = created["_id"].as_str().unwrap().to_owned();
    assert!(!id.is_empty());
    assert_eq!(created["title"], "Intro to Systems");
    assert_eq!(created["rating"], 4.5);

    let (status, fetched) = raw(&server, Method::Get, &format!("/courses/{id}"), None).await;
    assert_eq!(status, 200);
    assert_eq!(fetched, created);

    let (status, listed) = raw(&server, Method::Get, "/courses", None).await;
    assert_eq!(status, 200);
    assert_eq!(listed, json!([created]));

    let courses = client(&server);
    let typed = courses.get_by_id(&id).await.unwrap();
    assert_eq!(typed.doc.title.as_deref(), Some("Intro to Systems"));
    assert_eq!(courses.list().await.unwrap(), vec![typed]);
}

#[tokio::test]
async fn created_document_reads_back_structurally_equal() {
    let server = TestServer::start().await;
    let courses = client(&server);

    let payload = Course {
        title: Some("Distributed Systems".into()),
        description: Some(vec![Description {
            about: Some("Consensus and replication".into()),
            learning: Some(vec!["Raft".into(), "Paxos".into()]),
            materials: Some(vec![]),
        }]),
        duration: Some(36.0),
        rating: Some(4.8),
        level: Some("Advanced".into()),
        instructor: Some(vec![Instructor { user: Some("u-17".into()), title: Some("Professor".into()) }]),
        language: Some("English".into()),
        last_updated: Some("2024-02-29T12:30:00Z".parse().unwrap()),
        course_type: Some("live".into()),
        enrolled: Some(120.0),
        certificate: Some(vec![Certificate { is_locked: Some(true) }]),
    };

    let created = courses.create(&payload).await.unwrap();
    assert_eq!(created.doc, payload);

    let fetched = courses.get_by_id(&created.id).await.unwrap();
    assert_eq!(fetched, Stored { id: created.id.clone(), doc: payload });
}

#[tokio::test]
async fn empty_list_is_404_not_an_empty_array() {
    let server = TestServer::start().await;

    let (status, body) = raw(&server, Method::Get, "/courses", None).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "message": "No courses" }));

    let err = client(&server).list().await.unwrap_err();
    assert!(matches!(err, TransportError::Status { status: 404, ref message } if message == "No courses"));
}

#[tokio::test]
async fn never_assigned_ids_are_404_and_malformed_ids_are_500() {
    let server = TestServer::start().await;
    let courses = client(&server);
    courses.create(&json!({ "title": "only one" })).await.unwrap();

    for _ in 0..5 {
        let unknown = uuid::Uuid::new_v4().simple().to_string();
        let err = courses.get_by_id(&unknown).await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 404, ref message } if message == "Course not found"));
    }

    let (status, body) = raw(&server, Method::Get, "/courses/not-a-real-id", None).await;
    assert_eq!(status, 500);
    assert_eq!(body["message"], r#"invalid identifier "not-a-real-id""#);
}

#[tokio::test]
async fn ids_with_reserved_characters_still_reach_the_member_route() {
    let server = TestServer::start().await;
    let err = client(&server).get_by_id("x/../").await.unwrap_err();
    assert!(matches!(err, TransportError::Status { status: 500, ref message } if message.starts_with("invalid identifier")));
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    const N: usize = 128;
    let server = TestServer::start().await;
    let courses = client(&server);

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..N {
        let courses = courses.clone();
        tasks.spawn(async move {
            courses
                .create(&json!({ "title": format!("course {i}"), "enrolled": i }))
                .await
                .unwrap()
        });
    }

    let mut ids = HashSet::new();
    let mut titles = HashSet::new();
    while let Some(created) = tasks.join_next().await {
        let created = created.unwrap();
        titles.insert(created.doc.title.clone().unwrap());
        assert!(ids.insert(created.id), "identifier handed out twice");
    }
    assert_eq!(ids.len(), N);
    assert_eq!(titles.len(), N);
    assert_eq!(courses.list().await.unwrap().len(), N);
}

#[tokio::test]
async fn undeclared_fields_are_accepted_on_create() {
    let server = TestServer::start().await;

    let (status, created) = raw(
        &server,
        Method::Post,
        "/courses",
        Some(r#"{"title":"Rust","promoCode":"SPRING","tags":["a"]}"#),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(created["title"], "Rust");
    assert!(created.get("promoCode").is_none());
}

#[tokio::test]
async fn payload_values_are_cast_to_declared_types() {
    let server = TestServer::start().await;
    let created = client(&server)
        .create(&json!({
            "title": 101,
            "rating": "4.25",
            "lastUpdated": "2024-01-15",
            "certificate": { "isLocked": "false" }
        }))
        .await
        .unwrap();

    assert_eq!(created.doc.title.as_deref(), Some("101"));
    assert_eq!(created.doc.rating, Some(4.25));
    assert_eq!(created.doc.last_updated, Some("2024-01-15T00:00:00Z".parse().unwrap()));
    assert_eq!(created.doc.certificate, Some(vec![Certificate { is_locked: Some(false) }]));
}

#[tokio::test]
async fn bad_bodies() {
    let server = TestServer::start().await;

    let (status, body) = raw(&server, Method::Post, "/courses", Some("{oops")).await;
    assert_eq!(status, 400);
    assert!(body["message"].as_str().unwrap().starts_with("malformed JSON body"));

    let (status, body) = raw(&server, Method::Post, "/courses", Some(r#"{"duration":"two weeks"}"#)).await;
    assert_eq!(status, 500);
    assert!(body["message"].as_str().unwrap().contains("duration"));

    let (status, body) = raw(&server, Method::Post, "/courses", Some("[]")).await;
    assert_eq!(status, 500);
    assert!(body["message"].as_str().unwrap().contains("JSON object"));
}

/// A collection whose backend is unreachable.
struct Unreachable;

#[async_trait]
impl Collection<Course> for Unreachable {
    async fn find_all(&self) -> Result<Vec<Stored<Course>>, StoreError> {
        Err(StoreError::Unavailable("connection timed out".into()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Stored<Course>>, StoreError> {
        Err(StoreError::Unavailable("connection timed out".into()))
    }

    async fn insert(&self, _doc: Course) -> Result<Stored<Course>, StoreError> {
        Err(StoreError::Unavailable("connection timed out".into()))
    }
}

#[tokio::test]
async fn storage_outage_is_500_with_the_failure_message() {
    let server = TestServer::with_collection(Arc::new(Unreachable)).await;
    let expected = json!({ "message": "storage unavailable: connection timed out" });

    assert_eq!(raw(&server, Method::Get, "/courses", None).await, (500, expected.clone()));
    assert_eq!(raw(&server, Method::Get, "/courses/abc", None).await, (500, expected.clone()));
    assert_eq!(raw(&server, Method::Post, "/courses", Some("{}")).await, (500, expected));
}

#[tokio::test]
async fn unrouted_requests() {
    let server = TestServer::start().await;

    let uri = format!("{}/courses", server.url()).parse().unwrap();
    let reply = HttpTransport::new().send(Method::Delete, uri, None).await.unwrap();
    assert_eq!(reply.status, 405);

    let (status, _) = raw(&server, Method::Get, "/students", None).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn health_probes() {
    let server = TestServer::start().await;
    for path in ["/healthz", "/readyz"] {
        let uri = format!("{}{path}", server.url()).parse().unwrap();
        let reply = HttpTransport::new().send(Method::Get, uri, None).await.unwrap();
        assert_eq!(reply.status, 200);
    }
}

#[tokio::test]
async fn connection_failures_surface_as_request_errors() {
    let addr = {
        let server = TestServer::start().await;
        server.addr
    };
    // Give the stopped listener a moment to close.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let courses = ResourceClient::<Course>::new(&format!("http://{addr}"));
    assert!(matches!(courses.list().await, Err(TransportError::Request(_))));
}
