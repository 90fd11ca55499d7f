//! Resource operations against an in-memory transport.
//!
//! The fixture transport records every request and replays a canned
//! response, so these tests pin down both halves of each call: the request
//! the operation builds and how it reads what comes back.

use notion_typed::{
    ApiRequest, Block, BlockId, ClientError, DatabaseId, Direction, ErrorCode, Filter,
    FilterCondition, Method, MultiSelectCondition, NotionClient, NotionObject, PageId, Paginated,
    PaginationParams, Parent, PropertyValue, PropertyValues, QueryDatabaseRequest, RawResponse,
    RichText, SearchRequest, TextCondition, Transport, TransportError, UserId, UserKind,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Mutex;

const PAGE_JSON: &str = r#"{"object":"page","id":"5678","created_time":"2021-05-14T01:06:32.845Z","last_edited_time":"2021-05-23T08:02:00.000Z","parent":{"database_id":"38923","type":"database_id"},"properties":{"Name":{"id":"title","type":"title","title":[{"plain_text":"Jamboree"}]},"Recommended":{"id":"EZMA","type":"checkbox","checkbox":true},"Tags":{"id":"VSvn","type":"multi_select","multi_select":[{"id":"44645","name":"TagTest","color":"purple"}]}}}"#;

const USERS_JSON: &str = r#"{"object":"list","results":[{"object":"user","id":"123abc","type":"person","name":"John Doe","avatar_url":"https://test.com/test","person":{"email":"test@gmail.com"}},{"object":"user","id":"456def","type":"bot","name":"Test Integration","bot":{}}],"next_cursor":"","has_more":false}"#;

/// Replays one canned outcome per call and records what was asked.
struct FixtureTransport {
    outcomes: Mutex<Vec<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FixtureTransport {
    fn responding(status: u16, body: &str) -> Self {
        Self::with_outcomes(vec![Ok(RawResponse::new(status, body))])
    }

    fn with_outcomes(mut outcomes: Vec<Result<RawResponse, TransportError>>) -> Self {
        outcomes.reverse();
        Self {
            outcomes: Mutex::new(outcomes),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn last_request(&self) -> ApiRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait::async_trait]
impl Transport for FixtureTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(TransportError::Connection("no fixture left".into())))
    }
}

fn client(status: u16, body: &str) -> NotionClient<FixtureTransport> {
    NotionClient::with_transport(FixtureTransport::responding(status, body))
}

fn query_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_list_users_decodes_fixture() {
    let client = client(200, USERS_JSON);

    let users = client
        .users()
        .list(&PaginationParams::new().page_size(20))
        .await
        .unwrap();

    let request = client.transport().last_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "users/");
    assert_eq!(request.query, query_pairs(&[("page_size", "20")]));
    assert_eq!(request.body, None);

    assert_eq!(users.results().len(), 2);
    assert!(!users.has_more());
    assert_eq!(users.next_cursor(), None);

    let person = &users.results[0];
    assert_eq!(person.id.as_str(), "123abc");
    assert_eq!(person.name.as_deref(), Some("John Doe"));
    assert_eq!(person.avatar_url.as_deref(), Some("https://test.com/test"));
    assert_eq!(person.email(), Some("test@gmail.com"));

    let bot = &users.results[1];
    assert_eq!(bot.id.as_str(), "456def");
    assert_eq!(bot.name.as_deref(), Some("Test Integration"));
    assert!(matches!(bot.kind, Some(UserKind::Bot(_))));
}

#[tokio::test]
async fn test_retrieve_user_path() {
    let client = client(
        200,
        r#"{"object":"user","id":"123abc","type":"person","name":"John Doe","person":{"email":"test@gmail.com"}}"#,
    );
    let user = client.users().retrieve(&UserId::from_raw("123abc")).await.unwrap();

    assert_eq!(client.transport().last_request().path, "users/123abc");
    assert_eq!(user.email(), Some("test@gmail.com"));
}

#[tokio::test]
async fn test_query_filter_body_is_exact() {
    let client = client(200, &format!(r#"{{"object":"list","results":[{}]}}"#, PAGE_JSON));
    let query = QueryDatabaseRequest::new().filter(Filter::property(
        "Tags",
        FilterCondition::MultiSelect(MultiSelectCondition::Contains("Tag1".into())),
    ));

    let rows = client
        .databases()
        .query(&DatabaseId::from_raw("897e5a76ae524b489fdfe71f5945d1af"), &query)
        .await
        .unwrap();

    let request = client.transport().last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "databases/897e5a76ae524b489fdfe71f5945d1af/query");
    assert_eq!(
        serde_json::to_string(&request.body.unwrap()).unwrap(),
        r#"{"filter":{"property":"Tags","multi_select":{"contains":"Tag1"}}}"#
    );

    assert_eq!(rows.results.len(), 1);
    assert_eq!(rows.results[0].title_plain_text(), "Jamboree");
    assert!(!rows.has_more);
}

#[tokio::test]
async fn test_compound_filter_preserves_order() {
    let client = client(200, r#"{"object":"list","results":[],"has_more":false}"#);
    let query = QueryDatabaseRequest::new().filter(Filter::and(vec![
        Filter::property(
            "Tags",
            FilterCondition::MultiSelect(MultiSelectCondition::Contains("TagTest".into())),
        ),
        Filter::property(
            "Name",
            FilterCondition::Title(TextCondition::Contains("Jamboree".into())),
        ),
    ]));

    client
        .databases()
        .query(&DatabaseId::from_raw("123"), &query)
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_string(&client.transport().last_request().body.unwrap()).unwrap(),
        r#"{"filter":{"and":[{"property":"Tags","multi_select":{"contains":"TagTest"}},{"property":"Name","title":{"contains":"Jamboree"}}]}}"#
    );
}

#[tokio::test]
async fn test_list_databases_uses_query_parameters() {
    let client = client(
        200,
        r#"{"results":[{"object":"database","id":"f170fb7c","title":[{"plain_text":"DB for Testing"}],"properties":{"Name":{"id":"title","type":"title","title":{}}}}],"next_cursor":"abc","has_more":true}"#,
    );
    let params = PaginationParams::new().start_cursor("start").page_size(5);

    let databases = client.databases().list(&params).await.unwrap();

    let request = client.transport().last_request();
    assert_eq!(request.path, "databases/");
    assert_eq!(
        request.query,
        query_pairs(&[("start_cursor", "start"), ("page_size", "5")])
    );
    assert_eq!(databases.results[0].title_plain_text(), "DB for Testing");
    assert_eq!(
        databases.next_page(Some(5)),
        Some(PaginationParams::new().start_cursor("abc").page_size(5))
    );
}

#[tokio::test]
async fn test_retrieve_and_update_page() {
    let client = NotionClient::with_transport(FixtureTransport::with_outcomes(vec![
        Ok(RawResponse::new(200, PAGE_JSON)),
        Ok(RawResponse::new(200, PAGE_JSON)),
    ]));
    let id = PageId::from_raw("5678");

    let page = client.pages().retrieve(&id).await.unwrap();
    assert_eq!(client.transport().last_request().path, "pages/5678");
    assert_eq!(page.property("Recommended"), Some(&PropertyValue::Checkbox(true)));

    let mut changes = PropertyValues::new();
    changes.insert("Recommended".into(), PropertyValue::Checkbox(false));
    client.pages().update_properties(&id, changes).await.unwrap();

    let request = client.transport().last_request();
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.path, "pages/5678");
    assert_eq!(
        request.body,
        Some(json!({"properties": {"Recommended": {"checkbox": false}}}))
    );
}

#[tokio::test]
async fn test_create_page_posts_parent_properties_and_children() {
    let client = client(200, PAGE_JSON);
    let mut properties = PropertyValues::new();
    properties.insert("Name".into(), PropertyValue::title("Jamboree"));

    let page = client
        .pages()
        .create(
            Parent::Database(DatabaseId::from_raw("38923")),
            properties,
            vec![Block::heading_2(vec![RichText::text("Lacinato kale")])],
        )
        .await
        .unwrap();
    assert_eq!(page.id.as_str(), "5678");

    let request = client.transport().last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "pages/");
    assert_eq!(
        request.body,
        Some(json!({
            "parent": {"type": "database_id", "database_id": "38923"},
            "properties": {"Name": {"title": [{"type": "text", "text": {"content": "Jamboree"}}]}},
            "children": [{
                "object": "block",
                "type": "heading_2",
                "heading_2": {"text": [{"type": "text", "text": {"content": "Lacinato kale"}}]}
            }]
        }))
    );
}

#[tokio::test]
async fn test_block_children_and_append() {
    let parent = BlockId::from_raw("b55c9c91-384d-452b-81db-d1ef79372b75");
    let client = NotionClient::with_transport(FixtureTransport::with_outcomes(vec![
        Ok(RawResponse::new(
            200,
            r#"{"object":"list","results":[{"object":"block","id":"9bc3","type":"paragraph","has_children":false,"paragraph":{"text":[]}}],"next_cursor":null,"has_more":false}"#,
        )),
        Ok(RawResponse::new(
            200,
            r#"{"object":"block","id":"b55c9c91-384d-452b-81db-d1ef79372b75","type":"child_page","has_children":true,"child_page":{"title":"Parent"}}"#,
        )),
    ]));

    let children = client
        .blocks()
        .children(&parent, &PaginationParams::new())
        .await
        .unwrap();
    let request = client.transport().last_request();
    assert_eq!(request.path, "blocks/b55c9c91-384d-452b-81db-d1ef79372b75/children");
    assert!(request.query.is_empty());
    assert_eq!(children.results[0].block_type(), "paragraph");

    let returned = client
        .blocks()
        .append_children(&parent, &[Block::paragraph(vec![RichText::text("new")])])
        .await
        .unwrap();

    let request = client.transport().last_request();
    assert_eq!(request.method, Method::Patch);
    assert_eq!(
        request.body.as_ref().map(|b| b["children"][0]["type"].clone()),
        Some(json!("paragraph"))
    );
    // The parent comes back, not the appended children.
    assert_eq!(returned.id(), Some(&parent));
    assert!(returned.has_children());
}

#[tokio::test]
async fn test_search_mixed_and_narrowed() {
    let mixed = r#"{"object":"list","results":[
        {"object":"page","id":"5678","parent":{"type":"workspace","workspace":true},"properties":{"title":{"id":"title","type":"title","title":[{"plain_text":"Jamboree"}]}}},
        {"object":"database","id":"123","title":[{"type":"text","text":{"content":"Jamboree"}}],"properties":{"Name":{"id":"title","type":"title","title":{}}}}
    ],"has_more":false}"#;
    let client = NotionClient::with_transport(FixtureTransport::with_outcomes(vec![
        Ok(RawResponse::new(200, mixed)),
        Ok(RawResponse::new(200, &format!(r#"{{"object":"list","results":[{}]}}"#, PAGE_JSON))),
        Ok(RawResponse::new(
            200,
            r#"{"object":"list","results":[{"object":"database","id":"123","title":[],"properties":{}}]}"#,
        )),
    ]));
    let request = SearchRequest::new().query("Jamboree").sort(Direction::Descending);

    let results = client.search().search(&request).await.unwrap();
    assert_eq!(client.transport().last_request().path, "search/");
    assert!(matches!(results.results[0], NotionObject::Page(_)));
    assert_eq!(results.pages().count(), 1);
    assert_eq!(results.databases().count(), 1);

    let pages = client.search().pages(&request).await.unwrap();
    assert_eq!(
        client.transport().last_request().body,
        Some(json!({
            "query": "Jamboree",
            "sort": {"direction": "descending", "timestamp": "last_edited_time"},
            "filter": {"value": "page", "property": "object"}
        }))
    );
    assert_eq!(pages.results[0].title_plain_text(), "Jamboree");

    let databases = client.search().databases(&request).await.unwrap();
    assert_eq!(
        client.transport().last_request().body.unwrap()["filter"],
        json!({"value": "database", "property": "object"})
    );
    assert_eq!(databases.results[0].id.as_str(), "123");
}

#[tokio::test]
async fn test_api_error_payload_surfaces_code_and_status() {
    let client = client(
        404,
        r#"{"object":"error","status":404,"code":"object_not_found","message":"Could not find page with ID: 123."}"#,
    );

    let err = client.pages().retrieve(&PageId::from_raw("123")).await.unwrap_err();
    match err {
        ClientError::Api(error) => {
            assert_eq!(error.code, ErrorCode::ObjectNotFound);
            assert_eq!(error.status, 404);
            assert!(error.code.is_not_found());
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_failure_is_surfaced_as_is() {
    let client = NotionClient::with_transport(FixtureTransport::with_outcomes(vec![Err(
        TransportError::Connection("connection refused".into()),
    )]));

    let err = client.users().list(&PaginationParams::new()).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Transport(TransportError::Connection(ref message)) if message == "connection refused"
    ));
}

#[tokio::test]
async fn test_malformed_result_is_a_decode_error() {
    let client = client(200, r#"{"object":"list","results":[{"object":"user"}]}"#);
    let err = client.users().list(&PaginationParams::new()).await.unwrap_err();
    match err {
        ClientError::Decode(error) => assert!(error.reason.contains("id")),
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[test]
fn test_error_precedence_prefers_transport() {
    use notion_typed::api::parser::{detect_api_error, relevant_error};

    let body: Value = serde_json::from_str(
        r#"{"object":"error","status":400,"code":"validation_error","message":"body failed validation"}"#,
    )
    .unwrap();
    let api_error = detect_api_error(400, &body);
    assert!(api_error.is_some());

    let surfaced = relevant_error(Some(TransportError::Connection("reset".into())), api_error.clone());
    assert!(matches!(surfaced, Some(ClientError::Transport(_))));

    let surfaced = relevant_error(None, api_error);
    assert!(matches!(
        surfaced,
        Some(ClientError::Api(ref e)) if e.code == ErrorCode::ValidationFailed
    ));
}
