#![allow(dead_code)]

use announcements::dtos::{AnnouncementDTO, MembersQuery};
use announcements::repositories::StoredAnnouncement;
use announcements::{
    AnnouncementParameters, Bot, ClientState, Config, Group, InMemoryAnnouncements, NormalMember,
    OfflineAnnouncement, UserRole,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    routing::{get, post},
};
use dashmap::DashMap;
use std::sync::Arc;

pub const GROUP_ID: i64 = 100;
pub const BOT_ID: i64 = 1;
pub const ADMIN_TOKEN: &str = "admin-token";
pub const MEMBER_TOKEN: &str = "member-token";

/// Crea un gruppo con `members` membri oltre al bot, collegato a uno store in memoria
///
/// I membri hanno id da 2 a `members + 1`
pub fn create_test_group(
    bot_role: UserRole,
    members: i64,
) -> (Arc<InMemoryAnnouncements>, Arc<Group>) {
    let store = Arc::new(InMemoryAnnouncements::new());
    let state = ClientState::with_manager(
        Config::new("http://unused.invalid", BOT_ID),
        Arc::new(Bot::new(BOT_ID, "bot")),
        store.clone(),
    );
    let group = state.open_group(GROUP_ID, "Rustaceans", bot_role);
    for id in 2..2 + members {
        group.add_member(NormalMember::new(id, format!("member{id}"), UserRole::Member));
    }
    (store, group)
}

pub fn stored(fid: &str, sender_id: i64, need_confirm: bool) -> StoredAnnouncement {
    let parameters = AnnouncementParameters {
        need_confirm,
        ..Default::default()
    };
    StoredAnnouncement::new(
        fid,
        sender_id,
        OfflineAnnouncement::new(format!("announcement {fid}"), parameters),
        1_700_000_000,
    )
}

pub fn dto(fid: &str, read: u32, expected: u32) -> AnnouncementDTO {
    AnnouncementDTO {
        fid: fid.to_string(),
        sender_id: 2,
        content: format!("announcement {fid}"),
        parameters: AnnouncementParameters::default(),
        publish_time: 1_700_000_000,
        read_member_number: read,
        expected_member_number: expected,
    }
}

/// Stato del finto server degli annunci
#[derive(Default)]
pub struct MockServer {
    pub announcements: DashMap<(i64, String), AnnouncementDTO>,
    pub readers: DashMap<(i64, String), Vec<i64>>,
    pub reminders: DashMap<(i64, String), u32>,
    /// Se impostato, ogni richiesta risponde con questo status
    pub forced_status: std::sync::OnceLock<StatusCode>,
}

impl MockServer {
    pub fn insert(&self, group_id: i64, dto: AnnouncementDTO) {
        self.announcements.insert((group_id, dto.fid.clone()), dto);
    }
}

type Shared = Arc<MockServer>;

fn is_admin(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {ADMIN_TOKEN}"))
        .unwrap_or(false)
}

async fn list_announcements(
    State(server): State<Shared>,
    Path(group_id): Path<i64>,
) -> Result<Json<Vec<AnnouncementDTO>>, StatusCode> {
    if let Some(status) = server.forced_status.get() {
        return Err(*status);
    }
    let mut list: Vec<AnnouncementDTO> = server
        .announcements
        .iter()
        .filter(|e| e.key().0 == group_id)
        .map(|e| e.value().clone())
        .collect();
    list.sort_by(|a, b| b.publish_time.cmp(&a.publish_time));
    Ok(Json(list))
}

async fn get_announcement(
    State(server): State<Shared>,
    Path((group_id, fid)): Path<(i64, String)>,
) -> Result<Json<AnnouncementDTO>, StatusCode> {
    if let Some(status) = server.forced_status.get() {
        return Err(*status);
    }
    server
        .announcements
        .get(&(group_id, fid))
        .map(|e| Json(e.value().clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn delete_announcement(
    State(server): State<Shared>,
    Path((group_id, fid)): Path<(i64, String)>,
    headers: HeaderMap,
) -> StatusCode {
    if let Some(status) = server.forced_status.get() {
        return *status;
    }
    if !is_admin(&headers) {
        return StatusCode::FORBIDDEN;
    }
    match server.announcements.remove(&(group_id, fid)) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

async fn list_members(
    State(server): State<Shared>,
    Path((group_id, fid)): Path<(i64, String)>,
    Query(query): Query<MembersQuery>,
) -> Result<Json<Vec<i64>>, StatusCode> {
    let key = (group_id, fid);
    if !server.announcements.contains_key(&key) {
        return Err(StatusCode::NOT_FOUND);
    }
    let readers = server
        .readers
        .get(&key)
        .map(|r| r.value().clone())
        .unwrap_or_default();
    if query.confirmed {
        Ok(Json(readers))
    } else {
        // il finto server conosce solo i membri 2..=5
        Ok(Json((2..=5).filter(|id| !readers.contains(id)).collect()))
    }
}

async fn remind(
    State(server): State<Shared>,
    Path((group_id, fid)): Path<(i64, String)>,
    headers: HeaderMap,
) -> StatusCode {
    if !is_admin(&headers) {
        return StatusCode::FORBIDDEN;
    }
    let key = (group_id, fid);
    if !server.announcements.contains_key(&key) {
        return StatusCode::NOT_FOUND;
    }
    *server.reminders.entry(key).or_insert(0) += 1;
    StatusCode::OK
}

/// Avvia il finto server su una porta libera e ritorna il suo base url
pub async fn spawn_mock_server(server: Shared) -> String {
    let app = Router::new()
        .route("/groups/{group_id}/announcements", get(list_announcements))
        .route(
            "/groups/{group_id}/announcements/{fid}",
            get(get_announcement).delete(delete_announcement),
        )
        .route(
            "/groups/{group_id}/announcements/{fid}/members",
            get(list_members),
        )
        .route("/groups/{group_id}/announcements/{fid}/remind", post(remind))
        .with_state(server);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Mock server has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock server failed");
    });
    format!("http://{}", addr)
}

/// Crea uno stato client che punta al finto server con il token indicato
pub fn create_remote_state(base_url: &str, token: &str) -> ClientState {
    let mut config = Config::new(base_url, BOT_ID);
    config.bot_token = Some(token.to_string());
    config.request_timeout_secs = 5;
    ClientState::from_config(config).expect("Failed to create client state")
}
