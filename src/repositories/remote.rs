//! RemoteAnnouncements - Collection manager che parla col server via HTTP
//!
//! Endpoint usati (relativi a `base_url`):
//! - `GET    /groups/{group_id}/announcements`
//! - `GET    /groups/{group_id}/announcements/{fid}`
//! - `DELETE /groups/{group_id}/announcements/{fid}`
//! - `GET    /groups/{group_id}/announcements/{fid}/members?confirmed=bool`
//! - `POST   /groups/{group_id}/announcements/{fid}/remind`

use super::Announcements;
use crate::core::{AppError, AppResult, Config};
use crate::dtos::{AnnouncementDTO, MembersQuery};
use crate::entities::{Group, NormalMember, OnlineAnnouncement};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct RemoteAnnouncements {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RemoteAnnouncements {
    pub fn new(client: Client, base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token,
        }
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| AppError::config("Unable to build HTTP client").with_details(e.to_string()))?;
        Ok(Self::new(
            client,
            config.base_url.clone(),
            config.bot_token.clone(),
        ))
    }

    fn collection_url(&self, group_id: i64) -> String {
        format!("{}/groups/{}/announcements", self.base_url, group_id)
    }

    fn item_url(&self, group_id: i64, fid: &str) -> String {
        // il fid è generato dal server ma finisce nel path, va codificato
        let mut url = self.collection_url(group_id);
        url.push('/');
        url.push_str(&urlencoding::encode(fid));
        url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> AppResult<Response> {
        Ok(self.authorize(request).send().await?)
    }
}

/// Traduce gli status che non hanno un significato specifico per l'operazione
fn unexpected_status(status: StatusCode) -> AppError {
    match status {
        StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => {
            AppError::permission_denied("Server refused the operation")
                .with_details(status.to_string())
        }
        _ => AppError::protocol("Unexpected response status").with_details(status.to_string()),
    }
}

#[async_trait]
impl Announcements for RemoteAnnouncements {
    #[instrument(skip(self, group), fields(group_id = %group.id(), fid = %fid))]
    async fn get(&self, group: &Arc<Group>, fid: &str) -> AppResult<Option<OnlineAnnouncement>> {
        debug!("Fetching announcement");
        let response = self
            .send(self.client.get(self.item_url(group.id(), fid)))
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!("Announcement not found");
                Ok(None)
            }
            status if status.is_success() => {
                let dto: AnnouncementDTO = response.json().await?;
                Ok(Some(dto.into_online(group.clone())?))
            }
            status => Err(unexpected_status(status)),
        }
    }

    #[instrument(skip(self, group), fields(group_id = %group.id()))]
    async fn list(&self, group: &Arc<Group>) -> AppResult<Vec<OnlineAnnouncement>> {
        debug!("Fetching announcement list");
        let response = self
            .send(self.client.get(self.collection_url(group.id())))
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(unexpected_status(status));
        }

        let dtos: Vec<AnnouncementDTO> = response.json().await?;
        info!("Fetched {} announcements", dtos.len());
        dtos.into_iter()
            .map(|dto| dto.into_online(group.clone()))
            .collect()
    }

    #[instrument(skip(self, group), fields(group_id = %group.id(), fid = %fid))]
    async fn delete(&self, group: &Group, fid: &str) -> AppResult<bool> {
        debug!("Deleting announcement");
        let response = self
            .send(self.client.delete(self.item_url(group.id(), fid)))
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!("Announcement already absent");
                Ok(false)
            }
            StatusCode::FORBIDDEN => {
                warn!("Delete refused: bot lacks administrative rights");
                Err(AppError::permission_denied("Insufficient role")
                    .with_details("Deleting an announcement requires Admin or Owner"))
            }
            status if status.is_success() => {
                info!("Announcement deleted");
                Ok(true)
            }
            status => Err(unexpected_status(status)),
        }
    }

    #[instrument(skip(self, group), fields(group_id = %group.id(), fid = %fid))]
    async fn members(
        &self,
        group: &Group,
        fid: &str,
        confirmed: bool,
    ) -> AppResult<Vec<Arc<NormalMember>>> {
        let url = format!("{}/members", self.item_url(group.id(), fid));
        let response = self
            .send(self.client.get(url).query(&MembersQuery { confirmed }))
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AppError::not_found("Announcement not found")),
            status if status.is_success() => {
                let ids: Vec<i64> = response.json().await?;
                let members: Vec<Arc<NormalMember>> =
                    ids.iter().filter_map(|id| group.get_member(*id)).collect();
                if members.len() < ids.len() {
                    debug!(
                        "{} members are no longer in the group",
                        ids.len() - members.len()
                    );
                }
                Ok(members)
            }
            status => Err(unexpected_status(status)),
        }
    }

    #[instrument(skip(self, group), fields(group_id = %group.id(), fid = %fid))]
    async fn remind(&self, group: &Group, fid: &str) -> AppResult<()> {
        let url = format!("{}/remind", self.item_url(group.id(), fid));
        let response = self.send(self.client.post(url)).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AppError::not_found("Announcement not found")),
            StatusCode::FORBIDDEN => Err(AppError::permission_denied("Insufficient role")
                .with_details("Sending reminders requires Admin or Owner")),
            status if status.is_success() => {
                info!("Reminder sent");
                Ok(())
            }
            status => Err(unexpected_status(status)),
        }
    }
}
