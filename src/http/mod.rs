use std::time::Duration;

use serde::Serialize;

use crate::{auth::session::SessionStore, config::Config};

pub mod error;
pub mod models;

use error::ApiError;
use models::{
    LoginErrorResponse, LoginResponse, VideoDetails, VideoItemResponse, VideoSummary,
    VideosResponse,
};

pub struct ApiService {
    client: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

impl ApiService {
    pub fn new(config: &Config, session: SessionStore) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            session,
        })
    }

    /// `POST /login`. Returns the bearer token on success; a non-2xx with an
    /// `error_msg` body surfaces as `InvalidCredentials`.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(format!("{}/login", self.base_url))
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<LoginResponse>().await?.jwt_token)
        } else {
            let status = response.status();
            match response.json::<LoginErrorResponse>().await {
                Ok(body) => Err(ApiError::InvalidCredentials(body.error_msg)),
                Err(_) => Err(ApiError::Status(status)),
            }
        }
    }

    pub async fn fetch_home_videos(&self, search: &str) -> Result<Vec<VideoSummary>, ApiError> {
        self.fetch_videos("/videos/all", &[("search", search)]).await
    }

    pub async fn fetch_trending_videos(&self) -> Result<Vec<VideoSummary>, ApiError> {
        self.fetch_videos("/videos/trending", &[]).await
    }

    pub async fn fetch_gaming_videos(&self) -> Result<Vec<VideoSummary>, ApiError> {
        self.fetch_videos("/videos/gaming", &[]).await
    }

    pub async fn fetch_video_details(&self, id: &str) -> Result<VideoDetails, ApiError> {
        let response = self.authorized(&format!("/videos/{id}"))?.send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json::<VideoItemResponse>().await?.video_details)
    }

    async fn fetch_videos(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<VideoSummary>, ApiError> {
        let response = self.authorized(path)?.query(query).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json::<VideosResponse>().await?.videos)
    }

    fn authorized(&self, path: &str) -> Result<reqwest::RequestBuilder, ApiError> {
        let token = self.session.token().ok_or(ApiError::MissingSession)?;
        Ok(self
            .client
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(token))
    }
}
