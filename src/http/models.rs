use serde::Deserialize;

/// Channel block attached to videos. Gaming entries carry none, and the
/// subscriber count only appears on the detail endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Channel {
    pub name: String,
    pub profile_image_url: String,
    #[serde(default)]
    pub subscriber_count: Option<String>,
}

/// One entry of a catalog listing (home, trending, gaming).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub channel: Option<Channel>,
    pub view_count: String,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Full record from `GET /videos/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoDetails {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub description: String,
    pub view_count: String,
    pub published_at: String,
    pub channel: Channel,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideosResponse {
    pub videos: Vec<VideoSummary>,
    #[serde(default)]
    #[allow(dead_code)]
    pub total: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoItemResponse {
    pub video_details: VideoDetails,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub jwt_token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginErrorResponse {
    pub error_msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_login_response() {
        let body = r#"{"jwt_token": "eyJhbGciOiJIUzI1NiJ9.payload.sig"}"#;
        let parsed: LoginResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.jwt_token.starts_with("eyJ"));
    }

    #[test]
    fn parses_login_error_body() {
        let body = r#"{"status_code": 404, "error_msg": "Username is not found"}"#;
        let parsed: LoginErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error_msg, "Username is not found");
    }

    #[test]
    fn parses_home_listing() {
        let body = r#"{
            "total": 1,
            "videos": [{
                "id": "802fcd20-1490-43c5-9e66-ce6dfefb40d1",
                "title": "iPhone 12 Review",
                "thumbnail_url": "https://assets.ccbp.in/frontend/thumbnails/iphone.png",
                "channel": {
                    "name": "UR Tech",
                    "profile_image_url": "https://assets.ccbp.in/frontend/channels/ur-tech.png"
                },
                "view_count": "1.4M",
                "published_at": "Apr 19, 2021"
            }]
        }"#;
        let parsed: VideosResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.total, Some(1));
        let video = &parsed.videos[0];
        assert_eq!(video.title, "iPhone 12 Review");
        assert_eq!(video.channel.as_ref().unwrap().name, "UR Tech");
        assert_eq!(video.channel.as_ref().unwrap().subscriber_count, None);
    }

    #[test]
    fn parses_gaming_listing_without_channel() {
        let body = r#"{
            "total": 1,
            "videos": [{
                "id": "4f757b30-06be-4776-b466-4181d6646729",
                "title": "Among Us",
                "thumbnail_url": "https://assets.ccbp.in/frontend/thumbnails/among-us.png",
                "view_count": "52K"
            }]
        }"#;
        let parsed: VideosResponse = serde_json::from_str(body).unwrap();
        let video = &parsed.videos[0];
        assert_eq!(video.channel, None);
        assert_eq!(video.published_at, None);
    }

    #[test]
    fn parses_video_details() {
        let body = r#"{
            "video_details": {
                "id": "30569a57-e580-4c50-a1da-5cd1934eaa05",
                "title": "Telegram Bots",
                "thumbnail_url": "https://assets.ccbp.in/frontend/thumbnails/telegram.png",
                "video_url": "https://www.youtube.com/watch?v=9KZyUQpihsE",
                "description": "Building a bot from scratch.",
                "view_count": "182K",
                "published_at": "Jan 3, 2020",
                "channel": {
                    "name": "Code Evolution",
                    "profile_image_url": "https://assets.ccbp.in/frontend/channels/code-evolution.png",
                    "subscriber_count": "1.2M"
                }
            }
        }"#;
        let parsed: VideoItemResponse = serde_json::from_str(body).unwrap();
        let details = parsed.video_details;
        assert_eq!(details.channel.subscriber_count.as_deref(), Some("1.2M"));
        assert!(details.video_url.contains("youtube.com"));
    }
}
