//! Resource records as the backend serves them
//!
//! Identifiers are opaque strings assigned by the server at creation and
//! immutable afterwards; the client never generates one. Field names follow
//! the API's camelCase wire format.

use serde::{Deserialize, Serialize};

/// One page of records plus the full server-side match count
///
/// `total` reflects every record matching the current search, independent
/// of the page; `data.len()` never exceeds `limit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub page: u32,
    pub total: u64,
    pub limit: u32,
    pub data: Vec<T>,
}

/// Message-only acknowledgement returned by every mutation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub image: String,
    pub title: String,
    pub event: String,
    pub is_featured: bool,
    pub is_active: bool,
}

// The backend serves blog `isActive` as a string, not a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
    pub is_active: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub icon: String,
    pub name: String,
    #[serde(default)]
    pub subcategory: Option<Vec<String>>,
    pub is_featured: bool,
    pub total_events: u64,
    pub total_blogs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    pub id: String,
    pub name: String,
    pub number_of_events: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub last_login: String,
}

/// Lightweight id/title pair for event selectors in dialogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOption {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub role: String,
    pub message: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_should_deserialize_from_camel_case_wire_format() {
        let json = r#"{
            "id": "b1",
            "image": "https://cdn.example.com/b1.png",
            "title": "Summer Fest",
            "event": "e1",
            "isFeatured": true,
            "isActive": false
        }"#;
        let banner: Banner = serde_json::from_str(json).unwrap();
        assert!(banner.is_featured);
        assert!(!banner.is_active);
        assert_eq!(banner.title, "Summer Fest");
    }

    #[test]
    fn list_page_should_carry_total_independent_of_page_size() {
        let json = r#"{
            "page": 1,
            "total": 42,
            "limit": 10,
            "data": [{"id": "f1", "question": "q", "answer": "a"}]
        }"#;
        let page: ListPage<Faq> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 42);
        assert_eq!(page.data.len(), 1);
        assert!(page.data.len() <= page.limit as usize);
    }

    #[test]
    fn category_subcategory_should_default_to_none_when_absent() {
        let json = r#"{
            "id": "c1",
            "icon": "music",
            "name": "Concerts",
            "isFeatured": false,
            "totalEvents": 3,
            "totalBlogs": 0
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.subcategory, None);
    }

    #[test]
    fn event_type_should_map_number_of_events() {
        let json = r#"{"id": "t1", "name": "Concert", "numberOfEvents": 7}"#;
        let event_type: EventType = serde_json::from_str(json).unwrap();
        assert_eq!(event_type.number_of_events, 7);
    }
}
