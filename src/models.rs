//! Frontend Models
//!
//! Data structures matching the remote API's JSON bodies.

use serde::{Deserialize, Serialize};

/// User data structure (matches backend `UserResponse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub nickname: String,
    pub fullname: String,
    /// Grade/level; the backend stores it as a float
    #[serde(default)]
    pub class: f64,
    #[serde(default)]
    pub speciality: Option<String>,
    pub email: String,
}

/// Registration payload: user fields without id, plus password
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub nickname: String,
    pub fullname: String,
    pub class: f64,
    pub speciality: Option<String>,
    pub email: String,
    pub password: String,
}

/// Login payload
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub nickname: &'a str,
    pub password: &'a str,
}

/// Task inside a project, addressed by its index in `Project::tasks`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timelinend: Option<String>,
}

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub underbody: String,
    #[serde(default)]
    pub authors_ids: Vec<u32>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn is_authored_by(&self, user_id: u32) -> bool {
        self.authors_ids.contains(&user_id)
    }

    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }
}

/// Creation payload: a project without id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub title: String,
    pub body: String,
    pub underbody: String,
    pub authors_ids: Vec<u32>,
    pub tasks: Vec<Task>,
}

impl ProjectCreate {
    /// Make sure `user_id` is listed as an author, first if newly added
    pub fn with_author(mut self, user_id: u32) -> Self {
        if !self.authors_ids.contains(&user_id) {
            self.authors_ids.insert(0, user_id);
        }
        self
    }
}

/// Partial update payload; only changed fields are sent
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underbody: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<u32>,
}

impl ProjectUpdate {
    pub fn tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Some(tasks),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_accepts_float_class_and_null_speciality() {
        let user: User = serde_json::from_value(json!({
            "id": 3,
            "nickname": "ann",
            "fullname": "Ann Lee",
            "class": 9.0,
            "speciality": null,
            "email": "ann@example.com",
            "project_id": null
        }))
        .unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.class, 9.0);
        assert_eq!(user.speciality, None);
    }

    #[test]
    fn test_project_defaults_missing_collections() {
        let project: Project = serde_json::from_value(json!({
            "id": 1,
            "title": "Rover",
            "body": "Build a rover",
            "author": { "id": 2 }
        }))
        .unwrap();
        assert_eq!(project.underbody, "");
        assert!(project.authors_ids.is_empty());
        assert!(project.tasks.is_empty());
    }

    #[test]
    fn test_task_omits_absent_timeline() {
        let task = Task {
            title: "calc".to_string(),
            status: "open".to_string(),
            body: String::new(),
            timeline: Some("20.11.2026".to_string()),
            timelinend: None,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["timeline"], "20.11.2026");
        assert!(value.get("timelinend").is_none());
    }

    #[test]
    fn test_project_update_serializes_only_present_fields() {
        let update = ProjectUpdate {
            title: Some("New".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "title": "New" }));
    }

    #[test]
    fn test_with_author_inserts_once() {
        let create = ProjectCreate {
            authors_ids: vec![5],
            ..Default::default()
        };
        let create = create.with_author(7).with_author(7);
        assert_eq!(create.authors_ids, vec![7, 5]);
    }

    #[test]
    fn test_is_authored_by() {
        let project = Project {
            id: 1,
            title: "t".to_string(),
            body: "b".to_string(),
            underbody: String::new(),
            authors_ids: vec![4, 9],
            tasks: vec![],
        };
        assert!(project.is_authored_by(9));
        assert!(!project.is_authored_by(1));
        assert!(project.task(0).is_none());
    }
}
