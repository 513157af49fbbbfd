use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Container summary as returned by the Docker list endpoint.
/// Field names keep Docker casing so the front-end sees the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSummary {
    pub id: String,
    pub names: Vec<String>,
    pub image: String,
    pub state: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, Value>>,
}

/// Lifecycle operations exposed under `/api/{action}/{container_id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerAction {
    Start,
    Stop,
    Pause,
    Resume,
    Restart,
}

impl ContainerAction {
    pub const ALL: [ContainerAction; 5] = [
        ContainerAction::Start,
        ContainerAction::Stop,
        ContainerAction::Pause,
        ContainerAction::Resume,
        ContainerAction::Restart,
    ];

    /// Local route name
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerAction::Start => "start",
            ContainerAction::Stop => "stop",
            ContainerAction::Pause => "pause",
            ContainerAction::Resume => "resume",
            ContainerAction::Restart => "restart",
        }
    }

    /// Operation name on the Docker API. `resume` is called `unpause` there.
    pub fn downstream_operation(&self) -> &'static str {
        match self {
            ContainerAction::Resume => "unpause",
            other => other.as_str(),
        }
    }

    /// Status reported back to the caller on success
    pub fn past_tense(&self) -> &'static str {
        match self {
            ContainerAction::Start => "started",
            ContainerAction::Stop => "stopped",
            ContainerAction::Pause => "paused",
            ContainerAction::Resume => "resumed",
            ContainerAction::Restart => "restarted",
        }
    }
}

impl fmt::Display for ContainerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionAck {
    pub status: String,
    pub container_id: String,
}

impl ActionAck {
    pub fn new(action: ContainerAction, container_id: impl Into<String>) -> Self {
        Self {
            status: action.past_tense().to_string(),
            container_id: container_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resume_maps_to_unpause() {
        assert_eq!(ContainerAction::Resume.downstream_operation(), "unpause");
        assert_eq!(ContainerAction::Resume.past_tense(), "resumed");

        for action in ContainerAction::ALL {
            assert_ne!(action.downstream_operation(), "resume");
        }
    }

    #[test]
    fn test_other_actions_keep_their_name_downstream() {
        for action in [
            ContainerAction::Start,
            ContainerAction::Stop,
            ContainerAction::Pause,
            ContainerAction::Restart,
        ] {
            assert_eq!(action.downstream_operation(), action.as_str());
        }
    }

    #[test]
    fn test_ack_serialization() {
        let ack = ActionAck::new(ContainerAction::Stop, "c1");
        assert_eq!(
            serde_json::to_value(&ack).unwrap(),
            json!({ "status": "stopped", "container_id": "c1" })
        );
    }

    #[test]
    fn test_summary_from_docker_payload() {
        let raw = json!({
            "Id": "c1",
            "Names": ["/app", "/app-alias"],
            "Image": "nginx",
            "ImageID": "sha256:deadbeef",
            "State": "running",
            "Status": "Up 2 hours",
            "Ports": []
        });

        let summary: ContainerSummary = serde_json::from_value(raw).unwrap();
        assert_eq!(summary.id, "c1");
        assert_eq!(summary.names, vec!["/app", "/app-alias"]);
        assert_eq!(summary.labels, None);

        // Unknown fields are dropped, missing labels are omitted
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "Id": "c1",
                "Names": ["/app", "/app-alias"],
                "Image": "nginx",
                "State": "running",
                "Status": "Up 2 hours"
            })
        );
    }

    #[test]
    fn test_summary_keeps_untyped_labels() {
        let raw = json!({
            "Id": "c2",
            "Names": ["/db"],
            "Image": "postgres:16",
            "State": "exited",
            "Status": "Exited (0) 3 minutes ago",
            "Labels": { "com.docker.compose.project": "stack", "weight": 3 }
        });

        let summary: ContainerSummary = serde_json::from_value(raw).unwrap();
        let labels = summary.labels.unwrap();
        assert_eq!(labels["com.docker.compose.project"], json!("stack"));
        assert_eq!(labels["weight"], json!(3));
    }
}
