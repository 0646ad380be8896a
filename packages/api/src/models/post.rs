use std::fmt;

use serde::{Deserialize, Serialize};

/// Post identifier; the feed accepts numeric and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Number(n) => write!(f, "{n}"),
            PostId::Text(s) => f.write_str(s),
        }
    }
}

/// Feed post as served by `GET /api/posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub username: String,
    #[serde(default)]
    pub content: String,
    /// Inline data URL or a server-hosted URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl Post {
    /// Image source when the post carries a non-empty one.
    pub fn image_src(&self) -> Option<&str> {
        self.image.as_deref().filter(|src| !src.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_ids() {
        let posts: Vec<Post> = serde_json::from_str(
            r#"[{"id":7,"username":"a","content":"hi"},{"id":"p-8","username":"b","content":"yo","image":""}]"#,
        )
        .unwrap();
        assert_eq!(posts[0].id.to_string(), "7");
        assert_eq!(posts[1].id.to_string(), "p-8");
        assert!(posts[0].image_src().is_none());
        assert!(posts[1].image_src().is_none());
    }
}
