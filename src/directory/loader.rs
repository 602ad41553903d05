use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PresenceError;

/// 目录中的用户信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub name: String,
    pub avatar: String,
}

/// 用户目录: user_id -> 用户信息
pub type UserDirectory = BTreeMap<String, DirectoryUser>;

#[derive(Debug, Deserialize)]
struct DirectoryDocument {
    #[serde(alias = "config")]
    server: ServerSection,
    #[serde(default)]
    users: UsersSection,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    protocol: String,
    host: String,
}

#[derive(Debug, Default, Deserialize)]
struct UsersSection {
    #[serde(rename = "user", default)]
    users: Vec<UserElement>,
}

#[derive(Debug, Deserialize)]
struct UserElement {
    #[serde(rename = "@id")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    avatar: String,
}

/// 从 XML 文件加载用户目录
pub fn load_directory(path: &Path) -> Result<UserDirectory, PresenceError> {
    let xml = fs::read_to_string(path).map_err(|e| PresenceError::file_access(path, e))?;
    let directory = parse_directory(&xml)?;
    tracing::debug!(
        "Loaded {} directory users from {}",
        directory.len(),
        path.display()
    );
    Ok(directory)
}

/// 解析用户目录，头像相对路径拼接到 `{protocol}://{host}` 之后
pub fn parse_directory(xml: &str) -> Result<UserDirectory, PresenceError> {
    let document: DirectoryDocument =
        quick_xml::de::from_str(xml).map_err(|e| PresenceError::Directory(e.to_string()))?;

    let address = format!("{}://{}", document.server.protocol, document.server.host);
    Ok(document
        .users
        .users
        .into_iter()
        .map(|user| {
            let entry = DirectoryUser {
                name: user.name,
                avatar: format!("{}{}", address, user.avatar),
            };
            (user.id, entry)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<intranet>
  <server>
    <host>intranet.example.com</host>
    <port>443</port>
    <protocol>https</protocol>
  </server>
  <users>
    <user id="141">
      <avatar>/api/images/users/141</avatar>
      <name>Adam P.</name>
    </user>
    <user id="176">
      <avatar>/api/images/users/176</avatar>
      <name>Adrian K.</name>
    </user>
  </users>
</intranet>
"#;

    #[test]
    fn resolves_avatar_against_server() {
        let directory = parse_directory(SAMPLE).unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(
            directory["141"],
            DirectoryUser {
                name: "Adam P.".to_string(),
                avatar: "https://intranet.example.com/api/images/users/141".to_string(),
            }
        );
        assert_eq!(directory["176"].name, "Adrian K.");
    }

    #[test]
    fn accepts_config_section_and_no_users() {
        let xml = "<root><config><protocol>http</protocol><host>h</host></config><users/></root>";

        assert!(parse_directory(xml).unwrap().is_empty());
    }

    #[test]
    fn rejects_document_without_server() {
        let err = parse_directory("<root><users/></root>").unwrap_err();

        assert!(matches!(err, PresenceError::Directory(_)));
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let err = load_directory(Path::new("/nonexistent/users.xml")).unwrap_err();

        assert!(matches!(err, PresenceError::FileAccess { .. }));
    }
}
