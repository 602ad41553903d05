#![allow(dead_code)]

use std::fs;
use std::path::Path;

use presence_analyzer::config::Config;
use tempfile::TempDir;

/// 2013-09-10 是周二；用户 11 周四有两条记录，最后一行格式错误
pub const PRESENCE_CSV: &str = "\
user_id,date,start,end
10,2013-09-10,09:39:05,17:59:52
10,2013-09-11,09:19:52,16:07:37
10,2013-09-12,10:48:46,17:23:51
11,2013-09-09,09:00:00,15:42:03
11,2013-09-10,09:00:00,13:36:04
11,2013-09-11,09:00:00,16:02:01
11,2013-09-05,09:00:00,15:00:00
11,2013-09-12,09:00:00,15:46:08
11,2013-09-13,09:00:00,10:47:06
12,2013-09-13,9h,10:47:06
";

pub const USERS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<intranet>
  <server>
    <host>intranet.example.com</host>
    <port>443</port>
    <protocol>https</protocol>
  </server>
  <users>
    <user id="10">
      <avatar>/api/images/users/10</avatar>
      <name>Maria K.</name>
    </user>
    <user id="141">
      <avatar>/api/images/users/141</avatar>
      <name>Adam P.</name>
    </user>
  </users>
</intranet>
"#;

pub struct Fixture {
    pub dir: TempDir,
    pub config: Config,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_sources(PRESENCE_CSV, USERS_XML)
    }

    pub fn with_sources(csv: &str, xml: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().join("presence.csv"), dir.path().join("users.xml"));
        write(&config.presence_csv_path, csv);
        write(&config.directory_xml_path, xml);
        Fixture { dir, config }
    }

    pub fn with_cache_duration(mut self, secs: u64) -> Self {
        self.config.cache_duration_secs = secs;
        self
    }
}

pub fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}
