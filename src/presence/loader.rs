use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use csv::{ErrorKind, ReaderBuilder, StringRecord};

use super::models::{PresenceRecord, PresenceStore, UserId};
use crate::error::PresenceError;

const FIELD_COUNT: usize = 4;
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, thiserror::Error)]
enum RowError {
    #[error("invalid user id {0:?}")]
    UserId(String),
    #[error("invalid date {0:?}")]
    Date(String),
    #[error("invalid time {0:?}")]
    Time(String),
}

/// 从 CSV 文件加载出勤数据
pub fn load_presence(path: &Path) -> Result<PresenceStore, PresenceError> {
    let file = File::open(path).map_err(|e| PresenceError::file_access(path, e))?;
    let store = read_presence(file).map_err(|e| PresenceError::file_access(path, e))?;
    tracing::debug!(
        "Loaded presence data for {} users from {}",
        store.len(),
        path.display()
    );
    Ok(store)
}

/// 解析出勤数据
///
/// 字段数不为 4 的行（表头、表尾）直接忽略；无法解析的行记录日志后跳过。
/// 同一 (user_id, date) 重复出现时以最后一行为准。
pub fn parse_presence<R: Read>(reader: R) -> Result<PresenceStore, PresenceError> {
    read_presence(reader).map_err(|e| PresenceError::Csv(e.into()))
}

/// 只有读取失败才返回错误，格式问题逐行跳过
fn read_presence<R: Read>(reader: R) -> io::Result<PresenceStore> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut store = PresenceStore::new();
    for (i, result) in reader.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => match e.into_kind() {
                ErrorKind::Io(e) => return Err(e),
                kind => {
                    tracing::debug!("Problem with line {}: {:?}", i + 1, kind);
                    continue;
                }
            },
        };
        if row.len() != FIELD_COUNT {
            continue;
        }

        match parse_record(&row) {
            Ok(record) => {
                store
                    .entry(record.user_id)
                    .or_default()
                    .insert(record.date, record.presence());
            }
            Err(e) => {
                let line = row.position().map_or(i as u64 + 1, |p| p.line());
                tracing::debug!("Problem with line {}: {}", line, e);
            }
        }
    }

    Ok(store)
}

fn parse_record(row: &StringRecord) -> Result<PresenceRecord, RowError> {
    let user_id = row[0]
        .parse::<UserId>()
        .map_err(|_| RowError::UserId(row[0].to_string()))?;
    let date = NaiveDate::parse_from_str(&row[1], DATE_FORMAT)
        .map_err(|_| RowError::Date(row[1].to_string()))?;
    let start = parse_time(&row[2])?;
    let end = parse_time(&row[3])?;

    Ok(PresenceRecord {
        user_id,
        date,
        start,
        end,
    })
}

fn parse_time(field: &str) -> Result<NaiveTime, RowError> {
    NaiveTime::parse_from_str(field, TIME_FORMAT).map_err(|_| RowError::Time(field.to_string()))
}
