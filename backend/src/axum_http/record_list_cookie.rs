use anyhow::Result;
use async_trait::async_trait;
use axum_extra::extract::cookie::CookieJar;
use cookie::{Cookie, SameSite};
use crates::domain::{
    entities::upload_records::UploadRecord,
    repositories::record_list::RecordListStore,
    value_objects::record_lists::{
        RECORD_LIST_COOKIE, decode_record_list, encode_record_list, prepend_record,
    },
};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Record list kept in the browser's `dataList` cookie.
///
/// Wraps the request's jar; hand the jar back with [`CookieRecordList::into_jar`]
/// so the response carries the updated cookie.
pub struct CookieRecordList {
    jar: Mutex<CookieJar>,
}

impl CookieRecordList {
    pub fn new(jar: CookieJar) -> Self {
        Self {
            jar: Mutex::new(jar),
        }
    }

    pub fn into_jar(self) -> CookieJar {
        self.jar.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl RecordListStore for CookieRecordList {
    async fn read(&self) -> Vec<UploadRecord> {
        let jar = self.jar.lock().unwrap_or_else(PoisonError::into_inner);
        read_record_list(&jar)
    }

    async fn prepend(&self, record: UploadRecord) -> Result<()> {
        let mut jar = self.jar.lock().unwrap_or_else(PoisonError::into_inner);

        let records = prepend_record(record, read_record_list(&jar));
        let value = encode_record_list(&records)?;

        let cookie = Cookie::build((RECORD_LIST_COOKIE, value))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .build();

        *jar = jar.clone().add(cookie);
        Ok(())
    }
}

/// Missing or undecodable cookies read as an empty list.
// TODO: surface corrupted `dataList` values to the page instead of dropping them once there is a place to show it.
pub fn read_record_list(jar: &CookieJar) -> Vec<UploadRecord> {
    let Some(cookie) = jar.get(RECORD_LIST_COOKIE) else {
        return Vec::new();
    };

    decode_record_list(cookie.value()).unwrap_or_else(|| {
        warn!(
            cookie = RECORD_LIST_COOKIE,
            value_len = cookie.value().len(),
            "record_list_cookie: discarding undecodable record list"
        );
        Vec::new()
    })
}
