//! Session state: the one writer of the roster.
//!
//! Every mutation goes through a method here and is mirrored to the store
//! before the method returns.

use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::db::KvStore;
use crate::errors::AppError;
use crate::export::{self, CalendarFile};
use crate::models::{CreateEventRequest, EventFilter, EventRecord, Participation};
use crate::notice::{Notice, NoticeBoard};
use crate::roster::{EventView, Roster};

pub const NOTICE_CREATED: &str = "번개가 등록됐습니다";
pub const NOTICE_RESET: &str = "데모 데이터가 초기화되었습니다";
pub const NOTICE_LINK_COPIED: &str = "링크가 복사되었습니다";

pub struct Session {
    roster: Roster,
    viewer: String,
    notices: NoticeBoard,
    store: KvStore,
    public_url: String,
}

impl Session {
    /// Load the roster and viewer name from `store`.
    pub async fn open(
        store: KvStore,
        notice_ttl: Duration,
        public_url: String,
    ) -> Result<Self, AppError> {
        let roster = Roster::new(store.load_events().await?);
        let viewer = store.load_viewer().await?;
        tracing::info!("Session opened with {} events", roster.len());

        Ok(Self {
            roster,
            viewer,
            notices: NoticeBoard::new(notice_ttl),
            store,
            public_url,
        })
    }

    pub fn viewer(&self) -> &str {
        &self.viewer
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn notice(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notices.active(now)
    }

    /// Store the viewer name. Leading and trailing whitespace is dropped.
    pub async fn set_viewer(&mut self, name: &str) -> Result<&str, AppError> {
        let name = name.trim();
        self.store.save_viewer(name).await?;
        self.viewer = name.to_string();
        Ok(&self.viewer)
    }

    pub fn list(&self, filter: &EventFilter, now: NaiveDateTime) -> Vec<EventView> {
        self.roster
            .view(filter, now)
            .into_iter()
            .map(|e| EventView::new(e, &self.viewer))
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<EventView, AppError> {
        self.find(id).map(|e| EventView::new(e.clone(), &self.viewer))
    }

    pub async fn toggle(
        &mut self,
        id: &str,
        at: DateTime<Utc>,
    ) -> Result<(EventView, Participation), AppError> {
        let mut next = self.roster.clone();
        let result = next
            .toggle_participation(id, &self.viewer)
            .map(|(event, outcome)| (event.clone(), outcome));
        let (event, outcome) = match result {
            Ok(toggled) => toggled,
            Err(e) => return Err(self.reject(e, at)),
        };
        self.commit(next).await?;

        tracing::info!(event_id = %id, viewer = %self.viewer, ?outcome, "participation toggled");
        Ok((EventView::new(event, &self.viewer), outcome))
    }

    pub async fn create(
        &mut self,
        request: &CreateEventRequest,
        at: DateTime<Utc>,
    ) -> Result<EventView, AppError> {
        let mut next = self.roster.clone();
        let result = next.create(request, &self.viewer).cloned();
        let event = match result {
            Ok(event) => event,
            Err(e) => return Err(self.reject(e, at)),
        };
        self.commit(next).await?;

        tracing::info!(event_id = %event.id, "event created");
        self.notices.post(NOTICE_CREATED, at);
        Ok(EventView::new(event, &self.viewer))
    }

    /// Forget the stored roster and start again from the sample data.
    pub async fn reset(&mut self, at: DateTime<Utc>) -> Result<(), AppError> {
        self.store.clear_events().await?;
        self.roster = Roster::sample();

        tracing::info!("Roster reset to sample data");
        self.notices.post(NOTICE_RESET, at);
        Ok(())
    }

    pub fn share_link(&mut self, id: &str, at: DateTime<Utc>) -> Result<String, AppError> {
        let link = export::share_link(&self.public_url, &self.find(id)?.id);
        self.notices.post(NOTICE_LINK_COPIED, at);
        Ok(link)
    }

    pub fn calendar(&self, id: &str) -> Result<CalendarFile, AppError> {
        export::calendar_file(self.find(id)?)
    }

    fn find(&self, id: &str) -> Result<&EventRecord, AppError> {
        self.roster
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))
    }

    fn reject(&mut self, err: AppError, at: DateTime<Utc>) -> AppError {
        if err.is_validation() {
            self.notices.post(err.message(), at);
        }
        err
    }

    /// Save `next` and only then make it the live roster, so a failed write
    /// leaves the session as it was.
    async fn commit(&mut self, next: Roster) -> Result<(), AppError> {
        self.store.save_events(next.events()).await?;
        self.roster = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_database, EVENTS_KEY};
    use crate::roster::sample_events;
    use tempfile::TempDir;

    async fn session() -> (Session, KvStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("session.sqlite"))
            .await
            .expect("Failed to init DB");
        let store = KvStore::new(pool);
        let session = Session::open(
            store.clone(),
            Duration::from_millis(1800),
            "http://localhost:8080/".to_string(),
        )
        .await
        .expect("Failed to open session");
        (session, store, temp_dir)
    }

    async fn session_with_pool() -> (Session, sqlx::SqlitePool, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("session.sqlite"))
            .await
            .expect("Failed to init DB");
        let session = Session::open(
            KvStore::new(pool.clone()),
            Duration::from_millis(1800),
            "http://localhost:8080/".to_string(),
        )
        .await
        .expect("Failed to open session");
        (session, pool, temp_dir)
    }

    fn valid_form() -> CreateEventRequest {
        CreateEventRequest {
            date: "2025-09-01".to_string(),
            time: "20:00".to_string(),
            course: "정릉천 왕복".to_string(),
            pace_band: "5:30~6:00".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_toggle_persists_roster() {
        let (mut session, store, _dir) = session().await;
        session.set_viewer("하람").await.unwrap();

        let (view, outcome) = session.toggle("E-250903-0600", Utc::now()).await.unwrap();
        assert_eq!(outcome, Participation::Joined);
        assert!(view.event.participants().contains("하람"));

        let stored = store.load_events().await.unwrap();
        assert!(stored[1].participants().contains("하람"));
    }

    #[tokio::test]
    async fn test_toggle_without_viewer_posts_notice_and_skips_store() {
        let (mut session, store, _dir) = session().await;
        let now = Utc::now();

        let err = session.toggle("E-250901-2000", now).await.unwrap_err();
        assert!(err.is_validation());
        assert!(session.notice(now).is_some());
        assert_eq!(store.get(EVENTS_KEY).await.unwrap(), None);
        assert_eq!(session.roster().events(), sample_events().as_slice());
    }

    #[tokio::test]
    async fn test_create_rejects_empty_course() {
        let (mut session, _store, _dir) = session().await;
        let request = CreateEventRequest {
            course: String::new(),
            ..valid_form()
        };

        assert!(session.create(&request, Utc::now()).await.is_err());
        assert_eq!(session.roster().len(), 3);
    }

    #[tokio::test]
    async fn test_create_then_reset() {
        let (mut session, store, _dir) = session().await;
        session.set_viewer("준우").await.unwrap();
        let now = Utc::now();

        let view = session.create(&valid_form(), now).await.unwrap();
        assert_eq!(view.event.id, "E-250901-2000");
        assert_eq!(session.roster().len(), 4);
        assert_eq!(store.load_events().await.unwrap().len(), 4);
        assert_eq!(session.notice(now).unwrap().message, NOTICE_CREATED);

        session.reset(now).await.unwrap();
        assert_eq!(session.roster().events(), sample_events().as_slice());
        assert_eq!(store.get(EVENTS_KEY).await.unwrap(), None);
        assert_eq!(session.notice(now).unwrap().message, "데모 데이터가 초기화되었습니다");
    }

    #[tokio::test]
    async fn test_viewer_is_trimmed_and_persisted() {
        let (mut session, store, _dir) = session().await;
        assert_eq!(session.viewer(), "");

        session.set_viewer("  민서 ").await.unwrap();
        assert_eq!(session.viewer(), "민서");
        assert_eq!(store.load_viewer().await.unwrap(), "민서");
    }

    #[tokio::test]
    async fn test_share_link_and_calendar() {
        let (mut session, _store, _dir) = session().await;
        let now = Utc::now();

        let link = session.share_link("E-250906-0900", now).unwrap();
        assert_eq!(link, "http://localhost:8080/#E-250906-0900");
        assert_eq!(session.notice(now).unwrap().message, NOTICE_LINK_COPIED);

        let file = session.calendar("E-250906-0900").unwrap();
        assert_eq!(file.file_name, "E-250906-0900.ics");
        assert!(session.calendar("nope").is_err());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_roster_unchanged() {
        let (mut session, pool, _dir) = session_with_pool().await;
        session.set_viewer("하람").await.unwrap();
        let before = session.roster().clone();

        sqlx::query("DROP TABLE kv").execute(&pool).await.unwrap();

        let err = session.toggle("E-250903-0600", Utc::now()).await.unwrap_err();
        assert_eq!(err.error_code(), "DATABASE_ERROR");
        assert!(!session.roster().get("E-250903-0600").unwrap().participants().contains("하람"));

        let err = session.create(&valid_form(), Utc::now()).await.unwrap_err();
        assert_eq!(err.error_code(), "DATABASE_ERROR");
        assert_eq!(session.roster(), &before);
    }
}
