//! Background API worker
//!
//! Runs each request on its own thread and reports completion through an
//! mpsc channel. The event loop drains the channel on every tick, so
//! responses are applied on the UI thread only.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::model::{CourseDraft, CourseRecord};
use crate::services::{ApiError, CourseApi};

/// Completion event of one API request
#[derive(Debug)]
pub enum ApiEvent {
    /// Full-collection fetch finished
    CoursesLoaded(Result<Vec<CourseRecord>, ApiError>),
    /// Delete for `id` finished
    CourseDeleted {
        id: String,
        result: Result<(), ApiError>,
    },
    /// Create (`id` is None) or update finished
    CourseSaved {
        id: Option<String>,
        result: Result<CourseRecord, ApiError>,
    },
}

/// Spawns API request threads and collects their completion events
pub struct ApiWorker {
    api: Arc<CourseApi>,
    tx: Sender<ApiEvent>,
    rx: Receiver<ApiEvent>,
}

impl ApiWorker {
    pub fn new(api: CourseApi) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            api: Arc::new(api),
            tx,
            rx,
        }
    }

    pub fn fetch_courses(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let _ = tx.send(ApiEvent::CoursesLoaded(api.fetch_courses()));
        });
    }

    pub fn delete_course(&self, id: String) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = api.delete_course(&id);
            let _ = tx.send(ApiEvent::CourseDeleted { id, result });
        });
    }

    /// Create (id None) or update (id Some) a course from the form draft
    pub fn save_course(&self, draft: CourseDraft, id: Option<String>) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = match id.as_deref() {
                Some(id) => api.update_course(id, &draft),
                None => api.create_course(&draft),
            };
            let _ = tx.send(ApiEvent::CourseSaved { id, result });
        });
    }

    /// Next completion event, if one has arrived
    pub fn try_next(&self) -> Option<ApiEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}
