use crate::session::Session;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, session: Session) -> Self {
        Self {
            data_path,
            session: Arc::new(Mutex::new(session)),
        }
    }
}
