mod bookings;
mod diagnostics;
mod leads;
mod root;
mod schema;
mod upload;
mod vehicles;

pub use bookings::submit_booking;
pub use diagnostics::diagnostics;
pub use leads::create_lead;
pub use root::root;
pub use schema::schema_index;
pub use upload::upload_file;
pub use vehicles::{get_vehicle, list_vehicles};

use crate::config::Config;
use crate::store::StoreClient;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared state for all handlers. Handlers hold no other state between
/// requests.
pub struct AppState {
    pub store: Arc<StoreClient>,
    pub database_url_from_env: bool,
    pub database_name: String,
    pub upload_dir: PathBuf,
    pub files_base_url: String,
}

impl AppState {
    pub fn new(store: Arc<StoreClient>, config: &Config) -> Self {
        Self {
            store,
            database_url_from_env: config.database_url_from_env,
            database_name: config.database_name.clone(),
            upload_dir: config.upload_dir.clone(),
            files_base_url: config.files_base_url.clone(),
        }
    }
}
