use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::ai::LlmProvider;
use crate::store::DataAccess;

pub struct AppState {
    pub data: Arc<DataAccess>,
    pub config: AppConfig,
    pub llm: Box<dyn LlmProvider>,
}
