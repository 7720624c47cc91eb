pub use bytes;
pub use chrono;
pub use env_logger;
pub use log;
pub use serde_json;
pub use tokio;
pub use url;
