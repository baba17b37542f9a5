pub mod api_key;
pub mod json_config;
pub mod request_origin;
pub mod response;

pub use api_key::ApiKey;
pub use request_origin::{redirect_to, RequestOrigin};
pub use response::{ApiResponse, MgmtResponse};
