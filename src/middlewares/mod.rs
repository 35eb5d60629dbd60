mod log_request;

pub use log_request::log_request;
