pub mod classifier_service;
pub mod session_service;
