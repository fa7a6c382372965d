// Bookmarker services
// Services provide stateless or configuration-level functionality: validation, timestamps, settings.

pub mod settings_engine;
pub mod timestamp;
pub mod validator;
