// Bookmarker state managers
// Managers own mutable application state and keep it in sync with storage.

pub mod bookmark_manager;
