//! Application state owned by the viewer session

mod application_state;

pub use application_state::{ApplicationState, FALLBACK_MESSAGE, LOADING_MESSAGE};
