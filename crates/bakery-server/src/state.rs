use std::path::PathBuf;

/// Shared application state passed to all route handlers. Each handler
/// constructs its own store and query objects from `root`, so a request
/// never shares query state with another.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_stores_root() {
        let state = AppState::new(PathBuf::from("/tmp/shop"));
        assert_eq!(state.root, PathBuf::from("/tmp/shop"));
    }
}
