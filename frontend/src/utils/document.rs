use web_sys::Window;

const READY_STATE_COMPLETE: &str = "complete";

/// True once `document.readyState` says the `load` event has already fired.
pub fn is_load_complete(ready_state: &str) -> bool {
    ready_state == READY_STATE_COMPLETE
}

pub fn document_loaded(window: &Window) -> bool {
    window
        .document()
        .map_or(false, |d| is_load_complete(&d.ready_state()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_complete_counts_as_loaded() {
        assert!(is_load_complete("complete"));
        assert!(!is_load_complete("interactive"));
        assert!(!is_load_complete("loading"));
        assert!(!is_load_complete(""));
    }
}
