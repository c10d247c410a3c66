use micmaster_designer::DesignerState;

/// One-line summary for the status bar.
pub fn status_text(state: &DesignerState) -> String {
    let count = state.canvas().microphone_count();
    format!(
        "Mode: {} | {} | {} microphone{}",
        state.mode(),
        state.canvas().viewport(),
        count,
        if count == 1 { "" } else { "s" }
    )
}
