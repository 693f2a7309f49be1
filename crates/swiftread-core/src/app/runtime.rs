impl<IN> TrainerApp<IN>
where
    IN: InputProvider,
{
    /// Drive one poll cycle: drain input, then advance whatever the
    /// active view owns. Returns whether the host should redraw.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        let session_changed = match self.ui {
            UiState::Reading { .. } => self
                .session
                .as_mut()
                .map(|session| session.tick(now_ms) != SessionTick::Unchanged)
                .unwrap_or(false),
            _ => false,
        };

        if session_changed || self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }
}
