impl<IN> TrainerApp<IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("input provider failed; ignoring events this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        if event == InputEvent::Quit {
            self.exit_requested = true;
            return;
        }

        match self.ui {
            UiState::Library { cursor } => self.apply_library_input(cursor, event),
            UiState::Reading { material } => self.apply_reading_input(material, event, now_ms),
            UiState::Quiz { material } => self.apply_quiz_input(material, event),
            UiState::Stats => self.apply_stats_input(event),
        }
    }

    fn apply_library_input(&mut self, cursor: usize, event: InputEvent) {
        let visible = self.visible_materials();
        let total = visible.len();

        match event {
            InputEvent::Next => {
                self.ui = UiState::Library {
                    cursor: rotate_cw(cursor, total),
                };
                self.pending_redraw = true;
            }
            InputEvent::Prev => {
                self.ui = UiState::Library {
                    cursor: rotate_ccw(cursor, total),
                };
                self.pending_redraw = true;
            }
            InputEvent::Select => {
                if let Some(&material) = visible.get(cursor) {
                    self.start_reading(material);
                }
            }
            InputEvent::CycleFilter => {
                self.filter = next_filter(self.filter);
                self.ui = UiState::Library { cursor: 0 };
                self.pending_redraw = true;
            }
            InputEvent::Edit => {
                if let Some(&material) = visible.get(cursor)
                    && let Some(entry) = self.materials.get_mut(material)
                {
                    entry.difficulty = entry.difficulty.cycled();
                    debug!("retagged material {} as {}", entry.id, entry.difficulty.label());
                    self.pending_update = Some(entry.clone());
                    self.pending_redraw = true;
                }
            }
            InputEvent::Delete => {
                if let Some(&material) = visible.get(cursor) {
                    let removed = self.materials.remove(material);
                    debug!("deleting material {} ({})", removed.id, removed.title);
                    self.pending_delete = Some(removed.id);
                    self.ui = UiState::Library {
                        cursor: cursor.min(self.visible_materials().len().saturating_sub(1)),
                    };
                    self.pending_redraw = true;
                }
            }
            InputEvent::ShowStats => {
                self.ui = UiState::Stats;
                self.pending_redraw = true;
            }
            _ => {}
        }
    }

    fn apply_reading_input(&mut self, material: usize, event: InputEvent, now_ms: u64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match event {
            InputEvent::PlayPause => {
                match session.phase() {
                    PlaybackPhase::Playing => session.pause(),
                    PlaybackPhase::Idle | PlaybackPhase::Paused => session.play(now_ms),
                    PlaybackPhase::Finished => return,
                }
                self.pending_redraw = true;
            }
            InputEvent::Advance => {
                if session.advance(now_ms) != SessionTick::Unchanged {
                    self.pending_redraw = true;
                }
            }
            InputEvent::Reset => {
                session.reset();
                self.pending_redraw = true;
            }
            InputEvent::SpeedUp | InputEvent::SpeedDown => {
                let wpm = if event == InputEvent::SpeedUp {
                    session.wpm().saturating_add(WPM_STEP).min(MAX_WPM)
                } else {
                    session.wpm().saturating_sub(WPM_STEP).max(MIN_WPM)
                };
                session.set_wpm(wpm);
                self.settings.wpm = wpm;
                self.pending_redraw = true;
            }
            InputEvent::ChunkUp | InputEvent::ChunkDown => {
                let chunk = step_chunk_size(session.chunk_size(), event == InputEvent::ChunkUp);
                session.set_chunk_size(chunk);
                self.settings.chunk_size = chunk;
                self.pending_redraw = true;
            }
            InputEvent::ToggleBionic => {
                self.settings.bionic_enabled = !self.settings.bionic_enabled;
                self.pending_redraw = true;
            }
            InputEvent::CycleDrill => {
                self.settings.drill = self.settings.drill.cycled();
                self.pending_redraw = true;
            }
            InputEvent::Select => {
                if session.phase() == PlaybackPhase::Finished {
                    self.begin_quiz(material);
                }
            }
            InputEvent::Back => {
                self.leave_to_library(material);
            }
            _ => {}
        }
    }

    fn apply_quiz_input(&mut self, material: usize, event: InputEvent) {
        let Some(run) = self.quiz.as_mut() else {
            // Still waiting for questions; only backing out is allowed.
            if event == InputEvent::Back {
                self.leave_to_library(material);
            }
            return;
        };

        let option_count = run
            .current_question()
            .map(|q| q.options.len())
            .unwrap_or(0);

        match event {
            InputEvent::Next => {
                self.quiz_cursor = rotate_cw(self.quiz_cursor, option_count);
                self.pending_redraw = true;
            }
            InputEvent::Prev => {
                self.quiz_cursor = rotate_ccw(self.quiz_cursor, option_count);
                self.pending_redraw = true;
            }
            InputEvent::Select => {
                let complete = run.answer(self.quiz_cursor);
                self.quiz_cursor = 0;
                if complete {
                    let score = run.score_percent();
                    self.complete_quiz(material, score);
                }
                self.pending_redraw = true;
            }
            _ => {}
        }
    }

    fn apply_stats_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Back | InputEvent::Select => {
                self.ui = UiState::Library { cursor: 0 };
                self.pending_redraw = true;
            }
            InputEvent::ClearHistory => {
                self.records.clear();
                self.pending_history_clear = true;
                self.pending_redraw = true;
            }
            _ => {}
        }
    }

    fn start_reading(&mut self, material: usize) {
        let Some(entry) = self.materials.get(material) else {
            return;
        };

        debug!("starting session for material {}", entry.id);
        self.session = Some(ReadingSession::new(
            &entry.content,
            self.settings.wpm,
            self.settings.chunk_size,
        ));
        self.finished_outcome = None;
        self.ui = UiState::Reading { material };
        self.pending_redraw = true;
    }

    /// Finished playback -> quiz. Stashes the frozen outcome and asks
    /// the host for questions over the same source text.
    fn begin_quiz(&mut self, material: usize) {
        let Some(entry) = self.materials.get(material) else {
            return;
        };

        self.finished_outcome = self.session.as_ref().and_then(ReadingSession::outcome);
        self.pending_quiz = Some(QuizRequest {
            text_id: entry.id.clone(),
            content: entry.content.clone(),
        });
        self.quiz = None;
        self.quiz_cursor = 0;
        self.ui = UiState::Quiz { material };
        self.pending_redraw = true;
    }

    /// Quiz scored (or skipped with zero questions): emit the session
    /// record and move on to the stats view.
    fn complete_quiz(&mut self, material: usize, score: u8) {
        let outcome = self
            .finished_outcome
            .take()
            .unwrap_or_else(|| SessionOutcome::from_elapsed(0, 0.0));
        let text_id = self
            .materials
            .get(material)
            .map(|m| m.id.clone())
            .unwrap_or_else(|| "custom".to_owned());

        self.pending_result = Some(CompletedSession {
            wpm: outcome.actual_wpm,
            comprehension_score: score,
            duration_seconds: outcome.duration_seconds,
            text_id,
        });
        self.session = None;
        self.quiz = None;
        self.ui = UiState::Stats;
        self.pending_redraw = true;
    }

    fn leave_to_library(&mut self, material: usize) {
        self.session = None;
        self.quiz = None;
        self.finished_outcome = None;
        let cursor = self
            .visible_materials()
            .iter()
            .position(|&idx| idx == material)
            .unwrap_or(0);
        self.ui = UiState::Library { cursor };
        self.pending_redraw = true;
    }
}

fn rotate_cw(current: usize, total: usize) -> usize {
    if total == 0 { 0 } else { (current + 1) % total }
}

fn rotate_ccw(current: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}

fn next_filter(current: Option<Category>) -> Option<Category> {
    match current {
        None => Some(Category::ALL[0]),
        Some(category) => Category::ALL
            .iter()
            .position(|&c| c == category)
            .and_then(|idx| Category::ALL.get(idx + 1))
            .copied(),
    }
}
