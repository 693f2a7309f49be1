impl<IN> TrainerApp<IN>
where
    IN: InputProvider,
{
    pub fn new(input: IN, mut settings: TrainerSettings, app_title: &'static str) -> Self {
        settings.wpm = settings.wpm.clamp(MIN_WPM, MAX_WPM);
        settings.chunk_size = settings.chunk_size.max(1);

        Self {
            input,
            app_title,
            settings,
            materials: Vec::new(),
            records: Vec::new(),
            filter: None,
            ui: UiState::Library { cursor: 0 },
            session: None,
            quiz: None,
            quiz_cursor: 0,
            finished_outcome: None,
            pending_quiz: None,
            pending_result: None,
            pending_update: None,
            pending_delete: None,
            pending_history_clear: false,
            pending_redraw: true,
            exit_requested: false,
        }
    }

    /// Replace the material list, discarding any in-flight session.
    pub fn set_materials(&mut self, materials: Vec<Material>) {
        self.materials = materials;
        self.filter = None;
        self.session = None;
        self.quiz = None;
        self.ui = UiState::Library { cursor: 0 };
        self.pending_redraw = true;
    }

    pub fn set_history(&mut self, records: Vec<SessionRecord>) {
        self.records = records;
        self.pending_redraw = true;
    }

    /// Append a record the host has just persisted, so the stats view
    /// reflects it without a reload.
    pub fn push_record(&mut self, record: SessionRecord) {
        self.records.push(record);
        self.pending_redraw = true;
    }

    pub fn settings(&self) -> TrainerSettings {
        self.settings
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn take_quiz_request(&mut self) -> Option<QuizRequest> {
        self.pending_quiz.take()
    }

    pub fn take_completed_session(&mut self) -> Option<CompletedSession> {
        self.pending_result.take()
    }

    pub fn take_material_update(&mut self) -> Option<Material> {
        self.pending_update.take()
    }

    pub fn take_material_deletion(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    pub fn take_history_clear(&mut self) -> bool {
        core::mem::take(&mut self.pending_history_clear)
    }

    /// Answer an earlier [`QuizRequest`]. Zero questions completes the
    /// flow immediately with a zero score. A response arriving after
    /// the user already left the quiz, or carrying a `text_id` other
    /// than the text being quizzed, is dropped.
    pub fn supply_quiz_questions(&mut self, text_id: &str, questions: Vec<QuizQuestion>) {
        let UiState::Quiz { material } = self.ui else {
            debug!("dropping quiz response arriving outside quiz state");
            return;
        };
        if self.quiz.is_some() {
            return;
        }
        if self
            .materials
            .get(material)
            .is_none_or(|entry| entry.id != text_id)
        {
            debug!("dropping quiz response for {text_id}: not the active text");
            return;
        }

        if questions.is_empty() {
            self.complete_quiz(material, 0);
        } else {
            self.quiz_cursor = 0;
            self.quiz = Some(QuizRun::new(questions));
        }
        self.pending_redraw = true;
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        match self.ui {
            UiState::Library { cursor } => {
                let visible = self.visible_materials();
                let items: Vec<MaterialItemView<'_>> = visible
                    .iter()
                    .map(|&idx| {
                        let material = &self.materials[idx];
                        MaterialItemView {
                            title: &material.title,
                            category: material.category.label(),
                            difficulty: material.difficulty.label(),
                            word_count: count_words(&material.content),
                            preview: preview_excerpt(&material.content, PREVIEW_MAX_CHARS),
                        }
                    })
                    .collect();

                f(Screen::Library {
                    app_title: self.app_title,
                    items: &items,
                    cursor: cursor.min(items.len().saturating_sub(1)),
                    filter: self.filter.map(Category::label),
                });
            }
            UiState::Reading { material } => {
                let Some(session) = self.session.as_ref() else {
                    return;
                };
                let title = self.material_title(material);

                if session.phase() == PlaybackPhase::Finished {
                    let outcome = session
                        .outcome()
                        .unwrap_or_else(|| SessionOutcome::from_elapsed(0, 0.0));
                    f(Screen::Finished {
                        title,
                        outcome,
                        word_total: session.token_count(),
                    });
                    return;
                }

                let chunk = session.current_chunk();
                f(Screen::Reading {
                    title,
                    chunk: &chunk,
                    phase: session.phase(),
                    progress_percent: session.progress_percent(),
                    live_seconds: session.live_seconds(),
                    words_shown: session.words_shown(),
                    word_total: session.token_count(),
                    wpm: session.wpm(),
                    chunk_size: session.chunk_size(),
                    font_size: self.settings.font_size,
                    bionic: self.settings.bionic_enabled,
                    drill: self.settings.drill,
                });
            }
            UiState::Quiz { .. } => match self.quiz.as_ref().and_then(QuizRun::current_question) {
                Some(question) => {
                    let run = self.quiz.as_ref().unwrap();
                    f(Screen::Quiz {
                        index: run.current_index(),
                        total: run.total(),
                        question: &question.question,
                        options: &question.options,
                        cursor: self.quiz_cursor,
                    });
                }
                None => f(Screen::QuizLoading),
            },
            UiState::Stats => {
                f(Screen::Stats {
                    summary: HistorySummary::from_records(&self.records),
                    records: &self.records,
                });
            }
        }
    }

    /// Indices into `materials` passing the active category filter.
    fn visible_materials(&self) -> Vec<usize> {
        self.materials
            .iter()
            .enumerate()
            .filter(|(_, m)| self.filter.is_none_or(|wanted| m.category == wanted))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn material_title(&self, index: usize) -> Option<&str> {
        self.materials
            .get(index)
            .filter(|m| m.category != Category::Custom)
            .map(|m| m.title.as_str())
    }
}
