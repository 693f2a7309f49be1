use std::{
    sync::mpsc::{self, Receiver, Sender, TryRecvError},
    thread,
};

use log::{debug, warn};
use swiftread_core::{
    app::QuizRequest,
    quiz::{QuizGenerator, QuizQuestion},
};
use swiftread_term::net::GeminiQuizClient;

/// Background question generation so the render loop never blocks on
/// the network. Replies echo the originating text id so the app can
/// drop ones the user has navigated away from; failures come back as
/// zero questions.
pub(super) struct QuizWorker {
    requests: Sender<QuizRequest>,
    replies: Receiver<(String, Vec<QuizQuestion>)>,
}

impl QuizWorker {
    pub(super) fn spawn(api_key: Option<String>) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<QuizRequest>();
        let (reply_tx, reply_rx) = mpsc::channel();

        if api_key.is_none() {
            debug!("no GEMINI_API_KEY set; quizzes will be skipped");
        }

        thread::spawn(move || {
            let mut client = api_key.map(GeminiQuizClient::new);
            while let Ok(request) = request_rx.recv() {
                let questions = match client.as_mut() {
                    Some(client) => client.generate(&request.content).unwrap_or_else(|err| {
                        warn!("quiz generation failed for {}: {err}", request.text_id);
                        Vec::new()
                    }),
                    None => Vec::new(),
                };
                if reply_tx.send((request.text_id, questions)).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: request_tx,
            replies: reply_rx,
        }
    }

    pub(super) fn submit(&self, request: QuizRequest) {
        let _ = self.requests.send(request);
    }

    pub(super) fn try_recv(&self) -> Option<(String, Vec<QuizQuestion>)> {
        match self.replies.try_recv() {
            Ok(reply) => Some(reply),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}
