use crate::{AppState, Effect, Msg, SubmissionRequest};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldFocused(field) => {
            state.config.focus(field);
            Vec::new()
        }
        Msg::FieldChanged { field, value } => {
            state.config.set_field(field, value);
            Vec::new()
        }
        Msg::FieldBlurred(field) => {
            state.config.blur(field);
            Vec::new()
        }
        Msg::ModeSelected(mode) => {
            state.config.set_mode(mode);
            Vec::new()
        }
        Msg::FileSelected { slot, file } => {
            state.config.set_file(slot, file);
            Vec::new()
        }
        Msg::RunClicked { now } => {
            // The Run button is disabled while a request is in flight.
            if state.submission.is_submitting() {
                return (state, Vec::new());
            }
            match SubmissionRequest::resolve(&state.config, now) {
                Ok(request) => {
                    state.submission.begin();
                    vec![Effect::SubmitJob(request)]
                }
                Err(_missing) => Vec::new(),
            }
        }
        Msg::SubmissionFinished(result) => {
            // Late results without a pending request are dropped.
            if state.submission.is_submitting() {
                state.submission.finish(result);
            }
            Vec::new()
        }
        Msg::SubmissionAbandoned => {
            state.submission.abandon();
            Vec::new()
        }
    };

    (state, effects)
}
