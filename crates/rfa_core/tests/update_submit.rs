use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rfa_core::{
    update, AppState, Effect, Field, FileSlot, Mode, Msg, PipelineResponse, StructureFile,
    SubmissionError, SubmissionRequest, SubmissionState, DEFAULT_DESIGN_LOOPS,
};
use serde_json::json;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(rfa_logging::initialize_for_tests);
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}

fn select_files(state: AppState) -> AppState {
    let (state, _) = update(
        state,
        Msg::FileSelected {
            slot: FileSlot::Framework,
            file: Some(StructureFile::new("framework.pdb", b"FW".to_vec())),
        },
    );
    let (state, _) = update(
        state,
        Msg::FileSelected {
            slot: FileSlot::Target,
            file: Some(StructureFile::new("target.pdb", b"TG".to_vec())),
        },
    );
    state
}

fn edit(state: AppState, field: Field, value: &str) -> AppState {
    let (state, _) = update(state, Msg::FieldFocused(field));
    let (state, _) = update(
        state,
        Msg::FieldChanged {
            field,
            value: value.to_string(),
        },
    );
    let (state, _) = update(state, Msg::FieldBlurred(field));
    state
}

#[test]
fn run_on_incomplete_form_is_ignored() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(state.clone(), Msg::RunClicked { now: now() });

    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert_eq!(next.submission(), &SubmissionState::Idle);
}

#[test]
fn run_resolves_effective_values() {
    init_logging();
    let state = select_files(AppState::new());
    let state = edit(state, Field::Hotspots, " T305, T456 ");
    let (state, _) = update(state, Msg::ModeSelected(Mode::Nanobody));
    let state = edit(state, Field::RfDiffusionDesigns, "4");

    let (next, effects) = update(state, Msg::RunClicked { now: now() });

    assert_eq!(next.submission(), &SubmissionState::Submitting);
    assert_eq!(
        effects,
        vec![Effect::SubmitJob(SubmissionRequest {
            job_name: "RFantibody_2024-01-02T03-04-05".to_string(),
            mode: Mode::Nanobody,
            hotspots: "T305, T456".to_string(),
            design_loops: DEFAULT_DESIGN_LOOPS.to_string(),
            rf_diffusion_designs: 4,
            protein_mpnn_designs: 1,
            framework_file: StructureFile::new("framework.pdb", b"FW".to_vec()),
            target_file: StructureFile::new("target.pdb", b"TG".to_vec()),
        })]
    );
}

#[test]
fn run_while_submitting_emits_nothing() {
    init_logging();
    let state = select_files(AppState::new());
    let (state, effects) = update(state, Msg::RunClicked { now: now() });
    assert_eq!(effects.len(), 1);
    assert!(!state.view(now()).submit_enabled);

    let (state, effects) = update(state, Msg::RunClicked { now: now() });

    assert!(effects.is_empty());
    assert_eq!(state.submission(), &SubmissionState::Submitting);
}

#[test]
fn success_stores_parsed_payload() {
    init_logging();
    let state = select_files(AppState::new());
    let (state, _) = update(state, Msg::RunClicked { now: now() });
    let payload = json!({"status": "submitted", "job": {"jobName": "X"}});

    let (state, effects) = update(
        state,
        Msg::SubmissionFinished(Ok(PipelineResponse::new(payload.clone()))),
    );

    assert!(effects.is_empty());
    let response = state.submission().response().expect("succeeded");
    assert_eq!(response.payload(), &payload);
    assert_eq!(response.job_name(), Some("X"));
    assert!(state.view(now()).submit_enabled);
}

#[test]
fn failure_is_cleared_by_next_run() {
    init_logging();
    let state = select_files(AppState::new());
    let (state, _) = update(state, Msg::RunClicked { now: now() });
    let (state, _) = update(
        state,
        Msg::SubmissionFinished(Err(SubmissionError::HttpStatus {
            status: 500,
            body: "boom".to_string(),
        })),
    );
    assert_eq!(
        state.submission().error().map(ToString::to_string),
        Some("HTTP 500 - boom".to_string())
    );

    let (state, effects) = update(state, Msg::RunClicked { now: now() });

    assert_eq!(effects.len(), 1);
    assert_eq!(state.submission(), &SubmissionState::Submitting);
}

#[test]
fn abandoned_request_rearms_run() {
    init_logging();
    let state = select_files(AppState::new());
    let (state, _) = update(state, Msg::RunClicked { now: now() });

    let (state, effects) = update(state, Msg::SubmissionAbandoned);
    assert!(effects.is_empty());
    assert_eq!(state.submission(), &SubmissionState::Idle);

    let (state, effects) = update(state, Msg::RunClicked { now: now() });
    assert_eq!(effects.len(), 1);
    assert_eq!(state.submission(), &SubmissionState::Submitting);
}

#[test]
fn abandon_keeps_settled_outcome() {
    init_logging();
    let state = select_files(AppState::new());
    let (state, _) = update(state, Msg::RunClicked { now: now() });
    let (state, _) = update(
        state,
        Msg::SubmissionFinished(Err(SubmissionError::unknown("refused"))),
    );

    let (state, _) = update(state, Msg::SubmissionAbandoned);

    assert_eq!(
        state.submission(),
        &SubmissionState::Failed(SubmissionError::unknown("refused"))
    );
}

#[test]
fn late_result_without_pending_request_is_dropped() {
    init_logging();
    let state = AppState::new();

    let (next, _) = update(
        state,
        Msg::SubmissionFinished(Err(SubmissionError::unknown("late"))),
    );

    assert_eq!(next.submission(), &SubmissionState::Idle);
}

#[test]
fn view_reports_checklist_and_preview() {
    init_logging();
    let state = AppState::new();
    let view = state.view(now());

    assert!(!view.ready);
    assert!(!view.submit_enabled);
    assert!(view.uses_default_job_name);
    assert_eq!(view.job_name_preview, "RFantibody_2024-01-02T03-04-05");
    assert!(view.hotspots.is_placeholder);
    assert_eq!(view.hotspots.display, "A21, B14-21");
    assert_eq!(view.missing.len(), 2);

    let state = select_files(state);
    let state = edit(state, Field::JobName, "run-7");
    let view = state.view(now());
    assert!(view.ready);
    assert!(view.submit_enabled);
    assert!(!view.uses_default_job_name);
    assert_eq!(view.job_name_preview, "run-7");
    assert_eq!(view.framework_filename.as_deref(), Some("framework.pdb"));
}

#[test]
fn unknown_error_falls_back_to_generic_message() {
    assert_eq!(SubmissionError::unknown("").to_string(), "Unknown error");
    assert_eq!(
        SubmissionError::unknown("connection refused").to_string(),
        "connection refused"
    );
}
