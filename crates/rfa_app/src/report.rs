//! Plain-text rendering of the form view and the submission outcome.

use rfa_core::{FieldView, FormView, PipelineResponse, SubmissionState};

pub(crate) fn print_form(view: &FormView) {
    let name_note = if view.uses_default_job_name {
        " (default)"
    } else {
        ""
    };
    println!("Job name:      {}{}", view.job_name_preview, name_note);
    println!("Mode:          {}", view.mode);
    println!("Framework:     {}", file_label(view.framework_filename.as_deref()));
    println!("Target:        {}", file_label(view.target_filename.as_deref()));
    println!("Hotspots:      {}", field_label(&view.hotspots));
    println!("Design loops:  {}", field_label(&view.design_loops));

    if view.ready {
        println!("Ready to run job.");
    } else {
        println!("Missing required fields:");
        for missing in &view.missing {
            println!("  - {}", missing.label());
        }
    }
}

/// Prints the outcome; returns false when the job did not go through.
pub(crate) fn print_outcome(state: &SubmissionState) -> bool {
    match state {
        SubmissionState::Succeeded(response) => {
            print_response(response);
            !response.is_stage_error()
        }
        SubmissionState::Failed(err) => {
            eprintln!("Error: {err}");
            false
        }
        SubmissionState::Idle | SubmissionState::Submitting => {
            eprintln!("Job was not submitted.");
            false
        }
    }
}

fn print_response(response: &PipelineResponse) {
    let status = response.status().unwrap_or("unknown");
    match response.job_name().or(response.job_id()) {
        Some(job) => println!("Status: {status} · Job: {job}"),
        None => println!("Status: {status}"),
    }
    if let Some(message) = response.message() {
        println!("{message}");
    }
    if response.is_stage_error() {
        eprintln!(
            "Pipeline stage {} failed",
            response.stage().unwrap_or("unknown")
        );
    }
    for (index, url) in response.artifacts().iter().enumerate() {
        println!("Download {}: {url}", index + 1);
    }
    match serde_json::to_string_pretty(response.payload()) {
        Ok(pretty) => println!("{pretty}"),
        Err(err) => eprintln!("Could not render response: {err}"),
    }
}

fn file_label(filename: Option<&str>) -> &str {
    filename.unwrap_or("(not selected)")
}

fn field_label(field: &FieldView) -> String {
    if field.is_placeholder {
        format!("{} (default)", field.display)
    } else {
        field.display.clone()
    }
}
