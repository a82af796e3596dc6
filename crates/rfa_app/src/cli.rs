use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use rfa_core::{update, AppState, Field, FileSlot, Mode, Msg};
use rfa_engine::{read_structure_file, ClientSettings, ReqwestTransport, SubmissionClient};
use rfa_logging::{rfa_debug, LogDestination, DEFAULT_LOG_FILE};

use crate::job_file::{load_job_file, JobFile};
use crate::report;

const EXIT_FAILED: u8 = 1;
const EXIT_INCOMPLETE: u8 = 2;

#[derive(Parser)]
#[command(name = "rfantibody")]
#[command(about = "Configure and submit RFantibody design jobs", version)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RFANTIBODY_LOG")]
    log_level: Option<String>,

    /// Also write logs to ./rfantibody.log
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the effective configuration and what is still missing
    Check {
        #[command(flatten)]
        job: JobArgs,
    },

    /// Submit the job to the pipeline endpoint
    Submit {
        #[command(flatten)]
        job: JobArgs,

        #[command(flatten)]
        transport: TransportArgs,
    },
}

#[derive(Args, Default)]
struct JobArgs {
    /// RON job file; flags below override its values
    #[arg(long, short = 'f')]
    job_file: Option<PathBuf>,

    /// Job name (default: RFantibody_<UTC timestamp>)
    #[arg(long)]
    job_name: Option<String>,

    /// Antibody or Nanobody
    #[arg(long)]
    mode: Option<Mode>,

    /// Framework structure (.pdb)
    #[arg(long)]
    framework: Option<PathBuf>,

    /// Target structure (.pdb)
    #[arg(long)]
    target: Option<PathBuf>,

    /// Comma-separated hotspot residues, e.g. "A21, B14-21"; empty keeps the default
    #[arg(long)]
    hotspots: Option<String>,

    /// Loop constraints, e.g. "H1, H2:7, H3:5-13"; empty keeps the default
    #[arg(long)]
    design_loops: Option<String>,

    /// Number of RFdiffusion backbones
    #[arg(long)]
    rf_diffusion_designs: Option<String>,

    /// ProteinMPNN sequences per backbone
    #[arg(long)]
    protein_mpnn_designs: Option<String>,
}

#[derive(Args)]
struct TransportArgs {
    /// API base URL or path prefix (overrides RFANTIBODY_API_BASE_URL)
    #[arg(long)]
    api_base: Option<String>,

    /// Origin for a relative API base (overrides RFANTIBODY_API_ORIGIN)
    #[arg(long)]
    origin: Option<String>,

    /// Give up after this many seconds (default: wait indefinitely)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

/// Form inputs after layering flags over the job file.
#[derive(Debug, Default, PartialEq, Eq)]
struct JobInputs {
    job_name: Option<String>,
    mode: Option<Mode>,
    framework: Option<PathBuf>,
    target: Option<PathBuf>,
    hotspots: Option<String>,
    design_loops: Option<String>,
    rf_diffusion_designs: Option<String>,
    protein_mpnn_designs: Option<String>,
}

pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let level = rfa_logging::parse_level(cli.log_level.as_deref());
    let destination = if cli.log_file {
        LogDestination::Both(PathBuf::from(DEFAULT_LOG_FILE))
    } else {
        LogDestination::Terminal
    };
    rfa_logging::initialize(destination, level);

    match cli.command {
        Commands::Check { job } => {
            let state = build_state(merge(job)?).await?;
            let view = state.view(Utc::now());
            report::print_form(&view);
            Ok(exit_for_readiness(view.ready))
        }
        Commands::Submit { job, transport } => {
            let state = build_state(merge(job)?).await?;
            let settings = transport_settings(transport)?;
            let transport =
                ReqwestTransport::new(&settings).context("invalid client settings")?;
            rfa_debug!("Pipeline endpoint {}", transport.endpoint());

            let mut client = SubmissionClient::new(Arc::new(transport)).with_state(state);
            let view = client.view();
            report::print_form(&view);
            if !view.ready {
                return Ok(exit_for_readiness(false));
            }

            if report::print_outcome(client.submit().await) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_FAILED))
            }
        }
    }
}

fn exit_for_readiness(ready: bool) -> ExitCode {
    if ready {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INCOMPLETE)
    }
}

fn transport_settings(args: TransportArgs) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::from_env().context("invalid environment settings")?;
    if let Some(api_base) = args.api_base {
        settings.api_base = api_base;
    }
    if let Some(origin) = args.origin {
        settings.origin = origin;
    }
    if let Some(secs) = args.timeout_secs.filter(|secs| *secs > 0) {
        settings.request_timeout = Some(Duration::from_secs(secs));
    }
    Ok(settings)
}

fn merge(args: JobArgs) -> anyhow::Result<JobInputs> {
    let file = match args.job_file.as_deref() {
        Some(path) => load_job_file(path)?,
        None => JobFile::default(),
    };
    let file_mode = file
        .mode
        .as_deref()
        .map(str::parse::<Mode>)
        .transpose()
        .context("invalid mode in job file")?;

    Ok(JobInputs {
        job_name: args.job_name.or(file.job_name),
        mode: args.mode.or(file_mode),
        framework: args.framework.or(file.framework),
        target: args.target.or(file.target),
        hotspots: args.hotspots.or(file.hotspots),
        design_loops: args.design_loops.or(file.design_loops),
        rf_diffusion_designs: args
            .rf_diffusion_designs
            .or_else(|| file.rf_diffusion_designs.map(|n| n.to_string())),
        protein_mpnn_designs: args
            .protein_mpnn_designs
            .or_else(|| file.protein_mpnn_designs.map(|n| n.to_string())),
    })
}

/// Replays the inputs through the reducer the same way an interactive form would.
async fn build_state(inputs: JobInputs) -> anyhow::Result<AppState> {
    let mut state = AppState::new();

    if let Some(mode) = inputs.mode {
        state = step(state, Msg::ModeSelected(mode));
    }

    for (slot, path) in [
        (FileSlot::Framework, inputs.framework),
        (FileSlot::Target, inputs.target),
    ] {
        if let Some(path) = path {
            let file = read_structure_file(&path)
                .await
                .with_context(|| format!("cannot load structure {}", path.display()))?;
            state = step(
                state,
                Msg::FileSelected {
                    slot,
                    file: Some(file),
                },
            );
        }
    }

    let text_inputs = [
        (Field::JobName, inputs.job_name),
        (Field::Hotspots, inputs.hotspots),
        (Field::DesignLoops, inputs.design_loops),
        (Field::RfDiffusionDesigns, inputs.rf_diffusion_designs),
        (Field::ProteinMpnnDesigns, inputs.protein_mpnn_designs),
    ];
    for (field, value) in text_inputs {
        if let Some(value) = value {
            state = type_into(state, field, value);
        }
    }

    Ok(state)
}

fn step(state: AppState, msg: Msg) -> AppState {
    let (state, _effects) = update(state, msg);
    state
}

fn type_into(state: AppState, field: Field, value: String) -> AppState {
    let state = step(state, Msg::FieldFocused(field));
    let state = step(state, Msg::FieldChanged { field, value });
    step(state, Msg::FieldBlurred(field))
}
