use std::{path::PathBuf, sync::Arc, time::Duration};

use clap::Parser;
use csvform_lib::{
    form::{FormEvent, UploadFormController},
    submit::SubmitError,
    util::file::selected_file,
    Error, Result, Settings,
};
use csvform_proto::{
    SlotId, DEFAULT_PENDING_DELAY_MS, DEFAULT_RESET_DELAY_MS, DEFAULT_SUBMIT_LABEL,
};
use itertools::Itertools;
use simple_logger::SimpleLogger;

use crate::ui::{Action, Console, InteractiveUI, PromptUI, TerminalView};

mod ui;

#[derive(Parser)]
struct Args {
    /// Milliseconds the upload stays pending before it is reported successful
    #[arg(long, env = "CSVFORM_PENDING_DELAY_MS", default_value_t = DEFAULT_PENDING_DELAY_MS)]
    pending_delay_ms: u64,

    /// Milliseconds the success label stays up before the button is restored
    #[arg(long, env = "CSVFORM_RESET_DELAY_MS", default_value_t = DEFAULT_RESET_DELAY_MS)]
    reset_delay_ms: u64,

    /// Label of the submit button
    #[arg(long, env = "CSVFORM_SUBMIT_LABEL", default_value = DEFAULT_SUBMIT_LABEL)]
    submit_label: String,

    /// Do not use colors
    #[arg(long)]
    no_color: bool,

    #[clap(subcommand)]
    cmd: SubCommand,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            pending_delay: Duration::from_millis(self.pending_delay_ms),
            reset_delay: Duration::from_millis(self.reset_delay_ms),
            submit_label: self.submit_label.clone(),
        }
    }
}

#[derive(clap::Subcommand)]
enum SubCommand {
    /// Fill in the form step by step
    Interactive,
    /// Put two files into the form and submit it
    Upload(UploadArgs),
}

#[derive(Parser)]
struct UploadArgs {
    /// CSV files for the first and second slot
    #[arg(required = true, num_args = 2)]
    input: Vec<PathBuf>,

    /// Drop the files onto the slots instead of choosing them
    #[arg(long)]
    drop: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .expect("Failed to init logger");

    let args: Args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = ctrlc::set_handler(|| {
        log::info!("interrupted");
        std::process::exit(130)
    }) {
        log::warn!("Failed to set ctrl-c handler: {}", e);
    }

    let console = Console::default();
    let view = Arc::new(TerminalView {
        console: console.clone(),
        blocking_alerts: matches!(args.cmd, SubCommand::Interactive),
    });
    let controller = UploadFormController::new(view, args.settings());
    let ui = PromptUI {
        console,
        use_color: !args.no_color,
    };

    match &args.cmd {
        SubCommand::Upload(upload) => {
            if upload.input.iter().unique().count() < upload.input.len() {
                log::warn!("the same file is used for both slots");
            }
            for (slot, path) in SlotId::ALL.into_iter().zip(upload.input.iter()) {
                select(&controller, slot, path.clone(), upload.drop).await?;
            }
            match upload_files(&controller, &ui).await {
                Ok(_) => {}
                Err(Error::Submit(SubmitError::MissingFiles)) => std::process::exit(1),
                Err(e) => {
                    ui.print_error(&e);
                    std::process::exit(1);
                }
            }
        }
        SubCommand::Interactive => loop {
            let result = match ui.next_action() {
                Action::Select(slot, path) => select(&controller, slot, path, false).await,
                Action::Drop(slot, path) => select(&controller, slot, path, true).await,
                Action::Clear(slot) => controller
                    .dispatch(FormEvent::Selected(slot, None))
                    .await
                    .map(|_| ()),
                Action::Submit => upload_files(&controller, &ui).await,
                Action::Summary => {
                    ui.print_selection(&controller.state().await);
                    Ok(())
                }
                Action::Quit => break,
            };
            match result {
                Ok(_) => {}
                // already alerted
                Err(Error::Submit(SubmitError::MissingFiles)) => {}
                Err(e) => ui.print_error(&e),
            }
            println!();
        },
    }

    Ok(())
}

async fn select(
    controller: &UploadFormController,
    slot: SlotId,
    path: PathBuf,
    drop: bool,
) -> Result<()> {
    let file = selected_file(path)?;
    if drop {
        controller.dispatch(FormEvent::DragOver(slot)).await?;
        controller.dispatch(FormEvent::Drop(slot, vec![file])).await?;
    } else {
        controller
            .dispatch(FormEvent::Selected(slot, Some(file)))
            .await?;
    }
    Ok(())
}

async fn upload_files(controller: &UploadFormController, ui: &PromptUI) -> Result<()> {
    let job = controller.submit().await?;
    let form_data = ui
        .show_loading("Uploading".to_string(), job.finished())
        .await?;
    ui.print_payload(&form_data);
    Ok(())
}
