use std::{
    fmt::Display,
    future::Future,
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use colored::{ColoredString, Colorize};
use comfy_table::Table;
use csvform_lib::{
    form::{FormState, SubmitButton},
    submit::FormData,
    view::{DropZoneTone, FormView, StatusLine, Tone},
    Error,
};
use csvform_proto::{dto::SelectedFile, SlotId};
use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_PLAIN_TICK_CHARS: &'static str = "+x*";

type Rgb = (u8, u8, u8);

const NEUTRAL_COLOR: Rgb = (0x4b, 0x6c, 0xb7);
const ERROR_COLOR: Rgb = (0xe7, 0x4c, 0x3c);
const SUCCESS_COLOR: Rgb = (0x4c, 0xaf, 0x50);

const IDLE_BORDER: Rgb = (0x4b, 0x6c, 0xb7);
const IDLE_BACKGROUND: Rgb = (0xf8, 0xf9, 0xff);
const HIGHLIGHT_BORDER: Rgb = (0x18, 0x28, 0x48);
const HIGHLIGHT_BACKGROUND: Rgb = (0xee, 0xf2, 0xff);

fn paint(text: &str, (r, g, b): Rgb) -> ColoredString {
    text.truecolor(r, g, b)
}

fn tone_color(tone: Tone) -> Rgb {
    match tone {
        Tone::Neutral => NEUTRAL_COLOR,
        Tone::Error => ERROR_COLOR,
        Tone::Success => SUCCESS_COLOR,
    }
}

/// Terminal output shared by the view and the prompts. Lines printed while a
/// spinner is running are written with the spinner suspended.
#[derive(Clone, Default)]
pub struct Console {
    spinner: Arc<Mutex<Option<ProgressBar>>>,
}

impl Console {
    pub fn println(&self, line: impl Display) {
        match self.active_spinner() {
            Some(pb) => pb.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }

    fn active_spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|spinner| spinner.clone())
    }

    fn attach(&self, pb: &ProgressBar) {
        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb.clone());
        }
    }

    fn detach(&self) {
        if let Ok(mut spinner) = self.spinner.lock() {
            spinner.take();
        }
    }
}

/// Renders the form onto the terminal, one line per projection.
pub struct TerminalView {
    pub console: Console,
    /// Wait for the user to acknowledge alerts, only sensible when a user is present.
    pub blocking_alerts: bool,
}

impl FormView for TerminalView {
    fn render_status(&self, slot: SlotId, status: &StatusLine) {
        let prefix = format!("[{}]", slot.status_key()).dimmed();
        if status.is_empty() {
            self.console.println(prefix);
        } else {
            self.console
                .println(format!("{} {}", prefix, paint(&status.text, tone_color(status.tone))));
        }
    }

    fn clear_input(&self, slot: SlotId) {
        log::debug!("input {} cleared", slot);
        self.console
            .println(format!("[{}] input cleared", slot).dimmed());
    }

    fn render_drop_zone(&self, slot: SlotId, tone: DropZoneTone) {
        let (border, (r, g, b), state) = match tone {
            DropZoneTone::Idle => (IDLE_BORDER, IDLE_BACKGROUND, "drop files here"),
            DropZoneTone::Highlighted => (HIGHLIGHT_BORDER, HIGHLIGHT_BACKGROUND, "release to drop"),
        };
        let zone = paint(&format!("| {} |", state), border).on_truecolor(r, g, b);
        self.console
            .println(format!("{} {}", format!("[{} drop zone]", slot).dimmed(), zone));
    }

    fn render_button(&self, button: &SubmitButton) {
        let label = format!("[ {} ]", button.label);
        let mut label = paint(&label, tone_color(button.tone)).bold();
        if !button.enabled {
            label = label.dimmed();
        }
        self.console
            .println(format!("{} {}", "[upload-btn]".dimmed(), label));
    }

    fn alert(&self, message: &str) {
        self.console
            .println(format!("! {}", message).bold().red());
        if self.blocking_alerts {
            inquire::Confirm::new("OK")
                .with_default(true)
                .with_help_message("enter to dismiss")
                .prompt_skippable()
                .ok();
        }
    }
}

pub enum Action {
    Select(SlotId, PathBuf),
    Drop(SlotId, PathBuf),
    Clear(SlotId),
    Submit,
    Summary,
    Quit,
}

#[async_trait]
pub trait InteractiveUI {
    async fn show_loading<T>(&self, message: String, task: T) -> T::Output
    where
        T: Future + Send + 'static,
        T::Output: Send + 'static;

    fn next_action(&self) -> Action;

    fn print_selection(&self, state: &FormState);

    fn print_payload(&self, form_data: &FormData);

    fn print_error(&self, error: &Error);
}

#[derive(Clone)]
pub struct PromptUI {
    pub console: Console,
    pub use_color: bool,
}

#[async_trait]
impl InteractiveUI for PromptUI {
    async fn show_loading<T>(&self, message: String, task: T) -> T::Output
    where
        T: Future + Send + 'static,
        T::Output: Send + 'static,
    {
        let mut style = ProgressStyle::default_spinner();
        if !self.use_color {
            style = style.tick_chars(SPINNER_PLAIN_TICK_CHARS);
        }
        let pb = indicatif::ProgressBar::new_spinner();
        pb.set_message(message);
        pb.set_style(style);
        self.console.attach(&pb);
        let l = pb.clone();
        let timer = tokio::spawn(async move {
            loop {
                l.inc(1);
                tokio::time::sleep(Duration::from_millis(64)).await;
            }
        });
        let output = task.await;
        self.console.detach();
        pb.finish_and_clear();
        timer.abort();
        output
    }

    fn next_action(&self) -> Action {
        enum Item {
            Select,
            Drop,
            Clear,
            Submit,
            Summary,
            Quit,
        }

        impl std::fmt::Display for Item {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    Item::Select => "Choose a file",
                    Item::Drop => "Drop a file onto a slot",
                    Item::Clear => "Clear a slot",
                    Item::Submit => "Upload files",
                    Item::Summary => "Show selection",
                    Item::Quit => "Quit",
                })
            }
        }

        loop {
            let items = vec![
                Item::Select,
                Item::Drop,
                Item::Clear,
                Item::Submit,
                Item::Summary,
                Item::Quit,
            ];
            let selection = inquire::Select::new("What do you want to do?", items)
                .with_help_message("↑↓ to move, enter to select, esc to quit")
                .with_vim_mode(true)
                .prompt_skippable();
            let item = match selection {
                Ok(Some(item)) => item,
                _ => return Action::Quit,
            };

            let action = match item {
                Item::Select => self
                    .ask_slot()
                    .and_then(|slot| Some(Action::Select(slot, self.ask_path()?))),
                Item::Drop => self
                    .ask_slot()
                    .and_then(|slot| Some(Action::Drop(slot, self.ask_path()?))),
                Item::Clear => self.ask_slot().map(Action::Clear),
                Item::Submit => Some(Action::Submit),
                Item::Summary => Some(Action::Summary),
                Item::Quit => Some(Action::Quit),
            };
            if let Some(action) = action {
                return action;
            }
        }
    }

    fn print_selection(&self, state: &FormState) {
        let mut table = Table::new();
        table.set_header(vec!["Slot", "Name", "Size", "Type"]);
        for slot in state.slots.iter() {
            match &slot.file {
                Some(file) => table.add_row(vec![
                    slot.id.key().to_string(),
                    file.name.clone(),
                    self.file_size(file),
                    file.mime_type.clone(),
                ]),
                None => table.add_row(vec![slot.id.key(), "-", "-", "-"]),
            };
        }
        println!("{}", table);
    }

    fn print_payload(&self, form_data: &FormData) {
        let mut table = Table::new();
        table.set_header(vec!["Key", "Name", "Size"]);
        for (key, file) in form_data.iter() {
            table.add_row(vec![key.clone(), file.name.clone(), self.file_size(file)]);
        }
        println!("{}", table);
    }

    fn print_error(&self, error: &Error) {
        println!("{}", error.to_string().bold().red());
    }
}

impl PromptUI {
    fn ask_slot(&self) -> Option<SlotId> {
        inquire::Select::new("Which slot?", SlotId::ALL.to_vec())
            .with_vim_mode(true)
            .prompt_skippable()
            .ok()
            .flatten()
    }

    fn ask_path(&self) -> Option<PathBuf> {
        inquire::Text::new("Path of the file")
            .prompt_skippable()
            .ok()
            .flatten()
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }

    fn file_size(&self, file: &SelectedFile) -> String {
        humansize::format_size(file.size_bytes, humansize::DECIMAL)
    }
}
