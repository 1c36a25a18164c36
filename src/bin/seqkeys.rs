// Seqkeys Terminal CLI
// Matches key-chord sequences against live terminal key presses

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement};
use parking_lot::Mutex;

use seqkeys_core::input::terminal::raw_event_from_crossterm;
use seqkeys_core::{
    conflicts_with, parse_sequence, sequence_to_canonical_string, sequence_to_display_string,
    CaptureOutcome, ChordCapture, ChordListener, Config, EventHub, HotkeyManager, KeyChord,
    Platform, Trigger,
};

/// Key-chord sequence hotkeys for the terminal
#[derive(Parser, Debug)]
#[command(name = "seqkeys")]
#[command(version)]
#[command(about = "Key-chord sequence hotkeys for the terminal", long_about = None)]
struct Args {
    /// TOML hotkey file (default: <config dir>/seqkeys/hotkeys.toml)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Validate config, report conflicting bindings and exit
    #[arg(long)]
    check_config: bool,

    /// List configured bindings and exit
    #[arg(long)]
    list: bool,

    /// Record a sequence from the keyboard and bind it to COMMAND
    #[arg(long, value_name = "COMMAND", conflicts_with_all = ["unbind", "list", "check_config"])]
    bind: Option<String>,

    /// Remove the binding of COMMAND to the sequence given with --chords
    #[arg(long, value_name = "COMMAND", requires = "chords")]
    unbind: Option<String>,

    /// Sequence for --unbind, e.g. "C-KeyW C-KeyQ"
    #[arg(long, value_name = "SEQ")]
    chords: Option<String>,
}

/// Raw terminal mode for the lifetime of the guard, with key release
/// reporting where the terminal supports it
struct RawModeGuard {
    enhanced: bool,
}

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw terminal mode")?;
        let mut guard = Self { enhanced: false };
        if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                )
            )?;
            guard.enhanced = true;
        } else {
            log::info!("Terminal does not report key releases; modifier-only chords are unavailable");
        }
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.enhanced {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
    }
}

/// Raw mode needs explicit carriage returns
fn emit(line: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}\r\n", line)?;
    stdout.flush()
}

/// Ctrl+C always exits, bound or not
fn is_interrupt(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

/// Main application state
struct Application {
    config: Config,
    config_path: PathBuf,
    args: Args,
}

impl Application {
    fn new(args: Args) -> Result<Self> {
        let config_path = match &args.config {
            Some(path) => path.clone(),
            None => Config::default_path()
                .context("could not determine the config directory; pass --config")?,
        };
        let config = Config::load_or_empty(&config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?;

        Ok(Self {
            config,
            config_path,
            args,
        })
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        let conflicts = self.config.conflicts();
        for conflict in &conflicts {
            log::warn!("{}", conflict);
        }
        println!(
            "Configuration is valid: {} binding(s), {} conflict(s)",
            self.config.hotkeys().len(),
            conflicts.len()
        );
        Ok(())
    }

    fn list(&self) {
        let platform = self.config.platform();
        if self.config.hotkeys().is_empty() {
            println!("No bindings in {}", self.config_path.display());
        }
        for entry in self.config.hotkeys() {
            println!(
                "{}: {} ({})",
                entry.command,
                sequence_to_display_string(&entry.chords, platform),
                sequence_to_canonical_string(&entry.chords)
            );
        }
    }

    fn save(&self) -> Result<()> {
        self.config
            .save(&self.config_path)
            .with_context(|| format!("failed to save {}", self.config_path.display()))
    }

    fn bind(&mut self, command: &str) -> Result<()> {
        let platform = self.config.platform();
        println!(
            "Recording a sequence for '{}'. Enter finishes, Escape cancels.",
            command
        );
        let Some(chords) = capture_sequence(platform)? else {
            println!("Cancelled");
            return Ok(());
        };

        for existing in conflicts_with(self.config.hotkeys(), &chords) {
            log::warn!(
                "New sequence overlaps '{}' [{}]",
                existing.command,
                sequence_to_canonical_string(&existing.chords)
            );
        }

        let display = sequence_to_display_string(&chords, platform);
        if !self.config.add_hotkey(command, chords) {
            println!("Nothing bound");
            return Ok(());
        }
        self.save()?;
        println!("Bound '{}' to {}", command, display);
        Ok(())
    }

    fn unbind(&mut self, command: &str, chords_text: &str) -> Result<()> {
        let chords = parse_sequence(chords_text)
            .with_context(|| format!("invalid sequence '{}'", chords_text))?;
        if self.config.delete_hotkey(command, &chords) == 0 {
            bail!("'{}' is not bound to [{}]", command, chords_text.trim());
        }
        self.save()?;
        println!("Unbound '{}' from [{}]", command, chords_text.trim());
        Ok(())
    }

    /// Run the main event loop
    fn run(&self) -> Result<()> {
        let platform = self.config.platform();
        let fired: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        let mut manager = HotkeyManager::new(move |id: &str| sink.lock().push(id.to_string()));
        self.config.apply_to(&mut manager);
        log::info!(
            "Loaded {} binding(s) from {}",
            manager.len(),
            self.config_path.display()
        );

        let mut hub = EventHub::new();
        let mut listener = ChordListener::new(&mut hub, manager);
        println!("Listening for sequences. Ctrl+C exits.");

        let result = RawModeGuard::enable()
            .and_then(|_raw| event_loop(&mut hub, &listener, &fired, platform));
        listener.destruct(&mut hub);
        result
    }
}

fn event_loop<T: Trigger + 'static>(
    hub: &mut EventHub,
    listener: &ChordListener<HotkeyManager<T>>,
    fired: &Mutex<Vec<String>>,
    platform: Platform,
) -> Result<()> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if is_interrupt(&key) {
            return Ok(());
        }
        let Some(raw) = raw_event_from_crossterm(&key) else {
            log::trace!("Ignoring unmapped terminal key {:?}", key.code);
            continue;
        };
        let is_keydown = raw.action.is_keydown();
        let code = raw.code.clone();

        let event = hub.dispatch(raw);

        let ids: Vec<String> = fired.lock().drain(..).collect();
        for id in &ids {
            emit(&format!("fired: {}", id))?;
        }
        if !ids.is_empty() || !is_keydown {
            continue;
        }
        if event.is_default_prevented() {
            let pending =
                listener.with_consumer(|m| sequence_to_display_string(m.pending(), platform));
            emit(&format!("pending: {}", pending))?;
        } else {
            emit(&format!("unbound: {}", code))?;
        }
    }
}

/// Record chords until Enter (Some) or Escape / Ctrl+C (None)
fn capture_sequence(platform: Platform) -> Result<Option<Vec<KeyChord>>> {
    let _raw = RawModeGuard::enable()?;
    let mut capture = ChordCapture::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if is_interrupt(&key) {
            return Ok(None);
        }
        let Some(mut raw) = raw_event_from_crossterm(&key) else {
            continue;
        };
        if !raw.action.is_keydown() {
            continue;
        }
        match capture.handle_keydown(&mut raw) {
            CaptureOutcome::Completed(chords) => return Ok(Some(chords)),
            CaptureOutcome::Cancelled => return Ok(None),
            CaptureOutcome::Updated => emit(&format!("  {}", capture.display(platform)))?,
            CaptureOutcome::Ignored => {}
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut app = Application::new(args)?;

    if app.args.check_config {
        return app.validate();
    }
    if app.args.list {
        app.list();
        return Ok(());
    }
    if let Some(command) = app.args.bind.clone() {
        return app.bind(&command);
    }
    if let Some(command) = app.args.unbind.clone() {
        let chords = app.args.chords.clone().unwrap_or_default();
        return app.unbind(&command, &chords);
    }

    app.run()
}
