mod highlighter;
mod lexer;

use clap::Parser;
use miette::Result;
use reedline::{
    DefaultCompleter, DescriptionMode, EditCommand, Emacs, FileBackedHistory, IdeMenu, KeyCode,
    KeyModifiers, Keybindings, MenuBuilder, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, ReedlineEvent, ReedlineMenu, Signal,
    default_emacs_keybindings,
};
use std::borrow::Cow;
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;
use tlisp::{Engine, EngineOptions, render_error};
use tlisp_core::{builtins::Builtin, parser, reader};

const HISTORY_CAPACITY: usize = 1000;

/// TLisp - a tiny Lisp with S-expressions and Q-expressions
#[derive(Parser, Debug)]
#[command(name = "tlisp")]
#[command(about = "Evaluate TLisp expressions", long_about = None)]
struct Args {
    /// Print the syntax tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Print the value read from the syntax tree, before evaluation
    #[arg(long)]
    debug_read: bool,

    /// History file for the interactive prompt
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
enum CliError {
    #[error("failed to read from stdin")]
    #[diagnostic(code(tlisp::cli::stdin))]
    Stdin(#[source] std::io::Error),

    #[error("line editor failed")]
    #[diagnostic(code(tlisp::cli::line_editor))]
    LineEditor(#[source] std::io::Error),
}

/// `tlisp> ` on every line, `  ...> ` while a group is still open.
struct TLispPrompt;

impl Prompt for TLispPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("tlisp> ")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("  ...> ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({}reverse-search: {}) ", prefix, history_search.term))
    }
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("tlisp").join("history.txt"))
}

fn setup_reedline(history: Option<PathBuf>) -> Reedline {
    let commands: Vec<String> = Builtin::ALL
        .iter()
        .map(|builtin| builtin.name().to_string())
        .collect();

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&['-', '_']);
        completions.insert(commands);
        completions
    });

    // Use the interactive menu to select options from the completer
    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_max_completion_height(u16::MAX)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_min_description_width(0)
        .with_max_description_width(50)
        .with_description_offset(1)
        .with_correct_cursor_pos(false);

    let completion_menu = Box::new(ide_menu);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(highlighter::Highlighter))
        .with_validator(Box::new(lexer::BracketValidator))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(edit_mode);

    let Some(path) = history.or_else(default_history_path) else {
        return line_editor;
    };
    if let Some(dir) = path.parent() {
        if let Err(err) = std::fs::create_dir_all(dir) {
            tracing::warn!(path = %dir.display(), %err, "cannot create history directory");
            return line_editor;
        }
    }
    match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
        Ok(history) => line_editor.with_history(Box::new(history)),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "history disabled");
            line_editor
        }
    }
}

fn interpret_input(engine: &mut Engine, input: &str, source_name: &str, args: &Args) {
    let tree = match parser::parse_with_max_depth(input, engine.options().max_parse_depth) {
        Ok(tree) => tree,
        Err(e) => {
            render_error(&e.into(), source_name);
            return;
        }
    };

    if args.debug_parse {
        println!("=== Syntax Tree ===");
        print!("{}", tree);
        println!();
    }

    let value = reader::read(&tree);

    if args.debug_read {
        println!("=== Read Value ===");
        println!("{}", value);
        println!();
    }

    println!("{}", engine.eval_value(value));
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use TLISP_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("TLISP_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut engine = Engine::new(EngineOptions::default());

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        interpret_input(&mut engine, expr, "<argument>", &args);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        let mut line_editor = setup_reedline(args.history.clone());
        let prompt = TLispPrompt;

        println!("TLisp Version 0.01");
        println!("Press Ctrl+c to Exit\n");

        loop {
            let sig = line_editor.read_line(&prompt).map_err(CliError::LineEditor)?;

            match sig {
                Signal::Success(buffer) => {
                    interpret_input(&mut engine, buffer.as_ref(), "<repl>", &args);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let input = BufReader::new(stdin.lock());
        let mut program = lexer::ProgramBuffer::default();

        for line in input.lines() {
            let line = line.map_err(CliError::Stdin)?;
            if let Some(source) = program.push_line(&line) {
                interpret_input(&mut engine, &source, "<stdin>", &args);
            }
        }
        if let Some(source) = program.finish() {
            interpret_input(&mut engine, &source, "<stdin>", &args);
        }
    }

    Ok(())
}
