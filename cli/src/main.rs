mod render;

use std::io::{self, Read as _};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use gemini::{Assistant, GeminiClient, GeminiConfig, GeminiError};
use tokio::io::{AsyncBufReadExt, BufReader};
use transcript::sandbox::json::PARSE_ERROR_HEADING;
use transcript::sandbox::{JsonPreview, JsonPreviewError};
use transcript::{Conversation, RenderedMessage, SendRejected};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("io failed: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Gemini(#[from] GeminiError),
    #[error("{}: {}", PARSE_ERROR_HEADING, .0.detail)]
    InvalidJson(JsonPreviewError),
    #[error("json encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "jack", about = "Jack Brito GPT terminal client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive chat. Lines starting with `/imagem ` generate an image.
    Chat {
        #[arg(long, env = "GEMINI_CHAT_MODEL")]
        chat_model: Option<String>,
        #[arg(long, env = "GEMINI_IMAGE_MODEL")]
        image_model: Option<String>,
        #[arg(long, env = "GEMINI_EDIT_MODEL")]
        edit_model: Option<String>,
    },
    /// Split a reply into segments and list its render units.
    Render {
        /// Reply text file, or `-` for stdin.
        input: PathBuf,
        #[arg(long)]
        json: bool,
        /// Write `web.html` / `js.html` preview documents here.
        #[arg(long)]
        preview_dir: Option<PathBuf>,
    },
    /// Show a JSON document as the tree view, or pretty text with `--raw`.
    Json {
        input: PathBuf,
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Chat { chat_model, image_model, edit_model } => {
            let mut config = GeminiConfig::from_env()?;
            if let Some(model) = chat_model {
                config.chat_model = model;
            }
            if let Some(model) = image_model {
                config.image_model = model;
            }
            if let Some(model) = edit_model {
                config.edit_model = model;
            }
            run_chat(config).await
        }
        Command::Render { input, json, preview_dir } => run_render(&input, json, preview_dir.as_deref()),
        Command::Json { input, raw } => run_json(&input, raw),
    }
}

// =============================================================================
// chat
// =============================================================================

async fn run_chat(config: GeminiConfig) -> Result<(), CliError> {
    tracing::info!(chat_model = %config.chat_model, "starting chat");
    let assistant = Assistant::new(GeminiClient::new(config)?);
    let mut conversation = Conversation::new();
    let mut last_image: Option<String> = None;

    if let Some(greeting) = conversation.messages().first() {
        print_reply(&conversation, greeting.id.as_str());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let text = match conversation.begin_send(&line) {
            Ok(text) => text,
            Err(SendRejected::Empty) => continue,
            Err(rejected) => {
                eprintln!("{rejected}");
                continue;
            }
        };

        let exchange = assistant.send(&text, last_image.as_deref()).await;
        if exchange.last_image.is_some() {
            last_image = exchange.last_image;
        }
        let id = conversation.append_ai(&exchange.response, &text).id.clone();
        print_reply(&conversation, &id);
    }
    Ok(())
}

fn print_reply(conversation: &Conversation, id: &str) {
    if let Some(message) = conversation.messages().iter().find(|m| m.id == id) {
        let rendered = RenderedMessage::from_message(message);
        println!("{}\n", render::format_reply(message, &rendered));
    }
}

// =============================================================================
// render / json
// =============================================================================

fn read_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn run_render(input: &Path, json: bool, preview_dir: Option<&Path>) -> Result<(), CliError> {
    let text = read_input(input)?;
    let message = transcript::Message::text("cli", transcript::Sender::Ai, text);
    let rendered = RenderedMessage::from_message(&message);

    if json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        println!("{}", render::format_body(&rendered));
        for line in render::describe_units(&rendered.units) {
            println!("# {line}");
        }
    }

    if let Some(dir) = preview_dir {
        std::fs::create_dir_all(dir)?;
        if let Some(web) = &rendered.units.web {
            std::fs::write(dir.join("web.html"), web.preview_document())?;
        }
        if let Some(js) = &rendered.units.js {
            std::fs::write(dir.join("js.html"), js.preview_document())?;
        }
        tracing::info!(dir = %dir.display(), "wrote preview documents");
    }
    Ok(())
}

fn run_json(input: &Path, raw: bool) -> Result<(), CliError> {
    let text = read_input(input)?;
    let preview = JsonPreview::parse(text.trim()).map_err(CliError::InvalidJson)?;
    if raw {
        println!("{}", preview.raw());
    } else {
        println!("{}", render::json_tree(&preview));
    }
    Ok(())
}
