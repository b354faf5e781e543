//! Interactive page session over a line-oriented input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plays the part of the browser event loop: each input line is a user
//! action (type into a field, press a button), and the page is re-rendered
//! from every transition the controller publishes while the action runs.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use wikichat_client::{Backend, Outcome, PageController, PageView};

use crate::render::{self, RenderOptions};

pub const HELP: &str = "\
commands:
  url <address>      type into the URL field
  crawl [<address>]  crawl the URL (optionally typing it first)
  query <question>   type into the question field
  ask [<question>]   ask the question (optionally typing it first)
  show               redraw the page
  help               show this list
  quit               leave the session";

/// One parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    SetUrl(String),
    Crawl(Option<String>),
    SetQuery(String),
    Ask(Option<String>),
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a line; blank lines yield `None`.
#[must_use]
pub fn parse_command(line: &str) -> Option<SessionCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let argument = (!rest.is_empty()).then(|| rest.to_owned());

    let command = match word.to_ascii_lowercase().as_str() {
        "url" => SessionCommand::SetUrl(rest.to_owned()),
        "crawl" => SessionCommand::Crawl(argument),
        "query" | "question" => SessionCommand::SetQuery(rest.to_owned()),
        "ask" | "chat" => SessionCommand::Ask(argument),
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(word.to_owned()),
    };
    Some(command)
}

/// Run the session until `quit` or end of input.
///
/// Returns the outcome of the last crawl or question that was not ignored,
/// or `None` if nothing ran.
///
/// # Errors
///
/// Returns an error if reading input or writing the page fails.
pub async fn run<B, R, W>(
    controller: &PageController<B>,
    input: R,
    out: &mut W,
    options: RenderOptions,
) -> io::Result<Option<Outcome>>
where
    B: Backend,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    render::write_page(out, &controller.view(), options)?;
    writeln!(out, "type `help` for commands")?;

    let mut last = None;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_command(&line) else {
            continue;
        };
        tracing::debug!(?command, "session command");
        match command {
            SessionCommand::SetUrl(url) => {
                if controller.set_url(&url) {
                    render::write_page(out, &controller.view(), options)?;
                } else {
                    writeln!(out, "the URL field is disabled while a crawl is running")?;
                }
            }
            SessionCommand::Crawl(url) => {
                if let Some(url) = url {
                    controller.set_url(&url);
                }
                let outcome = drive(controller, controller.crawl(), out, options).await?;
                if outcome == Outcome::Ignored {
                    writeln!(out, "Crawl Page is disabled: enter a URL first")?;
                } else {
                    last = Some(outcome);
                }
            }
            SessionCommand::SetQuery(query) => {
                if controller.set_chat_query(&query) {
                    render::write_page(out, &controller.view(), options)?;
                } else {
                    writeln!(out, "the question field is disabled until a page has been crawled")?;
                }
            }
            SessionCommand::Ask(query) => {
                if let Some(query) = query {
                    controller.set_chat_query(&query);
                }
                let outcome = drive(controller, controller.chat(), out, options).await?;
                if outcome == Outcome::Ignored {
                    writeln!(out, "Ask Question is disabled: type a question first")?;
                } else {
                    last = Some(outcome);
                }
            }
            SessionCommand::Show => render::write_page(out, &controller.view(), options)?,
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => break,
            SessionCommand::Unknown(word) => writeln!(out, "unknown command `{word}`; type `help`")?,
        }
    }
    Ok(last)
}

/// Await one page operation, showing progress for each published transition
/// and the full page once it settles.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub async fn drive<B, W, F>(
    controller: &PageController<B>,
    operation: F,
    out: &mut W,
    options: RenderOptions,
) -> io::Result<Outcome>
where
    B: Backend,
    W: Write,
    F: Future<Output = Outcome>,
{
    let mut updates = controller.subscribe();
    tokio::pin!(operation);
    loop {
        tokio::select! {
            outcome = &mut operation => {
                if outcome != Outcome::Ignored {
                    render::write_page(out, &controller.view(), options)?;
                }
                return Ok(outcome);
            }
            Ok(()) = updates.changed() => {
                let view = PageView::from(&*updates.borrow_and_update());
                render::write_status(out, &view)?;
            }
        }
    }
}
