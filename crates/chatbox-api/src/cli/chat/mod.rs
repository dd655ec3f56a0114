//! Interactive terminal chat client.
//!
//! Signs the user in (reusing an existing session cookie when the server
//! still recognizes it), then runs the conversation loop: read a line,
//! submit it through the [`ConversationController`], print the reply.

mod banner;
mod input;

use std::time::Duration;

use console::style;
use dialoguer::{Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};

use chatbox_core::conversation::{ConversationController, SubmitOutcome};
use chatbox_types::chat::MessageRole;

use super::client::ApiClient;
use banner::print_welcome_banner;
use input::InputEvent;

/// Run the interactive chat loop against a running server.
pub async fn run_chat_loop(server: &str) -> anyhow::Result<()> {
    let client = ApiClient::new(server)?;

    let username = match client.me().await {
        Ok(Some(username)) => username,
        _ => sign_in(&client).await?,
    };

    print_welcome_banner(&username, server);

    // The controller owns its own clone; the original stays around for
    // /logout. Clones share the cookie store.
    let mut chat = ConversationController::new(client.clone());
    let prompt = format!("  {} ", style("You >").green().bold());

    loop {
        let event = input::read_line(&prompt, &mut chat)?;
        let text = match event {
            InputEvent::Exit => {
                println!("  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Submitted(text) => text,
        };

        if text.trim().is_empty() {
            continue;
        }
        if text.trim() == "/logout" {
            client.logout().await?;
            println!("  {}", style("Logged out.").dim());
            break;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message("Bot is typing...");
        spinner.enable_steady_tick(Duration::from_millis(80));

        let outcome = chat.submit(&text).await;
        spinner.finish_and_clear();

        if outcome == SubmitOutcome::Ignored {
            continue;
        }
        // Both a real reply and the failure placeholder end up as the last
        // assistant turn.
        if let Some(reply) = chat
            .conversation()
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::Assistant)
        {
            println!("  {} {}", style("Bot >").cyan().bold(), reply.content);
            println!();
        }
    }

    Ok(())
}

/// Prompt for login or registration until one succeeds.
async fn sign_in(client: &ApiClient) -> anyhow::Result<String> {
    println!();
    println!("  {}", style("Sign in to Chatbox").bold());

    loop {
        let choice = Select::new()
            .with_prompt("  Login or register")
            .items(&["Login", "Register"])
            .default(0)
            .interact()?;

        let username: String = Input::new().with_prompt("  Username").interact_text()?;
        let password = Password::new().with_prompt("  Password").interact()?;

        let result = if choice == 0 {
            client.login(&username, &password).await
        } else {
            client.register(&username, &password).await
        };

        match result {
            Ok(username) => return Ok(username),
            Err(e) => {
                println!("  {} {e}", style("!").red().bold());
            }
        }
    }
}
