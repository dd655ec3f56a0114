//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner once the caller is authenticated.
pub fn print_welcome_banner(username: &str, server: &str) {
    println!();
    println!("  {} {}", style("Chatbox").cyan().bold(), style("relay chat").dim());
    println!();
    println!("  {}  {}", style("User:").bold(), style(username).dim());
    println!("  {}  {}", style("Server:").bold(), style(server).dim());
    println!();
    println!(
        "  {}",
        style("Up/Down arrows recall earlier inputs; /logout or Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
