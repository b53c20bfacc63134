use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("login", "Log in with your 4-digit PIN", "login [pin]", cmd_login),
        CommandEntry::new("logout", "Log out of the current account", "logout", cmd_logout),
    ]
}

fn cmd_login(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() > 1 {
        return Err(CommandError::InvalidArguments("Usage: login [pin]".into()));
    }
    if let Some(account) = context.session.current() {
        output::warning(format!(
            "Already logged in as {}. Use `logout` first.",
            account.name
        ));
        return Ok(());
    }
    let pin = context.arg_or_prompt(
        args.first().copied(),
        "Enter 4-digit PIN",
        true,
        "login <pin>",
    )?;
    let (name, balance) = {
        let account = context.session.login(&pin)?;
        (account.name.clone(), account.balance)
    };
    output::success(format!("Welcome, {name}"));
    output::info(format!("Current balance: {}", context.format_amount(balance)));
    Ok(())
}

fn cmd_logout(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.session.is_authenticated() {
        context.session.logout();
        output::info("Logged out.");
    } else {
        output::info("No user logged in.");
    }
    Ok(())
}
