use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::MiniStatement;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("balance", "Show the current balance", "balance", cmd_balance),
        CommandEntry::new("deposit", "Deposit a whole amount", "deposit <amount>", cmd_deposit),
        CommandEntry::new("withdraw", "Withdraw a whole amount", "withdraw <amount>", cmd_withdraw),
        CommandEntry::new(
            "statement",
            "Show the last five transactions",
            "statement",
            cmd_statement,
        ),
        CommandEntry::new(
            "change-pin",
            "Change the PIN of the current account",
            "change-pin [old new confirm]",
            cmd_change_pin,
        ),
    ]
}

fn cmd_balance(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let balance = context.session.balance()?;
    output::info(format!("Your balance is {}", context.format_amount(balance)));
    Ok(())
}

fn cmd_deposit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let before = context.session.balance()?;
    let text = amount_arg(context, args, "deposit <amount>")?;
    let after = context.session.deposit(&text)?;
    output::success(format!(
        "{} deposited successfully.",
        context.format_amount(after - before)
    ));
    output::info(format!("Balance: {}", context.format_amount(after)));
    Ok(())
}

fn cmd_withdraw(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let before = context.session.balance()?;
    let text = amount_arg(context, args, "withdraw <amount>")?;
    let after = context.session.withdraw(&text)?;
    output::success(format!(
        "{} withdrawn successfully.",
        context.format_amount(before - after)
    ));
    output::info(format!("Balance: {}", context.format_amount(after)));
    Ok(())
}

fn cmd_statement(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.session.recent_history()? {
        MiniStatement::Empty => output::info("No transactions yet."),
        MiniStatement::Entries(entries) => {
            output::section("Mini Statement");
            for entry in entries {
                output::info(format!("  {entry}"));
            }
        }
    }
    Ok(())
}

fn cmd_change_pin(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.session.balance()?;
    let usage = "change-pin <old> <new> <confirm>";
    let (old, new, confirm) = match args {
        [old, new, confirm] => (old.to_string(), new.to_string(), confirm.to_string()),
        [] => (
            context.arg_or_prompt(None, "Current PIN", true, usage)?,
            context.arg_or_prompt(None, "New PIN", true, usage)?,
            context.arg_or_prompt(None, "Confirm new PIN", true, usage)?,
        ),
        _ => return Err(CommandError::InvalidArguments(format!("Usage: {usage}"))),
    };
    context.session.change_pin(&old, &new, &confirm)?;
    output::success("PIN changed successfully.");
    Ok(())
}

fn amount_arg(context: &ShellContext, args: &[&str], usage: &str) -> Result<String, CommandError> {
    if args.len() > 1 {
        return Err(CommandError::InvalidArguments(format!("Usage: {usage}")));
    }
    context.arg_or_prompt(args.first().copied(), "Amount", false, usage)
}
