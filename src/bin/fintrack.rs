//! Terminal front-end for the FinTrack client
//!
//! One subcommand per screen of the original mobile app: login, dashboard,
//! expense list, expense detail, add, delete, profile. Pure consumer of the
//! library; all state lives on the server and in the persisted session.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fintrack_rust::analytics::{self, ExpenseSummary, RECENT_LIMIT};
use fintrack_rust::auth::{Credentials, User};
use fintrack_rust::error::Error;
use fintrack_rust::expenses::{Expense, NewExpense};
use fintrack_rust::FinTrack;

/// Base URL used when FINTRACK_API_URL is not set
const DEFAULT_API_URL: &str = "https://67ac71475853dfff53dab929.mockapi.io/api/v1";

#[derive(Parser)]
#[command(name = "fintrack", version, about = "Personal finance tracker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and persist the session
    Login {
        /// Login name
        username: String,
        /// Password
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Totals, category breakdown and recent activity
    Dashboard,
    /// List all expenses
    List,
    /// Show one expense
    Show {
        /// Expense id
        id: String,
    },
    /// Add a new expense
    Add {
        /// Short display name
        #[arg(long)]
        name: String,
        /// Amount
        #[arg(long)]
        amount: f64,
        /// Free-form description
        #[arg(long)]
        description: String,
        /// Spending category
        #[arg(long)]
        category: Option<String>,
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense id
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_url =
        std::env::var("FINTRACK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let fintrack = FinTrack::new(&base_url);

    match run(&fintrack, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(fintrack: &FinTrack, command: Command) -> Result<(), Error> {
    match command {
        Command::Login { username, password } => {
            let credentials = Credentials { username, password };
            let user = fintrack.auth().sign_in_with_credentials(&credentials).await?;
            println!("signed in as {} (user {})", user.username, user.id);
            Ok(())
        }
        Command::Logout => {
            fintrack.auth().sign_out()?;
            println!("signed out");
            Ok(())
        }
        Command::Whoami => {
            let user = require_session(fintrack)?;
            print_profile(&user);
            Ok(())
        }
        Command::Dashboard => {
            require_session(fintrack)?;
            let expenses = fintrack.expenses().list().await?;
            let summary = analytics::summarize(&expenses);
            print_dashboard(&expenses, &summary);
            Ok(())
        }
        Command::List => {
            require_session(fintrack)?;
            let expenses = fintrack.expenses().list().await?;
            if expenses.is_empty() {
                println!("No expenses found");
            }
            for expense in &expenses {
                println!(
                    "{:>6}  {:<24} {:>10}  {}",
                    expense.id,
                    expense.name,
                    format_amount(expense.amount),
                    expense.category.as_deref().unwrap_or("n/a"),
                );
            }
            Ok(())
        }
        Command::Show { id } => {
            require_session(fintrack)?;
            let expense = fintrack.expenses().get(&id).await?;
            print_detail(&expense);
            Ok(())
        }
        Command::Add {
            name,
            amount,
            description,
            category,
            date,
        } => {
            require_session(fintrack)?;
            let date = date.or_else(|| Some(chrono::Utc::now().to_rfc3339()));
            let new_expense = NewExpense {
                name,
                amount,
                description,
                category,
                date,
            };
            let created = fintrack.expenses().create(&new_expense).await?;
            println!("added expense {}", created.id);
            Ok(())
        }
        Command::Delete { id } => {
            require_session(fintrack)?;
            fintrack.expenses().delete(&id).await?;
            println!("deleted expense {}", id);
            Ok(())
        }
    }
}

/// Every screen past login requires a signed-in user
fn require_session(fintrack: &FinTrack) -> Result<User, Error> {
    match fintrack.auth().restore()? {
        Some(user) => Ok(user),
        None => Err(Error::validation(
            "not signed in; run `fintrack login <username> <password>` first",
        )),
    }
}

fn print_profile(user: &User) {
    println!("Username:   {}", user.username);
    println!("User ID:    {}", user.id);
    println!("Created At: {}", user.created_at);
}

fn print_detail(expense: &Expense) {
    println!("{}", expense.name);
    println!("  {}", expense.description);
    println!("  Category: {}", expense.category.as_deref().unwrap_or("n/a"));
    println!("  Date:     {}", expense.date.as_deref().unwrap_or("n/a"));
    println!("  Amount:   {}", format_amount(expense.amount));
}

fn print_dashboard(expenses: &[Expense], summary: &ExpenseSummary) {
    if expenses.is_empty() {
        println!("No expenses yet");
        return;
    }

    println!("Total Expenses  {}", format_amount(summary.total));
    println!(
        "This Month      {} ({} expenses)",
        format_amount(summary.month_total),
        summary.month_count
    );

    let series = summary.category_series();
    if !series.is_empty() {
        println!();
        println!("By category:");
        for (label, total) in series {
            println!("  {:<16} {:>10}", label, format_amount(total));
        }
    }

    println!();
    println!("Recent:");
    for expense in analytics::trailing(expenses, RECENT_LIMIT).iter().rev() {
        println!(
            "  {:<24} {:>10}",
            expense.name,
            format_amount(expense.amount)
        );
    }

    println!();
    println!("Trend:");
    for point in &summary.trend {
        println!("  {:<8} {:>10}", point.label, format_amount(point.value));
    }
}

fn format_amount(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}
