//! Interactive terminal front end.
//!
//! Prints the table, reads the form with `dialoguer`, confirms add/delete
//! with a yes/no prompt, and opens visited bookmarks in the default browser.

use chrono::Local;
use dialoguer::{Confirm, Input, Select};

use super::confirm::{Confirmation, Decision, Prompt};
use super::flow::{BookmarkFlow, Outcome};
use super::table::render_table;
use crate::app::App;
use crate::managers::bookmark_manager::BookmarkManagerTrait;

/// Yes/no prompt on the terminal. Esc or `q` counts as dismissed.
pub struct DialogConfirmation;

impl Confirmation for DialogConfirmation {
    fn request_confirmation(&mut self, prompt: &Prompt) -> Decision {
        let answer = Confirm::new()
            .with_prompt(format!("{} {} ({})", prompt.title, prompt.text, prompt.confirm_label))
            .default(false)
            .interact_opt();
        match answer {
            Ok(Some(yes)) => Decision::from(yes),
            Ok(None) => Decision::Dismissed,
            Err(e) => {
                tracing::warn!(error = %e, "Confirmation prompt failed");
                Decision::Dismissed
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Action {
    Add,
    Visit,
    Delete,
    Quit,
}

const ACTIONS: [(&str, Action); 4] = [
    ("Add a bookmark", Action::Add),
    ("Visit a bookmark", Action::Visit),
    ("Delete a bookmark", Action::Delete),
    ("Quit", Action::Quit),
];

fn report(outcome: Outcome) {
    match outcome {
        Outcome::Done(message) => println!("  ✓ {}", message),
        Outcome::Cancelled => {}
        Outcome::Failed(message) => println!("  ✗ {}", message),
    }
}

/// Lets the user pick a bookmark; `None` if the list is empty or the pick was cancelled.
fn pick_bookmark(app: &App, prompt: &str) -> Result<Option<usize>, dialoguer::Error> {
    let list = app.bookmarks.list_bookmarks();
    if list.is_empty() {
        println!("  No bookmarks yet.");
        return Ok(None);
    }
    let items: Vec<String> = list
        .iter()
        .enumerate()
        .map(|(i, b)| format!("{}. {} ({})", i + 1, b.name, b.url))
        .collect();
    Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()
}

/// Runs the menu loop until the user quits.
pub fn run(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    let labels: Vec<&str> = ACTIONS.iter().map(|(label, _)| *label).collect();

    loop {
        println!();
        print!("{}", render_table(app.bookmarks.list_bookmarks()));
        println!();

        let choice = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact_opt()?;
        let action = match choice {
            Some(i) => ACTIONS[i].1,
            None => Action::Quit,
        };

        match action {
            Action::Add => {
                let name: String = Input::new()
                    .with_prompt("Site name")
                    .allow_empty(true)
                    .interact_text()?;
                let url: String = Input::new()
                    .with_prompt("Site URL")
                    .allow_empty(true)
                    .interact_text()?;
                let now = Local::now().naive_local();
                let mut flow = BookmarkFlow::new(&mut app.bookmarks, DialogConfirmation);
                report(flow.submit(&name, &url, now));
            }
            Action::Visit => {
                if let Some(index) = pick_bookmark(app, "Visit which bookmark?")? {
                    let now = Local::now().naive_local();
                    let mut flow = BookmarkFlow::new(&mut app.bookmarks, DialogConfirmation);
                    match flow.visit(index, now) {
                        Ok(visit) => {
                            println!("  Opening {}", visit.open_url);
                            if let Err(e) = open::that(&visit.open_url) {
                                tracing::warn!(url = %visit.open_url, error = %e, "Failed to open browser");
                            }
                        }
                        Err(message) => println!("  ✗ {}", message),
                    }
                }
            }
            Action::Delete => {
                if let Some(index) = pick_bookmark(app, "Delete which bookmark?")? {
                    let mut flow = BookmarkFlow::new(&mut app.bookmarks, DialogConfirmation);
                    report(flow.remove(index));
                }
            }
            Action::Quit => return Ok(()),
        }
    }
}
