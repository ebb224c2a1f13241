//! Customer-facing menu flows.

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use desk::{Customer, Desk};

use super::{prompt::Console, terminal::Colorize, yes_no};

/// Customer submenu loop.
///
/// Returning to the main menu is the only action anywhere that persists the
/// queue; Exit and the other submenus never save.
#[tracing::instrument(skip_all)]
pub(crate) fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
    data_file: &Path,
) -> io::Result<()> {
    loop {
        console.line("")?;
        console.line("======================")?;
        console.line("    Customer Menu")?;
        console.line("1) Add Complaint")?;
        console.line("2) Delete Complaint")?;
        console.line("3) View Details")?;
        console.line("4) View History")?;
        console.line("0) Back")?;
        let Some(option) = console.prompt_number("Option: ")? else {
            return Ok(());
        };
        match option {
            1 => add_complaint(console, desk)?,
            2 => delete_complaint(console, desk)?,
            3 => view_details(console, desk)?,
            4 => view_history(console, desk)?,
            0 => {
                save(console, desk, data_file)?;
                return Ok(());
            }
            _ => console.line("Invalid option.")?,
        }
    }
}

fn add_complaint<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
) -> io::Result<()> {
    let Some(name) = console.prompt("Enter your name: ")? else {
        return Ok(());
    };
    let Some(phone) = console.prompt("Enter your phone number: ")? else {
        return Ok(());
    };
    let Some(email) = console.prompt("Enter your email: ")? else {
        return Ok(());
    };
    let Some(content) = console.prompt("Enter complaint content: ")? else {
        return Ok(());
    };

    match desk.submit(content, Customer::new(name, phone, email)) {
        Ok(id) => {
            console.line(&format!("Complaint ID: {id}"))?;
            console.line(&"Complaint received. We will respond soon.".success())
        }
        Err(error) => console.line(&error.to_string().warning()),
    }
}

fn delete_complaint<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
) -> io::Result<()> {
    let Some(id) = console.prompt_number("Enter complaint ID to delete: ")? else {
        return Ok(());
    };
    if desk.delete(id) {
        console.line(&format!("Complaint ID {id} deleted successfully!").success())
    } else {
        console.line(&format!("Complaint ID {id} not found!").warning())
    }
}

fn view_details<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &Desk,
) -> io::Result<()> {
    let Some(id) = console.prompt_number("Enter complaint ID: ")? else {
        return Ok(());
    };
    let Some(complaint) = desk.complaint(id) else {
        return console.line(&format!("Complaint ID {id} not found.").warning());
    };

    console.frame()?;
    console.line("Complaint Details")?;
    console.line(&format!("ID: {}", complaint.id))?;
    console.line(&format!("Customer Name: {}", complaint.customer.name))?;
    console.line(&format!("Customer Email: {}", complaint.customer.email))?;
    console.line(&format!("Content: {}", complaint.content))?;
    console.line(&format!("Replied: {}", yes_no(complaint.replied)))?;
    if complaint.replied {
        console.line(&format!("Reply Details: {}", complaint.reply))?;
    }
    console.line(&format!("Urgent: {}", yes_no(complaint.urgent)))?;
    console.frame()
}

fn view_history<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &Desk,
) -> io::Result<()> {
    let Some(email) = console.prompt("Enter email to search complaints: ")? else {
        return Ok(());
    };
    if desk.queue().is_empty() {
        return console.line("No complaints in queue.");
    }

    let matches = desk.history(&email);
    if matches.is_empty() {
        return console.line(&format!("No complaints found for email: {email}"));
    }
    for complaint in matches {
        console.frame()?;
        console.line(&format!("Complaint ID: {}", complaint.id))?;
        console.line(&format!("Customer Name: {}", complaint.customer.name))?;
        console.line(&format!("Content: {}", complaint.content))?;
        console.line(&format!("Replied: {}", yes_no(complaint.replied)))?;
        if complaint.replied {
            console.line(&format!("Reply Details: {}", complaint.reply))?;
        }
        console.frame()?;
    }
    Ok(())
}

fn save<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &Desk,
    data_file: &Path,
) -> io::Result<()> {
    match desk.save(data_file) {
        Ok(()) => console.line(&"Complaint data saved successfully!".success()),
        Err(error) => {
            // A failed save is reported and abandoned; in-memory state is
            // unaffected and the operator returns to the menu.
            tracing::warn!(%error, "failed to save complaint data");
            console.line(&format!("Error: unable to save complaint data ({error})").warning())
        }
    }
}
