//! Employee-facing menu flows.

use std::io::{self, BufRead, Write};

use desk::Desk;

use super::{prompt::Console, terminal::Colorize, yes_no};

/// Employee submenu loop.
#[tracing::instrument(skip_all)]
pub(crate) fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
) -> io::Result<()> {
    loop {
        console.line("")?;
        console.line("======================")?;
        console.line("    Employee Menu")?;
        console.line("1) View Urgent")?;
        console.line("2) View Unreplied")?;
        console.line("3) Reply")?;
        console.line("4) Add Summary")?;
        console.line("5) View Summaries")?;
        console.line("6) Search Summaries")?;
        console.line("0) Back")?;
        let Some(option) = console.prompt_number("Option: ")? else {
            return Ok(());
        };
        match option {
            1 => view_urgent(console, desk)?,
            2 => view_unreplied(console, desk, true)?,
            3 => reply_to_complaint(console, desk)?,
            4 => add_summary(console, desk)?,
            5 => view_summaries(console, desk)?,
            6 => search_summaries(console, desk)?,
            0 => return Ok(()),
            _ => console.line("Invalid option.")?,
        }
    }
}

/// Lists escalated complaints in ascending priority order.
///
/// Also reachable from the admin complaint sub-menu.
pub(crate) fn view_urgent<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &Desk,
) -> io::Result<()> {
    if desk.urgent().is_empty() {
        return console.line("No urgent complaints.");
    }
    console.line("Urgent Complaints:")?;
    for entry in desk.urgent().iter() {
        console.rule()?;
        console.line(&format!("Order: {}", entry.priority))?;
        console.line(&format!("ID: {}", entry.complaint.id))?;
        console.line(&format!("Content: {}", entry.complaint.content))?;
        console.line(&format!("Replied: {}", yes_no(entry.complaint.replied)))?;
        console.line(&format!("Customer Name: {}", entry.complaint.customer.name))?;
        console.line(&format!("Customer Email: {}", entry.complaint.customer.email))?;
    }
    console.rule()
}

/// Lists unreplied complaints.
///
/// In employee mode this continues into a reply sub-flow; the admin view is
/// read-only.
pub(crate) fn view_unreplied<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
    employee_mode: bool,
) -> io::Result<()> {
    if desk.queue().is_empty() {
        return console.line("No complaints found.");
    }

    console.frame()?;
    console.line("Unreplied Complaints")?;
    let mut count = 0;
    for complaint in desk.unreplied() {
        count += 1;
        console.line(&format!("ID: {}", complaint.id))?;
        console.line(&format!("Customer Name: {}", complaint.customer.name))?;
        console.line(&format!("Content: {}", complaint.content))?;
        console.line(&format!("Urgent: {}", yes_no(complaint.urgent)))?;
        console.rule()?;
    }
    console.line(&format!("Total unreplied: {count}"))?;
    console.frame()?;

    if employee_mode {
        loop {
            console.line("1) Reply to Complaint")?;
            console.line("2) Back")?;
            let Some(option) = console.prompt_number("Option: ")? else {
                return Ok(());
            };
            match option {
                1 => reply_to_complaint(console, desk)?,
                2 => return Ok(()),
                _ => {}
            }
        }
    }
    Ok(())
}

fn reply_to_complaint<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
) -> io::Result<()> {
    let Some(id) = console.prompt_number("Enter complaint ID to reply: ")? else {
        return Ok(());
    };
    if desk.complaint(id).is_none() {
        return console.line(&format!("Complaint ID {id} not found.").warning());
    }
    let Some(text) = console.prompt("Enter reply details: ")? else {
        return Ok(());
    };
    desk.reply(id, text);
    console.line(&"Reply added successfully!".success())
}

fn add_summary<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
) -> io::Result<()> {
    let Some(id) = console.prompt_number("Enter complaint ID for summary: ")? else {
        return Ok(());
    };
    if desk.complaint(id).is_none() {
        return console.line(&format!("Complaint ID {id} not found.").warning());
    }
    let Some(text) = console.prompt("Enter problem summary: ")? else {
        return Ok(());
    };
    desk.add_summary(id, text);
    console.line(&"Summary added successfully!".success())
}

fn view_summaries<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &Desk,
) -> io::Result<()> {
    if desk.summaries().is_empty() {
        return console.line("No summaries found.");
    }
    console.frame()?;
    console.line("Complaints with Summaries")?;
    for complaint in desk.summaries().iter() {
        console.line(&format!("ID: {}", complaint.id))?;
        console.line(&format!("Content: {}", complaint.content))?;
        console.line(&format!("Summary: {}", complaint.summary))?;
        console.rule()?;
    }
    console.frame()
}

fn search_summaries<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &Desk,
) -> io::Result<()> {
    let Some(needle) = console.prompt("Enter complaint content to search: ")? else {
        return Ok(());
    };
    if desk.summaries().is_empty() {
        return console.line("No summaries found.");
    }
    console.frame()?;
    console.line("Search Results")?;
    for complaint in desk.search_summaries(&needle) {
        console.line(&format!("ID: {}", complaint.id))?;
        console.line(&format!("Content: {}", complaint.content))?;
        console.line(&format!("Summary: {}", complaint.summary))?;
        console.rule()?;
    }
    console.frame()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use desk::Customer;

    use super::*;

    fn run_script(desk: &mut Desk, script: &str) -> String {
        let mut console = Console::new(Cursor::new(script.as_bytes()), Vec::new());
        run(&mut console, desk).expect("employee menu should succeed");
        String::from_utf8(console.into_writer()).unwrap()
    }

    fn desk_with_complaints() -> Desk {
        let mut desk = Desk::new();
        desk.submit("Late delivery", Customer::new("Alice", "555-1111", "alice@x.com"))
            .unwrap();
        desk.submit("Wrong item", Customer::new("Bob", "555-2222", "bob@x.com"))
            .unwrap();
        desk
    }

    #[test]
    fn unreplied_listing_enters_reply_sub_flow() {
        let mut desk = desk_with_complaints();

        let output = run_script(&mut desk, "2\n1\n1\nRefund issued\n2\n0\n");

        assert!(output.contains("Total unreplied: 2"));
        assert!(output.contains("Reply added successfully!"));
        assert!(desk.complaint(1).unwrap().replied);
        assert_eq!(desk.complaint(1).unwrap().reply, "Refund issued");
    }

    #[test]
    fn reply_to_unknown_id_is_reported_without_prompting_for_text() {
        let mut desk = desk_with_complaints();

        let output = run_script(&mut desk, "3\n99\n0\n");

        assert!(output.contains("Complaint ID 99 not found."));
        assert!(!output.contains("Enter reply details: "));
    }

    #[test]
    fn summaries_survive_a_display_pass() {
        let mut desk = desk_with_complaints();
        desk.add_summary(1, "carrier issue");
        desk.add_summary(2, "picking error");

        let output = run_script(&mut desk, "5\n5\n0\n");

        // Both display passes list both summaries; the stack is untouched.
        assert_eq!(output.matches("Summary: carrier issue").count(), 2);
        assert_eq!(output.matches("Summary: picking error").count(), 2);
        assert_eq!(desk.summaries().len(), 2);
    }

    #[test]
    fn summary_search_matches_content_substring() {
        let mut desk = desk_with_complaints();
        desk.add_summary(1, "carrier issue");
        desk.add_summary(2, "picking error");

        let output = run_script(&mut desk, "6\ndelivery\n0\n");

        assert!(output.contains("Search Results"));
        assert!(output.contains("Content: Late delivery"));
        assert!(!output.contains("Content: Wrong item"));
    }

    #[test]
    fn empty_urgent_list_prints_message() {
        let mut desk = desk_with_complaints();
        let output = run_script(&mut desk, "1\n0\n");
        assert!(output.contains("No urgent complaints."));
    }
}
