//! Admin menu flows: roster management and complaint escalation.

use std::io::{self, BufRead, Write};

use desk::{Desk, Employee};

use super::{employee, prompt::Console, terminal::Colorize};

/// Admin submenu loop, with a third menu level for the two sub-areas.
#[tracing::instrument(skip_all)]
pub(crate) fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
) -> io::Result<()> {
    loop {
        console.line("")?;
        console.line("======================")?;
        console.line("     Admin Menu")?;
        console.line("1) Employee List")?;
        console.line("2) Complaint List")?;
        console.line("0) Back")?;
        let Some(option) = console.prompt_number("Option: ")? else {
            return Ok(());
        };
        match option {
            1 => employee_menu(console, desk)?,
            2 => complaint_menu(console, desk)?,
            0 => return Ok(()),
            _ => console.line("Invalid option.")?,
        }
    }
}

fn employee_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
) -> io::Result<()> {
    loop {
        console.line("")?;
        console.line("==============================")?;
        console.line("    Employee List Menu")?;
        console.line("1) Add Employee")?;
        console.line("2) View Employees")?;
        console.line("3) Delete Employee")?;
        console.line("0) Back")?;
        let Some(option) = console.prompt_number("Option: ")? else {
            return Ok(());
        };
        match option {
            1 => add_employee(console, desk)?,
            2 => view_employees(console, desk)?,
            3 => delete_employee(console, desk)?,
            0 => return Ok(()),
            _ => console.line("Invalid option.")?,
        }
    }
}

fn complaint_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
) -> io::Result<()> {
    loop {
        console.line("")?;
        console.line("==============================")?;
        console.line("    Complaint List Menu")?;
        console.line("1) View Count")?;
        console.line("2) View Unreplied")?;
        console.line("3) Add Urgent")?;
        console.line("4) View Urgent")?;
        console.line("0) Back")?;
        let Some(option) = console.prompt_number("Option: ")? else {
            return Ok(());
        };
        match option {
            1 => console.line(&format!("Total complaints: {}", desk.total()))?,
            2 => employee::view_unreplied(console, desk, false)?,
            3 => add_urgent(console, desk)?,
            4 => employee::view_urgent(console, desk)?,
            0 => return Ok(()),
            _ => console.line("Invalid option.")?,
        }
    }
}

fn add_employee<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
) -> io::Result<()> {
    let Some(name) = console.prompt("Enter employee name: ")? else {
        return Ok(());
    };
    let Some(id) = console.prompt("Enter employee ID: ")? else {
        return Ok(());
    };
    let Some(password) = console.prompt("Enter employee password: ")? else {
        return Ok(());
    };
    desk.add_employee(Employee::new(name, id, password));
    console.line(&"Employee added successfully!".success())
}

fn view_employees<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &Desk,
) -> io::Result<()> {
    if desk.roster().is_empty() {
        return console.line("No employees found.");
    }
    console.line("Employees List")?;
    console.line("================")?;
    for employee in desk.roster().iter() {
        console.line(&format!("Name: {}", employee.name))?;
        console.line(&format!("ID: {}", employee.id))?;
        console.line(&format!("Password: {}", employee.password()))?;
        console.line("---------------")?;
    }
    console.line("================")
}

fn delete_employee<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
) -> io::Result<()> {
    let Some(id) = console.prompt("Enter employee ID to delete: ")? else {
        return Ok(());
    };
    if desk.remove_employee(&id) {
        console.line(&format!("Employee ID {id} deleted successfully!").success())
    } else {
        console.line(&format!("Employee ID {id} not found.").warning())
    }
}

fn add_urgent<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
) -> io::Result<()> {
    let Some(id) = console.prompt_number("Enter complaint ID for urgent: ")? else {
        return Ok(());
    };
    if desk.complaint(id).is_none() {
        return console.line(&format!("Complaint ID {id} not found.").warning());
    }
    let Some(priority) = console.prompt_number("Enter priority order (lower = higher priority): ")?
    else {
        return Ok(());
    };
    desk.mark_urgent(id, priority);
    console.line(&format!("Complaint ID {id} added to urgent queue.").success())
}
